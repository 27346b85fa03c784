//! Text ranges, character formatting and the in-memory text body.
//!
//! Text is addressed by character spans, the way host engines expose text
//! ranges: a span covers `len` characters starting at `start` inside one
//! shape's text frame. Paragraphs are separated by [`PARAGRAPH_TERMINATOR`]; a
//! paragraph span includes its terminator, except for the last paragraph.

use super::shape::ShapeId;
use crate::common::{Error, RGBColor, Result};
use smallvec::SmallVec;

/// Character that ends a paragraph.
pub const PARAGRAPH_TERMINATOR: char = '\r';

/// A character range inside a shape's text frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextSpan {
    pub shape: ShapeId,
    /// Offset of the first character
    pub start: usize,
    /// Number of characters
    pub len: usize,
}

impl TextSpan {
    pub fn new(shape: ShapeId, start: usize, len: usize) -> Self {
        Self { shape, start, len }
    }

    /// Offset one past the last character.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Character formatting. Opaque to the algorithms, which only ever move it
/// between ranges through the host's copy/paste.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextFormat {
    pub font: Option<String>,
    /// Font size in points
    pub size: Option<f32>,
    pub bold: bool,
    pub italic: bool,
    pub color: Option<RGBColor>,
    pub bullet: Option<char>,
}

impl TextFormat {
    /// Builder method: set font.
    pub fn with_font(mut self, font: &str) -> Self {
        self.font = Some(font.to_string());
        self
    }

    /// Builder method: set font size.
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    /// Builder method: set bold.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Builder method: set text color.
    pub fn with_color(mut self, color: RGBColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Builder method: set bullet character.
    pub fn with_bullet(mut self, bullet: char) -> Self {
        self.bullet = Some(bullet);
        self
    }
}

/// Formatted characters, as moved through the text clipboard.
pub type FormattedText = Vec<(char, TextFormat)>;

/// Storage for one text frame: characters with a per-character format.
///
/// Formats are interned, so a body with a handful of distinct styles stays
/// compact regardless of its length.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBody {
    chars: Vec<char>,
    /// Index into `styles`, one per character
    formats: Vec<usize>,
    styles: SmallVec<[TextFormat; 4]>,
    /// Style used when the body is empty
    default_style: usize,
}

impl TextBody {
    /// Create a body holding `text` in a single format.
    pub fn new(text: &str, format: TextFormat) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let formats = vec![0; chars.len()];
        let mut styles = SmallVec::new();
        styles.push(format);
        Self {
            chars,
            formats,
            styles,
            default_style: 0,
        }
    }

    /// Number of characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The full text.
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// Text covered by `[start, start + len)`.
    pub fn slice(&self, shape: ShapeId, start: usize, len: usize) -> Result<String> {
        self.check_range(shape, start, len)?;
        Ok(self.chars[start..start + len].iter().collect())
    }

    /// Characters and formats covered by `[start, start + len)`.
    pub fn formatted_slice(&self, shape: ShapeId, start: usize, len: usize) -> Result<FormattedText> {
        self.check_range(shape, start, len)?;
        Ok((start..start + len)
            .map(|i| (self.chars[i], self.styles[self.formats[i]].clone()))
            .collect())
    }

    /// Paragraph ranges as `(start, len)`, in order.
    ///
    /// An empty body has no paragraphs. A body ending with a terminator has a
    /// trailing empty paragraph.
    pub fn paragraph_ranges(&self) -> Vec<(usize, usize)> {
        if self.chars.is_empty() {
            return Vec::new();
        }

        let mut ranges = Vec::new();
        let mut start = 0;
        for (i, &c) in self.chars.iter().enumerate() {
            if c == PARAGRAPH_TERMINATOR {
                ranges.push((start, i + 1 - start));
                start = i + 1;
            }
        }
        ranges.push((start, self.chars.len() - start));
        ranges
    }

    /// Format of the character at `index`, or the body default past the end.
    pub fn format_at(&self, index: usize) -> &TextFormat {
        let style = self.formats.get(index).copied().unwrap_or(self.default_style);
        &self.styles[style]
    }

    /// Replace `[start, start + len)` with plain text.
    ///
    /// The inserted characters take the format of the first replaced
    /// character; for an empty range, the preceding character's format.
    /// Returns the number of inserted characters.
    pub fn replace_text(&mut self, shape: ShapeId, start: usize, len: usize, text: &str) -> Result<usize> {
        self.check_range(shape, start, len)?;

        let style = if len > 0 {
            self.formats[start]
        } else if start > 0 {
            self.formats[start - 1]
        } else {
            self.formats.first().copied().unwrap_or(self.default_style)
        };

        let inserted: Vec<char> = text.chars().collect();
        let count = inserted.len();
        self.chars.splice(start..start + len, inserted);
        self.formats.splice(start..start + len, std::iter::repeat_n(style, count));
        if self.chars.is_empty() {
            self.default_style = style;
        }
        Ok(count)
    }

    /// Replace `[start, start + len)` with formatted characters.
    /// Returns the number of inserted characters.
    pub fn replace_formatted(
        &mut self,
        shape: ShapeId,
        start: usize,
        len: usize,
        content: &[(char, TextFormat)],
    ) -> Result<usize> {
        self.check_range(shape, start, len)?;

        let styles: Vec<usize> = content.iter().map(|(_, f)| self.intern(f)).collect();
        self.chars.splice(start..start + len, content.iter().map(|(c, _)| *c));
        self.formats.splice(start..start + len, styles);
        Ok(content.len())
    }

    fn intern(&mut self, format: &TextFormat) -> usize {
        match self.styles.iter().position(|s| s == format) {
            Some(index) => index,
            None => {
                self.styles.push(format.clone());
                self.styles.len() - 1
            },
        }
    }

    fn check_range(&self, shape: ShapeId, start: usize, len: usize) -> Result<()> {
        if start + len > self.chars.len() {
            return Err(Error::InvalidSpan {
                shape,
                start,
                end: start + len,
                len: self.chars.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHAPE: ShapeId = ShapeId(1);

    #[test]
    fn test_paragraph_ranges() {
        let body = TextBody::new("ab\rc\r", TextFormat::default());
        assert_eq!(body.paragraph_ranges(), vec![(0, 3), (3, 2), (5, 0)]);

        let single = TextBody::new("abc", TextFormat::default());
        assert_eq!(single.paragraph_ranges(), vec![(0, 3)]);

        let empty = TextBody::new("", TextFormat::default());
        assert!(empty.paragraph_ranges().is_empty());
    }

    #[test]
    fn test_replace_text_inherits_first_replaced_format() {
        let bold = TextFormat::default().with_bold(true);
        let mut body = TextBody::new("xy", TextFormat::default());
        body.replace_formatted(SHAPE, 0, 1, &[('B', bold.clone())]).unwrap();
        assert_eq!(body.text(), "By");

        let inserted = body.replace_text(SHAPE, 0, 2, "hello").unwrap();
        assert_eq!(inserted, 5);
        assert_eq!(body.text(), "hello");
        assert!((0..5).all(|i| body.format_at(i) == &bold));
    }

    #[test]
    fn test_replace_empty_range_uses_preceding_format() {
        let italic = TextFormat {
            italic: true,
            ..Default::default()
        };
        let mut body = TextBody::new("ab", italic.clone());
        body.replace_text(SHAPE, 2, 0, "c").unwrap();
        assert_eq!(body.text(), "abc");
        assert_eq!(body.format_at(2), &italic);
    }

    #[test]
    fn test_out_of_bounds_span() {
        let body = TextBody::new("abc", TextFormat::default());
        let err = body.slice(SHAPE, 2, 5).unwrap_err();
        assert!(matches!(err, Error::InvalidSpan { end: 7, len: 3, .. }));
    }

    #[test]
    fn test_clearing_keeps_style_for_later_text() {
        let red = TextFormat::default().with_color(RGBColor::new(255, 0, 0));
        let mut body = TextBody::new("abc", red.clone());
        body.replace_text(SHAPE, 0, 3, "").unwrap();
        assert!(body.is_empty());
        body.replace_text(SHAPE, 0, 0, "z").unwrap();
        assert_eq!(body.format_at(0), &red);
    }
}
