//! Paragraph-level text synchronization.
//!
//! Rich formatting can only be moved by the host's copy and native paste, and
//! a native paste replaces the target with exactly the copied characters. When
//! the copied range has no paragraph terminator, the target loses its own, so
//! format-only synchronization rewrites the original text (and terminator)
//! over the pasted range afterwards.

use crate::common::{Error, Result};
use crate::document::{DocumentHost, PARAGRAPH_TERMINATOR, ShapeId, TextSpan};
use tracing::debug;

/// Synchronize one text range from `reference` to `candidate`.
///
/// - `copy_format`: paste the reference's formatted text over the candidate.
/// - `copy_content`: overwrite the candidate's text with the reference text.
///
/// With `copy_format` alone the candidate's text, including whether it ends
/// with a paragraph terminator, is unchanged. Returns the span now covering the
/// candidate range.
pub fn sync_text_range<H>(
    host: &mut H,
    reference: TextSpan,
    candidate: TextSpan,
    copy_content: bool,
    copy_format: bool,
) -> Result<TextSpan>
where
    H: DocumentHost + ?Sized,
{
    let original = host.span_text(candidate)?;
    let had_terminator = original.ends_with(PARAGRAPH_TERMINATOR);
    let stripped = original
        .strip_suffix(PARAGRAPH_TERMINATOR)
        .unwrap_or(&original)
        .to_string();

    let mut span = candidate;

    if copy_format {
        host.copy_span(reference)?;
        span = host.paste_span_native(span)?;
    }

    if copy_content {
        let text = host.span_text(reference)?;
        span = host.set_span_text(span, &text)?;
    } else if copy_format {
        // the paste may have dropped or added a terminator; rewrite either way
        if had_terminator && !host.span_text(span)?.ends_with(PARAGRAPH_TERMINATOR) {
            debug!(shape = %span.shape, "native paste dropped the paragraph terminator");
        }
        let mut restored = stripped;
        if had_terminator {
            restored.push(PARAGRAPH_TERMINATOR);
        }
        span = host.set_span_text(span, &restored)?;
    }

    Ok(span)
}

/// Replace a shape's text with `lines`, one paragraph each.
pub fn set_text<H, I, S>(host: &mut H, shape: ShapeId, lines: I) -> Result<TextSpan>
where
    H: DocumentHost + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let frame = host.text_frame(shape)?.ok_or(Error::NoTextFrame(shape))?;

    let mut text = String::new();
    for (i, line) in lines.into_iter().enumerate() {
        if i > 0 {
            text.push(PARAGRAPH_TERMINATOR);
        }
        text.push_str(line.as_ref());
    }
    host.set_span_text(frame, &text)
}

/// Text of each paragraph, 0-indexed, without terminators.
pub fn paragraph_texts<H>(host: &H, shape: ShapeId) -> Result<Vec<String>>
where
    H: DocumentHost + ?Sized,
{
    host.paragraphs(shape)?
        .into_iter()
        .map(|span| {
            let mut text = host.span_text(span)?;
            if text.ends_with(PARAGRAPH_TERMINATOR) {
                text.pop();
            }
            Ok(text)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RGBColor;
    use crate::document::{MemoryDocument, NewShape, SlideId, TextFormat};

    fn fixture(reference: &str, candidate: &str) -> (MemoryDocument, ShapeId, ShapeId) {
        let mut doc = MemoryDocument::default();
        let slide: SlideId = doc.add_slide();
        let red = TextFormat::default().with_color(RGBColor::new(255, 0, 0)).with_bold(true);
        let r = doc
            .add_shape(slide, NewShape::text_box(0.0, 0.0, 100.0, 40.0, reference).with_text_format(red))
            .unwrap();
        let c = doc
            .add_shape(slide, NewShape::text_box(0.0, 50.0, 100.0, 40.0, candidate))
            .unwrap();
        (doc, r, c)
    }

    #[test]
    fn test_format_only_keeps_terminator_when_paste_drops_it() {
        // reference's only paragraph has no terminator
        let (mut doc, r, c) = fixture("head", "first\rsecond");
        let reference = doc.paragraphs(r).unwrap()[0];
        let candidate = doc.paragraphs(c).unwrap()[0];

        let span = sync_text_range(&mut doc, reference, candidate, false, true).unwrap();

        assert_eq!(doc.text(c).unwrap(), "first\rsecond");
        assert_eq!(doc.span_text(span).unwrap(), "first\r");
        assert!(doc.paragraph_format(c, 0).unwrap().bold);
        assert!(!doc.paragraph_format(c, 1).unwrap().bold);
    }

    #[test]
    fn test_format_only_does_not_add_terminator() {
        let (mut doc, r, c) = fixture("a\rb", "only");
        let reference = doc.paragraphs(r).unwrap()[0];
        let candidate = doc.paragraphs(c).unwrap()[0];

        sync_text_range(&mut doc, reference, candidate, false, true).unwrap();

        assert_eq!(doc.text(c).unwrap(), "only");
        assert_eq!(
            doc.paragraph_format(c, 0).unwrap().color,
            Some(RGBColor::new(255, 0, 0))
        );
    }

    #[test]
    fn test_content_copy_is_verbatim() {
        let (mut doc, r, c) = fixture("new words\rtail", "old\rrest");
        let reference = doc.paragraphs(r).unwrap()[0];
        let candidate = doc.paragraphs(c).unwrap()[0];

        sync_text_range(&mut doc, reference, candidate, true, false).unwrap();
        assert_eq!(doc.text(c).unwrap(), "new words\rrest");
        assert!(!doc.paragraph_format(c, 0).unwrap().bold);
    }

    #[test]
    fn test_nothing_requested_is_noop() {
        let (mut doc, r, c) = fixture("abc", "xyz\r");
        let reference = doc.text_frame(r).unwrap().unwrap();
        let candidate = doc.text_frame(c).unwrap().unwrap();
        sync_text_range(&mut doc, reference, candidate, false, false).unwrap();
        assert_eq!(doc.text(c).unwrap(), "xyz\r");
    }

    #[test]
    fn test_set_text_and_paragraph_texts() {
        let (mut doc, _, c) = fixture("", "");
        set_text(&mut doc, c, ["one", "two", "three"]).unwrap();
        assert_eq!(doc.text(c).unwrap(), "one\rtwo\rthree");
        assert_eq!(paragraph_texts(&doc, c).unwrap(), vec!["one", "two", "three"]);
    }
}
