//! In-memory document engine.
//!
//! [`MemoryDocument`] implements the full [`DocumentHost`] surface on plain
//! Rust collections: shapes live in an arena keyed by [`ShapeId`], each slide
//! keeps its stacking order as a back-to-front list, and the shape, text and
//! format clipboards are separate. It reproduces the host behaviours the
//! algorithms have to cope with:
//!
//! - a locked aspect ratio rescales the other dimension on every size write;
//! - groups and charts reject shape-format transfer (and charts rotation) with
//!   structural errors;
//! - pasting text replaces the target with exactly the clipboard characters,
//!   so pasting a range without a terminator drops the target's terminator;
//! - duplicating or pasting a default-named shape next to its namesake
//!   generates a fresh default name.

use super::host::DocumentHost;
use super::shape::{AutoShapeType, Geometry, ShapeFormat, ShapeId, ShapeInfo, ShapeKind};
use super::slide::{SlideId, SlideTransition};
use super::text::{FormattedText, TextBody, TextFormat, TextSpan};
use super::timeline::{AnimationEntry, Timeline, TriggerKind};
use crate::common::{Error, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Name given to delete-indicator marker shapes.
pub const INDICATOR_NAME: &str = "DeleteIndicator";

/// Description of a shape to add to a [`MemoryDocument`].
#[derive(Debug, Clone)]
pub struct NewShape {
    kind: ShapeKind,
    auto_shape_type: Option<AutoShapeType>,
    geometry: Geometry,
    name: Option<String>,
    text: Option<TextBody>,
    format: ShapeFormat,
    visible: bool,
}

impl NewShape {
    /// A shape of any kind. Text-capable kinds start with an empty text frame.
    pub fn of_kind(kind: ShapeKind, left: f32, top: f32, width: f32, height: f32) -> Self {
        let text = matches!(
            kind,
            ShapeKind::AutoShape | ShapeKind::TextBox | ShapeKind::Placeholder
        )
        .then(|| TextBody::new("", TextFormat::default()));

        Self {
            kind,
            auto_shape_type: None,
            geometry: Geometry::new(left, top, width, height),
            name: None,
            text,
            format: ShapeFormat::default(),
            visible: true,
        }
    }

    /// An auto shape with a preset geometry.
    pub fn auto_shape(preset: AutoShapeType, left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            auto_shape_type: Some(preset),
            ..Self::of_kind(ShapeKind::AutoShape, left, top, width, height)
        }
    }

    /// A text box holding `text`.
    pub fn text_box(left: f32, top: f32, width: f32, height: f32, text: &str) -> Self {
        Self::of_kind(ShapeKind::TextBox, left, top, width, height).with_text(text)
    }

    /// Builder method: explicit name instead of a generated default.
    pub fn named(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Builder method: text frame content, keeping the current text format.
    pub fn with_text(mut self, text: &str) -> Self {
        let format = self
            .text
            .as_ref()
            .map(|body| body.format_at(0).clone())
            .unwrap_or_default();
        self.text = Some(TextBody::new(text, format));
        self
    }

    /// Builder method: format for the whole text frame.
    pub fn with_text_format(mut self, format: TextFormat) -> Self {
        let text = self.text.as_ref().map(TextBody::text).unwrap_or_default();
        self.text = Some(TextBody::new(&text, format));
        self
    }

    /// Builder method: shape-level format.
    pub fn with_format(mut self, format: ShapeFormat) -> Self {
        self.format = format;
        self
    }

    /// Builder method: rotation in degrees.
    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.geometry.rotation = degrees;
        self
    }

    /// Builder method: aspect-ratio lock.
    pub fn with_locked_aspect(mut self, locked: bool) -> Self {
        self.geometry.lock_aspect_ratio = locked;
        self
    }

    /// Builder method: hidden shape.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

/// What an [`ExportRequest`] rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportTarget {
    Shapes(Vec<ShapeId>),
    Slide(SlideId),
}

/// A recorded export call. The in-memory engine does not rasterize.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRequest {
    pub target: ExportTarget,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone)]
struct ShapeRecord {
    slide: SlideId,
    name: String,
    kind: ShapeKind,
    auto_shape_type: Option<AutoShapeType>,
    geometry: Geometry,
    visible: bool,
    format: ShapeFormat,
    text: Option<TextBody>,
}

impl ShapeRecord {
    fn default_name_prefix(&self) -> &'static str {
        self.kind.default_name_prefix(self.auto_shape_type)
    }

    fn has_default_name(&self) -> bool {
        self.name
            .strip_prefix(self.default_name_prefix())
            .and_then(|rest| rest.strip_prefix(' '))
            .is_some_and(|n| !n.is_empty() && n.parse::<u32>().is_ok())
    }
}

#[derive(Debug, Clone)]
struct SlideRecord {
    id: SlideId,
    /// Back to front
    z_order: Vec<ShapeId>,
    timeline: Timeline,
    transition: SlideTransition,
    indicator: Option<ShapeId>,
}

/// Arena-backed presentation used as the reference [`DocumentHost`].
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    slide_width: f32,
    slide_height: f32,
    slides: Vec<SlideRecord>,
    shapes: BTreeMap<ShapeId, ShapeRecord>,
    next_shape: u32,
    next_slide: u32,
    next_name: u32,
    shape_clipboard: Vec<ShapeRecord>,
    text_clipboard: Option<FormattedText>,
    format_clipboard: Option<ShapeFormat>,
    exports: Vec<ExportRequest>,
}

impl Default for MemoryDocument {
    /// A 4:3 presentation, 720 x 540 points.
    fn default() -> Self {
        Self::new(720.0, 540.0)
    }
}

impl MemoryDocument {
    /// Create an empty presentation with the given slide size in points.
    pub fn new(slide_width: f32, slide_height: f32) -> Self {
        Self {
            slide_width,
            slide_height,
            slides: Vec::new(),
            shapes: BTreeMap::new(),
            next_shape: 1,
            next_slide: 1,
            next_name: 1,
            shape_clipboard: Vec::new(),
            text_clipboard: None,
            format_clipboard: None,
            exports: Vec::new(),
        }
    }

    /// Append a slide with an empty timeline and click-advance transition.
    pub fn add_slide(&mut self) -> SlideId {
        let id = SlideId(self.next_slide);
        self.next_slide += 1;
        self.slides.push(SlideRecord {
            id,
            z_order: Vec::new(),
            timeline: Timeline::new(),
            transition: SlideTransition::default(),
            indicator: None,
        });
        id
    }

    /// Add a shape at the front of `slide`.
    pub fn add_shape(&mut self, slide: SlideId, shape: NewShape) -> Result<ShapeId> {
        self.slide_record(slide)?;

        let mut record = ShapeRecord {
            slide,
            name: String::new(),
            kind: shape.kind,
            auto_shape_type: shape.auto_shape_type,
            geometry: shape.geometry,
            visible: shape.visible,
            format: shape.format,
            text: shape.text,
        };
        record.name = match shape.name {
            Some(name) => name,
            None => self.fresh_default_name(&record),
        };
        Ok(self.insert_record(record))
    }

    /// Add a delete-indicator marker to `slide`.
    pub fn add_indicator(&mut self, slide: SlideId) -> Result<ShapeId> {
        let marker = NewShape::auto_shape(AutoShapeType::Oval, 0.0, 0.0, 10.0, 10.0).named(INDICATOR_NAME);
        let id = self.add_shape(slide, marker)?;
        self.slide_record_mut(slide)?.indicator = Some(id);
        Ok(id)
    }

    /// Append an authored effect to a slide's timeline.
    pub fn push_effect(&mut self, slide: SlideId, entry: AnimationEntry) -> Result<()> {
        let len = self.slide_record(slide)?.timeline.len();
        self.insert_effect(slide, len + 1, entry)
    }

    /// First shape named `name` on `slide`, back to front.
    pub fn find_shape(&self, slide: SlideId, name: &str) -> Option<ShapeId> {
        let record = self.slide_record(slide).ok()?;
        record
            .z_order
            .iter()
            .copied()
            .find(|id| self.shapes.get(id).is_some_and(|s| s.name == name))
    }

    /// Shape-level format of a shape.
    pub fn shape_format(&self, id: ShapeId) -> Result<&ShapeFormat> {
        Ok(&self.record(id)?.format)
    }

    /// Full text of a shape.
    pub fn text(&self, id: ShapeId) -> Result<String> {
        Ok(self.text_body(id)?.text())
    }

    /// Format of the first character of the 0-indexed paragraph `index`.
    pub fn paragraph_format(&self, id: ShapeId, index: usize) -> Result<TextFormat> {
        let body = self.text_body(id)?;
        let ranges = body.paragraph_ranges();
        let (start, _) = ranges.get(index).copied().ok_or(Error::InvalidSpan {
            shape: id,
            start: index,
            end: index + 1,
            len: ranges.len(),
        })?;
        Ok(body.format_at(start).clone())
    }

    /// Export calls received so far.
    pub fn exports(&self) -> &[ExportRequest] {
        &self.exports
    }

    fn insert_record(&mut self, record: ShapeRecord) -> ShapeId {
        let id = ShapeId(self.next_shape);
        self.next_shape += 1;
        let slide = record.slide;
        self.shapes.insert(id, record);
        if let Some(s) = self.slides.iter_mut().find(|s| s.id == slide) {
            s.z_order.push(id);
        }
        id
    }

    fn fresh_default_name(&mut self, record: &ShapeRecord) -> String {
        let name = format!("{} {}", record.default_name_prefix(), self.next_name);
        self.next_name += 1;
        name
    }

    /// Name a copy of `record` gets when it lands on `slide`.
    fn copy_name(&mut self, record: &ShapeRecord, slide: SlideId) -> String {
        let collides = self
            .shapes
            .values()
            .any(|s| s.slide == slide && s.name == record.name);
        if collides && record.has_default_name() {
            self.fresh_default_name(record)
        } else {
            record.name.clone()
        }
    }

    fn record(&self, id: ShapeId) -> Result<&ShapeRecord> {
        self.shapes.get(&id).ok_or(Error::ShapeNotFound(id))
    }

    fn record_mut(&mut self, id: ShapeId) -> Result<&mut ShapeRecord> {
        self.shapes.get_mut(&id).ok_or(Error::ShapeNotFound(id))
    }

    fn slide_record(&self, id: SlideId) -> Result<&SlideRecord> {
        self.slides
            .iter()
            .find(|s| s.id == id)
            .ok_or(Error::SlideNotFound(id))
    }

    fn slide_record_mut(&mut self, id: SlideId) -> Result<&mut SlideRecord> {
        self.slides
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(Error::SlideNotFound(id))
    }

    fn text_body(&self, id: ShapeId) -> Result<&TextBody> {
        self.record(id)?.text.as_ref().ok_or(Error::NoTextFrame(id))
    }

    fn text_body_mut(&mut self, id: ShapeId) -> Result<&mut TextBody> {
        self.record_mut(id)?.text.as_mut().ok_or(Error::NoTextFrame(id))
    }

    /// Slide and 0-based stacking index of a shape.
    fn stacking(&self, id: ShapeId) -> Result<(SlideId, usize)> {
        let slide = self.record(id)?.slide;
        let index = self
            .slide_record(slide)?
            .z_order
            .iter()
            .position(|&s| s == id)
            .ok_or(Error::ShapeNotFound(id))?;
        Ok((slide, index))
    }

    fn reject_format_transfer(&self, id: ShapeId) -> Result<()> {
        match self.record(id)?.kind {
            ShapeKind::Group => Err(Error::PermissionDenied(format!(
                "format transfer is not available for group {id}"
            ))),
            ShapeKind::Chart => Err(Error::Platform(format!(
                "chart {id} does not support format pick-up"
            ))),
            _ => Ok(()),
        }
    }
}

impl DocumentHost for MemoryDocument {
    fn slide_size(&self) -> (f32, f32) {
        (self.slide_width, self.slide_height)
    }

    fn slides(&self) -> Vec<SlideId> {
        self.slides.iter().map(|s| s.id).collect()
    }

    fn slide_index(&self, slide: SlideId) -> Result<usize> {
        self.slides
            .iter()
            .position(|s| s.id == slide)
            .map(|i| i + 1)
            .ok_or(Error::SlideNotFound(slide))
    }

    fn shape(&self, id: ShapeId) -> Result<ShapeInfo> {
        let record = self.record(id)?;
        let (_, index) = self.stacking(id)?;
        Ok(ShapeInfo {
            id,
            name: record.name.clone(),
            kind: record.kind,
            auto_shape_type: record.auto_shape_type,
            geometry: record.geometry,
            z_position: index + 1,
            visible: record.visible,
            has_text_frame: record.text.is_some(),
        })
    }

    fn shape_slide(&self, id: ShapeId) -> Result<SlideId> {
        Ok(self.record(id)?.slide)
    }

    fn set_rotation(&mut self, id: ShapeId, degrees: f32) -> Result<()> {
        let record = self.record_mut(id)?;
        if record.kind == ShapeKind::Chart {
            return Err(Error::InvalidArgument(format!("chart {id} cannot be rotated")));
        }
        record.geometry.rotation = degrees;
        Ok(())
    }

    fn set_left(&mut self, id: ShapeId, left: f32) -> Result<()> {
        self.record_mut(id)?.geometry.left = left;
        Ok(())
    }

    fn set_top(&mut self, id: ShapeId, top: f32) -> Result<()> {
        self.record_mut(id)?.geometry.top = top;
        Ok(())
    }

    fn set_width(&mut self, id: ShapeId, width: f32) -> Result<()> {
        let geometry = &mut self.record_mut(id)?.geometry;
        if geometry.lock_aspect_ratio && geometry.width > 0.0 {
            geometry.height *= width / geometry.width;
        }
        geometry.width = width;
        Ok(())
    }

    fn set_height(&mut self, id: ShapeId, height: f32) -> Result<()> {
        let geometry = &mut self.record_mut(id)?.geometry;
        if geometry.lock_aspect_ratio && geometry.height > 0.0 {
            geometry.width *= height / geometry.height;
        }
        geometry.height = height;
        Ok(())
    }

    fn set_lock_aspect_ratio(&mut self, id: ShapeId, locked: bool) -> Result<()> {
        self.record_mut(id)?.geometry.lock_aspect_ratio = locked;
        Ok(())
    }

    fn set_name(&mut self, id: ShapeId, name: &str) -> Result<()> {
        self.record_mut(id)?.name = name.to_string();
        Ok(())
    }

    fn set_visible(&mut self, id: ShapeId, visible: bool) -> Result<()> {
        self.record_mut(id)?.visible = visible;
        Ok(())
    }

    fn delete_shape(&mut self, id: ShapeId) -> Result<()> {
        let record = self.shapes.remove(&id).ok_or(Error::ShapeNotFound(id))?;
        let slide = self.slide_record_mut(record.slide)?;
        slide.z_order.retain(|&s| s != id);
        slide.timeline.remove_shape(id);
        if slide.indicator == Some(id) {
            slide.indicator = None;
        }
        Ok(())
    }

    fn duplicate_shape(&mut self, id: ShapeId) -> Result<ShapeId> {
        let mut copy = self.record(id)?.clone();
        copy.name = self.copy_name(&copy, copy.slide);
        Ok(self.insert_record(copy))
    }

    fn cut_shape(&mut self, id: ShapeId) -> Result<()> {
        self.copy_shapes(&[id])?;
        self.delete_shape(id)
    }

    fn copy_shapes(&mut self, ids: &[ShapeId]) -> Result<()> {
        let records = ids
            .iter()
            .map(|&id| self.record(id).cloned())
            .collect::<Result<Vec<_>>>()?;
        self.shape_clipboard = records;
        Ok(())
    }

    fn paste_shapes(&mut self, slide: SlideId) -> Result<Vec<ShapeId>> {
        self.slide_record(slide)?;
        if self.shape_clipboard.is_empty() {
            return Err(Error::ClipboardEmpty);
        }

        let clipboard = self.shape_clipboard.clone();
        let mut pasted = Vec::with_capacity(clipboard.len());
        for mut record in clipboard {
            record.name = self.copy_name(&record, slide);
            record.slide = slide;
            pasted.push(self.insert_record(record));
        }
        Ok(pasted)
    }

    fn pick_up_format(&mut self, id: ShapeId) -> Result<()> {
        self.reject_format_transfer(id)?;
        self.format_clipboard = Some(self.record(id)?.format.clone());
        Ok(())
    }

    fn apply_format(&mut self, id: ShapeId) -> Result<()> {
        self.reject_format_transfer(id)?;
        let format = self.format_clipboard.clone().ok_or(Error::ClipboardEmpty)?;
        self.record_mut(id)?.format = format;
        Ok(())
    }

    fn step_forward(&mut self, id: ShapeId) -> Result<usize> {
        let (slide, index) = self.stacking(id)?;
        let z_order = &mut self.slide_record_mut(slide)?.z_order;
        if index + 1 < z_order.len() {
            z_order.swap(index, index + 1);
            return Ok(index + 2);
        }
        Ok(index + 1)
    }

    fn step_backward(&mut self, id: ShapeId) -> Result<usize> {
        let (slide, index) = self.stacking(id)?;
        let z_order = &mut self.slide_record_mut(slide)?.z_order;
        if index > 0 {
            z_order.swap(index, index - 1);
            return Ok(index);
        }
        Ok(1)
    }

    fn send_to_back(&mut self, ids: &[ShapeId]) -> Result<()> {
        let Some(&first) = ids.first() else {
            return Ok(());
        };
        let slide = self.record(first)?.slide;
        for &id in ids {
            if self.record(id)?.slide != slide {
                return Err(Error::InvalidArgument(format!(
                    "{id} is not on {slide}; a shape range must belong to one slide"
                )));
            }
        }

        let z_order = &mut self.slide_record_mut(slide)?.z_order;
        let (mut moved, rest): (Vec<ShapeId>, Vec<ShapeId>) =
            z_order.iter().partition(|id| ids.contains(*id));
        moved.extend(rest);
        *z_order = moved;
        Ok(())
    }

    fn text_frame(&self, shape: ShapeId) -> Result<Option<TextSpan>> {
        Ok(self
            .record(shape)?
            .text
            .as_ref()
            .map(|body| TextSpan::new(shape, 0, body.len())))
    }

    fn paragraphs(&self, shape: ShapeId) -> Result<Vec<TextSpan>> {
        Ok(self
            .text_body(shape)?
            .paragraph_ranges()
            .into_iter()
            .map(|(start, len)| TextSpan::new(shape, start, len))
            .collect())
    }

    fn span_text(&self, span: TextSpan) -> Result<String> {
        self.text_body(span.shape)?.slice(span.shape, span.start, span.len)
    }

    fn set_span_text(&mut self, span: TextSpan, text: &str) -> Result<TextSpan> {
        let inserted = self
            .text_body_mut(span.shape)?
            .replace_text(span.shape, span.start, span.len, text)?;
        Ok(TextSpan::new(span.shape, span.start, inserted))
    }

    fn copy_span(&mut self, span: TextSpan) -> Result<()> {
        let content = self
            .text_body(span.shape)?
            .formatted_slice(span.shape, span.start, span.len)?;
        self.text_clipboard = Some(content);
        Ok(())
    }

    fn paste_span_native(&mut self, span: TextSpan) -> Result<TextSpan> {
        let content = self.text_clipboard.clone().ok_or(Error::ClipboardEmpty)?;
        let inserted = self
            .text_body_mut(span.shape)?
            .replace_formatted(span.shape, span.start, span.len, &content)?;
        Ok(TextSpan::new(span.shape, span.start, inserted))
    }

    fn slide_shapes(&self, slide: SlideId) -> Result<Vec<ShapeId>> {
        Ok(self.slide_record(slide)?.z_order.clone())
    }

    fn transition(&self, slide: SlideId) -> Result<SlideTransition> {
        Ok(self.slide_record(slide)?.transition)
    }

    fn set_transition(&mut self, slide: SlideId, transition: SlideTransition) -> Result<()> {
        self.slide_record_mut(slide)?.transition = transition;
        Ok(())
    }

    fn delete_indicator(&mut self, slide: SlideId) -> Result<()> {
        if let Some(indicator) = self.slide_record_mut(slide)?.indicator.take()
            && self.shapes.contains_key(&indicator)
        {
            self.delete_shape(indicator)?;
        }
        Ok(())
    }

    fn delete_slide(&mut self, slide: SlideId) -> Result<()> {
        let index = self.slide_index(slide)? - 1;
        let record = self.slides.remove(index);
        for id in record.z_order {
            self.shapes.remove(&id);
        }
        Ok(())
    }

    fn timeline(&self, slide: SlideId) -> Result<Vec<AnimationEntry>> {
        Ok(self.slide_record(slide)?.timeline.entries().to_vec())
    }

    fn insert_effect(&mut self, slide: SlideId, index: usize, entry: AnimationEntry) -> Result<()> {
        if self.record(entry.shape)?.slide != slide {
            return Err(Error::InvalidArgument(format!(
                "{} does not belong to {slide}",
                entry.shape
            )));
        }
        self.slide_record_mut(slide)?.timeline.insert(index, entry)
    }

    fn set_effect_timing(&mut self, slide: SlideId, index: usize, trigger: TriggerKind, delay: f32) -> Result<()> {
        let timeline = &mut self.slide_record_mut(slide)?.timeline;
        let len = timeline.len();
        let entry = timeline
            .get_mut(index)
            .ok_or(Error::EffectIndexOutOfRange { index, len })?;
        entry.trigger = trigger;
        entry.delay = delay;
        Ok(())
    }

    fn export_shapes(&mut self, ids: &[ShapeId], path: &Path, width: u32, height: u32) -> Result<()> {
        for &id in ids {
            self.record(id)?;
        }
        self.exports.push(ExportRequest {
            target: ExportTarget::Shapes(ids.to_vec()),
            path: path.to_path_buf(),
            width,
            height,
        });
        Ok(())
    }

    fn export_slide(&mut self, slide: SlideId, path: &Path, width: u32, height: u32) -> Result<()> {
        self.slide_record(slide)?;
        self.exports.push(ExportRequest {
            target: ExportTarget::Slide(slide),
            path: path.to_path_buf(),
            width,
            height,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with_rects(count: usize) -> (MemoryDocument, SlideId, Vec<ShapeId>) {
        let mut doc = MemoryDocument::default();
        let slide = doc.add_slide();
        let ids = (0..count)
            .map(|i| {
                doc.add_shape(
                    slide,
                    NewShape::auto_shape(AutoShapeType::Rectangle, i as f32 * 10.0, 0.0, 50.0, 20.0),
                )
                .unwrap()
            })
            .collect();
        (doc, slide, ids)
    }

    #[test]
    fn test_default_names_and_z_positions() {
        let (doc, _, ids) = doc_with_rects(2);
        let first = doc.shape(ids[0]).unwrap();
        let second = doc.shape(ids[1]).unwrap();
        assert_eq!(first.name, "Rectangle 1");
        assert_eq!(first.z_position, 1);
        assert_eq!(second.z_position, 2);
        assert!(first.has_text_frame);
    }

    #[test]
    fn test_steps_stop_at_extremes() {
        let (mut doc, _, ids) = doc_with_rects(3);
        assert_eq!(doc.step_forward(ids[2]).unwrap(), 3);
        assert_eq!(doc.step_backward(ids[0]).unwrap(), 1);
        assert_eq!(doc.step_forward(ids[0]).unwrap(), 2);
        assert_eq!(doc.z_position(ids[1]).unwrap(), 1);
    }

    #[test]
    fn test_locked_aspect_rescales() {
        let mut doc = MemoryDocument::default();
        let slide = doc.add_slide();
        let id = doc
            .add_shape(
                slide,
                NewShape::of_kind(ShapeKind::Picture, 0.0, 0.0, 100.0, 50.0).with_locked_aspect(true),
            )
            .unwrap();
        doc.set_width(id, 200.0).unwrap();
        let geometry = doc.shape(id).unwrap().geometry;
        assert_eq!((geometry.width, geometry.height), (200.0, 100.0));
        assert!(!doc.shape(id).unwrap().has_text_frame);
    }

    #[test]
    fn test_duplicate_naming() {
        let mut doc = MemoryDocument::default();
        let slide = doc.add_slide();
        let generated = doc
            .add_shape(slide, NewShape::auto_shape(AutoShapeType::Oval, 0.0, 0.0, 1.0, 1.0))
            .unwrap();
        let custom = doc
            .add_shape(slide, NewShape::text_box(0.0, 0.0, 1.0, 1.0, "x").named("Title"))
            .unwrap();

        let copy = doc.duplicate_shape(generated).unwrap();
        assert_ne!(doc.shape(copy).unwrap().name, doc.shape(generated).unwrap().name);
        let copy = doc.duplicate_shape(custom).unwrap();
        assert_eq!(doc.shape(copy).unwrap().name, "Title");
    }

    #[test]
    fn test_structural_rejections() {
        let mut doc = MemoryDocument::default();
        let slide = doc.add_slide();
        let group = doc
            .add_shape(slide, NewShape::of_kind(ShapeKind::Group, 0.0, 0.0, 1.0, 1.0))
            .unwrap();
        let chart = doc
            .add_shape(slide, NewShape::of_kind(ShapeKind::Chart, 0.0, 0.0, 1.0, 1.0))
            .unwrap();

        assert!(doc.pick_up_format(group).unwrap_err().is_structural());
        assert!(doc.apply_format(chart).unwrap_err().is_structural());
        assert!(doc.set_rotation(chart, 45.0).unwrap_err().is_structural());
        assert_eq!(doc.text_frame(group).unwrap(), None);
    }

    #[test]
    fn test_send_to_back_keeps_relative_order() {
        let (mut doc, slide, ids) = doc_with_rects(4);
        doc.send_to_back(&[ids[3], ids[2]]).unwrap();
        assert_eq!(doc.slide_shapes(slide).unwrap(), vec![ids[2], ids[3], ids[0], ids[1]]);
    }

    #[test]
    fn test_paste_drops_terminator_of_replaced_span() {
        let mut doc = MemoryDocument::default();
        let slide = doc.add_slide();
        let source = doc.add_shape(slide, NewShape::text_box(0.0, 0.0, 1.0, 1.0, "last")).unwrap();
        let target = doc
            .add_shape(slide, NewShape::text_box(0.0, 0.0, 1.0, 1.0, "one\rtwo"))
            .unwrap();

        let src = doc.paragraphs(source).unwrap()[0];
        doc.copy_span(src).unwrap();
        let first = doc.paragraphs(target).unwrap()[0];
        let pasted = doc.paste_span_native(first).unwrap();

        assert_eq!(doc.span_text(pasted).unwrap(), "last");
        assert_eq!(doc.text(target).unwrap(), "lasttwo");
    }

    #[test]
    fn test_delete_shape_drops_its_effects() {
        let (mut doc, slide, ids) = doc_with_rects(2);
        doc.push_effect(slide, AnimationEntry::appear(ids[0])).unwrap();
        doc.push_effect(slide, AnimationEntry::appear(ids[1])).unwrap();
        doc.delete_shape(ids[0]).unwrap();

        let timeline = doc.timeline(slide).unwrap();
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline[0].shape, ids[1]);
        assert!(matches!(doc.shape(ids[0]), Err(Error::ShapeNotFound(_))));
    }

    #[test]
    fn test_effect_must_target_own_slide() {
        let mut doc = MemoryDocument::default();
        let a = doc.add_slide();
        let b = doc.add_slide();
        let shape = doc.add_shape(a, NewShape::text_box(0.0, 0.0, 1.0, 1.0, "x")).unwrap();
        let err = doc.insert_effect(b, 1, AnimationEntry::appear(shape)).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_delete_indicator() {
        let mut doc = MemoryDocument::default();
        let slide = doc.add_slide();
        let marker = doc.add_indicator(slide).unwrap();
        assert_eq!(doc.find_shape(slide, INDICATOR_NAME), Some(marker));

        doc.delete_indicator(slide).unwrap();
        assert!(doc.slide_shapes(slide).unwrap().is_empty());
        // no indicator left: still fine
        doc.delete_indicator(slide).unwrap();
    }
}
