//! Capability surface of the host document engine.
//!
//! The algorithms in [`crate::presentation`] never touch document storage
//! directly; they drive a [`DocumentHost`]. Every method takes stable ids and
//! re-resolves them, so callers must not cache [`ShapeInfo`] snapshots or
//! [`TextSpan`]s across calls that mutate the document.

use super::shape::{ShapeId, ShapeInfo};
use super::slide::{SlideId, SlideTransition};
use super::text::TextSpan;
use super::timeline::{AnimationEntry, TriggerKind};
use crate::common::Result;
use std::path::Path;

/// Operations a presentation engine must provide.
pub trait DocumentHost {
    // ---- document -------------------------------------------------------

    /// Slide width and height in document units.
    fn slide_size(&self) -> (f32, f32);

    /// Slides in document order.
    fn slides(&self) -> Vec<SlideId>;

    /// 1-based position of `slide` in the document.
    fn slide_index(&self, slide: SlideId) -> Result<usize>;

    // ---- shape query ----------------------------------------------------

    /// Current state of a shape.
    fn shape(&self, id: ShapeId) -> Result<ShapeInfo>;

    /// Slide owning the shape.
    fn shape_slide(&self, id: ShapeId) -> Result<SlideId>;

    // ---- shape mutation -------------------------------------------------

    fn set_rotation(&mut self, id: ShapeId, degrees: f32) -> Result<()>;
    fn set_left(&mut self, id: ShapeId, left: f32) -> Result<()>;
    fn set_top(&mut self, id: ShapeId, top: f32) -> Result<()>;
    /// Honours the aspect lock: a locked shape rescales its height too.
    fn set_width(&mut self, id: ShapeId, width: f32) -> Result<()>;
    /// Honours the aspect lock: a locked shape rescales its width too.
    fn set_height(&mut self, id: ShapeId, height: f32) -> Result<()>;
    fn set_lock_aspect_ratio(&mut self, id: ShapeId, locked: bool) -> Result<()>;
    fn set_name(&mut self, id: ShapeId, name: &str) -> Result<()>;
    fn set_visible(&mut self, id: ShapeId, visible: bool) -> Result<()>;

    /// Delete a shape together with its timeline entries.
    fn delete_shape(&mut self, id: ShapeId) -> Result<()>;

    /// Duplicate a shape in its own slide, returning the copy.
    fn duplicate_shape(&mut self, id: ShapeId) -> Result<ShapeId>;

    /// Move a shape to the shape clipboard, removing it from its slide.
    fn cut_shape(&mut self, id: ShapeId) -> Result<()>;

    /// Copy shapes to the shape clipboard.
    fn copy_shapes(&mut self, ids: &[ShapeId]) -> Result<()>;

    /// Paste the shape clipboard into `slide`, frontmost, returning the new shapes in order.
    fn paste_shapes(&mut self, slide: SlideId) -> Result<Vec<ShapeId>>;

    /// Copy shapes into `slide`.
    fn copy_shapes_to_slide(&mut self, ids: &[ShapeId], slide: SlideId) -> Result<Vec<ShapeId>> {
        self.copy_shapes(ids)?;
        self.paste_shapes(slide)
    }

    /// Put the shape-level format of `id` on the format clipboard.
    fn pick_up_format(&mut self, id: ShapeId) -> Result<()>;

    /// Apply the format clipboard to `id`.
    fn apply_format(&mut self, id: ShapeId) -> Result<()>;

    // ---- z-order --------------------------------------------------------

    /// Move one step toward the front, returning the resulting 1-based position.
    /// The position is unchanged when the shape is already frontmost.
    fn step_forward(&mut self, id: ShapeId) -> Result<usize>;

    /// Move one step toward the back, returning the resulting 1-based position.
    /// The position is unchanged when the shape is already backmost.
    fn step_backward(&mut self, id: ShapeId) -> Result<usize>;

    /// Send shapes of one slide to the back, keeping their relative order.
    fn send_to_back(&mut self, ids: &[ShapeId]) -> Result<()>;

    /// 1-based stacking position; larger is further forward.
    fn z_position(&self, id: ShapeId) -> Result<usize> {
        Ok(self.shape(id)?.z_position)
    }

    // ---- text -----------------------------------------------------------

    /// Span over the whole text frame, or `None` when the shape has no text frame.
    fn text_frame(&self, shape: ShapeId) -> Result<Option<TextSpan>>;

    /// Paragraph spans, 0-indexed. Errors when the shape has no text frame.
    fn paragraphs(&self, shape: ShapeId) -> Result<Vec<TextSpan>>;

    fn span_text(&self, span: TextSpan) -> Result<String>;

    /// Replace the span's text, returning the span now covering the new text.
    fn set_span_text(&mut self, span: TextSpan, text: &str) -> Result<TextSpan>;

    /// Copy the span's formatted text to the text clipboard.
    fn copy_span(&mut self, span: TextSpan) -> Result<()>;

    /// Replace the span with the text clipboard in the host's native format,
    /// returning the span now covering the pasted text.
    fn paste_span_native(&mut self, span: TextSpan) -> Result<TextSpan>;

    // ---- slides ---------------------------------------------------------

    /// Shapes of a slide, back to front.
    fn slide_shapes(&self, slide: SlideId) -> Result<Vec<ShapeId>>;

    fn transition(&self, slide: SlideId) -> Result<SlideTransition>;

    fn set_transition(&mut self, slide: SlideId, transition: SlideTransition) -> Result<()>;

    /// Remove the delete-indicator marker from a slide, if it has one.
    fn delete_indicator(&mut self, slide: SlideId) -> Result<()>;

    fn delete_slide(&mut self, slide: SlideId) -> Result<()>;

    // ---- timeline -------------------------------------------------------

    /// Timeline entries of a slide, in execution order.
    fn timeline(&self, slide: SlideId) -> Result<Vec<AnimationEntry>>;

    /// Insert at 1-based `index`, shifting later entries.
    fn insert_effect(&mut self, slide: SlideId, index: usize, entry: AnimationEntry) -> Result<()>;

    /// Overwrite trigger kind and delay of the entry at 1-based `index`.
    fn set_effect_timing(&mut self, slide: SlideId, index: usize, trigger: TriggerKind, delay: f32) -> Result<()>;

    fn has_entry_animation(&self, slide: SlideId, shape: ShapeId) -> Result<bool> {
        Ok(self.timeline(slide)?.iter().any(|e| e.shape == shape && !e.exit))
    }

    fn has_exit_animation(&self, slide: SlideId, shape: ShapeId) -> Result<bool> {
        Ok(self.timeline(slide)?.iter().any(|e| e.shape == shape && e.exit))
    }

    // ---- export ---------------------------------------------------------

    /// Render shapes to an image file scaled to fit `width` x `height`.
    fn export_shapes(&mut self, ids: &[ShapeId], path: &Path, width: u32, height: u32) -> Result<()>;

    /// Render a slide to an image file.
    fn export_slide(&mut self, slide: SlideId, path: &Path, width: u32, height: u32) -> Result<()>;
}
