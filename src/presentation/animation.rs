//! Splicing appear/disappear effects into slide timelines.

use crate::common::Result;
use crate::document::{AnimationEntry, DocumentHost, ShapeId, SlideId};
use tracing::debug;

/// Insert a zero-duration appear effect for `shape` at 1-based `index`.
///
/// Skipped when the shape already has an entrance effect on the slide.
/// Returns whether an effect was inserted.
pub fn add_appear<H>(host: &mut H, slide: SlideId, shape: ShapeId, index: usize) -> Result<bool>
where
    H: DocumentHost + ?Sized,
{
    splice_effect(host, slide, AnimationEntry::appear(shape), index)
}

/// Insert a zero-duration disappear effect for `shape` at 1-based `index`.
///
/// Skipped when the shape already has an exit effect on the slide.
/// Returns whether an effect was inserted.
pub fn add_disappear<H>(host: &mut H, slide: SlideId, shape: ShapeId, index: usize) -> Result<bool>
where
    H: DocumentHost + ?Sized,
{
    splice_effect(host, slide, AnimationEntry::disappear(shape), index)
}

/// Insert `entry` at `index` unless its shape already has an effect of the
/// same direction (entrance or exit).
pub fn splice_effect<H>(host: &mut H, slide: SlideId, entry: AnimationEntry, index: usize) -> Result<bool>
where
    H: DocumentHost + ?Sized,
{
    let present = if entry.exit {
        host.has_exit_animation(slide, entry.shape)?
    } else {
        host.has_entry_animation(slide, entry.shape)?
    };
    if present {
        debug!(shape = %entry.shape, exit = entry.exit, "authored effect kept");
        return Ok(false);
    }

    host.insert_effect(slide, index, entry)?;
    Ok(true)
}

/// Hide shapes during the slide show while keeping them in the editing view:
/// each shape appears and immediately disappears at the start of the timeline.
pub fn make_view_time_invisible<H>(host: &mut H, slide: SlideId, shapes: &[ShapeId]) -> Result<()>
where
    H: DocumentHost + ?Sized,
{
    for &shape in shapes {
        host.insert_effect(slide, 1, AnimationEntry::appear(shape))?;
        host.insert_effect(slide, 2, AnimationEntry::disappear(shape))?;
    }
    Ok(())
}
