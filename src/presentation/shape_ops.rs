//! Small shape utilities built on the host surface.

use crate::common::{Error, Result};
use crate::document::{DocumentHost, ShapeId, SlideId};
use std::path::Path;
use tracing::debug;

/// Slides are measured at 72 points per inch, exported pictures at 96 dpi.
pub const PICTURE_EXPORTING_RATIO: f32 = 96.0 / 72.0;

/// Re-create a shape that the host reports in a broken state by cutting it and
/// pasting it back into its slide. Returns the id of the re-created shape.
///
/// The shape keeps its name but loses its timeline entries and moves to the
/// front of its slide.
pub fn corruption_correction<H>(host: &mut H, shape: ShapeId) -> Result<ShapeId>
where
    H: DocumentHost + ?Sized,
{
    let slide = host.shape_slide(shape)?;
    host.cut_shape(shape)?;
    let pasted = host.paste_shapes(slide)?;
    let replacement = pasted
        .first()
        .copied()
        .ok_or_else(|| Error::Platform(format!("pasting {shape} back into {slide} produced no shape")))?;
    debug!(old = %shape, new = %replacement, "shape re-created");
    Ok(replacement)
}

/// Whether the id no longer resolves to a live shape.
pub fn is_corrupted<H>(host: &H, shape: ShapeId) -> bool
where
    H: DocumentHost + ?Sized,
{
    host.shape(shape).is_err()
}

/// Whether the shape still carries a host-generated name.
///
/// Hosts only rename duplicates of default-named shapes, so the shape is
/// duplicated, the names compared and the duplicate deleted again.
pub fn has_default_name<H>(host: &mut H, shape: ShapeId) -> Result<bool>
where
    H: DocumentHost + ?Sized,
{
    let name = host.shape(shape)?.name;
    let duplicate = host.duplicate_shape(shape)?;
    let renamed = host.shape(duplicate)?.name != name;
    host.delete_shape(duplicate)?;
    Ok(renamed)
}

pub fn is_hidden<H>(host: &H, shape: ShapeId) -> Result<bool>
where
    H: DocumentHost + ?Sized,
{
    Ok(!host.shape(shape)?.visible)
}

/// Render shapes to an image scaled to fit the slide size in points.
pub fn export_shapes<H, P>(host: &mut H, shapes: &[ShapeId], path: P) -> Result<()>
where
    H: DocumentHost + ?Sized,
    P: AsRef<Path>,
{
    let (width, height) = slide_pixels(host, 1.0);
    host.export_shapes(shapes, path.as_ref(), width, height)
}

/// Render a slide to an image at 96 dpi.
pub fn export_slide<H, P>(host: &mut H, slide: SlideId, path: P) -> Result<()>
where
    H: DocumentHost + ?Sized,
    P: AsRef<Path>,
{
    let (width, height) = slide_pixels(host, PICTURE_EXPORTING_RATIO);
    host.export_slide(slide, path.as_ref(), width, height)
}

/// Slide size scaled by `ratio`, truncated to whole pixels.
fn slide_pixels<H: DocumentHost + ?Sized>(host: &H, ratio: f32) -> (u32, u32) {
    let (width, height) = host.slide_size();
    ((width * ratio) as u32, (height * ratio) as u32)
}
