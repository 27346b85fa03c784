//! Pairing shapes across two equivalent shape collections.

use super::geometry::{same_position, same_size, same_type};
use crate::common::config::DEFAULT_MATCH_BLUR_RADIUS;
use crate::common::{Result, Settings};
use crate::document::{DocumentHost, ShapeId, ShapeInfo};
use tracing::{debug, warn};

/// First reference with the candidate's type, its position within the default
/// blur radius, and exactly its size.
pub fn find_best_match<'a>(candidate: &ShapeInfo, references: &'a [ShapeInfo]) -> Option<&'a ShapeInfo> {
    find_best_match_within(candidate, references, DEFAULT_MATCH_BLUR_RADIUS)
}

/// [`find_best_match`] with an explicit position tolerance.
///
/// References are scanned in order, so ties resolve to the earliest one.
pub fn find_best_match_within<'a>(
    candidate: &ShapeInfo,
    references: &'a [ShapeInfo],
    blur: f32,
) -> Option<&'a ShapeInfo> {
    references.iter().find(|&reference| {
        same_type(Some(reference), Some(candidate))
            && same_position(Some(reference), Some(candidate), false, blur)
            && same_size(Some(reference), Some(candidate), true, 0.0)
    })
}

/// Give each candidate the name of its matching reference.
///
/// Typically run after a bulk copy, whose pasted shapes got generated names.
/// Collections of different sizes are left untouched, since pairing them
/// would be a guess. Returns the number of renamed candidates.
pub fn sync_shape_range<H>(
    host: &mut H,
    references: &[ShapeId],
    candidates: &[ShapeId],
    settings: &Settings,
) -> Result<usize>
where
    H: DocumentHost + ?Sized,
{
    if references.len() != candidates.len() {
        warn!(
            references = references.len(),
            candidates = candidates.len(),
            "shape ranges differ in size; names left unchanged"
        );
        return Ok(0);
    }

    let references = references
        .iter()
        .map(|&id| host.shape(id))
        .collect::<Result<Vec<_>>>()?;

    let mut renamed = 0;
    for &id in candidates {
        let candidate = host.shape(id)?;
        let Some(reference) = find_best_match_within(&candidate, &references, settings.match_blur_radius) else {
            debug!(shape = %id, name = %candidate.name, "no matching reference shape");
            continue;
        };
        host.set_name(id, &reference.name)?;
        renamed += 1;
    }
    Ok(renamed)
}
