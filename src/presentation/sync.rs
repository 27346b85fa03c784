//! Shape-to-shape synchronization.
//!
//! [`sync_shape`] transfers geometry, shape format and text through the host's
//! property setters. Some shape kinds (groups, charts) reject those setters;
//! [`sync_whole_shape`] recovers from such structural failures by replacing the
//! candidate with a copy of the reference.

use super::geometry::copy_basic_geometry;
use super::text::sync_text_range;
use crate::common::{Error, Result};
use crate::document::{DocumentHost, ShapeId, SlideId};
use tracing::{debug, warn};

/// Which aspects [`sync_shape`] transfers. Everything is on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncOptions {
    /// Rotation, size and position
    pub basic: bool,
    /// Shape-level format (fill, line, ...)
    pub format: bool,
    /// Text content
    pub text_content: bool,
    /// Text formatting
    pub text_format: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            basic: true,
            format: true,
            text_content: true,
            text_format: true,
        }
    }
}

impl SyncOptions {
    /// Geometry only.
    pub fn basic_only() -> Self {
        Self {
            basic: true,
            format: false,
            text_content: false,
            text_format: false,
        }
    }

    /// Text formatting only; text content stays as it is.
    pub fn text_format_only() -> Self {
        Self {
            basic: false,
            format: false,
            text_content: false,
            text_format: true,
        }
    }
}

/// How [`sync_whole_shape`] got the candidate in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Properties were transferred onto the existing candidate
    Synced(ShapeId),
    /// The candidate was replaced by a renamed copy of the reference
    Recreated(ShapeId),
}

impl SyncOutcome {
    /// The shape now standing in for the candidate.
    pub fn shape(&self) -> ShapeId {
        match *self {
            SyncOutcome::Synced(id) | SyncOutcome::Recreated(id) => id,
        }
    }
}

/// Make `candidate` look like `reference`.
///
/// Text is synchronized paragraph by paragraph. When the candidate has more
/// paragraphs than the reference, the extra ones take the reference's last
/// paragraph. With `text_content` the candidate's text ends up identical to
/// the reference's.
pub fn sync_shape<H>(host: &mut H, reference: ShapeId, candidate: ShapeId, options: SyncOptions) -> Result<()>
where
    H: DocumentHost + ?Sized,
{
    if options.basic {
        copy_basic_geometry(host, reference, candidate)?;
    }

    if options.format {
        host.pick_up_format(reference)?;
        host.apply_format(candidate)?;
    }

    if !(options.text_content || options.text_format) {
        return Ok(());
    }
    let (Some(reference_frame), Some(candidate_frame)) = (host.text_frame(reference)?, host.text_frame(candidate)?)
    else {
        debug!(%reference, %candidate, "text sync skipped: missing text frame");
        return Ok(());
    };

    if options.text_content {
        let text = host.span_text(reference_frame)?;
        host.set_span_text(candidate_frame, &text)?;
    }

    let reference_count = host.paragraphs(reference)?.len();
    let candidate_count = host.paragraphs(candidate)?.len();
    if reference_count == 0 {
        return Ok(());
    }

    if options.text_format {
        // base format for the whole frame: the reference's last paragraph
        let last = host.paragraphs(reference)?.last().copied();
        if let (Some(last), Some(frame)) = (last, host.text_frame(candidate)?) {
            let original = host.span_text(frame)?;
            let span = sync_text_range(host, last, frame, true, true)?;
            host.set_span_text(span, &original)?;
        }
    }

    for i in 0..candidate_count {
        let Some(&reference_span) = host.paragraphs(reference)?.get(i.min(reference_count - 1)) else {
            break;
        };
        let Some(&candidate_span) = host.paragraphs(candidate)?.get(i) else {
            break;
        };
        sync_text_range(
            host,
            reference_span,
            candidate_span,
            options.text_content,
            options.text_format,
        )?;
    }

    Ok(())
}

/// Fully synchronize `candidate` with `reference`, whatever their kinds.
///
/// If direct synchronization fails structurally, the candidate is deleted and
/// a copy of the reference is pasted into `candidate_slide` under the
/// candidate's name. Both paths count as success. Non-structural failures are
/// returned as-is.
pub fn sync_whole_shape<H>(
    host: &mut H,
    reference: ShapeId,
    candidate: ShapeId,
    candidate_slide: SlideId,
) -> Result<SyncOutcome>
where
    H: DocumentHost + ?Sized,
{
    let name = host.shape(candidate)?.name;

    match sync_shape(host, reference, candidate, SyncOptions::default()) {
        Ok(()) => Ok(SyncOutcome::Synced(candidate)),
        Err(err) if err.is_structural() => {
            warn!(%reference, %candidate, error = %err, "direct sync rejected; re-creating candidate");

            host.delete_shape(candidate)?;
            let replacement = host
                .copy_shapes_to_slide(&[reference], candidate_slide)?
                .first()
                .copied()
                .ok_or_else(|| Error::Platform(format!("pasting {reference} produced no shape")))?;
            host.set_name(replacement, &name)?;
            Ok(SyncOutcome::Recreated(replacement))
        },
        Err(err) => Err(err),
    }
}
