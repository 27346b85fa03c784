//! Merging a run of slides into one animated slide.
//!
//! Every slide after the first is copied onto the first one (the anchor). Its
//! shapes appear, and the previous slide's shapes disappear, at the same point
//! in the anchor's timeline. That point is triggered the way the previous
//! slide used to advance, so the merged slide plays like the original run.

use super::animation::splice_effect;
use crate::common::{Result, Settings};
use crate::document::{AnimationEntry, DocumentHost, EffectTransition, SlideId, SlideTransition};
use tracing::{debug, warn};

/// Merge `slides` into the first of them.
///
/// The other slides are deleted. The operation is not atomic: a host failure
/// is returned immediately and leaves the document partially merged.
pub fn squash<H>(host: &mut H, slides: &[SlideId], settings: &Settings) -> Result<()>
where
    H: DocumentHost + ?Sized,
{
    let Some((&anchor, rest)) = slides.split_first() else {
        return Ok(());
    };

    let mut pending = EffectTransition::from_slide_transition(&host.transition(anchor)?);
    host.set_transition(anchor, SlideTransition::on_click())?;
    let mut previous_shapes = host.slide_shapes(anchor)?;

    for &slide in rest {
        debug!(%anchor, %slide, "merging slide");
        if settings.remove_indicators {
            host.delete_indicator(slide)?;
        }

        let shapes = host.slide_shapes(slide)?;
        let copied = if shapes.is_empty() {
            Vec::new()
        } else {
            let copied = host.copy_shapes_to_slide(&shapes, anchor)?;
            host.send_to_back(&copied)?;
            copied
        };

        let index = host.timeline(anchor)?.len() + 1;
        for &shape in &copied {
            let entry = AnimationEntry::appear(shape).with_duration(settings.effect_duration);
            splice_effect(host, anchor, entry, index)?;
        }
        for &shape in &previous_shapes {
            let entry = AnimationEntry::disappear(shape).with_duration(settings.effect_duration);
            splice_effect(host, anchor, entry, index)?;
        }

        if host.timeline(anchor)?.len() >= index {
            host.set_effect_timing(anchor, index, pending.trigger, pending.delay)?;
        } else {
            warn!(%anchor, %slide, index, "nothing spliced; slide advance not carried over");
        }

        previous_shapes = copied;
        pending = EffectTransition::from_slide_transition(&host.transition(slide)?);
        host.delete_slide(slide)?;
    }

    Ok(())
}

/// Sort slides into document order.
pub fn sort_by_index<H>(host: &H, slides: &mut [SlideId]) -> Result<()>
where
    H: DocumentHost + ?Sized,
{
    let mut keyed = slides
        .iter()
        .map(|&id| Ok((host.slide_index(id)?, id)))
        .collect::<Result<Vec<_>>>()?;
    keyed.sort_by_key(|&(index, _)| index);

    for (slot, (_, id)) in slides.iter_mut().zip(keyed) {
        *slot = id;
    }
    Ok(())
}
