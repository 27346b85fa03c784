//! Slide animation timelines.
//!
//! A timeline is an ordered list of effects. Positions are 1-based, matching
//! the host engines; inserting at position `i` shifts every entry at `i` or
//! later one step back.

use super::shape::ShapeId;
use crate::common::{Error, Result};

/// What starts an effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerKind {
    /// Start on click
    #[default]
    OnClick,
    /// Start with previous effect
    WithPrevious,
    /// Start after previous effect (plus the trigger delay)
    AfterPrevious,
}

/// Visual effect of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EffectKind {
    /// Instant appear (or disappear, for exit entries)
    #[default]
    Appear,
    Fade,
    FlyIn,
    Zoom,
    /// Effect not covered above, by preset id
    Preset(u32),
}

/// One effect in a slide timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationEntry {
    /// Target shape
    pub shape: ShapeId,
    pub effect: EffectKind,
    pub trigger: TriggerKind,
    /// Delay in seconds before the effect starts
    pub delay: f32,
    /// Duration in seconds
    pub duration: f32,
    /// Exit effect (the shape disappears) rather than entrance
    pub exit: bool,
}

impl AnimationEntry {
    /// An on-click entrance effect with the host's default half-second duration.
    pub fn new(shape: ShapeId, effect: EffectKind) -> Self {
        Self {
            shape,
            effect,
            trigger: TriggerKind::OnClick,
            delay: 0.0,
            duration: 0.5,
            exit: false,
        }
    }

    /// A zero-duration, with-previous appear entry.
    pub fn appear(shape: ShapeId) -> Self {
        Self::new(shape, EffectKind::Appear)
            .with_trigger(TriggerKind::WithPrevious)
            .with_duration(0.0)
    }

    /// A zero-duration, with-previous disappear entry.
    pub fn disappear(shape: ShapeId) -> Self {
        Self {
            exit: true,
            ..Self::appear(shape)
        }
    }

    /// Set the trigger type.
    pub fn with_trigger(mut self, trigger: TriggerKind) -> Self {
        self.trigger = trigger;
        self
    }

    /// Set the trigger delay.
    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    /// Set the duration.
    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    /// Mark as exit effect.
    pub fn with_exit(mut self, exit: bool) -> Self {
        self.exit = exit;
        self
    }
}

/// Ordered effect list of a slide.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    entries: Vec<AnimationEntry>,
}

impl Timeline {
    /// Create a new empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the timeline is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in execution order.
    pub fn entries(&self) -> &[AnimationEntry] {
        &self.entries
    }

    /// Append an entry.
    pub fn push(&mut self, entry: AnimationEntry) {
        self.entries.push(entry);
    }

    /// Entry at 1-based `index`.
    pub fn get(&self, index: usize) -> Option<&AnimationEntry> {
        index.checked_sub(1).and_then(|i| self.entries.get(i))
    }

    /// Mutable entry at 1-based `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut AnimationEntry> {
        index.checked_sub(1).and_then(|i| self.entries.get_mut(i))
    }

    /// Insert at 1-based `index` (`1..=len + 1`), shifting later entries.
    pub fn insert(&mut self, index: usize, entry: AnimationEntry) -> Result<()> {
        if index == 0 || index > self.entries.len() + 1 {
            return Err(Error::EffectIndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        self.entries.insert(index - 1, entry);
        Ok(())
    }

    /// Drop every entry targeting `shape`.
    pub fn remove_shape(&mut self, shape: ShapeId) {
        self.entries.retain(|e| e.shape != shape);
    }

    /// Whether `shape` has an entrance effect.
    pub fn has_entry_animation(&self, shape: ShapeId) -> bool {
        self.entries.iter().any(|e| e.shape == shape && !e.exit)
    }

    /// Whether `shape` has an exit effect.
    pub fn has_exit_animation(&self, shape: ShapeId) -> bool {
        self.entries.iter().any(|e| e.shape == shape && e.exit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_shifts_later_entries() {
        let mut timeline = Timeline::new();
        timeline.push(AnimationEntry::new(ShapeId(1), EffectKind::Fade));
        timeline.push(AnimationEntry::new(ShapeId(2), EffectKind::Fade));

        timeline.insert(2, AnimationEntry::appear(ShapeId(3))).unwrap();
        let order: Vec<u32> = timeline.entries().iter().map(|e| e.shape.0).collect();
        assert_eq!(order, vec![1, 3, 2]);

        timeline.insert(4, AnimationEntry::appear(ShapeId(4))).unwrap();
        assert_eq!(timeline.get(4).map(|e| e.shape), Some(ShapeId(4)));
    }

    #[test]
    fn test_insert_out_of_range() {
        let mut timeline = Timeline::new();
        assert!(timeline.insert(0, AnimationEntry::appear(ShapeId(1))).is_err());
        assert!(timeline.insert(2, AnimationEntry::appear(ShapeId(1))).is_err());
        assert!(timeline.insert(1, AnimationEntry::appear(ShapeId(1))).is_ok());
    }

    #[test]
    fn test_entry_and_exit_detection() {
        let mut timeline = Timeline::new();
        timeline.push(AnimationEntry::disappear(ShapeId(7)));
        assert!(timeline.has_exit_animation(ShapeId(7)));
        assert!(!timeline.has_entry_animation(ShapeId(7)));

        timeline.remove_shape(ShapeId(7));
        assert!(timeline.is_empty());
    }
}
