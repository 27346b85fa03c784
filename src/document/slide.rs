//! Slide identity and slide-to-slide transition settings.

use super::timeline::TriggerKind;
use std::fmt;

/// Stable identifier of a slide inside a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlideId(pub u32);

impl fmt::Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slide#{}", self.0)
    }
}

/// How a slide advances to the next one during a slide show.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideTransition {
    /// Advance on mouse click
    pub advance_on_click: bool,
    /// Advance automatically after `advance_time`
    pub advance_on_time: bool,
    /// Auto-advance delay in seconds
    pub advance_time: f32,
}

impl Default for SlideTransition {
    fn default() -> Self {
        Self {
            advance_on_click: true,
            advance_on_time: false,
            advance_time: 0.0,
        }
    }
}

impl SlideTransition {
    /// Advance on click only.
    pub fn on_click() -> Self {
        Self::default()
    }

    /// Advance automatically after `seconds`.
    pub fn after(seconds: f32) -> Self {
        Self {
            advance_on_click: false,
            advance_on_time: true,
            advance_time: seconds,
        }
    }
}

/// Trigger and delay that reproduce a slide transition as an effect trigger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectTransition {
    pub trigger: TriggerKind,
    /// Trigger delay in seconds
    pub delay: f32,
}

impl EffectTransition {
    /// Only the advance mode is carried over, not the visual transition.
    pub fn from_slide_transition(transition: &SlideTransition) -> Self {
        if transition.advance_on_time {
            Self {
                trigger: TriggerKind::AfterPrevious,
                delay: transition.advance_time,
            }
        } else {
            Self {
                trigger: TriggerKind::OnClick,
                delay: 0.0,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effect_transition_from_slide() {
        let timed = EffectTransition::from_slide_transition(&SlideTransition::after(2.0));
        assert_eq!(timed.trigger, TriggerKind::AfterPrevious);
        assert_eq!(timed.delay, 2.0);

        // advance_time is ignored unless timed advance is on
        let click = EffectTransition::from_slide_transition(&SlideTransition {
            advance_time: 3.0,
            ..SlideTransition::on_click()
        });
        assert_eq!(click.trigger, TriggerKind::OnClick);
        assert_eq!(click.delay, 0.0);
    }
}
