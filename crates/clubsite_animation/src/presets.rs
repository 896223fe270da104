//! Reveal presets
//!
//! The closed set of named entry animations available to scroll-triggered
//! regions. Each preset pairs a hidden state with a visible state and picks
//! how the transition between them is timed.

use crate::easing::Easing;
use crate::keyframe::KeyframeProperties;
use crate::spring::SpringConfig;
use std::fmt::{Display, Formatter};

/// Distance in pixels that directional presets travel
pub const SLIDE_DISTANCE: f32 = 20.0;

/// Starting scale of the zoom preset
pub const ZOOM_FROM: f32 = 0.95;

/// Named reveal animation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RevealPreset {
    /// Opacity only
    Fade,
    /// Rise from below
    #[default]
    FadeUp,
    /// Drop from above
    FadeDown,
    /// Enter from the left
    FadeLeft,
    /// Enter from the right
    FadeRight,
    /// Grow from slightly smaller
    Zoom,
}

impl RevealPreset {
    /// Preset used when a name is not recognized
    pub const FALLBACK: RevealPreset = RevealPreset::FadeUp;

    /// Strict lookup by name
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim() {
            "fade" => Some(Self::Fade),
            "fade-up" => Some(Self::FadeUp),
            "fade-down" => Some(Self::FadeDown),
            "fade-left" => Some(Self::FadeLeft),
            "fade-right" => Some(Self::FadeRight),
            "zoom" => Some(Self::Zoom),
            _ => None,
        }
    }

    /// Lookup by name, substituting `fade-up` for unknown names
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_else(|| {
            tracing::debug!("unknown reveal preset {:?}, using {}", name, Self::FALLBACK);
            Self::FALLBACK
        })
    }

    /// Stable preset name
    pub fn name(self) -> &'static str {
        match self {
            Self::Fade => "fade",
            Self::FadeUp => "fade-up",
            Self::FadeDown => "fade-down",
            Self::FadeLeft => "fade-left",
            Self::FadeRight => "fade-right",
            Self::Zoom => "zoom",
        }
    }

    /// Full preset list
    pub fn all() -> &'static [RevealPreset] {
        const PRESETS: [RevealPreset; 6] = [
            RevealPreset::Fade,
            RevealPreset::FadeUp,
            RevealPreset::FadeDown,
            RevealPreset::FadeLeft,
            RevealPreset::FadeRight,
            RevealPreset::Zoom,
        ];
        &PRESETS
    }

    /// State the region is rendered in before it enters the viewport
    pub fn hidden(self) -> KeyframeProperties {
        let base = KeyframeProperties::opacity(0.0);
        match self {
            Self::Fade => base,
            Self::FadeUp => base.with_y(SLIDE_DISTANCE),
            Self::FadeDown => base.with_y(-SLIDE_DISTANCE),
            Self::FadeLeft => base.with_x(-SLIDE_DISTANCE),
            Self::FadeRight => base.with_x(SLIDE_DISTANCE),
            Self::Zoom => base.with_scale(ZOOM_FROM),
        }
    }

    /// State the region settles in once revealed
    pub fn visible(self) -> KeyframeProperties {
        let base = KeyframeProperties::opacity(1.0);
        match self {
            Self::Fade => base,
            Self::FadeUp | Self::FadeDown => base.with_y(0.0),
            Self::FadeLeft | Self::FadeRight => base.with_x(0.0),
            Self::Zoom => base.with_scale(1.0),
        }
    }

    /// Whether the preset is driven by a spring rather than a fixed duration
    pub fn is_spring(self) -> bool {
        matches!(
            self,
            Self::FadeUp | Self::FadeDown | Self::FadeLeft | Self::FadeRight
        )
    }

    /// Timing for this preset with the given duration and delay (seconds)
    pub fn transition(self, duration: f32, delay: f32) -> RevealTransition {
        if self.is_spring() {
            RevealTransition::Spring {
                config: SpringConfig::reveal(),
                delay,
            }
        } else {
            RevealTransition::Tween {
                duration,
                delay,
                easing: Easing::EASE,
            }
        }
    }
}

impl Display for RevealPreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How a reveal moves from its hidden to its visible state
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealTransition {
    /// Fixed duration with an easing curve
    Tween {
        duration: f32,
        delay: f32,
        easing: Easing,
    },
    /// Physically simulated; ends when the spring comes to rest
    Spring { config: SpringConfig, delay: f32 },
}

impl RevealTransition {
    pub fn delay(&self) -> f32 {
        match self {
            Self::Tween { delay, .. } | Self::Spring { delay, .. } => *delay,
        }
    }

    /// Deterministic end time (delay + duration), if the transition has one
    pub fn fixed_end(&self) -> Option<f32> {
        match self {
            Self::Tween {
                duration, delay, ..
            } => Some(delay + duration),
            Self::Spring { .. } => None,
        }
    }
}
