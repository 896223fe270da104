//! One-shot reveal bindings
//!
//! A `RevealBinding` is the per-region state machine behind scroll-triggered
//! animation:
//!
//! ```text
//! Hidden --(visible fraction >= threshold)--> Entering --(transition done)--> Visible
//! ```
//!
//! There is no way back to `Hidden`. Once a region has entered it stays
//! revealed for the rest of its mounted lifetime, no matter how often it
//! scrolls out of and back into view.

use crate::easing::Easing;
use crate::keyframe::KeyframeProperties;
use crate::observer::{meets_threshold, normalize_threshold};
use crate::presets::{RevealPreset, RevealTransition};
use crate::spring::Spring;

/// Default fixed duration in seconds
pub const DEFAULT_DURATION: f32 = 0.5;

/// Default fraction of the region that must be visible
pub const DEFAULT_THRESHOLD: f32 = 0.1;

/// Reveal configuration for one region
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    pub preset: RevealPreset,
    /// Seconds (used by tweened presets)
    pub duration: f32,
    /// Seconds before the transition starts
    pub delay: f32,
    /// Visible fraction (0.0 to 1.0) that counts as entered
    pub threshold: f32,
}

impl RevealConfig {
    pub fn new(preset: RevealPreset) -> Self {
        Self {
            preset,
            ..Default::default()
        }
    }

    /// Build from a preset name, falling back to `fade-up` for unknown names
    pub fn named(name: &str) -> Self {
        Self::new(RevealPreset::from_name(name))
    }

    pub fn duration(mut self, seconds: f32) -> Self {
        self.duration = seconds.max(0.0);
        self
    }

    pub fn delay(mut self, seconds: f32) -> Self {
        self.delay = seconds.max(0.0);
        self
    }

    /// Out-of-range values are clamped; NaN falls back to the default
    pub fn threshold(mut self, fraction: f32) -> Self {
        self.threshold = normalize_threshold(fraction);
        self
    }

    pub fn transition(&self) -> RevealTransition {
        self.preset.transition(self.duration, self.delay)
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            preset: RevealPreset::default(),
            duration: DEFAULT_DURATION,
            delay: 0.0,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Lifecycle phase of a reveal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPhase {
    Hidden,
    Entering,
    Visible,
}

/// In-flight transition driving an `Entering` binding
#[derive(Clone, Debug)]
enum RevealMotion {
    Tween {
        elapsed: f32,
        delay: f32,
        duration: f32,
        easing: Easing,
    },
    Spring {
        elapsed: f32,
        delay: f32,
        spring: Spring,
    },
}

impl RevealMotion {
    fn start(transition: RevealTransition) -> Self {
        match transition {
            RevealTransition::Tween {
                duration,
                delay,
                easing,
            } => Self::Tween {
                elapsed: 0.0,
                delay,
                duration,
                easing,
            },
            RevealTransition::Spring { config, delay } => {
                let mut spring = Spring::new(config, 0.0);
                spring.set_target(1.0);
                Self::Spring {
                    elapsed: 0.0,
                    delay,
                    spring,
                }
            }
        }
    }

    fn advance(&mut self, dt: f32) {
        match self {
            Self::Tween { elapsed, .. } => *elapsed += dt,
            Self::Spring {
                elapsed,
                delay,
                spring,
            } => {
                let before = *elapsed;
                *elapsed += dt;
                // Only the part of this frame past the delay moves the spring
                let active = (*elapsed - before.max(*delay)).max(0.0);
                spring.step(active);
            }
        }
    }

    /// Progress from hidden (0.0) to visible (1.0)
    fn progress(&self) -> f32 {
        match self {
            Self::Tween {
                elapsed,
                delay,
                duration,
                easing,
            } => {
                let local = elapsed - delay;
                if local <= 0.0 {
                    0.0
                } else if *duration <= 0.0 || local >= *duration {
                    1.0
                } else {
                    easing.apply(local / duration)
                }
            }
            Self::Spring { spring, .. } => spring.value(),
        }
    }

    fn is_finished(&self) -> bool {
        match self {
            Self::Tween {
                elapsed,
                delay,
                duration,
                ..
            } => *elapsed >= delay + duration,
            Self::Spring {
                elapsed,
                delay,
                spring,
            } => *elapsed >= *delay && spring.is_settled(),
        }
    }
}

/// Reveal state for a single mounted region
#[derive(Clone, Debug)]
pub struct RevealBinding {
    config: RevealConfig,
    phase: RevealPhase,
    motion: Option<RevealMotion>,
}

impl RevealBinding {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            phase: RevealPhase::Hidden,
            motion: None,
        }
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Latched once the region has crossed its threshold
    pub fn has_entered(&self) -> bool {
        self.phase != RevealPhase::Hidden
    }

    /// Feed a visibility report. Returns true only on the call that
    /// triggers the reveal.
    pub fn observe(&mut self, fraction: f32) -> bool {
        if self.has_entered() || !meets_threshold(fraction, self.config.threshold) {
            return false;
        }
        self.enter();
        true
    }

    /// Reveal without a visibility report (used when observation is unavailable)
    pub fn force_enter(&mut self) -> bool {
        if self.has_entered() {
            return false;
        }
        self.enter();
        true
    }

    fn enter(&mut self) {
        tracing::debug!(
            preset = %self.config.preset,
            delay = self.config.delay,
            "reveal triggered"
        );
        self.phase = RevealPhase::Entering;
        self.motion = Some(RevealMotion::start(self.config.transition()));
    }

    /// Advance the transition by `dt` seconds. Returns true if this call
    /// completed the reveal.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.phase != RevealPhase::Entering {
            return false;
        }
        let Some(motion) = self.motion.as_mut() else {
            return false;
        };

        motion.advance(dt);
        if motion.is_finished() {
            self.phase = RevealPhase::Visible;
            self.motion = None;
            tracing::trace!(preset = %self.config.preset, "reveal finished");
            return true;
        }
        false
    }

    /// Current visual state
    pub fn properties(&self) -> KeyframeProperties {
        let preset = self.config.preset;
        match (self.phase, &self.motion) {
            (RevealPhase::Hidden, _) => preset.hidden(),
            (RevealPhase::Entering, Some(motion)) => {
                preset.hidden().lerp(&preset.visible(), motion.progress())
            }
            _ => preset.visible(),
        }
    }
}
