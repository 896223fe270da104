//! Staggered delays for lists of reveals

use crate::reveal::RevealConfig;

/// Default delay between consecutive items, in seconds
pub const DEFAULT_STEP: f32 = 0.1;

/// Order in which list items start revealing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StaggerDirection {
    /// First to last
    #[default]
    Forward,
    /// Last to first
    Reverse,
    /// From the middle outward
    FromCenter,
}

/// Configuration for staggered list reveals
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaggerConfig {
    /// Delay between each item's reveal start (seconds)
    pub step: f32,
    pub direction: StaggerDirection,
    /// Cap the stagger at the first N positions
    pub limit: Option<usize>,
}

impl StaggerConfig {
    pub fn new(step: f32) -> Self {
        Self {
            step: step.max(0.0),
            direction: StaggerDirection::Forward,
            limit: None,
        }
    }

    pub fn reverse(mut self) -> Self {
        self.direction = StaggerDirection::Reverse;
        self
    }

    pub fn from_center(mut self) -> Self {
        self.direction = StaggerDirection::FromCenter;
        self
    }

    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Delay in seconds for the item at `index` out of `total`
    pub fn delay_for_index(&self, index: usize, total: usize) -> f32 {
        let position = match self.direction {
            StaggerDirection::Forward => index,
            StaggerDirection::Reverse => total.saturating_sub(1).saturating_sub(index),
            StaggerDirection::FromCenter => index.abs_diff(total / 2),
        };

        let position = match self.limit {
            Some(limit) => position.min(limit),
            None => position,
        };

        self.step * position as f32
    }

    /// Apply the stagger delay for `index` on top of a base config's delay
    pub fn apply(&self, base: RevealConfig, index: usize, total: usize) -> RevealConfig {
        let delay = base.delay + self.delay_for_index(index, total);
        base.delay(delay)
    }
}

impl Default for StaggerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STEP)
    }
}
