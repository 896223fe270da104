//! Visual property sets for reveal animations
//!
//! A `KeyframeProperties` describes one end of a reveal: the hidden state a
//! region starts in, or the visible state it animates to. Unset properties
//! resolve to their identity values.

/// Properties that a reveal can animate
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct KeyframeProperties {
    /// Opacity (0.0 to 1.0)
    pub opacity: Option<f32>,
    /// Translation X in pixels
    pub translate_x: Option<f32>,
    /// Translation Y in pixels
    pub translate_y: Option<f32>,
    /// Uniform scale factor
    pub scale: Option<f32>,
}

impl KeyframeProperties {
    /// Create properties with only opacity set
    pub fn opacity(value: f32) -> Self {
        Self {
            opacity: Some(value),
            ..Default::default()
        }
    }

    /// Builder: set horizontal offset only
    pub fn with_x(mut self, x: f32) -> Self {
        self.translate_x = Some(x);
        self
    }

    /// Builder: set vertical offset only
    pub fn with_y(mut self, y: f32) -> Self {
        self.translate_y = Some(y);
        self
    }

    /// Builder: set uniform scale
    pub fn with_scale(mut self, value: f32) -> Self {
        self.scale = Some(value);
        self
    }

    /// Interpolate toward `other`. A property set on only one side is
    /// interpolated from/to its identity value.
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            opacity: lerp_opt(self.opacity, other.opacity, 1.0, t),
            translate_x: lerp_opt(self.translate_x, other.translate_x, 0.0, t),
            translate_y: lerp_opt(self.translate_y, other.translate_y, 0.0, t),
            scale: lerp_opt(self.scale, other.scale, 1.0, t),
        }
    }

    pub fn resolved_opacity(&self) -> f32 {
        self.opacity.unwrap_or(1.0)
    }

    pub fn resolved_translate(&self) -> (f32, f32) {
        (
            self.translate_x.unwrap_or(0.0),
            self.translate_y.unwrap_or(0.0),
        )
    }

    pub fn resolved_scale(&self) -> f32 {
        self.scale.unwrap_or(1.0)
    }

    /// CSS declarations for these properties (`opacity` and `transform`)
    pub fn to_css(&self) -> String {
        let (tx, ty) = self.resolved_translate();
        format!(
            "opacity: {}; transform: translate({}px, {}px) scale({});",
            self.resolved_opacity(),
            tx,
            ty,
            self.resolved_scale()
        )
    }
}

fn lerp_opt(a: Option<f32>, b: Option<f32>, identity: f32, t: f32) -> Option<f32> {
    match (a, b) {
        (None, None) => None,
        (a, b) => {
            let a = a.unwrap_or(identity);
            let b = b.unwrap_or(identity);
            Some(a + (b - a) * t)
        }
    }
}
