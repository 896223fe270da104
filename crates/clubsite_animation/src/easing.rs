//! Easing curves for tweened reveals

/// Easing curve applied to tween progress
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    EaseOutQuad,
    EaseOutCubic,
    EaseOutQuart,
    EaseInOutCubic,
    /// CSS `cubic-bezier(x1, y1, x2, y2)`
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// CSS `ease`, the default for tweened reveals
    pub const EASE: Easing = Easing::CubicBezier(0.25, 0.1, 0.25, 1.0);

    /// CSS `ease-out`
    pub const EASE_OUT: Easing = Easing::CubicBezier(0.0, 0.0, 0.58, 1.0);

    /// Map linear progress (clamped to 0.0..=1.0) onto the curve
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::EaseOutQuad => 1.0 - (1.0 - t).powi(2),
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseOutQuart => 1.0 - (1.0 - t).powi(4),
            Easing::EaseInOutCubic if t < 0.5 => 4.0 * t.powi(3),
            Easing::EaseInOutCubic => 1.0 - (2.0 - 2.0 * t).powi(3) / 2.0,
            Easing::CubicBezier(x1, y1, x2, y2) => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let x = Axis::new(x1 as f64, x2 as f64);
                let y = Axis::new(y1 as f64, y2 as f64);
                y.sample(x.solve(t as f64)) as f32
            }
        }
    }
}

/// One axis of a cubic bezier anchored at (0, 0) and (1, 1),
/// stored as polynomial coefficients `a*s^3 + b*s^2 + c*s`
struct Axis {
    a: f64,
    b: f64,
    c: f64,
}

impl Axis {
    fn new(p1: f64, p2: f64) -> Self {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        Self { a: 1.0 - c - b, b, c }
    }

    fn sample(&self, s: f64) -> f64 {
        ((self.a * s + self.b) * s + self.c) * s
    }

    fn slope(&self, s: f64) -> f64 {
        (3.0 * self.a * s + 2.0 * self.b) * s + self.c
    }

    /// Parameter `s` at which this axis reaches `target`
    fn solve(&self, target: f64) -> f64 {
        const EPSILON: f64 = 1e-7;

        // Newton's method converges in a few steps for sane control points
        let mut s = target;
        for _ in 0..8 {
            let err = self.sample(s) - target;
            if err.abs() < EPSILON {
                return s;
            }
            let slope = self.slope(s);
            if slope.abs() < EPSILON {
                break;
            }
            s -= err / slope;
        }

        // Flat spots: fall back to bisection, which always terminates
        let (mut lo, mut hi) = (0.0, 1.0);
        s = target;
        for _ in 0..32 {
            let value = self.sample(s);
            if (value - target).abs() < EPSILON {
                break;
            }
            if value < target {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_exact() {
        for easing in [
            Easing::Linear,
            Easing::EaseOutQuad,
            Easing::EaseOutCubic,
            Easing::EaseOutQuart,
            Easing::EaseInOutCubic,
            Easing::EASE,
            Easing::EASE_OUT,
        ] {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?}");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?}");
        }
    }

    #[test]
    fn test_css_ease_is_front_loaded() {
        // `ease` reaches ~80% of its output by the halfway point
        let mid = Easing::EASE.apply(0.5);
        assert!(mid > 0.75 && mid < 0.85, "got {mid}");
    }

    #[test]
    fn test_bezier_is_monotonic() {
        let mut last = 0.0;
        for step in 1..=20 {
            let value = Easing::EASE.apply(step as f32 / 20.0);
            assert!(value >= last, "dropped at step {step}");
            last = value;
        }
    }

    #[test]
    fn test_in_out_is_symmetric() {
        let a = Easing::EaseInOutCubic.apply(0.25);
        let b = Easing::EaseInOutCubic.apply(0.75);
        assert!((a + b - 1.0).abs() < 1e-6);
        assert!((Easing::EaseInOutCubic.apply(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_linear_bezier_matches_linear() {
        let curve = Easing::CubicBezier(0.25, 0.25, 0.75, 0.75);
        for t in [0.1_f32, 0.3, 0.5, 0.9] {
            assert!((curve.apply(t) - t).abs() < 1e-4);
        }
    }

    #[test]
    fn test_progress_is_clamped() {
        assert_eq!(Easing::Linear.apply(-1.0), 0.0);
        assert_eq!(Easing::Linear.apply(2.0), 1.0);
    }
}
