//! Rectangles and viewport visibility math

/// Axis-aligned rectangle in page coordinates (pixels, y grows downward)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn area(&self) -> f32 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Move the rectangle vertically
    pub fn offset_y(self, dy: f32) -> Self {
        Self {
            y: self.y + dy,
            ..self
        }
    }

    /// Whether a point lies inside (edges inclusive)
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }

    /// Overlapping region of two rectangles, if any
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right <= left || bottom <= top {
            return None;
        }

        Some(Rect::new(left, top, right - left, bottom - top))
    }

    /// Fraction (0.0 to 1.0) of this rectangle that lies inside `viewport`.
    ///
    /// A zero-area rectangle counts as fully visible when its origin is inside
    /// the viewport, matching how browsers report empty elements.
    pub fn visible_fraction(&self, viewport: &Rect) -> f32 {
        let area = self.area();
        if area <= 0.0 {
            return if viewport.contains_point(self.x, self.y) {
                1.0
            } else {
                0.0
            };
        }

        match self.intersection(viewport) {
            Some(overlap) => (overlap.area() / area).clamp(0.0, 1.0),
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fully_inside() {
        let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);
        let r = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert_eq!(r.visible_fraction(&viewport), 1.0);
    }

    #[test]
    fn test_fully_outside() {
        let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);
        let r = Rect::new(0.0, 150.0, 20.0, 20.0);
        assert_eq!(r.visible_fraction(&viewport), 0.0);
    }

    #[test]
    fn test_touching_edge_is_not_visible() {
        let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);
        let r = Rect::new(0.0, 100.0, 100.0, 50.0);
        assert_eq!(r.visible_fraction(&viewport), 0.0);
    }

    #[test]
    fn test_partial_overlap() {
        let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);
        let r = Rect::new(0.0, 75.0, 100.0, 100.0);
        assert!((r.visible_fraction(&viewport) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_zero_area() {
        let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(Rect::new(5.0, 5.0, 0.0, 0.0).visible_fraction(&viewport), 1.0);
        assert_eq!(Rect::new(5.0, 500.0, 0.0, 0.0).visible_fraction(&viewport), 0.0);
    }
}
