use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in screen units (top-left origin).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn area(self) -> f32 {
        self.w.max(0.0) * self.h.max(0.0)
    }

    /// Overlapping region of two rectangles. Width/height are zero when
    /// they do not overlap.
    pub fn intersection(self, other: Rect) -> Rect {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = (self.x + self.w).min(other.x + other.w);
        let y1 = (self.y + self.h).min(other.y + other.h);
        Rect {
            x: x0,
            y: y0,
            w: (x1 - x0).max(0.0),
            h: (y1 - y0).max(0.0),
        }
    }
}

/// Fraction of `region`'s area that lies inside `viewport`, in `[0, 1]`.
///
/// A region with zero area yields 0.0 — it can never cross a visibility
/// threshold, which is how absent/unrendered regions are silently
/// skipped rather than treated as errors.
pub fn visible_fraction(region: Rect, viewport: Rect) -> f32 {
    let region_area = region.area();
    if region_area <= 0.0 {
        return 0.0;
    }
    (region.intersection(viewport).area() / region_area).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Rect = Rect {
        x: 0.0,
        y: 0.0,
        w: 800.0,
        h: 600.0,
    };

    #[test]
    fn fully_inside_is_one() {
        let region = Rect::new(100.0, 100.0, 200.0, 200.0);
        assert_eq!(visible_fraction(region, VIEWPORT), 1.0);
    }

    #[test]
    fn fully_outside_is_zero() {
        let region = Rect::new(0.0, 700.0, 200.0, 200.0);
        assert_eq!(visible_fraction(region, VIEWPORT), 0.0);
    }

    #[test]
    fn half_overlap() {
        // Bottom half of the region hangs below the viewport.
        let region = Rect::new(0.0, 500.0, 100.0, 200.0);
        let frac = visible_fraction(region, VIEWPORT);
        assert!((frac - 0.5).abs() < 1e-6, "got {frac}");
    }

    #[test]
    fn zero_area_region_is_never_visible() {
        let region = Rect::new(10.0, 10.0, 0.0, 100.0);
        assert_eq!(visible_fraction(region, VIEWPORT), 0.0);
    }

    #[test]
    fn region_larger_than_viewport_caps_at_viewport_share() {
        // Region twice the viewport height, fully covering it.
        let region = Rect::new(0.0, -300.0, 800.0, 1200.0);
        let frac = visible_fraction(region, VIEWPORT);
        assert!((frac - 0.5).abs() < 1e-6, "got {frac}");
    }

    #[test]
    fn intersection_is_commutative() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 50.0, 100.0, 100.0);
        assert_eq!(a.intersection(b), b.intersection(a));
        assert_eq!(a.intersection(b).area(), 2500.0);
    }
}
