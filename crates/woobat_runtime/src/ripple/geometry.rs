//! Ripple sizing and placement.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
/// Rendered size of a ripple surface in CSS pixels.
pub struct SurfaceSize {
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl SurfaceSize {
    /// Creates a size; negative or non-finite dimensions collapse to zero.
    pub fn new(width: f64, height: f64) -> Self {
        let sanitize = |value: f64| if value.is_finite() { value.max(0.0) } else { 0.0 };
        Self {
            width: sanitize(width),
            height: sanitize(height),
        }
    }

    /// Centre of the surface.
    pub fn center(self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// Whether the surface has no area to draw into.
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Placement of one ripple circle inside its surface.
pub struct RippleGeometry {
    /// Origin x, surface-relative.
    pub x: f64,
    /// Origin y, surface-relative.
    pub y: f64,
    /// Circle diameter.
    pub diameter: f64,
}

impl RippleGeometry {
    /// Circle radius.
    pub fn radius(self) -> f64 {
        self.diameter / 2.0
    }

    /// CSS `left` offset of the circle's bounding box.
    pub fn left(self) -> f64 {
        self.x - self.radius()
    }

    /// CSS `top` offset of the circle's bounding box.
    pub fn top(self) -> f64 {
        self.y - self.radius()
    }
}

/// Resolves a ripple origin: missing coordinates default to the centre and everything is
/// clamped into the surface rectangle.
pub fn ripple_origin(size: SurfaceSize, x: Option<f64>, y: Option<f64>) -> (f64, f64) {
    let (cx, cy) = size.center();
    let clamp = |value: Option<f64>, fallback: f64, max: f64| match value {
        Some(value) if value.is_finite() => value.clamp(0.0, max),
        _ => fallback,
    };
    (clamp(x, cx, size.width), clamp(y, cy, size.height))
}

/// Largest Euclidean distance from `(x, y)` to one of the four surface corners.
pub fn max_corner_distance(size: SurfaceSize, x: f64, y: f64) -> f64 {
    [
        (0.0, 0.0),
        (size.width, 0.0),
        (0.0, size.height),
        (size.width, size.height),
    ]
    .into_iter()
    .map(|(corner_x, corner_y)| (corner_x - x).hypot(corner_y - y))
    .fold(0.0, f64::max)
}

/// Computes the ripple circle for an origin.
///
/// Without an override the diameter is twice the distance to the furthest corner, so the
/// fully expanded circle covers the whole surface. `radius_percent` instead sizes the circle
/// as a percentage of the larger surface dimension.
pub fn ripple_geometry(
    size: SurfaceSize,
    x: Option<f64>,
    y: Option<f64>,
    radius_percent: Option<f64>,
) -> RippleGeometry {
    let (x, y) = ripple_origin(size, x, y);
    let diameter = match radius_percent {
        Some(percent) if percent.is_finite() && percent > 0.0 => {
            size.width.max(size.height) * percent / 100.0
        }
        _ => 2.0 * max_corner_distance(size, x, y),
    };
    RippleGeometry { x, y, diameter }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diameter_covers_every_corner_for_in_bounds_points() {
        let size = SurfaceSize::new(120.0, 40.0);
        for step_x in 0..=12 {
            for step_y in 0..=4 {
                let x = f64::from(step_x) * 10.0;
                let y = f64::from(step_y) * 10.0;
                let geometry = ripple_geometry(size, Some(x), Some(y), None);
                for (corner_x, corner_y) in [(0.0, 0.0), (120.0, 0.0), (0.0, 40.0), (120.0, 40.0)]
                {
                    let reach = (corner_x - x).hypot(corner_y - y);
                    assert!(geometry.radius() + 1e-9 >= reach, "corner uncovered at ({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn corner_click_spans_the_diagonal_twice() {
        let geometry = ripple_geometry(SurfaceSize::new(30.0, 40.0), Some(0.0), Some(0.0), None);
        assert_eq!(geometry.diameter, 100.0);
        assert_eq!(geometry.left(), -50.0);
        assert_eq!(geometry.top(), -50.0);
    }

    #[test]
    fn missing_coordinates_use_the_centre() {
        let geometry = ripple_geometry(SurfaceSize::new(100.0, 50.0), None, None, None);
        assert_eq!((geometry.x, geometry.y), (50.0, 25.0));
    }

    #[test]
    fn out_of_bounds_origin_is_clamped() {
        let size = SurfaceSize::new(100.0, 50.0);
        assert_eq!(ripple_origin(size, Some(-20.0), Some(500.0)), (0.0, 50.0));
        assert_eq!(ripple_origin(size, Some(f64::NAN), None), (50.0, 25.0));
    }

    #[test]
    fn percent_override_scales_the_larger_side() {
        let geometry = ripple_geometry(SurfaceSize::new(200.0, 80.0), Some(10.0), None, Some(50.0));
        assert_eq!(geometry.diameter, 100.0);
    }

    #[test]
    fn degenerate_sizes_are_sanitized() {
        let size = SurfaceSize::new(-4.0, f64::INFINITY);
        assert!(size.is_empty());
        assert_eq!(size, SurfaceSize::new(0.0, 0.0));
    }
}
