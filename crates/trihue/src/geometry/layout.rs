use super::{HueMarker, Point, Triangle};
use crate::opt::Options;
use crate::Float;

/// The layout of the square picker canvas.
///
/// The canvas has a hue ring along its border and the saturation/value
/// triangle inside the ring. All dimensions are proportional to the canvas
/// size. For the default size of 256 pixels, the ring spans radii 106 to 128
/// and the triangle has circumradius 90.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    size: Float,
}

impl Layout {
    /// Create a new layout for a canvas with the given side length.
    pub const fn new(size: Float) -> Self {
        Self { size }
    }

    /// Get the canvas size.
    pub const fn size(&self) -> Float {
        self.size
    }

    /// Get the canvas center.
    pub fn center(&self) -> Point {
        Point::new(self.size / 2.0, self.size / 2.0)
    }

    /// Get the outer radius of the hue ring.
    pub fn ring_outer(&self) -> Float {
        self.size / 2.0
    }

    /// Get the inner radius of the hue ring.
    pub fn ring_inner(&self) -> Float {
        self.size * 53.0 / 128.0
    }

    /// Get the radius at which hue markers sit.
    pub fn ring_middle(&self) -> Float {
        (self.ring_outer() + self.ring_inner()) / 2.0
    }

    /// Get the circumradius of the saturation/value triangle.
    pub fn triangle_radius(&self) -> Float {
        self.size * 45.0 / 128.0
    }

    /// Create the saturation/value triangle for the hue with the given angle
    /// in degrees.
    pub fn triangle(&self, angle: Float) -> Triangle {
        Triangle::new(self.center(), self.triangle_radius(), angle)
    }

    /// Determine the position of the hue marker for the given angle in
    /// degrees.
    pub fn marker_from_angle(&self, angle: Float) -> Point {
        Point::polar(self.center(), self.ring_middle(), angle)
    }

    /// Determine the hue angle in degrees for the given point.
    ///
    /// The angle is measured counter-clockwise on screen, starting at the
    /// positive x-axis, and falls into `-180..=180`.
    pub fn angle_from_point(&self, point: Point) -> Float {
        let center = self.center();
        (center.y - point.y).atan2(point.x - center.x).to_degrees()
    }

    /// Create the hue marker for the given point. The marker snaps onto the
    /// middle of the ring.
    pub fn hue_marker(&self, point: Point) -> HueMarker {
        let angle = self.angle_from_point(point);
        HueMarker {
            angle,
            position: self.marker_from_angle(angle),
        }
    }

    /// Determine whether the point lies beyond the inner radius of the hue
    /// ring.
    pub fn is_on_ring(&self, point: Point) -> bool {
        self.ring_inner() < point.distance(self.center())
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(256.0)
    }
}

impl From<&Options> for Layout {
    fn from(value: &Options) -> Self {
        Self::new(value.canvas_size())
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::Layout;
    use crate::geometry::Point;
    use crate::opt::Options;
    use crate::{assert_close_enough, Float};

    #[test]
    fn test_dimensions() {
        let layout = Layout::default();
        assert_eq!(layout.center(), Point::new(128.0, 128.0));
        assert_eq!(layout.ring_outer(), 128.0);
        assert_eq!(layout.ring_inner(), 106.0);
        assert_eq!(layout.ring_middle(), 117.0);
        assert_eq!(layout.triangle_radius(), 90.0);

        let layout = Layout::from(&Options::builder().canvas_size(512.0).build());
        assert_eq!(layout.ring_inner(), 212.0);
        assert_eq!(layout.triangle_radius(), 180.0);
    }

    #[test]
    fn test_marker_from_angle() {
        let layout = Layout::default();

        let east = layout.marker_from_angle(0.0);
        assert_close_enough!(east.x, 245.0);
        assert_close_enough!(east.y, 128.0);

        let north = layout.marker_from_angle(90.0);
        assert_close_enough!(north.x, 128.0);
        assert_close_enough!(north.y, 11.0);

        let west = layout.marker_from_angle(-180.0);
        assert_close_enough!(west.x, 11.0);
        assert_close_enough!(west.y, 128.0);
    }

    #[test]
    fn test_angle_from_point() {
        let layout = Layout::default();
        assert_close_enough!(layout.angle_from_point(Point::new(200.0, 128.0)), 0.0);
        assert_close_enough!(layout.angle_from_point(Point::new(128.0, 0.0)), 90.0);
        assert_close_enough!(layout.angle_from_point(Point::new(128.0, 256.0)), -90.0);
        assert_close_enough!(layout.angle_from_point(Point::new(0.0, 128.0)), 180.0);
        assert_close_enough!(layout.angle_from_point(Point::new(228.0, 28.0)), 45.0);

        for angle in [-135.0, -60.0, 0.0, 30.0, 150.0] {
            let point = layout.marker_from_angle(angle);
            assert_close_enough!(layout.angle_from_point(point), angle);
        }
    }

    #[test]
    fn test_hue_marker() {
        let layout = Layout::default();
        let marker = layout.hue_marker(Point::new(128.0, 20.0));
        assert_close_enough!(marker.angle, 90.0);
        assert_close_enough!(marker.position.x, 128.0);
        assert_close_enough!(marker.position.y, 11.0);

        assert!(layout.is_on_ring(Point::new(240.0, 128.0)));
        assert!(layout.is_on_ring(Point::new(250.0, 250.0)));
        assert!(!layout.is_on_ring(Point::new(200.0, 128.0)));
        assert!(!layout.is_on_ring(Point::new(234.0, 128.0)));
    }

    #[test]
    fn test_triangle_follows_hue() {
        let layout = Layout::default();
        for angle in [0.0, 72.0, -150.0] {
            let [hue, _, _] = layout.triangle(angle).vertices();
            let direction: Float = layout.angle_from_point(hue);
            assert_close_enough!(direction, angle);
        }
    }
}
