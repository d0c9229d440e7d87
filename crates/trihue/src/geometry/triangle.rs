use super::point::{intersect, Point};
use crate::Float;

/// The position of a point relative to a triangle.
///
/// The region is determined by the point's winding relative to each of the
/// triangle's three edges. A point is inside if it is strictly left of all
/// three edges. If it is right of exactly one edge, it is beyond that edge. If
/// it is right of two edges, it is beyond the vertex joining them. A point
/// that is right of all three edges only exists for a degenerate or clockwise
/// triangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    Inside,
    /// Beyond the edge from vertex 0 to vertex 1.
    BeyondEdge01,
    /// Beyond the edge from vertex 1 to vertex 2.
    BeyondEdge12,
    /// Beyond the edge from vertex 2 to vertex 0.
    BeyondEdge20,
    BeyondVertex0,
    BeyondVertex1,
    BeyondVertex2,
    Degenerate,
}

impl Region {
    /// Determine whether this region is inside the triangle.
    pub const fn is_inside(&self) -> bool {
        matches!(*self, Self::Inside)
    }
}

/// The saturation/value triangle.
///
/// The triangle is equilateral and inscribed in a circle around the canvas
/// center. Its first vertex points at the current hue and has full saturation
/// and value. Its second vertex, 120° counter-clockwise from the first, is
/// black. Its third vertex, another 120° further, is white.
///
/// Saturation and value map onto the triangle as follows: Value is the
/// distance from the black vertex, normalized by the triangle's height. It
/// selects a slice through the triangle parallel to the edge opposite the
/// black vertex. Saturation then interpolates along that slice, from the edge
/// towards white to the edge towards the hue.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    center: Point,
    radius: Float,
    vertices: [Point; 3],
}

impl Triangle {
    /// Create a new triangle with the given center, circumradius, and angle of
    /// the first vertex in degrees.
    pub fn new(center: Point, radius: Float, angle: Float) -> Self {
        let vertices = [
            Point::polar(center, radius, angle),
            Point::polar(center, radius, angle + 120.0),
            Point::polar(center, radius, angle + 240.0),
        ];

        Self {
            center,
            radius,
            vertices,
        }
    }

    /// Get the center.
    pub const fn center(&self) -> Point {
        self.center
    }

    /// Get the circumradius.
    pub const fn radius(&self) -> Float {
        self.radius
    }

    /// Get the vertices.
    pub const fn vertices(&self) -> [Point; 3] {
        self.vertices
    }

    /// Determine whether the point is strictly inside this triangle.
    ///
    /// Points on an edge are not inside.
    pub fn contains(&self, point: Point) -> bool {
        self.region(point).is_inside()
    }

    /// Classify the point's position relative to this triangle.
    pub fn region(&self, point: Point) -> Region {
        let [a, b, c] = self.vertices;
        let left_of_ab = 0.0 < point.winding(a, b);
        let left_of_bc = 0.0 < point.winding(b, c);
        let left_of_ca = 0.0 < point.winding(c, a);

        match (left_of_ab, left_of_bc, left_of_ca) {
            (true, true, true) => Region::Inside,
            (false, true, true) => Region::BeyondEdge01,
            (true, false, true) => Region::BeyondEdge12,
            (true, true, false) => Region::BeyondEdge20,
            (false, true, false) => Region::BeyondVertex0,
            (false, false, true) => Region::BeyondVertex1,
            (true, false, false) => Region::BeyondVertex2,
            (false, false, false) => Region::Degenerate,
        }
    }

    /// Confine the point to this triangle.
    ///
    /// A point inside the triangle is returned unchanged. A point beyond a
    /// vertex snaps to that vertex. A point beyond an edge moves towards the
    /// opposite vertex until it meets the edge. A point in the degenerate
    /// region is returned unchanged.
    pub fn confine(&self, point: Point) -> Point {
        let [a, b, c] = self.vertices;

        // Move towards the opposite vertex until meeting the edge.
        let onto = |opposite: Point, start: Point, end: Point| {
            let t = intersect(point, opposite, start, end).clamp(0.0, 1.0);
            point.lerp(opposite, t)
        };

        match self.region(point) {
            Region::Inside | Region::Degenerate => point,
            Region::BeyondEdge01 => onto(c, a, b),
            Region::BeyondEdge12 => onto(a, b, c),
            Region::BeyondEdge20 => onto(b, c, a),
            Region::BeyondVertex0 => a,
            Region::BeyondVertex1 => b,
            Region::BeyondVertex2 => c,
        }
    }

    /// Compute the position for the given saturation and value.
    pub fn sv_point(&self, saturation: Float, value: Float) -> Point {
        let (towards_hue, towards_white) = self.slice(value);
        towards_white.lerp(towards_hue, saturation)
    }

    /// Compute the saturation and value for the given position.
    ///
    /// This method first confines the point to the triangle. Hence both
    /// saturation and value are in unit range, up to floating point error. If
    /// the saturation is not finite, which happens for the black vertex, it is
    /// 0.
    pub fn sv_values(&self, point: Point) -> (Float, Float) {
        let point = self.confine(point);
        let black = self.vertices[1] - self.center;
        let relative = point - self.center;

        let value = relative.distance(relative.normal_projection(black)) / (1.5 * self.radius);
        let (towards_hue, towards_white) = self.slice(value);
        let saturation = point.distance(towards_white) / towards_hue.distance(towards_white);

        (
            if saturation.is_finite() {
                saturation
            } else {
                0.0
            },
            value,
        )
    }

    /// Determine the endpoints of the slice with the given value, on the edge
    /// towards the hue and on the edge towards white.
    fn slice(&self, value: Float) -> (Point, Point) {
        let [hue, black, white] = self.vertices;
        (black.lerp(hue, value), black.lerp(white, value))
    }
}

// ====================================================================================================================
