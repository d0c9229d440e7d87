use crate::Float;

/// A point or vector on the picker canvas.
///
/// Canvas coordinates grow rightward and downward, as usual for screens.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: Float,
    pub y: Float,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: Float, y: Float) -> Self {
        Self { x, y }
    }

    /// Create the point at the given distance and angle from the center. The
    /// angle is in degrees and grows counter-clockwise on screen.
    #[must_use]
    pub fn polar(center: Self, radius: Float, degrees: Float) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self::new(cos.mul_add(radius, center.x), (-sin).mul_add(radius, center.y))
    }

    /// Compute the Euclidean distance to the other point.
    pub fn distance(&self, other: Self) -> Float {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Compute the dot product with the other vector.
    pub fn dot(&self, other: Self) -> Float {
        self.x.mul_add(other.x, self.y * other.y)
    }

    /// Linearly interpolate between this and the other point.
    ///
    /// For `t` equal to 0 or 1, the result is exactly this or the other point,
    /// respectively.
    #[must_use]
    pub fn lerp(&self, other: Self, t: Float) -> Self {
        Self::new(
            (1.0 - t).mul_add(self.x, t * other.x),
            (1.0 - t).mul_add(self.y, t * other.y),
        )
    }

    /// Determine on which side of the directed line from `a` to `b` this point
    /// lies.
    ///
    /// On screen, the result is positive for points to the left of the line
    /// and negative for points to its right. Its magnitude is the distance from
    /// the line scaled by the distance between `a` and `b`.
    pub fn winding(&self, a: Self, b: Self) -> Float {
        (self.x - a.x).mul_add(b.y - a.y, -((self.y - a.y) * (b.x - a.x)))
    }

    /// Project this vector onto the line that is normal to the given vector and
    /// passes through the given vector's head.
    ///
    /// The result is not finite if the given vector has zero length.
    #[must_use]
    pub fn normal_projection(&self, normal: Self) -> Self {
        let offset = (normal.dot(normal) - self.dot(normal)) / normal.dot(normal);
        *self + normal * offset
    }
}

/// Find the intersection of the line through `a1` and `a2` with the line
/// through `b1` and `b2`.
///
/// The result is the intersection's parameter along the first line, with 0
/// denoting `a1` and 1 denoting `a2`. It is not finite for parallel lines.
pub fn intersect(a1: Point, a2: Point, b1: Point, b2: Point) -> Float {
    let numerator = (b1.x - a1.x).mul_add(b1.y - b2.y, -((b1.y - a1.y) * (b1.x - b2.x)));
    let denominator = (a2.x - a1.x).mul_add(b1.y - b2.y, -((a2.y - a1.y) * (b1.x - b2.x)));
    numerator / denominator
}

impl core::ops::Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl core::ops::Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl core::ops::Mul<Float> for Point {
    type Output = Self;

    fn mul(self, rhs: Float) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(Float, Float)> for Point {
    fn from(value: (Float, Float)) -> Self {
        Self::new(value.0, value.1)
    }
}

// ====================================================================================================================
