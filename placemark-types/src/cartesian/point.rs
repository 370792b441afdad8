use nalgebra::{Point2, Scalar, Vector2};
use num_traits::{Bounded, FromPrimitive, Num};

/// Point in a 2d pixel space.
pub type Point2d = Point2<f64>;
/// Vector in a 2d pixel space.
pub type Vector2d = Vector2<f64>;

/// Point with `x` and `y` coordinates in a cartesian space.
pub trait CartesianPoint2d {
    /// Numeric type of the coordinates.
    type Num: Num + Copy + PartialOrd + Bounded + Scalar + FromPrimitive;

    /// X coordinate.
    fn x(&self) -> Self::Num;
    /// Y coordinate.
    fn y(&self) -> Self::Num;

    /// Returns a point moved by the given vector.
    fn add(&self, vec: Vector2<Self::Num>) -> Point2<Self::Num> {
        Point2::new(self.x() + vec.x, self.y() + vec.y)
    }

    /// Vector from `other` to `self`.
    fn sub(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> Vector2<Self::Num> {
        Vector2::new(self.x() - other.x(), self.y() - other.y())
    }

    /// Squared distance between two points.
    fn distance_sq(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> Self::Num {
        let v = self.sub(other);
        v.x * v.x + v.y * v.y
    }
}

impl<N: Num + Copy + PartialOrd + Bounded + Scalar + FromPrimitive> CartesianPoint2d for Point2<N> {
    type Num = N;

    fn x(&self) -> N {
        self.x
    }

    fn y(&self) -> N {
        self.y
    }
}
