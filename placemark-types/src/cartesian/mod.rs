//! Types and functions on geometries in cartesian (pixel) coordinates.

mod extent;
mod point;
mod rect;
mod size;

pub use extent::Extent;
pub use point::{CartesianPoint2d, Point2d, Vector2d};
pub use rect::Rect;
pub use size::Size;
