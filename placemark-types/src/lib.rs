//! Cartesian primitives shared by the `placemark` crates: points and vectors in pixel space, axis-aligned
//! rectangles, sizes and the incrementally built [`Extent`](cartesian::Extent).

pub mod cartesian;
