use num_traits::{FromPrimitive, Num};
use serde::{Deserialize, Serialize};

/// Size of a rectangular area, e.g. of the map container in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size<N = f64> {
    width: N,
    height: N,
}

impl<N: Num + FromPrimitive + PartialOrd + Copy> Size<N> {
    /// Creates a new size.
    pub fn new(width: N, height: N) -> Self {
        Self { width, height }
    }

    /// Width.
    pub fn width(&self) -> N {
        self.width
    }

    /// Half of the width.
    pub fn half_width(&self) -> N {
        self.width / (N::one() + N::one())
    }

    /// Height.
    pub fn height(&self) -> N {
        self.height
    }

    /// Half of the height.
    pub fn half_height(&self) -> N {
        self.height / (N::one() + N::one())
    }

    /// Returns true if either of the dimensions is zero.
    pub fn is_zero(&self) -> bool {
        self.width.is_zero() || self.height.is_zero()
    }
}
