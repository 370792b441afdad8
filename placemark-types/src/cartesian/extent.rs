use super::point::CartesianPoint2d;
use super::rect::Rect;
use serde::{Deserialize, Serialize};

/// Bounding extent that is built incrementally by folding points into it.
///
/// A new extent is empty: it has no min/max values until the first point is combined into it. An empty extent
/// means there is nothing to draw.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    rect: Option<Rect>,
}

impl Extent {
    /// Creates an empty extent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no point was combined into the extent yet.
    pub fn is_empty(&self) -> bool {
        self.rect.is_none()
    }

    /// Bounding rectangle of all combined points.
    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    /// Extends the extent to contain the point.
    pub fn combine(&mut self, point: &impl CartesianPoint2d<Num = f64>) {
        self.rect = Some(match self.rect {
            Some(rect) => rect.include(point),
            None => Rect::from_point(point),
        });
    }

    /// Extends the extent to contain another extent.
    pub fn combine_extent(&mut self, other: &Extent) {
        self.rect = match (self.rect, other.rect) {
            (Some(a), Some(b)) => Some(a.merge(b)),
            (a, b) => a.or(b),
        };
    }

    /// Width of the extent, `0` if empty.
    pub fn width(&self) -> f64 {
        self.rect.map(|r| r.width()).unwrap_or_default()
    }

    /// Height of the extent, `0` if empty.
    pub fn height(&self) -> f64 {
        self.rect.map(|r| r.height()).unwrap_or_default()
    }

    /// Returns true if both extents are not empty and have common points.
    pub fn intersects(&self, other: &Extent) -> bool {
        match (&self.rect, &other.rect) {
            (Some(a), Some(b)) => a.intersects(b),
            _ => false,
        }
    }
}

impl From<Rect> for Extent {
    fn from(rect: Rect) -> Self {
        Self { rect: Some(rect) }
    }
}

impl<P: CartesianPoint2d<Num = f64>> FromIterator<P> for Extent {
    fn from_iter<T: IntoIterator<Item = P>>(iter: T) -> Self {
        let mut extent = Extent::new();
        for point in iter {
            extent.combine(&point);
        }

        extent
    }
}
