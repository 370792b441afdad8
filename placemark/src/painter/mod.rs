//! Painters own the render points of a geometry and convert them into the screen space.
//!
//! [`Painter`] is the interface a [`PointSymbolizer`](crate::PointSymbolizer) uses to get the points it draws at.
//! [`GeometryPainter`] is a simple implementation for point and line geometries.

use std::sync::Arc;

use placemark_types::cartesian::Point2d;

use crate::error::PlacemarkError;
use crate::style::Placement;

mod geometry;

pub use geometry::{FramePainter, Geom, GeometryPainter};

/// Source of render points of a single geometry.
pub trait Painter {
    /// Returns render points of the geometry for the given placement, in pixels at the maximum native zoom of the
    /// map.
    ///
    /// Returned points are a snapshot: the painter may recalculate them for the next frame, so they should not be
    /// stored by the caller.
    fn render_points(&self, placement: Placement) -> Arc<RenderPoints>;

    /// Returns true if the symbols are currently batched into a shared sprite sheet. In this case a single transform
    /// is applied to the sprite externally and render points should be used as they are.
    fn is_spriting(&self) -> bool;

    /// Converts render points into container (screen) points, moving them by `dx` and `dy` pixels.
    ///
    /// If `ignore_altitude` is false, the altitude of the geometry is taken into account.
    fn point_container_points(
        &self,
        points: &[Point2d],
        dx: f64,
        dy: f64,
        ignore_altitude: bool,
    ) -> ContainerPoints;
}

/// Points of a geometry a symbol is drawn at, with optional direction vectors to rotate the symbol along.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RenderPoints {
    points: Vec<Point2d>,
    rotations: Option<Vec<(Point2d, Point2d)>>,
}

impl RenderPoints {
    /// Render points without rotation vectors.
    pub fn new(points: Vec<Point2d>) -> Self {
        Self {
            points,
            rotations: None,
        }
    }

    /// Render points where the point with index `i` is rotated along the direction from `rotations[i].0` to
    /// `rotations[i].1`.
    pub fn with_rotations(
        points: Vec<Point2d>,
        rotations: Vec<(Point2d, Point2d)>,
    ) -> Result<Self, PlacemarkError> {
        if points.len() != rotations.len() {
            return Err(PlacemarkError::RotationCountMismatch {
                points: points.len(),
                rotations: rotations.len(),
            });
        }

        Ok(Self {
            points,
            rotations: Some(rotations),
        })
    }

    /// Anchor points.
    pub fn points(&self) -> &[Point2d] {
        &self.points
    }

    /// Rotation vectors, one per anchor point.
    pub fn rotations(&self) -> Option<&[(Point2d, Point2d)]> {
        self.rotations.as_deref()
    }

    /// Number of anchor points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if there are no anchor points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Result of converting render points into the screen space.
#[derive(Debug, Clone, PartialEq)]
pub enum ContainerPoints {
    /// One container point per render point.
    Flat(Vec<Point2d>),
    /// A sequence of container points per render point, used by compound symbols.
    Nested(Vec<Vec<Point2d>>),
}

impl ContainerPoints {
    /// Flattens the points into a single sequence, keeping the order of render points and the order of points
    /// inside each nested sequence.
    pub fn flatten(self) -> Vec<Point2d> {
        match self {
            ContainerPoints::Flat(points) => points,
            ContainerPoints::Nested(points) => points.into_iter().flatten().collect(),
        }
    }
}

impl Default for ContainerPoints {
    fn default() -> Self {
        Self::Flat(vec![])
    }
}
