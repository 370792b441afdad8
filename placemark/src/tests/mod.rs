use std::cell::{Cell, RefCell};
use std::sync::Arc;

use placemark_types::cartesian::{Point2d, Vector2d};

use crate::map::MapState;
use crate::painter::{ContainerPoints, Painter, RenderPoints};
use crate::style::Placement;

/// Painter that returns the given render points for any placement and converts them to container points by
/// adding the offset.
pub(crate) struct TestPainter {
    render_points: RefCell<Arc<RenderPoints>>,
    spriting: bool,
    nested: bool,
    last_ignore_altitude: Cell<Option<bool>>,
}

impl TestPainter {
    pub(crate) fn new(render_points: RenderPoints) -> Self {
        Self {
            render_points: RefCell::new(Arc::new(render_points)),
            spriting: false,
            nested: false,
            last_ignore_altitude: Cell::new(None),
        }
    }

    pub(crate) fn spriting(self) -> Self {
        Self {
            spriting: true,
            ..self
        }
    }

    /// Every point is converted into two: the point itself and the point one pixel above it.
    pub(crate) fn nested(self) -> Self {
        Self {
            nested: true,
            ..self
        }
    }

    pub(crate) fn set_render_points(&self, render_points: RenderPoints) {
        *self.render_points.borrow_mut() = Arc::new(render_points);
    }

    pub(crate) fn last_ignore_altitude(&self) -> Option<bool> {
        self.last_ignore_altitude.get()
    }
}

impl Painter for TestPainter {
    fn render_points(&self, _placement: Placement) -> Arc<RenderPoints> {
        self.render_points.borrow().clone()
    }

    fn is_spriting(&self) -> bool {
        self.spriting
    }

    fn point_container_points(
        &self,
        points: &[Point2d],
        dx: f64,
        dy: f64,
        ignore_altitude: bool,
    ) -> ContainerPoints {
        self.last_ignore_altitude.set(Some(ignore_altitude));
        let offset = Vector2d::new(dx, dy);
        let moved = points.iter().map(|p| p + offset);

        if self.nested {
            ContainerPoints::Nested(
                moved
                    .map(|p| vec![p, p - Vector2d::new(0.0, 1.0)])
                    .collect(),
            )
        } else {
            ContainerPoints::Flat(moved.collect())
        }
    }
}

/// Map that converts points by scaling them, and shifts container points. Zoom levels the points are converted
/// from are recorded.
pub(crate) struct TestMap {
    pub(crate) transforming: bool,
    pub(crate) scale: f64,
    pub(crate) shift: Vector2d,
    pub(crate) max_native_zoom: f64,
    pub(crate) container_conversions: Cell<usize>,
    pub(crate) source_zooms: RefCell<Vec<f64>>,
}

impl Default for TestMap {
    fn default() -> Self {
        Self {
            transforming: false,
            scale: 1.0,
            shift: Vector2d::zeros(),
            max_native_zoom: 0.0,
            container_conversions: Cell::new(0),
            source_zooms: RefCell::new(vec![]),
        }
    }
}

impl TestMap {
    pub(crate) fn container_conversions(&self) -> usize {
        self.container_conversions.get()
    }

    pub(crate) fn source_zooms(&self) -> Vec<f64> {
        self.source_zooms.borrow().clone()
    }
}

impl MapState for TestMap {
    fn zoom(&self) -> f64 {
        self.scale.log2()
    }

    fn max_native_zoom(&self) -> f64 {
        self.max_native_zoom
    }

    fn is_transforming(&self) -> bool {
        self.transforming
    }

    fn point_to_point(&self, point: &Point2d, zoom: f64) -> Point2d {
        self.source_zooms.borrow_mut().push(zoom);
        Point2d::from(point.coords * self.scale)
    }

    fn point_to_container_point(&self, point: &Point2d, zoom: f64) -> Point2d {
        self.container_conversions
            .set(self.container_conversions.get() + 1);
        self.point_to_point(point, zoom) + self.shift
    }
}
