use nalgebra::Rotation2;
use placemark_types::cartesian::{CartesianPoint2d, Point2d, Size, Vector2d};

use super::MapState;

/// Position of the map on the screen.
///
/// The center of the view is given in pixel coordinates at the maximum native zoom of the map, so it doesn't
/// change when the zoom level changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    center: Point2d,
    zoom: f64,
    max_native_zoom: f64,
    bearing: f64,
    size: Size,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            center: Point2d::origin(),
            zoom: 0.0,
            max_native_zoom: 0.0,
            bearing: 0.0,
            size: Size::new(0.0, 0.0),
        }
    }
}

impl MapView {
    /// Creates a new view centered at the given point (in max native zoom pixels).
    pub fn new(center: &impl CartesianPoint2d<Num = f64>, zoom: f64, max_native_zoom: f64) -> Self {
        Self {
            center: Point2d::new(center.x(), center.y()),
            zoom,
            max_native_zoom,
            ..Default::default()
        }
    }

    /// Center of the view in max native zoom pixels.
    pub fn center(&self) -> Point2d {
        self.center
    }

    /// Current zoom level.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Rotation of the map in radians, clockwise.
    pub fn bearing(&self) -> f64 {
        self.bearing
    }

    /// Size of the map container in pixels.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns a copy of the view with the given zoom level.
    pub fn with_zoom(&self, zoom: f64) -> Self {
        Self { zoom, ..*self }
    }

    /// Returns a copy of the view with the given bearing.
    pub fn with_bearing(&self, bearing: f64) -> Self {
        Self { bearing, ..*self }
    }

    /// Returns a copy of the view with the given container size.
    pub fn with_size(&self, size: Size) -> Self {
        Self { size, ..*self }
    }

    /// Returns a copy of the view with the given center.
    pub fn with_center(&self, center: Point2d) -> Self {
        Self { center, ..*self }
    }

    /// Moves the view by the given number of screen pixels.
    pub fn translate_by_pixels(&self, delta: Vector2d) -> Self {
        let unrotated = Rotation2::new(-self.bearing) * delta;
        let scale = self.zoom_scale(self.max_native_zoom);
        Self {
            center: self.center - unrotated / scale,
            ..*self
        }
    }

    /// Linear interpolation between two views, `k` is in `[0, 1]`.
    pub(crate) fn interpolate(&self, target: &MapView, k: f64) -> Self {
        Self {
            center: self.center + (target.center - self.center) * k,
            zoom: self.zoom + (target.zoom - self.zoom) * k,
            bearing: self.bearing + (target.bearing - self.bearing) * k,
            ..*self
        }
    }

    fn zoom_scale(&self, from_zoom: f64) -> f64 {
        2f64.powf(self.zoom - from_zoom)
    }
}

impl MapState for MapView {
    fn zoom(&self) -> f64 {
        self.zoom
    }

    fn max_native_zoom(&self) -> f64 {
        self.max_native_zoom
    }

    fn is_transforming(&self) -> bool {
        false
    }

    fn point_to_point(&self, point: &Point2d, zoom: f64) -> Point2d {
        Point2d::from(point.coords * self.zoom_scale(zoom))
    }

    fn point_to_container_point(&self, point: &Point2d, zoom: f64) -> Point2d {
        let center = self.point_to_point(&self.center, self.max_native_zoom);
        let relative = self.point_to_point(point, zoom) - center;
        let rotated = Rotation2::new(self.bearing) * relative;

        Point2d::new(self.size.half_width(), self.size.half_height()) + rotated
    }
}
