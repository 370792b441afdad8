//! See [`PointSymbolizer`].

use std::sync::Arc;

use placemark_types::cartesian::{Extent, Point2d, Vector2d};

use crate::map::MapState;
use crate::painter::{Painter, RenderPoints};
use crate::style::{Placement, ResolvedStyle, SymbolStyle};
use crate::surface::{DrawingSurface, RotatedSurface};

/// Capabilities a symbolizer provides to the painter that composes it.
pub trait SymbolPlacement {
    /// Container points the symbol should be drawn at.
    fn resolve_placement(&self, ignore_altitude: bool) -> Vec<Point2d>;
    /// Rotation of the symbol drawn at the render point with the given index, in radians.
    fn resolve_rotation(&self, index: usize) -> f64;
    /// Extent occupied by the symbol's anchor points at the maximum native zoom.
    fn resolve_extent(&self) -> Extent;
}

/// Places point symbols (markers, labels, icons) of a geometry on the screen.
///
/// A symbolizer is created once for a geometry and its style and then used for every frame. It does not store
/// render points of the geometry: they are requested from the painter on every call, as the painter may
/// recalculate them between frames.
pub struct PointSymbolizer<'a, P: Painter + ?Sized, M: MapState + ?Sized> {
    style: ResolvedStyle,
    painter: &'a P,
    map: &'a M,
}

impl<'a, P: Painter + ?Sized, M: MapState + ?Sized> PointSymbolizer<'a, P, M> {
    /// Creates a new symbolizer. Offset, rotation and placement are taken from the style at this point and are not
    /// updated afterwards.
    pub fn new(style: &SymbolStyle, painter: &'a P, map: &'a M) -> Self {
        Self {
            style: style.resolve(),
            painter,
            map,
        }
    }

    /// Offset of the symbol in pixels.
    pub fn offset(&self) -> Vector2d {
        self.style.offset
    }

    /// Static rotation of the symbol in radians, if set in the style.
    pub fn rotation(&self) -> Option<f64> {
        self.style.rotation
    }

    /// Placement of the symbol.
    pub fn placement(&self) -> Placement {
        self.style.placement
    }

    fn render_points(&self) -> Arc<RenderPoints> {
        self.painter.render_points(self.style.placement)
    }

    /// Returns the container (screen) points to draw the symbol at, with the symbol offset applied.
    ///
    /// When the painter batches symbols into a sprite, render points are returned as they are.
    pub fn render_container_points(&self, ignore_altitude: bool) -> Vec<Point2d> {
        let render_points = self.render_points();
        if self.painter.is_spriting() {
            return render_points.points().to_vec();
        }

        let offset = self.offset();
        self.painter
            .point_container_points(render_points.points(), offset.x, offset.y, ignore_altitude)
            .flatten()
    }

    /// Returns rotation of the symbol at the render point with the given index, in radians.
    ///
    /// If the render points have rotation vectors, the direction of the vector is added to the static rotation of
    /// the symbol.
    ///
    /// # Panics
    ///
    /// Panics if the render points have rotation vectors and `index` is out of their bounds. Use
    /// [`PointSymbolizer::try_rotation_at`] if the index is not guaranteed to be valid.
    pub fn rotation_at(&self, index: usize) -> f64 {
        let render_points = self.render_points();
        match render_points.rotations() {
            Some(rotations) => self.vector_rotation(&rotations[index]),
            None => self.static_rotation(),
        }
    }

    /// Same as [`PointSymbolizer::rotation_at`], but returns `None` if the index is out of bounds of rotation
    /// vectors.
    pub fn try_rotation_at(&self, index: usize) -> Option<f64> {
        let render_points = self.render_points();
        match render_points.rotations() {
            Some(rotations) => rotations.get(index).map(|pair| self.vector_rotation(pair)),
            None => Some(self.static_rotation()),
        }
    }

    fn static_rotation(&self) -> f64 {
        self.style.rotation.unwrap_or(0.0)
    }

    fn vector_rotation(&self, (from, to): &(Point2d, Point2d)) -> f64 {
        // Cached points are used as they are unless the map is being transformed.
        let angle = if self.map.is_transforming() {
            let zoom = self.map.max_native_zoom();
            direction_angle(
                &self.map.point_to_container_point(from, zoom),
                &self.map.point_to_container_point(to, zoom),
            )
        } else {
            direction_angle(from, to)
        };

        self.static_rotation() + angle
    }

    /// Returns the extent of the render points in pixels at the maximum native zoom of the map.
    ///
    /// The extent is empty if the geometry has no render points.
    pub fn extent_2d(&self) -> Extent {
        let zoom = self.map.max_native_zoom();
        let render_points = self.render_points();
        render_points
            .points()
            .iter()
            .map(|p| self.map.point_to_point(p, zoom))
            .collect()
    }

    /// Rotates the surface around the `origin` point for drawing the symbol.
    ///
    /// If `rotation` is zero or not finite (NaN or infinite), the surface is not changed and `None` is returned: the
    /// symbol should be drawn at `origin`. Otherwise, the returned guard should be used to draw the symbol at its
    /// [offset](RotatedSurface::offset). The surface transform is restored when the guard is dropped.
    pub fn apply_rotation<'s, S: DrawingSurface + ?Sized>(
        &self,
        surface: &'s mut S,
        origin: Point2d,
        rotation: f64,
    ) -> Option<RotatedSurface<'s, S>> {
        if rotation == 0.0 || !rotation.is_finite() {
            return None;
        }

        Some(RotatedSurface::new(surface, origin, self.offset(), rotation))
    }

    /// Draws a symbol at the `origin` point with the given rotation.
    ///
    /// The `draw` function receives the surface and the point to draw the symbol at. The surface transform is
    /// restored after the function returns, even if it panics.
    pub fn draw_rotated<S, R>(
        &self,
        surface: &mut S,
        origin: Point2d,
        rotation: f64,
        draw: impl FnOnce(&mut S, Point2d) -> R,
    ) -> R
    where
        S: DrawingSurface + ?Sized,
    {
        if let Some(mut rotated) = self.apply_rotation(&mut *surface, origin, rotation) {
            let anchor = Point2d::from(rotated.offset());
            return draw(&mut *rotated, anchor);
        }

        draw(surface, origin)
    }
}

impl<P: Painter + ?Sized, M: MapState + ?Sized> SymbolPlacement for PointSymbolizer<'_, P, M> {
    fn resolve_placement(&self, ignore_altitude: bool) -> Vec<Point2d> {
        self.render_container_points(ignore_altitude)
    }

    fn resolve_rotation(&self, index: usize) -> f64 {
        self.rotation_at(index)
    }

    fn resolve_extent(&self) -> Extent {
        self.extent_2d()
    }
}

/// Angle of the direction from `from` to `to`, measured from the positive x axis.
fn direction_angle(from: &Point2d, to: &Point2d) -> f64 {
    let direction = to - from;
    direction.y.atan2(direction.x)
}
