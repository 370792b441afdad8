//! Map state consumed by symbolizers: zoom levels, pixel conversions and animation state.

use std::time::Duration;

use placemark_types::cartesian::{Point2d, Size};
use web_time::SystemTime;

mod view;

pub use view::MapView;

const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Map properties a symbolizer needs to place symbols on the screen.
///
/// All pixel coordinates are given for some zoom level. Render points of geometries are usually cached in the
/// pixel space of the [maximum native zoom](MapState::max_native_zoom), so they don't have to be recalculated when
/// the map is zoomed.
pub trait MapState {
    /// Current zoom level of the map.
    fn zoom(&self) -> f64;

    /// Maximum zoom level the map data is natively available at.
    fn max_native_zoom(&self) -> f64;

    /// Returns true while a pan, zoom or rotation animation is in progress.
    fn is_transforming(&self) -> bool;

    /// Converts a point in pixels at the given zoom level into pixels at the current zoom level.
    fn point_to_point(&self, point: &Point2d, zoom: f64) -> Point2d;

    /// Converts a point in pixels at the given zoom level into the container (screen) pixel coordinates, taking
    /// into account current position and rotation of the map.
    fn point_to_container_point(&self, point: &Point2d, zoom: f64) -> Point2d;
}

/// Map with a view that can be changed gradually.
#[derive(Debug, Default)]
pub struct Map {
    view: MapView,
    animation: Option<AnimationParameters>,
}

#[derive(Debug)]
struct AnimationParameters {
    start_view: MapView,
    end_view: MapView,
    start_time: SystemTime,
    duration: Duration,
}

impl Map {
    /// Creates a new map.
    pub fn new(view: MapView) -> Self {
        Self {
            view,
            animation: None,
        }
    }

    /// Current view of the map.
    pub fn view(&self) -> &MapView {
        &self.view
    }

    /// Changes the view of the map to the given one, cancelling the running animation.
    pub fn set_view(&mut self, view: MapView) {
        self.animation = None;
        self.view = view;
    }

    /// Set the size of the map container.
    pub fn set_size(&mut self, new_size: Size) {
        self.view = self.view.with_size(new_size);
    }

    /// Target view of the current animation.
    pub fn target_view(&self) -> &MapView {
        self.animation
            .as_ref()
            .map(|v| &v.end_view)
            .unwrap_or(&self.view)
    }

    /// Request a gradual change of the map view to the specified view.
    pub fn animate_to(&mut self, target: MapView, duration: Duration) {
        self.animation = Some(AnimationParameters {
            start_view: self.view,
            end_view: target,
            start_time: SystemTime::now() - FRAME_DURATION,
            duration,
        });
    }

    /// Update the view of the map before rendering in case [`Map::animate_to`] was called.
    pub fn animate(&mut self) {
        self.animate_at(SystemTime::now());
    }

    /// Update the view of the map to the state the animation has at the given time.
    pub fn animate_at(&mut self, now: SystemTime) {
        let Some(animation) = &self.animation else {
            return;
        };

        let elapsed = now
            .duration_since(animation.start_time)
            .unwrap_or_default()
            .as_secs_f64();
        let total = animation.duration.as_secs_f64();
        let k = if total > 0.0 { elapsed / total } else { 1.0 };

        if k >= 1.0 {
            self.view = animation.end_view;
            self.animation = None;
            log::debug!("Map animation finished");
        } else {
            self.view = animation.start_view.interpolate(&animation.end_view, k);
        }
    }
}

impl MapState for Map {
    fn zoom(&self) -> f64 {
        self.view.zoom()
    }

    fn max_native_zoom(&self) -> f64 {
        self.view.max_native_zoom()
    }

    fn is_transforming(&self) -> bool {
        self.animation.is_some()
    }

    fn point_to_point(&self, point: &Point2d, zoom: f64) -> Point2d {
        self.view.point_to_point(point, zoom)
    }

    fn point_to_container_point(&self, point: &Point2d, zoom: f64) -> Point2d {
        self.view.point_to_container_point(point, zoom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn map() -> Map {
        Map::new(
            MapView::new(&Point2d::new(0.0, 0.0), 10.0, 12.0).with_size(Size::new(100.0, 100.0)),
        )
    }

    #[test]
    fn not_transforming_without_animation() {
        let map = map();
        assert!(!map.is_transforming());
        assert_eq!(map.target_view(), map.view());
    }

    #[test]
    fn animation_progress() {
        let mut map = map();
        let target = map.view().with_zoom(12.0);
        map.animate_to(target, Duration::from_millis(1000));
        assert!(map.is_transforming());
        assert_eq!(map.target_view(), &target);

        let start = SystemTime::now() - FRAME_DURATION;
        map.animate_at(start);
        assert!(map.is_transforming());
        assert!(map.view().zoom() < 12.0);

        map.animate_at(start + Duration::from_millis(2000));
        assert!(!map.is_transforming());
        assert_abs_diff_eq!(map.view().zoom(), 12.0);
    }

    #[test]
    fn set_view_cancels_animation() {
        let mut map = map();
        map.animate_to(map.view().with_bearing(1.0), Duration::from_millis(500));
        map.set_view(map.view().with_zoom(11.0));

        assert!(!map.is_transforming());
        assert_eq!(map.view().zoom(), 11.0);
    }
}
