use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use placemark_types::cartesian::Point2d;

use super::{ContainerPoints, Painter, RenderPoints};
use crate::map::MapState;
use crate::style::Placement;

/// Point or line geometry in pixels at the maximum native zoom of the map.
#[derive(Debug, Clone, PartialEq)]
pub enum Geom {
    /// Single point.
    Point(Point2d),
    /// Set of points.
    MultiPoint(Vec<Point2d>),
    /// Line.
    LineString(Vec<Point2d>),
    /// Set of lines.
    MultiLineString(Vec<Vec<Point2d>>),
}

impl Geom {
    fn lines(&self) -> Vec<&[Point2d]> {
        match self {
            Geom::Point(p) => vec![std::slice::from_ref(p)],
            Geom::MultiPoint(points) => points.iter().map(std::slice::from_ref).collect(),
            Geom::LineString(line) => vec![line.as_slice()],
            Geom::MultiLineString(lines) => lines.iter().map(Vec::as_slice).collect(),
        }
    }
}

/// Painter of a single geometry that caches render points for every placement it was asked for.
///
/// The cache is dropped when the geometry is replaced with [`GeometryPainter::set_geometry`]. Since render points
/// do not depend on the map position, one painter serves all frames; use [`GeometryPainter::frame`] to bind it to
/// the current state of the map.
#[derive(Debug)]
pub struct GeometryPainter {
    geometry: Geom,
    altitude: f64,
    spriting: bool,
    cache: Mutex<HashMap<Placement, Arc<RenderPoints>>>,
}

impl GeometryPainter {
    /// Creates a new painter.
    pub fn new(geometry: Geom) -> Self {
        Self {
            geometry,
            altitude: 0.0,
            spriting: false,
            cache: Mutex::default(),
        }
    }

    /// Sets altitude of the geometry in pixels at the maximum native zoom.
    pub fn with_altitude(mut self, altitude: f64) -> Self {
        self.altitude = altitude;
        self
    }

    /// Geometry of the painter.
    pub fn geometry(&self) -> &Geom {
        &self.geometry
    }

    /// Replaces the geometry and drops cached render points.
    pub fn set_geometry(&mut self, geometry: Geom) {
        self.geometry = geometry;
        self.cache.get_mut().clear();
    }

    /// Turns sprite batching on or off.
    pub fn set_spriting(&mut self, spriting: bool) {
        self.spriting = spriting;
    }

    /// Returns true if sprite batching is on.
    pub fn is_spriting(&self) -> bool {
        self.spriting
    }

    /// Returns cached render points for the placement, calculating them if necessary.
    pub fn render_points(&self, placement: Placement) -> Arc<RenderPoints> {
        self.cache
            .lock()
            .entry(placement)
            .or_insert_with(|| {
                log::debug!("Calculating render points for {placement:?} placement");
                Arc::new(self.calculate(placement))
            })
            .clone()
    }

    /// Binds the painter to the current state of the map.
    pub fn frame<'a, M: MapState + ?Sized>(&'a self, map: &'a M) -> FramePainter<'a, M> {
        FramePainter { painter: self, map }
    }

    fn calculate(&self, placement: Placement) -> RenderPoints {
        let lines = self.geometry.lines();
        let mut points = vec![];
        let mut rotations = vec![];

        match placement {
            Placement::Point => {
                return RenderPoints::new(lines.into_iter().flatten().copied().collect());
            }
            Placement::Vertex => {
                for line in lines {
                    let last = line.len().saturating_sub(1);
                    for (i, point) in line.iter().enumerate() {
                        points.push(*point);
                        rotations.push((line[i.saturating_sub(1)], line[(i + 1).min(last)]));
                    }
                }
            }
            Placement::VertexFirst => {
                for line in lines {
                    if let Some(first) = line.first() {
                        points.push(*first);
                        rotations.push((*first, *line.get(1).unwrap_or(first)));
                    }
                }
            }
            Placement::VertexLast => {
                for line in lines {
                    if let [.., prev, last] = line {
                        points.push(*last);
                        rotations.push((*prev, *last));
                    } else if let Some(last) = line.last() {
                        points.push(*last);
                        rotations.push((*last, *last));
                    }
                }
            }
            Placement::Line => {
                for segment in lines.iter().flat_map(|line| line.windows(2)) {
                    points.push(nalgebra::center(&segment[0], &segment[1]));
                    rotations.push((segment[0], segment[1]));
                }
            }
        }

        RenderPoints {
            points,
            rotations: Some(rotations),
        }
    }
}

/// [`GeometryPainter`] bound to the state of the map for one frame.
pub struct FramePainter<'a, M: MapState + ?Sized> {
    painter: &'a GeometryPainter,
    map: &'a M,
}

impl<M: MapState + ?Sized> Painter for FramePainter<'_, M> {
    fn render_points(&self, placement: Placement) -> Arc<RenderPoints> {
        self.painter.render_points(placement)
    }

    fn is_spriting(&self) -> bool {
        self.painter.is_spriting()
    }

    fn point_container_points(
        &self,
        points: &[Point2d],
        dx: f64,
        dy: f64,
        ignore_altitude: bool,
    ) -> ContainerPoints {
        let zoom = self.map.max_native_zoom();
        let lift = if ignore_altitude {
            0.0
        } else {
            self.painter.altitude * 2f64.powf(self.map.zoom() - zoom)
        };

        ContainerPoints::Flat(
            points
                .iter()
                .map(|p| {
                    let cp = self.map.point_to_container_point(p, zoom);
                    Point2d::new(cp.x + dx, cp.y + dy - lift)
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::MapView;
    use approx::assert_abs_diff_eq;
    use placemark_types::cartesian::Size;

    fn line() -> Geom {
        Geom::LineString(vec![
            Point2d::new(0.0, 0.0),
            Point2d::new(10.0, 0.0),
            Point2d::new(10.0, 10.0),
        ])
    }

    #[test]
    fn point_placement_has_no_rotations() {
        let painter = GeometryPainter::new(Geom::MultiPoint(vec![
            Point2d::new(1.0, 2.0),
            Point2d::new(3.0, 4.0),
        ]));
        let render_points = painter.render_points(Placement::Point);

        assert_eq!(
            render_points.points(),
            &[Point2d::new(1.0, 2.0), Point2d::new(3.0, 4.0)]
        );
        assert!(render_points.rotations().is_none());
    }

    #[test]
    fn vertex_placement() {
        let painter = GeometryPainter::new(line());
        let render_points = painter.render_points(Placement::Vertex);

        assert_eq!(render_points.len(), 3);
        let rotations = render_points.rotations().expect("vertex placement has rotations");
        assert_eq!(rotations.len(), 3);
        assert_eq!(rotations[0], (Point2d::new(0.0, 0.0), Point2d::new(10.0, 0.0)));
        assert_eq!(rotations[1], (Point2d::new(0.0, 0.0), Point2d::new(10.0, 10.0)));
        assert_eq!(rotations[2], (Point2d::new(10.0, 0.0), Point2d::new(10.0, 10.0)));
    }

    #[test]
    fn first_and_last_vertex_placement() {
        let painter = GeometryPainter::new(Geom::MultiLineString(vec![
            vec![Point2d::new(0.0, 0.0), Point2d::new(5.0, 5.0)],
            vec![Point2d::new(7.0, 7.0)],
            vec![],
        ]));

        let first = painter.render_points(Placement::VertexFirst);
        assert_eq!(first.points(), &[Point2d::new(0.0, 0.0), Point2d::new(7.0, 7.0)]);
        assert_eq!(
            first.rotations().expect("has rotations")[1],
            (Point2d::new(7.0, 7.0), Point2d::new(7.0, 7.0))
        );

        let last = painter.render_points(Placement::VertexLast);
        assert_eq!(last.points(), &[Point2d::new(5.0, 5.0), Point2d::new(7.0, 7.0)]);
        assert_eq!(
            last.rotations().expect("has rotations")[0],
            (Point2d::new(0.0, 0.0), Point2d::new(5.0, 5.0))
        );
    }

    #[test]
    fn line_placement_uses_segment_centers() {
        let painter = GeometryPainter::new(line());
        let render_points = painter.render_points(Placement::Line);

        assert_eq!(
            render_points.points(),
            &[Point2d::new(5.0, 0.0), Point2d::new(10.0, 5.0)]
        );
        assert_eq!(render_points.rotations().map(|r| r.len()), Some(2));
    }

    #[test]
    fn render_points_are_cached_until_geometry_changes() {
        let mut painter = GeometryPainter::new(line());
        let first = painter.render_points(Placement::Vertex);
        let second = painter.render_points(Placement::Vertex);
        assert!(Arc::ptr_eq(&first, &second));

        painter.set_geometry(Geom::Point(Point2d::new(1.0, 1.0)));
        let third = painter.render_points(Placement::Vertex);
        assert!(!Arc::ptr_eq(&first, &third));
        assert_eq!(third.points(), &[Point2d::new(1.0, 1.0)]);
        // The old snapshot is not affected by the change.
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn container_points_with_offset_and_altitude() {
        let painter =
            GeometryPainter::new(Geom::Point(Point2d::new(120.0, 100.0))).with_altitude(40.0);
        let view = MapView::new(&Point2d::new(100.0, 100.0), 9.0, 10.0)
            .with_size(Size::new(50.0, 50.0));
        let frame = painter.frame(&view);

        let points = frame
            .point_container_points(&[Point2d::new(120.0, 100.0)], 5.0, -3.0, true)
            .flatten();
        assert_abs_diff_eq!(points[0], Point2d::new(40.0, 22.0));

        let lifted = frame
            .point_container_points(&[Point2d::new(120.0, 100.0)], 5.0, -3.0, false)
            .flatten();
        assert_abs_diff_eq!(lifted[0], Point2d::new(40.0, 2.0));
    }
}
