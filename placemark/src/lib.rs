//! Placemark places point symbols (markers, labels and icons) of map geometries on a 2d drawing surface.
//!
//! Geometries are rendered by a [`Painter`](painter::Painter), that keeps their render points: coordinates in the
//! pixel space of the maximum native zoom of the map. A [`PointSymbolizer`] uses the painter and the current
//! [map state](map::MapState) to
//!
//! * find the screen (container) points a symbol should be drawn at, with the symbol offset applied,
//! * calculate rotation of the symbol at every point, following the direction of the geometry if the painter
//!   provides rotation vectors,
//! * calculate the extent of the symbol anchors, that is used to decide if the symbol is visible,
//! * rotate a [drawing surface](surface::DrawingSurface) before the symbol is drawn.
//!
//! ```
//! use placemark::map::MapView;
//! use placemark::painter::{Geom, GeometryPainter};
//! use placemark::surface::MatrixSurface;
//! use placemark::{PointSymbolizer, SymbolStyle};
//! use placemark_types::cartesian::{Point2d, Size};
//!
//! let style = SymbolStyle::from_json(r#"{ "markerDx": 5, "markerPlacement": "vertex" }"#).unwrap();
//! let painter = GeometryPainter::new(Geom::LineString(vec![
//!     Point2d::new(0.0, 0.0),
//!     Point2d::new(100.0, 100.0),
//! ]));
//! let view = MapView::new(&Point2d::new(50.0, 50.0), 16.0, 16.0).with_size(Size::new(200.0, 200.0));
//!
//! let frame = painter.frame(&view);
//! let symbolizer = PointSymbolizer::new(&style, &frame, &view);
//! let mut surface = MatrixSurface::new();
//!
//! for (i, point) in symbolizer.render_container_points(false).into_iter().enumerate() {
//!     let rotation = symbolizer.rotation_at(i);
//!     symbolizer.draw_rotated(&mut surface, point, rotation, |surface, anchor| {
//!         // draw the marker shape at `anchor`
//!     });
//! }
//! ```

pub mod error;
pub mod map;
pub mod painter;
pub mod style;
pub mod surface;
mod symbolizer;

#[cfg(test)]
pub(crate) mod tests;

pub use error::PlacemarkError;
pub use style::{Placement, SymbolStyle};
pub use symbolizer::{PointSymbolizer, SymbolPlacement};

// Reexport placemark_types
pub use placemark_types;
