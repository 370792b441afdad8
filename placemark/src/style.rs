//! See [`SymbolStyle`].

use placemark_types::cartesian::Vector2d;
use serde::{Deserialize, Serialize};

use crate::error::PlacemarkError;

/// Style properties of a point symbol (marker or label) that control where and how it is placed on the map.
///
/// Styles are usually loaded from JSON documents with camelCase keys:
///
/// ```json
/// { "markerDx": 5, "markerDy": -3, "markerRotation": 45, "markerPlacement": "vertex" }
/// ```
///
/// Unknown keys are ignored, so the same document may carry properties for fills, strokes and text.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolStyle {
    /// Horizontal offset of a label in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_dx: Option<f64>,
    /// Vertical offset of a label in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_dy: Option<f64>,
    /// Horizontal offset of a marker in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker_dx: Option<f64>,
    /// Vertical offset of a marker in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker_dy: Option<f64>,
    /// Rotation of a label in degrees, counter-clockwise on the screen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_rotation: Option<f64>,
    /// Rotation of a marker in degrees, counter-clockwise on the screen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker_rotation: Option<f64>,
    /// Placement of a marker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker_placement: Option<Placement>,
    /// Placement of a label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_placement: Option<Placement>,
}

/// Rule that determines which points of a geometry a symbol is anchored to.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    /// Every point of the geometry.
    #[default]
    Point,
    /// Every vertex of a line, rotated along the line.
    Vertex,
    /// The first vertex of every line.
    VertexFirst,
    /// The last vertex of every line.
    VertexLast,
    /// The middle of every line segment, rotated along the segment.
    Line,
}

impl SymbolStyle {
    /// Parses a style from a JSON document and validates its numeric values.
    pub fn from_json(json: &str) -> Result<Self, PlacemarkError> {
        let style: Self = serde_json::from_str(json)?;
        style.validate()?;
        Ok(style)
    }

    /// Checks that all set numeric properties are finite.
    pub fn validate(&self) -> Result<(), PlacemarkError> {
        for (key, value) in self.numeric_properties() {
            if let Some(value) = value {
                if !value.is_finite() {
                    return Err(PlacemarkError::InvalidStyleValue { key, value });
                }
            }
        }

        Ok(())
    }

    /// Resolves the style into the fixed set of values the symbolizer uses.
    ///
    /// Label properties take priority over marker properties. Non-finite values are treated as not set.
    pub fn resolve(&self) -> ResolvedStyle {
        let dx = first_present("dx", [self.text_dx, self.marker_dx]);
        let dy = first_present("dy", [self.text_dy, self.marker_dy]);
        let rotation = first_present("rotation", [self.text_rotation, self.marker_rotation]);

        ResolvedStyle {
            offset: Vector2d::new(dx.unwrap_or(0.0), dy.unwrap_or(0.0)),
            // Degrees counter-clockwise on the screen, which has its y axis pointing down.
            rotation: rotation.map(|deg| -deg.to_radians()),
            placement: self
                .marker_placement
                .or(self.text_placement)
                .unwrap_or_default(),
        }
    }

    fn numeric_properties(&self) -> [(&'static str, Option<f64>); 6] {
        [
            ("textDx", self.text_dx),
            ("textDy", self.text_dy),
            ("markerDx", self.marker_dx),
            ("markerDy", self.marker_dy),
            ("textRotation", self.text_rotation),
            ("markerRotation", self.marker_rotation),
        ]
    }
}

fn first_present<const N: usize>(name: &str, candidates: [Option<f64>; N]) -> Option<f64> {
    candidates.into_iter().flatten().find(|value| {
        if !value.is_finite() {
            log::warn!("Ignoring non-finite {name} style value: {value}");
        }
        value.is_finite()
    })
}

/// Style values resolved once when a symbolizer is created.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ResolvedStyle {
    /// Offset of the symbol from its anchor point in pixels.
    pub offset: Vector2d,
    /// Static rotation of the symbol in radians, if set.
    pub rotation: Option<f64>,
    /// Placement of the symbol.
    pub placement: Placement,
}
