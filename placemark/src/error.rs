//! Error types used by the crate.

use thiserror::Error;

/// Placemark error type.
#[derive(Debug, Error)]
pub enum PlacemarkError {
    /// Symbol style document could not be parsed.
    #[error("failed to parse symbol style: {0}")]
    Style(#[from] serde_json::Error),
    /// A numeric style value cannot be used for rendering.
    #[error("invalid value of style property `{key}`: {value}")]
    InvalidStyleValue {
        /// Name of the style property.
        key: &'static str,
        /// The offending value.
        value: f64,
    },
    /// Rotation vectors do not correspond one-to-one to render points.
    #[error("expected {points} rotation vectors, got {rotations}")]
    RotationCountMismatch {
        /// Number of render points.
        points: usize,
        /// Number of rotation vector pairs.
        rotations: usize,
    },
}
