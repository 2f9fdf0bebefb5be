//! Shape construction errors

/// Errors raised when a shape is built from invalid parameters
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum ShapeError {
    /// A coordinate was NaN or infinite
    #[error("shape coordinates must be finite")]
    NonFiniteCoordinate,

    /// Radius was negative or not finite
    #[error("radius must be a finite non-negative number, got {0}")]
    NegativeRadius(f64),

    /// Height was negative or not finite
    #[error("height must be a finite non-negative number, got {0}")]
    NegativeHeight(f64),

    /// Cuboid minimum corner exceeds the maximum corner
    #[error("cuboid min exceeds max on axis {axis}")]
    InvertedBounds {
        /// Offending axis (0 = x, 1 = y, 2 = z)
        axis: usize,
    },
}
