//! Error types for oxlab

use thiserror::Error;

/// Result type for oxlab operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building or validating image batches
///
/// Conversions themselves are total; these only come from the batch helpers.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The channel axis does not hold exactly three components
    #[error("Channel count mismatch: expected {expected}, got {actual}")]
    ChannelCount { expected: usize, actual: usize },

    /// A flat buffer does not fit the requested tensor shape
    #[error("Shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}
