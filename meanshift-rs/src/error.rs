//! Generator error types.

use thiserror::Error;

/// Errors raised by the shifted Gaussian generator.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeneratorError {
    /// The shift axis does not index into the vector.
    #[error(
        "invalid shift model ({mean_shift}, {dimension}, {shift_axis}): \
         shift axis must be less than the number of dimensions"
    )]
    InvalidConfiguration {
        mean_shift: f64,
        dimension: usize,
        shift_axis: usize,
    },

    /// A vector was requested before any shift model was set.
    #[error("no shift model configured")]
    Unconfigured,
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
