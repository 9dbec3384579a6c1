/// Error types for water balance inputs and simulation.
///
/// All validation is performed up front: the recurrence itself never runs on
/// inputs that could divide by zero or index out of range. No partial result
/// is ever returned — callers get either a complete table or one of these.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A daily series does not cover the same number of days as the rest.
    #[error("{name} length {got} does not match {reference} length {expected}")]
    LengthMismatch {
        name: &'static str,
        reference: &'static str,
        expected: usize,
        got: usize,
    },

    /// A daily series is empty — there is nothing to simulate.
    #[error("{0} series is empty")]
    EmptySeries(&'static str),

    /// An input series contains NaN or an infinite value.
    #[error("{name} contains a non-finite value at day {day}")]
    NonFinite { name: &'static str, day: usize },

    /// The date sequence is not strictly increasing.
    #[error("dates are not strictly increasing at day {0}")]
    DatesNotIncreasing(usize),

    /// Saturation capacity must be a positive, finite water storage.
    #[error("saturation capacity must be positive and finite, got {0}")]
    NonPositiveSaturation(f64),

    /// The stress-factor denominator `0.95·tfield − 0.7·twilt` vanishes on
    /// some day, which would make the stress reduction a division by zero.
    #[error(
        "degenerate stress bounds at day {day}: 0.95 * tfield ({tfield}) \
         equals 0.7 * twilt ({twilt})"
    )]
    DegenerateStressBounds { day: usize, tfield: f64, twilt: f64 },
}
