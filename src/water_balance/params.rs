/// Site soil parameters for the water balance model.
///
/// - `twilt`: per-day wilting point series [-]
/// - `tfield`: per-day field capacity series [-]
/// - `saturation`: scalar water storage at full saturation, L [mm]
use super::constants::{ALPHA, FIELD_HEADROOM};
use crate::error::Error;

#[derive(Debug, Clone)]
pub struct SoilParameters {
    pub twilt: Vec<f64>,
    pub tfield: Vec<f64>,
    pub saturation: f64,
}

/// Soil values for a single day, as consumed by `step()`.
#[derive(Debug, Clone, Copy)]
pub struct DaySoil {
    pub twilt: f64,
    pub tfield: f64,
    pub saturation: f64,
}

impl SoilParameters {
    /// Create new SoilParameters, returning an error if invalid.
    ///
    /// Validates:
    /// - series are non-empty and the same length
    /// - no NaN or infinite values
    /// - saturation is positive and finite
    /// - the stress-factor denominator `0.95·tfield − 0.7·twilt` is nonzero
    ///   on every day, so the recurrence can never divide by zero
    pub fn new(twilt: Vec<f64>, tfield: Vec<f64>, saturation: f64) -> Result<Self, Error> {
        if twilt.is_empty() {
            return Err(Error::EmptySeries("twilt"));
        }
        if tfield.len() != twilt.len() {
            return Err(Error::LengthMismatch {
                name: "tfield",
                reference: "twilt",
                expected: twilt.len(),
                got: tfield.len(),
            });
        }
        for (name, series) in [("twilt", &twilt), ("tfield", &tfield)] {
            if let Some(day) = series.iter().position(|v| !v.is_finite()) {
                return Err(Error::NonFinite { name, day });
            }
        }
        if !(saturation.is_finite() && saturation > 0.0) {
            return Err(Error::NonPositiveSaturation(saturation));
        }
        for day in 0..twilt.len() {
            if FIELD_HEADROOM * tfield[day] == ALPHA * twilt[day] {
                return Err(Error::DegenerateStressBounds {
                    day,
                    tfield: tfield[day],
                    twilt: twilt[day],
                });
            }
        }
        Ok(Self {
            twilt,
            tfield,
            saturation,
        })
    }

    /// Number of days covered by the soil series.
    pub fn len(&self) -> usize {
        self.twilt.len()
    }

    /// Returns `true` if there are no days.
    pub fn is_empty(&self) -> bool {
        self.twilt.is_empty()
    }

    /// Soil values for day `t`.
    pub fn day(&self, t: usize) -> DaySoil {
        DaySoil {
            twilt: self.twilt[t],
            tfield: self.tfield[t],
            saturation: self.saturation,
        }
    }
}
