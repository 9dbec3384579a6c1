/// Validated daily forcing data for the water balance model.
///
/// All series must cover the same days, in chronological order, with no
/// non-finite values. Validation happens once at construction so the
/// recurrence can assume clean, aligned inputs.
use chrono::NaiveDate;

use crate::error::Error;

#[derive(Debug, Clone)]
pub struct Forcing {
    /// Daily precipitation depth [mm/day].
    pub precipitation: Vec<f64>,
    /// Green area index — canopy/leaf coverage proxy [-].
    pub gai: Vec<f64>,
    /// Reference evapotranspiration under standard conditions [mm/day].
    pub et0: Vec<f64>,
    /// Calendar date of each simulated day, strictly increasing.
    pub dates: Vec<NaiveDate>,
}

/// Forcing values for a single day, as consumed by `step()`.
#[derive(Debug, Clone, Copy)]
pub struct DayForcing {
    pub precipitation: f64,
    pub gai: f64,
    pub et0: f64,
}

impl Forcing {
    /// Create new Forcing with validation.
    ///
    /// Validates:
    /// - series are non-empty and all the same length
    /// - no NaN or infinite values in any series
    /// - dates are strictly increasing
    pub fn new(
        precipitation: Vec<f64>,
        gai: Vec<f64>,
        et0: Vec<f64>,
        dates: Vec<NaiveDate>,
    ) -> Result<Self, Error> {
        if precipitation.is_empty() {
            return Err(Error::EmptySeries("precipitation"));
        }
        let n = precipitation.len();
        for (name, len) in [("gai", gai.len()), ("et0", et0.len()), ("dates", dates.len())] {
            if len != n {
                return Err(Error::LengthMismatch {
                    name,
                    reference: "precipitation",
                    expected: n,
                    got: len,
                });
            }
        }
        for (name, series) in [
            ("precipitation", &precipitation),
            ("gai", &gai),
            ("et0", &et0),
        ] {
            if let Some(day) = series.iter().position(|v| !v.is_finite()) {
                return Err(Error::NonFinite { name, day });
            }
        }
        for t in 1..n {
            if dates[t] <= dates[t - 1] {
                return Err(Error::DatesNotIncreasing(t));
            }
        }
        Ok(Self {
            precipitation,
            gai,
            et0,
            dates,
        })
    }

    /// Number of simulated days.
    pub fn len(&self) -> usize {
        self.precipitation.len()
    }

    /// Returns `true` if there are no days.
    pub fn is_empty(&self) -> bool {
        self.precipitation.is_empty()
    }

    /// Forcing values for day `t`.
    pub fn day(&self, t: usize) -> DayForcing {
        DayForcing {
            precipitation: self.precipitation[t],
            gai: self.gai[t],
            et0: self.et0[t],
        }
    }
}
