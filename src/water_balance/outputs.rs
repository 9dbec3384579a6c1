/// Water balance outputs.
///
/// Two levels: `Fluxes` holds every intermediate quantity of a single day's
/// update — returned by `step()` so single-step behavior is testable.
/// `WaterBalanceTable` is the assembled result of a full run: one row per
/// simulated day, date-ordered.
use chrono::NaiveDate;

/// Single-day fluxes — returned by `step()`.
#[derive(Debug, Clone, Copy)]
pub struct Fluxes {
    /// Crop coefficient kc [-].
    pub crop_coefficient: f64,
    /// Crop evapotranspiration demand ETc [mm/day].
    pub crop_demand: f64,
    /// Canopy interception [mm/day].
    pub interception: f64,
    /// Potential evapotranspiration after interception, Epot [mm/day].
    pub potential_et: f64,
    /// Water stress reduction factor Kr [-].
    pub stress_factor: f64,
    /// Actual evapotranspiration Eact [mm/day].
    pub actual_et: f64,
    /// Overflow above field capacity [mm/day].
    pub bypass: f64,
    /// Soil water storage at the start of the day [mm].
    pub water: f64,
}

/// Full simulation result — returned by `run()`.
///
/// `water[t]` is the storage at the start of day `t` (clamped to zero),
/// `eact[t]` the actual evapotranspiration during day `t`.
#[derive(Debug, Clone, PartialEq)]
pub struct WaterBalanceTable {
    pub dates: Vec<NaiveDate>,
    pub water: Vec<f64>,
    pub eact: Vec<f64>,
}

impl WaterBalanceTable {
    /// Number of simulated days.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns `true` if there are no days.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
