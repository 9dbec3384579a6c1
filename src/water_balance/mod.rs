/// Daily soil-water balance recurrence.
///
/// A single-store bucket model: precipitation fills the profile, canopy
/// interception and stress-adjusted evapotranspiration drain it, and water
/// above field capacity bypasses the profile immediately. Strictly
/// sequential — each day's storage depends on the previous day's.
pub mod constants;
pub mod outputs;
pub mod params;
pub mod processes;
pub mod run;
pub mod state;
