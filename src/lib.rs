/// soilwater — daily soil-water balance model.
///
/// Reconstructs day-by-day soil water storage and actual (stress-adjusted)
/// evapotranspiration from calendar-aligned daily forcing and site soil
/// parameters. Intended as a building block inside crop simulation pipelines.
pub mod error;
pub mod forcing;
pub mod water_balance;

pub use error::Error;
pub use forcing::Forcing;
pub use water_balance::outputs::WaterBalanceTable;
pub use water_balance::params::SoilParameters;
pub use water_balance::run::run;
pub use water_balance::state::State;
