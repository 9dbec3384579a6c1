/// Water balance state variable.
///
/// One store: `water` — soil water storage at the start of a day [mm].
use super::params::SoilParameters;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub water: f64,
}

impl State {
    /// Create initial state from parameters.
    ///
    /// Seeds the profile at the first day's field capacity: water = tfield[0] · L.
    pub fn initialize(params: &SoilParameters) -> Self {
        Self {
            water: params.tfield[0] * params.saturation,
        }
    }
}
