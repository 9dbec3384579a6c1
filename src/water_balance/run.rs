/// Water balance orchestration functions.
///
/// - `step()`: advance the store through a single day → (State, Fluxes)
/// - `run()`: fold `step` across an aligned forcing/soil timeseries and
///   assemble the output table
use super::outputs::{Fluxes, WaterBalanceTable};
use super::params::{DaySoil, SoilParameters};
use super::processes;
use super::state::State;
use crate::error::Error;
use crate::forcing::{DayForcing, Forcing};

/// Execute one day of the water balance.
///
/// Takes the start-of-day state plus that day's soil and forcing values,
/// returns the end-of-day state and all intermediate fluxes. Pure — no
/// mutation of the input state, no clamping: a negative storage is carried
/// into the next day exactly as computed.
pub fn step(state: &State, soil: &DaySoil, forcing: &DayForcing) -> (State, Fluxes) {
    // Step 1: Crop coefficient from canopy coverage
    let kc = processes::crop_coefficient(forcing.gai);

    // Step 2: Crop evapotranspiration demand
    let etc = processes::crop_demand(forcing.et0, kc);

    // Step 3: Canopy interception
    let inter = processes::interception(forcing.precipitation, etc, forcing.gai);

    // Step 4: Potential evapotranspiration after interception
    let epot = etc - inter;

    // Step 5: Stress reduction factor
    let kr = processes::stress_factor(state.water, soil.twilt, soil.tfield, soil.saturation);

    // Step 6: Actual evapotranspiration
    let eact = epot * kr;

    // Step 7: Overflow above field capacity
    let bypass = processes::bypass(state.water, soil.tfield, soil.saturation);

    // Step 8: Storage update
    let new_state = State {
        water: state.water + forcing.precipitation - eact - inter - bypass,
    };

    let fluxes = Fluxes {
        crop_coefficient: kc,
        crop_demand: etc,
        interception: inter,
        potential_et: epot,
        stress_factor: kr,
        actual_et: eact,
        bypass,
        water: state.water,
    };

    (new_state, fluxes)
}

/// Run the water balance over a daily timeseries.
///
/// The forcing and soil series must cover the same number of days. If no
/// initial state is provided, the store starts at the first day's field
/// capacity (`tfield[0] · L`).
///
/// The reported `water[t]` is the storage at the *start* of day `t`; the
/// state after the final day is computed but not reported. Negative storage
/// values are floored to zero in a single pass after all days are computed,
/// so a negative intermediate still influences the following days.
pub fn run(
    params: &SoilParameters,
    forcing: &Forcing,
    initial_state: Option<&State>,
) -> Result<WaterBalanceTable, Error> {
    if params.len() != forcing.len() {
        return Err(Error::LengthMismatch {
            name: "soil series",
            reference: "forcing",
            expected: forcing.len(),
            got: params.len(),
        });
    }

    let n = forcing.len();
    let mut state = match initial_state {
        Some(s) => *s,
        None => State::initialize(params),
    };

    let mut water = Vec::with_capacity(n + 1);
    let mut eact = Vec::with_capacity(n);
    water.push(state.water);

    for t in 0..n {
        let (new_state, fluxes) = step(&state, &params.day(t), &forcing.day(t));
        eact.push(fluxes.actual_et);
        state = new_state;
        water.push(state.water);
    }

    // Single clamp pass over the whole trajectory, only after the loop.
    for w in &mut water {
        if *w < 0.0 {
            *w = 0.0;
        }
    }
    // The end-of-run state is not part of the table.
    water.truncate(n);

    Ok(WaterBalanceTable {
        dates: forcing.dates.clone(),
        water,
        eact,
    })
}
