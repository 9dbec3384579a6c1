/// Water balance core process functions.
///
/// Pure functions implementing each step of the daily recurrence.
/// All inputs and outputs are f64.
use super::constants::{
    ALPHA, FIELD_HEADROOM, INTERCEPTION_PER_GAI, KC_AMPLITUDE, KC_EXTINCTION, KC_MAX,
};

/// Step 1: Crop coefficient from canopy coverage.
///
/// kc = 1.3 − 0.5·exp(−0.17·GAI). Rises from 0.8 over bare soil towards
/// 1.3 at full canopy closure.
pub fn crop_coefficient(gai: f64) -> f64 {
    KC_MAX - KC_AMPLITUDE * (-KC_EXTINCTION * gai).exp()
}

/// Step 2: Crop evapotranspiration demand [mm/day].
pub fn crop_demand(et0: f64, kc: f64) -> f64 {
    et0 * kc
}

/// Step 3: Canopy interception [mm/day].
///
/// Precipitation captured by the canopy, unavailable to the soil. Limited
/// by the rain that fell, by the crop demand, and by canopy storage
/// (0.2 mm per unit GAI).
pub fn interception(precipitation: f64, crop_demand: f64, gai: f64) -> f64 {
    precipitation.min(crop_demand).min(INTERCEPTION_PER_GAI * gai)
}

/// Step 5: Water stress reduction factor Kr ∈ [0, 1].
///
/// Squared deficit ratio between the current storage and the stress
/// thresholds derived from field capacity and wilting point, capped at 1.
///
/// The denominator `0.95·tfield − 0.7·twilt` is guaranteed nonzero by
/// `SoilParameters` validation.
pub fn stress_factor(water: f64, twilt: f64, tfield: f64, saturation: f64) -> f64 {
    let upper = FIELD_HEADROOM * tfield;
    let lower = ALPHA * twilt;
    let deficit = (upper - water / saturation) / (upper - lower);
    let kr = (1.0 - deficit) * (1.0 - deficit);
    kr.min(1.0)
}

/// Step 7: Bypass flow [mm/day].
///
/// Water above field capacity drains out of the profile immediately.
pub fn bypass(water: f64, tfield: f64, saturation: f64) -> f64 {
    (water - tfield * saturation).max(0.0)
}
