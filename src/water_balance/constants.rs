/// Water balance numerical constants.
///
/// Centralises all fixed values used throughout the recurrence.

// -- Crop coefficient curve: kc = KC_MAX - KC_AMPLITUDE * exp(-KC_EXTINCTION * GAI) --

/// Crop coefficient at full canopy closure [-].
pub const KC_MAX: f64 = 1.3;

/// Drop from KC_MAX down to the bare-soil coefficient of 0.8 [-].
pub const KC_AMPLITUDE: f64 = 0.5;

/// Canopy extinction rate of the crop coefficient curve [-].
pub const KC_EXTINCTION: f64 = 0.17;

// -- Interception --

/// Canopy storage available for interception per unit GAI [mm].
pub const INTERCEPTION_PER_GAI: f64 = 0.2;

// -- Stress reduction --

/// Fraction of field capacity where water stops being limiting [-].
pub const FIELD_HEADROOM: f64 = 0.95;

/// Scaling of the wilting point in the stress denominator [-].
pub const ALPHA: f64 = 0.7;
