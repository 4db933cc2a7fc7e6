// ABOUTME: Named constants for comfort scoring, specialty indices, inference, and sampling
// ABOUTME: Every falloff margin and safety factor the engine applies is documented here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AtmoSphere Contributors

//! Climate-scoring constants.
//!
//! This module centralizes the fixed, documented values the engine's
//! formulas depend on. Scoring behavior is part of the engine contract, so
//! none of these are runtime-configurable.

/// Factor-score falloff geometry
pub mod comfort_scoring {
    /// Distance beyond the comfortable temperature bound at which the
    /// temperature score reaches zero (degrees Celsius).
    ///
    /// A mean 10 degC outside the user's range is treated as a total
    /// mismatch; the score decays linearly in between.
    pub const TEMPERATURE_FALLOFF_MARGIN_C: f64 = 10.0;

    /// Multiple of a ceiling threshold at which a ceiling factor's score
    /// reaches zero.
    ///
    /// A mean at twice the acceptable ceiling scores 0; the score decays
    /// linearly in between. A zero ceiling has a zero-width falloff span,
    /// so any positive mean saturates the score at 0 immediately.
    pub const CEILING_FALLOFF_MULTIPLIER: f64 = 2.0;

    /// Upper bound of every score the engine emits
    pub const SCORE_MAX: f64 = 100.0;
}

/// Heat-index formula inputs (NOAA simplified model)
///
/// Reference: Rothfusz, L.P. (1990). "The Heat Index Equation". NWS
/// Technical Attachment SR 90-23.
pub mod heat_index {
    /// Below this temperature (Fahrenheit) the simple regression applies;
    /// above it, the full Rothfusz regression
    pub const SIMPLE_FORMULA_THRESHOLD_F: f64 = 80.0;

    /// Mean temperature (Celsius) above which heat discomfort is evaluated
    pub const HEAT_DISCOMFORT_ONSET_C: f64 = 27.0;

    /// Percent of discomfort chance accrued per degree of heat index above
    /// the onset temperature
    pub const HEAT_CHANCE_PER_DEGREE: f64 = 10.0;
}

/// Specialty-index formula inputs
pub mod specialty {
    /// Weight of the clearness index in golden-hour quality
    pub const GOLDEN_HOUR_CLEARNESS_WEIGHT: f64 = 0.7;

    /// Weight of the dry-air component in golden-hour quality
    pub const GOLDEN_HOUR_DRY_AIR_WEIGHT: f64 = 0.3;

    /// Ideal outdoor-activity temperature (degrees Celsius)
    pub const OUTDOOR_IDEAL_TEMPERATURE_C: f64 = 21.0;

    /// Distance from the ideal temperature at which the temperature
    /// component of the outdoor-activity index reaches zero (degrees Celsius)
    pub const OUTDOOR_TEMPERATURE_TOLERANCE_C: f64 = 17.0;

    /// Wind speed at which the calm-wind component of the outdoor-activity
    /// index reaches zero (meters per second)
    pub const OUTDOOR_CALM_WIND_CEILING_MS: f64 = 15.0;
}

/// Profile-inference band widths and safety margins
pub mod inference {
    /// Half-width of the inferred temperature band, in standard deviations
    /// of the climatological mean temperature
    pub const TEMP_BAND_STD_MULTIPLIER: f64 = 1.0;

    /// Minimum half-width of the inferred temperature band (degrees
    /// Celsius), applied where the record's variance is tiny
    pub const TEMP_BAND_MIN_HALF_WIDTH_C: f64 = 2.0;

    /// Headroom added to the historical mean wind speed (meters per second)
    pub const WIND_SAFETY_MARGIN_MS: f64 = 3.0;

    /// Headroom added to the historical mean rain chance (percent)
    pub const RAIN_CHANCE_SAFETY_MARGIN_PCT: f64 = 15.0;

    /// Headroom added to the historical mean humidity (percent)
    pub const HUMIDITY_SAFETY_MARGIN_PCT: f64 = 10.0;
}

/// Spatial-sampling budgets and seeds
pub mod sampling {
    /// Rejection-sampling attempts allowed per requested sample point.
    ///
    /// Bounds the resample loop on near-degenerate polygons (a sliver
    /// occupying a tiny fraction of its bounding box) so generation always
    /// terminates.
    pub const REJECTION_ATTEMPTS_PER_SAMPLE: usize = 200;

    /// Default seed for the sampler's deterministic RNG
    pub const DEFAULT_SAMPLER_SEED: u64 = 0x4154_4d4f; // "ATMO"

    /// Maximum samples accepted for one region request, protecting the
    /// external climatology source from unbounded fan-out
    pub const MAX_REGION_SAMPLES: usize = 64;
}
