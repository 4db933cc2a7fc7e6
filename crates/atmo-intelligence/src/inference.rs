// ABOUTME: Profile inference: derives default comfort thresholds and weights from climatology
// ABOUTME: Pure math over a fetched distribution; the engine supplies the fetch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AtmoSphere Contributors

//! Default-profile inference.
//!
//! When a user has no declared comfort profile, the engine centers one on
//! the location's own climatological normals: a temperature band around the
//! historical mean (width proportional to its standard deviation) and
//! ceiling thresholds at the historical means plus fixed safety margins.
//! Default weights are the fixed all-1.0 baseline, not volatility-scaled.

use atmo_core::models::profile::{PROFILE_TEMP_CEIL_C, PROFILE_TEMP_FLOOR_C};
use atmo_core::{ClimateDistribution, ComfortProfile, EngineResult, WeightSet};

use crate::climate_constants::inference::{
    HUMIDITY_SAFETY_MARGIN_PCT, RAIN_CHANCE_SAFETY_MARGIN_PCT, TEMP_BAND_MIN_HALF_WIDTH_C,
    TEMP_BAND_STD_MULTIPLIER, WIND_SAFETY_MARGIN_MS,
};

/// Infer a default comfort profile and weight set from a distribution.
///
/// The returned profile always satisfies the [`ComfortProfile`] invariants:
/// the temperature band is clamped to the legal range and every ceiling to
/// its legal bounds.
///
/// # Errors
///
/// Returns [`atmo_core::EngineError::InvalidInput`] only when the
/// distribution itself carries non-finite statistics, which indicates a
/// misbehaving source adapter.
pub fn infer_from_distribution(
    distribution: &ClimateDistribution,
) -> EngineResult<(ComfortProfile, WeightSet)> {
    let temp_mean = distribution.temperature_c.mean;
    let half_width = (distribution.temperature_c.std_dev * TEMP_BAND_STD_MULTIPLIER)
        .max(TEMP_BAND_MIN_HALF_WIDTH_C);

    let temp_min = (temp_mean - half_width).clamp(PROFILE_TEMP_FLOOR_C, PROFILE_TEMP_CEIL_C);
    let temp_max = (temp_mean + half_width).clamp(PROFILE_TEMP_FLOOR_C, PROFILE_TEMP_CEIL_C);

    let wind_max = (distribution.wind_speed_ms.mean + WIND_SAFETY_MARGIN_MS).max(0.0);
    let rain_chance_max =
        (distribution.rain_chance_pct.mean + RAIN_CHANCE_SAFETY_MARGIN_PCT).clamp(0.0, 100.0);
    let humidity_max =
        (distribution.humidity_pct.mean + HUMIDITY_SAFETY_MARGIN_PCT).clamp(0.0, 100.0);

    let profile = ComfortProfile::new(temp_min, temp_max, wind_max, rain_chance_max, humidity_max)?;
    Ok((profile, WeightSet::default()))
}
