// ABOUTME: Specialty index calculator: heat discomfort, golden hour, sunlight, outdoor activity
// ABOUTME: Informational indices derived from the climate distribution alone, never the composite
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AtmoSphere Contributors

//! Specialty indices.
//!
//! Each index is an independent formula over a subset of climate variables,
//! monotonic in its documented direction and bounded to [0, 100]. Specialty
//! indices are informational only and never participate in the composite
//! comfort score.

use atmo_core::{ClimateDistribution, SpecialtyIndices};

use crate::climate_constants::heat_index::{
    HEAT_CHANCE_PER_DEGREE, HEAT_DISCOMFORT_ONSET_C, SIMPLE_FORMULA_THRESHOLD_F,
};
use crate::climate_constants::specialty::{
    GOLDEN_HOUR_CLEARNESS_WEIGHT, GOLDEN_HOUR_DRY_AIR_WEIGHT, OUTDOOR_CALM_WIND_CEILING_MS,
    OUTDOOR_IDEAL_TEMPERATURE_C, OUTDOOR_TEMPERATURE_TOLERANCE_C,
};

/// Perceived temperature in Celsius from air temperature and relative
/// humidity, per the NOAA heat-index regressions.
///
/// The regression is defined in Fahrenheit, so the input converts out and
/// the result converts back. Below [`SIMPLE_FORMULA_THRESHOLD_F`] the
/// simple averaged form applies; above it, the full Rothfusz regression.
#[must_use]
pub fn heat_index_celsius(temperature_c: f64, relative_humidity_pct: f64) -> f64 {
    let t_f = temperature_c * 9.0 / 5.0 + 32.0;
    let rh = relative_humidity_pct;

    let hi_f = if t_f < SIMPLE_FORMULA_THRESHOLD_F {
        0.5 * (t_f + 61.0 + ((t_f - 68.0) * 1.2) + (rh * 0.094))
    } else {
        -42.379 + 2.049_015_23 * t_f + 10.143_331_27 * rh
            - 0.224_755_41 * t_f * rh
            - 0.006_837_83 * t_f * t_f
            - 0.054_817_17 * rh * rh
            + 0.001_228_74 * t_f * t_f * rh
            + 0.000_852_82 * t_f * rh * rh
            - 0.000_001_99 * t_f * t_f * rh * rh
    };

    (hi_f - 32.0) * 5.0 / 9.0
}

/// Chance that heat and humidity combine into discomfort, in [0, 100].
///
/// Zero until the mean temperature passes
/// [`HEAT_DISCOMFORT_ONSET_C`]; beyond that, each degree of heat index
/// above the onset adds [`HEAT_CHANCE_PER_DEGREE`] percent. Monotonic:
/// hotter or more humid days never lower the chance.
#[must_use]
pub fn uncomfortable_heat_chance(temperature_c: f64, relative_humidity_pct: f64) -> f64 {
    if temperature_c <= HEAT_DISCOMFORT_ONSET_C {
        return 0.0;
    }
    let heat_index = heat_index_celsius(temperature_c, relative_humidity_pct);
    ((heat_index - HEAT_DISCOMFORT_ONSET_C) * HEAT_CHANCE_PER_DEGREE).clamp(0.0, 100.0)
}

/// Golden-hour light quality in [0, 100]: mostly clearness, tempered by a
/// dry-air component (humid air hazes the horizon light).
///
/// Monotonic: more clearness never lowers it, more humidity never raises it.
#[must_use]
pub fn golden_hour_quality(clearness_index: f64, relative_humidity_pct: f64) -> f64 {
    let clearness = clearness_index.clamp(0.0, 1.0);
    let dry_air = 1.0 - relative_humidity_pct.clamp(0.0, 100.0) / 100.0;
    (100.0 * (GOLDEN_HOUR_CLEARNESS_WEIGHT * clearness + GOLDEN_HOUR_DRY_AIR_WEIGHT * dry_air))
        .clamp(0.0, 100.0)
}

/// Suitability for outdoor activity in [0, 100]: equal-weight mean of a
/// dryness component, a calm-wind component, and a temperature-proximity
/// component.
///
/// Monotonic in documented directions: more rain chance never raises it,
/// more wind never raises it, and greater distance from the ideal
/// temperature never raises it.
#[must_use]
pub fn outdoor_activity_index(
    temperature_c: f64,
    wind_speed_ms: f64,
    rain_chance_pct: f64,
) -> f64 {
    let dryness = 100.0 - rain_chance_pct.clamp(0.0, 100.0);
    let calm = (100.0 * (1.0 - wind_speed_ms.max(0.0) / OUTDOOR_CALM_WIND_CEILING_MS))
        .clamp(0.0, 100.0);
    let temperature_distance = (temperature_c - OUTDOOR_IDEAL_TEMPERATURE_C).abs();
    let temperate = (100.0 * (1.0 - temperature_distance / OUTDOOR_TEMPERATURE_TOLERANCE_C))
        .clamp(0.0, 100.0);
    (dryness + calm + temperate) / 3.0
}

/// Compute every specialty index for one climate distribution.
#[must_use]
pub fn specialty_indices(distribution: &ClimateDistribution) -> SpecialtyIndices {
    SpecialtyIndices {
        uncomfortable_heat_chance: uncomfortable_heat_chance(
            distribution.temperature_c.mean,
            distribution.humidity_pct.mean,
        ),
        golden_hour_quality: golden_hour_quality(
            distribution.clearness_index,
            distribution.humidity_pct.mean,
        ),
        sunny_day_likelihood: (distribution.clearness_index.clamp(0.0, 1.0) * 100.0).round(),
        outdoor_activity_index: outdoor_activity_index(
            distribution.temperature_c.mean,
            distribution.wind_speed_ms.mean,
            distribution.rain_chance_pct.mean,
        ),
    }
}
