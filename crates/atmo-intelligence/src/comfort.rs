// ABOUTME: Factor score calculator and weighted aggregator for the comfort pipeline
// ABOUTME: Pure, deterministic scoring of climate means against user thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AtmoSphere Contributors

//! Factor scoring and weighted aggregation.
//!
//! Temperature is a *range* factor: the score is 100 while the
//! climatological mean lies inside the user's comfortable range and decays
//! linearly to 0 at [`TEMPERATURE_FALLOFF_MARGIN_C`] beyond the nearer
//! bound. Wind, rain chance, and humidity are *ceiling* factors: the score
//! is 100 at or below the user's ceiling and decays linearly to 0 at
//! [`CEILING_FALLOFF_MULTIPLIER`] times the ceiling.
//!
//! The `meets_profile` flag on each [`FactorScore`] is the hard threshold
//! check on the mean, independent of the continuous falloff.

use atmo_core::{
    ClimateDistribution, ComfortFactor, ComfortProfile, EngineError, EngineResult, FactorScore,
    WeightSet,
};

use crate::climate_constants::comfort_scoring::{
    CEILING_FALLOFF_MULTIPLIER, SCORE_MAX, TEMPERATURE_FALLOFF_MARGIN_C,
};

/// Score a range factor: 100 inside `[low, high]`, linear falloff outside,
/// zero at [`TEMPERATURE_FALLOFF_MARGIN_C`] beyond the nearer bound.
#[must_use]
pub fn score_range_factor(mean: f64, low: f64, high: f64) -> (f64, bool) {
    let meets = (low..=high).contains(&mean);
    if meets {
        return (SCORE_MAX, true);
    }
    let distance = if mean < low { low - mean } else { mean - high };
    let score = SCORE_MAX * (1.0 - distance / TEMPERATURE_FALLOFF_MARGIN_C);
    (score.clamp(0.0, SCORE_MAX), false)
}

/// Score a ceiling factor: 100 at or below `ceiling`, linear falloff above,
/// zero at `ceiling * CEILING_FALLOFF_MULTIPLIER`.
///
/// A zero ceiling has a zero-width falloff span; any positive mean scores 0
/// immediately rather than dividing by zero.
#[must_use]
pub fn score_ceiling_factor(mean: f64, ceiling: f64) -> (f64, bool) {
    if mean <= ceiling {
        return (SCORE_MAX, true);
    }
    let span = ceiling * (CEILING_FALLOFF_MULTIPLIER - 1.0);
    if span <= f64::EPSILON {
        return (0.0, false);
    }
    let score = SCORE_MAX * (1.0 - (mean - ceiling) / span);
    (score.clamp(0.0, SCORE_MAX), false)
}

/// Score all four comfort factors against a profile, in canonical order.
#[must_use]
pub fn score_factors(
    distribution: &ClimateDistribution,
    profile: &ComfortProfile,
) -> Vec<FactorScore> {
    ComfortFactor::ORDERED
        .iter()
        .map(|&factor| {
            let (score, meets_profile) = match factor {
                ComfortFactor::Temperature => score_range_factor(
                    distribution.temperature_c.mean,
                    profile.temp_min_c,
                    profile.temp_max_c,
                ),
                ComfortFactor::Wind => {
                    score_ceiling_factor(distribution.wind_speed_ms.mean, profile.wind_max_ms)
                }
                ComfortFactor::Rain => score_ceiling_factor(
                    distribution.rain_chance_pct.mean,
                    profile.rain_chance_max_pct,
                ),
                ComfortFactor::Humidity => {
                    score_ceiling_factor(distribution.humidity_pct.mean, profile.humidity_max_pct)
                }
            };
            FactorScore {
                factor,
                score,
                meets_profile,
            }
        })
        .collect()
}

/// Combine factor scores into the weighted composite comfort score.
///
/// Composite = sum(score_i * weight_i) / sum(weight_i) over the canonical
/// factor order.
///
/// # Errors
///
/// Returns [`EngineError::DegenerateWeights`] when the weights sum to zero;
/// the engine never substitutes a fallback weight set on its own.
pub fn aggregate(factor_scores: &[FactorScore], weights: &WeightSet) -> EngineResult<f64> {
    let total_weight = weights.total();
    if total_weight <= 0.0 {
        return Err(EngineError::DegenerateWeights);
    }
    let weighted_sum: f64 = factor_scores
        .iter()
        .map(|fs| fs.score * weights.for_factor(fs.factor))
        .sum();
    Ok((weighted_sum / total_weight).clamp(0.0, SCORE_MAX))
}
