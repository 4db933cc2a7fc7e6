// ABOUTME: Scoring result models: factor scores, atmospheric signature, region sampling output
// ABOUTME: Field names follow the original backend's JSON response contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AtmoSphere Contributors

//! Result models produced by the comfort engine.
//!
//! A [`ComfortResult`] is constructed once per request and never mutated
//! afterwards. Region requests additionally carry a [`RegionSummary`] and an
//! ordered [`SamplePoint`] list for the visualization layer.

use serde::{Deserialize, Serialize};

use crate::models::location::Coordinate;
use crate::models::profile::ComfortFactor;

/// Continuous match score for one comfort factor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorScore {
    /// Which factor this score describes
    pub factor: ComfortFactor,
    /// Match score in [0, 100]
    pub score: f64,
    /// Whether the distribution mean satisfies the hard threshold.
    ///
    /// Derived from the threshold check alone, independent of the continuous
    /// score's falloff behavior.
    pub meets_profile: bool,
}

/// Temperature block of the atmospheric signature (degrees Celsius)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureSummary {
    /// Climatological mean temperature
    pub avg: f64,
    /// Climatological mean of daily minima
    pub min: f64,
    /// Climatological mean of daily maxima
    pub max: f64,
    /// Whether the mean lies inside the profile's comfortable range
    pub meets_profile: bool,
}

/// Wind block of the atmospheric signature (meters per second)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindSummary {
    /// Climatological mean wind speed
    pub avg: f64,
    /// Climatological mean of daily maxima
    pub max: f64,
    /// Whether the mean is at or below the profile ceiling
    pub meets_profile: bool,
}

/// Humidity block of the atmospheric signature (percent)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HumiditySummary {
    /// Climatological mean relative humidity
    pub avg: f64,
    /// Whether the mean is at or below the profile ceiling
    pub meets_profile: bool,
}

/// Precipitation block of the atmospheric signature
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrecipitationSummary {
    /// Mean daily precipitation (millimeters per day)
    pub avg_daily_amount: f64,
    /// Estimated chance of a rainy day (percent)
    pub estimated_daily_chance: f64,
    /// Whether the estimated chance is at or below the profile ceiling
    pub meets_profile: bool,
}

/// Sunlight block of the atmospheric signature
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SunlightSummary {
    /// Likelihood of a sunny day (percent)
    pub sunny_day_likelihood: f64,
    /// All-sky clearness index in [0, 1]
    pub clearness_index: f64,
}

/// The per-location bundle of raw and derived climate values returned for
/// visualization
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtmosphericSignature {
    /// Temperature statistics
    pub temperature: TemperatureSummary,
    /// Wind statistics
    pub wind: WindSummary,
    /// Humidity statistics
    pub humidity: HumiditySummary,
    /// Precipitation statistics
    pub precipitation: PrecipitationSummary,
    /// Sunlight statistics
    pub sunlight: SunlightSummary,
}

/// Secondary, informational indices in [0, 100].
///
/// Never part of the composite comfort score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpecialtyIndices {
    /// Chance that heat and humidity combine into discomfort
    pub uncomfortable_heat_chance: f64,
    /// Quality of golden-hour light, from the clearness index
    pub golden_hour_quality: f64,
    /// Likelihood of a sunny day
    pub sunny_day_likelihood: f64,
    /// Suitability for outdoor activity
    pub outdoor_activity_index: f64,
}

/// One polygon sample's atmospheric signature subset, emitted in generation
/// order for the visualization layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    /// Zero-based index in the generation sequence
    pub index: usize,
    /// Sampled coordinate (interior or boundary of the request polygon)
    pub location: Coordinate,
    /// Composite comfort score at this sample
    pub overall_score: f64,
    /// Ordered per-factor scores at this sample
    pub factor_scores: Vec<FactorScore>,
}

/// Region-level sampling metadata attached to a polygon request's result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionSummary {
    /// Number of samples the caller requested
    pub requested_samples: usize,
    /// Number of samples that completed the pipeline
    pub successful_samples: usize,
    /// Generation indices of samples whose fetch failed or timed out.
    ///
    /// Failed indices are excluded from aggregation and from the sample
    /// point list, but the index sequence itself is preserved.
    pub failed_indices: Vec<usize>,
}

/// Full result of a point or region comfort request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComfortResult {
    /// Weighted composite comfort score in [0, 100]
    pub overall_score: f64,
    /// Per-factor scores in canonical order (temperature, wind, rain, humidity)
    pub factor_scores: Vec<FactorScore>,
    /// Informational specialty indices
    pub specialty_scores: SpecialtyIndices,
    /// Raw and derived climate values for visualization
    pub atmospheric_signature: AtmosphericSignature,
    /// Representative coordinate: the request point, or the first successful
    /// sample for a region request
    pub location: Coordinate,
    /// Human-readable location title, when the source supplied one
    pub location_title: Option<String>,
    /// Region sampling metadata; `None` for point requests
    pub region: Option<RegionSummary>,
    /// Ordered per-sample results; empty for point requests
    pub sample_points: Vec<SamplePoint>,
}
