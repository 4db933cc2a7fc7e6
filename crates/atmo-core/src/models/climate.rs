// ABOUTME: Multi-year climate distribution models returned by source adapters
// ABOUTME: Immutable once fetched; owned by the request and never cached by the core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AtmoSphere Contributors

//! Climate distribution models.
//!
//! A [`ClimateDistribution`] is the multi-year statistical picture of one
//! (latitude, longitude, month, day) triple: the four comfort variables the
//! scoring pipeline consumes, plus the auxiliary values the specialty
//! indices derive from.

use serde::{Deserialize, Serialize};

/// Multi-year statistics for a single climate variable
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VariableStats {
    /// Mean across all recorded years
    pub mean: f64,
    /// Standard deviation across all recorded years
    pub std_dev: f64,
    /// Number of years in the record
    pub years: u32,
}

impl VariableStats {
    /// Construct stats for a variable.
    #[must_use]
    pub const fn new(mean: f64, std_dev: f64, years: u32) -> Self {
        Self {
            mean,
            std_dev,
            years,
        }
    }
}

/// Multi-year climate distribution for one location and calendar day.
///
/// Produced by a climatology source adapter, consumed read-only by the
/// factor scorers, specialty indices, and profile inference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateDistribution {
    /// Mean daily air temperature at 2 m (degrees Celsius)
    pub temperature_c: VariableStats,
    /// Climatological mean of daily minimum temperature (degrees Celsius)
    pub temperature_min_c: f64,
    /// Climatological mean of daily maximum temperature (degrees Celsius)
    pub temperature_max_c: f64,

    /// Mean wind speed at 10 m (meters per second)
    pub wind_speed_ms: VariableStats,
    /// Climatological mean of daily maximum wind speed (meters per second)
    pub wind_gust_ms: f64,

    /// Mean relative humidity at 2 m (percent, 0-100)
    pub humidity_pct: VariableStats,

    /// Estimated chance of a rainy day (percent, 0-100)
    pub rain_chance_pct: VariableStats,
    /// Mean daily precipitation (millimeters per day)
    pub precipitation_mm_day: f64,

    /// All-sky clearness index in [0, 1]; sunlight proxy for specialty indices
    pub clearness_index: f64,

    /// Human-readable source location title, when the source supplies one
    pub location_title: Option<String>,
}
