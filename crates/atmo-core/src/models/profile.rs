// ABOUTME: User comfort thresholds and importance weights with constructor-time invariants
// ABOUTME: Replaces the original backend's loosely-typed request dictionaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AtmoSphere Contributors

//! Comfort profiles and score weights.

use serde::{Deserialize, Serialize};

use crate::errors::{EngineError, EngineResult};

/// Legal temperature band for profile thresholds (degrees Celsius).
///
/// Wide enough for any inhabited climate; profile inference clamps its
/// derived band to this range.
pub const PROFILE_TEMP_FLOOR_C: f64 = -60.0;
/// Upper bound of the legal profile temperature band (degrees Celsius)
pub const PROFILE_TEMP_CEIL_C: f64 = 60.0;

/// Maximum legal importance weight per factor
pub const WEIGHT_MAX: f64 = 3.0;

/// The four comfort factors, in the engine's fixed aggregation order.
///
/// The order (temperature, wind, rain, humidity) is part of the engine
/// contract: it makes aggregation, logging, and tie-breaking reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComfortFactor {
    /// Daily mean air temperature
    Temperature,
    /// Daily mean wind speed
    Wind,
    /// Estimated chance of a rainy day
    Rain,
    /// Daily mean relative humidity
    Humidity,
}

impl ComfortFactor {
    /// All factors in canonical aggregation order
    pub const ORDERED: [Self; 4] = [Self::Temperature, Self::Wind, Self::Rain, Self::Humidity];

    /// Stable lower-case factor name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Wind => "wind",
            Self::Rain => "rain",
            Self::Humidity => "humidity",
        }
    }
}

/// User comfort thresholds.
///
/// Invariants, enforced at construction:
/// - `temp_min_c <= temp_max_c`, both within the legal temperature band
/// - all ceilings are non-negative
/// - `rain_chance_max_pct` and `humidity_max_pct` are at most 100
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComfortProfile {
    /// Lower bound of the comfortable temperature range (degrees Celsius)
    pub temp_min_c: f64,
    /// Upper bound of the comfortable temperature range (degrees Celsius)
    pub temp_max_c: f64,
    /// Maximum acceptable mean wind speed (meters per second)
    pub wind_max_ms: f64,
    /// Maximum acceptable chance of rain (percent)
    pub rain_chance_max_pct: f64,
    /// Maximum acceptable relative humidity (percent)
    pub humidity_max_pct: f64,
}

impl ComfortProfile {
    /// Create a profile, validating every invariant.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] naming the offending field when
    /// any invariant is violated.
    pub fn new(
        temp_min_c: f64,
        temp_max_c: f64,
        wind_max_ms: f64,
        rain_chance_max_pct: f64,
        humidity_max_pct: f64,
    ) -> EngineResult<Self> {
        for (field, value) in [
            ("temp_min_c", temp_min_c),
            ("temp_max_c", temp_max_c),
            ("wind_max_ms", wind_max_ms),
            ("rain_chance_max_pct", rain_chance_max_pct),
            ("humidity_max_pct", humidity_max_pct),
        ] {
            if !value.is_finite() {
                return Err(EngineError::invalid_input(field, "must be finite"));
            }
        }
        if temp_min_c > temp_max_c {
            return Err(EngineError::invalid_input(
                "temp_min_c",
                format!("{temp_min_c} exceeds temp_max_c {temp_max_c}"),
            ));
        }
        if !(PROFILE_TEMP_FLOOR_C..=PROFILE_TEMP_CEIL_C).contains(&temp_min_c)
            || !(PROFILE_TEMP_FLOOR_C..=PROFILE_TEMP_CEIL_C).contains(&temp_max_c)
        {
            return Err(EngineError::invalid_input(
                "temp_max_c",
                format!(
                    "temperature band must lie within [{PROFILE_TEMP_FLOOR_C}, {PROFILE_TEMP_CEIL_C}]"
                ),
            ));
        }
        if wind_max_ms < 0.0 {
            return Err(EngineError::invalid_input(
                "wind_max_ms",
                format!("{wind_max_ms} is negative"),
            ));
        }
        if !(0.0..=100.0).contains(&rain_chance_max_pct) {
            return Err(EngineError::invalid_input(
                "rain_chance_max_pct",
                format!("{rain_chance_max_pct} is outside [0, 100]"),
            ));
        }
        if !(0.0..=100.0).contains(&humidity_max_pct) {
            return Err(EngineError::invalid_input(
                "humidity_max_pct",
                format!("{humidity_max_pct} is outside [0, 100]"),
            ));
        }
        Ok(Self {
            temp_min_c,
            temp_max_c,
            wind_max_ms,
            rain_chance_max_pct,
            humidity_max_pct,
        })
    }
}

impl Default for ComfortProfile {
    /// The original backend's default profile: 10-25 degC, wind <= 15 m/s,
    /// rain chance <= 20 %, humidity <= 80 %.
    fn default() -> Self {
        Self {
            temp_min_c: 10.0,
            temp_max_c: 25.0,
            wind_max_ms: 15.0,
            rain_chance_max_pct: 20.0,
            humidity_max_pct: 80.0,
        }
    }
}

/// Per-factor importance weights, each in [0, [`WEIGHT_MAX`]].
///
/// An all-zero weight set is constructible (every component is within
/// bounds) but the aggregator rejects it with
/// [`EngineError::DegenerateWeights`] because the weighted average is
/// undefined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightSet {
    /// Importance of the temperature factor
    pub temperature: f64,
    /// Importance of the wind factor
    pub wind: f64,
    /// Importance of the rain factor
    pub rain: f64,
    /// Importance of the humidity factor
    pub humidity: f64,
}

impl WeightSet {
    /// Create a weight set, validating every component.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] when any weight is non-finite
    /// or outside [0, [`WEIGHT_MAX`]].
    pub fn new(temperature: f64, wind: f64, rain: f64, humidity: f64) -> EngineResult<Self> {
        for (field, value) in [
            ("temperature_weight", temperature),
            ("wind_weight", wind),
            ("rain_weight", rain),
            ("humidity_weight", humidity),
        ] {
            if !value.is_finite() || !(0.0..=WEIGHT_MAX).contains(&value) {
                return Err(EngineError::invalid_input(
                    field,
                    format!("{value} is outside [0, {WEIGHT_MAX}]"),
                ));
            }
        }
        Ok(Self {
            temperature,
            wind,
            rain,
            humidity,
        })
    }

    /// Weight for a single factor
    #[must_use]
    pub const fn for_factor(&self, factor: ComfortFactor) -> f64 {
        match factor {
            ComfortFactor::Temperature => self.temperature,
            ComfortFactor::Wind => self.wind,
            ComfortFactor::Rain => self.rain,
            ComfortFactor::Humidity => self.humidity,
        }
    }

    /// Sum of all four weights
    #[must_use]
    pub fn total(&self) -> f64 {
        self.temperature + self.wind + self.rain + self.humidity
    }
}

impl Default for WeightSet {
    /// The original backend's default: every factor weighted 1.0.
    fn default() -> Self {
        Self {
            temperature: 1.0,
            wind: 1.0,
            rain: 1.0,
            humidity: 1.0,
        }
    }
}
