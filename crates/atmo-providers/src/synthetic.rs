// ABOUTME: Deterministic synthetic climatology provider for tests and development
// ABOUTME: Latitude/season-driven smooth climate model, hash-seeded per coordinate and day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AtmoSphere Contributors

//! Synthetic climatology.
//!
//! A smooth, physically plausible climate model: temperature falls off from
//! the equator and swings seasonally with hemisphere-appropriate phase,
//! humidity and precipitation follow latitude bands, and clearness is
//! anti-correlated with moisture. A small jitter seeded from the coordinate
//! and calendar day keeps neighboring points distinguishable while staying
//! fully deterministic: the same request always yields the same
//! distribution.
//!
//! Useful for integration tests, demos, and development without network
//! access.

use std::f64::consts::TAU;

use async_trait::async_trait;
use chrono::NaiveDate;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use atmo_core::{
    CalendarDay, ClimateDistribution, Coordinate, ProviderResult, VariableStats,
};

use crate::core::ClimatologyProvider;

/// Years of synthetic record, matching the 1980-2023 span of the archival
/// dataset the project's validation tooling replays
const SYNTHETIC_RECORD_YEARS: u32 = 44;

/// Mean temperature at the equator (degrees Celsius)
const EQUATOR_MEAN_TEMP_C: f64 = 28.0;

/// Temperature lapse per degree of latitude (degrees Celsius)
const LATITUDE_LAPSE_C: f64 = 0.55;

/// Seasonal swing per degree of latitude, capped at 20 degC amplitude
const SEASONAL_SWING_PER_LATITUDE_C: f64 = 0.45;

/// Day of year when northern-hemisphere temperature peaks (around Jul 21)
const NORTHERN_PEAK_DOY: f64 = 202.0;

/// Percent of rainy-day chance per millimeter of mean daily precipitation
const RAIN_CHANCE_PER_MM_DAY: f64 = 15.0;

/// Deterministic synthetic climatology provider
#[derive(Debug, Default, Clone, Copy)]
pub struct SyntheticProvider;

impl SyntheticProvider {
    /// Create the provider
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Mix coordinate and calendar day into a stable RNG seed.
    fn seed_for(location: Coordinate, day: CalendarDay) -> u64 {
        let lat_bits = location.lat.to_bits();
        let lon_bits = location.lon.to_bits().rotate_left(17);
        let day_bits = u64::from(day.month * 100 + day.day).rotate_left(43);
        lat_bits ^ lon_bits ^ day_bits
    }

    /// Ordinal day of year against the leap reference year.
    fn day_of_year(day: CalendarDay) -> f64 {
        NaiveDate::from_ymd_opt(2000, day.month, day.day)
            .map_or(1.0, |d| f64::from(chrono::Datelike::ordinal(&d)))
    }
}

#[async_trait]
impl ClimatologyProvider for SyntheticProvider {
    fn name(&self) -> &'static str {
        "synthetic"
    }

    async fn fetch_climatology(
        &self,
        location: Coordinate,
        day: CalendarDay,
    ) -> ProviderResult<ClimateDistribution> {
        let mut rng = ChaCha8Rng::seed_from_u64(Self::seed_for(location, day));
        let abs_lat = location.lat.abs();

        // Seasonal phase peaks at NORTHERN_PEAK_DOY in the north and half a
        // year later in the south.
        let mut phase = TAU * (Self::day_of_year(day) - NORTHERN_PEAK_DOY) / 365.25;
        if location.lat < 0.0 {
            phase += TAU / 2.0;
        }
        let amplitude = (abs_lat * SEASONAL_SWING_PER_LATITUDE_C).min(20.0);

        let temp_mean = EQUATOR_MEAN_TEMP_C - abs_lat * LATITUDE_LAPSE_C
            + amplitude * phase.cos()
            + rng.gen_range(-0.8..=0.8);
        let temp_std = 2.0 + amplitude * 0.15;
        let diurnal_half_range = 4.0 + rng.gen_range(0.0..=2.0);

        let wind_mean = 2.5 + abs_lat / 30.0 + rng.gen_range(0.0..=2.0);
        let wind_std = 1.2;
        let wind_gust = wind_mean * 1.8;

        let humidity_mean = (82.0 - abs_lat * 0.35 + rng.gen_range(-5.0..=5.0)).clamp(15.0, 98.0);

        // Wet tropics, dry subtropics, moderate mid-latitudes.
        let precip_base = if abs_lat < 12.0 {
            6.0
        } else if abs_lat < 35.0 {
            1.6
        } else if abs_lat < 60.0 {
            2.6
        } else {
            1.0
        };
        let precip = (precip_base + rng.gen_range(-0.5_f64..=0.5)).max(0.0);
        let rain_chance = (precip * RAIN_CHANCE_PER_MM_DAY).min(100.0);

        let clearness =
            (0.78 - precip * 0.05 - (humidity_mean - 50.0).max(0.0) * 0.003).clamp(0.05, 0.9);

        Ok(ClimateDistribution {
            temperature_c: VariableStats::new(temp_mean, temp_std, SYNTHETIC_RECORD_YEARS),
            temperature_min_c: temp_mean - diurnal_half_range,
            temperature_max_c: temp_mean + diurnal_half_range,
            wind_speed_ms: VariableStats::new(wind_mean, wind_std, SYNTHETIC_RECORD_YEARS),
            wind_gust_ms: wind_gust,
            humidity_pct: VariableStats::new(humidity_mean, 8.0, SYNTHETIC_RECORD_YEARS),
            rain_chance_pct: VariableStats::new(rain_chance, 9.0, SYNTHETIC_RECORD_YEARS),
            precipitation_mm_day: precip,
            clearness_index: clearness,
            location_title: None,
        })
    }
}
