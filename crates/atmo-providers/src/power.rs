// ABOUTME: NASA POWER climatology provider implementing ClimatologyProvider
// ABOUTME: Fetches multi-decade monthly climatology from the POWER temporal API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AtmoSphere Contributors

//! NASA POWER climatology adapter.
//!
//! POWER publishes multi-decade climatological normals keyed by upper-case
//! month name. The adapter requests the full parameter suite the engine
//! consumes (temperature, wind, humidity, precipitation, and the sunlight
//! proxies for specialty indices) in one call, then reduces the monthly
//! record to a [`ClimateDistribution`].
//!
//! POWER encodes missing data as `-999`. A missing core temperature means
//! the cell has no usable record and maps to
//! [`ProviderError::DataUnavailable`]; auxiliary parameters fall back to
//! neutral defaults instead.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use atmo_core::{
    CalendarDay, ClimateDistribution, Coordinate, ProviderError, ProviderResult, VariableStats,
};

use crate::core::ClimatologyProvider;
use crate::http_client::shared_client;

/// POWER climatology point endpoint
const POWER_CLIMATOLOGY_URL: &str = "https://power.larc.nasa.gov/api/temporal/climatology/point";

/// Parameter suite requested from POWER, matching the engine's needs:
/// temperature (avg/max/min), wind (avg/max), humidity, precipitation, and
/// the insolation/clearness sunlight proxies.
const POWER_PARAMETERS: &str = "T2M,T2M_MAX,T2M_MIN,WS10M,WS10M_MAX,RH2M,PRECTOTCORR,ALLSKY_SFC_SW_DWN,KT";

/// POWER community whose parameter set covers the suite above
const POWER_COMMUNITY: &str = "RE";

/// POWER's missing-data sentinel; any value below this is treated as absent
const MISSING_SENTINEL_THRESHOLD: f64 = -900.0;

/// Approximate depth of the multi-decade record behind POWER normals
const POWER_RECORD_YEARS: u32 = 40;

/// Percent of rainy-day chance per millimeter of mean daily precipitation.
///
/// The heuristic the original analysis used to turn a climatological
/// precipitation amount into an estimated chance of a rainy day, capped at
/// 100.
const RAIN_CHANCE_PER_MM_DAY: f64 = 15.0;

/// Divisor of the daily min-to-max spread used as a variance proxy.
///
/// Monthly climatology carries no variance, so the temperature standard
/// deviation is approximated by the range rule (range / 4).
const RANGE_RULE_DIVISOR: f64 = 4.0;

/// Neutral fallback for missing humidity (percent)
const DEFAULT_HUMIDITY_PCT: f64 = 50.0;

/// Neutral fallback for missing clearness index (partly cloudy)
const DEFAULT_CLEARNESS_INDEX: f64 = 0.5;

/// Configuration for the POWER adapter
#[derive(Debug, Clone)]
pub struct PowerConfig {
    /// Endpoint to query; overridable for tests and mirrors
    pub base_url: String,
    /// Optional POWER API key
    pub api_key: Option<String>,
}

impl Default for PowerConfig {
    fn default() -> Self {
        Self {
            base_url: POWER_CLIMATOLOGY_URL.to_owned(),
            api_key: None,
        }
    }
}

/// NASA POWER climatology provider
pub struct PowerProvider {
    config: PowerConfig,
    client: Client,
}

/// POWER climatology response body
#[derive(Debug, Deserialize)]
struct PowerResponse {
    properties: Option<PowerProperties>,
    header: Option<PowerHeader>,
}

/// Parameter table: parameter name -> month key -> value
#[derive(Debug, Deserialize)]
struct PowerProperties {
    parameter: HashMap<String, HashMap<String, f64>>,
}

/// Response header carrying the human-readable location title
#[derive(Debug, Deserialize)]
struct PowerHeader {
    title: Option<String>,
}

impl PowerProvider {
    /// Create a provider with explicit configuration
    #[must_use]
    pub fn new(config: PowerConfig) -> Self {
        Self {
            config,
            client: shared_client().clone(),
        }
    }

    /// Create a provider against the public POWER endpoint, no API key
    #[must_use]
    pub fn with_default_config() -> Self {
        Self::new(PowerConfig::default())
    }

    /// Look up one parameter for one month, treating the POWER missing
    /// sentinel as absent.
    fn parameter(
        table: &HashMap<String, HashMap<String, f64>>,
        name: &str,
        month_key: &str,
    ) -> Option<f64> {
        table
            .get(name)
            .and_then(|months| months.get(month_key))
            .copied()
            .filter(|v| *v > MISSING_SENTINEL_THRESHOLD)
    }

    /// Reduce a POWER parameter table to the engine's distribution model.
    fn build_distribution(
        table: &HashMap<String, HashMap<String, f64>>,
        title: Option<String>,
        location: Coordinate,
        day: CalendarDay,
    ) -> ProviderResult<ClimateDistribution> {
        let month_key = day.month_key();

        // Core temperature is the availability signal: a cell without T2M
        // has no usable record at all.
        let temp_avg = Self::parameter(table, "T2M", month_key).ok_or_else(|| {
            ProviderError::DataUnavailable {
                lat: location.lat,
                lon: location.lon,
            }
        })?;
        let temp_max = Self::parameter(table, "T2M_MAX", month_key).unwrap_or(temp_avg);
        let temp_min = Self::parameter(table, "T2M_MIN", month_key).unwrap_or(temp_avg);
        let temp_std = ((temp_max - temp_min) / RANGE_RULE_DIVISOR).max(0.0);

        let wind_avg = Self::parameter(table, "WS10M", month_key).unwrap_or(0.0);
        let wind_gust = Self::parameter(table, "WS10M_MAX", month_key).unwrap_or(wind_avg);
        let wind_std = ((wind_gust - wind_avg) / 2.0).max(0.0);

        let humidity_avg =
            Self::parameter(table, "RH2M", month_key).unwrap_or(DEFAULT_HUMIDITY_PCT);

        let precip_daily = Self::parameter(table, "PRECTOTCORR", month_key).unwrap_or(0.0);
        let rain_chance = (precip_daily * RAIN_CHANCE_PER_MM_DAY).min(100.0);

        let clearness =
            Self::parameter(table, "KT", month_key).unwrap_or(DEFAULT_CLEARNESS_INDEX);

        Ok(ClimateDistribution {
            temperature_c: VariableStats::new(temp_avg, temp_std, POWER_RECORD_YEARS),
            temperature_min_c: temp_min,
            temperature_max_c: temp_max,
            wind_speed_ms: VariableStats::new(wind_avg, wind_std, POWER_RECORD_YEARS),
            wind_gust_ms: wind_gust,
            // Monthly normals carry no spread for these; zero std states
            // that honestly rather than inventing variance.
            humidity_pct: VariableStats::new(humidity_avg, 0.0, POWER_RECORD_YEARS),
            rain_chance_pct: VariableStats::new(rain_chance, 0.0, POWER_RECORD_YEARS),
            precipitation_mm_day: precip_daily,
            clearness_index: clearness.clamp(0.0, 1.0),
            location_title: title,
        })
    }
}

#[async_trait]
impl ClimatologyProvider for PowerProvider {
    fn name(&self) -> &'static str {
        "nasa-power"
    }

    async fn fetch_climatology(
        &self,
        location: Coordinate,
        day: CalendarDay,
    ) -> ProviderResult<ClimateDistribution> {
        let mut query: Vec<(&str, String)> = vec![
            ("latitude", location.lat.to_string()),
            ("longitude", location.lon.to_string()),
            ("community", POWER_COMMUNITY.to_owned()),
            ("parameters", POWER_PARAMETERS.to_owned()),
            ("format", "JSON".to_owned()),
        ];
        if let Some(key) = &self.config.api_key {
            query.push(("api_key", key.clone()));
        }

        debug!(
            lat = location.lat,
            lon = location.lon,
            month = day.month,
            "fetching POWER climatology"
        );

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&query)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_owned());
            warn!(%status, "POWER request failed");
            return Err(ProviderError::Api(format!(
                "POWER returned status {status}: {body}"
            )));
        }

        let payload: PowerResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::MalformedResponse {
                context: format!("decoding POWER climatology body: {e}"),
            })?;

        let properties = payload
            .properties
            .ok_or_else(|| ProviderError::MalformedResponse {
                context: "response carries no properties block".to_owned(),
            })?;
        let title = payload.header.and_then(|h| h.title);

        Self::build_distribution(&properties.parameter, title, location, day)
    }
}
