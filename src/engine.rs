// ABOUTME: ComfortEngine facade: validation, point pipeline, concurrent region fan-out
// ABOUTME: Wires the provider trait to the intelligence algorithms and assembles results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AtmoSphere Contributors

//! The comfort engine.
//!
//! `ComfortEngine` is the surface the transport layer consumes:
//!
//! - [`ComfortEngine::score_point`] — the degenerate single-sample case,
//!   one direct pipeline invocation;
//! - [`ComfortEngine::score_region`] — polygon mode: seeded interior
//!   sampling, bounded-concurrency fan-out of the point pipeline, and
//!   index-ordered aggregation under the partial-failure policy;
//! - [`ComfortEngine::infer_profile`] — default-profile inference from the
//!   same fetch interface the scoring paths use.
//!
//! All input validation happens before any fetch; validation failures are
//! never retried.

use std::sync::Arc;

use futures_util::future::join_all;
use tokio::sync::Semaphore;
use tokio::time::timeout;
use tracing::{debug, warn};

use atmo_core::{
    AtmosphericSignature, CalendarDay, ClimateDistribution, ComfortFactor, ComfortProfile,
    ComfortResult, Coordinate, EngineError, EngineResult, FactorScore, HumiditySummary,
    PrecipitationSummary, ProviderError, RegionSummary, SamplePoint, SpecialtyIndices,
    SunlightSummary, TemperatureSummary, WeightSet, WindSummary,
};
use atmo_intelligence::{
    aggregate, generate_sample_points, infer_from_distribution, polygon_from_vertices,
    score_factors, specialty_indices,
};
use atmo_providers::ClimatologyProvider;

use crate::config::EngineConfig;

/// Climatology-driven comfort scoring engine.
///
/// Holds a shared provider handle and resource configuration; all scoring
/// state lives in the request.
pub struct ComfortEngine {
    provider: Arc<dyn ClimatologyProvider>,
    config: EngineConfig,
}

impl ComfortEngine {
    /// Create an engine with default configuration
    #[must_use]
    pub fn new(provider: Arc<dyn ClimatologyProvider>) -> Self {
        Self::with_config(provider, EngineConfig::default())
    }

    /// Create an engine with explicit configuration
    #[must_use]
    pub const fn with_config(provider: Arc<dyn ClimatologyProvider>, config: EngineConfig) -> Self {
        Self { provider, config }
    }

    /// The engine's active configuration
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Score one coordinate and calendar day against a comfort profile.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidInput`] for out-of-range coordinates or dates
    ///   (checked before any fetch).
    /// - [`EngineError::DegenerateWeights`] when the weights sum to zero.
    /// - [`EngineError::SourceUnavailable`] when the climatology fetch
    ///   fails or times out; point requests surface this directly.
    pub async fn score_point(
        &self,
        lat: f64,
        lon: f64,
        month: u32,
        day: u32,
        profile: &ComfortProfile,
        weights: &WeightSet,
    ) -> EngineResult<ComfortResult> {
        let location = Coordinate::new(lat, lon)?;
        let calendar_day = CalendarDay::new(month, day)?;
        Self::reject_degenerate_weights(weights)?;

        debug!(lat, lon, month, day, "scoring point request");

        let distribution = self.fetch_bounded(location, calendar_day).await?;
        Self::assemble_point(location, &distribution, profile, weights)
    }

    /// Score a polygon region by sampling representative interior points.
    ///
    /// Every sample runs the full point pipeline independently; failed or
    /// timed-out samples are excluded from aggregation and listed in the
    /// result's [`RegionSummary::failed_indices`]. The sample list keeps
    /// generation order regardless of completion order.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidInput`] for malformed polygons, dates, or a
    ///   `sample_count` outside `1..=max_region_samples`.
    /// - [`EngineError::DegenerateWeights`] when the weights sum to zero.
    /// - [`EngineError::InsufficientSamples`] when no sample succeeds.
    pub async fn score_region(
        &self,
        vertices: &[(f64, f64)],
        month: u32,
        day: u32,
        profile: &ComfortProfile,
        weights: &WeightSet,
        sample_count: usize,
    ) -> EngineResult<ComfortResult> {
        let calendar_day = CalendarDay::new(month, day)?;
        Self::reject_degenerate_weights(weights)?;
        if sample_count == 0 || sample_count > self.config.max_region_samples {
            return Err(EngineError::invalid_input(
                "sample_count",
                format!(
                    "{sample_count} is outside [1, {}]",
                    self.config.max_region_samples
                ),
            ));
        }

        let polygon = polygon_from_vertices(vertices)?;
        let points = generate_sample_points(&polygon, sample_count, self.config.sampler_seed)?;

        debug!(
            requested = sample_count,
            placed = points.len(),
            concurrency = self.config.sample_concurrency,
            "scoring region request"
        );

        let semaphore = Arc::new(Semaphore::new(self.config.sample_concurrency));
        let handles: Vec<_> = points
            .iter()
            .enumerate()
            .map(|(index, &location)| {
                let provider = Arc::clone(&self.provider);
                let semaphore = Arc::clone(&semaphore);
                let config = self.config;
                let profile = *profile;
                let weights = *weights;
                tokio::spawn(async move {
                    let Ok(_permit) = semaphore.acquire_owned().await else {
                        return Err(EngineError::SourceUnavailable {
                            lat: location.lat,
                            lon: location.lon,
                            month: calendar_day.month,
                            day: calendar_day.day,
                            source: ProviderError::Network("sampler worker pool closed".to_owned()),
                        });
                    };
                    let distribution = Self::fetch_with(
                        provider.as_ref(),
                        &config,
                        location,
                        calendar_day,
                    )
                    .await?;
                    Self::assemble_point(location, &distribution, &profile, &weights)
                        .map(|result| (index, location, result))
                })
            })
            .collect();

        let mut successes: Vec<(usize, Coordinate, ComfortResult)> = Vec::new();
        let mut failed_indices: Vec<usize> = Vec::new();

        // join_all preserves spawn order, so collection is already in
        // generation order; no re-sort by completion time is needed.
        for (index, joined) in join_all(handles).await.into_iter().enumerate() {
            match joined {
                Ok(Ok(success)) => successes.push(success),
                Ok(Err(err)) => {
                    warn!(index, error = %err, "region sample failed");
                    failed_indices.push(index);
                }
                Err(join_err) => {
                    warn!(index, error = %join_err, "region sample task aborted");
                    failed_indices.push(index);
                }
            }
        }

        if successes.is_empty() {
            return Err(EngineError::InsufficientSamples {
                requested: sample_count,
                attempted: points.len(),
            });
        }

        Ok(Self::assemble_region(
            sample_count,
            profile,
            &successes,
            failed_indices,
        ))
    }

    /// Infer a default comfort profile and weight set from the location's
    /// own climatology.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidInput`] for out-of-range coordinates or dates.
    /// - [`EngineError::NoClimatologyAvailable`] when the source has no
    ///   record for the coordinate; callers treat this as non-fatal.
    /// - [`EngineError::SourceUnavailable`] when the source is unreachable.
    pub async fn infer_profile(
        &self,
        lat: f64,
        lon: f64,
        month: u32,
        day: u32,
    ) -> EngineResult<(ComfortProfile, WeightSet)> {
        let location = Coordinate::new(lat, lon)?;
        let calendar_day = CalendarDay::new(month, day)?;

        debug!(lat, lon, month, day, "inferring default profile");

        let distribution = match self.fetch_bounded(location, calendar_day).await {
            Ok(distribution) => distribution,
            Err(EngineError::SourceUnavailable { lat, lon, source, .. })
                if source.is_data_unavailable() =>
            {
                return Err(EngineError::NoClimatologyAvailable { lat, lon });
            }
            Err(err) => return Err(err),
        };
        infer_from_distribution(&distribution)
    }

    /// Weights summing to zero are rejected before any fetch; the engine
    /// never substitutes a fallback weight set on its own.
    fn reject_degenerate_weights(weights: &WeightSet) -> EngineResult<()> {
        if weights.total() <= 0.0 {
            return Err(EngineError::DegenerateWeights);
        }
        Ok(())
    }

    /// Fetch through the engine's own provider with the configured deadline.
    async fn fetch_bounded(
        &self,
        location: Coordinate,
        day: CalendarDay,
    ) -> EngineResult<ClimateDistribution> {
        Self::fetch_with(self.provider.as_ref(), &self.config, location, day).await
    }

    /// Fetch one distribution, bounding the call with the per-sample
    /// timeout and mapping failures into the engine taxonomy.
    async fn fetch_with(
        provider: &dyn ClimatologyProvider,
        config: &EngineConfig,
        location: Coordinate,
        day: CalendarDay,
    ) -> EngineResult<ClimateDistribution> {
        let fetched = timeout(
            config.sample_timeout,
            provider.fetch_climatology(location, day),
        )
        .await
        .unwrap_or_else(|_| {
            Err(ProviderError::Network(format!(
                "climatology fetch exceeded {:?} deadline",
                config.sample_timeout
            )))
        });

        fetched.map_err(|source| EngineError::SourceUnavailable {
            lat: location.lat,
            lon: location.lon,
            month: day.month,
            day: day.day,
            source,
        })
    }

    /// Run the pure scoring pipeline over one fetched distribution.
    fn assemble_point(
        location: Coordinate,
        distribution: &ClimateDistribution,
        profile: &ComfortProfile,
        weights: &WeightSet,
    ) -> EngineResult<ComfortResult> {
        let factor_scores = score_factors(distribution, profile);
        let overall_score = aggregate(&factor_scores, weights)?;
        Ok(ComfortResult {
            overall_score,
            factor_scores,
            specialty_scores: specialty_indices(distribution),
            atmospheric_signature: Self::build_signature(distribution, profile),
            location,
            location_title: distribution.location_title.clone(),
            region: None,
            sample_points: Vec::new(),
        })
    }

    /// Build the visualization signature from a distribution, with hard
    /// threshold flags consistent with the factor scorers.
    fn build_signature(
        distribution: &ClimateDistribution,
        profile: &ComfortProfile,
    ) -> AtmosphericSignature {
        AtmosphericSignature {
            temperature: TemperatureSummary {
                avg: distribution.temperature_c.mean,
                min: distribution.temperature_min_c,
                max: distribution.temperature_max_c,
                meets_profile: (profile.temp_min_c..=profile.temp_max_c)
                    .contains(&distribution.temperature_c.mean),
            },
            wind: WindSummary {
                avg: distribution.wind_speed_ms.mean,
                max: distribution.wind_gust_ms,
                meets_profile: distribution.wind_speed_ms.mean <= profile.wind_max_ms,
            },
            humidity: HumiditySummary {
                avg: distribution.humidity_pct.mean,
                meets_profile: distribution.humidity_pct.mean <= profile.humidity_max_pct,
            },
            precipitation: PrecipitationSummary {
                avg_daily_amount: distribution.precipitation_mm_day,
                estimated_daily_chance: distribution.rain_chance_pct.mean,
                meets_profile: distribution.rain_chance_pct.mean <= profile.rain_chance_max_pct,
            },
            sunlight: SunlightSummary {
                sunny_day_likelihood: (distribution.clearness_index.clamp(0.0, 1.0) * 100.0)
                    .round(),
                clearness_index: distribution.clearness_index,
            },
        }
    }

    /// Aggregate successful samples into the region-level result.
    ///
    /// The region composite is the arithmetic mean of sample composites
    /// (equal weight per sample; the sampling strategy already approximates
    /// area coverage). Signature fields and factor scores are averaged the
    /// same way, with hard threshold flags recomputed from the averaged
    /// means.
    fn assemble_region(
        requested_samples: usize,
        profile: &ComfortProfile,
        successes: &[(usize, Coordinate, ComfortResult)],
        failed_indices: Vec<usize>,
    ) -> ComfortResult {
        let n = successes.len() as f64;
        let mean =
            |extract: &dyn Fn(&ComfortResult) -> f64| -> f64 {
                successes.iter().map(|(_, _, r)| extract(r)).sum::<f64>() / n
            };

        let overall_score = mean(&|r| r.overall_score);

        let factor_scores: Vec<FactorScore> = ComfortFactor::ORDERED
            .iter()
            .enumerate()
            .map(|(i, &factor)| {
                let score = mean(&|r| r.factor_scores[i].score);
                let meets_profile = match factor {
                    ComfortFactor::Temperature => {
                        let avg = mean(&|r| r.atmospheric_signature.temperature.avg);
                        (profile.temp_min_c..=profile.temp_max_c).contains(&avg)
                    }
                    ComfortFactor::Wind => {
                        mean(&|r| r.atmospheric_signature.wind.avg) <= profile.wind_max_ms
                    }
                    ComfortFactor::Rain => {
                        mean(&|r| r.atmospheric_signature.precipitation.estimated_daily_chance)
                            <= profile.rain_chance_max_pct
                    }
                    ComfortFactor::Humidity => {
                        mean(&|r| r.atmospheric_signature.humidity.avg) <= profile.humidity_max_pct
                    }
                };
                FactorScore {
                    factor,
                    score,
                    meets_profile,
                }
            })
            .collect();

        let temperature_avg = mean(&|r| r.atmospheric_signature.temperature.avg);
        let wind_avg = mean(&|r| r.atmospheric_signature.wind.avg);
        let humidity_avg = mean(&|r| r.atmospheric_signature.humidity.avg);
        let rain_chance_avg =
            mean(&|r| r.atmospheric_signature.precipitation.estimated_daily_chance);
        let clearness_avg = mean(&|r| r.atmospheric_signature.sunlight.clearness_index);

        let atmospheric_signature = AtmosphericSignature {
            temperature: TemperatureSummary {
                avg: temperature_avg,
                min: mean(&|r| r.atmospheric_signature.temperature.min),
                max: mean(&|r| r.atmospheric_signature.temperature.max),
                meets_profile: (profile.temp_min_c..=profile.temp_max_c)
                    .contains(&temperature_avg),
            },
            wind: WindSummary {
                avg: wind_avg,
                max: mean(&|r| r.atmospheric_signature.wind.max),
                meets_profile: wind_avg <= profile.wind_max_ms,
            },
            humidity: HumiditySummary {
                avg: humidity_avg,
                meets_profile: humidity_avg <= profile.humidity_max_pct,
            },
            precipitation: PrecipitationSummary {
                avg_daily_amount: mean(&|r| r.atmospheric_signature.precipitation.avg_daily_amount),
                estimated_daily_chance: rain_chance_avg,
                meets_profile: rain_chance_avg <= profile.rain_chance_max_pct,
            },
            sunlight: SunlightSummary {
                sunny_day_likelihood: (clearness_avg.clamp(0.0, 1.0) * 100.0).round(),
                clearness_index: clearness_avg,
            },
        };

        let specialty_scores = SpecialtyIndices {
            uncomfortable_heat_chance: mean(&|r| r.specialty_scores.uncomfortable_heat_chance),
            golden_hour_quality: mean(&|r| r.specialty_scores.golden_hour_quality),
            sunny_day_likelihood: mean(&|r| r.specialty_scores.sunny_day_likelihood),
            outdoor_activity_index: mean(&|r| r.specialty_scores.outdoor_activity_index),
        };

        let sample_points: Vec<SamplePoint> = successes
            .iter()
            .map(|(index, location, result)| SamplePoint {
                index: *index,
                location: *location,
                overall_score: result.overall_score,
                factor_scores: result.factor_scores.clone(),
            })
            .collect();

        let (_, first_location, first_result) = &successes[0];

        ComfortResult {
            overall_score,
            factor_scores,
            specialty_scores,
            atmospheric_signature,
            location: *first_location,
            location_title: first_result.location_title.clone(),
            region: Some(RegionSummary {
                requested_samples,
                successful_samples: successes.len(),
                failed_indices,
            }),
            sample_points,
        }
    }
}
