// ABOUTME: Engine configuration: fan-out concurrency, per-sample timeout, sampler seed
// ABOUTME: Scoring formulas are fixed by contract; only resource behavior is configurable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AtmoSphere Contributors

//! Engine configuration.

use std::time::Duration;

use atmo_intelligence::climate_constants::sampling::{DEFAULT_SAMPLER_SEED, MAX_REGION_SAMPLES};

/// Default concurrent sample fetches per region request
const DEFAULT_SAMPLE_CONCURRENCY: usize = 4;

/// Default per-sample fetch deadline
const DEFAULT_SAMPLE_TIMEOUT: Duration = Duration::from_secs(30);

/// Resource and determinism settings for the comfort engine.
///
/// Scoring behavior (falloff margins, specialty formulas, inference bands)
/// is part of the engine contract and deliberately not configurable here.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Maximum concurrent per-sample pipelines for one region request.
    ///
    /// Bounds the fan-out so a single polygon request cannot overwhelm the
    /// external climatology source.
    pub sample_concurrency: usize,
    /// Deadline applied to each sample's climatology fetch; a timed-out
    /// sample is a failed sample, not a fatal error
    pub sample_timeout: Duration,
    /// Seed for the polygon sampler's RNG; fixed seed, fixed sample layout
    pub sampler_seed: u64,
    /// Upper bound on `sample_count` for one region request
    pub max_region_samples: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sample_concurrency: DEFAULT_SAMPLE_CONCURRENCY,
            sample_timeout: DEFAULT_SAMPLE_TIMEOUT,
            sampler_seed: DEFAULT_SAMPLER_SEED,
            max_region_samples: MAX_REGION_SAMPLES,
        }
    }
}

impl EngineConfig {
    /// Override the fan-out concurrency bound (minimum 1)
    #[must_use]
    pub fn with_sample_concurrency(mut self, concurrency: usize) -> Self {
        self.sample_concurrency = concurrency.max(1);
        self
    }

    /// Override the per-sample fetch deadline
    #[must_use]
    pub const fn with_sample_timeout(mut self, timeout: Duration) -> Self {
        self.sample_timeout = timeout;
        self
    }

    /// Override the sampler seed
    #[must_use]
    pub const fn with_sampler_seed(mut self, seed: u64) -> Self {
        self.sampler_seed = seed;
        self
    }
}
