// ABOUTME: Core climatology provider trait consumed by the comfort engine
// ABOUTME: One fetch interface, shared by the scoring and profile-inference callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AtmoSphere Contributors

//! The climatology provider abstraction.

use async_trait::async_trait;

use atmo_core::{CalendarDay, ClimateDistribution, Coordinate, ProviderResult};

/// A source of multi-year climate distributions.
///
/// Implementations fetch (or synthesize) the statistical picture of one
/// coordinate and calendar day across all recorded years. Each call is
/// independent; the engine never asks a provider to cache, and a returned
/// [`ClimateDistribution`] is owned by the request that fetched it.
///
/// Implementations must be `Send + Sync`: the spatial sampler fans fetches
/// out across concurrent tasks.
#[async_trait]
pub trait ClimatologyProvider: Send + Sync {
    /// Stable provider name for logs and diagnostics
    fn name(&self) -> &'static str;

    /// Fetch the climate distribution for one coordinate and calendar day.
    ///
    /// # Errors
    ///
    /// - [`atmo_core::ProviderError::DataUnavailable`] when the source has
    ///   no record for the coordinate (open ocean cells, polar gaps).
    /// - Other [`atmo_core::ProviderError`] variants when the source is
    ///   unreachable or returns a payload the adapter cannot interpret.
    async fn fetch_climatology(
        &self,
        location: Coordinate,
        day: CalendarDay,
    ) -> ProviderResult<ClimateDistribution>;
}
