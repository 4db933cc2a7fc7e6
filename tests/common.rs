// ABOUTME: Shared test utilities for the AtmoSphere engine integration tests
// ABOUTME: Provides fixture climatology providers and the London reference distribution
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 AtmoSphere Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `atmosphere`
//!
//! Fixture providers cover the behaviors integration tests need to provoke:
//! a fixed reference climatology, per-call failure injection, permanent
//! unavailability, and slow responses for timeout coverage.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Once;
use std::time::Duration;

use async_trait::async_trait;

use atmosphere::{
    CalendarDay, ClimateDistribution, ClimatologyProvider, Coordinate, ProviderError,
    ProviderResult, VariableStats,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_test_writer()
            .init();
    });
}

/// Years stamped onto fixture distributions
pub const FIXTURE_YEARS: u32 = 40;

/// The London mid-July reference distribution used across scenario tests.
///
/// Chosen so the reference test profile {15, 25, 10, 20, 70} is partially
/// met: temperature and wind inside bounds, rain and humidity above their
/// ceilings.
pub fn london_july_distribution() -> ClimateDistribution {
    ClimateDistribution {
        temperature_c: VariableStats::new(18.5, 3.2, FIXTURE_YEARS),
        temperature_min_c: 13.9,
        temperature_max_c: 23.4,
        wind_speed_ms: VariableStats::new(3.8, 1.4, FIXTURE_YEARS),
        wind_gust_ms: 7.9,
        humidity_pct: VariableStats::new(72.0, 7.5, FIXTURE_YEARS),
        rain_chance_pct: VariableStats::new(30.0, 11.0, FIXTURE_YEARS),
        precipitation_mm_day: 2.0,
        clearness_index: 0.52,
        location_title: Some("London Reference Cell".to_owned()),
    }
}

/// Serves one fixed distribution for every request and counts calls.
pub struct FixtureProvider {
    distribution: ClimateDistribution,
    calls: AtomicUsize,
}

impl FixtureProvider {
    pub fn new(distribution: ClimateDistribution) -> Self {
        Self {
            distribution,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn london() -> Self {
        Self::new(london_july_distribution())
    }

    /// Number of fetches the engine issued against this provider
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ClimatologyProvider for FixtureProvider {
    fn name(&self) -> &'static str {
        "fixture"
    }

    async fn fetch_climatology(
        &self,
        _location: Coordinate,
        _day: CalendarDay,
    ) -> ProviderResult<ClimateDistribution> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.distribution.clone())
    }
}

/// Fails the first `failures` fetches it receives, then behaves like the
/// fixture provider. Completion order is irrelevant to the tests that use
/// it; they assert on counts and index bookkeeping, not on which sample
/// drew the failure.
pub struct FlakyProvider {
    distribution: ClimateDistribution,
    failures: usize,
    calls: AtomicUsize,
}

impl FlakyProvider {
    pub fn failing_first(failures: usize) -> Self {
        Self {
            distribution: london_july_distribution(),
            failures,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ClimatologyProvider for FlakyProvider {
    fn name(&self) -> &'static str {
        "flaky"
    }

    async fn fetch_climatology(
        &self,
        location: Coordinate,
        _day: CalendarDay,
    ) -> ProviderResult<ClimateDistribution> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.failures {
            return Err(ProviderError::Api(format!(
                "simulated outage at ({}, {})",
                location.lat, location.lon
            )));
        }
        Ok(self.distribution.clone())
    }
}

/// Reports every coordinate as having no climatology record.
pub struct UnavailableProvider;

#[async_trait]
impl ClimatologyProvider for UnavailableProvider {
    fn name(&self) -> &'static str {
        "unavailable"
    }

    async fn fetch_climatology(
        &self,
        location: Coordinate,
        _day: CalendarDay,
    ) -> ProviderResult<ClimateDistribution> {
        Err(ProviderError::DataUnavailable {
            lat: location.lat,
            lon: location.lon,
        })
    }
}

/// Answers correctly but only after a fixed delay; pair with a short
/// engine `sample_timeout` to exercise the timeout policy.
pub struct SlowProvider {
    delay: Duration,
    slow_calls: usize,
    calls: AtomicUsize,
}

impl SlowProvider {
    /// Delay every call
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            slow_calls: usize::MAX,
            calls: AtomicUsize::new(0),
        }
    }

    /// Delay only the first `slow_calls` calls
    pub fn slow_first(delay: Duration, slow_calls: usize) -> Self {
        Self {
            delay,
            slow_calls,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ClimatologyProvider for SlowProvider {
    fn name(&self) -> &'static str {
        "slow"
    }

    async fn fetch_climatology(
        &self,
        _location: Coordinate,
        _day: CalendarDay,
    ) -> ProviderResult<ClimateDistribution> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.slow_calls {
            tokio::time::sleep(self.delay).await;
        }
        Ok(london_july_distribution())
    }
}
