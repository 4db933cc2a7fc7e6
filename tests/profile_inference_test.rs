// ABOUTME: Integration tests for climatology-derived default profile inference
// ABOUTME: Verifies derived bands, invariant preservation, and the no-data error path
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 AtmoSphere Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::sync::Arc;

use atmosphere::providers::SyntheticProvider;
use atmosphere::{ComfortEngine, EngineError, WeightSet};

mod common;

use common::{FixtureProvider, UnavailableProvider};

const LONDON_LAT: f64 = 51.5072;
const LONDON_LON: f64 = -0.1276;

#[tokio::test]
async fn inferred_profile_centers_on_the_historical_normals() {
    let engine = ComfortEngine::new(Arc::new(FixtureProvider::london()));
    let (profile, weights) = engine
        .infer_profile(LONDON_LAT, LONDON_LON, 7, 15)
        .await
        .unwrap();

    // Fixture: temperature 18.5 +/- 3.2 std, wind 3.8, rain 30, humidity 72.
    assert!((profile.temp_min_c - 15.3).abs() < 1e-9);
    assert!((profile.temp_max_c - 21.7).abs() < 1e-9);
    assert!((profile.wind_max_ms - 6.8).abs() < 1e-9);
    assert!((profile.rain_chance_max_pct - 45.0).abs() < 1e-9);
    assert!((profile.humidity_max_pct - 82.0).abs() < 1e-9);
    assert_eq!(weights, WeightSet::default());
}

#[tokio::test]
async fn inferred_profiles_never_violate_invariants_across_the_globe() {
    let engine = ComfortEngine::new(Arc::new(SyntheticProvider::new()));
    for lat_step in 0..=8 {
        for lon_step in 0..=8 {
            let lat = -80.0 + f64::from(lat_step) * 20.0;
            let lon = -160.0 + f64::from(lon_step) * 40.0;
            for (month, day) in [(1, 15), (7, 15), (10, 1)] {
                let (profile, _) = engine
                    .infer_profile(lat, lon, month, day)
                    .await
                    .unwrap_or_else(|e| panic!("inference failed at ({lat}, {lon}): {e}"));
                assert!(
                    profile.temp_min_c <= profile.temp_max_c,
                    "band inverted at ({lat}, {lon})"
                );
                assert!(profile.wind_max_ms >= 0.0);
                assert!((0.0..=100.0).contains(&profile.rain_chance_max_pct));
                assert!((0.0..=100.0).contains(&profile.humidity_max_pct));
            }
        }
    }
}

#[tokio::test]
async fn inference_is_deterministic() {
    let engine = ComfortEngine::new(Arc::new(SyntheticProvider::new()));
    let first = engine.infer_profile(37.77, -122.42, 9, 21).await.unwrap();
    let second = engine.infer_profile(37.77, -122.42, 9, 21).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn missing_climatology_maps_to_no_climatology_available() {
    let engine = ComfortEngine::new(Arc::new(UnavailableProvider));
    let err = engine
        .infer_profile(LONDON_LAT, LONDON_LON, 7, 15)
        .await
        .unwrap_err();
    match err {
        EngineError::NoClimatologyAvailable { lat, lon } => {
            assert!((lat - LONDON_LAT).abs() < 1e-9);
            assert!((lon - LONDON_LON).abs() < 1e-9);
        }
        other => panic!("expected NoClimatologyAvailable, got {other:?}"),
    }
}

#[tokio::test]
async fn invalid_coordinates_are_rejected_before_the_fetch() {
    let provider = Arc::new(FixtureProvider::london());
    let engine = ComfortEngine::new(
        Arc::clone(&provider) as Arc<dyn atmosphere::ClimatologyProvider>
    );
    let err = engine.infer_profile(-91.0, 0.0, 7, 15).await.unwrap_err();
    assert!(matches!(
        err,
        EngineError::InvalidInput {
            field: "latitude",
            ..
        }
    ));
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn an_inferred_profile_scores_its_own_location_favorably() {
    // A profile centered on the local normals should rate the location
    // highly when scored right back against the same climatology.
    let engine = ComfortEngine::new(Arc::new(SyntheticProvider::new()));
    let (profile, weights) = engine.infer_profile(45.0, 7.0, 6, 10).await.unwrap();
    let result = engine
        .score_point(45.0, 7.0, 6, 10, &profile, &weights)
        .await
        .unwrap();
    assert!(
        result.overall_score >= 75.0,
        "self-scored location only reached {}",
        result.overall_score
    );
}
