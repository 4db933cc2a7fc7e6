// ABOUTME: Integration tests for factor scoring and weighted aggregation
// ABOUTME: Covers score bounds, boundary behavior, falloff, and degenerate weights
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 AtmoSphere Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use atmosphere::comfort::{aggregate, score_ceiling_factor, score_factors, score_range_factor};
use atmosphere::{ComfortFactor, ComfortProfile, EngineError, FactorScore, WeightSet};

mod common;

fn reference_profile() -> ComfortProfile {
    ComfortProfile::new(15.0, 25.0, 10.0, 20.0, 70.0).unwrap()
}

#[test]
fn factor_scores_stay_in_bounds_across_a_mean_sweep() {
    let profile = reference_profile();
    let mut distribution = common::london_july_distribution();
    let mut mean = -60.0;
    while mean <= 60.0 {
        distribution.temperature_c.mean = mean;
        distribution.wind_speed_ms.mean = (mean + 60.0) / 2.0;
        distribution.humidity_pct.mean = (mean + 60.0) / 1.2;
        distribution.rain_chance_pct.mean = (mean + 60.0) / 1.2;
        for fs in score_factors(&distribution, &profile) {
            assert!(
                (0.0..=100.0).contains(&fs.score),
                "score {} out of bounds for {:?} at mean {mean}",
                fs.score,
                fs.factor
            );
        }
        mean += 0.25;
    }
}

#[test]
fn range_score_is_exactly_100_iff_mean_is_inside_the_range() {
    // Inclusive boundaries score full marks...
    assert_eq!(score_range_factor(15.0, 15.0, 25.0), (100.0, true));
    assert_eq!(score_range_factor(25.0, 15.0, 25.0), (100.0, true));
    assert_eq!(score_range_factor(20.0, 15.0, 25.0), (100.0, true));
    // ...and anything outside does not.
    let (just_under, meets_under) = score_range_factor(14.999, 15.0, 25.0);
    let (just_over, meets_over) = score_range_factor(25.001, 15.0, 25.0);
    assert!(just_under < 100.0 && !meets_under);
    assert!(just_over < 100.0 && !meets_over);
}

#[test]
fn range_score_decays_monotonically_away_from_the_range() {
    let mut previous = 100.0;
    let mut distance = 0.5;
    while distance <= 12.0 {
        let (score, _) = score_range_factor(25.0 + distance, 15.0, 25.0);
        assert!(score <= previous, "score rose as the mean moved further out");
        previous = score;
        distance += 0.5;
    }
    // Beyond the documented margin the score pins at zero.
    assert_eq!(score_range_factor(36.0, 15.0, 25.0).0, 0.0);
}

#[test]
fn ceiling_score_decays_to_zero_at_twice_the_ceiling() {
    assert_eq!(score_ceiling_factor(10.0, 10.0), (100.0, true));
    let (halfway, _) = score_ceiling_factor(15.0, 10.0);
    assert!((halfway - 50.0).abs() < 1e-9);
    assert_eq!(score_ceiling_factor(20.0, 10.0).0, 0.0);
    assert_eq!(score_ceiling_factor(45.0, 10.0).0, 0.0);
}

#[test]
fn zero_ceiling_saturates_immediately_without_dividing_by_zero() {
    assert_eq!(score_ceiling_factor(0.0, 0.0), (100.0, true));
    let (score, meets) = score_ceiling_factor(0.001, 0.0);
    assert_eq!(score, 0.0);
    assert!(!meets);
}

#[test]
fn factor_order_is_fixed() {
    let scores = score_factors(&common::london_july_distribution(), &reference_profile());
    let order: Vec<ComfortFactor> = scores.iter().map(|fs| fs.factor).collect();
    assert_eq!(
        order,
        vec![
            ComfortFactor::Temperature,
            ComfortFactor::Wind,
            ComfortFactor::Rain,
            ComfortFactor::Humidity
        ]
    );
}

#[test]
fn meets_profile_tracks_the_hard_threshold_not_the_score() {
    let profile = reference_profile();
    let mut distribution = common::london_july_distribution();
    // Just past the ceiling: the continuous score is still high, the hard
    // threshold check already fails.
    distribution.wind_speed_ms.mean = 10.5;
    let scores = score_factors(&distribution, &profile);
    let wind = scores
        .iter()
        .find(|fs| fs.factor == ComfortFactor::Wind)
        .unwrap();
    assert!(wind.score > 90.0);
    assert!(!wind.meets_profile);
}

#[test]
fn equal_weights_reduce_to_the_unweighted_mean() {
    let scores: Vec<FactorScore> = ComfortFactor::ORDERED
        .iter()
        .zip([80.0, 60.0, 40.0, 20.0])
        .map(|(&factor, score)| FactorScore {
            factor,
            score,
            meets_profile: true,
        })
        .collect();
    let weights = WeightSet::new(2.0, 2.0, 2.0, 2.0).unwrap();
    let composite = aggregate(&scores, &weights).unwrap();
    assert!((composite - 50.0).abs() < 1e-9);
}

#[test]
fn degenerate_weights_fail_exactly_when_the_sum_is_zero() {
    let scores: Vec<FactorScore> = ComfortFactor::ORDERED
        .iter()
        .map(|&factor| FactorScore {
            factor,
            score: 75.0,
            meets_profile: true,
        })
        .collect();

    let zero = WeightSet::new(0.0, 0.0, 0.0, 0.0).unwrap();
    assert!(matches!(
        aggregate(&scores, &zero),
        Err(EngineError::DegenerateWeights)
    ));

    // A single non-zero weight is enough for a defined average.
    let nearly_zero = WeightSet::new(0.0, 0.0, 0.5, 0.0).unwrap();
    assert!((aggregate(&scores, &nearly_zero).unwrap() - 75.0).abs() < 1e-9);
}

#[test]
fn weights_outside_legal_bounds_are_rejected_at_construction() {
    assert!(WeightSet::new(-0.1, 1.0, 1.0, 1.0).is_err());
    assert!(WeightSet::new(1.0, 3.1, 1.0, 1.0).is_err());
    assert!(WeightSet::new(1.0, 3.0, 0.0, 1.0).is_ok());
}

#[test]
fn profiles_enforce_their_invariants_at_construction() {
    assert!(ComfortProfile::new(26.0, 25.0, 10.0, 20.0, 70.0).is_err());
    assert!(ComfortProfile::new(15.0, 25.0, -1.0, 20.0, 70.0).is_err());
    assert!(ComfortProfile::new(15.0, 25.0, 10.0, 101.0, 70.0).is_err());
    assert!(ComfortProfile::new(15.0, 25.0, 10.0, 20.0, 100.5).is_err());
    assert!(ComfortProfile::new(15.0, 15.0, 0.0, 0.0, 0.0).is_ok());
}
