// ABOUTME: Seeded rejection sampling of interior points for polygon region requests
// ABOUTME: Pure geometry; the engine owns the concurrent per-sample pipeline fan-out
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AtmoSphere Contributors

//! Interior sample-point generation.
//!
//! Candidates are drawn uniformly over the polygon's bounding rectangle and
//! kept when they intersect the polygon, so boundary points count as
//! inside. The RNG is seeded, which makes the emitted sequence (and with it
//! the region signature) deterministic for a fixed seed. The rejection loop
//! is bounded per requested point; a near-degenerate polygon exhausts its
//! budget instead of spinning forever.

use atmo_core::{Coordinate, EngineError, EngineResult};
use geo::algorithm::{BoundingRect, Intersects};
use geo::{Point, Polygon};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::climate_constants::sampling::REJECTION_ATTEMPTS_PER_SAMPLE;

/// Build a validated `geo` polygon from (lat, lon) vertices.
///
/// The ring closes itself; callers pass vertices without repeating the
/// first one.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] when fewer than three vertices are
/// supplied or any vertex is outside legal coordinate ranges.
pub fn polygon_from_vertices(vertices: &[(f64, f64)]) -> EngineResult<Polygon<f64>> {
    if vertices.len() < 3 {
        return Err(EngineError::invalid_input(
            "polygon",
            format!("{} vertices supplied; a polygon needs at least 3", vertices.len()),
        ));
    }
    for &(lat, lon) in vertices {
        // Validates ranges; the coordinate itself is not retained.
        Coordinate::new(lat, lon)?;
    }
    let ring: Vec<(f64, f64)> = vertices.iter().map(|&(lat, lon)| (lon, lat)).collect();
    Ok(Polygon::new(ring.into(), vec![]))
}

/// Generate up to `count` interior-or-boundary sample points, in generation
/// order.
///
/// Fewer than `count` points come back when the rejection budget runs out;
/// the caller decides whether the shortfall is acceptable.
///
/// # Errors
///
/// - [`EngineError::InvalidInput`] when the polygon has no bounding
///   rectangle (empty geometry) or `count` is zero.
/// - [`EngineError::InsufficientSamples`] when the budget produced no
///   interior point at all.
pub fn generate_sample_points(
    polygon: &Polygon<f64>,
    count: usize,
    seed: u64,
) -> EngineResult<Vec<Coordinate>> {
    if count == 0 {
        return Err(EngineError::invalid_input(
            "sample_count",
            "at least one sample is required",
        ));
    }
    let bounds = polygon.bounding_rect().ok_or_else(|| {
        EngineError::invalid_input("polygon", "geometry has no bounding rectangle")
    })?;

    let (min_x, min_y) = (bounds.min().x, bounds.min().y);
    let (max_x, max_y) = (bounds.max().x, bounds.max().y);

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut points = Vec::with_capacity(count);
    let mut rejected = 0_usize;

    // Each requested slot gets its own attempt budget; a slot that
    // exhausts it is skipped rather than aborting the remaining slots.
    for _ in 0..count {
        for _ in 0..REJECTION_ATTEMPTS_PER_SAMPLE {
            let lon = rng.gen_range(min_x..=max_x);
            let lat = rng.gen_range(min_y..=max_y);
            if polygon.intersects(&Point::new(lon, lat)) {
                points.push(Coordinate::new(lat, lon)?);
                break;
            }
            rejected += 1;
        }
    }

    debug!(
        placed = points.len(),
        requested = count,
        rejected,
        "polygon sample generation finished"
    );

    if points.is_empty() {
        return Err(EngineError::InsufficientSamples {
            requested: count,
            attempted: 0,
        });
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn unit_square() -> Polygon<f64> {
        polygon_from_vertices(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]).unwrap()
    }

    #[test]
    fn rejects_degenerate_vertex_lists() {
        let err = polygon_from_vertices(&[(0.0, 0.0), (1.0, 1.0)]).unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput { field: "polygon", .. }));
    }

    #[test]
    fn every_generated_point_is_inside_the_square() {
        let polygon = unit_square();
        let points = generate_sample_points(&polygon, 50, 7).unwrap();
        assert_eq!(points.len(), 50);
        for p in &points {
            assert!((0.0..=1.0).contains(&p.lat) && (0.0..=1.0).contains(&p.lon));
        }
    }

    #[test]
    fn generation_is_deterministic_for_a_fixed_seed() {
        let polygon = unit_square();
        let first = generate_sample_points(&polygon, 9, 42).unwrap();
        let second = generate_sample_points(&polygon, 9, 42).unwrap();
        assert_eq!(first, second);
        let other_seed = generate_sample_points(&polygon, 9, 43).unwrap();
        assert_ne!(first, other_seed);
    }
}
