// ABOUTME: Comfort scoring, specialty indices, profile inference, and sample generation
// ABOUTME: Pure computation crate extracted from the engine for modularity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AtmoSphere Contributors

//! # Atmo Intelligence
//!
//! The algorithmic core of the AtmoSphere engine: deterministic, pure
//! functions from climate distributions and user preferences to scores.
//! All I/O (climatology fetches, concurrency, timeouts) lives in the
//! `atmosphere` facade crate; everything here is directly unit-testable.

/// Named falloff margins, thresholds, and budgets used by the formulas
pub mod climate_constants;
/// Factor score calculator and weighted aggregator
pub mod comfort;
/// Default-profile inference from climatological normals
pub mod inference;
/// Seeded interior-point generation for polygon requests
pub mod sampling;
/// Informational specialty indices
pub mod specialty;

pub use comfort::{aggregate, score_ceiling_factor, score_factors, score_range_factor};
pub use inference::infer_from_distribution;
pub use sampling::{generate_sample_points, polygon_from_vertices};
pub use specialty::{heat_index_celsius, specialty_indices};
