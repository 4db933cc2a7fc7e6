// ABOUTME: AtmoSphere engine facade crate: re-exports and the ComfortEngine surface
// ABOUTME: Transport layers consume this crate; scoring logic lives in the workspace crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AtmoSphere Contributors

//! # AtmoSphere
//!
//! Climatology-driven comfort scoring and spatial sampling. The engine
//! turns a multi-decade daily climate record for a point or region into a
//! personalized comfort score for a calendar day, year-independent.
//!
//! The crate exposes three operations to the surrounding transport layer:
//!
//! - [`ComfortEngine::score_point`] — score one coordinate;
//! - [`ComfortEngine::score_region`] — sample and score a polygon;
//! - [`ComfortEngine::infer_profile`] — derive a default comfort profile
//!   from the location's own climatology.
//!
//! Map drawing, HTTP transport, geocoding, and result rendering are the
//! callers' concern; this workspace is the scoring engine only.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use atmosphere::{ComfortEngine, ComfortProfile, WeightSet};
//! use atmosphere::providers::SyntheticProvider;
//!
//! # async fn example() -> atmosphere::errors::EngineResult<()> {
//! let engine = ComfortEngine::new(Arc::new(SyntheticProvider::new()));
//! let result = engine
//!     .score_point(
//!         51.5072,
//!         -0.1276,
//!         7,
//!         15,
//!         &ComfortProfile::default(),
//!         &WeightSet::default(),
//!     )
//!     .await?;
//! println!("overall comfort: {:.0}", result.overall_score);
//! # Ok(())
//! # }
//! ```

/// Engine resource configuration
pub mod config;
/// The `ComfortEngine` facade: point pipeline and region fan-out
pub mod engine;

// Re-export workspace crate modules so callers keep stable import paths.
pub use atmo_core::errors;
pub use atmo_core::models;
pub use atmo_intelligence::{climate_constants, comfort, inference, sampling, specialty};
pub use atmo_providers as providers;

// Re-export the types most callers need directly.
pub use atmo_core::{
    AtmosphericSignature, CalendarDay, ClimateDistribution, ComfortFactor, ComfortProfile,
    ComfortResult, Coordinate, EngineError, EngineResult, FactorScore, ProviderError,
    ProviderResult, RegionSummary, SamplePoint, SpecialtyIndices, VariableStats, WeightSet,
};
pub use config::EngineConfig;
pub use engine::ComfortEngine;
pub use providers::ClimatologyProvider;
