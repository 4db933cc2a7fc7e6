// ABOUTME: Core types and constants for the AtmoSphere comfort engine
// ABOUTME: Foundation crate with error taxonomy, climate models, and validated request types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AtmoSphere Contributors

//! # Atmo Core
//!
//! Foundation crate providing shared types for the AtmoSphere comfort engine.
//! This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `EngineError` and `ProviderError`
//! - **models**: Validated request and response models (`ComfortProfile`,
//!   `WeightSet`, `ClimateDistribution`, `ComfortResult`, ...)

/// Unified error handling with the engine's five-error taxonomy
pub mod errors;

/// Climate, profile, and result models with constructor-time invariant checks
pub mod models;

pub use errors::{EngineError, EngineResult, ProviderError, ProviderResult};
pub use models::climate::{ClimateDistribution, VariableStats};
pub use models::location::{CalendarDay, Coordinate};
pub use models::profile::{ComfortFactor, ComfortProfile, WeightSet};
pub use models::result::{
    AtmosphericSignature, ComfortResult, FactorScore, HumiditySummary, PrecipitationSummary,
    RegionSummary, SamplePoint, SpecialtyIndices, SunlightSummary, TemperatureSummary,
    WindSummary,
};
