// ABOUTME: Model module wiring for atmo-core
// ABOUTME: Groups climate, location, profile, and result models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AtmoSphere Contributors

//! Validated data models for the comfort engine.

/// Multi-year climate distributions as returned by source adapters
pub mod climate;
/// Validated coordinates and year-agnostic calendar days
pub mod location;
/// User comfort thresholds and importance weights
pub mod profile;
/// Scoring results, atmospheric signatures, and region sampling output
pub mod result;
