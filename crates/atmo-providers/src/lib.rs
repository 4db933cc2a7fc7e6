// ABOUTME: Climatology source adapters for the AtmoSphere engine
// ABOUTME: Core provider trait, shared HTTP client, NASA POWER and synthetic providers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AtmoSphere Contributors

//! Climatology provider implementations and core abstractions.
//!
//! This crate provides the unified provider system for fetching multi-year
//! climate distributions from external climatology sources. The engine only
//! ever talks to the [`ClimatologyProvider`] trait; which concrete adapter
//! backs it is a deployment decision.

// Re-export atmo-core error types so provider code can keep `use crate::…` paths.
pub use atmo_core::errors;

/// Core provider trait and interfaces
pub mod core;
/// Shared HTTP client for provider API calls
pub mod http_client;

// Provider implementations (conditionally compiled)

/// NASA POWER climatology API provider
#[cfg(feature = "provider-power")]
pub mod power;
/// Deterministic synthetic climatology for tests and development
#[cfg(feature = "provider-synthetic")]
pub mod synthetic;

pub use crate::core::ClimatologyProvider;
pub use atmo_core::errors::{ProviderError, ProviderResult};
pub use http_client::{initialize_shared_client, shared_client, HttpTimeouts};
#[cfg(feature = "provider-power")]
pub use power::{PowerConfig, PowerProvider};
#[cfg(feature = "provider-synthetic")]
pub use synthetic::SyntheticProvider;
