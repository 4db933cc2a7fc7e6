// ABOUTME: Error taxonomy for the AtmoSphere comfort engine
// ABOUTME: Defines EngineError for the scoring pipeline and ProviderError for source adapters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AtmoSphere Contributors

//! Engine and provider error types.
//!
//! Every variant carries enough context (coordinate, calendar day, offending
//! field) for a transport layer to build a user-facing message. The engine
//! itself never formats user-facing text.

/// Result alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Result alias for climatology provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Errors surfaced by the comfort-scoring and spatial-sampling engine
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Malformed profile, weights, coordinates, date, or polygon.
    ///
    /// Rejected before any fetch is attempted and never retried.
    #[error("Invalid {field}: {reason}")]
    InvalidInput {
        /// Name of the offending field
        field: &'static str,
        /// Reason why the value is invalid
        reason: String,
    },

    /// The external climatology fetch failed.
    ///
    /// Fatal for single-point requests; recoverable per-sample inside the
    /// spatial sampler.
    #[error("Climatology source unavailable for ({lat}, {lon}) on {month:02}-{day:02}")]
    SourceUnavailable {
        /// Latitude of the failed fetch
        lat: f64,
        /// Longitude of the failed fetch
        lon: f64,
        /// Calendar month of the request
        month: u32,
        /// Calendar day of the request
        day: u32,
        /// Underlying provider error
        #[source]
        source: ProviderError,
    },

    /// All importance weights are zero, so the weighted average is undefined.
    ///
    /// The engine never silently substitutes a fallback weight set.
    #[error("All importance weights are zero; composite score is undefined")]
    DegenerateWeights,

    /// A region request produced zero successful samples.
    #[error("No samples succeeded for region request ({attempted} of {requested} attempted)")]
    InsufficientSamples {
        /// Number of samples the caller requested
        requested: usize,
        /// Number of sample pipelines actually attempted
        attempted: usize,
    },

    /// Profile inference found no climatology for the coordinate.
    ///
    /// Expected for open-ocean cells with no record; callers treat this as
    /// non-fatal for the surrounding request.
    #[error("No climatology available at ({lat}, {lon})")]
    NoClimatologyAvailable {
        /// Latitude with no data
        lat: f64,
        /// Longitude with no data
        lon: f64,
    },
}

impl EngineError {
    /// Shorthand for an [`EngineError::InvalidInput`] with a formatted reason
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

/// Errors raised by climatology source adapters
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The upstream API rejected the request or returned a failure status
    #[error("Climatology API request failed: {0}")]
    Api(String),

    /// The upstream returned a payload the adapter could not interpret
    #[error("Malformed climatology response: {context}")]
    MalformedResponse {
        /// Where in the payload the parse failed
        context: String,
    },

    /// The source has no record for the requested coordinate
    #[error("No climatology record for ({lat}, {lon})")]
    DataUnavailable {
        /// Latitude with no record
        lat: f64,
        /// Longitude with no record
        lon: f64,
    },

    /// Network communication error
    #[error("Network error: {0}")]
    Network(String),
}

impl ProviderError {
    /// True when the error means the coordinate simply has no record,
    /// as opposed to the source being unreachable.
    #[must_use]
    pub const fn is_data_unavailable(&self) -> bool {
        matches!(self, Self::DataUnavailable { .. })
    }
}
