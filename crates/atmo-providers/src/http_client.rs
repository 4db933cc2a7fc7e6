// ABOUTME: Shared HTTP client with connection pooling for climatology API calls
// ABOUTME: One pooled client per process; timeouts are fixed at first use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AtmoSphere Contributors

use reqwest::{Client, ClientBuilder};
use std::sync::OnceLock;
use std::time::Duration;

/// Timeouts applied to every climatology API call
#[derive(Debug, Clone, Copy)]
pub struct HttpTimeouts {
    /// Whole-request deadline in seconds
    pub request_secs: u64,
    /// Connection-establishment deadline in seconds
    pub connect_secs: u64,
}

impl Default for HttpTimeouts {
    /// The original backend fetched POWER climatology with a 30 s deadline;
    /// connection setup gets a tighter 10 s.
    fn default() -> Self {
        Self {
            request_secs: 30,
            connect_secs: 10,
        }
    }
}

static CONFIGURED_TIMEOUTS: OnceLock<HttpTimeouts> = OnceLock::new();
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Pin the timeout configuration for the process-wide client.
///
/// Call once at startup, before the first fetch. Later calls (or none at
/// all) leave the defaults in place.
pub fn initialize_shared_client(timeouts: HttpTimeouts) {
    let _ = CONFIGURED_TIMEOUTS.set(timeouts);
}

/// The process-wide pooled HTTP client for climatology fetches.
///
/// Climatology sources are slow but steady; pooling connections across
/// samples of one region request matters more than per-call tuning.
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        let timeouts = CONFIGURED_TIMEOUTS.get().copied().unwrap_or_default();
        ClientBuilder::new()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}
