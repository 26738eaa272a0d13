// SPDX-License-Identifier: GPL-3.0-only

use std::time::Duration;

/// Fetch configuration. There is no user-facing configuration surface; this
/// exists so the endpoint, the catalog limit and the fan-out width live in
/// one place instead of at the call sites.
#[derive(Debug, Clone)]
pub struct Config {
    /// Index endpoint; detail URLs come from the index response itself.
    pub base_url: String,
    /// How many entries the index request asks for.
    pub limit: u32,
    /// Width of the detail-request worker pool.
    pub max_concurrent_requests: usize,
    /// Per-request timeout applied to the underlying HTTP client.
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: String::from("https://pokeapi.co/api/v2/pokemon/"),
            limit: 151,
            max_concurrent_requests: 30,
            request_timeout: Duration::from_secs(30),
        }
    }
}
