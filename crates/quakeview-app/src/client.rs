//! HTTP client for the external simulation service.
//!
//! The only place user input crosses into the network: requests are
//! validated before anything is sent, responses are cached by request
//! fingerprint, and every failure maps into a user-surfaceable error.

use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info};

use quakeview_core::protocol::{SimulationRequest, SimulationResponse};
use quakeview_core::validation::{validate_request, InvalidInput};

use crate::cache::{fingerprint, ResponseCache};

/// Simulation endpoint path on the service.
pub const SEISMIC_ENDPOINT: &str = "/api/simulate/seismic";

/// Request timeout for the simulation service.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Failures at the network/input boundary. Everything here is meant for
/// the user; nothing propagates into the geometry engine.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Rejected before any request was issued.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
    /// Network error or non-success HTTP status from the service.
    #[error("simulation service failure: {0}")]
    Transport(#[from] Box<ureq::Error>),
    /// The service answered 2xx but the body did not parse.
    #[error("malformed simulation response: {0}")]
    MalformedResponse(#[from] std::io::Error),
}

/// Blocking client for the simulation service, with a TTL response cache.
pub struct SimulationClient {
    base_url: String,
    agent: ureq::Agent,
    cache: ResponseCache,
}

impl SimulationClient {
    pub fn new(base_url: impl Into<String>, cache_ttl: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            agent: ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build(),
            cache: ResponseCache::new(cache_ttl),
        }
    }

    /// Request a seismic simulation for the given parameters.
    ///
    /// Validates the request first, then consults the cache; a hit is
    /// returned exactly as a fresh fetch would be.
    pub fn simulate(
        &mut self,
        request: &SimulationRequest,
    ) -> Result<SimulationResponse, ClientError> {
        validate_request(request)?;

        let key = fingerprint(SEISMIC_ENDPOINT, request);
        if let Some(cached) = self.cache.get(&key) {
            debug!(%key, "simulation cache hit");
            return Ok(cached);
        }

        let url = format!("{}{}", self.base_url, SEISMIC_ENDPOINT);
        info!(%url, lat = request.lat, lon = request.lon, "requesting simulation");

        let response = self
            .agent
            .post(&url)
            .send_json(request)
            .map_err(Box::new)?
            .into_json::<SimulationResponse>()?;

        self.cache.insert(key, response.clone());
        Ok(response)
    }

    /// Drop all cached responses.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}
