//! Minimal Calendly API v2 client covering the three read-only calls
//! needed to list open slots: the current user, their event types,
//! and an event type's available times.

mod available_times;
mod event_types;
mod users;

use anyhow::Result;
use reqwest::{Client, RequestBuilder};
use std::time::Duration;

use crate::core::AppConfig;

pub use available_times::{AvailableTime, AvailableTimes, AvailableTimesResponse, available_slots};
pub use event_types::{EventType, EventTypeProfile, EventTypesResponse, find_event_type};
pub use users::{CurrentUserResponse, UserResource};

/// Timestamp format Calendly expects for `start_time`/`end_time`
/// query params.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

#[derive(Clone, Debug)]
pub struct CalendlyClient {
    http: Client,
    base_url: String,
    token: String,
}

impl CalendlyClient {
    pub fn new(base_url: &str, token: &str, timeout: Duration) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(
            &config.calendly_api_url,
            &config.calendly_token,
            config.request_timeout,
        )
    }

    /// Authenticated GET against a path relative to the API root.
    fn get(&self, path: &str) -> RequestBuilder {
        self.http
            .get(format!("{}{}", self.base_url, path))
            .bearer_auth(&self.token)
    }
}
