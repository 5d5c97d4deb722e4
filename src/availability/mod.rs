//! Resolve the account, find the event type and list its open slots
//! as text. Each step gates the next; nothing is retried.

mod format;
mod window;

use chrono::{DateTime, Utc};

use crate::calendly::CalendlyClient;
use crate::core::AppConfig;

pub use format::SlotRenderer;
pub use window::DateWindow;

pub const NO_TIMES_FOUND: &str = "No available times found in the specified range.";

#[derive(Debug, thiserror::Error)]
pub enum DatesError {
    #[error("Failed to fetch user info. Check token.")]
    UserInfo(#[source] anyhow::Error),
    #[error("Failed to retrieve event type URI.")]
    EventType(#[source] anyhow::Error),
}

/// Outcome of a successful lookup. An empty result is not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Availability {
    Slots(Vec<String>),
    Empty { diagnostic: String },
}

impl Availability {
    /// Plain text body: one slot per line, or the "nothing found"
    /// message with the upstream diagnostic when asked for.
    pub fn into_body(self, include_diagnostics: bool) -> String {
        match self {
            Self::Slots(lines) => lines.join("\n"),
            Self::Empty { diagnostic } if include_diagnostics => {
                format!("{}\n{}", NO_TIMES_FOUND, diagnostic)
            }
            Self::Empty { .. } => NO_TIMES_FOUND.to_string(),
        }
    }
}

pub async fn get_dates(
    client: &CalendlyClient,
    config: &AppConfig,
    now: DateTime<Utc>,
) -> Result<Availability, DatesError> {
    let user_uri = client
        .current_user_uri()
        .await
        .map_err(DatesError::UserInfo)?;
    tracing::debug!("Resolved Calendly user {}", user_uri);

    let event_type_uri = client
        .event_type_uri(&config.event_type_slug, &user_uri)
        .await
        .map_err(DatesError::EventType)?;
    tracing::debug!("Resolved event type {}", event_type_uri);

    let window = DateWindow::starting_tomorrow(now.with_timezone(&config.timezone), config.window_days);
    let (start_time, end_time) = (window.start_param(), window.end_param());
    tracing::debug!("Fetching available times from {} to {}", start_time, end_time);

    let times = client
        .list_available_times(&event_type_uri, &start_time, &end_time)
        .await;
    if times.slots.is_empty() {
        tracing::info!("No available times between {} and {}", start_time, end_time);
        return Ok(Availability::Empty {
            diagnostic: times.diagnostic,
        });
    }

    let renderer = SlotRenderer::from_config(config);
    let lines = times
        .slots
        .into_iter()
        .map(|slot| renderer.render(slot))
        .collect();

    Ok(Availability::Slots(lines))
}
