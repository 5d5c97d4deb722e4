use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::CalendlyClient;

pub const STATUS_AVAILABLE: &str = "available";

#[derive(Debug, Deserialize)]
pub struct AvailableTimesResponse {
    pub collection: Option<Vec<AvailableTime>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AvailableTime {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
}

impl AvailableTime {
    pub fn is_available(&self) -> bool {
        self.status.as_deref() == Some(STATUS_AVAILABLE)
    }
}

/// Open slots in upstream order plus a dump of the request window and
/// raw response, kept for troubleshooting empty results.
#[derive(Debug, Clone, Default)]
pub struct AvailableTimes {
    pub slots: Vec<DateTime<Utc>>,
    pub diagnostic: String,
}

/// Keep only the available slots from a raw response body. Bodies
/// without a `collection` yield no slots. Start times are only parsed
/// for available slots; ones that don't parse are skipped.
pub fn available_slots(body: &str) -> Vec<DateTime<Utc>> {
    serde_json::from_str::<AvailableTimesResponse>(body)
        .ok()
        .and_then(|resp| resp.collection)
        .unwrap_or_default()
        .into_iter()
        .filter(AvailableTime::is_available)
        .filter_map(|slot| {
            let start_time = slot.start_time.unwrap_or_default();
            match DateTime::parse_from_rfc3339(&start_time) {
                Ok(parsed) => Some(parsed.with_timezone(&Utc)),
                Err(err) => {
                    tracing::warn!("Skipping slot with bad start_time '{}': {}", start_time, err);
                    None
                }
            }
        })
        .collect()
}

impl CalendlyClient {
    /// Available start times for an event type between `start_time`
    /// and `end_time` (UTC, `Z` suffixed). Never fails: anything that
    /// goes wrong shows up as an empty result with a diagnostic.
    /// curl -H "Authorization: Bearer $TOKEN" "https://api.calendly.com/event_type_available_times?event_type=$URI&start_time=...&end_time=..."
    pub async fn list_available_times(
        &self,
        event_type_uri: &str,
        start_time: &str,
        end_time: &str,
    ) -> AvailableTimes {
        let window = format!("start_time={} end_time={}", start_time, end_time);
        let res = self
            .get("/event_type_available_times")
            .query(&[
                ("event_type", event_type_uri),
                ("start_time", start_time),
                ("end_time", end_time),
            ])
            .send()
            .await;

        let res = match res {
            Ok(res) => res,
            Err(err) => {
                tracing::error!("Available times request failed: {}", err);
                return AvailableTimes {
                    slots: vec![],
                    diagnostic: format!("Request: {}\nError: {}", window, err),
                };
            }
        };

        let status = res.status();
        let text = res.text().await.unwrap_or_default();
        if !status.is_success() {
            tracing::warn!("Available times fetch returned {} ({})", status, text);
        }

        AvailableTimes {
            slots: available_slots(&text),
            diagnostic: format!("Request: {}\nResponse: {}", window, text),
        }
    }
}
