//! Router for the available dates endpoint

use std::sync::Arc;

use axum::{Router, extract::State};
use chrono::Utc;

use crate::api::state::AppState;
use crate::availability::{self, DatesError};

type SharedState = Arc<AppState>;

/// List open slots of the configured event type as plain text, one
/// per line
async fn get_dates_handler(State(state): State<SharedState>) -> Result<String, DatesError> {
    let availability =
        availability::get_dates(&state.calendly, &state.config, Utc::now()).await?;
    Ok(availability.into_body(state.config.include_diagnostics))
}

/// Create the dates router
pub fn router() -> Router<SharedState> {
    Router::new().route("/get-dates", axum::routing::get(get_dates_handler))
}
