use anyhow::Result;

use crate::calendly::CalendlyClient;
use crate::core::AppConfig;

/// Read-only state shared by every request.
pub struct AppState {
    pub config: AppConfig,
    pub calendly: CalendlyClient,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let calendly = CalendlyClient::from_config(&config)?;
        Ok(Self { config, calendly })
    }
}
