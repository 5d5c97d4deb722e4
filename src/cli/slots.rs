use anyhow::Result;
use chrono::Utc;

use crate::availability::get_dates;
use crate::calendly::CalendlyClient;
use crate::core::AppConfig;

/// Runs the same lookup as `GET /get-dates` and prints the body.
pub async fn run() -> Result<()> {
    let config = AppConfig::from_env()?;
    let client = CalendlyClient::from_config(&config)?;
    let availability = get_dates(&client, &config, Utc::now()).await?;
    println!("{}", availability.into_body(config.include_diagnostics));
    Ok(())
}
