use std::env;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use chrono_tz::Tz;

/// Number of calendar days covered by the availability window,
/// starting tomorrow.
pub const DEFAULT_WINDOW_DAYS: u32 = 14;
pub const DEFAULT_EVENT_TYPE_SLUG: &str = "new";
pub const DEFAULT_CALENDLY_API_URL: &str = "https://api.calendly.com";
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Singapore;
pub const DEFAULT_TIMEZONE_LABEL: &str = "SGT";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// How available slots are rendered. One style is picked at startup
/// and used for every slot of every response.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SlotFormat {
    /// `tuesday 10am`, `tuesday 1030am`
    #[default]
    Compact,
    /// `March 11, 2025 at 10:00 AM SGT`
    Long,
}

impl FromStr for SlotFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "long" => Ok(Self::Long),
            other => Err(anyhow!("Unknown slot format '{}'", other)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub calendly_token: String,
    pub calendly_api_url: String,
    pub event_type_slug: String,
    pub timezone: Tz,
    pub timezone_label: String,
    pub window_days: u32,
    pub slot_format: SlotFormat,
    pub include_diagnostics: bool,
    pub request_timeout: Duration,
}

impl AppConfig {
    /// Config with defaults for everything except the token.
    pub fn new(calendly_token: impl Into<String>) -> Self {
        Self {
            calendly_token: calendly_token.into(),
            calendly_api_url: DEFAULT_CALENDLY_API_URL.to_string(),
            event_type_slug: DEFAULT_EVENT_TYPE_SLUG.to_string(),
            timezone: DEFAULT_TIMEZONE,
            timezone_label: DEFAULT_TIMEZONE_LABEL.to_string(),
            window_days: DEFAULT_WINDOW_DAYS,
            slot_format: SlotFormat::default(),
            include_diagnostics: false,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Build the config from the process environment. Fails when
    /// `CALENDLY_TOKEN` is missing so a bad deploy doesn't surface as
    /// a stream of upstream 401s.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let token = lookup("CALENDLY_TOKEN")
            .filter(|t| !t.trim().is_empty())
            .context("Missing env var CALENDLY_TOKEN")?;
        let mut config = Self::new(token.trim());

        if let Some(url) = lookup("CALENDLY_API_URL") {
            config.calendly_api_url = url.trim_end_matches('/').to_string();
        }
        if let Some(slug) = lookup("SLOTFINDER_EVENT_SLUG") {
            config.event_type_slug = slug;
        }
        if let Some(tz) = lookup("SLOTFINDER_TIMEZONE") {
            config.timezone = tz
                .parse::<Tz>()
                .map_err(|e| anyhow!("Invalid SLOTFINDER_TIMEZONE '{}': {}", tz, e))?;
        }
        if let Some(label) = lookup("SLOTFINDER_TIMEZONE_LABEL") {
            config.timezone_label = label;
        }
        if let Some(days) = lookup("SLOTFINDER_WINDOW_DAYS") {
            let days: u32 = days
                .parse()
                .with_context(|| format!("Invalid SLOTFINDER_WINDOW_DAYS '{}'", days))?;
            if days == 0 {
                bail!("SLOTFINDER_WINDOW_DAYS must be at least 1");
            }
            config.window_days = days;
        }
        if let Some(format) = lookup("SLOTFINDER_SLOT_FORMAT") {
            config.slot_format = format.parse()?;
        }
        if let Some(flag) = lookup("SLOTFINDER_INCLUDE_DIAGNOSTICS") {
            config.include_diagnostics = parse_flag(&flag)
                .with_context(|| format!("Invalid SLOTFINDER_INCLUDE_DIAGNOSTICS '{}'", flag))?;
        }
        if let Some(secs) = lookup("SLOTFINDER_REQUEST_TIMEOUT_SECS") {
            let secs: u64 = secs
                .parse()
                .with_context(|| format!("Invalid SLOTFINDER_REQUEST_TIMEOUT_SECS '{}'", secs))?;
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        other => Err(anyhow!("Expected true/false/1/0/yes/no, got '{}'", other)),
    }
}
