use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;

use crate::core::{AppConfig, SlotFormat};

/// Renders UTC slot times in the configured timezone and style.
#[derive(Debug, Clone)]
pub struct SlotRenderer {
    timezone: Tz,
    format: SlotFormat,
    label: String,
}

impl SlotRenderer {
    pub fn new(timezone: Tz, format: SlotFormat, label: &str) -> Self {
        Self {
            timezone,
            format,
            label: label.to_string(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.timezone, config.slot_format, &config.timezone_label)
    }

    pub fn render(&self, slot: DateTime<Utc>) -> String {
        let local = slot.with_timezone(&self.timezone);
        match self.format {
            SlotFormat::Compact => compact(&local),
            SlotFormat::Long => format!("{} {}", local.format("%B %d, %Y at %I:%M %p"), self.label),
        }
    }
}

// `tuesday 10am`, minutes only when they aren't zero
fn compact(local: &DateTime<Tz>) -> String {
    let pattern = if local.minute() == 0 {
        "%A %-I%P"
    } else {
        "%A %-I%M%P"
    };
    local.format(pattern).to_string().to_lowercase()
}
