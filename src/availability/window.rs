use chrono::{DateTime, Duration, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::calendly::TIMESTAMP_FORMAT;

/// Range of whole local days to query for availability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateWindow {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

impl DateWindow {
    /// `days` calendar days starting tomorrow in `now`'s timezone:
    /// from 00:00:00 on the first day to 23:59:59 on the last.
    pub fn starting_tomorrow(now: DateTime<Tz>, days: u32) -> Self {
        let tz = now.timezone();
        let first_day = now.date_naive() + Duration::days(1);
        let last_day = first_day + Duration::days(i64::from(days.max(1) - 1));
        let start = first_day.and_time(NaiveTime::default());
        let end = last_day.and_time(NaiveTime::default()) + Duration::seconds(24 * 60 * 60 - 1);

        Self {
            start: localize(tz, start),
            end: localize(tz, end),
        }
    }

    /// `start` as the UTC timestamp Calendly expects.
    pub fn start_param(&self) -> String {
        self.start.with_timezone(&Utc).format(TIMESTAMP_FORMAT).to_string()
    }

    /// `end` as the UTC timestamp Calendly expects.
    pub fn end_param(&self) -> String {
        self.end.with_timezone(&Utc).format(TIMESTAMP_FORMAT).to_string()
    }
}

// Local times that fall into a DST gap move forward to the first
// instant after the gap
fn localize(tz: Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    tz.from_local_datetime(&naive)
        .earliest()
        .or_else(|| {
            (1..=24).find_map(|hours| {
                tz.from_local_datetime(&(naive + Duration::hours(hours)))
                    .earliest()
            })
        })
        .unwrap_or_else(|| tz.from_utc_datetime(&naive))
}
