//! Page-view totals over calendar windows.

use chrono::{DateTime, Datelike, Duration, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// View totals for the admin counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewCounts {
    pub total: u64,
    pub today: u64,
    pub this_week: u64,
    pub this_month: u64,
}

/// Start instants of the counting windows relative to `now`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountWindows {
    pub today: DateTime<Utc>,
    pub this_week: DateTime<Utc>,
    pub this_month: DateTime<Utc>,
}

impl CountWindows {
    /// Today starts at midnight, the week on the most recent Sunday, the
    /// month on the 1st. All in UTC.
    pub fn at(now: DateTime<Utc>) -> Self {
        let today = Utc.from_utc_datetime(&now.date_naive().and_time(NaiveTime::MIN));
        let days_since_sunday = i64::from(now.weekday().num_days_from_sunday());
        let this_week = today - Duration::days(days_since_sunday);
        let this_month = today - Duration::days(i64::from(now.day0()));

        Self {
            today,
            this_week,
            this_month,
        }
    }

    /// Earliest window start; views before it only count toward the total.
    pub fn earliest(&self) -> DateTime<Utc> {
        self.this_week.min(self.this_month)
    }
}

impl ViewCounts {
    /// Counts `views` against the windows starting at `windows`.
    ///
    /// `total` is supplied separately so callers need not fetch every view
    /// ever recorded.
    pub fn tally<'a>(
        total: u64,
        views: impl IntoIterator<Item = &'a DateTime<Utc>>,
        windows: &CountWindows,
    ) -> Self {
        let mut counts = ViewCounts {
            total,
            ..Default::default()
        };

        for viewed_at in views {
            if *viewed_at >= windows.today {
                counts.today += 1;
            }
            if *viewed_at >= windows.this_week {
                counts.this_week += 1;
            }
            if *viewed_at >= windows.this_month {
                counts.this_month += 1;
            }
        }

        counts
    }
}
