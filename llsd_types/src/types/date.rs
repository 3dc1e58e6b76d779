use chrono::{DateTime, Utc};
use derive_more::{Deref, From};

/// Seconds since the Unix epoch. The fractional part carries
/// sub-second precision.
#[derive(From, Deref, PartialEq, PartialOrd, Clone, Copy, Debug, Default)]
pub struct Date(f64);

impl Date {
    pub fn epoch() -> Self {
        Self(0.0)
    }

    pub fn is_epoch(&self) -> bool {
        self.0 == 0.0
    }

    /// `YYYY-MM-DDTHH:MM:SS.mmmZ`, with microseconds rounded to the
    /// nearest millisecond.
    pub fn format_iso8601(&self) -> String {
        let int_time = self.0.floor();
        let seconds = int_time as i64;
        let useconds = ((self.0 - int_time) * 1_000_000.0) as i64;
        let millis = if useconds != 0 {
            (useconds as f64 / 1000.0 + 0.5) as i64
        } else {
            0
        };
        let datetime: DateTime<Utc> = DateTime::from_timestamp(seconds, 0).unwrap_or_default();
        format!("{}.{:03}Z", datetime.format("%Y-%m-%dT%H:%M:%S"), millis)
    }
}
