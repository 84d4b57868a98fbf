use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// One break interval inside a clocked-in day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Break {
    pub start_time: DateTime<Utc>,  // ⇔ breaks.start_time (RFC 3339, UTC)
    pub end_time: Option<DateTime<Utc>>, // NULL while the break is running
}

impl Break {
    pub fn open(at: DateTime<Utc>) -> Self {
        Self {
            start_time: at,
            end_time: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.end_time.is_none()
    }

    /// Length of the break. An open break is measured up to `now`.
    /// Intervals that run backwards count as zero.
    pub fn duration_until(&self, now: DateTime<Utc>) -> Duration {
        let end = self.end_time.unwrap_or(now);
        let d = end - self.start_time;
        if d < Duration::zero() {
            Duration::zero()
        } else {
            d
        }
    }
}
