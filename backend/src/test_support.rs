//! Shared helpers for unit and integration tests.
//!
//! Compiled for `cfg(test)` and for the `test-support` feature, which the
//! crate's own integration tests enable.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;

/// Clock frozen at local noon on a fixed date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    /// Freeze the clock at noon local time on `date`.
    pub fn on(date: NaiveDate) -> Self {
        let noon = date.and_time(chrono::NaiveTime::MIN) + chrono::Duration::hours(12);
        let now = Local
            .from_local_datetime(&noon)
            .earliest()
            .map_or_else(|| Utc.from_utc_datetime(&noon), |local| local.with_timezone(&Utc));
        Self { now }
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_date_matches_requested_date() {
        let date = NaiveDate::from_ymd_opt(2025, 4, 10).expect("date");
        assert_eq!(FixedClock::on(date).local().date_naive(), date);
    }
}
