//! Settable clock for date-sensitive service tests.

use std::sync::Mutex;

use chrono::{DateTime, Local, NaiveDate, TimeDelta, Utc};
use mockable::Clock;

pub struct MutableClock(Mutex<DateTime<Utc>>);

impl MutableClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    /// Clock pinned to midday UTC on `date`.
    pub fn on(date: NaiveDate) -> Self {
        let Some(noon) = date.and_hms_opt(12, 0, 0) else {
            panic!("noon exists on every date");
        };
        Self::new(noon.and_utc())
    }

    pub fn advance_days(&self, days: i64) {
        *self.lock_clock() += TimeDelta::days(days);
    }

    fn lock_clock(&self) -> std::sync::MutexGuard<'_, DateTime<Utc>> {
        match self.0.lock() {
            Ok(guard) => guard,
            Err(_) => panic!("clock mutex"),
        }
    }
}

impl Clock for MutableClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.lock_clock()
    }
}
