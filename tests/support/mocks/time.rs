// tests/support/mocks/time.rs
use chrono::{DateTime, TimeZone, Utc};
use knowledge_articles::application::ports::time::Clock;

/// テストで使う固定時刻 (2024-01-15T09:30:00Z)
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0)
        .single()
        .expect("valid fixed timestamp")
}

#[derive(Clone, Copy, Default)]
pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}
