use crate::types::Timestamp;
use time::OffsetDateTime;

///
/// Clock
///
/// Time source for relative date operators (`last_x_days` and friends).
/// Constructed once at process start and passed by reference; tests use
/// `FixedClock` for deterministic windows.
///

pub trait Clock {
    fn now(&self) -> Timestamp;
}

///
/// SystemClock
///

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_seconds(OffsetDateTime::now_utc().unix_timestamp())
    }
}

///
/// FixedClock
///

#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}
