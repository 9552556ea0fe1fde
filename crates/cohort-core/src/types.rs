use derive_more::{Add, AddAssign, Display, Sub, SubAssign};
use serde::{Deserialize, Serialize};
use time::{
    Date, Month, OffsetDateTime, PrimitiveDateTime, format_description::well_known::Rfc3339,
    util::days_in_year_month,
};

///
/// Timestamp
/// (in seconds)
///

#[derive(
    Add,
    AddAssign,
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    Deserialize,
    Sub,
    SubAssign,
)]
#[repr(transparent)]
pub struct Timestamp(i64);

const SECS_PER_DAY: i64 = 86_400;

impl Timestamp {
    pub const EPOCH: Self = Self(0);
    pub const MIN: Self = Self(i64::MIN);
    pub const MAX: Self = Self(i64::MAX);

    /// Construct from seconds since the Unix epoch.
    #[must_use]
    pub const fn from_seconds(secs: i64) -> Self {
        Self(secs)
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Parse an RFC 3339 timestamp, e.g. `2026-08-27T00:00:00Z`.
    pub fn parse_rfc3339(s: &str) -> Result<Self, String> {
        let dt = OffsetDateTime::parse(s, &Rfc3339)
            .map_err(|err| format!("timestamp parse error: {err}"))?;

        Ok(Self(dt.unix_timestamp()))
    }

    #[must_use]
    pub const fn minus_days(self, days: i64) -> Self {
        Self(self.0.saturating_sub(days.saturating_mul(SECS_PER_DAY)))
    }

    #[must_use]
    pub const fn minus_weeks(self, weeks: i64) -> Self {
        self.minus_days(weeks.saturating_mul(7))
    }

    /// Subtract N calendar months, clamping the day to the target month's
    /// length (Mar 31 − 1 month = Feb 28/29).
    ///
    /// Out-of-range intermediate dates leave the timestamp unchanged.
    #[must_use]
    pub fn minus_months(self, months: i64) -> Self {
        let Ok(dt) = OffsetDateTime::from_unix_timestamp(self.0) else {
            return self;
        };

        let total =
            i64::from(dt.year()) * 12 + i64::from(u8::from(dt.month())) - 1 - months;
        let Ok(year) = i32::try_from(total.div_euclid(12)) else {
            return self;
        };
        let month_index = total.rem_euclid(12) + 1;
        let Ok(month_u8) = u8::try_from(month_index) else {
            return self;
        };
        let Ok(month) = Month::try_from(month_u8) else {
            return self;
        };

        let day = dt.day().min(days_in_year_month(year, month));
        match Date::from_calendar_date(year, month, day) {
            Ok(date) => Self(PrimitiveDateTime::new(date, dt.time()).assume_utc().unix_timestamp()),
            Err(_) => self,
        }
    }
}

///
/// TESTS
///
