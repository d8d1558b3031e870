use chrono::{Datelike, Local, NaiveDate};

use crate::domain::ports::Clock;
use crate::utils::error::{RosterError, Result};

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Whole years between `birth_date` and `today`.
///
/// The count goes up only on the calendar anniversary. A birth date after
/// `today` yields 0.
pub fn calculate_age(birth_date: NaiveDate, today: NaiveDate) -> u32 {
    let mut age = today.year() - birth_date.year();

    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }

    u32::try_from(age).unwrap_or(0)
}

/// Same as [`calculate_age`] for an ISO `YYYY-MM-DD` string.
pub fn calculate_age_str(birth_date: &str, today: NaiveDate) -> Result<u32> {
    let parsed = NaiveDate::parse_from_str(birth_date, "%Y-%m-%d").map_err(|source| {
        RosterError::InvalidBirthDate {
            value: birth_date.to_string(),
            source,
        }
    })?;

    Ok(calculate_age(parsed, today))
}
