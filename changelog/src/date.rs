use crate::error::ChangelogError;
use crate::types::Result;
use crate::utils::DATE_LABEL_PATTERN;
use chrono::{Datelike, NaiveDate, Utc};
use chrono_tz::Tz;
use std::fmt::{self, Display, Formatter};

/// A calendar date as used in date headings, rendered `year.month.day` without padding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChangelogDate(NaiveDate);

impl ChangelogDate {
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parses a `Y.M.D` label; zero padding is accepted but not required
    ///
    /// # Errors
    /// Returns `InvalidDate` when the label is malformed or names an impossible day
    pub fn parse(label: &str) -> Result<Self> {
        let label = label.trim();
        let invalid = || ChangelogError::InvalidDate(label.to_string());

        let captures = DATE_LABEL_PATTERN.captures(label).ok_or_else(invalid)?;
        let year: i32 = captures[1].parse().map_err(|_| invalid())?;
        let month: u32 = captures[2].parse().map_err(|_| invalid())?;
        let day: u32 = captures[3].parse().map_err(|_| invalid())?;

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(invalid)
    }

    /// The current date in the given time zone
    #[must_use]
    pub fn today(tz: Tz) -> Self {
        Self(Utc::now().with_timezone(&tz).date_naive())
    }

    #[must_use]
    pub const fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl Display for ChangelogDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.0.year(), self.0.month(), self.0.day())
    }
}
