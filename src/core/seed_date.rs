//! Seed date selecting the daily puzzle instance

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

const FORMAT: &str = "%Y-%m-%d";

/// Calendar date in strict `YYYY-MM-DD` form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SeedDate(NaiveDate);

/// Error for text that is not a `YYYY-MM-DD` calendar date
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected a YYYY-MM-DD date, got {0:?}")]
pub struct SeedDateError(pub String);

impl SeedDate {
    /// Parse a strict `YYYY-MM-DD` date
    ///
    /// Both the shape (four digits, dash, two digits, dash, two digits) and the
    /// calendar date itself must be valid.
    ///
    /// # Examples
    /// ```
    /// use contexto::core::SeedDate;
    ///
    /// assert!(SeedDate::parse("2024-01-15").is_some());
    /// assert!(SeedDate::parse("2024-1-15").is_none());
    /// assert!(SeedDate::parse("2024-02-30").is_none());
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let bytes = text.as_bytes();
        let shaped = bytes.len() == 10
            && bytes.iter().enumerate().all(|(i, b)| match i {
                4 | 7 => *b == b'-',
                _ => b.is_ascii_digit(),
            });
        if !shaped {
            return None;
        }
        NaiveDate::parse_from_str(text, FORMAT).ok().map(Self)
    }

    /// Today's date in UTC
    #[must_use]
    pub fn today() -> Self {
        Self(Utc::now().date_naive())
    }

    /// Parse `text` when present and valid, otherwise fall back to today
    #[must_use]
    pub fn or_today(text: Option<&str>) -> Self {
        text.and_then(Self::parse).unwrap_or_else(Self::today)
    }

    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for SeedDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl TryFrom<String> for SeedDate {
    type Error = SeedDateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or(SeedDateError(value))
    }
}

impl From<SeedDate> for String {
    fn from(date: SeedDate) -> Self {
        date.to_string()
    }
}

impl fmt::Display for SeedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(FORMAT))
    }
}
