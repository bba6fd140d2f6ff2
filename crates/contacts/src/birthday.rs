//! Birthday value type
//!
//! A birthday is a plain calendar date entered as `DD.MM.YYYY`. Nothing else
//! is accepted: no single-digit days, no other separators, no two-digit years.

use chrono::{Datelike, NaiveDate};
use contacts_core::LeapDayPolicy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::{ContactError, Result};

/// chrono format string for `DD.MM.YYYY`
pub const DATE_FORMAT: &str = "%d.%m.%Y";

fn shape() -> &'static Regex {
    static SHAPE: OnceLock<Regex> = OnceLock::new();
    SHAPE.get_or_init(|| Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("valid regex"))
}

/// Format a date as `DD.MM.YYYY`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a `DD.MM.YYYY` string into a valid calendar date
    pub fn parse(text: &str) -> Result<Self> {
        if !shape().is_match(text) {
            return Err(ContactError::Format(text.to_string()));
        }

        NaiveDate::parse_from_str(text, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ContactError::Format(text.to_string()))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The birthday's month and day in `year`.
    ///
    /// A 29 February birthday lands on the date chosen by `policy` when
    /// `year` is not a leap year. Returns `None` only for years chrono
    /// cannot represent.
    pub fn occurrence_in(&self, year: i32, policy: LeapDayPolicy) -> Option<NaiveDate> {
        if let Some(date) = self.0.with_year(year) {
            return Some(date);
        }

        match policy {
            LeapDayPolicy::Feb28 => NaiveDate::from_ymd_opt(year, 2, 28),
            LeapDayPolicy::Mar1 => NaiveDate::from_ymd_opt(year, 3, 1),
        }
    }
}

impl FromStr for Birthday {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_date(self.0))
    }
}
