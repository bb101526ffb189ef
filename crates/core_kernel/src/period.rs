//! Billing period handling
//!
//! This module provides the month/year key that the billing cycle runs on.
//! Every bill belongs to exactly one period, and contracts advance through
//! periods one month at a time.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors related to billing period construction
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PeriodError {
    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),
}

/// A calendar month in a specific year
///
/// Periods order chronologically, so a contract's history can be kept
/// sorted by period alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BillingPeriod {
    year: i32,
    month: u32,
}

impl BillingPeriod {
    /// Creates a new billing period
    ///
    /// # Errors
    ///
    /// Returns `PeriodError::InvalidMonth` if `month` is not in 1..=12.
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// Returns the period a date falls in
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the year
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1-12)
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the following period, rolling over at year end
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Returns the preceding period
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Returns the first calendar day of the period
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("month is validated on construction")
    }

    /// Returns true if the given date falls inside this period
    pub fn contains(&self, date: NaiveDate) -> bool {
        Self::from_date(date) == *self
    }

    /// Returns how many months this period lies after another
    ///
    /// Negative when `other` is later, zero for the same period.
    pub fn months_since(&self, other: &BillingPeriod) -> i32 {
        (self.year - other.year) * 12 + self.month as i32 - other.month as i32
    }
}

impl fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
