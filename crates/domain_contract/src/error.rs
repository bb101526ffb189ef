//! Contract domain errors
//!
//! This module defines all error types that can occur within the
//! contract administration domain.

use chrono::NaiveDate;
use thiserror::Error;

use core_kernel::BillingPeriod;
use domain_billing::BillingError;

/// Errors that can occur in the contract domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContractError {
    /// Operation attempted on a canceled contract
    #[error("Contract is closed")]
    ContractClosed,

    /// No bill has been installed for the current period
    #[error("No bill is open for this contract")]
    NoOpenBill,

    /// A bill or call belongs to a different period than expected
    #[error("Period mismatch: expected {expected}, got {actual}")]
    PeriodMismatch {
        expected: BillingPeriod,
        actual: BillingPeriod,
    },

    /// Term contract dates are inconsistent
    #[error("Invalid term: end date {end} is not after start date {start}")]
    InvalidTerm {
        start: NaiveDate,
        end: NaiveDate,
    },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error raised by the underlying bill
    #[error("Billing error: {0}")]
    Billing(#[from] BillingError),
}

impl ContractError {
    /// Creates a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        ContractError::Validation(message.into())
    }

    /// Creates a period mismatch error
    pub fn period_mismatch(expected: BillingPeriod, actual: BillingPeriod) -> Self {
        ContractError::PeriodMismatch { expected, actual }
    }
}
