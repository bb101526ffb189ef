//! Billing domain errors

use core_kernel::Currency;
use thiserror::Error;

/// Errors that can occur in the billing domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BillingError {
    /// An amount in a foreign currency was offered to a bill
    #[error("Currency mismatch: expected {expected}, got {actual}")]
    CurrencyMismatch {
        expected: String,
        actual: String,
    },
}

impl BillingError {
    /// Creates a currency mismatch error from the two currencies involved
    pub fn currency_mismatch(expected: Currency, actual: Currency) -> Self {
        BillingError::CurrencyMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}
