//! Pricing schedules for the contract plans
//!
//! A `Tariff` carries every price the plan state machines charge from:
//! monthly fees, per-minute rates, the term deposit, the term free-minute
//! allowance, and the prepaid top-up rules. The standard schedule ships
//! in [`Tariff::standard`]; a deployment can deserialize an alternative
//! schedule from configuration instead.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, Money};

/// The full pricing schedule for all three plans
///
/// All amounts are denominated in `currency`; the bills a contract
/// charges into are opened in the same currency, and posting an amount
/// from a mismatched tariff fails at the bill boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tariff {
    /// Currency every price below is denominated in
    pub currency: Currency,
    /// Flat monthly fee on the month-to-month plan
    pub mtm_monthly_fee: Money,
    /// Per-minute rate on the month-to-month plan
    pub mtm_rate_per_minute: Money,
    /// Monthly fee on the term plan
    pub term_monthly_fee: Money,
    /// One-time deposit charged in a term contract's first month
    pub term_deposit: Money,
    /// Per-minute rate on the term plan
    pub term_rate_per_minute: Money,
    /// Free minutes included per month on the term plan
    pub term_free_minutes: u32,
    /// Per-minute rate on the prepaid plan
    pub prepaid_rate_per_minute: Money,
    /// Credit level below which a prepaid balance is topped up
    ///
    /// A top-up fires when fewer than this many units of credit remain
    /// after settling a call.
    pub prepaid_credit_floor: Money,
    /// Credit added by one automatic top-up
    pub prepaid_top_up: Money,
}

impl Tariff {
    /// The standard pricing schedule
    pub fn standard() -> Self {
        let currency = Currency::USD;
        Self {
            currency,
            mtm_monthly_fee: Money::new(dec!(50.00), currency),
            mtm_rate_per_minute: Money::new(dec!(0.05), currency),
            term_monthly_fee: Money::new(dec!(20.00), currency),
            term_deposit: Money::new(dec!(300.00), currency),
            term_rate_per_minute: Money::new(dec!(0.10), currency),
            term_free_minutes: 100,
            prepaid_rate_per_minute: Money::new(dec!(0.025), currency),
            prepaid_credit_floor: Money::new(dec!(10.00), currency),
            prepaid_top_up: Money::new(dec!(25.00), currency),
        }
    }
}

impl Default for Tariff {
    fn default() -> Self {
        Self::standard()
    }
}
