//! Per-month bill for a phone line
//!
//! A `Bill` accumulates the charges for exactly one billing period. The
//! contract that owns the line decides *what* gets charged (rates, fees,
//! free-minute allowances); the bill only records the result and derives
//! the running cost on demand.
//!
//! # Invariants
//!
//! - `cost() == fixed_cost + billed_minutes * rate_per_minute` after any
//!   sequence of operations
//! - Free minutes never contribute to cost
//! - A bill belongs to a single period and currency for its whole life

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use core_kernel::{BillId, BillingPeriod, Currency, Money};

use crate::error::BillingError;

/// The contract plan a bill is rated under
///
/// Stored on the bill as an informational tag; it is printed on
/// statements and drives no arithmetic here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanKind {
    /// Month-to-month plan, flat fee plus usage
    MonthToMonth,
    /// Fixed-term plan with a deposit and free-minute allowance
    Term,
    /// Prepaid plan billed against a carried balance
    Prepaid,
}

impl PlanKind {
    /// Returns the rate-group tag used on printed statements
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanKind::MonthToMonth => "MTM",
            PlanKind::Term => "TERM",
            PlanKind::Prepaid => "PREPAID",
        }
    }
}

impl fmt::Display for PlanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single month's accumulator of minutes and charges
///
/// The monthly driver opens one bill per contract per period and hands it
/// to the contract; the contract is the bill's only writer from then on.
/// Nothing carries over between bills - balance carry-forward, where a
/// plan needs it, is the contract's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bill {
    /// Unique bill identifier
    id: BillId,
    /// The period this bill covers
    period: BillingPeriod,
    /// Currency every amount on this bill is denominated in
    currency: Currency,
    /// Plan tag, set at month start
    plan: Option<PlanKind>,
    /// Price of one billed minute
    rate_per_minute: Money,
    /// Accumulated non-usage charges (fees, deposits, carried balances)
    fixed_cost: Money,
    /// Minutes charged at the per-minute rate
    billed_minutes: u32,
    /// Minutes consumed from a free allowance
    free_minutes: u32,
}

impl Bill {
    /// Opens a fresh bill for a period
    ///
    /// All amounts start at zero and no plan tag is set; the owning
    /// contract applies its rates and fees at month start.
    pub fn open(period: BillingPeriod, currency: Currency) -> Self {
        let id = BillId::new_v7();
        debug!(bill_id = %id, %period, "bill opened");
        Self {
            id,
            period,
            currency,
            plan: None,
            rate_per_minute: Money::zero(currency),
            fixed_cost: Money::zero(currency),
            billed_minutes: 0,
            free_minutes: 0,
        }
    }

    /// Sets the plan tag and per-minute rate
    ///
    /// Overwrites any previous rate. Side effect only; the running cost
    /// is recomputed from the new rate on the next [`Bill::cost`] query.
    ///
    /// # Errors
    ///
    /// Returns `BillingError::CurrencyMismatch` if the rate is in a
    /// foreign currency.
    pub fn set_rates(&mut self, plan: PlanKind, rate_per_minute: Money) -> Result<(), BillingError> {
        if rate_per_minute.currency() != self.currency {
            return Err(BillingError::currency_mismatch(
                self.currency,
                rate_per_minute.currency(),
            ));
        }
        self.plan = Some(plan);
        self.rate_per_minute = rate_per_minute;
        Ok(())
    }

    /// Adds a signed amount to the fixed cost
    ///
    /// Fees and deposits post positive amounts; credits and settlement
    /// adjustments post negative ones.
    ///
    /// # Errors
    ///
    /// Returns `BillingError::CurrencyMismatch` if the amount is in a
    /// foreign currency.
    pub fn add_fixed_cost(&mut self, amount: Money) -> Result<(), BillingError> {
        if amount.currency() != self.currency {
            return Err(BillingError::currency_mismatch(self.currency, amount.currency()));
        }
        self.fixed_cost = self.fixed_cost + amount;
        Ok(())
    }

    /// Adds minutes charged at the per-minute rate
    pub fn add_billed_minutes(&mut self, minutes: u32) {
        self.billed_minutes += minutes;
    }

    /// Adds minutes consumed from a free allowance
    ///
    /// Free minutes are tracked for allowance bookkeeping only and never
    /// contribute to cost.
    pub fn add_free_minutes(&mut self, minutes: u32) {
        self.free_minutes += minutes;
    }

    /// The amount owed on this bill so far
    ///
    /// Computed on demand as fixed cost plus billed minutes at the
    /// current rate. Pure query, no side effects.
    pub fn cost(&self) -> Money {
        self.fixed_cost + self.rate_per_minute.multiply(Decimal::from(self.billed_minutes))
    }

    /// Returns the bill identifier
    pub fn id(&self) -> BillId {
        self.id
    }

    /// Returns the period this bill covers
    pub fn period(&self) -> BillingPeriod {
        self.period
    }

    /// Returns the bill currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the plan tag, if rates have been set
    pub fn plan(&self) -> Option<PlanKind> {
        self.plan
    }

    /// Returns the current per-minute rate
    pub fn rate_per_minute(&self) -> Money {
        self.rate_per_minute
    }

    /// Returns the accumulated fixed cost
    pub fn fixed_cost(&self) -> Money {
        self.fixed_cost
    }

    /// Returns the minutes charged at the per-minute rate
    pub fn billed_minutes(&self) -> u32 {
        self.billed_minutes
    }

    /// Returns the minutes consumed from a free allowance
    ///
    /// Plans with a monthly allowance read their remaining minutes
    /// through this accessor rather than tracking consumption themselves.
    pub fn free_minutes_used(&self) -> u32 {
        self.free_minutes
    }

    /// Returns all minutes on the bill, billed and free
    pub fn total_minutes(&self) -> u32 {
        self.billed_minutes + self.free_minutes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn open_bill() -> Bill {
        let period = BillingPeriod::new(2024, 3).unwrap();
        Bill::open(period, Currency::USD)
    }

    #[test]
    fn test_open_bill_is_empty() {
        let bill = open_bill();
        assert!(bill.cost().is_zero());
        assert_eq!(bill.billed_minutes(), 0);
        assert_eq!(bill.free_minutes_used(), 0);
        assert!(bill.plan().is_none());
    }

    #[test]
    fn test_cost_combines_fixed_and_usage() {
        let mut bill = open_bill();
        bill.set_rates(PlanKind::MonthToMonth, Money::new(dec!(0.05), Currency::USD))
            .unwrap();
        bill.add_fixed_cost(Money::new(dec!(50.00), Currency::USD)).unwrap();
        bill.add_billed_minutes(30);

        assert_eq!(bill.cost().amount(), dec!(51.50));
    }

    #[test]
    fn test_free_minutes_are_cost_neutral() {
        let mut bill = open_bill();
        bill.set_rates(PlanKind::Term, Money::new(dec!(0.10), Currency::USD))
            .unwrap();
        bill.add_free_minutes(80);

        assert!(bill.cost().is_zero());
        assert_eq!(bill.free_minutes_used(), 80);
    }

    #[test]
    fn test_negative_fixed_cost_adjustment() {
        let mut bill = open_bill();
        bill.add_fixed_cost(Money::new(dec!(-25.00), Currency::USD)).unwrap();

        assert_eq!(bill.cost().amount(), dec!(-25.00));
    }

    #[test]
    fn test_foreign_currency_rate_is_rejected() {
        let mut bill = open_bill();
        let result = bill.set_rates(PlanKind::Prepaid, Money::new(dec!(0.025), Currency::EUR));

        assert!(matches!(result, Err(BillingError::CurrencyMismatch { .. })));
    }

    #[test]
    fn test_foreign_currency_fixed_cost_is_rejected() {
        let mut bill = open_bill();
        let result = bill.add_fixed_cost(Money::new(dec!(20.00), Currency::GBP));

        assert!(matches!(result, Err(BillingError::CurrencyMismatch { .. })));
    }

    #[test]
    fn test_plan_kind_tags() {
        assert_eq!(PlanKind::MonthToMonth.as_str(), "MTM");
        assert_eq!(PlanKind::Term.as_str(), "TERM");
        assert_eq!(PlanKind::Prepaid.as_str(), "PREPAID");
    }
}
