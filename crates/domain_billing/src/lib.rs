//! Billing Domain - Monthly Phone Bills
//!
//! This crate implements the per-month ledger for a phone line: the
//! `Bill` accumulator and the `CallRecord` usage value it is charged
//! from. Contracts own the pricing policy; this crate only records
//! minutes and money and derives cost.
//!
//! # Billing model
//!
//! Each calendar month the driver opens a fresh `Bill` per line and the
//! owning contract charges into it:
//! - **Fixed costs**: monthly fees, deposits, carried balances (signed)
//! - **Billed minutes**: usage charged at the plan's per-minute rate
//! - **Free minutes**: usage absorbed by an allowance, cost-neutral
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_billing::{Bill, PlanKind};
//!
//! let mut bill = Bill::open(period, Currency::USD);
//! bill.set_rates(PlanKind::MonthToMonth, rate_per_minute)?;
//! bill.add_fixed_cost(monthly_fee)?;
//! bill.add_billed_minutes(call.billable_minutes());
//!
//! let owed = bill.cost();
//! ```

pub mod bill;
pub mod call;
pub mod error;

pub use bill::{Bill, PlanKind};
pub use call::CallRecord;
pub use error::BillingError;
