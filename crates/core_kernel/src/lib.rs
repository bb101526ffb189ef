//! Core Kernel - Foundational types and utilities for the billing system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic
//! - Billing period (month/year) handling
//! - Common identifiers and value objects

pub mod money;
pub mod period;
pub mod identifiers;

pub use money::{Money, Currency, MoneyError};
pub use period::{BillingPeriod, PeriodError};
pub use identifiers::{ContractId, BillId, CallId};
