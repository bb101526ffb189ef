//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common entities across the billing system.
//! These fixtures are designed to be consistent and predictable for unit tests.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use core_kernel::{BillId, BillingPeriod, CallId, ContractId, Currency, Money};
use domain_contract::{Contract, Tariff};
use rust_decimal_macros::dec;
use uuid::Uuid;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Creates a standard USD amount for testing
    pub fn usd_100() -> Money {
        Money::new(dec!(100.00), Currency::USD)
    }

    /// The monthly fee on the standard month-to-month schedule
    pub fn monthly_fee() -> Money {
        Money::new(dec!(50.00), Currency::USD)
    }

    /// The deposit charged in a term contract's first month
    pub fn term_deposit() -> Money {
        Money::new(dec!(300.00), Currency::USD)
    }

    /// The credit added by one automatic prepaid top-up
    pub fn top_up() -> Money {
        Money::new(dec!(25.00), Currency::USD)
    }

    /// Creates a zero amount
    pub fn usd_zero() -> Money {
        Money::zero(Currency::USD)
    }

    /// Creates a negative amount for credit scenarios
    pub fn usd_credit() -> Money {
        Money::new(dec!(-25.00), Currency::USD)
    }

    /// Creates a EUR amount for currency mismatch tests
    pub fn eur_100() -> Money {
        Money::new(dec!(100.00), Currency::EUR)
    }
}

/// Fixture for billing period and date test data
pub struct PeriodFixtures;

impl PeriodFixtures {
    /// Standard opening period (January 2024)
    pub fn january() -> BillingPeriod {
        BillingPeriod::new(2024, 1).unwrap()
    }

    /// The period after the standard opening period (February 2024)
    pub fn february() -> BillingPeriod {
        BillingPeriod::new(2024, 2).unwrap()
    }

    /// A mid-year period for rollover chains (June 2024)
    pub fn june() -> BillingPeriod {
        BillingPeriod::new(2024, 6).unwrap()
    }

    /// A period in the prior year (December 2023)
    pub fn prior_december() -> BillingPeriod {
        BillingPeriod::new(2023, 12).unwrap()
    }

    /// Standard contract start date (Jan 15, 2024), deliberately mid-month
    pub fn contract_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    /// Standard term contract end date, one year after the start
    pub fn term_end() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    /// A connect time inside the standard opening period
    pub fn january_connect_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 20, 14, 30, 0).unwrap()
    }
}

/// Fixture for identifier test data
pub struct IdFixtures;

impl IdFixtures {
    /// Creates a deterministic contract ID for testing
    pub fn contract_id() -> ContractId {
        ContractId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440001").unwrap())
    }

    /// Creates a deterministic bill ID for testing
    pub fn bill_id() -> BillId {
        BillId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440002").unwrap())
    }

    /// Creates a deterministic call ID for testing
    pub fn call_id() -> CallId {
        CallId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440003").unwrap())
    }
}

/// Fixture for ready-made contracts on the standard tariff
///
/// All three open on [`PeriodFixtures::contract_start`]. The term
/// contract has no bill yet; drive it with `new_month` before billing.
pub struct ContractFixtures;

impl ContractFixtures {
    /// The subscriber number contracts are opened for
    pub fn phone_number() -> &'static str {
        "+1-555-123-4567"
    }

    /// A destination number for call records
    pub fn destination_number() -> &'static str {
        "+1-555-987-6543"
    }

    /// A month-to-month contract with its January bill already open
    pub fn month_to_month() -> Contract {
        Contract::month_to_month(
            Self::phone_number(),
            PeriodFixtures::contract_start(),
            Tariff::standard(),
        )
        .expect("fixture contract should open")
    }

    /// A one-year term contract, no bill installed yet
    pub fn term() -> Contract {
        Contract::term(
            Self::phone_number(),
            PeriodFixtures::contract_start(),
            PeriodFixtures::term_end(),
            Tariff::standard(),
        )
        .expect("fixture contract should open")
    }

    /// A prepaid contract carrying 100.00 of credit into January
    pub fn prepaid() -> Contract {
        Contract::prepaid(
            Self::phone_number(),
            PeriodFixtures::contract_start(),
            MoneyFixtures::usd_100(),
            Tariff::standard(),
        )
        .expect("fixture contract should open")
    }
}
