//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use chrono::{DateTime, TimeZone, Utc};
use core_kernel::{BillingPeriod, Currency, Money};
use domain_billing::{Bill, CallRecord, PlanKind};

use crate::fixtures::{ContractFixtures, PeriodFixtures};

/// Builder for constructing call records
///
/// Defaults to a five-minute call from the fixture subscriber placed
/// inside January 2024.
pub struct CallRecordBuilder {
    src_number: String,
    dst_number: String,
    connect_time: DateTime<Utc>,
    duration_secs: u32,
}

impl Default for CallRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CallRecordBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            src_number: ContractFixtures::phone_number().to_string(),
            dst_number: ContractFixtures::destination_number().to_string(),
            connect_time: PeriodFixtures::january_connect_time(),
            duration_secs: 300,
        }
    }

    /// Sets the originating number
    pub fn with_src_number(mut self, number: impl Into<String>) -> Self {
        self.src_number = number.into();
        self
    }

    /// Sets the dialed number
    pub fn with_dst_number(mut self, number: impl Into<String>) -> Self {
        self.dst_number = number.into();
        self
    }

    /// Sets the connect time
    pub fn with_connect_time(mut self, connect_time: DateTime<Utc>) -> Self {
        self.connect_time = connect_time;
        self
    }

    /// Places the call on the 10th of the given month at 14:00 UTC
    pub fn in_month(mut self, year: i32, month: u32) -> Self {
        self.connect_time = Utc.with_ymd_and_hms(year, month, 10, 14, 0, 0).unwrap();
        self
    }

    /// Sets the duration in seconds
    pub fn with_duration_secs(mut self, secs: u32) -> Self {
        self.duration_secs = secs;
        self
    }

    /// Sets the duration in whole minutes
    pub fn with_minutes(mut self, minutes: u32) -> Self {
        self.duration_secs = minutes * 60;
        self
    }

    /// Builds the call record
    pub fn build(self) -> CallRecord {
        CallRecord::new(
            self.src_number,
            self.dst_number,
            self.connect_time,
            self.duration_secs,
        )
    }
}

/// Builder for constructing bills in a known charge state
///
/// Useful when a test needs a bill mid-month without driving a contract
/// through the calls that would produce it.
pub struct BillBuilder {
    period: BillingPeriod,
    currency: Currency,
    rates: Option<(PlanKind, Money)>,
    fixed_costs: Vec<Money>,
    billed_minutes: u32,
    free_minutes: u32,
}

impl Default for BillBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BillBuilder {
    /// Creates a new builder for an empty January 2024 USD bill
    pub fn new() -> Self {
        Self {
            period: PeriodFixtures::january(),
            currency: Currency::USD,
            rates: None,
            fixed_costs: Vec::new(),
            billed_minutes: 0,
            free_minutes: 0,
        }
    }

    /// Sets the billing period
    pub fn in_period(mut self, period: BillingPeriod) -> Self {
        self.period = period;
        self
    }

    /// Sets the bill currency
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Tags the bill with a plan and per-minute rate
    pub fn with_rates(mut self, plan: PlanKind, rate_per_minute: Money) -> Self {
        self.rates = Some((plan, rate_per_minute));
        self
    }

    /// Adds a fixed cost posting
    pub fn with_fixed_cost(mut self, amount: Money) -> Self {
        self.fixed_costs.push(amount);
        self
    }

    /// Sets the billed minute counter
    pub fn with_billed_minutes(mut self, minutes: u32) -> Self {
        self.billed_minutes = minutes;
        self
    }

    /// Sets the free minute counter
    pub fn with_free_minutes(mut self, minutes: u32) -> Self {
        self.free_minutes = minutes;
        self
    }

    /// Builds the bill by replaying the accumulated postings
    pub fn build(self) -> Bill {
        let mut bill = Bill::open(self.period, self.currency);
        if let Some((plan, rate)) = self.rates {
            bill.set_rates(plan, rate)
                .expect("builder rate currency should match the bill");
        }
        for amount in self.fixed_costs {
            bill.add_fixed_cost(amount)
                .expect("builder cost currency should match the bill");
        }
        bill.add_billed_minutes(self.billed_minutes);
        bill.add_free_minutes(self.free_minutes);
        bill
    }
}
