//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use chrono::{DateTime, Duration, TimeZone, Utc};
use core_kernel::{BillId, BillingPeriod, CallId, ContractId, Currency, Money};
use domain_billing::CallRecord;
use proptest::prelude::*;

/// Strategy for generating valid Currency values
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::USD),
        Just(Currency::CAD),
        Just(Currency::EUR),
        Just(Currency::GBP),
    ]
}

/// Strategy for generating valid positive amounts in minor units
pub fn positive_amount_minor_strategy() -> impl Strategy<Value = i64> {
    1i64..1_000_000i64
}

/// Strategy for generating valid amount ranges
pub fn amount_minor_strategy() -> impl Strategy<Value = i64> {
    -1_000_000i64..1_000_000i64
}

/// Strategy for generating valid Money values with positive amounts
pub fn positive_money_strategy() -> impl Strategy<Value = Money> {
    (positive_amount_minor_strategy(), currency_strategy())
        .prop_map(|(amount, currency)| Money::from_minor(amount, currency))
}

/// Strategy for generating valid Money values (can be negative)
pub fn money_strategy() -> impl Strategy<Value = Money> {
    (amount_minor_strategy(), currency_strategy())
        .prop_map(|(amount, currency)| Money::from_minor(amount, currency))
}

/// Strategy for generating valid USD Money values
pub fn usd_money_strategy() -> impl Strategy<Value = Money> {
    positive_amount_minor_strategy().prop_map(|amount| Money::from_minor(amount, Currency::USD))
}

/// Strategy for generating per-minute rates (0.01 to 0.99 USD)
pub fn usd_rate_strategy() -> impl Strategy<Value = Money> {
    (1i64..100i64).prop_map(|cents| Money::from_minor(cents, Currency::USD))
}

/// Strategy for generating call durations in seconds (up to ten hours)
pub fn duration_secs_strategy() -> impl Strategy<Value = u32> {
    0u32..36_000u32
}

/// Strategy for generating billing periods between 2020 and 2029
pub fn billing_period_strategy() -> impl Strategy<Value = BillingPeriod> {
    (2020i32..2030i32, 1u32..13u32)
        .prop_map(|(year, month)| BillingPeriod::new(year, month).expect("Generated invalid period"))
}

/// Strategy for generating connect times within 2024
pub fn connect_time_2024_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..366i64, 0i64..86_400i64).prop_map(|(days, secs)| {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
            + Duration::days(days)
            + Duration::seconds(secs)
    })
}

/// Strategy for generating phone numbers
pub fn phone_number_strategy() -> impl Strategy<Value = String> {
    (100u32..999u32, 100u32..999u32, 1000u32..9999u32)
        .prop_map(|(area, prefix, line)| format!("+1-{}-{}-{}", area, prefix, line))
}

/// Strategy for generating complete call records placed within 2024
pub fn call_record_strategy() -> impl Strategy<Value = CallRecord> {
    (
        phone_number_strategy(),
        phone_number_strategy(),
        connect_time_2024_strategy(),
        duration_secs_strategy(),
    )
        .prop_map(|(src, dst, connect_time, duration)| {
            CallRecord::new(src, dst, connect_time, duration)
        })
}

/// Strategy for generating ContractId
pub fn contract_id_strategy() -> impl Strategy<Value = ContractId> {
    any::<[u8; 16]>().prop_map(|bytes| ContractId::from_uuid(uuid::Uuid::from_bytes(bytes)))
}

/// Strategy for generating BillId
pub fn bill_id_strategy() -> impl Strategy<Value = BillId> {
    any::<[u8; 16]>().prop_map(|bytes| BillId::from_uuid(uuid::Uuid::from_bytes(bytes)))
}

/// Strategy for generating CallId
pub fn call_id_strategy() -> impl Strategy<Value = CallId> {
    any::<[u8; 16]>().prop_map(|bytes| CallId::from_uuid(uuid::Uuid::from_bytes(bytes)))
}
