//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use core_kernel::Money;
use domain_billing::Bill;
use rust_decimal::Decimal;

/// Asserts that two Money values are equal in currency and amount
///
/// # Panics
///
/// Panics if the currencies differ or the amounts differ
pub fn assert_money_eq(actual: &Money, expected: &Money) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );

    assert_eq!(
        actual.amount(),
        expected.amount(),
        "Money amounts differ: actual={}, expected={}",
        actual.amount(),
        expected.amount()
    );
}

/// Asserts that a Money value is positive
pub fn assert_money_positive(money: &Money) {
    assert!(
        money.is_positive(),
        "Expected positive money, got {} {}",
        money.currency().symbol(),
        money.amount()
    );
}

/// Asserts that a Money value is zero
pub fn assert_money_zero(money: &Money) {
    assert!(
        money.is_zero(),
        "Expected zero money, got {} {}",
        money.currency().symbol(),
        money.amount()
    );
}

/// Asserts that a Money value is negative
pub fn assert_money_negative(money: &Money) {
    assert!(
        money.is_negative(),
        "Expected negative money, got {} {}",
        money.currency().symbol(),
        money.amount()
    );
}

/// Asserts that money values sum to a total
///
/// # Arguments
///
/// * `parts` - The money values that should sum to total
/// * `total` - The expected total
///
/// # Panics
///
/// Panics if the sum doesn't equal the total
pub fn assert_money_sum_equals(parts: &[Money], total: &Money) {
    let sum = parts.iter().fold(Money::zero(total.currency()), |acc, m| {
        acc.checked_add(m).expect("Currency mismatch in sum")
    });

    assert_eq!(
        sum.amount(),
        total.amount(),
        "Sum of parts ({}) doesn't equal total ({})",
        sum.amount(),
        total.amount()
    );
}

/// Asserts that a bill's derived cost equals an expected amount
///
/// # Panics
///
/// Panics if the cost differs, reporting the bill's charge components
pub fn assert_bill_cost(bill: &Bill, expected: Decimal) {
    assert_eq!(
        bill.cost().amount(),
        expected,
        "Bill for {} costs {} (fixed={}, billed_minutes={}), expected {}",
        bill.period(),
        bill.cost().amount(),
        bill.fixed_cost().amount(),
        bill.billed_minutes(),
        expected
    );
}

/// Asserts a bill's free and billed minute counters
pub fn assert_minute_split(bill: &Bill, free: u32, billed: u32) {
    assert_eq!(
        bill.free_minutes_used(),
        free,
        "Free minutes on bill for {}: expected {}, got {}",
        bill.period(),
        free,
        bill.free_minutes_used()
    );
    assert_eq!(
        bill.billed_minutes(),
        billed,
        "Billed minutes on bill for {}: expected {}, got {}",
        bill.period(),
        billed,
        bill.billed_minutes()
    );
}

/// Asserts that a result is Ok and returns the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Asserts that a result is Err and returns the error
#[macro_export]
macro_rules! assert_err {
    ($result:expr) => {
        match $result {
            Ok(value) => panic!("Expected Err, got Ok: {:?}", value),
            Err(e) => e,
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => panic!("{}: got Ok({:?})", $msg, value),
            Err(e) => e,
        }
    };
}

/// Asserts that an error matches a specific variant
#[macro_export]
macro_rules! assert_err_variant {
    ($result:expr, $pattern:pat) => {
        match $result {
            Ok(value) => panic!("Expected Err matching {}, got Ok({:?})", stringify!($pattern), value),
            Err(ref e) => {
                assert!(
                    matches!(e, $pattern),
                    "Error {:?} does not match pattern {}",
                    e,
                    stringify!($pattern)
                );
            }
        }
    };
}
