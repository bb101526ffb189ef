//! Plan variants and their billing policies
//!
//! A `Plan` is the pricing state of one contract: which of the three
//! products the line is on, plus the per-plan state that survives
//! between months (a term's end date, a prepaid balance). The plan
//! decides what gets charged at month start, how each call is rated,
//! and what a cancellation settles to; the [`Bill`] only records the
//! outcome.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{BillingPeriod, Money};
use domain_billing::{Bill, CallRecord, PlanKind};

use crate::error::ContractError;
use crate::tariff::Tariff;

/// The pricing state of a contract
///
/// Plans share no common mutable state; what was method overriding in a
/// class hierarchy is a match per operation here, with the default call
/// policy factored into [`bill_all_minutes`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Plan {
    /// Flat monthly fee plus usage, no commitment
    MonthToMonth,

    /// Fixed-term commitment with a deposit and a monthly free-minute
    /// allowance
    Term {
        /// Date the commitment runs to; expiry is enforced by the
        /// driver, not the plan
        end: NaiveDate,
        /// Most recent period a rollover was applied for
        current: Option<BillingPeriod>,
    },

    /// Usage billed against a carried balance
    Prepaid {
        /// Amount the customer owes; negative means credit
        balance: Money,
    },
}

/// Outcome of rating one call against a bill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallCharge {
    /// Minutes charged at the per-minute rate
    pub billed_minutes: u32,
    /// Minutes absorbed by the free allowance
    pub free_minutes: u32,
    /// Automatic top-up applied during settlement, if any
    pub top_up: Option<TopUp>,
}

/// An automatic prepaid top-up recorded during call settlement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopUp {
    /// Credit added to the balance
    pub amount: Money,
    /// Balance immediately after the top-up
    pub balance: Money,
}

impl Plan {
    /// Returns the plan tag bills are stamped with
    pub fn kind(&self) -> PlanKind {
        match self {
            Plan::MonthToMonth => PlanKind::MonthToMonth,
            Plan::Term { .. } => PlanKind::Term,
            Plan::Prepaid { .. } => PlanKind::Prepaid,
        }
    }

    /// Returns the carried balance of a prepaid plan
    pub fn balance(&self) -> Option<Money> {
        match self {
            Plan::Prepaid { balance } => Some(*balance),
            _ => None,
        }
    }

    /// Returns the end date of a term plan
    pub fn end_date(&self) -> Option<NaiveDate> {
        match self {
            Plan::Term { end, .. } => Some(*end),
            _ => None,
        }
    }

    /// Returns the last period a term plan rolled over into
    pub fn current_period(&self) -> Option<BillingPeriod> {
        match self {
            Plan::Term { current, .. } => *current,
            _ => None,
        }
    }

    /// Applies the plan's month-start charges to a fresh bill
    ///
    /// Sets the plan rate and posts the fixed charges for the month: the
    /// flat fee (month-to-month), the deposit-then-fee (term, deposit in
    /// the start month only), or the carried balance (prepaid, which has
    /// no monthly fee).
    ///
    /// # Errors
    ///
    /// Returns a billing error if the tariff and bill currencies differ.
    pub fn apply_month_start(
        &mut self,
        bill: &mut Bill,
        tariff: &Tariff,
        period: BillingPeriod,
        start: NaiveDate,
    ) -> Result<(), ContractError> {
        match self {
            Plan::MonthToMonth => {
                bill.set_rates(PlanKind::MonthToMonth, tariff.mtm_rate_per_minute)?;
                bill.add_fixed_cost(tariff.mtm_monthly_fee)?;
            }
            Plan::Term { current, .. } => {
                *current = Some(period);
                // The one-time deposit posts in the contract's start
                // month, ahead of the regular monthly fee.
                if period == BillingPeriod::from_date(start) {
                    bill.add_fixed_cost(tariff.term_deposit)?;
                }
                bill.set_rates(PlanKind::Term, tariff.term_rate_per_minute)?;
                bill.add_fixed_cost(tariff.term_monthly_fee)?;
            }
            Plan::Prepaid { balance } => {
                bill.set_rates(PlanKind::Prepaid, tariff.prepaid_rate_per_minute)?;
                bill.add_fixed_cost(*balance)?;
            }
        }
        Ok(())
    }

    /// Rates one call against the current bill
    ///
    /// Month-to-month charges every minute. Term draws the call down
    /// from the monthly allowance first and bills only the overflow.
    /// Prepaid charges every minute, then settles the bill's cost into
    /// the carried balance and tops the balance up when credit runs low;
    /// afterwards the bill's cost equals the balance exactly.
    pub fn apply_call(
        &mut self,
        bill: &mut Bill,
        call: &CallRecord,
        tariff: &Tariff,
    ) -> Result<CallCharge, ContractError> {
        match self {
            Plan::MonthToMonth => {
                let minutes = bill_all_minutes(bill, call);
                Ok(CallCharge {
                    billed_minutes: minutes,
                    free_minutes: 0,
                    top_up: None,
                })
            }
            Plan::Term { .. } => {
                let minutes = call.billable_minutes();
                let remaining = tariff
                    .term_free_minutes
                    .saturating_sub(bill.free_minutes_used());

                if remaining > minutes {
                    bill.add_free_minutes(minutes);
                    Ok(CallCharge {
                        billed_minutes: 0,
                        free_minutes: minutes,
                        top_up: None,
                    })
                } else if remaining > 0 {
                    bill.add_free_minutes(remaining);
                    bill.add_billed_minutes(minutes - remaining);
                    Ok(CallCharge {
                        billed_minutes: minutes - remaining,
                        free_minutes: remaining,
                        top_up: None,
                    })
                } else {
                    bill.add_billed_minutes(minutes);
                    Ok(CallCharge {
                        billed_minutes: minutes,
                        free_minutes: 0,
                        top_up: None,
                    })
                }
            }
            Plan::Prepaid { balance } => {
                let minutes = bill_all_minutes(bill, call);

                // Settle the bill into the balance: the cost so far
                // becomes the new balance and is backed out of the bill.
                let cost = bill.cost();
                *balance = cost;
                bill.add_fixed_cost(-cost)?;

                let mut top_up = None;
                if *balance > -tariff.prepaid_credit_floor {
                    *balance = *balance - tariff.prepaid_top_up;
                    top_up = Some(TopUp {
                        amount: tariff.prepaid_top_up,
                        balance: *balance,
                    });
                }

                // Re-apply the balance so the bill's cost tracks it.
                bill.add_fixed_cost(*balance)?;

                Ok(CallCharge {
                    billed_minutes: minutes,
                    free_minutes: 0,
                    top_up,
                })
            }
        }
    }

    /// Returns the amount owed to close the line against its final bill
    ///
    /// Month-to-month and term owe the bill's cost as-is; the term
    /// deposit is not refunded here. Prepaid owes the cost only when
    /// positive: leftover credit is forfeited, not paid out.
    pub fn settlement(&self, bill: &Bill) -> Money {
        let cost = bill.cost();
        match self {
            Plan::Prepaid { .. } if !cost.is_positive() => Money::zero(cost.currency()),
            _ => cost,
        }
    }
}

/// The default rating policy: every billable minute of the call is
/// charged at the bill's per-minute rate
///
/// Month-to-month uses this as its whole policy; prepaid uses it as the
/// first step before settling into the balance.
fn bill_all_minutes(bill: &mut Bill, call: &CallRecord) -> u32 {
    let minutes = call.billable_minutes();
    bill.add_billed_minutes(minutes);
    minutes
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use core_kernel::Currency;
    use rust_decimal_macros::dec;

    fn start_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    fn call_of_minutes(minutes: u32) -> CallRecord {
        let connect_time = Utc.with_ymd_and_hms(2024, 1, 20, 10, 0, 0).unwrap();
        CallRecord::new("415-555-0100", "415-555-0101", connect_time, minutes * 60)
    }

    fn open_term_bill(tariff: &Tariff, plan: &mut Plan) -> Bill {
        let period = BillingPeriod::new(2024, 1).unwrap();
        let mut bill = Bill::open(period, Currency::USD);
        plan.apply_month_start(&mut bill, tariff, period, start_date())
            .unwrap();
        bill
    }

    #[test]
    fn test_term_call_within_allowance_is_free() {
        let tariff = Tariff::standard();
        let mut plan = Plan::Term {
            end: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            current: None,
        };
        let mut bill = open_term_bill(&tariff, &mut plan);

        let charge = plan.apply_call(&mut bill, &call_of_minutes(30), &tariff).unwrap();

        assert_eq!(charge.free_minutes, 30);
        assert_eq!(charge.billed_minutes, 0);
        assert_eq!(bill.free_minutes_used(), 30);
    }

    #[test]
    fn test_term_call_exactly_consuming_allowance_bills_nothing() {
        let tariff = Tariff::standard();
        let mut plan = Plan::Term {
            end: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            current: None,
        };
        let mut bill = open_term_bill(&tariff, &mut plan);

        plan.apply_call(&mut bill, &call_of_minutes(60), &tariff).unwrap();
        let charge = plan.apply_call(&mut bill, &call_of_minutes(40), &tariff).unwrap();

        // remaining == minutes takes the partial branch and bills zero
        assert_eq!(charge.free_minutes, 40);
        assert_eq!(charge.billed_minutes, 0);
        assert_eq!(bill.free_minutes_used(), 100);
        assert_eq!(bill.billed_minutes(), 0);
    }

    #[test]
    fn test_prepaid_cost_tracks_balance_after_call() {
        let tariff = Tariff::standard();
        let mut plan = Plan::Prepaid {
            balance: Money::new(dec!(-100.00), Currency::USD),
        };
        let period = BillingPeriod::new(2024, 1).unwrap();
        let mut bill = Bill::open(period, Currency::USD);
        plan.apply_month_start(&mut bill, &tariff, period, start_date())
            .unwrap();

        plan.apply_call(&mut bill, &call_of_minutes(40), &tariff).unwrap();

        assert_eq!(bill.cost(), plan.balance().unwrap());
        assert_eq!(plan.balance().unwrap().amount(), dec!(-99.00));
    }

    #[test]
    fn test_settlement_forfeits_prepaid_credit() {
        let plan = Plan::Prepaid {
            balance: Money::new(dec!(-3.00), Currency::USD),
        };
        let period = BillingPeriod::new(2024, 1).unwrap();
        let mut bill = Bill::open(period, Currency::USD);
        bill.add_fixed_cost(Money::new(dec!(-3.00), Currency::USD)).unwrap();

        assert!(plan.settlement(&bill).is_zero());
    }

    #[test]
    fn test_settlement_collects_positive_cost() {
        let plan = Plan::MonthToMonth;
        let period = BillingPeriod::new(2024, 1).unwrap();
        let mut bill = Bill::open(period, Currency::USD);
        bill.add_fixed_cost(Money::new(dec!(50.00), Currency::USD)).unwrap();

        assert_eq!(plan.settlement(&bill).amount(), dec!(50.00));
    }
}
