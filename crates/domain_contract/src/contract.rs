//! Contract aggregate - a phone line and its billing lifecycle
//!
//! The `Contract` is the aggregate root of the domain: the monthly
//! driver talks to it and to nothing else. It owns the line's plan, the
//! tariff it was sold under, the bill for the month in progress, and the
//! lifecycle state. Every transition is validated here and recorded as a
//! domain event for downstream consumers.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use core_kernel::{BillingPeriod, ContractId, Money};
use domain_billing::{Bill, CallRecord, PlanKind};

use crate::error::ContractError;
use crate::events::ContractEvent;
use crate::plan::Plan;
use crate::tariff::Tariff;

/// Lifecycle state of a contract
///
/// A contract is either live or canceled; there is no draft or suspended
/// stage. Cancellation keeps the dates and the settlement outcome on the
/// state itself so a closed contract still tells its story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractState {
    /// The line is live and accepts rollovers, calls, and cancellation
    Active {
        /// Date the line went into service
        start: NaiveDate,
    },

    /// The line has been canceled and its final bill settled
    Canceled {
        /// Date the line had gone into service
        start: NaiveDate,
        /// Period the cancellation settled in
        canceled_in: BillingPeriod,
        /// Final amount collected at settlement
        amount_due: Money,
    },
}

/// A phone-line contract, the aggregate root of the billing domain
///
/// Contracts live entirely in memory; the driver owns the calendar and
/// pushes months and calls in. All monetary outcomes flow through the
/// current [`Bill`], installed once per month via [`Contract::new_month`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contract {
    /// Unique contract identifier
    id: ContractId,
    /// The phone number this contract covers
    phone_number: String,
    /// Lifecycle state
    state: ContractState,
    /// Pricing plan and the per-plan state it carries
    plan: Plan,
    /// Price list the contract was sold under
    tariff: Tariff,
    /// Bill for the month in progress, if one is open
    bill: Option<Bill>,
    /// Domain events pending collection
    #[serde(skip)]
    events: Vec<ContractEvent>,
}

impl Contract {
    /// Opens a month-to-month contract
    ///
    /// The start month's bill is opened immediately, so the flat fee is
    /// already on it when the contract comes back.
    ///
    /// # Errors
    ///
    /// Returns a billing error if the tariff carries amounts in a
    /// foreign currency.
    pub fn month_to_month(
        phone_number: impl Into<String>,
        start: NaiveDate,
        tariff: Tariff,
    ) -> Result<Self, ContractError> {
        let mut contract = Self::open(phone_number.into(), start, Plan::MonthToMonth, tariff);
        contract.open_start_month(start)?;
        Ok(contract)
    }

    /// Opens a fixed-term contract running from `start` to `end`
    ///
    /// No bill is opened here; the first [`Contract::new_month`] detects
    /// the start month and posts the deposit.
    ///
    /// # Errors
    ///
    /// Returns `ContractError::InvalidTerm` unless `end > start`.
    pub fn term(
        phone_number: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
        tariff: Tariff,
    ) -> Result<Self, ContractError> {
        if end <= start {
            return Err(ContractError::InvalidTerm { start, end });
        }
        Ok(Self::open(
            phone_number.into(),
            start,
            Plan::Term { end, current: None },
            tariff,
        ))
    }

    /// Opens a prepaid contract with an initial prepayment
    ///
    /// The prepayment becomes customer credit (a negative balance) and
    /// the start month's bill is opened immediately, carrying it.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a negative prepayment and a
    /// billing error if the prepayment currency differs from the
    /// tariff's.
    pub fn prepaid(
        phone_number: impl Into<String>,
        start: NaiveDate,
        prepayment: Money,
        tariff: Tariff,
    ) -> Result<Self, ContractError> {
        if prepayment.is_negative() {
            return Err(ContractError::validation("prepayment cannot be negative"));
        }
        let mut contract = Self::open(
            phone_number.into(),
            start,
            Plan::Prepaid {
                balance: -prepayment,
            },
            tariff,
        );
        contract.open_start_month(start)?;
        Ok(contract)
    }

    fn open(phone_number: String, start: NaiveDate, plan: Plan, tariff: Tariff) -> Self {
        let id = ContractId::new_v7();
        let kind = plan.kind();
        let opened = ContractEvent::ContractOpened {
            contract_id: id,
            plan: kind,
            phone_number: phone_number.clone(),
            start,
            timestamp: Utc::now(),
        };
        debug!(contract_id = %id, plan = %kind, %start, "contract opened");

        Self {
            id,
            phone_number,
            state: ContractState::Active { start },
            plan,
            tariff,
            bill: None,
            events: vec![opened],
        }
    }

    fn open_start_month(&mut self, start: NaiveDate) -> Result<(), ContractError> {
        let period = BillingPeriod::from_date(start);
        let bill = Bill::open(period, self.tariff.currency);
        self.new_month(period, bill)
    }

    /// Starts a new billing month with a fresh bill
    ///
    /// The bill replaces the previous month's; whatever that bill had
    /// accumulated is gone from the contract's view. The plan then posts
    /// its month-start charges: the flat fee, the deposit-then-fee in a
    /// term's start month, or the carried prepaid balance.
    ///
    /// # Errors
    ///
    /// Returns `ContractClosed` on a canceled contract, `PeriodMismatch`
    /// if the bill was opened for a different period, or a billing error
    /// if the bill's currency differs from the tariff's. A rejected
    /// rollover leaves the previous bill in place.
    pub fn new_month(&mut self, period: BillingPeriod, bill: Bill) -> Result<(), ContractError> {
        let start = self.active_start()?;
        if bill.period() != period {
            return Err(ContractError::period_mismatch(period, bill.period()));
        }

        let mut bill = bill;
        self.plan
            .apply_month_start(&mut bill, &self.tariff, period, start)?;
        debug!(
            contract_id = %self.id,
            %period,
            plan = %self.plan.kind(),
            "month started"
        );
        self.bill = Some(bill);

        self.events.push(ContractEvent::MonthStarted {
            contract_id: self.id,
            period,
            timestamp: Utc::now(),
        });

        Ok(())
    }

    /// Rates one call against the current bill
    ///
    /// The call must land in the open bill's period; the driver feeds
    /// calls month by month and this makes that precondition checkable.
    /// The plan decides the split between billed and free minutes, and a
    /// prepaid plan settles its balance (possibly topping up) as part of
    /// the same operation.
    ///
    /// # Errors
    ///
    /// Returns `ContractClosed` on a canceled contract, `NoOpenBill` if
    /// no month has been started, or `PeriodMismatch` if the call falls
    /// outside the open bill's period.
    pub fn bill_call(&mut self, call: &CallRecord) -> Result<(), ContractError> {
        self.active_start()?;
        let bill = self.bill.as_mut().ok_or(ContractError::NoOpenBill)?;
        if call.period() != bill.period() {
            return Err(ContractError::period_mismatch(bill.period(), call.period()));
        }

        let charge = self.plan.apply_call(bill, call, &self.tariff)?;
        let now = Utc::now();

        self.events.push(ContractEvent::CallBilled {
            contract_id: self.id,
            call_id: call.id(),
            billed_minutes: charge.billed_minutes,
            free_minutes: charge.free_minutes,
            timestamp: now,
        });

        if let Some(top_up) = charge.top_up {
            info!(
                contract_id = %self.id,
                amount = %top_up.amount,
                balance = %top_up.balance,
                "prepaid balance topped up"
            );
            self.events.push(ContractEvent::CreditToppedUp {
                contract_id: self.id,
                amount: top_up.amount.amount(),
                balance: top_up.balance.amount(),
                currency: top_up.amount.currency().to_string(),
                timestamp: now,
            });
        }

        Ok(())
    }

    /// Cancels the contract and settles the current bill
    ///
    /// Month-to-month and term owe the bill's cost in full; the term
    /// deposit is not refunded. Prepaid owes the cost only when positive
    /// and forfeits leftover credit. The final bill stays attached to
    /// the contract for inspection, but no further operation touches it.
    ///
    /// # Errors
    ///
    /// Returns `ContractClosed` if already canceled, or `NoOpenBill` if
    /// no month was ever started.
    pub fn cancel(&mut self) -> Result<Money, ContractError> {
        let start = self.active_start()?;
        let bill = self.bill.as_ref().ok_or(ContractError::NoOpenBill)?;
        let period = bill.period();
        let amount_due = self.plan.settlement(bill);

        self.state = ContractState::Canceled {
            start,
            canceled_in: period,
            amount_due,
        };
        debug!(
            contract_id = %self.id,
            %period,
            amount_due = %amount_due,
            "contract canceled"
        );

        self.events.push(ContractEvent::ContractCanceled {
            contract_id: self.id,
            period,
            amount_due: amount_due.amount(),
            currency: amount_due.currency().to_string(),
            timestamp: Utc::now(),
        });

        Ok(amount_due)
    }

    fn active_start(&self) -> Result<NaiveDate, ContractError> {
        match &self.state {
            ContractState::Active { start } => Ok(*start),
            ContractState::Canceled { .. } => Err(ContractError::ContractClosed),
        }
    }

    /// Returns the contract identifier
    pub fn id(&self) -> ContractId {
        self.id
    }

    /// Returns the phone number this contract covers
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// Returns which of the three plans the line is on
    pub fn plan_kind(&self) -> PlanKind {
        self.plan.kind()
    }

    /// Returns the lifecycle state
    pub fn state(&self) -> &ContractState {
        &self.state
    }

    /// Returns the service start date while the contract is live
    ///
    /// A canceled contract observes `None`; the date it closed from is
    /// still on [`ContractState::Canceled`].
    pub fn start(&self) -> Option<NaiveDate> {
        match &self.state {
            ContractState::Active { start } => Some(*start),
            ContractState::Canceled { .. } => None,
        }
    }

    /// Returns true while the contract accepts operations
    pub fn is_active(&self) -> bool {
        matches!(self.state, ContractState::Active { .. })
    }

    /// Returns the bill for the month in progress
    pub fn current_bill(&self) -> Option<&Bill> {
        self.bill.as_ref()
    }

    /// Returns the carried balance of a prepaid contract
    pub fn prepaid_balance(&self) -> Option<Money> {
        self.plan.balance()
    }

    /// Returns the end date of a term contract
    pub fn term_end(&self) -> Option<NaiveDate> {
        self.plan.end_date()
    }

    /// Takes all pending domain events, leaving the buffer empty
    pub fn take_events(&mut self) -> Vec<ContractEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Currency;
    use rust_decimal_macros::dec;

    fn start_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_month_to_month_opens_with_fee_on_bill() {
        let contract =
            Contract::month_to_month("415-555-0100", start_date(), Tariff::standard()).unwrap();

        assert!(contract.is_active());
        assert_eq!(contract.plan_kind(), PlanKind::MonthToMonth);
        let bill = contract.current_bill().unwrap();
        assert_eq!(bill.cost().amount(), dec!(50.00));
    }

    #[test]
    fn test_term_opens_without_bill() {
        let end = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let contract = Contract::term("415-555-0100", start_date(), end, Tariff::standard()).unwrap();

        assert!(contract.current_bill().is_none());
        assert_eq!(contract.term_end(), Some(end));
    }

    #[test]
    fn test_term_rejects_end_before_start() {
        let end = NaiveDate::from_ymd_opt(2023, 12, 1).unwrap();
        let result = Contract::term("415-555-0100", start_date(), end, Tariff::standard());

        assert!(matches!(result, Err(ContractError::InvalidTerm { .. })));
    }

    #[test]
    fn test_prepaid_rejects_negative_prepayment() {
        let prepayment = Money::new(dec!(-5.00), Currency::USD);
        let result = Contract::prepaid("415-555-0100", start_date(), prepayment, Tariff::standard());

        assert!(matches!(result, Err(ContractError::Validation(_))));
    }

    #[test]
    fn test_cancel_closes_the_contract() {
        let mut contract =
            Contract::month_to_month("415-555-0100", start_date(), Tariff::standard()).unwrap();

        let due = contract.cancel().unwrap();

        assert_eq!(due.amount(), dec!(50.00));
        assert!(!contract.is_active());
        assert_eq!(contract.start(), None);
        assert!(matches!(
            contract.state(),
            ContractState::Canceled { amount_due, .. } if amount_due.amount() == dec!(50.00)
        ));
    }

    #[test]
    fn test_events_drain_once() {
        let mut contract =
            Contract::month_to_month("415-555-0100", start_date(), Tariff::standard()).unwrap();

        let events = contract.take_events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event_type(), "ContractOpened");
        assert_eq!(events[1].event_type(), "MonthStarted");
        assert!(contract.take_events().is_empty());
    }
}
