//! Domain events for the contract aggregate
//!
//! Domain events record the significant occurrences in a contract's
//! billing lifecycle. They are used for:
//! - Audit trails
//! - Event-driven integrations
//! - Triggering downstream processes (statements, dunning)

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{BillingPeriod, CallId, ContractId};
use domain_billing::PlanKind;

/// Domain events emitted by the Contract aggregate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ContractEvent {
    /// A contract has been opened for a phone line
    ContractOpened {
        contract_id: ContractId,
        plan: PlanKind,
        phone_number: String,
        start: NaiveDate,
        timestamp: DateTime<Utc>,
    },

    /// A new billing month has begun and a fresh bill was installed
    MonthStarted {
        contract_id: ContractId,
        period: BillingPeriod,
        timestamp: DateTime<Utc>,
    },

    /// A call has been rated against the current bill
    CallBilled {
        contract_id: ContractId,
        call_id: CallId,
        billed_minutes: u32,
        free_minutes: u32,
        timestamp: DateTime<Utc>,
    },

    /// A prepaid balance ran low and was automatically topped up
    CreditToppedUp {
        contract_id: ContractId,
        amount: Decimal,
        balance: Decimal,
        currency: String,
        timestamp: DateTime<Utc>,
    },

    /// The contract has been canceled and its final bill settled
    ContractCanceled {
        contract_id: ContractId,
        period: BillingPeriod,
        amount_due: Decimal,
        currency: String,
        timestamp: DateTime<Utc>,
    },
}

impl ContractEvent {
    /// Returns the contract ID associated with this event
    pub fn contract_id(&self) -> ContractId {
        match self {
            ContractEvent::ContractOpened { contract_id, .. } => *contract_id,
            ContractEvent::MonthStarted { contract_id, .. } => *contract_id,
            ContractEvent::CallBilled { contract_id, .. } => *contract_id,
            ContractEvent::CreditToppedUp { contract_id, .. } => *contract_id,
            ContractEvent::ContractCanceled { contract_id, .. } => *contract_id,
        }
    }

    /// Returns the timestamp of this event
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            ContractEvent::ContractOpened { timestamp, .. } => *timestamp,
            ContractEvent::MonthStarted { timestamp, .. } => *timestamp,
            ContractEvent::CallBilled { timestamp, .. } => *timestamp,
            ContractEvent::CreditToppedUp { timestamp, .. } => *timestamp,
            ContractEvent::ContractCanceled { timestamp, .. } => *timestamp,
        }
    }

    /// Returns the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            ContractEvent::ContractOpened { .. } => "ContractOpened",
            ContractEvent::MonthStarted { .. } => "MonthStarted",
            ContractEvent::CallBilled { .. } => "CallBilled",
            ContractEvent::CreditToppedUp { .. } => "CreditToppedUp",
            ContractEvent::ContractCanceled { .. } => "ContractCanceled",
        }
    }
}
