//! Contract Administration Domain
//!
//! This crate implements the phone-line contract logic for the billing
//! system, following Domain-Driven Design (DDD) principles.
//!
//! # Architecture
//!
//! The domain layer is infrastructure-agnostic, containing only business logic:
//! - **Aggregates**: Contract is the main aggregate root
//! - **Value Objects**: Plan, Tariff
//! - **Domain Events**: ContractOpened, MonthStarted, CallBilled,
//!   CreditToppedUp, ContractCanceled
//!
//! # Contract Lifecycle
//!
//! ```text
//! Active -> Canceled
//! ```
//!
//! A live contract cycles through months: each one installs a fresh bill
//! (`new_month`), rates that month's calls against it (`bill_call`), and
//! eventually settles on cancellation (`cancel`). The plan decides what
//! each step charges; the bill records it.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_contract::{Contract, Tariff};
//!
//! let mut contract = Contract::month_to_month(
//!     "415-555-0100",
//!     start_date,
//!     Tariff::standard(),
//! )?;
//!
//! contract.new_month(period, Bill::open(period, currency))?;
//! contract.bill_call(&call)?;
//! let amount_due = contract.cancel()?;
//! ```

pub mod contract;
pub mod plan;
pub mod tariff;
pub mod events;
pub mod error;

pub use contract::{Contract, ContractState};
pub use plan::{CallCharge, Plan, TopUp};
pub use tariff::Tariff;
pub use events::ContractEvent;
pub use error::ContractError;
