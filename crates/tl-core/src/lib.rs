//! Core domain logic for the time ledger.
//!
//! This crate contains the fundamental types and logic for:
//! - Entries: logged task work and time off
//! - Ledgers: one month of entries plus its working-hours header
//! - Summary: time-off adjusted working hours and per-category totals

pub mod entry;
pub mod ledger;
pub mod summary;
pub mod types;

pub use entry::{Entry, task_description, ticket_key};
pub use ledger::{LedgerError, LedgerHeader, LedgerMonth, MonthlyLedger};
pub use summary::{CategoryTotal, Summary};
pub use types::{EntryType, TaskType, ValidationError};

/// Default number of working hours in one day.
pub const HOURS_IN_A_DAY: f64 = 8.0;
