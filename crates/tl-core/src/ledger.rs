//! Monthly ledgers and the month they belong to.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

use crate::entry::Entry;

/// Errors from in-memory ledger mutations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The index does not name an entry.
    #[error("entry index {index} out of range (ledger has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Calendar month a ledger belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LedgerMonth {
    year: i32,
    month: u32,
}

impl LedgerMonth {
    /// Creates a month, returning `None` if `month` is not in 1..=12.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The month containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Name of the ledger file for this month, e.g. `entries_2025_3.csv`.
    pub fn file_name(&self) -> String {
        format!("entries_{}_{}.csv", self.year, self.month)
    }

    /// The given day of this month, or `None` if the month has no such day.
    pub fn day(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }
}

impl fmt::Display for LedgerMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

/// Per-month metadata stored at the top of the ledger file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LedgerHeader {
    pub work_days_in_month: i64,
    pub scheduled_pto_days: i64,
    pub max_monthly_hours: f64,
}

impl LedgerHeader {
    /// Builds a header whose max hours cover the working days not taken as PTO.
    ///
    /// Returns `None` if the day difference does not fit in an `i64`.
    #[allow(clippy::cast_precision_loss)]
    pub fn from_schedule(
        work_days_in_month: i64,
        scheduled_pto_days: i64,
        hours_per_day: f64,
    ) -> Option<Self> {
        let working_days = work_days_in_month.checked_sub(scheduled_pto_days)?;
        Some(Self {
            work_days_in_month,
            scheduled_pto_days,
            max_monthly_hours: working_days as f64 * hours_per_day,
        })
    }
}

/// One month of tracked entries plus header metadata.
///
/// Entry order is significant: the position of an entry is the index shown
/// to the user and used by edit and delete.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyLedger {
    pub header: LedgerHeader,
    pub entries: Vec<Entry>,
}

impl MonthlyLedger {
    /// Creates a ledger with no entries.
    pub const fn new(header: LedgerHeader) -> Self {
        Self {
            header,
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends an entry at the end.
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Replaces the entry at `index`, returning the old one.
    pub fn replace(&mut self, index: usize, entry: Entry) -> Result<Entry, LedgerError> {
        let len = self.entries.len();
        let slot = self
            .entries
            .get_mut(index)
            .ok_or(LedgerError::IndexOutOfRange { index, len })?;
        Ok(std::mem::replace(slot, entry))
    }

    /// Removes the entry at `index`; later entries shift down by one.
    pub fn remove(&mut self, index: usize) -> Result<Entry, LedgerError> {
        let len = self.entries.len();
        if index >= len {
            return Err(LedgerError::IndexOutOfRange { index, len });
        }
        Ok(self.entries.remove(index))
    }
}
