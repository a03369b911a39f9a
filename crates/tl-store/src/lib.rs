//! Storage layer for the time ledger.
//!
//! Each month lives in its own plain-text file inside the data directory.
//!
//! # File Format
//!
//! ```text
//! Working Days in Month,22
//! Scheduled PTO Days,2
//! Max Monthly Hours,160
//! Date,Category,Task Description,Task Type,Hours,Entry Type
//! 2025-03-03,Backend,PROJ-12: login page,New Development,4,Task
//! 2025-03-04,,Sick Time,,2,Time Off
//! ```
//!
//! The first three lines are read by position. Data rows are split on `,`
//! with no quoting, so free-text fields may not contain commas; [`LedgerStore::save`]
//! refuses such entries rather than writing a row that would not load back.
//!
//! Every mutation rewrites the whole file. There is no locking, so a ledger
//! must not be written by two processes at once.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use thiserror::Error;
use tl_core::{Entry, EntryType, LedgerHeader, LedgerMonth, MonthlyLedger, TaskType};

const WORK_DAYS_LABEL: &str = "Working Days in Month";
const PTO_DAYS_LABEL: &str = "Scheduled PTO Days";
const MAX_HOURS_LABEL: &str = "Max Monthly Hours";

/// Column header written above the data rows.
pub const COLUMN_HEADER: &str = "Date,Category,Task Description,Task Type,Hours,Entry Type";

/// Prefix identifying the column header line when loading.
const COLUMN_HEADER_PREFIX: &str = "Date,Category";

/// Storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An I/O error while reading or writing a ledger file.
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The ledger file for the month does not exist.
    #[error("no ledger for {month} at {}", path.display())]
    NotFound { month: LedgerMonth, path: PathBuf },
    /// One of the three header lines is missing or not numeric.
    #[error("malformed header line {line}: {content:?}")]
    MalformedHeader { line: usize, content: String },
    /// An entry field would break the row format.
    #[error("{field} may not contain commas or line breaks: {value:?}")]
    InvalidField { field: &'static str, value: String },
}

/// Reads and writes monthly ledger files in a data directory.
#[derive(Debug, Clone)]
pub struct LedgerStore {
    data_dir: PathBuf,
}

impl LedgerStore {
    /// Creates a store rooted at `data_dir`. The directory is created lazily.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Path of the ledger file for `month`.
    pub fn path(&self, month: LedgerMonth) -> PathBuf {
        self.data_dir.join(month.file_name())
    }

    /// Returns true if the ledger file for `month` exists.
    pub fn exists(&self, month: LedgerMonth) -> bool {
        self.path(month).is_file()
    }

    /// Creates the ledger file for `month` with no entries.
    ///
    /// Does nothing if the file already exists. Returns whether it was created.
    pub fn initialize(&self, month: LedgerMonth, header: LedgerHeader) -> Result<bool, StoreError> {
        if self.exists(month) {
            tracing::debug!(%month, "ledger already initialized");
            return Ok(false);
        }
        fs::create_dir_all(&self.data_dir).map_err(|source| StoreError::Io {
            path: self.data_dir.clone(),
            source,
        })?;
        self.write(month, &MonthlyLedger::new(header))?;
        tracing::info!(%month, "initialized ledger");
        Ok(true)
    }

    /// Loads the ledger for `month`.
    ///
    /// Rows that do not have exactly six fields, whose hours are not a
    /// non-negative number, or whose types are unknown are skipped.
    pub fn load(&self, month: LedgerMonth) -> Result<MonthlyLedger, StoreError> {
        let path = self.path(month);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StoreError::NotFound { month, path });
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        let ledger = parse_ledger(&content)?;
        tracing::debug!(%month, entries = ledger.entries.len(), "loaded ledger");
        Ok(ledger)
    }

    /// Overwrites the ledger file for `month` with `ledger`.
    ///
    /// The file must already exist; use [`LedgerStore::initialize`] first.
    pub fn save(&self, month: LedgerMonth, ledger: &MonthlyLedger) -> Result<(), StoreError> {
        if !self.exists(month) {
            return Err(StoreError::NotFound {
                month,
                path: self.path(month),
            });
        }
        self.write(month, ledger)?;
        tracing::debug!(%month, entries = ledger.entries.len(), "saved ledger");
        Ok(())
    }

    fn write(&self, month: LedgerMonth, ledger: &MonthlyLedger) -> Result<(), StoreError> {
        let content = render_ledger(ledger)?;
        let path = self.path(month);
        fs::write(&path, content).map_err(|source| StoreError::Io { path, source })
    }
}

/// Parses the full text of a ledger file.
pub fn parse_ledger(content: &str) -> Result<MonthlyLedger, StoreError> {
    let lines: Vec<&str> = content.lines().collect();

    let header = LedgerHeader {
        work_days_in_month: header_value(&lines, 0)?,
        scheduled_pto_days: header_value(&lines, 1)?,
        max_monthly_hours: header_value(&lines, 2)?,
    };

    let entries = lines
        .iter()
        .skip(3)
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !line.starts_with(COLUMN_HEADER_PREFIX))
        .filter_map(|line| {
            let entry = parse_row(line);
            if entry.is_none() {
                tracing::debug!(row = line, "skipping malformed row");
            }
            entry
        })
        .collect();

    Ok(MonthlyLedger { header, entries })
}

/// Reads the value of the `Label,value` header at position `index`.
fn header_value<T: std::str::FromStr>(lines: &[&str], index: usize) -> Result<T, StoreError> {
    let line = lines.get(index).copied().unwrap_or_default();
    line.split(',')
        .nth(1)
        .and_then(|value| value.trim().parse().ok())
        .ok_or_else(|| StoreError::MalformedHeader {
            line: index + 1,
            content: line.to_string(),
        })
}

fn parse_row(line: &str) -> Option<Entry> {
    let fields: Vec<&str> = line.split(',').collect();
    let &[date, category, task_description, task_type, hours, entry_type] = fields.as_slice() else {
        return None;
    };

    let hours: f64 = hours.trim().parse().ok()?;
    if !hours.is_finite() || hours < 0.0 {
        return None;
    }

    let task_type = TaskType::parse_optional(task_type).ok()?;
    let entry = match entry_type.parse::<EntryType>().ok()? {
        EntryType::Task => Entry {
            date: date.to_string(),
            category: category.to_string(),
            task_description: task_description.to_string(),
            task_type,
            hours,
            entry_type: EntryType::Task,
        },
        // Time off has no category or task type; stray values are dropped
        EntryType::TimeOff => Entry::time_off(date, task_description, hours),
    };
    Some(entry)
}

/// Renders a ledger in file format.
pub fn render_ledger(ledger: &MonthlyLedger) -> Result<String, StoreError> {
    let header = &ledger.header;
    let mut out = format!(
        "{WORK_DAYS_LABEL},{}\n{PTO_DAYS_LABEL},{}\n{MAX_HOURS_LABEL},{}\n{COLUMN_HEADER}\n",
        header.work_days_in_month, header.scheduled_pto_days, header.max_monthly_hours
    );

    for entry in &ledger.entries {
        check_field("date", &entry.date)?;
        check_field("category", &entry.category)?;
        check_field("task description", &entry.task_description)?;
        let task_type = entry.task_type.map_or("", |t| t.as_str());
        out.push_str(&format!(
            "{},{},{},{task_type},{},{}\n",
            entry.date, entry.category, entry.task_description, entry.hours, entry.entry_type
        ));
    }

    Ok(out)
}

fn check_field(field: &'static str, value: &str) -> Result<(), StoreError> {
    if value.contains([',', '\n', '\r']) {
        return Err(StoreError::InvalidField {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}
