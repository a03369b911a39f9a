//! Entry classification enums with their on-disk spellings.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Validation errors for core types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Unknown task type string.
    #[error("invalid task type: {value}")]
    InvalidTaskType { value: String },

    /// Unknown entry type string.
    #[error("invalid entry type: {value}")]
    InvalidEntryType { value: String },
}

/// Kind of work recorded by a task entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskType {
    NewDevelopment,
    BugFixing,
}

impl TaskType {
    /// String representation used in the ledger file.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NewDevelopment => "New Development",
            Self::BugFixing => "Bug Fixing",
        }
    }

    /// Parses the optional task type column, where an empty field means none.
    pub fn parse_optional(s: &str) -> Result<Option<Self>, ValidationError> {
        if s.is_empty() {
            Ok(None)
        } else {
            s.parse().map(Some)
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TaskType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "New Development" => Ok(Self::NewDevelopment),
            "Bug Fixing" => Ok(Self::BugFixing),
            _ => Err(ValidationError::InvalidTaskType {
                value: s.to_string(),
            }),
        }
    }
}

/// Whether an entry is logged work or time taken off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryType {
    Task,
    TimeOff,
}

impl EntryType {
    /// String representation used in the ledger file.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Task => "Task",
            Self::TimeOff => "Time Off",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EntryType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Task" => Ok(Self::Task),
            "Time Off" => Ok(Self::TimeOff),
            _ => Err(ValidationError::InvalidEntryType {
                value: s.to_string(),
            }),
        }
    }
}
