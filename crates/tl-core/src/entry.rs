//! Ledger entries: logged task work and time off.

use crate::types::{EntryType, TaskType};

/// Separator between the ticket key and the free-text part of a task description.
const DESCRIPTION_SEPARATOR: &str = ": ";

/// A single task or time-off record.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Day the entry applies to, formatted `YYYY-MM-DD`.
    pub date: String,

    /// Work category. Empty for time off.
    pub category: String,

    /// Ticket plus optional description for tasks; free text for time off.
    pub task_description: String,

    /// Kind of work. `None` for time off and for task rows stored without one.
    pub task_type: Option<TaskType>,

    /// Hours spent (tasks) or taken off (time off).
    pub hours: f64,

    pub entry_type: EntryType,
}

impl Entry {
    /// Creates a task entry.
    pub fn task(
        date: impl Into<String>,
        category: impl Into<String>,
        task_description: impl Into<String>,
        task_type: TaskType,
        hours: f64,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            task_description: task_description.into(),
            task_type: Some(task_type),
            hours,
            entry_type: EntryType::Task,
        }
    }

    /// Creates a time-off entry. Category and task type do not apply.
    pub fn time_off(date: impl Into<String>, description: impl Into<String>, hours: f64) -> Self {
        Self {
            date: date.into(),
            category: String::new(),
            task_description: description.into(),
            task_type: None,
            hours,
            entry_type: EntryType::TimeOff,
        }
    }

    pub fn is_task(&self) -> bool {
        self.entry_type == EntryType::Task
    }

    pub fn is_time_off(&self) -> bool {
        self.entry_type == EntryType::TimeOff
    }

    /// The ticket part of a task description (everything before `": "`).
    pub fn ticket(&self) -> &str {
        self.task_description
            .split_once(DESCRIPTION_SEPARATOR)
            .map_or(self.task_description.as_str(), |(ticket, _)| ticket)
    }

    /// The free-text part of a task description, if any.
    pub fn description_text(&self) -> Option<&str> {
        self.task_description
            .split_once(DESCRIPTION_SEPARATOR)
            .map(|(_, text)| text)
            .filter(|text| !text.is_empty())
    }
}

/// Builds the ticket key for a ticket number, e.g. `PROJ-123`.
pub fn ticket_key(project_key: &str, ticket_number: &str) -> String {
    format!("{project_key}-{ticket_number}")
}

/// Joins a ticket with an optional description into a task description.
pub fn task_description(ticket: &str, description: Option<&str>) -> String {
    match description.filter(|d| !d.is_empty()) {
        Some(text) => format!("{ticket}{DESCRIPTION_SEPARATOR}{text}"),
        None => ticket.to_string(),
    }
}
