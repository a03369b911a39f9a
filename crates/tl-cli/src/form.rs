//! Linear prompt forms and the parsers their steps use.
//!
//! A [`Form`] is an ordered list of steps. Each step asks one question and
//! applies the answer to a draft value; the first invalid answer aborts the
//! whole form with an [`InputError`].

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use thiserror::Error;
use tl_core::LedgerMonth;

use crate::prompt::Prompter;
use crate::session::SessionError;

/// Invalid answers to a prompt. The message is shown to the user as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid option selected.")]
    InvalidOption,

    #[error("Invalid input for {field}.")]
    InvalidNumber { field: &'static str },

    #[error("Invalid category selected.")]
    InvalidCategory,

    #[error("No categories configured. Add some to config.json first.")]
    NoCategories,

    #[error("Invalid day. Please enter a number between 1 and 31.")]
    InvalidDay,

    #[error("Invalid day. {month} has no day {day}.")]
    DayOutOfMonth { month: LedgerMonth, day: u32 },

    #[error("Invalid date {value:?}. Use YYYY-MM-DD.")]
    InvalidDate { value: String },

    #[error("Invalid index selected.")]
    InvalidIndex,

    #[error("The {field} may not contain commas.")]
    ContainsComma { field: &'static str },
}

type Question<D> = Box<dyn Fn(&D) -> String>;
type Apply<D> = Box<dyn Fn(&mut D, &str) -> Result<(), InputError>>;

/// One question of a form.
struct Step<D> {
    question: Question<D>,
    apply: Apply<D>,
}

/// An ordered list of questions filling in a draft of type `D`.
pub struct Form<D> {
    steps: Vec<Step<D>>,
    paced: bool,
}

impl<D> Form<D> {
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            paced: false,
        }
    }

    /// Shows the loading spinner before every question.
    #[must_use]
    pub const fn paced(mut self) -> Self {
        self.paced = true;
        self
    }

    /// Adds a step. `question` may show values already in the draft.
    #[must_use]
    pub fn step(
        mut self,
        question: impl Fn(&D) -> String + 'static,
        apply: impl Fn(&mut D, &str) -> Result<(), InputError> + 'static,
    ) -> Self {
        self.steps.push(Step {
            question: Box::new(question),
            apply: Box::new(apply),
        });
        self
    }

    /// Asks every question in order, applying each answer to `draft`.
    pub fn run<R: BufRead, W: Write>(
        &self,
        prompt: &mut Prompter<R, W>,
        draft: &mut D,
    ) -> Result<(), SessionError> {
        for step in &self.steps {
            if self.paced {
                prompt.pause()?;
            }
            let answer = prompt.ask(&(step.question)(&*draft))?;
            (step.apply)(draft, &answer)?;
        }
        Ok(())
    }
}

impl<D> Default for Form<D> {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a non-negative whole number such as a day count.
pub fn parse_count(input: &str, field: &'static str) -> Result<i64, InputError> {
    input
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|count| *count >= 0)
        .ok_or(InputError::InvalidNumber { field })
}

/// Parses an hour amount: any finite, non-negative number.
pub fn parse_hours(input: &str) -> Result<f64, InputError> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|hours| hours.is_finite() && *hours >= 0.0)
        .ok_or(InputError::InvalidNumber { field: "hours" })
}

/// Parses a 1-based menu choice into a 0-based index below `len`.
pub fn parse_choice(input: &str, len: usize) -> Option<usize> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|choice| (1..=len).contains(choice))
        .map(|choice| choice - 1)
}

/// Parses a 0-based entry index below `len`.
pub fn parse_index(input: &str, len: usize) -> Result<usize, InputError> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|index| *index < len)
        .ok_or(InputError::InvalidIndex)
}

/// Parses a day of `month` (1-31, and the day must exist in that month).
pub fn parse_day(input: &str, month: LedgerMonth) -> Result<NaiveDate, InputError> {
    let day: u32 = input
        .trim()
        .parse()
        .ok()
        .filter(|day| (1..=31).contains(day))
        .ok_or(InputError::InvalidDay)?;
    month
        .day(day)
        .ok_or(InputError::DayOutOfMonth { month, day })
}

/// Parses a `YYYY-MM-DD` date, returning it in the same format.
pub fn parse_date(input: &str) -> Result<String, InputError> {
    let value = input.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.format("%Y-%m-%d").to_string())
        .map_err(|_| InputError::InvalidDate {
            value: value.to_string(),
        })
}

/// Rejects free text that would not survive the ledger's row format.
pub fn plain_text(input: &str, field: &'static str) -> Result<String, InputError> {
    if input.contains(',') {
        return Err(InputError::ContainsComma { field });
    }
    Ok(input.trim().to_string())
}
