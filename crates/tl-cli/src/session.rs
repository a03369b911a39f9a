//! The interactive menu as an explicit state machine.
//!
//! [`Session`] holds everything a step needs (config, store, prompter) and
//! [`Session::run`] advances one [`State`] at a time until [`State::Quit`].
//! Each state either returns the next state or an error; invalid answers and
//! store failures are reported and send the user back to a safe state, while
//! end of input quits.

use std::io::{self, BufRead, Write};
use std::str::FromStr;
use std::time::Duration;

use chrono::NaiveDate;
use thiserror::Error;
use tl_core::{Entry, EntryType, LedgerHeader, LedgerMonth, MonthlyLedger, Summary, TaskType};
use tl_store::{LedgerStore, StoreError};

use crate::Config;
use crate::form::{self, Form, InputError};
use crate::prompt::{Prompter, Spinner};
use crate::report;

const MENU_PROMPT: &str = "Please select an option:\n\
    1: New Entry Today\n\
    2: New Entry on Date\n\
    3: View Data\n\
    4: Add Time Off\n\
    5: Edit an Entry\n\
    6: Delete an Entry\n\
    7: Quit\n\
    Enter your choice (1-7):";

const TASK_TYPE_PROMPT: &str =
    "Was this new development or bug fixing?\n1: New Development\n2: Bug Fixing";

const FAREWELL: &str = "Have a nice day!";

/// Errors that interrupt a session step.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The user gave an answer that cannot be used.
    #[error(transparent)]
    Input(#[from] InputError),
    /// Reading or writing the ledger failed.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// Input was closed.
    #[error("end of input")]
    EndOfInput,
    /// The terminal could not be read or written.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Where the session is in the menu flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Set up the month's ledger if it does not exist yet.
    Start,
    Menu,
    /// Ask for the day, then record a task on it.
    PickDate,
    /// Record a task on `date`.
    NewEntry { date: NaiveDate },
    View,
    AddTimeOff,
    Edit,
    Delete,
    /// Ask whether to return to the menu.
    AskAnother,
    Quit,
}

impl State {
    /// State to resume from when this one is aborted by an invalid answer.
    const fn on_invalid_input(self) -> Self {
        match self {
            Self::Start => Self::Start,
            Self::NewEntry { .. } => Self::AskAnother,
            _ => Self::Menu,
        }
    }
}

/// A numbered main-menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    NewEntryToday,
    NewEntryOnDate,
    ViewData,
    AddTimeOff,
    EditEntry,
    DeleteEntry,
    Quit,
}

impl FromStr for MenuOption {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::NewEntryToday),
            "2" => Ok(Self::NewEntryOnDate),
            "3" => Ok(Self::ViewData),
            "4" => Ok(Self::AddTimeOff),
            "5" => Ok(Self::EditEntry),
            "6" => Ok(Self::DeleteEntry),
            "7" => Ok(Self::Quit),
            _ => Err(InputError::InvalidOption),
        }
    }
}

/// Answers collected by the monthly setup form.
#[derive(Debug, Default)]
struct SetupDraft {
    work_days: i64,
    scheduled_pto_days: i64,
}

/// Answers collected by the task forms.
#[derive(Debug, Clone)]
struct TaskDraft {
    date: String,
    category: String,
    ticket: String,
    description: Option<String>,
    hours: f64,
    task_type: Option<TaskType>,
}

impl TaskDraft {
    fn new(date: NaiveDate) -> Self {
        Self {
            date: date.format("%Y-%m-%d").to_string(),
            category: String::new(),
            ticket: String::new(),
            description: None,
            hours: 0.0,
            task_type: None,
        }
    }

    fn from_entry(entry: &Entry) -> Self {
        Self {
            date: entry.date.clone(),
            category: entry.category.clone(),
            ticket: entry.ticket().to_string(),
            description: entry.description_text().map(ToString::to_string),
            hours: entry.hours,
            task_type: entry.task_type,
        }
    }

    fn into_entry(self) -> Entry {
        Entry {
            task_description: tl_core::task_description(&self.ticket, self.description.as_deref()),
            date: self.date,
            category: self.category,
            task_type: self.task_type,
            hours: self.hours,
            entry_type: EntryType::Task,
        }
    }
}

/// Answers collected by the time-off forms.
#[derive(Debug, Clone, Default)]
struct TimeOffDraft {
    date: String,
    description: String,
    hours: f64,
}

impl TimeOffDraft {
    fn from_entry(entry: &Entry) -> Self {
        Self {
            date: entry.date.clone(),
            description: entry.task_description.clone(),
            hours: entry.hours,
        }
    }

    fn into_entry(self) -> Entry {
        Entry::time_off(self.date, self.description, self.hours)
    }
}

/// An interactive session over one month's ledger.
pub struct Session<R, W> {
    config: Config,
    store: LedgerStore,
    month: LedgerMonth,
    today: NaiveDate,
    prompt: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session for the month containing `today`.
    pub fn new(config: Config, today: NaiveDate, input: R, output: W) -> Self {
        let store = LedgerStore::new(config.data_dir.clone());
        let spinner = Spinner::new(Duration::from_millis(config.spinner_ms));
        Self {
            config,
            store,
            month: LedgerMonth::from_date(today),
            today,
            prompt: Prompter::new(input, output, spinner),
        }
    }

    /// Runs the menu until the user quits or input ends.
    pub fn run(&mut self) -> Result<(), SessionError> {
        let mut state = State::Start;
        while state != State::Quit {
            state = self.step(state)?;
        }
        Ok(())
    }

    /// Advances the session by one state.
    ///
    /// Only terminal I/O failures are returned as errors; everything else is
    /// reported to the user and turned into the next state.
    pub fn step(&mut self, state: State) -> Result<State, SessionError> {
        tracing::debug!(?state, "session step");
        let result = match state {
            State::Start => self.setup(),
            State::Menu => self.menu(),
            State::PickDate => self.pick_date(),
            State::NewEntry { date } => self.new_entry(date),
            State::View => self.view(),
            State::AddTimeOff => self.add_time_off(),
            State::Edit => self.edit(),
            State::Delete => self.delete(),
            State::AskAnother => self.ask_another(),
            State::Quit => Ok(State::Quit),
        };

        match result {
            Ok(next) => Ok(next),
            Err(SessionError::Input(e)) => {
                self.prompt.say(e.to_string())?;
                Ok(state.on_invalid_input())
            }
            Err(SessionError::Store(e)) => {
                tracing::warn!(error = %e, "ledger operation failed");
                self.prompt.say(format!("Error: {e}"))?;
                Ok(State::Menu)
            }
            Err(SessionError::EndOfInput) => {
                tracing::debug!("input closed");
                Ok(State::Quit)
            }
            Err(e @ SessionError::Io(_)) => Err(e),
        }
    }

    /// Consumes the session, returning the output writer.
    pub fn into_output(self) -> W {
        self.prompt.into_output()
    }

    // ========== States ==========

    fn setup(&mut self) -> Result<State, SessionError> {
        if self.store.exists(self.month) {
            return Ok(State::Menu);
        }

        self.prompt
            .say("Monthly setup: Please enter the following information.")?;
        let mut draft = SetupDraft::default();
        Form::new()
            .step(
                |_| "Enter the number of working days in the month:".to_string(),
                |draft: &mut SetupDraft, answer| {
                    draft.work_days = form::parse_count(answer, "working days")?;
                    Ok(())
                },
            )
            .step(
                |_| "Enter the number of scheduled PTO days this month:".to_string(),
                |draft: &mut SetupDraft, answer| {
                    draft.scheduled_pto_days = form::parse_count(answer, "scheduled PTO days")?;
                    Ok(())
                },
            )
            .run(&mut self.prompt, &mut draft)?;

        let header = LedgerHeader::from_schedule(
            draft.work_days,
            draft.scheduled_pto_days,
            self.config.hours_per_day,
        )
        .ok_or(InputError::InvalidNumber {
            field: "scheduled PTO days",
        })?;
        self.prompt.say(format!(
            "Max monthly hours calculated as {} hours.",
            report::format_hours(header.max_monthly_hours)
        ))?;
        self.store.initialize(self.month, header)?;
        Ok(State::Menu)
    }

    fn menu(&mut self) -> Result<State, SessionError> {
        self.prompt.separator()?;
        let option: MenuOption = self.prompt.ask(MENU_PROMPT)?.parse()?;
        tracing::debug!(?option, "menu option selected");

        Ok(match option {
            MenuOption::NewEntryToday => State::NewEntry { date: self.today },
            MenuOption::NewEntryOnDate => State::PickDate,
            MenuOption::ViewData => State::View,
            MenuOption::AddTimeOff => State::AddTimeOff,
            MenuOption::EditEntry => State::Edit,
            MenuOption::DeleteEntry => State::Delete,
            MenuOption::Quit => {
                self.prompt.say(FAREWELL)?;
                State::Quit
            }
        })
    }

    fn pick_date(&mut self) -> Result<State, SessionError> {
        self.prompt.pause()?;
        let answer = self.prompt.ask("Enter the day of the month (1-31):")?;
        let date = form::parse_day(&answer, self.month)?;
        Ok(State::NewEntry { date })
    }

    fn new_entry(&mut self, date: NaiveDate) -> Result<State, SessionError> {
        if self.config.categories.is_empty() {
            return Err(InputError::NoCategories.into());
        }

        let mut draft = TaskDraft::new(date);
        self.new_task_form().run(&mut self.prompt, &mut draft)?;

        let mut ledger = self.load()?;
        ledger.push(draft.into_entry());
        self.save_and_show(&ledger, "Entry saved!")
    }

    fn view(&mut self) -> Result<State, SessionError> {
        self.show_data()?;
        Ok(State::Menu)
    }

    fn add_time_off(&mut self) -> Result<State, SessionError> {
        let month = self.month;
        let mut draft = TimeOffDraft::default();
        Form::new()
            .paced()
            .step(
                |_| "Enter the day of the time off (1-31):".to_string(),
                move |draft: &mut TimeOffDraft, answer| {
                    draft.date = form::parse_day(answer, month)?
                        .format("%Y-%m-%d")
                        .to_string();
                    Ok(())
                },
            )
            .step(
                |_| {
                    "Enter a description for the time off (e.g., Sick Time, Unscheduled PTO):"
                        .to_string()
                },
                |draft: &mut TimeOffDraft, answer| {
                    draft.description = form::plain_text(answer, "description")?;
                    Ok(())
                },
            )
            .step(
                |_| "Enter the number of hours to subtract:".to_string(),
                |draft: &mut TimeOffDraft, answer| {
                    draft.hours = form::parse_hours(answer)?;
                    Ok(())
                },
            )
            .run(&mut self.prompt, &mut draft)?;

        let mut ledger = self.load()?;
        ledger.push(draft.into_entry());
        self.save_and_show(&ledger, "Entry saved!")
    }

    fn edit(&mut self) -> Result<State, SessionError> {
        self.prompt.pause()?;
        let Some(mut ledger) = self.show_data()?.filter(|l| !l.is_empty()) else {
            self.prompt.say("No entries available to edit.")?;
            return Ok(State::Menu);
        };

        let answer = self
            .prompt
            .ask("Enter the index number of the entry you want to edit:")?;
        let index = form::parse_index(&answer, ledger.len())?;
        let entry = ledger.entries[index].clone();

        self.prompt.say("\n--- Editing Entry ---\n")?;
        self.prompt.say(report::format_entry_details(&entry))?;

        let updated = if entry.is_task() {
            let mut draft = TaskDraft::from_entry(&entry);
            self.edit_task_form().run(&mut self.prompt, &mut draft)?;
            draft.into_entry()
        } else {
            let mut draft = TimeOffDraft::from_entry(&entry);
            edit_time_off_form().run(&mut self.prompt, &mut draft)?;
            draft.into_entry()
        };

        ledger.replace(index, updated).map_err(|_| InputError::InvalidIndex)?;
        self.save_and_show(&ledger, "Entry updated!")
    }

    fn delete(&mut self) -> Result<State, SessionError> {
        self.prompt.pause()?;
        let Some(mut ledger) = self.show_data()?.filter(|l| !l.is_empty()) else {
            self.prompt.say("No entries available to delete.")?;
            return Ok(State::Menu);
        };

        let answer = self
            .prompt
            .ask("Enter the index number of the entry you want to delete:")?;
        let index = form::parse_index(&answer, ledger.len())?;

        self.prompt.say("\n--- Entry to Delete ---\n")?;
        self.prompt
            .say(report::format_entry_details(&ledger.entries[index]))?;

        let confirmation = self
            .prompt
            .ask("Are you sure you want to delete this entry? Enter 'yes' to confirm:")?;
        if !confirmation.eq_ignore_ascii_case("yes") {
            self.prompt.say("Deletion cancelled.")?;
            return Ok(State::Menu);
        }

        let removed = ledger.remove(index).map_err(|_| InputError::InvalidIndex)?;
        tracing::debug!(index, date = %removed.date, "deleted entry");
        self.save_and_show(&ledger, "Entry deleted!")
    }

    fn ask_another(&mut self) -> Result<State, SessionError> {
        self.prompt.pause()?;
        let answer = self
            .prompt
            .ask("Do you want to perform another action? Enter 1 for yes, 2 for no:")?;
        if answer == "1" {
            Ok(State::Menu)
        } else {
            self.prompt.say(FAREWELL)?;
            Ok(State::Quit)
        }
    }

    // ========== Forms ==========

    fn category_menu(&self) -> String {
        self.config
            .categories
            .iter()
            .enumerate()
            .map(|(i, category)| format!("{}: {category}\n", i + 1))
            .collect()
    }

    fn new_task_form(&self) -> Form<TaskDraft> {
        let categories = self.config.categories.clone();
        let category_prompt = format!(
            "Select a category:\n{}Please enter your choice (1-{}):",
            self.category_menu(),
            categories.len()
        );
        let project_key = self.config.project_key.clone();

        Form::new()
            .paced()
            .step(
                move |_| category_prompt.clone(),
                move |draft: &mut TaskDraft, answer| {
                    let index = form::parse_choice(answer, categories.len())
                        .ok_or(InputError::InvalidCategory)?;
                    draft.category.clone_from(&categories[index]);
                    Ok(())
                },
            )
            .step(
                |_| "Enter the Jira ticket number:".to_string(),
                move |draft: &mut TaskDraft, answer| {
                    let number = form::plain_text(answer, "ticket number")?;
                    draft.ticket = tl_core::ticket_key(&project_key, &number);
                    Ok(())
                },
            )
            .step(
                |_| "Enter a description of the task you worked on (optional):".to_string(),
                |draft: &mut TaskDraft, answer| {
                    let text = form::plain_text(answer, "description")?;
                    draft.description = Some(text).filter(|t| !t.is_empty());
                    Ok(())
                },
            )
            .step(
                |_| "Enter the number of hours worked on this ticket:".to_string(),
                |draft: &mut TaskDraft, answer| {
                    draft.hours = form::parse_hours(answer)?;
                    Ok(())
                },
            )
            .step(
                |_| format!("{TASK_TYPE_PROMPT}\nPlease enter your choice (1 or 2):"),
                |draft: &mut TaskDraft, answer| {
                    draft.task_type = Some(if answer == "1" {
                        TaskType::NewDevelopment
                    } else {
                        TaskType::BugFixing
                    });
                    Ok(())
                },
            )
    }

    fn edit_task_form(&self) -> Form<TaskDraft> {
        let categories = self.config.categories.clone();
        let category_menu = self.category_menu();
        let project_key = self.config.project_key.clone();

        Form::new()
            .step(
                |draft: &TaskDraft| {
                    format!(
                        "Enter new date (YYYY-MM-DD) or press Enter to keep [{}]:",
                        draft.date
                    )
                },
                |draft: &mut TaskDraft, answer| {
                    if !answer.is_empty() {
                        draft.date = form::parse_date(answer)?;
                    }
                    Ok(())
                },
            )
            .step(
                move |draft: &TaskDraft| {
                    format!(
                        "Select a category or press Enter to keep [{}]:\n{category_menu}\
                         Please enter your choice (1-{}) or press Enter to keep:",
                        draft.category,
                        category_menu.lines().count()
                    )
                },
                move |draft: &mut TaskDraft, answer| {
                    if !answer.is_empty() {
                        let index = form::parse_choice(answer, categories.len())
                            .ok_or(InputError::InvalidCategory)?;
                        draft.category.clone_from(&categories[index]);
                    }
                    Ok(())
                },
            )
            .step(
                |draft: &TaskDraft| {
                    format!(
                        "Enter the Jira ticket number or press Enter to keep [{}]:",
                        draft.ticket
                    )
                },
                move |draft: &mut TaskDraft, answer| {
                    if !answer.is_empty() {
                        let number = form::plain_text(answer, "ticket number")?;
                        draft.ticket = tl_core::ticket_key(&project_key, &number);
                    }
                    Ok(())
                },
            )
            .step(
                |draft: &TaskDraft| {
                    format!(
                        "Enter a description of the task or press Enter to keep [{}]:",
                        draft.description.as_deref().unwrap_or_default()
                    )
                },
                |draft: &mut TaskDraft, answer| {
                    if !answer.is_empty() {
                        draft.description = Some(form::plain_text(answer, "description")?);
                    }
                    Ok(())
                },
            )
            .step(
                |draft: &TaskDraft| {
                    format!(
                        "Enter the number of hours worked or press Enter to keep [{}]:",
                        report::format_hours(draft.hours)
                    )
                },
                |draft: &mut TaskDraft, answer| {
                    if !answer.is_empty() {
                        draft.hours = form::parse_hours(answer)?;
                    }
                    Ok(())
                },
            )
            .step(
                |draft: &TaskDraft| {
                    format!(
                        "{TASK_TYPE_PROMPT}\nPress Enter to keep [{}]:",
                        draft.task_type.map_or("-", |t| t.as_str())
                    )
                },
                |draft: &mut TaskDraft, answer| {
                    match answer {
                        "1" => draft.task_type = Some(TaskType::NewDevelopment),
                        "2" => draft.task_type = Some(TaskType::BugFixing),
                        _ => {}
                    }
                    Ok(())
                },
            )
    }

    // ========== Ledger Access ==========

    fn load(&self) -> Result<MonthlyLedger, StoreError> {
        self.store.load(self.month)
    }

    /// Prints the summary and entry tables.
    ///
    /// Returns `None` if the month has no ledger yet.
    fn show_data(&mut self) -> Result<Option<MonthlyLedger>, SessionError> {
        let ledger = match self.load() {
            Ok(ledger) => ledger,
            Err(StoreError::NotFound { .. }) => {
                self.prompt.say("No data available for the current month.")?;
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let summary = Summary::compute(
            &ledger,
            &self.config.categories,
            self.config.hours_per_day,
        );
        self.prompt.print(report::format_summary(&summary))?;
        self.prompt.print(report::format_entries(&ledger))?;
        Ok(Some(ledger))
    }

    fn save_and_show(&mut self, ledger: &MonthlyLedger, message: &str) -> Result<State, SessionError> {
        self.store.save(self.month, ledger)?;
        self.prompt.say(message)?;
        self.show_data()?;
        Ok(State::AskAnother)
    }
}

fn edit_time_off_form() -> Form<TimeOffDraft> {
    Form::new()
        .step(
            |draft: &TimeOffDraft| {
                format!(
                    "Enter new date (YYYY-MM-DD) or press Enter to keep [{}]:",
                    draft.date
                )
            },
            |draft: &mut TimeOffDraft, answer| {
                if !answer.is_empty() {
                    draft.date = form::parse_date(answer)?;
                }
                Ok(())
            },
        )
        .step(
            |draft: &TimeOffDraft| {
                format!(
                    "Enter a description or press Enter to keep [{}]:",
                    draft.description
                )
            },
            |draft: &mut TimeOffDraft, answer| {
                if !answer.is_empty() {
                    draft.description = form::plain_text(answer, "description")?;
                }
                Ok(())
            },
        )
        .step(
            |draft: &TimeOffDraft| {
                format!(
                    "Enter the number of hours or press Enter to keep [{}]:",
                    report::format_hours(draft.hours)
                )
            },
            |draft: &mut TimeOffDraft, answer| {
                if !answer.is_empty() {
                    draft.hours = form::parse_hours(answer)?;
                }
                Ok(())
            },
        )
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn config(data_dir: &Path) -> Config {
        Config {
            categories: vec!["Backend".to_string(), "Frontend".to_string()],
            project_key: "PROJ".to_string(),
            data_dir: data_dir.to_path_buf(),
            hours_per_day: 8.0,
            spinner_ms: 0,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    fn month() -> LedgerMonth {
        LedgerMonth::from_date(today())
    }

    fn header() -> LedgerHeader {
        LedgerHeader::from_schedule(22, 2, 8.0).unwrap()
    }

    /// Creates the month's ledger with `entries`.
    fn seed(data_dir: &Path, entries: Vec<Entry>) {
        let store = LedgerStore::new(data_dir);
        store.initialize(month(), header()).unwrap();
        store
            .save(month(), &MonthlyLedger { header: header(), entries })
            .unwrap();
    }

    fn run_session(data_dir: &Path, input: &str) -> String {
        let mut session = Session::new(config(data_dir), today(), input.as_bytes(), Vec::new());
        session.run().unwrap();
        String::from_utf8(session.into_output()).unwrap()
    }

    fn entries(data_dir: &Path) -> Vec<Entry> {
        LedgerStore::new(data_dir).load(month()).unwrap().entries
    }

    fn sample_task() -> Entry {
        Entry::task("2025-03-03", "Backend", "PROJ-1: api", TaskType::NewDevelopment, 4.0)
    }

    #[test]
    fn setup_creates_ledger_then_quits() {
        let dir = tempfile::tempdir().unwrap();

        let output = run_session(dir.path(), "22\n2\n7\n");

        assert!(output.contains("Monthly setup: Please enter the following information."));
        assert!(output.contains("Max monthly hours calculated as 160 hours."));
        assert!(output.ends_with("Have a nice day!\n"));
        let ledger = LedgerStore::new(dir.path()).load(month()).unwrap();
        assert_eq!(ledger.header, header());
        assert!(ledger.is_empty());
    }

    #[test]
    fn invalid_setup_answer_asks_again() {
        let dir = tempfile::tempdir().unwrap();

        let output = run_session(dir.path(), "many\n20\n0\n7\n");

        assert!(output.contains("Invalid input for working days."));
        assert_eq!(output.matches("Monthly setup").count(), 2);
        let ledger = LedgerStore::new(dir.path()).load(month()).unwrap();
        assert!((ledger.header.max_monthly_hours - 160.0).abs() < f64::EPSILON);
    }

    #[test]
    fn negative_or_overflowing_day_counts_ask_again() {
        let dir = tempfile::tempdir().unwrap();

        let output = run_session(dir.path(), "9223372036854775807\n-1\n-3\n20\n0\n7\n");

        assert!(output.contains("Invalid input for scheduled PTO days."));
        assert!(output.contains("Invalid input for working days."));
        assert_eq!(output.matches("Monthly setup").count(), 3);
        let ledger = LedgerStore::new(dir.path()).load(month()).unwrap();
        assert_eq!(ledger.header.work_days_in_month, 20);
        assert!((ledger.header.max_monthly_hours - 160.0).abs() < f64::EPSILON);
    }

    #[test]
    fn end_of_input_during_setup_quits_without_ledger() {
        let dir = tempfile::tempdir().unwrap();

        run_session(dir.path(), "22\n");

        assert!(!LedgerStore::new(dir.path()).exists(month()));
    }

    #[test]
    fn new_entry_today_is_saved() {
        let dir = tempfile::tempdir().unwrap();
        seed(dir.path(), vec![]);

        let output = run_session(dir.path(), "1\n1\n123\nlogin page\n4\n1\n2\n");

        assert!(output.contains("Entry saved!"));
        assert!(output.contains("Total Task Hours: 4"));
        assert_eq!(
            entries(dir.path()),
            vec![Entry::task(
                "2025-03-14",
                "Backend",
                "PROJ-123: login page",
                TaskType::NewDevelopment,
                4.0
            )]
        );
    }

    #[test]
    fn new_entry_on_date_without_description() {
        let dir = tempfile::tempdir().unwrap();
        seed(dir.path(), vec![]);

        run_session(dir.path(), "2\n5\n2\n77\n\n1.5\n2\n2\n");

        assert_eq!(
            entries(dir.path()),
            vec![Entry::task("2025-03-05", "Frontend", "PROJ-77", TaskType::BugFixing, 1.5)]
        );
    }

    #[test]
    fn invalid_day_returns_to_menu() {
        let dir = tempfile::tempdir().unwrap();
        seed(dir.path(), vec![]);

        let output = run_session(dir.path(), "2\n32\n7\n");

        assert!(output.contains("Invalid day. Please enter a number between 1 and 31."));
        assert_eq!(output.matches("Please select an option:").count(), 2);
        assert!(entries(dir.path()).is_empty());
    }

    #[test]
    fn invalid_hours_abort_new_entry() {
        let dir = tempfile::tempdir().unwrap();
        seed(dir.path(), vec![]);

        let output = run_session(dir.path(), "1\n1\n123\n\nsome\n2\n");

        assert!(output.contains("Invalid input for hours."));
        assert!(output.contains("Do you want to perform another action?"));
        assert!(entries(dir.path()).is_empty());
    }

    #[test]
    fn new_entry_without_categories_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        seed(dir.path(), vec![]);
        let mut config = config(dir.path());
        config.categories.clear();

        let mut session = Session::new(config, today(), "1\n2\n".as_bytes(), Vec::new());
        session.run().unwrap();
        let output = String::from_utf8(session.into_output()).unwrap();

        assert!(output.contains("No categories configured."));
        assert!(entries(dir.path()).is_empty());
    }

    #[test]
    fn add_time_off() {
        let dir = tempfile::tempdir().unwrap();
        seed(dir.path(), vec![sample_task()]);

        let output = run_session(dir.path(), "4\n4\nSick Time\n2\n2\n");

        assert!(output.contains("Actual Working Hours: 158"));
        assert_eq!(
            entries(dir.path()),
            vec![sample_task(), Entry::time_off("2025-03-04", "Sick Time", 2.0)]
        );
    }

    #[test]
    fn comma_in_time_off_description_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        seed(dir.path(), vec![]);

        let output = run_session(dir.path(), "4\n4\nSick, flu\n7\n");

        assert!(output.contains("The description may not contain commas."));
        assert!(entries(dir.path()).is_empty());
    }

    #[test]
    fn view_prints_summary_and_entries() {
        let dir = tempfile::tempdir().unwrap();
        seed(dir.path(), vec![sample_task()]);

        let output = run_session(dir.path(), "3\n7\n");

        assert!(output.contains("--- Summary ---"));
        assert!(output.contains("Frontend Bug Fixing"));
        assert!(output.contains("--- All Entries ---"));
        assert!(output.contains("PROJ-1: api"));
    }

    #[test]
    fn edit_task_keeps_blank_answers() {
        let dir = tempfile::tempdir().unwrap();
        seed(dir.path(), vec![sample_task()]);

        let output = run_session(dir.path(), "5\n0\n\n\n\n\n6\n2\n2\n");

        assert!(output.contains("--- Editing Entry ---"));
        assert!(output.contains("Entry updated!"));
        assert_eq!(
            entries(dir.path()),
            vec![Entry::task("2025-03-03", "Backend", "PROJ-1: api", TaskType::BugFixing, 6.0)]
        );
    }

    #[test]
    fn edit_keeps_missing_task_type_on_blank_answers() {
        let dir = tempfile::tempdir().unwrap();
        let untyped = Entry {
            task_type: None,
            ..Entry::task("2025-03-03", "A", "P-1", TaskType::BugFixing, 4.0)
        };
        seed(dir.path(), vec![untyped.clone()]);

        let output = run_session(dir.path(), "5\n0\n\n\n\n\n\n\n2\n");

        assert!(output.contains("Press Enter to keep [-]:"));
        assert_eq!(entries(dir.path()), vec![untyped]);
        let content = std::fs::read_to_string(dir.path().join(month().file_name())).unwrap();
        assert!(content.ends_with("2025-03-03,A,P-1,,4,Task\n"));
    }

    #[test]
    fn edit_task_replaces_every_field() {
        let dir = tempfile::tempdir().unwrap();
        seed(dir.path(), vec![sample_task()]);

        run_session(dir.path(), "5\n0\n2025-03-10\n2\n9\nreview\n3\n\n2\n");

        assert_eq!(
            entries(dir.path()),
            vec![Entry::task(
                "2025-03-10",
                "Frontend",
                "PROJ-9: review",
                TaskType::NewDevelopment,
                3.0
            )]
        );
    }

    #[test]
    fn edit_time_off() {
        let dir = tempfile::tempdir().unwrap();
        seed(dir.path(), vec![sample_task(), Entry::time_off("2025-03-04", "Sick Time", 2.0)]);

        run_session(dir.path(), "5\n1\n\nUnscheduled PTO\n8\n2\n");

        assert_eq!(
            entries(dir.path())[1],
            Entry::time_off("2025-03-04", "Unscheduled PTO", 8.0)
        );
    }

    #[test]
    fn edit_with_out_of_range_index_returns_to_menu() {
        let dir = tempfile::tempdir().unwrap();
        seed(dir.path(), vec![sample_task()]);

        let output = run_session(dir.path(), "5\n3\n7\n");

        assert!(output.contains("Invalid index selected."));
        assert_eq!(entries(dir.path()), vec![sample_task()]);
    }

    #[test]
    fn edit_empty_ledger() {
        let dir = tempfile::tempdir().unwrap();
        seed(dir.path(), vec![]);

        let output = run_session(dir.path(), "5\n7\n");

        assert!(output.contains("No entries available to edit."));
    }

    #[test]
    fn delete_first_entry_after_confirmation() {
        let dir = tempfile::tempdir().unwrap();
        let time_off = Entry::time_off("2025-03-04", "Sick Time", 2.0);
        seed(dir.path(), vec![sample_task(), time_off.clone()]);

        let output = run_session(dir.path(), "6\n0\nYES\n2\n");

        assert!(output.contains("--- Entry to Delete ---"));
        assert!(output.contains("Entry deleted!"));
        assert_eq!(entries(dir.path()), vec![time_off]);
    }

    #[test]
    fn delete_cancelled_without_yes() {
        let dir = tempfile::tempdir().unwrap();
        seed(dir.path(), vec![sample_task()]);

        let output = run_session(dir.path(), "6\n0\ny\n7\n");

        assert!(output.contains("Deletion cancelled."));
        assert_eq!(entries(dir.path()), vec![sample_task()]);
    }

    #[test]
    fn invalid_menu_option_shows_menu_again() {
        let dir = tempfile::tempdir().unwrap();
        seed(dir.path(), vec![]);

        let output = run_session(dir.path(), "9\n7\n");

        assert!(output.contains("Invalid option selected."));
        assert_eq!(output.matches("Please select an option:").count(), 2);
    }

    #[test]
    fn another_action_returns_to_menu() {
        let dir = tempfile::tempdir().unwrap();
        seed(dir.path(), vec![]);

        let output = run_session(dir.path(), "4\n1\nPTO\n8\n1\n7\n");

        assert_eq!(output.matches("Please select an option:").count(), 2);
        assert_eq!(entries(dir.path()).len(), 1);
    }

    #[test]
    fn malformed_header_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(month().file_name()),
            "Working Days in Month,many\nScheduled PTO Days,2\nMax Monthly Hours,160\n",
        )
        .unwrap();

        let output = run_session(dir.path(), "3\n7\n");

        assert!(output.contains("Error: malformed header line 1"));
    }

    #[test]
    fn menu_options_parse() {
        assert_eq!("1".parse::<MenuOption>(), Ok(MenuOption::NewEntryToday));
        assert_eq!("7".parse::<MenuOption>(), Ok(MenuOption::Quit));
        assert_eq!("8".parse::<MenuOption>(), Err(InputError::InvalidOption));
    }

    #[test]
    fn quit_state_is_terminal() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::new(config(dir.path()), today(), "".as_bytes(), Vec::new());
        assert_eq!(session.step(State::Quit).unwrap(), State::Quit);
    }
}
