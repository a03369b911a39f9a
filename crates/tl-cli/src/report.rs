//! Rendering of the monthly summary and the entry listing.

use std::fmt::Write;

use tl_core::{Entry, MonthlyLedger, Summary};

// ========== Number Formatting ==========

/// Formats hours in their shortest form: `4`, `2.5`.
pub fn format_hours(hours: f64) -> String {
    hours.to_string()
}

/// Formats a percentage with two decimals: `2.53%`.
pub fn format_percentage(percentage: f64) -> String {
    format!("{percentage:.2}%")
}

// ========== Tables ==========

/// Column alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

/// A plain-text table sized to its widest cells.
struct Table {
    headers: Vec<&'static str>,
    aligns: Vec<Align>,
    rows: Vec<Vec<String>>,
}

impl Table {
    fn new(columns: &[(&'static str, Align)]) -> Self {
        Self {
            headers: columns.iter().map(|(title, _)| *title).collect(),
            aligns: columns.iter().map(|(_, align)| *align).collect(),
            rows: Vec::new(),
        }
    }

    fn row(&mut self, cells: Vec<String>) {
        debug_assert_eq!(cells.len(), self.headers.len());
        self.rows.push(cells);
    }

    fn render(&self) -> String {
        let widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut output = String::new();
        let headers: Vec<String> = self.headers.iter().map(ToString::to_string).collect();
        self.write_line(&mut output, &headers, &widths);
        let rules: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
        self.write_line(&mut output, &rules, &widths);
        for row in &self.rows {
            self.write_line(&mut output, row, &widths);
        }
        output
    }

    fn write_line(&self, output: &mut String, cells: &[String], widths: &[usize]) {
        let line: Vec<String> = cells
            .iter()
            .zip(widths)
            .zip(&self.aligns)
            .map(|((cell, width), align)| {
                // Pad by characters, not bytes, so the rule glyphs line up
                let pad = " ".repeat(width.saturating_sub(cell.chars().count()));
                match align {
                    Align::Left => format!("{cell}{pad}"),
                    Align::Right => format!("{pad}{cell}"),
                }
            })
            .collect();
        writeln!(output, "{}", line.join("  ").trim_end()).unwrap();
    }
}

// ========== Reports ==========

/// Formats the hour totals and the category/type summary table.
pub fn format_summary(summary: &Summary) -> String {
    let mut output = String::new();

    writeln!(output).unwrap();
    writeln!(output, "Max Monthly Hours: {}", format_hours(summary.max_monthly_hours)).unwrap();
    writeln!(output, "Scheduled PTO Hours: {}", format_hours(summary.scheduled_pto_hours)).unwrap();
    writeln!(
        output,
        "Total Time Off Hours (Unscheduled): {}",
        format_hours(summary.total_time_off_hours)
    )
    .unwrap();
    writeln!(output, "Actual Working Hours: {}", format_hours(summary.actual_working_hours)).unwrap();
    writeln!(output, "Total Task Hours: {}", format_hours(summary.total_task_hours)).unwrap();
    writeln!(
        output,
        "Percentage of Actual Working Hours Used: {}",
        format_percentage(summary.utilization_percentage())
    )
    .unwrap();

    writeln!(output).unwrap();
    writeln!(output, "--- Summary ---").unwrap();
    writeln!(output).unwrap();

    let mut table = Table::new(&[
        ("Category", Align::Left),
        ("Hours", Align::Right),
        ("Percentage of Actual Working Hours", Align::Right),
    ]);
    for total in &summary.category_totals {
        let label = match total.task_type {
            Some(task_type) => format!("{} {task_type}", total.category),
            None => total.category.clone(),
        };
        table.row(vec![
            label,
            format_hours(total.hours),
            format_percentage(summary.percentage_of_working_hours(total.hours)),
        ]);
    }
    output.push_str(&table.render());

    output
}

/// Formats every entry with the index used to edit or delete it.
pub fn format_entries(ledger: &MonthlyLedger) -> String {
    let mut output = String::new();

    writeln!(output).unwrap();
    writeln!(output, "--- All Entries ---").unwrap();
    writeln!(output).unwrap();

    if ledger.is_empty() {
        writeln!(output, "No entries.").unwrap();
        return output;
    }

    let mut table = Table::new(&[
        ("Index", Align::Right),
        ("Date", Align::Left),
        ("Category", Align::Left),
        ("Description", Align::Left),
        ("Type", Align::Left),
        ("Hours", Align::Right),
        ("Entry Type", Align::Left),
    ]);
    for (index, entry) in ledger.entries.iter().enumerate() {
        table.row(vec![
            index.to_string(),
            entry.date.clone(),
            or_dash(&entry.category),
            entry.task_description.clone(),
            entry
                .task_type
                .map_or_else(|| "-".to_string(), |t| t.to_string()),
            format_hours(entry.hours),
            entry.entry_type.to_string(),
        ]);
    }
    output.push_str(&table.render());

    output
}

/// Formats one entry as the field list shown before editing or deleting it.
pub fn format_entry_details(entry: &Entry) -> String {
    let task_type = entry
        .task_type
        .map_or_else(|| "-".to_string(), |t| t.to_string());
    format!(
        "Date: {}\nCategory: {}\nDescription: {}\nType: {task_type}\nHours: {}\nEntry Type: {}",
        entry.date,
        or_dash(&entry.category),
        entry.task_description,
        format_hours(entry.hours),
        entry.entry_type,
    )
}

fn or_dash(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}
