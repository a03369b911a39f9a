//! Monthly summary: time-off adjusted working hours and per-category totals.

use crate::entry::Entry;
use crate::ledger::MonthlyLedger;
use crate::types::TaskType;

/// Task types every configured category is seeded with, in display order.
const SEEDED_TASK_TYPES: [TaskType; 2] = [TaskType::BugFixing, TaskType::NewDevelopment];

/// Running total of task hours for one (category, task type) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub task_type: Option<TaskType>,
    pub hours: f64,
}

/// Aggregated view of a monthly ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub max_monthly_hours: f64,
    pub scheduled_pto_hours: f64,
    pub total_time_off_hours: f64,
    pub total_task_hours: f64,
    pub actual_working_hours: f64,
    pub category_totals: Vec<CategoryTotal>,
}

impl Summary {
    /// Computes the summary of `ledger`.
    ///
    /// Every category in `categories` appears in the totals even with no
    /// entries. Categories or task types found only in the ledger are
    /// appended in the order they are first seen.
    #[allow(clippy::cast_precision_loss)]
    pub fn compute(ledger: &MonthlyLedger, categories: &[String], hours_per_day: f64) -> Self {
        let mut category_totals: Vec<CategoryTotal> = categories
            .iter()
            .flat_map(|category| {
                SEEDED_TASK_TYPES.iter().map(|task_type| CategoryTotal {
                    category: category.clone(),
                    task_type: Some(*task_type),
                    hours: 0.0,
                })
            })
            .collect();

        let mut total_task_hours = 0.0;
        let mut total_time_off_hours = 0.0;

        for entry in &ledger.entries {
            if entry.is_time_off() {
                total_time_off_hours += entry.hours;
                continue;
            }
            total_task_hours += entry.hours;
            add_to_bucket(&mut category_totals, entry);
        }

        let header = &ledger.header;
        let summary = Self {
            max_monthly_hours: header.max_monthly_hours,
            scheduled_pto_hours: header.scheduled_pto_days as f64 * hours_per_day,
            total_time_off_hours,
            total_task_hours,
            actual_working_hours: header.max_monthly_hours - total_time_off_hours,
            category_totals,
        };
        tracing::debug!(
            entries = ledger.entries.len(),
            actual_working_hours = summary.actual_working_hours,
            "computed summary"
        );
        summary
    }

    /// Share of actual working hours that `hours` represents, in percent.
    ///
    /// Returns 0 when there are no actual working hours.
    pub fn percentage_of_working_hours(&self, hours: f64) -> f64 {
        percentage(hours, self.actual_working_hours)
    }

    /// Share of actual working hours covered by logged tasks, in percent.
    pub fn utilization_percentage(&self) -> f64 {
        self.percentage_of_working_hours(self.total_task_hours)
    }
}

fn add_to_bucket(totals: &mut Vec<CategoryTotal>, entry: &Entry) {
    if let Some(bucket) = totals
        .iter_mut()
        .find(|b| b.category == entry.category && b.task_type == entry.task_type)
    {
        bucket.hours += entry.hours;
    } else {
        totals.push(CategoryTotal {
            category: entry.category.clone(),
            task_type: entry.task_type,
            hours: entry.hours,
        });
    }
}

/// `part / whole * 100`, or 0 when `whole` is zero or not a number.
#[allow(clippy::float_cmp)]
pub fn percentage(part: f64, whole: f64) -> f64 {
    if whole == 0.0 || whole.is_nan() {
        0.0
    } else {
        part / whole * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::LedgerHeader;

    fn ledger(entries: Vec<Entry>) -> MonthlyLedger {
        MonthlyLedger {
            header: LedgerHeader {
                work_days_in_month: 22,
                scheduled_pto_days: 2,
                max_monthly_hours: 160.0,
            },
            entries,
        }
    }

    fn categories(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    fn bucket<'a>(summary: &'a Summary, category: &str, task_type: TaskType) -> &'a CategoryTotal {
        summary
            .category_totals
            .iter()
            .find(|b| b.category == category && b.task_type == Some(task_type))
            .unwrap()
    }

    #[test]
    fn time_off_reduces_actual_working_hours() {
        let ledger = ledger(vec![
            Entry::task("2025-03-03", "CatA", "J-1", TaskType::NewDevelopment, 4.0),
            Entry::time_off("2025-03-04", "Sick Time", 2.0),
        ]);

        let summary = Summary::compute(&ledger, &categories(&["CatA"]), 8.0);

        assert!((summary.actual_working_hours - 158.0).abs() < f64::EPSILON);
        assert!((summary.total_time_off_hours - 2.0).abs() < f64::EPSILON);
        let cat_a = bucket(&summary, "CatA", TaskType::NewDevelopment);
        assert!((cat_a.hours - 4.0).abs() < f64::EPSILON);
        assert_eq!(
            format!("{:.2}", summary.percentage_of_working_hours(cat_a.hours)),
            "2.53"
        );
    }

    #[test]
    fn bucket_sums_match_entry_hours() {
        let ledger = ledger(vec![
            Entry::task("2025-03-03", "CatA", "J-1", TaskType::BugFixing, 1.5),
            Entry::task("2025-03-04", "CatB", "J-2", TaskType::BugFixing, 3.0),
            Entry::task("2025-03-05", "CatA", "J-3", TaskType::BugFixing, 2.25),
            Entry::task("2025-03-05", "CatA", "J-4", TaskType::NewDevelopment, 6.0),
        ]);

        let summary = Summary::compute(&ledger, &categories(&["CatA", "CatB"]), 8.0);

        assert!((bucket(&summary, "CatA", TaskType::BugFixing).hours - 3.75).abs() < f64::EPSILON);
        assert!((bucket(&summary, "CatA", TaskType::NewDevelopment).hours - 6.0).abs() < f64::EPSILON);
        assert!((bucket(&summary, "CatB", TaskType::BugFixing).hours - 3.0).abs() < f64::EPSILON);
        assert!((summary.total_task_hours - 12.75).abs() < f64::EPSILON);
    }

    #[test]
    fn configured_categories_are_seeded_in_order() {
        let summary = Summary::compute(&ledger(vec![]), &categories(&["CatA", "CatB"]), 8.0);

        let labels: Vec<_> = summary
            .category_totals
            .iter()
            .map(|b| (b.category.as_str(), b.task_type))
            .collect();
        assert_eq!(
            labels,
            vec![
                ("CatA", Some(TaskType::BugFixing)),
                ("CatA", Some(TaskType::NewDevelopment)),
                ("CatB", Some(TaskType::BugFixing)),
                ("CatB", Some(TaskType::NewDevelopment)),
            ]
        );
        assert!(summary.category_totals.iter().all(|b| b.hours == 0.0));
    }

    #[test]
    fn unknown_categories_are_appended() {
        let ledger = ledger(vec![Entry::task(
            "2025-03-03",
            "Retired",
            "J-1",
            TaskType::NewDevelopment,
            2.0,
        )]);

        let summary = Summary::compute(&ledger, &categories(&["CatA"]), 8.0);

        let last = summary.category_totals.last().unwrap();
        assert_eq!(last.category, "Retired");
        assert_eq!(summary.category_totals.len(), 3);
    }

    #[test]
    fn scheduled_pto_hours_use_hours_per_day() {
        let summary = Summary::compute(&ledger(vec![]), &[], 8.0);
        assert!((summary.scheduled_pto_hours - 16.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_working_hours_reports_zero_percent() {
        let mut ledger = ledger(vec![
            Entry::task("2025-03-03", "CatA", "J-1", TaskType::BugFixing, 4.0),
            Entry::time_off("2025-03-04", "PTO", 160.0),
        ]);
        ledger.header.max_monthly_hours = 160.0;

        let summary = Summary::compute(&ledger, &categories(&["CatA"]), 8.0);

        assert_eq!(summary.actual_working_hours, 0.0);
        assert_eq!(summary.percentage_of_working_hours(4.0), 0.0);
        assert_eq!(summary.utilization_percentage(), 0.0);
    }

    #[test]
    fn percentage_guards_nan() {
        assert_eq!(percentage(1.0, f64::NAN), 0.0);
        assert!((percentage(1.0, 4.0) - 25.0).abs() < f64::EPSILON);
    }
}
