//! Report formatting for terminal output
//!
//! Renders a [`MonthlyReport`] as the text dashboard: greeting, budget
//! status with a progress bar, top categories, daily totals, and overspend
//! days.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::reports::{BudgetStatus, MonthlyReport};

const BAR_WIDTH: usize = 20;
const RULE_WIDTH: usize = 40;

/// Time-of-day greeting for an hour in 0..24
pub fn greeting_for_hour(hour: u32) -> &'static str {
    if hour < 12 {
        "Good morning"
    } else if hour < 18 {
        "Good afternoon"
    } else {
        "Good evening"
    }
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Draw a bar `width` cells wide, `percent` (0-100) of it filled
pub fn format_bar(percent: u8, width: usize) -> String {
    let filled = (usize::from(percent.min(100)) * width) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Truncate to at most `max_chars` characters, with an ellipsis
pub(crate) fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars <= 3 {
        "...".chars().take(max_chars).collect()
    } else {
        let head: String = s.chars().take(max_chars - 3).collect();
        format!("{}...", head)
    }
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "Entries")]
    entries: usize,
}

#[derive(Tabled)]
struct DayRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Spent")]
    spent: String,
}

fn status_line(report: &MonthlyReport, symbol: &str) -> String {
    let eval = &report.evaluation;
    match eval.status {
        BudgetStatus::Over => format!(
            "Over budget by {}!",
            eval.overspent_by().format_with_symbol(symbol)
        ),
        BudgetStatus::NearLimit => format!(
            "Near the limit. Only {} left.",
            eval.remaining.format_with_symbol(symbol)
        ),
        BudgetStatus::Within => format!(
            "Within budget! {} remaining.",
            eval.remaining.format_with_symbol(symbol)
        ),
    }
}

/// Render the dashboard for one month
///
/// `greeting` is prepended as a header line when given.
pub fn format_monthly_report(
    report: &MonthlyReport,
    currency_symbol: &str,
    greeting: Option<&str>,
) -> String {
    let mut output = String::new();
    let eval = &report.evaluation;

    if let Some(greeting) = greeting {
        output.push_str(&format!("{}, let's track your expenses!\n\n", greeting));
    }

    output.push_str(&format!("{}\n", report.month));
    output.push_str(&format!("{}\n", "═".repeat(RULE_WIDTH)));
    output.push_str(&format!(
        "Budget:    {}\n",
        eval.budget.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "Spent:     {}\n",
        eval.spent.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "Remaining: {}\n",
        eval.remaining.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "[{}] {}%\n",
        format_bar(eval.progress(), BAR_WIDTH),
        eval.progress()
    ));
    output.push_str(&status_line(report, currency_symbol));
    output.push('\n');

    if !report.has_records() {
        output.push_str(&format!("\nNo expenses recorded for {}.\n", report.month));
        return output;
    }

    output.push_str("\nTop categories\n");
    let rows = report.top_categories().iter().map(|c| CategoryRow {
        category: c.category.to_string(),
        spent: c.total.format_with_symbol(currency_symbol),
        share: format_percentage(c.percentage),
        entries: c.count,
    });
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    output.push_str(&format!("{}\n", table));

    output.push_str("\nDaily totals\n");
    let rows = report.daily_totals.iter().map(|(date, total)| DayRow {
        date: date.format("%Y-%m-%d").to_string(),
        spent: total.format_with_symbol(currency_symbol),
    });
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    output.push_str(&format!("{}\n", table));

    if report.overspend_days.is_empty() {
        output.push_str(&format!(
            "\nNo day went over {}.\n",
            report.overspend_threshold.format_with_symbol(currency_symbol)
        ));
    } else {
        output.push_str(&format!(
            "\nYou spent more than {} on these days:\n",
            report.overspend_threshold.format_with_symbol(currency_symbol)
        ));
        for (date, total) in &report.overspend_days {
            output.push_str(&format!(
                "  {}  {}\n",
                date.format("%b %d, %Y"),
                total.format_with_symbol(currency_symbol)
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetStore, ExpenseDraft, Ledger, Money, MonthKey};
    use crate::reports::BudgetThresholds;
    use chrono::NaiveDate;

    fn report_for(entries: &[(u32, &str, i64)], budget: i64) -> MonthlyReport {
        let mut ledger = Ledger::new();
        for (day, category, units) in entries {
            let date = NaiveDate::from_ymd_opt(2025, 1, *day).unwrap();
            ledger
                .add(
                    ExpenseDraft::new(date, *category, Money::from_units(*units), "")
                        .validate()
                        .unwrap(),
                )
                .unwrap();
        }
        let month = MonthKey::new(2025, 1).unwrap();
        let mut budgets = BudgetStore::new();
        budgets.set(month, Money::from_units(budget)).unwrap();
        MonthlyReport::generate(&ledger, &budgets, month, &BudgetThresholds::default())
    }

    #[test]
    fn test_greeting_boundaries() {
        assert_eq!(greeting_for_hour(0), "Good morning");
        assert_eq!(greeting_for_hour(11), "Good morning");
        assert_eq!(greeting_for_hour(12), "Good afternoon");
        assert_eq!(greeting_for_hour(17), "Good afternoon");
        assert_eq!(greeting_for_hour(18), "Good evening");
        assert_eq!(greeting_for_hour(23), "Good evening");
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(50, 10).chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(0, 4), "░░░░");
        assert_eq!(format_bar(100, 4), "████");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(72.7), "73%");
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("chai ☕", 6), "chai ☕");
        assert_eq!(truncate("₹₹₹₹₹₹", 5), "₹₹...");
    }

    #[test]
    fn test_over_budget_report() {
        let report = report_for(&[(3, "Bills", 800), (4, "Food", 400)], 1000);
        let text = format_monthly_report(&report, "₹", Some("Good morning"));

        assert!(text.starts_with("Good morning, let's track your expenses!"));
        assert!(text.contains("January 2025"));
        assert!(text.contains("Over budget by ₹200.00!"));
        assert!(text.contains("100%"));
        assert!(text.contains("Bills"));
        assert!(text.contains("Jan 03, 2025"));
    }

    #[test]
    fn test_within_budget_report() {
        let report = report_for(&[(3, "Food", 100)], 1000);
        let text = format_monthly_report(&report, "$", None);

        assert!(text.starts_with("January 2025"));
        assert!(text.contains("Within budget! $900.00 remaining."));
        assert!(text.contains("No day went over $500.00."));
    }

    #[test]
    fn test_empty_month_report() {
        let report = report_for(&[], 1000);
        let text = format_monthly_report(&report, "₹", None);
        assert!(text.contains("No expenses recorded for January 2025."));
        assert!(!text.contains("Top categories"));
    }
}
