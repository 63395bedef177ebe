//! Budget CLI commands
//!
//! Set and show the monthly budget.

use clap::Subcommand;

use super::{parse_amount, resolve_month};
use crate::config::settings::Settings;
use crate::display::{format_bar, format_percentage};
use crate::error::ExpenseResult;
use crate::services::UserSession;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the budget for a month
    Set {
        /// Amount (e.g., "1500" or "1500.00")
        amount: String,
        /// Month (e.g., "January 2025" or "2025-01"); defaults to the latest month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Show the budget and how much of it is used
    Show {
        /// Month (e.g., "January 2025" or "2025-01"); defaults to the latest month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// List every month with an explicit budget
    List,
}

/// Handle a budget command
pub fn handle_budget_command(
    session: &mut UserSession<'_>,
    settings: &Settings,
    cmd: BudgetCommands,
) -> ExpenseResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Set { amount, month } => {
            let month = resolve_month(session, month.as_deref())?;
            let amount = parse_amount(&amount)?;

            match session.set_budget(month, amount)? {
                Some(previous) if previous != amount => println!(
                    "Budget for {}: {} -> {}",
                    month,
                    previous.format_with_symbol(symbol),
                    amount.format_with_symbol(symbol)
                ),
                _ => println!(
                    "Budget for {} set to {}",
                    month,
                    amount.format_with_symbol(symbol)
                ),
            }
        }

        BudgetCommands::Show { month } => {
            let month = resolve_month(session, month.as_deref())?;
            let eval = session.month_report(month).evaluation;
            let source = if session.budgets().explicit(month).is_some() {
                ""
            } else {
                " (default)"
            };

            println!("Budget for {}", month);
            println!("  Budget:    {}{}", eval.budget.format_with_symbol(symbol), source);
            println!("  Spent:     {}", eval.spent.format_with_symbol(symbol));
            println!("  Remaining: {}", eval.remaining.format_with_symbol(symbol));
            println!(
                "  Used:      {} [{}]",
                format_percentage(eval.used_pct),
                format_bar(eval.progress(), 20)
            );
            println!("  Status:    {}", eval.status);
        }

        BudgetCommands::List => {
            let budgets = session.budgets();
            if budgets.is_empty() {
                println!(
                    "No budgets set. Months without one use {}.",
                    settings.default_budget.format_with_symbol(symbol)
                );
                return Ok(());
            }

            for (month, amount) in budgets.iter().collect::<Vec<_>>().into_iter().rev() {
                println!("{:<16} {:>12}", month.label(), amount.format_with_symbol(symbol));
            }
        }
    }

    Ok(())
}
