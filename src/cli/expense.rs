//! Expense CLI commands
//!
//! Add, list, edit, and delete expense records, and list the months that
//! have any.

use chrono::Local;
use clap::Subcommand;

use super::{parse_amount, parse_date_arg, resolve_month};
use crate::config::settings::Settings;
use crate::display::{format_expense_details, format_expense_table, format_month_list};
use crate::error::ExpenseResult;
use crate::models::{parse_category, ExpenseDraft, ExpenseUpdate};
use crate::services::UserSession;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount (e.g., "250" or "250.50")
        amount: String,
        /// Category: Food, Travel, Shopping, Bills, Entertainment, or Other
        category: String,
        /// Expense date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Free-text note
        #[arg(short, long, default_value = "")]
        note: String,
    },

    /// List a month's expenses, most recent first
    List {
        /// Month (e.g., "January 2025" or "2025-01"); defaults to the latest month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Edit an expense
    Edit {
        /// Expense ID (full or short form, e.g. "exp-1a2b3c4d")
        id: String,
        /// New date
        #[arg(short, long)]
        date: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Delete an expense
    Delete {
        /// Expense ID (full or short form)
        id: String,
    },

    /// List months that have expenses, most recent first
    Months,
}

/// Handle an expense command
pub fn handle_expense_command(
    session: &mut UserSession<'_>,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            date,
            note,
        } => {
            let date = match date {
                Some(d) => parse_date_arg(&d)?,
                None => Local::now().date_naive(),
            };
            let amount = parse_amount(&amount)?;

            let record = session.add_expense(ExpenseDraft::new(date, category, amount, note))?;
            println!(
                "Added {} to '{}' on {}.",
                record.amount.format_with_symbol(symbol),
                record.category,
                record.date.format("%b %d, %Y")
            );
            println!("  ID: {}", record.id.short());
        }

        ExpenseCommands::List { month } => {
            let month = resolve_month(session, month.as_deref())?;
            let records = session.month_records(month);

            println!("Expenses for {}", month);
            print!("{}", format_expense_table(&records, symbol));
        }

        ExpenseCommands::Edit {
            id,
            date,
            category,
            amount,
            note,
        } => {
            let mut update = ExpenseUpdate::new();
            if let Some(d) = date {
                update = update.date(parse_date_arg(&d)?);
            }
            if let Some(c) = category {
                update = update.category(parse_category(&c)?);
            }
            if let Some(a) = amount {
                update = update.amount(parse_amount(&a)?);
            }
            if let Some(n) = note {
                update = update.note(n);
            }

            if update.is_empty() {
                println!("No changes specified. Use --date, --category, --amount, or --note.");
                return Ok(());
            }

            let id = session.ledger().find_by_ref(&id)?.id;
            let updated = session.update_expense(id, &update)?;
            println!("Updated expense:");
            print!("{}", format_expense_details(&updated, symbol));
        }

        ExpenseCommands::Delete { id } => {
            let id = session.ledger().find_by_ref(&id)?.id;
            let removed = session.delete_expense(id)?;
            println!(
                "Deleted {} {} expense from {}.",
                removed.amount.format_with_symbol(symbol),
                removed.category,
                removed.date.format("%b %d, %Y")
            );
        }

        ExpenseCommands::Months => {
            print!("{}", format_month_list(&session.available_months()));
        }
    }

    Ok(())
}

