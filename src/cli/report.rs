//! Report and export CLI commands

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use chrono::{Local, Timelike};

use super::resolve_month;
use crate::config::settings::Settings;
use crate::display::{format_monthly_report, greeting_for_hour};
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::export_month_csv;
use crate::services::UserSession;

/// Print the monthly dashboard
pub fn handle_report_command(
    session: &UserSession<'_>,
    settings: &Settings,
    month: Option<&str>,
) -> ExpenseResult<()> {
    let month = resolve_month(session, month)?;
    let report = session.month_report(month);
    let greeting = greeting_for_hour(Local::now().hour());

    print!(
        "{}",
        format_monthly_report(&report, &settings.currency_symbol, Some(greeting))
    );
    Ok(())
}

/// Export a month's records as CSV to `output`, or stdout when absent
pub fn handle_export_command(
    session: &UserSession<'_>,
    month: Option<&str>,
    output: Option<PathBuf>,
) -> ExpenseResult<()> {
    let month = resolve_month(session, month)?;

    match output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                ExpenseError::Io(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            let count = export_month_csv(&mut writer, session.ledger(), month)?;
            writer.flush()?;
            println!(
                "Exported {} expense(s) for {} to {}",
                count,
                month,
                path.display()
            );
        }
        None => {
            let stdout = io::stdout();
            export_month_csv(stdout.lock(), session.ledger(), month)?;
        }
    }

    Ok(())
}
