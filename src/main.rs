use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use expense_ledger::cli::{
    handle_budget_command, handle_expense_command, handle_export_command, handle_report_command,
    BudgetCommands, ExpenseCommands,
};
use expense_ledger::config::{ExpensePaths, Settings};
use expense_ledger::services::UserSession;
use expense_ledger::storage::FileStorage;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Track expenses against a monthly budget",
    long_about = "Record dated, categorized expenses, set a budget per month, and see \
                  where the money went: top categories, daily totals, and the days \
                  you overspent."
)]
struct Cli {
    /// Your email or phone number; each identity has its own ledger
    #[arg(short, long, global = true, env = "EXPENSE_LEDGER_USER")]
    user: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show the monthly report
    Report {
        /// Month (e.g., "January 2025" or "2025-01"); defaults to the latest month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Export a month's expenses as CSV
    Export {
        /// Month (e.g., "January 2025" or "2025-01"); defaults to the latest month
        #[arg(short, long)]
        month: Option<String>,
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    expense_ledger::init_tracing();
    let cli = Cli::parse();

    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Config) => print_config(&paths, &settings),
        Some(command) => run_user_command(cli.user, paths, &settings, command)?,
        None => {
            println!("Expense Ledger - track expenses against a monthly budget");
            println!();
            println!("Run 'expense --help' for usage information.");
        }
    }

    Ok(())
}

fn run_user_command(
    user: Option<String>,
    paths: ExpensePaths,
    settings: &Settings,
    command: Commands,
) -> Result<()> {
    let user =
        user.context("No user given. Pass --user <email|phone> or set EXPENSE_LEDGER_USER.")?;
    let storage = FileStorage::new(paths)?;
    let mut session = UserSession::login(&storage, &user, settings.thresholds())?;

    match command {
        Commands::Expense(cmd) => handle_expense_command(&mut session, settings, cmd)?,
        Commands::Budget(cmd) => handle_budget_command(&mut session, settings, cmd)?,
        Commands::Report { month } => handle_report_command(&session, settings, month.as_deref())?,
        Commands::Export { month, output } => {
            handle_export_command(&session, month.as_deref(), output)?
        }
        Commands::Config => print_config(storage.paths(), settings),
    }

    Ok(())
}

fn print_config(paths: &ExpensePaths, settings: &Settings) {
    println!("Expense Ledger Configuration");
    println!("============================");
    println!("Data directory:  {}", paths.base_dir().display());
    println!("User data:       {}", paths.user_data_dir().display());
    println!("Settings file:   {}", paths.settings_file().display());
    println!();
    println!("Settings:");
    println!("  Default budget:        {}", settings.default_budget);
    println!("  Near-limit threshold:  {}%", settings.near_limit_pct);
    println!("  Daily overspend above: {}", settings.daily_overspend_threshold);
    println!("  Top categories shown:  {}", settings.top_category_count);
    println!("  Currency symbol:       {}", settings.currency_symbol);
}
