use anyhow::Result;
use clap::{Parser, Subcommand};

use fintrack::cli::{
    handle_ask_command, handle_budget_command, handle_dashboard_command,
    handle_transaction_command, AskArgs, BudgetCommands, DashboardArgs, TransactionCommands,
};
use fintrack::config::{paths::FinTrackPaths, settings::Settings};
use fintrack::logging::init_tracing;
use fintrack::storage::Storage;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Personal income and expense tracker",
    long_about = "fintrack records income and expense transactions, tracks monthly \
                  category budgets, summarizes any period in a dashboard and can \
                  ask a language-model assistant about your data."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "transaction")]
    Tx(TransactionCommands),

    /// Budget goal commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show balances, breakdowns and budget status for a period
    Dashboard(DashboardArgs),

    /// Ask the assistant a question about your transactions
    Ask(AskArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FinTrackPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths)?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Tx(cmd)) => {
            handle_transaction_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Dashboard(args)) => {
            handle_dashboard_command(&storage, &settings, args)?;
        }
        Some(Commands::Ask(args)) => {
            handle_ask_command(&storage, &settings, args)?;
        }
        Some(Commands::Config) => {
            let paths = storage.paths();
            println!("fintrack Configuration");
            println!("======================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Assistant model:   {}", settings.assistant.model);
            println!("  Assistant API:     {}", settings.assistant.endpoint);
            println!(
                "  API key variable:  {} ({})",
                settings.assistant.api_key_env,
                if settings.assistant.api_key().is_some() {
                    "set"
                } else {
                    "not set"
                }
            );
            match storage.last_updated()? {
                Some(at) => println!("  Last updated:      {}", at.to_rfc3339()),
                None => println!("  Last updated:      never"),
            }
        }
        None => {
            println!("fintrack - personal income and expense tracker");
            println!();
            println!("Run 'fintrack --help' for usage information.");
            println!("Run 'fintrack dashboard' for this month's overview.");
        }
    }

    Ok(())
}
