use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use fintrack::cli::{
    handle_audit_command, handle_budget_command, handle_chat_command, handle_dashboard_command,
    handle_expense_command, handle_export_command, handle_goal_command, handle_health_command,
    handle_profile_command, handle_tips_command, ChatCommands, ExpenseCommands, ExportCommands,
    GoalCommands, ProfileCommands,
};
use fintrack::config::{paths::FintrackPaths, settings::Settings};
use fintrack::storage::{initialize_storage, Storage};

/// Environment variable holding the tracing filter
const LOG_ENV: &str = "FINTRACK_LOG";

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Terminal personal finance tracker",
    long_about = "fintrack records your expenses, measures them against the 50/30/20 \
                  budgeting rule, scores your financial health and projects when your \
                  savings goals will be reached."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,

    /// Profile commands
    #[command(subcommand)]
    Profile(ProfileCommands),

    /// Expense commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Income, spending, health score and tips at a glance
    Dashboard,

    /// The 50/30/20 budget plan against actual spending
    Budget,

    /// Financial health score
    Health,

    /// Personalized financial tips
    Tips,

    /// Savings goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Prepare questions for a chat assistant
    #[command(subcommand)]
    Chat(ChatCommands),

    /// Export data
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show recent changes from the audit log
    Audit {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value_t = 20)]
        limit: usize,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let paths = FintrackPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::open(paths.clone())?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing fintrack at: {}", paths.base_dir().display());
            initialize_storage(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Next steps:");
            println!("  fintrack profile set <NAME> <MONTHLY_INCOME>");
            println!("  fintrack expense add <AMOUNT> --category <CATEGORY>");
            println!("  fintrack dashboard");
        }
        Some(Commands::Config) => {
            println!("fintrack Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!(
                "Initialized:    {}",
                if paths.is_initialized() { "yes" } else { "no" }
            );
            println!();
            println!("Settings:");
            println!("  Currency label:      {}", settings.currency_label);
            println!("  Thousands separator: '{}'", settings.thousands_separator);
            println!("  Date format:         {}", settings.date_format);
            println!(
                "  Restaurant alert:    {}",
                settings
                    .currency_format()
                    .format(settings.restaurant_alert_threshold)
            );
        }
        Some(Commands::Profile(cmd)) => handle_profile_command(&storage, &settings, cmd)?,
        Some(Commands::Expense(cmd)) => handle_expense_command(&storage, &settings, cmd)?,
        Some(Commands::Dashboard) => handle_dashboard_command(&storage, &settings)?,
        Some(Commands::Budget) => handle_budget_command(&storage, &settings)?,
        Some(Commands::Health) => handle_health_command(&storage, &settings)?,
        Some(Commands::Tips) => handle_tips_command(&storage, &settings)?,
        Some(Commands::Goal(cmd)) => handle_goal_command(&storage, &settings, cmd)?,
        Some(Commands::Chat(cmd)) => handle_chat_command(&storage, &settings, cmd)?,
        Some(Commands::Export(cmd)) => handle_export_command(&storage, cmd)?,
        Some(Commands::Audit { limit }) => handle_audit_command(&storage, limit)?,
        None => {
            println!("fintrack - Terminal personal finance tracker");
            println!();
            println!("Run 'fintrack --help' for usage information.");
            if !storage.is_initialized() {
                println!("Run 'fintrack init' to get started.");
            }
        }
    }

    Ok(())
}
