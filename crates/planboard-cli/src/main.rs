use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing_subscriber::EnvFilter;

mod commands;
mod render;
mod session;

#[derive(Parser)]
#[command(name = "planboard", version, about = "Planboard annual planning CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the annual board
    Board(commands::board::BoardArgs),
    /// Board row management
    Row {
        #[command(subcommand)]
        action: commands::row::RowAction,
    },
    /// Board item management
    Item {
        #[command(subcommand)]
        action: commands::item::ItemAction,
    },
    /// Render one month of the calendar
    Month(commands::month::MonthArgs),
    /// Calendar event management
    Event {
        #[command(subcommand)]
        action: commands::event::EventAction,
    },
    /// Show or set the plan slogan
    Slogan {
        /// New slogan; omit to print the current one
        text: Option<String>,
    },
    /// Replay pointer events from a file (or stdin) onto the board
    Replay(commands::replay::ReplayArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print shell completions
    Completions {
        shell: Shell,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("PLANBOARD_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Board(args) => commands::board::run(args),
        Commands::Row { action } => commands::row::run(action),
        Commands::Item { action } => commands::item::run(action),
        Commands::Month(args) => commands::month::run(args),
        Commands::Event { action } => commands::event::run(action),
        Commands::Slogan { text } => commands::slogan::run(text),
        Commands::Replay(args) => commands::replay::run(args),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "planboard", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
