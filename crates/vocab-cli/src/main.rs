use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use vocab_core::Config;

mod commands;

use commands::App;

/// Log filter override, e.g. `VOCAB_BOOSTER_LOG=vocab_core=debug`.
const LOG_ENV: &str = "VOCAB_BOOSTER_LOG";

#[derive(Parser)]
#[command(name = "vocab-cli", version, about = "Vocab Booster CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import articles and word lists from a text file
    Import(commands::data::ImportArgs),
    /// Replace all data with a JSON snapshot
    Restore(commands::data::RestoreArgs),
    /// Write the current snapshot as JSON
    Export(commands::data::ExportArgs),
    /// Show the current review queue
    Queue(commands::review::QueueArgs),
    /// Review interactively
    Review,
    /// Answer the word under review
    Answer(commands::review::AnswerArgs),
    /// Rebuild the review queue now
    Refresh,
    /// Show a word in its source article
    Context(commands::context::ContextArgs),
    /// Progress statistics
    Stats(commands::stats::StatsArgs),
    /// Delete all words and progress
    Reset(commands::data::ResetArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> commands::CliResult {
    let config = Config::load_or_default();
    init_tracing(&config);

    match cli.command {
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "vocab-cli",
                &mut std::io::stdout(),
            );
            Ok(())
        }
        Commands::Import(args) => commands::data::import(&App::open(config)?, args),
        Commands::Restore(args) => commands::data::restore(&App::open(config)?, args),
        Commands::Export(args) => commands::data::export(&App::open(config)?, args),
        Commands::Queue(args) => commands::review::queue(&App::open(config)?, args),
        Commands::Review => commands::review::interactive(&App::open(config)?),
        Commands::Answer(args) => commands::review::answer(&App::open(config)?, args),
        Commands::Refresh => commands::review::refresh(&App::open(config)?),
        Commands::Context(args) => commands::context::run(&App::open(config)?, args),
        Commands::Stats(args) => commands::stats::run(&App::open(config)?, args),
        Commands::Reset(args) => commands::data::reset(&App::open(config)?, args),
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
