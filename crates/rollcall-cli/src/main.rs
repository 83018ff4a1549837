//! rollcall CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::filter::{Directive, EnvFilter};

use rollcall_core::config::load_config_from;

mod commands;

#[derive(Parser)]
#[command(name = "rollcall", version, about = "Classroom attendance register")]
struct Cli {
    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Extra seed file applied after the builtin roster
    #[arg(long)]
    seed_file: Option<PathBuf>,

    /// Start without the builtin demo roster
    #[arg(long)]
    no_seed: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive attendance menu (default)
    Menu,

    /// Check a seed file for problems
    Validate {
        /// Path to the seed TOML file
        #[arg(long)]
        seed_file: PathBuf,
    },

    /// Create a starter config and seed file
    Init,
}

fn init_tracing(log_filter: &str) {
    let filter = EnvFilter::from_default_env();
    let filter = match log_filter.parse::<Directive>() {
        Ok(directive) => filter.add_directive(directive),
        Err(e) => {
            eprintln!("Warning: ignoring log_filter '{log_filter}': {e}");
            filter
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = load_config_from(cli.config.as_deref())?;
    init_tracing(&config.log_filter);

    if cli.no_seed {
        config.seed.builtin = false;
    }
    if let Some(seed_file) = cli.seed_file {
        config.seed.file = Some(seed_file);
    }

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => commands::menu::execute(&config).await,
        Commands::Validate { seed_file } => commands::validate::execute(seed_file),
        Commands::Init => commands::init::execute(),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
