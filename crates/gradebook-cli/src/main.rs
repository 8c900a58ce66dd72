//! gradebook CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(
    name = "gradebook",
    version,
    about = "Weighted course grade evaluator and to-do list"
)]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate seven scores (Evaluation 1-6, then the final exam)
    Evaluate {
        /// Raw scores in slot order
        #[arg(num_args = 0.., allow_negative_numbers = true)]
        scores: Vec<String>,

        /// Show each slot's contribution
        #[arg(long)]
        breakdown: bool,

        /// Output format: text, json
        #[arg(long)]
        format: Option<String>,
    },

    /// Evaluate every student in a grade sheet
    Sheet {
        /// Path to a .toml sheet or a directory of sheets
        #[arg(long)]
        path: PathBuf,

        /// Output format: text, json
        #[arg(long)]
        format: Option<String>,
    },

    /// Show the evaluation slots and their weights
    Slots,

    /// Manage a to-do list interactively (commands on stdin)
    Todo,

    /// Create starter config and example sheet
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("gradebook=info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Evaluate {
            scores,
            breakdown,
            format,
        } => commands::evaluate::execute(scores, breakdown, format, cli.config),
        Commands::Sheet { path, format } => commands::sheet::execute(path, format, cli.config),
        Commands::Slots => commands::slots::execute(),
        Commands::Todo => commands::todo::execute(),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
