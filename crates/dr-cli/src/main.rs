//! CLI frontend for DiceRoll.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "diceroll",
    about = "DiceRoll: roll six dice and name the result",
    version,
    propagate_version = true
)]
struct Cli {
    /// TOML file with roller settings (seed, timings); used by roll, stats and tui
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll six dice and classify the result
    Roll {
        /// RNG seed for reproducible rolls
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of dice sets to roll
        #[arg(short, long, default_value = "1")]
        times: u32,

        /// Print one JSON object per roll
        #[arg(long)]
        json: bool,
    },

    /// Classify six given dice values (e.g. `eval 2 2 2 5 5 1` or `eval 2,2,2,5,5,1`)
    Eval {
        /// Die values, separated by spaces or commas
        #[arg(required = true, num_args = 1..)]
        values: Vec<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Roll many dice sets and show how often each outcome occurs
    Stats {
        /// Number of dice sets to roll
        #[arg(short, long, default_value = "10000")]
        rolls: u64,

        /// RNG seed for reproducible statistics
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the tally as JSON
        #[arg(long)]
        json: bool,
    },

    /// Launch the interactive dice screen
    Tui {
        /// RNG seed for reproducible rolls
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();
    dr_tui::logging::init(matches!(cli.command, Commands::Tui { .. }));

    let config = cli.config.as_deref();

    let result = match cli.command {
        Commands::Roll { seed, times, json } => commands::roll::run(config, seed, times, json),
        Commands::Eval { values, json } => match config {
            Some(_) => Err("--config has no effect on eval".to_string()),
            None => commands::eval::run(&values, json),
        },
        Commands::Stats { rolls, seed, json } => commands::stats::run(config, rolls, seed, json),
        Commands::Tui { seed } => commands::load_config(config, seed).and_then(|cfg| {
            dr_tui::app::TuiApp::new(cfg)
                .map_err(|e| e.to_string())
                .and_then(dr_tui::terminal::run)
        }),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
