//! Standalone TUI binary for DiceRoll.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use dr_core::RollerConfig;

#[derive(Parser)]
#[command(name = "dr-tui", about = "Roll six dice in the terminal", version)]
struct Args {
    /// RNG seed for reproducible rolls
    #[arg(long)]
    seed: Option<u64>,

    /// TOML file with roller settings
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    dr_tui::logging::init(true);

    let args = Args::parse();

    let result = RollerConfig::load(args.config.as_deref(), args.seed)
        .and_then(dr_tui::app::TuiApp::new)
        .map_err(|e| e.to_string())
        .and_then(dr_tui::terminal::run);

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
