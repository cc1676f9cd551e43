//! Chirp CLI
//!
//! Console front end for the chirp feed engine

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use chirp_core::logging_facility::{init, Profile};
use chirp_engine::ChirpApp;
use clap::Parser;

mod console;

use console::ConsoleOptions;

#[derive(Debug, Parser)]
#[command(name = "chirp")]
#[command(about = "Chirp - a console social feed", long_about = None)]
struct Cli {
    /// Logging profile: console, development or production
    #[arg(long, env = "CHIRP_LOG_PROFILE", default_value = "console")]
    log_profile: Profile,

    /// Replay commands from a file instead of reading stdin
    #[arg(long, value_name = "FILE")]
    script: Option<PathBuf>,

    /// Do not print the "> " prompt
    #[arg(long)]
    no_prompt: bool,

    /// Stop at the first failing command
    #[arg(long)]
    fail_fast: bool,
}

fn main() {
    let cli = Cli::parse();
    init(cli.log_profile);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let app = ChirpApp::with_system_clock()?;
    let stdout = io::stdout();
    let stderr = io::stderr();

    let options = ConsoleOptions {
        prompt: !cli.no_prompt && cli.script.is_none(),
        fail_fast: cli.fail_fast,
    };

    match cli.script {
        Some(path) => {
            tracing::info!(script = %path.display(), "replaying script");
            let input = BufReader::new(File::open(&path)?);
            console::run(app.router(), input, &mut stdout.lock(), &mut stderr.lock(), options)
        }
        None => console::run(
            app.router(),
            io::stdin().lock(),
            &mut stdout.lock(),
            &mut stderr.lock(),
            options,
        ),
    }
}
