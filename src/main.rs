use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use clap::Parser;
use etui::cli::commands::Cli;
use etui::io::{config_io, paths};
use tracing_subscriber::EnvFilter;

/// Set to a filter directive (e.g. `debug`) to write a log file
const LOG_ENV: &str = "ETUI_LOG";
const LOG_FILE: &str = "etui.log";

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = paths::data_dir(cli.data_dir.as_deref())?;
    init_logging(&data_dir);

    let config_path = paths::config_path(cli.config.as_deref());
    let config = config_io::load_config(config_path.as_deref())?;

    etui::tui::run(&data_dir, &config)
}

/// The terminal belongs to the TUI, so logs go to a file and only when asked for
fn init_logging(data_dir: &Path) {
    let Ok(directive) = std::env::var(LOG_ENV) else {
        return;
    };
    let path = data_dir.join(LOG_FILE);
    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("warning: could not open {}: {}", path.display(), e);
            return;
        }
    };
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}
