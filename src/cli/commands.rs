use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "etui", about = concat!("etui v", env!("CARGO_PKG_VERSION"), " - an Eisenhower matrix for your terminal"), version)]
pub struct Cli {
    /// Directory holding tasks.jsonl (overrides ETUI_DATA_DIR)
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Path to config.toml (overrides ETUI_CONFIG)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
