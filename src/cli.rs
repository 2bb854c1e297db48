// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "fly-camera")]
#[command(about = "Replay recorded input against a free-flying camera", long_about = None)]
pub struct Cli {
    /// JSON script of move/look/scroll commands
    pub script: PathBuf,

    /// Camera config overriding the one embedded in the script
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the final state as JSON
    #[arg(long, default_value = "false")]
    pub json: bool,
}
