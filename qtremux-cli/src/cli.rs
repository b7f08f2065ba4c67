// qtremux-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "qtremux: QuickTime-compatible remuxing tool",
    long_about = "Remuxes Matroska files into QuickTime-friendly MP4s without re-encoding \
                  video, transcoding DTS audio to lossless ALAC where needed."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose (debug) logging.
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Remuxes an .mkv file into a QuickTime-compatible .mp4
    Remux(RemuxArgs),
    /// Probes a media file and prints its duration and codecs
    Info(InfoArgs),
}

#[derive(Parser, Debug)]
pub struct RemuxArgs {
    /// Input .mkv file to remux
    #[arg(required = true, value_name = "INPUT_PATH")]
    pub input_path: PathBuf,

    /// Optional: output .mp4 path (defaults to the input with its extension replaced)
    #[arg(short, long, value_name = "OUTPUT_PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// Media file to probe
    #[arg(required = true, value_name = "INPUT_PATH")]
    pub input_path: PathBuf,
}
