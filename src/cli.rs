use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "subsync")]
#[command(about = "Align a transcript against audio and write chunked subtitles.")]
pub struct Args {
    /// Path to config TOML (defaults to ./config.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Align audio against its transcript and write an SRT file
    Sync(SyncCmd),
    /// Convert an existing SRT file to WebVTT
    Convert(ConvertCmd),
    /// Print the effective default config as TOML and exit
    PrintDefaultConfig,
}

#[derive(Debug, Parser)]
pub struct SyncCmd {
    /// Audio file to align against
    pub audio: PathBuf,

    /// Transcript text, or '-' to read it from stdin
    pub transcript: String,

    /// Output subtitle file path (overwritten if present)
    pub output: PathBuf,

    /// Words per caption chunk (overrides config)
    #[arg(long)]
    pub chunk_size: Option<usize>,
}

#[derive(Debug, Parser)]
pub struct ConvertCmd {
    /// Input SRT file path
    pub input: PathBuf,

    /// Output file path (defaults to the input path with a .vtt extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Allow overwriting the output file
    #[arg(long)]
    pub overwrite: bool,
}
