use anyhow::Result;
use clap::Parser;

use subsync::{cli, config, pipeline};

fn main() -> Result<()> {
    let args = cli::Args::parse();

    let cfg = config::Config::load(args.config.as_deref())?;
    config::init_tracing(&cfg.logging, args.log_level.as_deref())?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "subsync starting");

    match args.command {
        cli::Command::Sync(cmd) => pipeline::run_sync(cmd, &cfg),
        cli::Command::Convert(cmd) => pipeline::run_convert(cmd),
        cli::Command::PrintDefaultConfig => {
            let s = cfg.to_toml_pretty()?;
            print!("{s}");
            Ok(())
        }
    }
}
