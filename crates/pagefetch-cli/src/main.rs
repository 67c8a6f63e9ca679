use pagefetch_core::{config, logging};

mod cli;

use crate::cli::Cli;
use clap::Parser;

fn main() {
    // Parse before anything else so --help and usage errors exit early.
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("pagefetch error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cfg = config::load_or_default()?;

    let (subscriber, log_err) = match logging::build_subscriber(&cfg.log_target()) {
        Ok(s) => (s, None),
        Err(e) => (logging::build_subscriber(&logging::LogTarget::Stderr)?, Some(e)),
    };

    tracing::subscriber::with_default(subscriber, || {
        if let Some(e) = log_err {
            tracing::warn!("file logging unavailable, using stderr: {:#}", e);
        }
        tracing::debug!("loaded config: {:?}", cfg);
        cli.run(&cfg)
    })
}
