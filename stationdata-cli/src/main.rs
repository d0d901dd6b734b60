//! stationdata CLI
//!
//! Regenerates the line-oriented catalogs the IC10 language server embeds
//! from a Stationeers data export.

mod cli_types;
mod commands;
mod error;
mod paths;

use clap::Parser;
use log::LevelFilter;

use cli_types::{Cli, Commands};
use commands::export::run_export;
use commands::legacy::run_legacy;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Export {
            path,
            patches,
            no_patches,
        } => run_export(&path, &cli.out, (!no_patches).then_some(patches)),
        Commands::Legacy {
            path,
            lang,
            prior_enums,
        } => run_legacy(&path, &lang, &cli.out, prior_enums),
    };

    if let Err(e) = result {
        log::error!("{}", e);
        if matches!(e, error::CliError::MissingInput(_)) {
            log::error!("Run 'stationdata --help' for usage.");
        }
        std::process::exit(1);
    }
}

/// Install the logger. `RUST_LOG` overrides the level picked from the flags.
fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).parse_default_env();
    if !verbose {
        builder.format_timestamp(None).format_target(false);
    }
    builder.init();
}
