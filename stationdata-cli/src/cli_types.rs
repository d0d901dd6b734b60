//! CLI type definitions: command enum and global flags.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use stationdata_export::legacy::DEFAULT_LOCALE;

#[derive(Parser)]
#[command(name = "stationdata")]
#[command(
    about = "Generate instruction, enum, and Stationpedia catalogs for the IC10 language server",
    long_about = None,
    after_help = "Point at the Stationeers install and go!"
)]
pub(crate) struct Cli {
    /// Directory the catalog files are written to
    #[arg(short, long, global = true, default_value = "data")]
    pub out: PathBuf,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Rebuild every catalog from Stationpedia.json and Enums.json
    Export {
        /// Stationeers install, or the directory holding Stationpedia.json and Enums.json
        path: PathBuf,

        /// Curated help patch file to overlay
        #[arg(long, default_value = "data/help_patches.json")]
        patches: PathBuf,

        /// Skip the help patch overlay
        #[arg(long)]
        no_patches: bool,
    },

    /// Rebuild help catalogs from the game's language XML
    Legacy {
        /// Stationeers install, a language directory, or the language XML file itself
        path: PathBuf,

        /// Language file to read (e.g., english, german)
        #[arg(short, long, default_value = DEFAULT_LOCALE)]
        lang: String,

        /// Previously generated enums.txt to recover logic type values from
        /// (default: <out>/enums.txt)
        #[arg(long)]
        prior_enums: Option<PathBuf>,
    },
}
