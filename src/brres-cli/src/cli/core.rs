//! Core CLI definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "brres")]
#[command(about = "Container BRRES extractor", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a container file into standalone .brres archives
    #[command(visible_alias = "x")]
    Extract {
        /// Container file to split
        input: PathBuf,

        /// Output directory (defaults to the configured one, then <input>_extracted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Sort archives into one folder per NW4R category
        #[arg(long, conflicts_with = "flat")]
        organize: bool,

        /// Write every archive to the top of the output directory
        #[arg(long)]
        flat: bool,

        /// Memory-map the input instead of reading it into memory
        #[arg(long)]
        mmap: bool,
    },

    /// List the archives a container holds without writing anything
    #[command(visible_alias = "s")]
    Scan {
        /// Container file to inspect
        input: PathBuf,

        /// Also report NW4R categories found in each archive
        #[arg(short, long)]
        classify: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Organize into category folders by default
        #[arg(long)]
        organize: Option<bool>,

        /// Set default output directory
        #[arg(long)]
        output: Option<PathBuf>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
