//! CLI Argument Parsing
//!
//! Global flags (--json, --verbose) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// modkit - packages a game's modding API into a Mod Tools archive
#[derive(Parser, Debug)]
#[command(name = "modkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the Mod Tools package
    Export {
        /// Project root
        #[arg(short, long, default_value = ".")]
        project: PathBuf,

        /// Directory the package is written to
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Product name (defaults to config, then the project directory name)
        #[arg(long)]
        product_name: Option<String>,

        /// Runtime version (defaults to config, then ProjectVersion.txt)
        #[arg(long)]
        runtime_version: Option<String>,
    },

    /// Print the identifier derived for each path
    Identifier {
        /// Files to derive identifiers for
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// List what an export would package, without touching anything
    Manifest {
        /// Project root
        #[arg(short, long, default_value = ".")]
        project: PathBuf,
    },
}
