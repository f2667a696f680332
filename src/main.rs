//! modkit CLI - Mod Tools package exporter
//!
//! Usage: modkit <COMMAND>
//!
//! Commands:
//!   export      Build the Mod Tools package
//!   identifier  Print the identifier derived for each path
//!   manifest    List what an export would package

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use modkit::presentation::cli::{Cli, Commands};

mod commands;

/// Environment variable holding a tracing filter directive
const LOG_ENV: &str = "MODKIT_LOG";

/// Install the tracing subscriber.
///
/// Logs go to stderr so `--json` output on stdout stays machine-readable.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "modkit=info",
        1 => "modkit=debug",
        _ => "modkit=trace",
    };
    let directive = if verbose > 0 {
        default_level.to_string()
    } else {
        std::env::var(LOG_ENV)
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| default_level.to_string())
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(directive))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Export {
            project,
            output,
            product_name,
            runtime_version,
        } => commands::export::cmd_export(
            &project,
            &output,
            product_name,
            runtime_version,
            cli.json,
            cli.verbose,
        ),
        Commands::Identifier { paths } => commands::identifier::cmd_identifier(&paths, cli.json),
        Commands::Manifest { project } => {
            commands::manifest::cmd_manifest(&project, cli.json, cli.verbose)
        }
    }
}
