//! sdobjects - SNES Doom objects converter
//!
//! Reads OBJECTS lumps extracted from the SNES port of Doom and converts them
//! to PC Doom THINGS lumps.
//!
//! # Usage
//!
//! ```bash
//! # Dump every object in a lump as JSON
//! sdobjects --print --file OBJECTS.01
//!
//! # Convert a directory of lumps into THINGS.xx files
//! sdobjects --out things --dir objects
//! ```
//!
//! Options can also be set in `sdobjects.toml` (see `config`).

mod batch;
mod config;
mod naming;

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use snes_objects::UnknownTypePolicy;
use tracing_subscriber::EnvFilter;

use crate::batch::BatchOptions;

/// Banner printed when not listing objects
const BANNER: &str = "sdobjects - SNES Doom objects converter program";

#[derive(Parser, Debug)]
#[command(name = "sdobjects")]
#[command(about = "Convert SNES Doom OBJECTS lumps to PC Doom THINGS lumps")]
#[command(version)]
struct Cli {
    /// Print a JSON listing of each input's objects to stdout
    #[arg(long)]
    print: bool,

    /// Write THINGS lumps into this directory (created if missing)
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,

    /// OBJECTS lump files to process
    #[arg(long = "file", value_name = "FILE", num_args = 1..)]
    files: Vec<PathBuf>,

    /// Directories whose files are all processed (not recursive)
    #[arg(long = "dir", value_name = "DIR", num_args = 1..)]
    dirs: Vec<PathBuf>,

    /// Handling of objects with no PC equivalent: reject or skip
    #[arg(long, value_name = "POLICY")]
    unknown_types: Option<UnknownTypePolicy>,

    /// Configuration file (defaults to ./sdobjects.toml, then the user config dir)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = config::load(cli.config.as_deref())?;

    let print = cli.print || config.print;
    if !print {
        println!("{}\n", BANNER);
    }

    let options = BatchOptions {
        print,
        output_dir: cli.out.or(config.output.directory),
        unknown_types: cli.unknown_types.unwrap_or(config.output.unknown_types),
    };

    let summary = batch::run(&cli.files, &cli.dirs, options);
    tracing::info!(
        "Processed {} file(s): {} unreadable, {} THINGS written, {} failed",
        summary.processed,
        summary.unreadable,
        summary.written,
        summary.failed_writes
    );

    Ok(())
}

/// Log to stderr so `--print` output on stdout stays valid JSON
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}
