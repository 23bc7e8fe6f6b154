//! Fixturegen CLI - builds conformance test scripts from JavaScript fragments

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "fixturegen")]
#[command(version)]
#[command(about = "Conformance test fixture generator - merges JavaScript test fragments")]
#[command(long_about = r#"
Fixturegen merges the top-level variables and functions of several JavaScript
files into the single main.js of a conformance test fixture (HbbTV or W3C).

Files are merged in the order given: plain variables are overridden by later
files, functions are kept from the first file that defines them.

Example usage:
  fixturegen merge --base base/hbbtv.js tests/TEST_001/main.js --output out/TEST_001/
  fixturegen check base/hbbtv.js
  fixturegen inspect tests/TEST_001/main.js
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the config file
    #[arg(short, long, global = true, default_value = "fixturegen.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge fragments into one test script
    Merge {
        /// JavaScript files, in merge order
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output file or directory (main.js is used inside a directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Base fragment merged ahead of the files (repeatable)
        #[arg(short, long)]
        base: Vec<PathBuf>,
    },

    /// Merge and validate without writing
    Check {
        /// JavaScript files, in merge order
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Treat missing entry points as errors instead of warnings
        #[arg(short, long)]
        strict: bool,

        /// Emit JSON instead of human output
        #[arg(long)]
        json: bool,
    },

    /// List the bindings extracted from one file
    Inspect {
        /// JavaScript file
        file: PathBuf,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Write a default config file
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Print the version
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();

    match cli.command {
        Commands::Merge { files, output, base } => {
            let config = commands::load(&cli.config)?;
            commands::run_merge(&config, &files, output, base)
        }
        Commands::Check { files, strict, json } => {
            let config = commands::load(&cli.config)?;
            commands::run_check(&config, &files, strict, json)
        }
        Commands::Inspect { file, json } => commands::run_inspect(&file, json),
        Commands::Init { force } => commands::run_init(&cli.config, force),
        Commands::Version => commands::run_version(),
    }
}
