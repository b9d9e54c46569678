use std::path::PathBuf;
use std::process::ExitCode;

use bosco_cli::{cmd_defaults, cmd_open, cmd_validate, render_report, OpenArgs};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

/// Bosco Gate Simulator
#[derive(Parser)]
#[command(name = "bosco-gate")]
#[command(version)]
#[command(about = "Evaluate Bosco Gate stability from throat, energy and timeline inputs")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the gate once and print the outcome
    Open(OpenArgs),
    /// Check a request file against the schema and control ranges
    Validate {
        /// Request file (YAML, or JSON by extension)
        path: PathBuf,
    },
    /// Print the default request as YAML
    Defaults,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let outcome = match cli.command {
        Commands::Open(args) => {
            cmd_open(&args).and_then(|report| render_report(&report, args.format))
        }
        Commands::Validate { path } => {
            cmd_validate(&path).map(|_| format!("{}: OK", path.display()))
        }
        Commands::Defaults => cmd_defaults(),
    };

    match outcome {
        Ok(text) => {
            println!("{}", text.trim_end());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
