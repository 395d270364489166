//! Planshot - photographed plans to calendar events
//!
//! Main entry point for the command-line application.

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod commands;
mod context;
mod observer;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use planshot_domain::{PipelineMode, PlanshotError};
use tracing_subscriber::EnvFilter;

use crate::context::AppContext;

#[derive(Parser, Debug)]
#[command(name = "planshot", version, about = "Turn a photo of a plan into calendar events")]
struct Cli {
    /// Config file (TOML or JSON); probed in the working directory when omitted
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract tasks from an image and add them to the calendar
    Run {
        /// JPEG or PNG image of the plan
        image: PathBuf,

        /// one-shot or review; defaults to the configured mode
        #[arg(long, value_name = "MODE")]
        mode: Option<PipelineMode>,

        /// Confirm the review without prompting
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Extract and parse tasks only, printing them as JSON
    Extract {
        /// JPEG or PNG image of the plan
        image: PathBuf,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // .env before logging so RUST_LOG from the file applies
    let dotenv = dotenvy::dotenv();
    init_logging(cli.verbose);
    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(err) => tracing::debug!(error = %err, "no .env loaded"),
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprint!("{}", error_report(&err));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = planshot_infra::config::load(cli.config)?;
    let ctx = AppContext::new(config)?;

    match cli.command {
        Commands::Run { image, mode, yes } => {
            let mode = mode.unwrap_or(ctx.config.pipeline.mode);
            commands::run::execute(&ctx, &image, mode, yes).await
        }
        Commands::Extract { image } => commands::extract::execute(&ctx, &image).await,
    }
}

/// Text printed for a failed command. Events created before a sync failure
/// stay in the calendar, so the report says how many.
fn error_report(err: &anyhow::Error) -> String {
    let mut report = format!("Error: {err:#}\n");
    let created = err.downcast_ref::<PlanshotError>().map_or(0, PlanshotError::events_created);
    if created > 0 {
        report.push_str(&format!(
            "{created} event(s) were already added and were kept; running again will add them twice.\n"
        ));
    }
    report
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
