use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use trackrs::logging::init_logging;
use trackrs::{
    process_packages, AppConfig, LogFormat, OutputFormat, PackageEntry, TrackerError,
};

/// trackrs - Fitness tracker workout summaries
///
/// Turns raw sensor packages (step or stroke counts, duration, weight and
/// activity parameters) into distance, mean speed and calories burned.
#[derive(Parser)]
#[command(name = "trackrs")]
#[command(author = "trackrs Contributors")]
#[command(version)]
#[command(about = "Fitness tracker workout summaries", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase verbosity of log output (stderr)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Summary output format (text, json)
    #[arg(short, long)]
    output: Option<OutputFormat>,

    /// Log format (pretty, json, compact)
    #[arg(long)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize the configured sensor packages (default)
    Report,

    /// Summarize a single sensor package
    Calc {
        /// Workout code (RUN, WLK, SWM)
        code: String,

        /// Sensor values in order: action, duration, weight, then activity parameters
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let message = match err.downcast_ref::<TrackerError>() {
                Some(tracker_err) => tracker_err.user_message(),
                None => format!("{:#}", err),
            };
            eprintln!("{} {}", "error:".red().bold(), message);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from_file(path)?,
        None => AppConfig::default(),
    };

    config.logging.level = config.logging.level.raised_by(cli.verbose);
    if let Some(format) = cli.log_format {
        config.logging.format = format;
    }
    if let Some(output) = cli.output {
        config.output = output;
    }

    init_logging(&config.logging)?;

    if cli.verbose > 0 {
        eprintln!("{}", format!("Log level: {}", config.logging.level.to_filter()).dimmed());
    }

    let packages = match cli.command.unwrap_or(Commands::Report) {
        Commands::Report => config.packages,
        Commands::Calc { code, values } => vec![PackageEntry::new(code, values)],
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    process_packages(&packages, &mut handle, config.output).map_err(|err| {
        let severity = err.severity();
        if severity.to_tracing_level() == tracing::Level::ERROR {
            tracing::error!(error = %err, ?severity, "Run aborted");
        } else {
            tracing::warn!(error = %err, ?severity, "Run aborted");
        }
        err
    })?;

    Ok(())
}
