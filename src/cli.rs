//! CLI definitions and entry point

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::commands;
use trainreport::config::ReportOverrides;
use trainreport::models::parse_date;
use trainreport::output::OutputMode;

/// trainreport - Training completion, fiscal-year and expiry reports
#[derive(Parser, Debug)]
#[command(
    name = "trainreport",
    version,
    about = "Training completion, fiscal-year and expiry reports",
    long_about = "Turn a JSON roster of people and their completed trainings into reports.\n\n\
                  Writes completion counts per training, graduates per training within a \
                  fiscal year, and each person's expired or soon-expiring trainings."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output the run summary in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to ./trainreport.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate all three reports
    Generate {
        #[command(flatten)]
        io: IoArgs,

        #[command(flatten)]
        expiry: ExpiryArgs,

        #[command(flatten)]
        fiscal: FiscalArgs,
    },

    /// Count graduates per training
    Counts {
        #[command(flatten)]
        io: IoArgs,
    },

    /// List graduates of selected trainings within a fiscal year
    Graduates {
        #[command(flatten)]
        io: IoArgs,

        #[command(flatten)]
        fiscal: FiscalArgs,
    },

    /// List people with expired or soon-expiring trainings
    Expiring {
        #[command(flatten)]
        io: IoArgs,

        #[command(flatten)]
        expiry: ExpiryArgs,
    },

    /// Show version
    Version,
}

/// Input and output locations
#[derive(Args, Debug, Default)]
pub struct IoArgs {
    /// Training data file (JSON array of people)
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Directory to write reports into
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Expiry report parameters
#[derive(Args, Debug, Default)]
pub struct ExpiryArgs {
    /// Reference date for expiry checks, MM/DD/YYYY (defaults to today)
    #[arg(short, long, value_parser = parse_date)]
    pub expiry_date: Option<NaiveDate>,
}

/// Fiscal-year report parameters
#[derive(Args, Debug, Default)]
pub struct FiscalArgs {
    /// Fiscal year, July 1 of the prior year to June 30 (defaults to the current one)
    #[arg(short = 'y', long)]
    pub fiscal_year: Option<i32>,

    /// Trainings to report on
    #[arg(short, long, value_delimiter = ',')]
    pub trainings: Vec<String>,
}

impl Command {
    /// Collect the report parameters given on the command line
    fn overrides(self) -> ReportOverrides {
        let (io, expiry, fiscal) = match self {
            Self::Generate { io, expiry, fiscal } => (io, expiry, fiscal),
            Self::Counts { io } => (io, ExpiryArgs::default(), FiscalArgs::default()),
            Self::Graduates { io, fiscal } => (io, ExpiryArgs::default(), fiscal),
            Self::Expiring { io, expiry } => (io, expiry, FiscalArgs::default()),
            Self::Version => (IoArgs::default(), ExpiryArgs::default(), FiscalArgs::default()),
        };

        ReportOverrides {
            data: io.data,
            output_dir: io.output,
            fiscal_year: fiscal.fiscal_year,
            expiry_date: expiry.expiry_date,
            trainings: fiscal.trainings,
        }
    }
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = cli.config.as_deref();

    match cli.command {
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("trainreport v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        Some(command @ Command::Generate { .. }) => {
            commands::generate(config, command.overrides(), output_mode)
        },
        Some(command @ Command::Counts { .. }) => {
            commands::counts(config, command.overrides(), output_mode)
        },
        Some(command @ Command::Graduates { .. }) => {
            commands::graduates(config, command.overrides(), output_mode)
        },
        Some(command @ Command::Expiring { .. }) => {
            commands::expiring(config, command.overrides(), output_mode)
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("trainreport v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'trainreport --help' for usage");
                println!("Run 'trainreport generate --data <file>' to write all reports");
            }
            Ok(())
        },
    }
}
