//! dvcalc command-line interface

use clap::{Parser, Subcommand};
use dvcalc::cli::{clause, evaluate, filter, inspect, output};
use std::path::PathBuf;

/// Data value calculator
#[derive(Parser)]
#[command(name = "dvcalc")]
#[command(author, version, about = "Filter and aggregate data values", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (json, table, pretty)
    #[arg(short = 'f', long, global = true)]
    format: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    color: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter a data file and aggregate the matching values
    Evaluate {
        /// Data file (JSON array, or object with a `dataValues` array)
        #[arg(short, long)]
        data: PathBuf,

        /// Filters (key=value), applied in order
        #[arg(short = 'w', long = "where", value_name = "KEY=VALUE", long_help = filter_help())]
        filters: Vec<String>,

        /// Aggregation type (SUM, AVERAGE, MAX, MIN, ...)
        #[arg(short, long)]
        aggregation: Option<String>,

        /// Keep an empty period narrowing instead of re-querying
        #[arg(long)]
        strict_period: bool,

        /// Fail on empty or malformed data instead of printing 0
        #[arg(long)]
        strict: bool,
    },

    /// Show the data points left by the filters
    Inspect {
        /// Data file (JSON array, or object with a `dataValues` array)
        #[arg(short, long)]
        data: PathBuf,

        /// Filters (key=value), applied in order
        #[arg(short = 'w', long = "where", value_name = "KEY=VALUE", long_help = filter_help())]
        filters: Vec<String>,

        /// Keep an empty period narrowing instead of re-querying
        #[arg(long)]
        strict_period: bool,
    },

    /// Print the where clauses the filters send to a store
    Where {
        /// Filters (key=value)
        #[arg(short = 'w', long = "where", value_name = "KEY=VALUE", long_help = filter_help())]
        filters: Vec<String>,
    },
}

fn filter_help() -> String {
    format!("Filters (key=value), applied in order. Keys: {}", filter::FILTER_KEYS)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    output::setup_colors(&cli.color);
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Evaluate {
            data,
            filters,
            aggregation,
            strict_period,
            strict,
        } => {
            let config = evaluate::EvaluateConfig {
                data,
                filters,
                aggregation,
                strict_period,
                strict,
                verbose: cli.verbose,
                output_format: cli.format.clone(),
                output_file: cli.output.clone(),
            };
            evaluate::evaluate(config)
        }

        Commands::Inspect {
            data,
            filters,
            strict_period,
        } => {
            let config = inspect::InspectConfig {
                data,
                filters,
                strict_period,
                output_format: cli.format.clone(),
                output_file: cli.output.clone(),
            };
            inspect::inspect(config)
        }

        Commands::Where { filters } => {
            let config = clause::ClauseConfig {
                filters,
                output_format: cli.format.clone(),
                output_file: cli.output.clone(),
            };
            clause::render(config)
        }
    };

    if let Err(e) = result {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}
