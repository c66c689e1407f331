//! CLI entry point for the knight's tour search.
//!
//! Usage:
//!   knights-tour [COL ROW] [options]
//!
//! Options:
//!   --test                 Run the built-in checks instead of a search
//!   --format <fmt>         Output format: text or json (default: text)
//!   --cost-model <model>   Cost counter: reference or evaluated (default: reference)
//!   --log-level <level>    Diagnostics on stderr (default: warn)

use std::process;

use clap::{Parser, ValueEnum};
use log::{error, info};

use knights_tour::logging::{init_logger, LogLevel};
use knights_tour::selftest::run_self_tests;
use knights_tour::{
    find_tour_with, format_report, Coordinate, CostModel, TourConfig, TourReport, DEFAULT_START,
};

#[derive(Parser)]
#[command(name = "knights-tour")]
#[command(about = "Find a knight's tour on an 8x8 board using Warnsdorff's rule")]
#[command(version)]
struct Cli {
    /// Starting column (0-7, default 0)
    #[arg(allow_negative_numbers = true, requires = "row")]
    col: Option<i32>,

    /// Starting row (0-7, default 1)
    #[arg(allow_negative_numbers = true)]
    row: Option<i32>,

    /// Run the built-in checks instead of searching
    #[arg(long)]
    test: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// How the search cost counter is accumulated
    #[arg(long, value_enum, default_value_t = CostModel::Reference)]
    cost_model: CostModel,

    /// Log verbosity on stderr
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logger(cli.log_level) {
        eprintln!("Error initialising logger: {}", e);
        process::exit(1);
    }

    if cli.test {
        let outcomes = run_self_tests();
        let mut failed = 0;
        for outcome in &outcomes {
            if outcome.passed {
                println!("{} ... ok", outcome.name);
            } else {
                println!("{} ... FAILED", outcome.name);
                failed += 1;
            }
        }
        println!("{} passed; {} failed", outcomes.len() - failed, failed);
        process::exit(if failed == 0 { 0 } else { 1 });
    }

    let start = match (cli.col, cli.row) {
        (Some(col), Some(row)) => Coordinate::new(col, row),
        _ => DEFAULT_START,
    };

    let config = TourConfig {
        cost_model: cli.cost_model,
    };

    info!("searching from {} with {:?} cost model", start, config.cost_model);
    let result = match find_tour_with(start, &config) {
        Ok(r) => r,
        Err(e) => {
            error!("rejected start {}", start);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    info!("search finished, path length {}", result.path.len());

    match cli.format {
        OutputFormat::Text => println!("{}", format_report(&result)),
        OutputFormat::Json => match serde_json::to_string_pretty(&TourReport::from(&result)) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serialising report: {}", e);
                process::exit(1);
            }
        },
    }
}
