mod models;
mod parser;
mod pipeline;
mod report;
mod summary;
mod types;

use std::io::{stderr, stdin, stdout, BufRead, BufWriter, Write};
use std::process::exit;

use anyhow::{Context, Result};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 3 {
        eprintln!("Usage: transaction-report [ledger_path:optional] [log_level:optional]");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    let log_level = args.get(2)
        .map(|s| parse_log_level(s)).unwrap_or_else(|| LevelFilter::ERROR);

    setup_logging(log_level);

    let path = match args.get(1) {
        Some(path) => path.clone(),
        None => prompt_for_path()?
    };

    let mut output = BufWriter::new(stdout().lock());

    //NOTE: Every pipeline outcome is reported on stdout and the process still exits successfully
    match pipeline::run(&path) {
        Ok(outcome) => write!(output, "{outcome}")?,
        Err(error) => writeln!(output, "{error}")?
    }

    output.flush()?;

    Ok(())
}

fn prompt_for_path() -> Result<String> {
    let mut output = stdout().lock();
    writeln!(output, "Please enter the path of the ledger file:")?;
    output.flush()?;

    let mut line = String::new();
    stdin().lock().read_line(&mut line).context("Failed to read the ledger path from stdin")?;

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the report, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
