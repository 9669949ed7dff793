use crate::parser::parse_ledger;
use crate::pipeline::errors::PipelineError;
use crate::report::render;
use crate::summary::Summary;
use anyhow::Context;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Result of a run that reached the parsing stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Rendered report text.
    Report(String),
    /// The file was read but held no valid transactions.
    NoTransactions
}

impl Display for Outcome {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Report(report) => formatter.write_str(report),
            Outcome::NoTransactions => writeln!(formatter, "no transactions found in the file")
        }
    }
}

/// Runs the whole report pipeline for the ledger at `path`.
///
/// The path is checked before anything is read: an empty path fails without touching the
/// file system, and a path that is not an existing file fails without reading. The report
/// is produced only when every step succeeds.
pub fn run(path: &str) -> Result<Outcome, PipelineError> {
    validate_path(path)?;

    let contents = read_ledger(path)?;
    let records = parse_ledger(&contents);

    info!("Parsed {} transactions from {path}", records.len());

    if records.is_empty() {
        return Ok(Outcome::NoTransactions);
    }

    let summary = Summary::from_records(&records).map_err(anyhow::Error::from)?;

    debug!("Credits [{}]:[{}] Debits [{}]:[{}]", summary.credit_count, summary.credit_total, summary.debit_count, summary.debit_total);

    Ok(Outcome::Report(render(&summary)))
}

fn validate_path(path: &str) -> Result<(), PipelineError> {
    if path.is_empty() {
        return Err(PipelineError::EmptyPath);
    }

    if !Path::new(path).is_file() {
        return Err(PipelineError::FileNotFound { path: path.to_string() });
    }

    Ok(())
}

/// Reads the whole file in one go; the handle is closed before parsing starts.
fn read_ledger(path: &str) -> anyhow::Result<String> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {path}"))?;

    let contents = match String::from_utf8(bytes) {
        Ok(contents) => contents,
        Err(error) => {
            warn!("Ledger at {path} is not valid UTF-8, invalid bytes were replaced");
            String::from_utf8_lossy(error.as_bytes()).into_owned()
        }
    };

    Ok(contents)
}
