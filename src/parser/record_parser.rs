use crate::models::{TransactionKind, TransactionRecord};
use crate::parser::errors::RecordError;
use crate::types::Monetary;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::str::FromStr;
use tracing::debug;

const DELIMITER: u8 = b';';
const FIELD_COUNT: usize = 3;

/// Parses the full text of a ledger into records, in input order.
///
/// The first line is a header and is dropped before any splitting happens, whatever it contains.
/// Every other line must be `id;kind;amount`. Lines with the wrong number of fields or an
/// amount that is not a decimal number are skipped silently (logged at debug level).
pub fn parse_ledger(contents: &str) -> Vec<TransactionRecord> {
    let Some(body) = skip_header(contents) else {
        return Vec::new();
    };

    //NOTE: Quoting is disabled so the reader behaves as a plain split on the delimiter
    let mut reader = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(body.as_bytes());

    let mut records = Vec::new();

    for result in reader.records() {
        match result {
            Ok(fields) => match parse_fields(&fields) {
                Ok(record) => records.push(record),
                Err(error) => debug!("Skipping ledger line {}: {error}", line_number(&fields))
            },
            Err(error) => debug!("Skipping unreadable ledger line: {error}")
        }
    }

    records
}

// Cuts at the first `\r\n`, `\r` or `\n`, the same terminators the reader uses for the body.
fn skip_header(contents: &str) -> Option<&str> {
    let end = contents.find(['\r', '\n'])?;
    let rest = &contents[end..];

    Some(rest.strip_prefix("\r\n").unwrap_or(&rest[1..]))
}

// Position is relative to the body, so the header line is added back.
fn line_number(fields: &StringRecord) -> u64 {
    fields.position().map_or(0, |position| position.line() + 1)
}

/// Validates one already-split ledger line and builds its record.
pub fn parse_fields(fields: &StringRecord) -> Result<TransactionRecord, RecordError> {
    if fields.len() != FIELD_COUNT {
        return Err(RecordError::FieldCount { found: fields.len() });
    }

    let amount = Monetary::from_str(fields[2].trim())?;
    let kind = TransactionKind::from_label(fields[1].trim());

    Ok(TransactionRecord::new(fields[0].trim(), kind, amount))
}
