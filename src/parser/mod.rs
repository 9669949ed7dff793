mod errors;
mod record_parser;

pub use record_parser::{parse_fields, parse_ledger};
