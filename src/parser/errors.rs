use thiserror::Error;

use crate::types::MonetaryError;

/// Reasons a ledger line is dropped. These never leave the parser; they only feed the debug log.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Expected 3 fields but found {found}")]
    FieldCount {
        found: usize
    },
    #[error("Invalid amount: {0}")]
    Amount(#[from] MonetaryError)
}
