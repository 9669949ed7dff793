use crate::models::TransactionRecord;
use crate::types::RecordId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("Numeric overflow occurred while adding transaction [{transaction_id}]")]
    Overflow {
        transaction_id: RecordId
    },
    #[error("Numeric overflow occurred while computing the final balance")]
    BalanceOverflow
}

impl SummaryError {
    pub fn overflow(record: &TransactionRecord) -> Self {
        Self::Overflow { transaction_id: record.id().to_string() }
    }
}
