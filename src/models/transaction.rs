use crate::models::TransactionKind;
use crate::types::{Monetary, RecordId};

/// A single validated ledger row.
///
/// Fields are private so a record cannot change after the parser builds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    /// Opaque identifier; uniqueness is not checked.
    id: RecordId,
    /// Category derived from the kind label.
    kind: TransactionKind,
    /// Signed exact amount.
    amount: Monetary
}

impl TransactionRecord {
    pub fn new(id: impl Into<RecordId>, kind: TransactionKind, amount: Monetary) -> Self {
        Self {
            id: id.into(),
            kind,
            amount
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> &TransactionKind {
        &self.kind
    }

    pub fn amount(&self) -> Monetary {
        self.amount
    }
}
