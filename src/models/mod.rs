mod transaction;

pub use transaction::TransactionRecord;

/// Category of a ledger row. Only credits and debits take part in the report;
/// every other label is kept verbatim under `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionKind {
    Credit,
    Debit,
    Other(String)
}

impl TransactionKind {
    /// Maps a trimmed kind label to its category. Matching is exact and case-sensitive.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Crédito" | "Credito" | "Credit" => TransactionKind::Credit,
            "Débito" | "Debito" | "Debit" => TransactionKind::Debit,
            other => TransactionKind::Other(other.to_string())
        }
    }
}
