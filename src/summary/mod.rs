mod errors;

pub use errors::SummaryError;

use crate::models::{TransactionKind, TransactionRecord};
use crate::types::Monetary;
use tracing::trace;

/// Totals and counts computed over one ledger.
///
/// Borrows the records it was built from so the largest transaction is reported as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary<'a> {
    pub credit_total: Monetary,
    pub debit_total: Monetary,
    /// Credit total minus debit total.
    pub balance: Monetary,
    pub credit_count: usize,
    pub debit_count: usize,
    /// Record with the highest amount across all kinds. The earliest one wins a tie.
    pub largest: Option<&'a TransactionRecord>
}

impl<'a> Summary<'a> {
    /// Aggregates records in a single pass.
    ///
    /// # Errors
    /// Returns a `SummaryError` if a running total or the balance leaves the decimal range.
    pub fn from_records(records: &'a [TransactionRecord]) -> Result<Self, SummaryError> {
        let mut summary = Summary {
            credit_total: Monetary::ZERO,
            debit_total: Monetary::ZERO,
            balance: Monetary::ZERO,
            credit_count: 0,
            debit_count: 0,
            largest: None
        };

        for record in records {
            match record.kind() {
                TransactionKind::Credit => {
                    summary.credit_total = summary.credit_total.checked_add(record.amount())
                        .map_err(|_| SummaryError::overflow(record))?;
                    summary.credit_count += 1;
                }
                TransactionKind::Debit => {
                    summary.debit_total = summary.debit_total.checked_add(record.amount())
                        .map_err(|_| SummaryError::overflow(record))?;
                    summary.debit_count += 1;
                }
                TransactionKind::Other(label) => {
                    trace!("Transaction [{}] has unrecognized kind [{label}]", record.id());
                }
            }

            // Strictly greater keeps the first of equal amounts.
            if summary.largest.is_none_or(|largest| record.amount() > largest.amount()) {
                summary.largest = Some(record);
            }
        }

        summary.balance = summary.credit_total.checked_sub(summary.debit_total)
            .map_err(|_| SummaryError::BalanceOverflow)?;

        Ok(summary)
    }
}
