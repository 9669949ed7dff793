
use std::fmt;
use std::fmt::{Display, Formatter};

use crate::summary::Summary;

const TITLE: &str = "Transaction Report";

/// Renders a summary as the plain-text report, one line per entry, newline-terminated.
pub fn render(summary: &Summary<'_>) -> String {
    ReportText(summary).to_string()
}

struct ReportText<'s, 'a>(&'s Summary<'a>);

impl Display for ReportText<'_, '_> {
    fn fmt(&self, output: &mut Formatter<'_>) -> fmt::Result {
        let summary = self.0;

        writeln!(output, "{TITLE}")?;
        writeln!(output, "{}", "-".repeat(TITLE.len()))?;
        writeln!(output, "Final Balance: {}", summary.balance)?;

        if let Some(largest) = summary.largest {
            writeln!(output, "Largest Transaction: ID {} with amount {}", largest.id(), largest.amount())?;
        }

        writeln!(output, "Transaction Count:")?;
        writeln!(output, "  Credits: {}", summary.credit_count)?;
        writeln!(output, "  Debits: {}", summary.debit_count)?;

        Ok(())
    }
}
