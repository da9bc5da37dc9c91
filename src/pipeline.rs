use rust_decimal::Decimal;

use crate::categorize::Categorizer;
use crate::import::{StatementError, StatementLoader};
use crate::models::{Category, TransactionRecord};
use crate::report;

/// Everything the presentation layer needs for one render.
#[derive(Debug, Clone, Default)]
pub(crate) struct Dashboard {
    pub(crate) transactions: Vec<TransactionRecord>,
    pub(crate) spending: Vec<(Category, Decimal)>,
    pub(crate) totals: report::Totals,
}

impl Dashboard {
    pub(crate) fn from_records(transactions: Vec<TransactionRecord>) -> Self {
        let spending = report::spending_by_category(&transactions);
        let totals = report::totals(&transactions);
        Self {
            transactions,
            spending,
            totals,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

/// Load the statement, categorize it, derive the chart data. Each call
/// builds a fresh dashboard; nothing is shared between runs.
pub(crate) fn run(
    loader: &StatementLoader,
    categorizer: &Categorizer,
) -> Result<Dashboard, StatementError> {
    let records = loader.load()?;
    let categorized = categorizer.categorize_batch(&records);
    Ok(Dashboard::from_records(categorized))
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
