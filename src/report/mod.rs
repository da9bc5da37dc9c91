mod export;

use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::models::{Category, TransactionRecord};

pub(crate) use export::export_to_csv;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct Totals {
    pub(crate) income: Decimal,
    /// Sum of outflows, negative or zero.
    pub(crate) expenses: Decimal,
    pub(crate) count: usize,
}

impl Totals {
    pub(crate) fn net(&self) -> Decimal {
        self.income + self.expenses
    }
}

/// Outflows per category as positive magnitudes, for the spending chart.
///
/// Only amounts below zero count. Categories without any outflow are left
/// out rather than reported as zero. Sorted by category label.
pub(crate) fn spending_by_category(records: &[TransactionRecord]) -> Vec<(Category, Decimal)> {
    let mut sums: HashMap<Category, Decimal> = HashMap::new();
    for rec in records.iter().filter(|r| r.is_expense()) {
        if let Some(category) = rec.category {
            *sums.entry(category).or_insert(Decimal::ZERO) += rec.amount;
        }
    }

    let mut spending: Vec<(Category, Decimal)> =
        sums.into_iter().map(|(c, total)| (c, total.abs())).collect();
    spending.sort_by(|a, b| a.0.name().cmp(b.0.name()));
    spending
}

pub(crate) fn totals(records: &[TransactionRecord]) -> Totals {
    records.iter().fold(
        Totals {
            count: records.len(),
            ..Totals::default()
        },
        |mut acc, rec| {
            if rec.is_income() {
                acc.income += rec.amount;
            } else if rec.is_expense() {
                acc.expenses += rec.amount;
            }
            acc
        },
    )
}

#[cfg(test)]
mod tests;
