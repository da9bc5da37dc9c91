use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::Category;

/// One normalized statement movement.
///
/// Everything but `category` is fixed at load time; `category` is filled in
/// once by the categorizer through [`TransactionRecord::with_category`].
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    pub date: NaiveDate,
    /// Transaction type as reported by the bank, e.g. "Debit". Open set.
    pub kind: String,
    pub amount: Decimal,
    pub description: String,
    pub category: Option<Category>,
}

impl TransactionRecord {
    pub fn new(date: NaiveDate, kind: String, amount: Decimal, description: String) -> Self {
        Self {
            date,
            kind,
            amount,
            description,
            category: None,
        }
    }

    pub fn with_category(self, category: Category) -> Self {
        Self {
            category: Some(category),
            ..self
        }
    }

    /// Format: "YYYY-MM-DD"
    pub fn date_string(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn is_income(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    pub fn is_expense(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    pub fn category_name(&self) -> &'static str {
        self.category.map(|c| c.name()).unwrap_or("—")
    }
}
