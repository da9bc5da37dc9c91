//! Raw statement structure as read from the file, before normalization.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Bank,
    CreditCard,
}

impl AccountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bank => "Bank",
            Self::CreditCard => "Credit Card",
        }
    }
}

impl std::fmt::Display for AccountKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Statement {
    pub accounts: Vec<StatementAccount>,
}

impl Statement {
    pub fn transaction_count(&self) -> usize {
        self.accounts.iter().map(|a| a.transactions.len()).sum()
    }
}

#[derive(Debug, Clone)]
pub struct StatementAccount {
    pub account_id: String,
    pub kind: AccountKind,
    pub transactions: Vec<RawTransaction>,
}

/// `STMTTRN` tag values exactly as found. Missing tags are `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTransaction {
    pub trn_type: Option<String>,
    pub posted: Option<String>,
    pub amount: Option<String>,
    pub fitid: Option<String>,
    pub name: Option<String>,
    pub memo: Option<String>,
}
