use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::{ofx, StatementError};
use crate::models::{RawTransaction, Statement, TransactionRecord};

/// Loads one statement file into a flat, ordered list of records.
#[derive(Debug, Clone)]
pub(crate) struct StatementLoader {
    path: PathBuf,
}

impl StatementLoader {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Existence is checked before anything is read or parsed.
    pub(crate) fn load(&self) -> Result<Vec<TransactionRecord>, StatementError> {
        if !self.path.exists() {
            return Err(self.not_found());
        }
        let file = File::open(&self.path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => self.not_found(),
            _ => StatementError::from(e),
        })?;
        load_from_reader(file)
    }

    fn not_found(&self) -> StatementError {
        StatementError::NotFound {
            path: self.path.clone(),
        }
    }
}

/// Read statement text from any reader and normalize its transactions.
pub(crate) fn load_from_reader<R: Read>(
    mut reader: R,
) -> Result<Vec<TransactionRecord>, StatementError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let text = String::from_utf8(bytes)
        .map_err(|e| StatementError::Format(format!("statement is not valid UTF-8: {e}")))?;
    let statement = ofx::read_statement(&text)?;
    flatten(&statement)
}

/// Flatten accounts into one list: accounts in file order, then
/// transactions in statement order.
pub(crate) fn flatten(statement: &Statement) -> Result<Vec<TransactionRecord>, StatementError> {
    if statement.accounts.is_empty() {
        return Err(StatementError::Format(
            "no accounts found in the statement".into(),
        ));
    }
    if statement.transaction_count() == 0 {
        return Err(StatementError::Format(
            "no transactions found in the statement".into(),
        ));
    }

    let mut records = Vec::with_capacity(statement.transaction_count());
    for account in &statement.accounts {
        for (i, raw) in account.transactions.iter().enumerate() {
            let record = normalize(raw).map_err(|e| {
                let fitid = raw
                    .fitid
                    .as_deref()
                    .map(|id| format!(" (FITID {id})"))
                    .unwrap_or_default();
                StatementError::Unexpected(format!(
                    "{} account '{}' transaction {}{fitid}: {e:#}",
                    account.kind,
                    account.account_id,
                    i + 1
                ))
            })?;
            records.push(record);
        }
    }
    Ok(records)
}

fn normalize(raw: &RawTransaction) -> Result<TransactionRecord> {
    let posted = non_empty(raw.posted.as_deref()).context("missing DTPOSTED")?;
    let date = parse_posted_date(posted)?;

    let trn_type = non_empty(raw.trn_type.as_deref()).context("missing TRNTYPE")?;
    let kind = capitalize(trn_type);

    let amount_str = non_empty(raw.amount.as_deref()).context("missing TRNAMT")?;
    let amount = parse_amount(amount_str)?;

    let description = describe(raw).context("missing MEMO and NAME")?;

    Ok(TransactionRecord::new(date, kind, amount, description))
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

/// The memo is the description; banks that leave it out put the payee in NAME.
/// A memo tag that is present but empty still counts as a description.
fn describe(raw: &RawTransaction) -> Option<String> {
    non_empty(raw.memo.as_deref())
        .or_else(|| non_empty(raw.name.as_deref()))
        .or(raw.memo.as_deref())
        .map(|s| s.trim().to_string())
}

/// `YYYYMMDD[HHMMSS[.XXX]][[gmt offset:tz name]]`: only the calendar date is kept,
/// no timezone shifting.
fn parse_posted_date(s: &str) -> Result<NaiveDate> {
    let digits = s
        .get(..8)
        .with_context(|| format!("DTPOSTED too short: '{s}'"))?;
    NaiveDate::parse_from_str(digits, "%Y%m%d")
        .with_context(|| format!("Could not parse DTPOSTED '{s}'"))
}

fn parse_amount(s: &str) -> Result<Decimal> {
    let trimmed = s.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let cleaned = if !unsigned.contains('.') && unsigned.contains(',') {
        unsigned.replace(',', ".")
    } else {
        unsigned.to_string()
    };
    Decimal::from_str(&cleaned).with_context(|| format!("Failed to parse TRNAMT '{s}' as decimal"))
}

/// First character upper case, the rest lower case.
pub(crate) fn capitalize(s: &str) -> String {
    let lower = s.trim().to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
