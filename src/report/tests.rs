#![allow(clippy::unwrap_used)]

use super::export::write_csv;
use super::*;
use chrono::NaiveDate;
use rust_decimal_macros::dec;

fn make_record(amount: Decimal, category: Option<Category>) -> TransactionRecord {
    let rec = TransactionRecord::new(
        NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
        "Debit".into(),
        amount,
        "Test".into(),
    );
    match category {
        Some(c) => rec.with_category(c),
        None => rec,
    }
}

// ── spending_by_category ──────────────────────────────────────

#[test]
fn test_spending_sums_outflows_as_positive() {
    let records = vec![
        make_record(dec!(-50.00), Some(Category::Food)),
        make_record(dec!(-25.50), Some(Category::Food)),
        make_record(dec!(-10.00), Some(Category::Transport)),
    ];
    let spending = spending_by_category(&records);
    assert_eq!(
        spending,
        vec![
            (Category::Food, dec!(75.50)),
            (Category::Transport, dec!(10.00)),
        ]
    );
}

#[test]
fn test_spending_ignores_inflows() {
    let records = vec![
        make_record(dec!(-50.00), Some(Category::Food)),
        make_record(dec!(20.00), Some(Category::Food)),
    ];
    // Refunds do not offset spending.
    assert_eq!(spending_by_category(&records), vec![(Category::Food, dec!(50.00))]);
}

#[test]
fn test_spending_excludes_categories_without_outflows() {
    let records = vec![
        make_record(dec!(1000.00), Some(Category::Income)),
        make_record(Decimal::ZERO, Some(Category::Other)),
        make_record(dec!(-5.00), Some(Category::Phone)),
    ];
    let spending = spending_by_category(&records);
    assert_eq!(spending, vec![(Category::Phone, dec!(5.00))]);
}

#[test]
fn test_spending_skips_uncategorized() {
    let records = vec![make_record(dec!(-5.00), None)];
    assert!(spending_by_category(&records).is_empty());
}

#[test]
fn test_spending_sorted_by_label() {
    let records = vec![
        make_record(dec!(-1), Some(Category::Other)),
        make_record(dec!(-1), Some(Category::Housing)),
        make_record(dec!(-1), Some(Category::Food)),
        make_record(dec!(-1), Some(Category::Grocery)),
    ];
    let names: Vec<&str> = spending_by_category(&records)
        .iter()
        .map(|(c, _)| c.name())
        .collect();
    assert_eq!(names, vec!["Alimentação", "Mercado", "Moradia", "Outros"]);
}

#[test]
fn test_spending_does_not_mutate_input() {
    let records = vec![make_record(dec!(-5.00), Some(Category::Food))];
    let before = records.clone();
    let _ = spending_by_category(&records);
    assert_eq!(records, before);
}

#[test]
fn test_spending_empty() {
    assert!(spending_by_category(&[]).is_empty());
}

// ── totals ────────────────────────────────────────────────────

#[test]
fn test_totals() {
    let records = vec![
        make_record(dec!(1000.00), Some(Category::Income)),
        make_record(dec!(-50.00), Some(Category::Food)),
        make_record(dec!(-25.00), Some(Category::Transport)),
        make_record(Decimal::ZERO, Some(Category::Other)),
    ];
    let t = totals(&records);
    assert_eq!(t.income, dec!(1000.00));
    assert_eq!(t.expenses, dec!(-75.00));
    assert_eq!(t.net(), dec!(925.00));
    assert_eq!(t.count, 4);
}

#[test]
fn test_totals_empty() {
    let t = totals(&[]);
    assert_eq!(t, Totals::default());
    assert_eq!(t.net(), Decimal::ZERO);
}

// ── write_csv ─────────────────────────────────────────────────

#[test]
fn test_write_csv() {
    let records = vec![
        make_record(dec!(-50.00), Some(Category::Food)),
        make_record(dec!(1000.00), None),
    ];
    let mut out = Vec::new();
    let count = write_csv(&records, &mut out).unwrap();
    assert_eq!(count, 2);
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "date,type,amount,description,category");
    assert_eq!(lines[1], "2025-04-01,Debit,-50.00,Test,Alimentação");
    assert_eq!(lines[2], "2025-04-01,Debit,1000.00,Test,");
}

#[test]
fn test_write_csv_quotes_commas() {
    let rec = TransactionRecord::new(
        NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
        "Debit".into(),
        dec!(-1),
        "PADARIA, CENTRO".into(),
    );
    let mut out = Vec::new();
    write_csv(&[rec], &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("\"PADARIA, CENTRO\""));
}

#[test]
fn test_export_to_csv_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let records = vec![make_record(dec!(-5.00), Some(Category::Phone))];
    assert_eq!(export_to_csv(&records, &path).unwrap(), 1);
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("Telefone"));
}
