#![allow(clippy::unwrap_used)]

use super::*;
use chrono::NaiveDate;
use rust_decimal_macros::dec;

fn make_rule(category: Category, keywords: &[&str]) -> CategoryRule {
    CategoryRule::new(category, keywords)
}

fn make_record(desc: &str) -> TransactionRecord {
    TransactionRecord::new(
        NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
        "Debit".into(),
        dec!(-10.00),
        desc.into(),
    )
}

// ── Categorizer ───────────────────────────────────────────────

#[test]
fn test_categorize_contains_match() {
    let cat = Categorizer::default();
    assert_eq!(cat.categorize("PADARIA CENTRO"), Category::Food);
    assert_eq!(cat.categorize("PIX RECEBIDO JOAO"), Category::Income);
}

#[test]
fn test_categorize_case_insensitive() {
    let cat = Categorizer::default();
    assert_eq!(cat.categorize("Pizzaria do Bairro"), Category::Food);
    assert_eq!(cat.categorize("pizzaria do bairro"), Category::Food);
    assert_eq!(cat.categorize("farmácia popular"), Category::Health);
    assert_eq!(cat.categorize("Posto Shell"), Category::Transport);
}

#[test]
fn test_categorize_accented_keywords_need_accents() {
    let cat = Categorizer::default();
    assert_eq!(cat.categorize("Condomínio Edifício Sol"), Category::Housing);
    assert_eq!(cat.categorize("Conta de água"), Category::Housing);
    // "FARMACIA" without the accent is not a keyword.
    assert_eq!(cat.categorize("FARMACIA"), Category::Other);
}

#[test]
fn test_categorize_every_default_rule() {
    let cat = Categorizer::default();
    for (category, keywords) in DEFAULT_RULES {
        for keyword in *keywords {
            let expected = cat.categorize(keyword);
            // A keyword maps to its own category unless an earlier rule also matches it.
            let earlier = DEFAULT_RULES
                .iter()
                .take_while(|(c, _)| c != category)
                .any(|(_, ks)| ks.iter().any(|k| keyword.contains(k)));
            if !earlier {
                assert_eq!(expected, *category, "keyword {keyword}");
            }
        }
    }
}

#[test]
fn test_categorize_earlier_rule_shadows_keyword() {
    let cat = Categorizer::default();
    // "PAGAMENTO RECEBIDO" contains "RECEBIDO", both Income.
    assert_eq!(cat.categorize("PAGAMENTO RECEBIDO"), Category::Income);
    // "SUPERMERCADO" matches Grocery before Shopping's "COMPRA" is tried.
    assert_eq!(cat.categorize("COMPRA SUPERMERCADO"), Category::Grocery);
}

#[test]
fn test_categorize_first_match_wins() {
    let cat = Categorizer::default();
    assert_eq!(cat.categorize("SUPERMERCADO RESTAURANTE"), Category::Food);
    assert_eq!(cat.categorize("UBER PARA O HOSPITAL"), Category::Health);
}

#[test]
fn test_categorize_short_keywords_match_inside_words() {
    let cat = Categorizer::default();
    // "OI" is a Phone keyword and matches anywhere in the text.
    assert_eq!(cat.categorize("NOITE"), Category::Phone);
    assert_eq!(cat.categorize("Corrida 99Pop"), Category::Transport);
}

#[test]
fn test_categorize_no_match() {
    let cat = Categorizer::default();
    assert_eq!(cat.categorize("NETFLIX"), Category::Other);
}

#[test]
fn test_categorize_empty_description() {
    let cat = Categorizer::default();
    assert_eq!(cat.categorize(""), Category::Other);
}

#[test]
fn test_categorize_deterministic() {
    let cat = Categorizer::default();
    let first = cat.categorize("Restaurante Sabor");
    for _ in 0..5 {
        assert_eq!(cat.categorize("Restaurante Sabor"), first);
    }
}

#[test]
fn test_categorize_custom_rules_order() {
    let rules = vec![
        make_rule(Category::Shopping, &["shop"]),
        make_rule(Category::Food, &["coffee shop"]),
    ];
    let cat = Categorizer::new(rules);
    assert_eq!(cat.categorize("Coffee Shop"), Category::Shopping);
}

#[test]
fn test_categorize_empty_rules() {
    let cat = Categorizer::new(Vec::new());
    assert_eq!(cat.categorize("PADARIA"), Category::Other);
}

#[test]
fn test_rule_keywords_uppercased() {
    let rule = make_rule(Category::Food, &["padaria", "açaí"]);
    assert_eq!(rule.keywords, vec!["PADARIA".to_string(), "AÇAÍ".to_string()]);
}

#[test]
fn test_default_rules_order() {
    let cat = Categorizer::default();
    let order: Vec<Category> = cat.rules().iter().map(|r| r.category).collect();
    assert_eq!(order.len(), 11);
    assert_eq!(order[0], Category::Food);
    assert_eq!(order[3], Category::Grocery);
    assert_eq!(order[10], Category::Housing);
    assert!(!order.contains(&Category::Other));
}

// ── Batch categorization ──────────────────────────────────────

#[test]
fn test_categorize_batch() {
    let cat = Categorizer::default();
    let records = vec![
        make_record("PADARIA CENTRO"),
        make_record("UBER TRIP"),
        make_record("NETFLIX"),
    ];
    let out = cat.categorize_batch(&records);
    assert_eq!(out.len(), 3);
    assert_eq!(out[0].category, Some(Category::Food));
    assert_eq!(out[1].category, Some(Category::Transport));
    assert_eq!(out[2].category, Some(Category::Other));
    assert_eq!(out[1].description, "UBER TRIP");
}

#[test]
fn test_categorize_batch_leaves_input_untouched() {
    let cat = Categorizer::default();
    let records = vec![make_record("PADARIA")];
    let _ = cat.categorize_batch(&records);
    assert!(records[0].category.is_none());
}

#[test]
fn test_categorize_batch_recomputes_existing() {
    let cat = Categorizer::default();
    let records = vec![make_record("PADARIA").with_category(Category::Housing)];
    let out = cat.categorize_batch(&records);
    assert_eq!(out[0].category, Some(Category::Food));
}

#[test]
fn test_categorize_batch_idempotent() {
    let cat = Categorizer::default();
    let records = vec![make_record("TED PARA MARIA"), make_record("LOJA X")];
    let once = cat.categorize_batch(&records);
    let twice = cat.categorize_batch(&once);
    assert_eq!(once, twice);
}

#[test]
fn test_categorize_batch_empty() {
    let cat = Categorizer::default();
    assert!(cat.categorize_batch(&[]).is_empty());
}
