use crate::models::{Category, TransactionRecord};

/// Keyword triggers per category, in priority order: the first category with
/// a matching keyword wins. `Category::Other` has no rule; it is the fallback.
pub(crate) const DEFAULT_RULES: &[(Category, &[&str])] = &[
    (
        Category::Food,
        &["RESTAURANTE", "PADARIA", "PIZZA", "HAMBURGUER", "LANCHONETE", "FRUTAS"],
    ),
    (
        Category::Income,
        &["RECEBIDO", "DEPÓSITO", "PIX RECEBIDO", "PAGAMENTO RECEBIDO"],
    ),
    (Category::Health, &["FARMÁCIA", "HOSPITAL"]),
    (
        Category::Grocery,
        &["SUPERMERCADO", "MERCADO", "CARREFOUR", "BIG", "ZAFFARI"],
    ),
    (Category::Education, &["ESCOLA", "UNIVERSIDADE", "EDUCAÇÃO"]),
    (Category::Shopping, &["COMPRA", "SHOPPING", "MAGAZINE", "AMAZON"]),
    (
        Category::Transport,
        &["UBER", "99", "GASOLINA", "COMBUSTÍVEL", "POSTO"],
    ),
    (Category::Investment, &["TESOURO", "RENDA FIXA", "CDB", "AÇÃO"]),
    (
        Category::Transfers,
        &["PIX ENVIADO", "TRANSFERÊNCIA", "DOC", "TED"],
    ),
    (Category::Phone, &["CLARO", "VIVO", "TIM", "OI"]),
    (
        Category::Housing,
        &["ALUGUEL", "ENERGIA", "LUZ", "ÁGUA", "CONDOMÍNIO"],
    ),
];

pub(crate) const FALLBACK: Category = Category::Other;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CategoryRule {
    pub(crate) category: Category,
    pub(crate) keywords: Vec<String>,
}

impl CategoryRule {
    pub(crate) fn new(category: Category, keywords: &[&str]) -> Self {
        Self {
            category,
            keywords: keywords.iter().map(|k| k.to_uppercase()).collect(),
        }
    }
}

/// Ordered keyword rules. Built once, read-only afterwards.
pub(crate) struct Categorizer {
    rules: Vec<CategoryRule>,
}

impl Default for Categorizer {
    fn default() -> Self {
        let rules: Vec<CategoryRule> = DEFAULT_RULES
            .iter()
            .map(|(category, keywords)| CategoryRule::new(*category, keywords))
            .collect();
        Self::new(rules)
    }
}

impl Categorizer {
    pub(crate) fn new(rules: Vec<CategoryRule>) -> Self {
        Self { rules }
    }

    pub(crate) fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    /// Case-insensitive substring match; first matching rule wins.
    pub(crate) fn categorize(&self, description: &str) -> Category {
        let desc_upper = description.to_uppercase();

        self.rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|k| desc_upper.contains(k.as_str())))
            .map(|rule| rule.category)
            .unwrap_or(FALLBACK)
    }

    /// Returns a new list with every record categorized. The input is left
    /// untouched; an existing category is recomputed.
    pub(crate) fn categorize_batch(&self, records: &[TransactionRecord]) -> Vec<TransactionRecord> {
        records
            .iter()
            .map(|rec| {
                let category = self.categorize(&rec.description);
                rec.clone().with_category(category)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests;
