/// Spending category assigned to a transaction by keyword rules.
///
/// The labels are the ones shown on the dashboard; `english()` is a gloss
/// for the CLI listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Income,
    Health,
    Grocery,
    Education,
    Shopping,
    Transport,
    Investment,
    Transfers,
    Phone,
    Housing,
    Other,
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Alimentação",
            Self::Income => "Receitas",
            Self::Health => "Saúde",
            Self::Grocery => "Mercado",
            Self::Education => "Educação",
            Self::Shopping => "Compras",
            Self::Transport => "Transporte",
            Self::Investment => "Investimento",
            Self::Transfers => "Transferências para terceiros",
            Self::Phone => "Telefone",
            Self::Housing => "Moradia",
            Self::Other => "Outros",
        }
    }

    pub fn english(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Income => "Income",
            Self::Health => "Health",
            Self::Grocery => "Grocery",
            Self::Education => "Education",
            Self::Shopping => "Shopping",
            Self::Transport => "Transport",
            Self::Investment => "Investment",
            Self::Transfers => "Transfers",
            Self::Phone => "Phone",
            Self::Housing => "Housing",
            Self::Other => "Other",
        }
    }

    /// Parse either label, ignoring case. Unknown names yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.name().to_lowercase() == lower || c.english().to_lowercase() == lower)
    }

    pub fn all() -> &'static [Category] {
        &[
            Self::Food,
            Self::Income,
            Self::Health,
            Self::Grocery,
            Self::Education,
            Self::Shopping,
            Self::Transport,
            Self::Investment,
            Self::Transfers,
            Self::Phone,
            Self::Housing,
            Self::Other,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
