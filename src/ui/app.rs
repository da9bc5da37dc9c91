use std::path::PathBuf;

use crate::categorize::Categorizer;
use crate::import::{StatementError, StatementLoader};
use crate::pipeline::{self, Dashboard};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    Transactions,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Dashboard, Self::Transactions]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Transactions => write!(f, "Transactions"),
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    pub(crate) statement_path: PathBuf,

    // Result of the last load; `error` set means nothing else is rendered.
    pub(crate) dashboard: Dashboard,
    pub(crate) error: Option<StatementError>,

    // Transactions
    pub(crate) transaction_index: usize,
    pub(crate) transaction_scroll: usize,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new() -> Self {
        Self {
            running: true,
            screen: Screen::Dashboard,
            status_message: String::new(),
            show_help: false,
            statement_path: PathBuf::new(),

            dashboard: Dashboard::default(),
            error: None,

            transaction_index: 0,
            transaction_scroll: 0,

            visible_rows: 20,
        }
    }

    /// Re-run the whole load → categorize pipeline. Failures are kept for
    /// display, never propagated.
    pub(crate) fn refresh(&mut self, loader: &StatementLoader, categorizer: &Categorizer) {
        self.transaction_index = 0;
        self.transaction_scroll = 0;
        self.statement_path = loader.path().to_path_buf();

        match pipeline::run(loader, categorizer) {
            Ok(dashboard) => {
                self.set_status(format!(
                    "Loaded {} transactions from {}",
                    dashboard.transactions.len(),
                    self.statement_path.display()
                ));
                self.dashboard = dashboard;
                self.error = None;
            }
            Err(e) => {
                self.set_status(e.user_message());
                self.dashboard = Dashboard::default();
                self.error = Some(e);
            }
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
