use std::path::PathBuf;

use thiserror::Error;

/// Which of the three failure outcomes a load produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Format,
    Unexpected,
}

#[derive(Error, Debug)]
pub enum StatementError {
    #[error("statement file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("invalid statement: {0}")]
    Format(String),

    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl StatementError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Format(_) => ErrorKind::Format,
            Self::Unexpected(_) => ErrorKind::Unexpected,
        }
    }

    /// Message shown to the user in place of the dashboard.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound { path } => format!(
                "Statement file not found: {}. Check the path and try again.",
                path.display()
            ),
            Self::Format(detail) => format!("Could not process the statement file: {detail}"),
            Self::Unexpected(detail) => format!("Unexpected error: {detail}"),
        }
    }
}

impl From<std::io::Error> for StatementError {
    fn from(e: std::io::Error) -> Self {
        Self::Unexpected(e.to_string())
    }
}
