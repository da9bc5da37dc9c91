mod error;
mod loader;
mod ofx;

pub(crate) use error::{ErrorKind, StatementError};
pub(crate) use loader::StatementLoader;
