mod category;
mod statement;
mod transaction;

pub use category::Category;
pub use statement::{AccountKind, RawTransaction, Statement, StatementAccount};
pub use transaction::TransactionRecord;
