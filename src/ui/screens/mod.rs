pub(crate) mod dashboard;
pub(crate) mod error;
pub(crate) mod transactions;
