//! fidofx-core: investment statement model, error taxonomy, and id sequencing.

pub mod error;
pub mod sequence;
pub mod statement;

pub use error::StatementError;
pub use sequence::{IdGenerator, sequence};
pub use statement::{BROKER_ID, CURRENCY, InvestTransaction, Statement, TrnDetail, TrnKind};
