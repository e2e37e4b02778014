//! fidofx-ingest: Fidelity "Accounts History" CSV ingestion.

pub mod classify;
pub mod fidelity;
pub mod normalize;

pub use classify::{RowClass, SkipReason, classify, classify_action};
pub use fidelity::{parse_export, parse_statement};
