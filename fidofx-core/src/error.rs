use chrono::NaiveDate;
use thiserror::Error;

/// Fatal conditions that abort a statement parse.
///
/// Rows that are structural noise (headers, disclaimers, blank lines) are
/// not errors at all; they are skipped before any of these can arise.
#[derive(Debug, Error)]
pub enum StatementError {
    /// A numeric column on an accepted row did not parse as a decimal.
    #[error("malformed number {value:?} in column {column:?}")]
    MalformedNumber { column: &'static str, value: String },

    /// A date column did not open with a valid MM/DD/YYYY date.
    #[error("malformed date {value:?} in column {column:?}")]
    MalformedDate { column: &'static str, value: String },

    /// A finished transaction violates the statement invariants.
    /// Earlier stages guarantee validity, so this signals a pipeline defect.
    #[error("transaction dated {date} ({memo:?}) is missing {field}")]
    InvalidTransaction {
        date: NaiveDate,
        memo: String,
        field: &'static str,
    },

    /// No rows survived classification; the date bounds are undefined.
    #[error("statement contains no transactions")]
    EmptyStatement,
}
