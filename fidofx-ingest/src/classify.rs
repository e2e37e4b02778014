//! Row acceptance and action-text classification.
//!
//! Fidelity exports surround the transaction block with a column header,
//! blank lines, and quoted multi-line disclaimers. A physical row is a
//! transaction iff it has the full 13 columns and its first cell opens
//! with a valid MM/DD/YYYY date; everything else is routine noise and
//! skipped without error.

use chrono::NaiveDate;
use csv::StringRecord;
use fidofx_core::{TrnDetail, TrnKind};

use crate::normalize;

/// Column count of every data row in the export.
pub const FIELD_COUNT: usize = 13;

/// Ordered action-prefix rules; first match wins. Matching is literal,
/// case-sensitive, and anchored at the start of the action text.
const ACTION_RULES: &[(&str, TrnKind, TrnDetail)] = &[
    ("REINVESTMENT ", TrnKind::BuySecurity, TrnDetail::Buy),
    ("YOU BOUGHT ", TrnKind::BuySecurity, TrnDetail::Buy),
    ("YOU SOLD ", TrnKind::SellSecurity, TrnDetail::Sell),
    ("DIVIDEND RECEIVED ", TrnKind::Income, TrnDetail::Dividend),
    ("DIRECT DEBIT ", TrnKind::BankTransfer, TrnDetail::Debit),
    (
        "Electronic Funds Transfer Paid ",
        TrnKind::BankTransfer,
        TrnDetail::Debit,
    ),
    ("TRANSFERRED TO ", TrnKind::BankTransfer, TrnDetail::Debit),
    ("TRANSFERRED FROM ", TrnKind::BankTransfer, TrnDetail::Credit),
    ("DIRECT DEPOSIT ", TrnKind::BankTransfer, TrnDetail::Credit),
    ("INTEREST EARNED ", TrnKind::BankTransfer, TrnDetail::Credit),
];

/// Outcome of inspecting one physical row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowClass {
    /// A real transaction: its run date and action classification.
    Transaction {
        date: NaiveDate,
        kind: TrnKind,
        detail: Option<TrnDetail>,
    },
    /// Structural noise, excluded from the statement.
    Skip(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Row does not have exactly [`FIELD_COUNT`] columns.
    FieldCount,
    /// First cell does not open with a valid date. Blank cells, the
    /// `Run Date` column header, and quoted disclaimer text all land here.
    NoRunDate,
}

/// Decide whether a raw row is a transaction, and classify it if so.
pub fn classify(row: &StringRecord) -> RowClass {
    if row.len() != FIELD_COUNT {
        return RowClass::Skip(SkipReason::FieldCount);
    }
    let Ok(date) = normalize::parse_date(row.get(0).unwrap_or(""), "Run Date") else {
        return RowClass::Skip(SkipReason::NoRunDate);
    };
    let (kind, detail) = match classify_action(row.get(1).unwrap_or("")) {
        Some((kind, detail)) => (kind, Some(detail)),
        None => (TrnKind::Unclassified, None),
    };
    RowClass::Transaction { date, kind, detail }
}

/// Match action text against the prefix table.
pub fn classify_action(action: &str) -> Option<(TrnKind, TrnDetail)> {
    ACTION_RULES
        .iter()
        .find(|(prefix, _, _)| action.starts_with(prefix))
        .map(|(_, kind, detail)| (*kind, *detail))
}
