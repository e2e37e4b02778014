//! Fidelity "Accounts History" CSV export parser.
//!
//! Column layout (13 columns):
//!   0 Run Date, 1 Action, 2 Symbol, 3 Description, 4 Type, 5 Quantity,
//!   6 Price ($), 7 Commission ($), 8 Fees ($), 9 Accrued Interest ($),
//!   10 Amount ($), 11 Cash Balance ($), 12 Settlement Date
//!
//! Exports list transactions newest-first. The returned statement is
//! chronological, with per-day ids assigned after reordering.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use csv::StringRecord;
use regex::Regex;
use rust_decimal::Decimal;

use fidofx_core::{
    BROKER_ID, CURRENCY, InvestTransaction, Statement, StatementError, TrnDetail, TrnKind,
    sequence,
};

use crate::classify::{self, RowClass};
use crate::normalize;

/// Parse one export file into a validated [`Statement`].
pub fn parse_statement(path: impl AsRef<Path>) -> Result<Statement> {
    let path = path.as_ref();
    let rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let account_id = match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => account_id_from_filename(name)?,
        None => None,
    };

    parse_export(rdr, account_id).with_context(|| format!("parsing {}", path.display()))
}

/// Capture the account number out of `…History_for_Account_<ID>.csv`
/// file names. Names that do not match yield `None`.
pub fn account_id_from_filename(name: &str) -> Result<Option<String>> {
    let re = Regex::new(r"History_for_Account_(.+)\.csv$")?;
    Ok(re.captures(name).map(|caps| caps[1].to_string()))
}

/// Parse raw export rows from any reader into a validated statement.
///
/// Kept separate from the file wrapper so callers and tests can feed
/// in-memory exports.
pub fn parse_export<R: Read>(
    mut rdr: csv::Reader<R>,
    account_id: Option<String>,
) -> Result<Statement> {
    let mut transactions = Vec::new();
    for row in rdr.records() {
        let row = row?;
        match classify::classify(&row) {
            RowClass::Transaction { date, kind, detail } => {
                transactions.push(build_transaction(&row, date, kind, detail)?);
            }
            RowClass::Skip(_) => {}
        }
    }

    if transactions.is_empty() {
        return Err(StatementError::EmptyStatement.into());
    }

    sequence(&mut transactions);
    for txn in &transactions {
        txn.ensure_valid()?;
    }

    let mut start_date = transactions[0].date;
    let mut end_date = transactions[0].date;
    for txn in &transactions {
        start_date = start_date.min(txn.date);
        end_date = end_date.max(txn.date);
    }

    Ok(Statement {
        account_id,
        broker_id: BROKER_ID.to_string(),
        currency: CURRENCY.to_string(),
        start_date,
        end_date,
        transactions,
    })
}

/// Assemble a normalized transaction from an accepted, classified row.
fn build_transaction(
    row: &StringRecord,
    date: NaiveDate,
    kind: TrnKind,
    detail: Option<TrnDetail>,
) -> Result<InvestTransaction, StatementError> {
    let field = |i: usize| row.get(i).unwrap_or("");

    // Settlement date falls back to the run date when blank or unparseable.
    let user_date = match field(12) {
        "" => date,
        raw => normalize::parse_date(raw, "Settlement Date").unwrap_or(date),
    };

    let mut txn = InvestTransaction {
        id: None,
        date,
        user_date,
        memo: field(1).to_string(),
        kind,
        detail,
        security_id: None,
        units: None,
        unit_price: None,
        fees: opt_amount(field(8), "Fees ($)")?,
        amount: opt_amount(field(10), "Amount ($)")?,
    };

    match kind {
        TrnKind::BuySecurity | TrnKind::SellSecurity => {
            txn.security_id = Some(field(2).to_string());
            txn.units = Some(normalize::parse_amount(field(5), "Quantity")?);
            txn.unit_price = Some(normalize::parse_amount(field(6), "Price ($)")?);
        }
        TrnKind::Income => {
            txn.security_id = Some(field(2).to_string());
        }
        TrnKind::BankTransfer | TrnKind::Unclassified => {}
    }

    Ok(txn)
}

fn opt_amount(raw: &str, column: &'static str) -> Result<Option<Decimal>, StatementError> {
    if raw.is_empty() {
        Ok(None)
    } else {
        normalize::parse_amount(raw, column).map(Some)
    }
}
