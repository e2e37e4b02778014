//! Investment statement model shared by the ingest pipeline and emitters.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::StatementError;

/// Institution identifier stamped on every statement.
pub const BROKER_ID: &str = "Fidelity";

/// Fidelity exports are denominated in US dollars.
pub const CURRENCY: &str = "USD";

/// Transaction category, named on the wire with OFX type strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrnKind {
    #[serde(rename = "BUYSTOCK")]
    BuySecurity,
    #[serde(rename = "SELLSTOCK")]
    SellSecurity,
    #[serde(rename = "INCOME")]
    Income,
    #[serde(rename = "INVBANKTRAN")]
    BankTransfer,
    /// Accepted row whose action text matched no known pattern.
    #[serde(rename = "OTHER")]
    Unclassified,
}

impl TrnKind {
    /// True for kinds that move units of a security.
    pub fn is_trade(&self) -> bool {
        matches!(self, TrnKind::BuySecurity | TrnKind::SellSecurity)
    }
}

/// Sub-category refining [`TrnKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrnDetail {
    #[serde(rename = "BUY")]
    Buy,
    #[serde(rename = "SELL")]
    Sell,
    #[serde(rename = "DIV")]
    Dividend,
    #[serde(rename = "DEBIT")]
    Debit,
    #[serde(rename = "CREDIT")]
    Credit,
}

/// A single normalized investment transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestTransaction {
    /// `YYYYMMDD-N`, unique within a statement. `None` until the
    /// sequencing pass runs; ids depend on the final chronological order.
    pub id: Option<String>,
    /// Run (transaction) date.
    pub date: NaiveDate,
    /// Settlement date when the export provides one, else the run date.
    pub user_date: NaiveDate,
    /// Action text, verbatim.
    pub memo: String,
    pub kind: TrnKind,
    /// `None` only for [`TrnKind::Unclassified`].
    pub detail: Option<TrnDetail>,
    /// Ticker symbol; present for trades and dividend income.
    pub security_id: Option<String>,
    pub units: Option<Decimal>,
    pub unit_price: Option<Decimal>,
    pub fees: Option<Decimal>,
    /// Net cash effect.
    pub amount: Option<Decimal>,
}

impl InvestTransaction {
    /// Check the invariants every emitted transaction must satisfy:
    /// id and amount present, and trades carry symbol, units, and price.
    pub fn ensure_valid(&self) -> Result<(), StatementError> {
        let missing = |field: &'static str| StatementError::InvalidTransaction {
            date: self.date,
            memo: self.memo.clone(),
            field,
        };

        if self.id.is_none() {
            return Err(missing("id"));
        }
        if self.amount.is_none() {
            return Err(missing("amount"));
        }
        if self.kind.is_trade() {
            if self.security_id.is_none() {
                return Err(missing("security_id"));
            }
            if self.units.is_none() {
                return Err(missing("units"));
            }
            if self.unit_price.is_none() {
                return Err(missing("unit_price"));
            }
        }
        Ok(())
    }
}

/// A fully parsed statement: transactions in chronological order plus
/// account-level metadata. Built once per parse and not mutated after.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    /// Captured from the export file name; `None` when the name does not
    /// follow the `History_for_Account_<ID>.csv` convention.
    pub account_id: Option<String>,
    pub broker_id: String,
    pub currency: String,
    /// Earliest transaction date.
    pub start_date: NaiveDate,
    /// Latest transaction date.
    pub end_date: NaiveDate,
    pub transactions: Vec<InvestTransaction>,
}
