//! Chronological ordering and per-day transaction id assignment.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::statement::InvestTransaction;

/// Hands out `YYYYMMDD-N` ids, counting transactions per calendar day.
/// Scoped to one sequencing pass; a fresh generator restarts every day at 1.
#[derive(Debug, Default)]
pub struct IdGenerator {
    per_day: HashMap<NaiveDate, u32>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id for `date`. Day counters are strictly increasing, so ids
    /// never repeat within one generator.
    pub fn next_id(&mut self, date: NaiveDate) -> String {
        let n = self.per_day.entry(date).or_insert(0);
        *n += 1;
        format!("{}-{}", date.format("%Y%m%d"), n)
    }
}

/// Reorder a newest-first transaction list into chronological order and
/// assign ids in a single pass.
///
/// This is a reversal, not a sort: same-day transactions must keep the
/// relative order the export gave them, so re-parsing an identical file
/// reproduces identical ids.
pub fn sequence(transactions: &mut Vec<InvestTransaction>) {
    transactions.reverse();
    let mut ids = IdGenerator::new();
    for txn in transactions.iter_mut() {
        txn.id = Some(ids.next_id(txn.date));
    }
}
