//! Ordered period reports: label -> totals, in first-encounter order.

use serde::{Deserialize, Serialize};

use crate::amount::Flow;

/// Running totals for one reporting period, in integer cents.
///
/// `expense_cents` stays at or below zero and `income_cents` at or above
/// under the export's sign convention; `balance_cents` is always their sum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodTotals {
    pub expense_cents: i64,
    pub income_cents: i64,
    pub balance_cents: i64,
}

impl PeriodTotals {
    /// Add cents to the given side and refresh the balance.
    pub(crate) fn apply(&mut self, flow: Flow, cents: i64) {
        match flow {
            Flow::Expense => self.expense_cents += cents,
            Flow::Income => self.income_cents += cents,
        }
        self.balance_cents = self.expense_cents + self.income_cents;
    }

    /// Field-wise addition of another period's totals, balance included.
    pub(crate) fn merge(&mut self, other: &PeriodTotals) {
        self.expense_cents += other.expense_cents;
        self.income_cents += other.income_cents;
        self.balance_cents += other.balance_cents;
    }
}

/// Label -> totals mapping that preserves first-encounter order.
///
/// Reports are built once by the aggregation fold and read-only afterwards;
/// iteration order governs display and chart ordering. A report covers one
/// statement period (tens of entries at most), so lookups scan the entry
/// list instead of pairing a map with a separate order index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateReport {
    entries: Vec<(String, PeriodTotals)>,
}

impl AggregateReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, label: &str) -> Option<&PeriodTotals> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, totals)| totals)
    }

    /// Entries in first-encounter order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&str, &PeriodTotals)> {
        self.entries.iter().map(|(l, totals)| (l.as_str(), totals))
    }

    /// Labels in first-encounter order.
    pub fn labels(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    /// Totals for `label`, inserted zeroed at the back on first sight.
    pub(crate) fn entry_mut(&mut self, label: &str) -> &mut PeriodTotals {
        let idx = match self.entries.iter().position(|(l, _)| l == label) {
            Some(idx) => idx,
            None => {
                self.entries
                    .push((label.to_string(), PeriodTotals::default()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx].1
    }
}
