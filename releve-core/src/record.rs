use serde::{Deserialize, Serialize};

/// One decoded statement row, reduced to the two fields the aggregation
/// engine consumes.
///
/// Both fields keep the export's raw text: `executed_on` is a DD/MM/YYYY
/// date and `amount` a signed decimal like "-12.50".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub executed_on: String,
    pub amount: String,
}

impl TransactionRecord {
    pub fn new(executed_on: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            executed_on: executed_on.into(),
            amount: amount.into(),
        }
    }
}
