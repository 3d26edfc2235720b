//! Raw amount text to integer cents, with income/expense classification.

use crate::error::ReportError;

/// Which side of a period's totals an amount belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Income,
    Expense,
}

impl Flow {
    /// Classify raw amount text by its literal first character.
    ///
    /// The export marks expenses with a leading "-"; everything else counts
    /// as income. The check reads the text, not the parsed number's sign.
    pub fn of(raw: &str) -> Flow {
        if raw.starts_with('-') {
            Flow::Expense
        } else {
            Flow::Income
        }
    }
}

/// Convert raw amount text ("-12.50") to signed integer cents (-1250).
///
/// The parsed value is scaled by 100 and truncated toward zero, so any
/// sub-cent digits are dropped rather than rounded.
pub fn amount_cents(raw: &str) -> Result<i64, ReportError> {
    let value: f64 = raw.parse().map_err(|source| ReportError::BadAmount {
        value: raw.to_string(),
        source,
    })?;
    Ok((value * 100.0) as i64)
}
