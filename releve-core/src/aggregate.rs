//! Monthly aggregation: a sequential fold of statement records into an
//! ordered month -> totals report.

use crate::amount::{Flow, amount_cents};
use crate::error::ReportError;
use crate::period::month_label;
use crate::record::TransactionRecord;
use crate::report::AggregateReport;

/// Fold one record into the report.
///
/// The record's month gets zeroed totals on first sight (keeping encounter
/// order), the amount is classified by its leading character, and its
/// truncated cent value is added to the matching side.
pub fn accumulate(
    report: &mut AggregateReport,
    record: &TransactionRecord,
) -> Result<(), ReportError> {
    let label = month_label(&record.executed_on)?;
    let flow = Flow::of(&record.amount);
    let cents = amount_cents(&record.amount)?;
    report.entry_mut(&label).apply(flow, cents);
    Ok(())
}

/// Aggregate a full record sequence, in input order, into a monthly report.
///
/// Later records mutate buckets created by earlier ones, so the fold is
/// strictly sequential. The first malformed record aborts the whole run;
/// there are no partial results.
pub fn monthly_report<'a, I>(records: I) -> Result<AggregateReport, ReportError>
where
    I: IntoIterator<Item = &'a TransactionRecord>,
{
    let mut report = AggregateReport::new();
    for record in records {
        accumulate(&mut report, record)?;
    }
    Ok(report)
}
