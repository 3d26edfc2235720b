//! Quarterly rollup: re-aggregates a monthly report into quarters.

use crate::error::ReportError;
use crate::period::quarter_label;
use crate::report::AggregateReport;

/// Derive a quarterly report from a monthly one.
///
/// Quarters appear in order of their first contributing month, not calendar
/// order. All three fields are added through as-is; the per-month balance
/// invariant makes the summed balance equal expense + income for the
/// quarter too. Pure function of its input.
pub fn quarterly_report(monthly: &AggregateReport) -> Result<AggregateReport, ReportError> {
    let mut quarterly = AggregateReport::new();
    for (label, totals) in monthly.iter() {
        let quarter = quarter_label(label)?;
        quarterly.entry_mut(&quarter).merge(totals);
    }
    Ok(quarterly)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::monthly_report;
    use crate::record::TransactionRecord;
    use crate::report::PeriodTotals;

    fn record(date: &str, amount: &str) -> TransactionRecord {
        TransactionRecord::new(date, amount)
    }

    #[test]
    fn test_months_sum_into_their_quarter() {
        let records = [record("10/01/2021", "1.00"), record("10/02/2021", "-0.50")];
        let monthly = monthly_report(&records).unwrap();
        let quarterly = quarterly_report(&monthly).unwrap();

        assert_eq!(quarterly.len(), 1);
        let q1 = quarterly.get("Q1 2021").unwrap();
        assert_eq!(q1.income_cents, 100);
        assert_eq!(q1.expense_cents, -50);
        assert_eq!(q1.balance_cents, 50);
    }

    #[test]
    fn test_year_boundary_stays_separate() {
        let records = [record("31/12/2021", "10.00"), record("01/01/2022", "10.00")];
        let monthly = monthly_report(&records).unwrap();
        let quarterly = quarterly_report(&monthly).unwrap();

        let labels: Vec<&str> = quarterly.labels().collect();
        assert_eq!(labels, ["Q4 2021", "Q1 2022"]);
    }

    #[test]
    fn test_quarters_keep_first_seen_order() {
        // Newest-first input, as real exports are ordered.
        let records = [
            record("05/11/2021", "10.00"),
            record("20/09/2021", "10.00"),
            record("02/08/2021", "10.00"),
        ];
        let monthly = monthly_report(&records).unwrap();
        let quarterly = quarterly_report(&monthly).unwrap();

        let labels: Vec<&str> = quarterly.labels().collect();
        assert_eq!(labels, ["Q4 2021", "Q3 2021"]);
    }

    #[test]
    fn test_rollup_conserves_every_field() {
        let records = [
            record("01/11/2021", "-12.50"),
            record("03/11/2021", "45.00"),
            record("17/08/2021", "-850.75"),
            record("28/05/2021", "1500.00"),
            record("14/02/2022", "-3.20"),
        ];
        let monthly = monthly_report(&records).unwrap();
        let quarterly = quarterly_report(&monthly).unwrap();

        let sum = |report: &AggregateReport, f: fn(&PeriodTotals) -> i64| {
            report.iter().map(|(_, t)| f(t)).sum::<i64>()
        };
        assert_eq!(
            sum(&monthly, |t| t.income_cents),
            sum(&quarterly, |t| t.income_cents)
        );
        assert_eq!(
            sum(&monthly, |t| t.expense_cents),
            sum(&quarterly, |t| t.expense_cents)
        );
        assert_eq!(
            sum(&monthly, |t| t.balance_cents),
            sum(&quarterly, |t| t.balance_cents)
        );
    }

    #[test]
    fn test_rollup_is_pure() {
        let records = [record("01/11/2021", "-12.50"), record("10/06/2021", "45.00")];
        let monthly = monthly_report(&records).unwrap();

        let first = quarterly_report(&monthly).unwrap();
        let second = quarterly_report(&monthly).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_month_label_aborts() {
        let mut monthly = AggregateReport::new();
        monthly.entry_mut("Foo 2021");
        let err = quarterly_report(&monthly).unwrap_err();
        assert!(matches!(err, ReportError::UnknownMonth(_)));
    }
}
