//! Text and JSON rendering of aggregate reports.

use anyhow::Result;
use releve_core::AggregateReport;
use serde::Serialize;

/// Render integer cents as a two-decimal amount, negatives parenthesized:
/// -1250 -> "(12.50)", 4500 -> "45.00".
pub fn cents(amount_cents: i64) -> String {
    let amount = amount_cents as f64 / 100.0;
    if amount_cents < 0 {
        format!("({:.2})", amount.abs())
    } else {
        format!("{amount:.2}")
    }
}

/// One line per period: label, income, expenses, balance.
pub fn format_report(report: &AggregateReport) -> String {
    let mut out = String::new();
    for (label, totals) in report.iter() {
        out.push_str(&format!(
            "{}\t\t\tinc: {}\t\t\texp: {}\t\t\tbal: {}\n",
            label,
            cents(totals.income_cents),
            cents(totals.expense_cents),
            cents(totals.balance_cents),
        ));
    }
    out
}

#[derive(Serialize)]
struct Entry<'a> {
    period: &'a str,
    expense_cents: i64,
    income_cents: i64,
    balance_cents: i64,
}

fn entries(report: &AggregateReport) -> Vec<Entry<'_>> {
    report
        .iter()
        .map(|(period, totals)| Entry {
            period,
            expense_cents: totals.expense_cents,
            income_cents: totals.income_cents,
            balance_cents: totals.balance_cents,
        })
        .collect()
}

#[derive(Serialize)]
struct JsonReports<'a> {
    monthly: Vec<Entry<'a>>,
    quarterly: Vec<Entry<'a>>,
}

/// Both reports as pretty JSON, entry order preserved.
pub fn reports_json(monthly: &AggregateReport, quarterly: &AggregateReport) -> Result<String> {
    let doc = JsonReports {
        monthly: entries(monthly),
        quarterly: entries(quarterly),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}
