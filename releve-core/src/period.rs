//! Period label derivation: execution dates to month labels, month labels
//! to quarter labels.

use chrono::NaiveDate;

use crate::error::ReportError;

/// Month abbreviations indexed by month number minus one.
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Derive a month label ("Nov 2021") from a DD/MM/YYYY date string.
///
/// The year part of the label is the raw third component, carried over
/// verbatim. The components must form a real calendar date, so reordered
/// or wrongly separated inputs ("2021/11/01") fail instead of producing a
/// plausible-looking wrong label.
pub fn month_label(date: &str) -> Result<String, ReportError> {
    let malformed = || ReportError::MalformedDate(date.to_string());

    let parts: Vec<&str> = date.split('/').collect();
    if parts.len() != 3 {
        return Err(malformed());
    }

    let day: u32 = parts[0].parse().map_err(|_| malformed())?;
    let month: u32 = parts[1].parse().map_err(|_| malformed())?;
    let year: i32 = parts[2].parse().map_err(|_| malformed())?;
    if !(1..=12).contains(&month) {
        return Err(malformed());
    }
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(malformed)?;

    Ok(format!("{} {}", MONTHS[(month - 1) as usize], parts[2]))
}

/// Derive a quarter label ("Q4 2021") from a month label ("Nov 2021").
///
/// The label's suffix from index 3 (the space and year) is carried over
/// verbatim, so month and quarter labels always share their year text.
pub fn quarter_label(month: &str) -> Result<String, ReportError> {
    let quarter = match month.get(..3) {
        Some("Jan" | "Feb" | "Mar") => "Q1",
        Some("Apr" | "May" | "Jun") => "Q2",
        Some("Jul" | "Aug" | "Sep") => "Q3",
        Some("Oct" | "Nov" | "Dec") => "Q4",
        _ => return Err(ReportError::UnknownMonth(month.to_string())),
    };
    Ok(format!("{}{}", quarter, &month[3..]))
}
