//! Export-file metadata from the bank's statement naming convention.

use chrono::NaiveDate;
use regex::Regex;

/// Account and export date recovered from a statement filename like
/// `BE12345678912345-20211129.csv`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportInfo {
    pub account: String,
    pub exported_on: NaiveDate,
}

impl ExportInfo {
    /// Parse the `<IBAN>-<YYYYMMDD>.csv` convention.
    ///
    /// Returns None for filenames that don't follow it; the metadata is
    /// display-only and never affects aggregation.
    pub fn from_filename(name: &str) -> Option<ExportInfo> {
        let re = Regex::new(r"^(?P<iban>[A-Z]{2}\d{14})-(?P<date>\d{8})\.csv$").ok()?;
        let caps = re.captures(name)?;
        let exported_on = NaiveDate::parse_from_str(&caps["date"], "%Y%m%d").ok()?;
        Some(ExportInfo {
            account: caps["iban"].to_string(),
            exported_on,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_export_filename() {
        let info = ExportInfo::from_filename("BE12345678912345-20211129.csv").unwrap();
        assert_eq!(info.account, "BE12345678912345");
        assert_eq!(info.exported_on, NaiveDate::from_ymd_opt(2021, 11, 29).unwrap());
    }

    #[test]
    fn test_non_matching_names() {
        assert!(ExportInfo::from_filename("statement.csv").is_none());
        assert!(ExportInfo::from_filename("BE123-20211129.csv").is_none());
        assert!(ExportInfo::from_filename("BE12345678912345-2021.csv").is_none());
    }

    #[test]
    fn test_impossible_export_date() {
        assert!(ExportInfo::from_filename("BE12345678912345-20211350.csv").is_none());
    }
}
