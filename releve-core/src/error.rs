use thiserror::Error;

/// Failures that abort an aggregation run.
///
/// None of these are recovered per-row; the caller decides whether to skip
/// the whole input or surface the failure.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("malformed execution date '{0}': expected DD/MM/YYYY")]
    MalformedDate(String),

    #[error("month label '{0}' does not belong to any quarter")]
    UnknownMonth(String),

    #[error("unparseable amount '{value}'")]
    BadAmount {
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },
}
