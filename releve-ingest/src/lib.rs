//! releve-ingest: bank statement export decoding (semicolon-delimited CSV)
//! and export-file metadata.

pub mod export;
pub mod statement;

pub use export::ExportInfo;
pub use statement::{StatementHeaders, parse_statement, read_statement_file};
