use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use releve_core::{AggregateReport, monthly_report, quarterly_report};
use releve_ingest::{ExportInfo, read_statement_file};

mod chart;
mod config;
mod fmt;

#[derive(Parser, Debug)]
#[command(
    name = "releve",
    version,
    about = "Monthly and quarterly reports from bank statement exports"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the monthly and quarterly reports for a statement export
    Report {
        /// Path to the semicolon-delimited CSV export
        file: PathBuf,

        /// Emit both reports as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the reports as bar charts in the terminal
    Chart {
        /// Path to the semicolon-delimited CSV export
        file: PathBuf,
    },

    /// Write a default config file to ~/.releve/config.toml
    InitConfig,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Report { file, json } => report(&file, json),
        Command::Chart { file } => {
            let (monthly, quarterly) = load_reports(&file)?;
            chart::show(&monthly, &quarterly)
        }
        Command::InitConfig => config::init_config(),
    }
}

/// Decode the export and build both reports.
fn load_reports(file: &Path) -> Result<(AggregateReport, AggregateReport)> {
    let cfg = config::load_config()?;
    let records = read_statement_file(file, &cfg.statement.headers)
        .with_context(|| format!("decoding {}", file.display()))?;
    let monthly = monthly_report(&records)?;
    let quarterly = quarterly_report(&monthly)?;
    Ok((monthly, quarterly))
}

fn report(file: &Path, json: bool) -> Result<()> {
    let (monthly, quarterly) = load_reports(file)?;

    if json {
        println!("{}", fmt::reports_json(&monthly, &quarterly)?);
        return Ok(());
    }

    if let Some(info) = file
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(ExportInfo::from_filename)
    {
        println!(
            "Statement {} exported {}\n",
            info.account,
            info.exported_on.format("%d %b %Y")
        );
    }

    println!("Monthly Report:");
    print!("{}", fmt::format_report(&monthly));
    println!();
    println!("Quarterly Report:");
    print!("{}", fmt::format_report(&quarterly));
    Ok(())
}
