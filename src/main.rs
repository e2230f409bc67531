mod error;
mod io;
mod ratings;
mod record;
mod report;
mod table;

use clap::builder::PossibleValuesParser;
use clap::Parser;
use log::error;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::error::{Error, Result};
use crate::io::{CsvReader, ReportWriter};

const DEFAULT_EMPTY_MESSAGE: &str = "Нет данных для отчета";

/// Builds reports from product CSV files.
#[derive(Parser, Debug)]
#[command(name = "product_report")]
struct Args {
    /// CSV files with products to process.
    #[arg(long, required = true, num_args = 1..)]
    files: Vec<PathBuf>,

    /// Report to generate.
    #[arg(long, value_parser = PossibleValuesParser::new(report::names()))]
    report: String,

    /// Printed instead of a table when there is nothing to report.
    #[arg(long, env = "PRODUCT_REPORT_EMPTY_MESSAGE", default_value = DEFAULT_EMPTY_MESSAGE)]
    empty_message: String,
}

fn run(args: Args) -> Result<()> {
    let records = CsvReader::new(args.files).read()?;
    let kind = report::find(&args.report).ok_or(Error::UnknownReport(args.report))?;
    let rows = (kind.generate)(&records)?;
    ReportWriter::stdout(args.empty_message).write(&rows)
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("report failed: {:?}", e);
            match e {
                Error::NotFound { .. } => println!("Ошибка: Файл не найден - {}", e),
                _ => println!("Ошибка: {}", e),
            }
            ExitCode::FAILURE
        }
    }
}
