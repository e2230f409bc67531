use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub(crate) type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{source}: '{}'", .path.display())]
    NotFound { path: PathBuf, source: io::Error },
    #[error("{}:{line}: could not convert rating to float: '{value}'", .path.display())]
    Conversion {
        path: PathBuf,
        line: u64,
        value: String,
    },
    #[error("{}: missing column '{field}'", .path.display())]
    MissingField { path: PathBuf, field: &'static str },
    #[error("unknown report '{0}'")]
    UnknownReport(String),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}
