use thiserror::Error;

use crate::record::BeerId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Duplicate beer id in catalog: {0}")]
    DuplicateId(BeerId),

    #[error("Unknown beer id: {0}")]
    UnknownId(BeerId),

    #[error("Malformed similarity matrix: {0}")]
    MalformedMatrix(String),

    #[error("Malformed catalog record: {0}")]
    MalformedRecord(String),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
