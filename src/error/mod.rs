use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not access an input or output file")]
    FileError(#[from] std::io::Error),
    #[error("could not read CSV rows")]
    CsvError(#[from] csv::Error),
    #[error(transparent)]
    BusinessError(#[from] crate::domain::error::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
