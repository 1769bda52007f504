use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("unrecognized order status `{0}`")]
    UnknownStatus(String),
    #[error("unrecognized order origin `{0}`")]
    UnknownOrigin(String),
    #[error("expected {expected} fields in {record} row, found {found}")]
    FieldCount {
        record: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("invalid value `{value}` for {name}")]
    InvalidField { name: &'static str, value: String },
    #[error("order date `{0}` has no `-` separated year and month")]
    DateFormat(String),
    #[error("no order matches summarized order {0}")]
    MissingOrder(u64),
}

pub type Result<T> = std::result::Result<T, Error>;
