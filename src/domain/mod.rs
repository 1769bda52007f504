pub mod error;
pub mod order;
pub mod order_item;
pub mod report;

use std::str::FromStr;

use self::error::{Error, Result};

pub(crate) fn parse_field<T: FromStr>(value: &str, name: &'static str) -> Result<T> {
    value.parse().map_err(|_| Error::InvalidField {
        name,
        value: value.to_owned(),
    })
}
