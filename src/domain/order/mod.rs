use std::str::FromStr;

use super::{
    error::{Error, Result},
    parse_field,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pending,
    Complete,
    Cancelled,
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self> {
        match token {
            "Pending" => Ok(Self::Pending),
            "Complete" => Ok(Self::Complete),
            "Cancelled" => Ok(Self::Cancelled),
            _ => Err(Error::UnknownStatus(token.to_owned())),
        }
    }
}

/// Channel an order was placed through, encoded as a single letter in the
/// order files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Paraphysical,
    Online,
}

impl FromStr for Origin {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self> {
        match token {
            "P" => Ok(Self::Paraphysical),
            "O" => Ok(Self::Online),
            _ => Err(Error::UnknownOrigin(token.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: u64,
    pub client_id: u64,
    pub order_date: String,
    pub status: Status,
    pub origin: Origin,
}

impl Order {
    /// Build an [`Order`] from the raw fields of one row, laid out as
    /// `id,client_id,order_date,status,origin`.
    pub fn from_fields(fields: &[&str]) -> Result<Self> {
        let [id, client_id, order_date, status, origin] = fields else {
            return Err(Error::FieldCount {
                record: "order",
                expected: 5,
                found: fields.len(),
            });
        };

        Ok(Self {
            id: parse_field(id, "id")?,
            client_id: parse_field(client_id, "client_id")?,
            order_date: (*order_date).to_owned(),
            status: status.parse()?,
            origin: origin.parse()?,
        })
    }

    /// Year and month of the order date, taken literally from its first two
    /// `-` separated components. No calendar validation happens here.
    pub fn year_month(&self) -> Result<(String, String)> {
        let mut components = self.order_date.splitn(3, '-');

        match (components.next(), components.next()) {
            (Some(year), Some(month)) => Ok((year.to_owned(), month.to_owned())),
            _ => Err(Error::DateFormat(self.order_date.clone())),
        }
    }
}
