use rust_decimal::Decimal;

use super::{
    error::{Error, Result},
    parse_field,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    pub order_id: u64,
    pub product_id: u64,
    pub quantity: u32,
    pub price: Decimal,
    pub tax: Decimal,
}

impl OrderItem {
    /// Build an [`OrderItem`] from the raw fields of one row, laid out as
    /// `order_id,product_id,quantity,price,tax`.
    pub fn from_fields(fields: &[&str]) -> Result<Self> {
        let [order_id, product_id, quantity, price, tax] = fields else {
            return Err(Error::FieldCount {
                record: "order item",
                expected: 5,
                found: fields.len(),
            });
        };

        Ok(Self {
            order_id: parse_field(order_id, "order_id")?,
            product_id: parse_field(product_id, "product_id")?,
            quantity: parse_field(quantity, "quantity")?,
            price: parse_field(price, "price")?,
            tax: parse_field(tax, "tax")?,
        })
    }

    pub fn revenue(&self) -> Decimal {
        Decimal::from(self.quantity) * self.price
    }

    /// Tax owed for this line. The `tax` field is a fractional rate, so five
    /// percent comes in as `0.05`, not `5`.
    pub fn tax(&self) -> Decimal {
        self.revenue() * self.tax
    }
}
