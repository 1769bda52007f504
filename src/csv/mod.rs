use std::io::{Read, Write};

use csv::{ReaderBuilder, Trim, Writer};
use serde::Serialize;

use crate::{
    domain::{
        order::Order,
        order_item::OrderItem,
        report::{MonthlyAverage, OrderSummary},
    },
    error::Result,
};

/// Parse [`Order`]s from a reader over the orders CSV.
///
/// The first row is the header and is discarded; every following row must
/// carry `id,client_id,order_date,status,origin`. Any malformed row aborts
/// the read.
pub fn read_orders(reader: impl Read) -> Result<Vec<Order>> {
    read_rows(reader, Order::from_fields)
}

/// Parse [`OrderItem`]s from a reader over the items CSV, header
/// `order_id,product_id,quantity,price,tax`.
pub fn read_order_items(reader: impl Read) -> Result<Vec<OrderItem>> {
    read_rows(reader, OrderItem::from_fields)
}

// The reader is flexible so that short or long rows reach the row parsers
// and fail with a field count error naming the record kind.
fn read_rows<T>(
    reader: impl Read,
    parse: fn(&[&str]) -> crate::domain::error::Result<T>,
) -> Result<Vec<T>> {
    ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader)
        .records()
        .map(|record| {
            let record = record?;
            let fields: Vec<&str> = record.iter().collect();

            Ok(parse(&fields)?)
        })
        .collect()
}

/// Write the per-order report, header `order_id,total_amount,total_taxes`,
/// amounts rounded to two decimal places.
pub fn write_summaries(summaries: &[OrderSummary], writer: impl Write) -> Result<()> {
    write_rows(summaries, writer)
}

/// Write the monthly report, header `year,month,avg_amount,avg_taxes`, same
/// number formatting as the per-order report.
pub fn write_monthly_averages(averages: &[MonthlyAverage], writer: impl Write) -> Result<()> {
    write_rows(averages, writer)
}

fn write_rows<T: Serialize>(rows: &[T], writer: impl Write) -> Result<()> {
    let mut writer = Writer::from_writer(writer);

    for row in rows {
        writer.serialize(row)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::{
        domain::{
            error::Error as DomainError,
            order::{Origin, Status},
        },
        error::Error,
    };

    #[test]
    fn reads_orders_discarding_the_header() {
        let data = "id,client_id,order_date,status,origin\n\
                    1,10,2024-03-15T00:00:00,Complete,O\n\
                    2,11,2024-04-01T00:00:00,Pending,P\n";

        let orders = read_orders(data.as_bytes()).unwrap();

        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].id, 1);
        assert_eq!(orders[0].status, Status::Complete);
        assert_eq!(orders[1].origin, Origin::Paraphysical);
    }

    #[test]
    fn reads_items_with_decimal_price_and_tax() {
        let data = "order_id,product_id,quantity,price,tax\n1,5,2,10.0,0.05\n";

        let items = read_order_items(data.as_bytes()).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].price, dec!(10.0));
        assert_eq!(items[0].tax, dec!(0.05));
    }

    #[test]
    fn surfaces_a_short_row_as_a_field_count_error() {
        let data = "id,client_id,order_date,status,origin\n1,2\n";

        let error = read_orders(data.as_bytes()).unwrap_err();

        assert!(matches!(
            error,
            Error::BusinessError(DomainError::FieldCount {
                record: "order",
                expected: 5,
                found: 2,
            })
        ));
    }

    #[test]
    fn surfaces_an_unknown_status_token() {
        let data = "id,client_id,order_date,status,origin\n1,10,2024-03-15,Done,O\n";

        let error = read_orders(data.as_bytes()).unwrap_err();

        assert!(matches!(
            error,
            Error::BusinessError(DomainError::UnknownStatus(token)) if token == "Done"
        ));
    }

    #[test]
    fn writes_summaries_to_two_decimal_places() {
        let summaries = vec![
            OrderSummary {
                order_id: 1,
                total_amount: dec!(20),
                total_taxes: dec!(1),
            },
            OrderSummary {
                order_id: 2,
                total_amount: dec!(7.375),
                total_taxes: dec!(0.1),
            },
        ];

        let mut out = Vec::new();
        write_summaries(&summaries, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "order_id,total_amount,total_taxes\n\
             1,20.00,1.00\n\
             2,7.38,0.10\n"
        );
    }

    #[test]
    fn writes_monthly_averages_with_literal_year_and_month() {
        let averages = vec![MonthlyAverage {
            year: "2024".to_owned(),
            month: "03".to_owned(),
            avg_amount: dec!(25.0),
            avg_taxes: dec!(1.5),
        }];

        let mut out = Vec::new();
        write_monthly_averages(&averages, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "year,month,avg_amount,avg_taxes\n2024,03,25.00,1.50\n"
        );
    }
}
