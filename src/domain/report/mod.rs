use std::collections::HashMap;

use itertools::Itertools;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use super::{
    error::{Error, Result},
    order::{Order, Origin, Status},
    order_item::OrderItem,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub order_id: u64,
    #[serde(serialize_with = "two_places")]
    pub total_amount: Decimal,
    #[serde(serialize_with = "two_places")]
    pub total_taxes: Decimal,
}

impl OrderSummary {
    /// Sum revenue and tax over the items grouped under `order.id`. An order
    /// with no items summarizes to zero totals.
    pub fn for_order(order: &Order, items_by_order: &HashMap<u64, Vec<OrderItem>>) -> Self {
        let (total_amount, total_taxes) = items_by_order
            .get(&order.id)
            .into_iter()
            .flatten()
            .fold((Decimal::ZERO, Decimal::ZERO), |(amount, taxes), item| {
                (amount + item.revenue(), taxes + item.tax())
            });

        Self {
            order_id: order.id,
            total_amount,
            total_taxes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyAverage {
    pub year: String,
    pub month: String,
    #[serde(serialize_with = "two_places")]
    pub avg_amount: Decimal,
    #[serde(serialize_with = "two_places")]
    pub avg_taxes: Decimal,
}

/// Group line items under their owning order id. Items of the same order
/// accumulate in encounter order.
pub fn group_by_order(items: impl IntoIterator<Item = OrderItem>) -> HashMap<u64, Vec<OrderItem>> {
    items.into_iter().into_group_map_by(|item| item.order_id)
}

/// Keep the orders matching `status` and `origin` exactly, both compared as
/// whole values, and summarize each survivor. Items belonging to other orders
/// are never consulted.
pub fn process_orders(
    orders: &[Order],
    items: impl IntoIterator<Item = OrderItem>,
    status: Status,
    origin: Origin,
) -> Vec<OrderSummary> {
    let items_by_order = group_by_order(items);

    orders
        .iter()
        .filter(|order| order.status == status && order.origin == origin)
        .map(|order| OrderSummary::for_order(order, &items_by_order))
        .collect()
}

/// Average summary totals per (year, month) of the parent order's date.
///
/// Every summary must resolve to an order in `orders`; a miss means the
/// summaries were not derived from this order set. Output order follows
/// bucket creation and is unspecified, callers wanting stable output sort by
/// (year, month).
pub fn monthly_averages(
    orders: &[Order],
    summaries: &[OrderSummary],
) -> Result<Vec<MonthlyAverage>> {
    let orders_by_id: HashMap<u64, &Order> =
        orders.iter().map(|order| (order.id, order)).collect();

    let mut buckets: HashMap<(String, String), (Decimal, Decimal, u32)> = HashMap::new();

    for summary in summaries {
        let order = orders_by_id
            .get(&summary.order_id)
            .ok_or(Error::MissingOrder(summary.order_id))?;
        let (amount, taxes, count) = buckets.entry(order.year_month()?).or_default();

        *amount += summary.total_amount;
        *taxes += summary.total_taxes;
        *count += 1;
    }

    Ok(buckets
        .into_iter()
        .map(|((year, month), (amount, taxes, count))| {
            let count = Decimal::from(count);

            MonthlyAverage {
                year,
                month,
                avg_amount: amount / count,
                avg_taxes: taxes / count,
            }
        })
        .collect())
}

fn two_places<S: Serializer>(
    value: &Decimal,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{:.2}", value.round_dp(2)))
}
