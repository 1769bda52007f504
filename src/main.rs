use std::{fs::File, path::PathBuf};

use clap::Parser;
use log::info;
use order_reports::{
    csv::{read_order_items, read_orders, write_monthly_averages, write_summaries},
    domain::{
        order::{Origin, Status},
        report::{monthly_averages, process_orders},
    },
    error::Result,
};

/// Build per-order and monthly revenue reports from order CSV exports.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Path to the orders CSV (`id,client_id,order_date,status,origin`)
    orders: PathBuf,

    /// Path to the order items CSV (`order_id,product_id,quantity,price,tax`)
    items: PathBuf,

    /// Keep only orders with this status
    #[arg(long, default_value = "Complete")]
    status: String,

    /// Keep only orders placed through this origin, `P` or `O`
    #[arg(long, default_value = "O")]
    origin: String,

    /// Where the per-order summary report is written
    #[arg(long, default_value = "order_summaries.csv")]
    summaries: PathBuf,

    /// Where the monthly averages report is written
    #[arg(long, default_value = "monthly_averages.csv")]
    averages: PathBuf,
}

fn main() {
    env_logger::init();

    if let Err(error) = run(Args::parse()) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let status: Status = args.status.parse()?;
    let origin: Origin = args.origin.parse()?;

    let orders = read_orders(File::open(&args.orders)?)?;
    let items = read_order_items(File::open(&args.items)?)?;
    info!("read {} orders and {} order items", orders.len(), items.len());

    let mut summaries = process_orders(&orders, items, status, origin);
    summaries.sort_unstable_by_key(|summary| summary.order_id);

    let mut averages = monthly_averages(&orders, &summaries)?;
    averages.sort_unstable_by(|a, b| (&a.year, &a.month).cmp(&(&b.year, &b.month)));
    info!(
        "{} orders matched the filter across {} months",
        summaries.len(),
        averages.len()
    );

    write_summaries(&summaries, File::create(&args.summaries)?)?;
    write_monthly_averages(&averages, File::create(&args.averages)?)?;

    Ok(())
}
