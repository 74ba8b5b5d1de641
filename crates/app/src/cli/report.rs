use brewpos::{navigation::View, prices::format_price};
use brewpos_app::{context::AppContext, domain::reports::load_sales_report};

use super::{open, table};

pub(crate) async fn run(context: &AppContext) -> Result<(), String> {
    open(context, View::Report).await?;

    let report = load_sales_report(context.reports.as_ref())
        .await
        .map_err(|error| error.to_string())?;

    let money = |price| format_price(price, context.currency);

    println!("orders: {}", report.overview.total_orders);
    println!("revenue: {}", money(report.overview.total_revenue));

    let mut products = Vec::new();
    for row in report.products {
        products.push([row.product_name, row.quantity.to_string(), money(row.total_price)]);
    }

    let mut daily = Vec::new();
    for row in report.daily {
        daily.push([row.date, money(row.revenue)]);
    }

    let mut monthly = Vec::new();
    for row in report.monthly {
        monthly.push([row.month, money(row.revenue)]);
    }

    println!("{}", table::render(["Product", "Qty", "Revenue"], products, 1..));
    println!("{}", table::render(["Day", "Revenue"], daily, 1..));
    println!("{}", table::render(["Month", "Revenue"], monthly, 1..));

    Ok(())
}
