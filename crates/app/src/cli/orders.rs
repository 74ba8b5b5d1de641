use std::str::FromStr;

use clap::Args;

use brewpos::{
    customers::CustomerId,
    navigation::View,
    orders::{DateFilter, OrderId},
    prices::{format_money, format_price},
    products::ProductId,
};
use brewpos_app::{
    context::AppContext,
    domain::orders::{OrderView, order_history, view_order},
};

use super::{open, table};

/// `PRODUCT_ID[:QUANTITY]`
#[derive(Debug, Clone)]
pub(crate) struct ItemArg {
    product: ProductId,
    quantity: Option<String>,
}

impl FromStr for ItemArg {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (product, quantity) = match value.split_once(':') {
            Some((product, quantity)) => (product, Some(quantity.to_string())),
            None => (value, None),
        };

        let product = product
            .trim()
            .parse()
            .map_err(|error| format!("invalid product id {product:?}: {error}"))?;

        Ok(Self { product, quantity })
    }
}

#[derive(Debug, Args)]
pub(crate) struct OrderArgs {
    /// Item to add, as PRODUCT_ID or PRODUCT_ID:QUANTITY (repeatable)
    #[arg(long = "item", required = true)]
    items: Vec<ItemArg>,

    /// Payment method code; defaults to the first one offered
    #[arg(long)]
    payment: Option<String>,

    /// Customer the order is placed for
    #[arg(long)]
    customer: Option<CustomerId>,
}

#[derive(Debug, Args)]
pub(crate) struct HistoryArgs {
    /// today, yesterday, 7days, 14days or 30days
    #[arg(long, default_value_t = DateFilter::Today)]
    filter: DateFilter,
}

#[derive(Debug, Args)]
pub(crate) struct OrderIdArgs {
    /// Order id
    id: OrderId,
}

pub(crate) async fn order(context: &AppContext, args: OrderArgs) -> Result<(), String> {
    open(context, View::Order).await?;

    let mut till = context.till();
    till.open().await;
    till.select_category(None).await;

    for item in &args.items {
        till.add_product(item.product)
            .map_err(|error| error.to_string())?;

        if let Some(quantity) = &item.quantity {
            till.cart_mut()
                .set_quantity(item.product, quantity)
                .map_err(|error| error.to_string())?;
        }
    }

    if let Some(code) = &args.payment {
        if !till.select_payment_method(code) {
            return Err(format!("unknown payment method {code:?}"));
        }
    }

    till.select_customer(args.customer);

    let mut rows = Vec::new();

    for line in till.cart().items() {
        rows.push([
            line.product_name.clone(),
            line.quantity().to_string(),
            format_price(line.unit_price, context.currency),
            line.subtotal()
                .map(|subtotal| format_price(subtotal, context.currency))
                .map_err(|error| error.to_string())?,
        ]);
    }

    let total = till.cart().total().map_err(|error| error.to_string())?;

    println!("{}", table::render(["Item", "Qty", "Price", "Subtotal"], rows, 1..));
    println!("total: {}", format_money(&total));
    println!("payment: {}", till.payment_method().unwrap_or("-"));

    let order_id = till
        .place_order()
        .await
        .map_err(|error| {
            if error.is_validation() {
                error.to_string()
            } else {
                format!("{error}: {}", source_message(&error))
            }
        })?;

    println!("order #{order_id} placed");

    Ok(())
}

pub(crate) async fn history(context: &AppContext, args: HistoryArgs) -> Result<(), String> {
    open(context, View::OrderHistory).await?;

    let orders = order_history(context.orders.as_ref(), args.filter).await;

    let mut rows = Vec::new();

    for order in orders {
        rows.push([
            order.id.to_string(),
            order.order_date.to_string(),
            order.total_quantity.to_string(),
            format_price(order.total_amount, context.currency),
        ]);
    }

    println!("{}", table::render(["Order", "Date", "Qty", "Total"], rows, 2..));

    Ok(())
}

pub(crate) async fn view(context: &AppContext, args: OrderIdArgs) -> Result<(), String> {
    open(context, View::ViewOrder(args.id)).await?;

    let order = match view_order(context.orders.as_ref(), args.id).await {
        OrderView::Found(order) => order,
        OrderView::NotFound(id) => {
            return Err(format!("order #{id} not found; see `brewpos history`"));
        }
        OrderView::Failed(error) => return Err(format!("failed to load order: {error}")),
    };

    let mut rows = Vec::new();

    for line in &order.items {
        rows.push([
            line.product_name.clone(),
            line.quantity.to_string(),
            format_price(line.unit_price, context.currency),
            line.subtotal()
                .map(|subtotal| format_price(subtotal, context.currency))
                .map_err(|error| error.to_string())?,
        ]);
    }

    println!("order #{} at {}", order.id, order.created_at);

    if let Some(status) = &order.status {
        println!("status: {status}");
    }

    println!("{}", table::render(["Item", "Qty", "Price", "Subtotal"], rows, 1..));
    println!("total: {}", format_price(order.total_amount, context.currency));

    Ok(())
}

pub(crate) async fn delete(context: &AppContext, args: OrderIdArgs) -> Result<(), String> {
    open(context, View::OrderHistory).await?;

    let acknowledgement = context
        .orders
        .delete_order(args.id)
        .await
        .map_err(|error| format!("failed to delete order #{}: {error}", args.id))?;

    if acknowledgement.message.is_empty() {
        println!("order #{} deleted", args.id);
    } else {
        println!("{}", acknowledgement.message);
    }

    Ok(())
}

fn source_message(error: &dyn std::error::Error) -> String {
    error
        .source()
        .map_or_else(String::new, ToString::to_string)
}
