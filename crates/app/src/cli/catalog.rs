use clap::Args;

use brewpos::{navigation::View, prices::format_price, products::CategoryId};
use brewpos_app::context::AppContext;

use super::{open, table};

#[derive(Debug, Args)]
pub(crate) struct ProductsArgs {
    /// Only list products in this category
    #[arg(long)]
    category: Option<CategoryId>,
}

pub(crate) async fn categories(context: &AppContext) -> Result<(), String> {
    open(context, View::Order).await?;

    let categories = context
        .catalog
        .categories()
        .await
        .map_err(|error| format!("failed to load categories: {error}"))?;

    let rows = categories.into_iter().map(|category| {
        [
            category.id.to_string(),
            category.name,
            category.description.unwrap_or_default(),
        ]
    });

    println!("{}", table::render(["ID", "Name", "Description"], rows, 3..));

    Ok(())
}

pub(crate) async fn products(context: &AppContext, args: ProductsArgs) -> Result<(), String> {
    open(context, View::Order).await?;

    let mut till = context.till();
    till.open().await;
    till.select_category(args.category).await;

    let mut rows = Vec::new();

    for product in till.catalog().products() {
        rows.push([
            product.id.to_string(),
            product.name.clone(),
            product.category_id.to_string(),
            format_price(product.price, context.currency),
        ]);
    }

    println!("{}", table::render(["ID", "Name", "Category", "Price"], rows, 3..));

    Ok(())
}

pub(crate) async fn payment_methods(context: &AppContext) -> Result<(), String> {
    open(context, View::Order).await?;

    let methods = context
        .catalog
        .payment_methods()
        .await
        .map_err(|error| format!("failed to load payment methods: {error}"))?;

    let rows = methods
        .into_iter()
        .map(|method| [method.code, method.name, method.description.unwrap_or_default()]);

    println!("{}", table::render(["Code", "Name", "Description"], rows, 3..));

    Ok(())
}
