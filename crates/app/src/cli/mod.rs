use clap::{Parser, Subcommand};

use brewpos::{navigation::View, session::Session};
use brewpos_app::{config::ClientConfig, context::AppContext};

mod auth;
mod catalog;
mod customers;
mod orders;
mod report;
mod table;

#[derive(Debug, Parser)]
#[command(name = "brewpos", about = "Point-of-sale till client", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) config: ClientConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Log in and remember the session
    Login(auth::LoginArgs),

    /// Forget the stored session
    Logout,

    /// Show the logged in user
    Whoami,

    /// List product categories
    Categories,

    /// List products
    Products(catalog::ProductsArgs),

    /// List payment methods
    PaymentMethods,

    /// Build a cart and place an order
    Order(orders::OrderArgs),

    /// List past orders
    History(orders::HistoryArgs),

    /// Show one order
    View(orders::OrderIdArgs),

    /// Delete an order
    Delete(orders::OrderIdArgs),

    /// Manage customers
    Customers(customers::CustomersCommand),

    /// Show the sales report
    Report,
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        let context = AppContext::from_config(&self.config)
            .map_err(|error| format!("failed to initialise client: {error}"))?;

        match self.command {
            Commands::Login(args) => auth::login(&context, args).await,
            Commands::Logout => auth::logout(&context).await,
            Commands::Whoami => auth::whoami(&context).await,
            Commands::Categories => catalog::categories(&context).await,
            Commands::Products(args) => catalog::products(&context, args).await,
            Commands::PaymentMethods => catalog::payment_methods(&context).await,
            Commands::Order(args) => orders::order(&context, args).await,
            Commands::History(args) => orders::history(&context, args).await,
            Commands::View(args) => orders::view(&context, args).await,
            Commands::Delete(args) => orders::delete(&context, args).await,
            Commands::Customers(command) => customers::run(&context, command).await,
            Commands::Report => report::run(&context).await,
        }
    }
}

/// Restore and validate the stored session, then gate `view` with it.
async fn open(context: &AppContext, view: View) -> Result<Session, String> {
    let session = context
        .auth
        .start()
        .await
        .ok_or_else(|| "not logged in; run `brewpos login` first".to_string())?;

    let shown = context.navigator.open(view, Some(&session));

    if shown != view {
        return Err(format!("{view} requires an administrator account"));
    }

    Ok(session)
}
