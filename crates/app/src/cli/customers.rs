use clap::{Args, Subcommand};

use brewpos::{
    customers::{CustomerField, CustomerForm, CustomerId},
    navigation::View,
};
use brewpos_app::{
    context::AppContext,
    domain::customers::{customer_list, find_customer, save_customer},
};

use super::{open, table};

#[derive(Debug, Args)]
pub(crate) struct CustomersCommand {
    #[command(subcommand)]
    command: CustomersSubcommand,
}

#[derive(Debug, Subcommand)]
enum CustomersSubcommand {
    /// List customers
    List(ListArgs),

    /// Create a customer
    Create(FormArgs),

    /// Update a customer
    Update(UpdateArgs),

    /// Deactivate a customer
    Delete(IdArgs),

    /// Reactivate a customer
    Activate(IdArgs),
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Only customers that can be picked for orders
    #[arg(long)]
    active: bool,
}

#[derive(Debug, Args)]
struct FormArgs {
    /// Display name
    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    phone: Option<String>,

    #[arg(long)]
    address: Option<String>,

    #[arg(long)]
    city: Option<String>,

    /// Listing position
    #[arg(long)]
    sort_order: Option<String>,

    /// Mark the customer inactive
    #[arg(long)]
    inactive: bool,
}

#[derive(Debug, Args)]
struct UpdateArgs {
    /// Customer id
    id: CustomerId,

    #[command(flatten)]
    form: FormArgs,
}

#[derive(Debug, Args)]
struct IdArgs {
    /// Customer id
    id: CustomerId,
}

impl FormArgs {
    fn fields(self) -> Vec<CustomerField> {
        let mut fields = Vec::new();

        fields.extend(self.name.map(CustomerField::Name));
        fields.extend(self.phone.map(CustomerField::Phone));
        fields.extend(self.address.map(CustomerField::Address));
        fields.extend(self.city.map(CustomerField::City));
        fields.extend(
            self.sort_order
                .as_deref()
                .map(CustomerField::sort_order_from_input),
        );

        if self.inactive {
            fields.push(CustomerField::Active(false));
        }

        fields
    }
}

pub(crate) async fn run(context: &AppContext, command: CustomersCommand) -> Result<(), String> {
    open(context, View::Customers).await?;

    let service = context.customers.as_ref();

    match command.command {
        CustomersSubcommand::List(args) => {
            let rows = customer_list(service, args.active).await.into_iter().map(|customer| {
                [
                    customer.id.to_string(),
                    customer.customer_name,
                    customer.phone.unwrap_or_default(),
                    customer.city.unwrap_or_default(),
                    if customer.is_active { "yes" } else { "no" }.to_string(),
                    customer.sort_order.to_string(),
                ]
            });

            println!(
                "{}",
                table::render(["ID", "Name", "Phone", "City", "Active", "Order"], rows, 5..)
            );
        }
        CustomersSubcommand::Create(args) => {
            let mut form = CustomerForm::default();

            for field in args.fields() {
                form.apply(field);
            }

            let id = save_customer(service, None, &form)
                .await
                .map_err(|error| describe(&error))?;

            println!("customer #{id} created");
        }
        CustomersSubcommand::Update(args) => {
            let existing = find_customer(service, args.id)
                .await
                .map_err(|error| describe(&error))?;

            let mut form = CustomerForm::from_customer(&existing);

            for field in args.form.fields() {
                form.apply(field);
            }

            save_customer(service, Some(args.id), &form)
                .await
                .map_err(|error| describe(&error))?;

            println!("customer #{} updated", args.id);
        }
        CustomersSubcommand::Delete(args) => {
            let acknowledgement = service
                .deactivate(args.id)
                .await
                .map_err(|error| format!("failed to deactivate customer: {error}"))?;

            println!("{}", acknowledgement.message);
        }
        CustomersSubcommand::Activate(args) => {
            let acknowledgement = service
                .activate(args.id)
                .await
                .map_err(|error| format!("failed to activate customer: {error}"))?;

            println!("{}", acknowledgement.message);
        }
    }

    Ok(())
}

fn describe(error: &dyn std::error::Error) -> String {
    match error.source() {
        Some(source) => format!("{error}: {source}"),
        None => error.to_string(),
    }
}
