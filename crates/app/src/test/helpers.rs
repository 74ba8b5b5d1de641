//! Test Helpers

use std::{sync::Arc, time::Duration};

use brewpos::{
    navigation::View,
    customers::{Customer, CustomerId},
    payments::{PaymentMethod, PaymentMethodId},
    prices::Price,
    products::{Category, CategoryId, Product, ProductId},
    session::{AccessToken, Role, Session},
};

use crate::{
    gateway::ApiClient,
    navigator::Navigator,
    session::{MemoryTokenStorage, SessionStore},
};

pub(crate) fn category(id: u64, name: &str) -> Category {
    Category {
        id: CategoryId::new(id),
        name: name.to_string(),
        description: None,
        image_url: None,
    }
}

pub(crate) fn product(id: u64, category: u64, name: &str, price: u64) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        description: None,
        price: Price::new(price),
        category_id: CategoryId::new(category),
        image_url: None,
    }
}

pub(crate) fn payment_method(id: u64, code: &str, name: &str) -> PaymentMethod {
    PaymentMethod {
        id: PaymentMethodId::new(id),
        code: code.to_string(),
        name: name.to_string(),
        description: None,
    }
}

pub(crate) fn customer(id: u64, name: &str) -> Customer {
    Customer {
        id: CustomerId::new(id),
        customer_name: name.to_string(),
        phone: None,
        address: None,
        city: None,
        sort_order: 0,
        is_active: true,
        created_at: None,
    }
}

/// Gateway client logged in with `role`, currently showing `view`.
pub(crate) async fn logged_in_client(
    base_url: &str,
    role: Role,
    view: View,
) -> Result<ApiClient, Box<dyn std::error::Error>> {
    let session = SessionStore::new(Arc::new(MemoryTokenStorage::new()));
    session
        .begin(Session::from_login(AccessToken::new("tok"), role))
        .await?;

    Ok(ApiClient::new(
        base_url,
        Duration::from_secs(5),
        session,
        Navigator::new(view),
    )?)
}
