//! The order screen: catalog browsing, cart, payment selection and submission.

use std::sync::Arc;

use rusty_money::iso::Currency;
use tracing::debug;

use brewpos::{
    cart::{Cart, CartError},
    customers::CustomerId,
    orders::OrderId,
    products::{CategoryId, ProductId},
};

use crate::domain::{
    catalog::{CatalogCache, CatalogService},
    orders::{OrderSubmission, OrdersService, SubmissionError, SubmissionState},
};

/// State behind the order screen.
pub struct Till {
    catalog_service: Arc<dyn CatalogService>,
    catalog: CatalogCache,
    cart: Cart,
    payment_method: Option<String>,
    customer: Option<CustomerId>,
    submission: OrderSubmission,
}

impl Till {
    #[must_use]
    pub fn new(
        catalog_service: Arc<dyn CatalogService>,
        orders_service: Arc<dyn OrdersService>,
        currency: &'static Currency,
    ) -> Self {
        Self {
            catalog_service,
            catalog: CatalogCache::new(),
            cart: Cart::new(currency),
            payment_method: None,
            customer: None,
            submission: OrderSubmission::new(orders_service),
        }
    }

    /// Load the catalog and preselect the first payment method.
    pub async fn open(&mut self) {
        self.catalog.load(self.catalog_service.as_ref()).await;

        if self.payment_method.is_none() {
            self.payment_method = self
                .catalog
                .payment_methods()
                .first()
                .map(|method| method.code.clone());
        }
    }

    /// Switch the product grid to `category` (`None` lists everything).
    pub async fn select_category(&mut self, category: Option<CategoryId>) -> bool {
        self.catalog
            .select_category(self.catalog_service.as_ref(), category)
            .await
    }

    /// Put one more of a catalog product in the cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::UnknownProduct`] when the product has not been
    /// listed by the catalog.
    pub fn add_product(&mut self, id: ProductId) -> Result<u32, CartError> {
        let product = self
            .catalog
            .product(id)
            .ok_or(CartError::UnknownProduct(id))?;

        Ok(self.cart.add(product))
    }

    /// Select a payment method by code. Unknown codes are ignored.
    pub fn select_payment_method(&mut self, code: &str) -> bool {
        match self.catalog.payment_method(code) {
            Some(method) => {
                self.payment_method = Some(method.code.clone());
                true
            }
            None => {
                debug!(code, "ignoring unknown payment method");
                false
            }
        }
    }

    pub fn select_customer(&mut self, customer: Option<CustomerId>) {
        self.customer = customer;
    }

    /// Submit the cart. On success the category selection returns to the
    /// default and the customer is deselected.
    ///
    /// # Errors
    ///
    /// See [`OrderSubmission::submit`].
    pub async fn place_order(&mut self) -> Result<OrderId, SubmissionError> {
        let order_id = self
            .submission
            .submit(
                &mut self.cart,
                self.payment_method.as_deref(),
                self.customer,
            )
            .await?;

        self.customer = None;
        self.catalog
            .reset_selection(self.catalog_service.as_ref())
            .await;

        Ok(order_id)
    }

    /// Leave the order screen.
    pub fn leave(&mut self) {
        self.submission.reset();
    }

    #[must_use]
    pub fn catalog(&self) -> &CatalogCache {
        &self.catalog
    }

    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    #[must_use]
    pub fn payment_method(&self) -> Option<&str> {
        self.payment_method.as_deref()
    }

    #[must_use]
    pub fn customer(&self) -> Option<CustomerId> {
        self.customer
    }

    #[must_use]
    pub fn submission_state(&self) -> &SubmissionState {
        self.submission.state()
    }
}
