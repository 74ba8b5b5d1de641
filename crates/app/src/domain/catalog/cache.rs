//! Client-side catalog cache.
//!
//! Categories and payment methods are loaded once. Products are fetched per
//! selected category; every selection takes a generation ticket and only the
//! response for the most recent ticket is applied, so a slow response for an
//! earlier category can never overwrite a newer one.

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use brewpos::{
    payments::PaymentMethod,
    products::{Category, CategoryId, Product, ProductId},
};

use crate::domain::catalog::CatalogService;

/// Ticket for an in-flight product fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductRequest {
    pub category: Option<CategoryId>,
    generation: u64,
}

/// Categories, payment methods and the products of the selected category.
#[derive(Debug, Default)]
pub struct CatalogCache {
    categories: Vec<Category>,
    payment_methods: Vec<PaymentMethod>,
    selected: Option<CategoryId>,
    products: Vec<Product>,
    known: FxHashMap<ProductId, Product>,
    generation: u64,
}

impl CatalogCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load categories and payment methods, then select the default category.
    /// Failures degrade to empty lists.
    pub async fn load(&mut self, service: &dyn CatalogService) {
        self.categories = service.categories().await.unwrap_or_else(|error| {
            warn!("failed to load categories: {error}");
            Vec::new()
        });

        self.payment_methods = service.payment_methods().await.unwrap_or_else(|error| {
            warn!("failed to load payment methods: {error}");
            Vec::new()
        });

        debug!(
            categories = self.categories.len(),
            payment_methods = self.payment_methods.len(),
            "catalog loaded"
        );

        self.reset_selection(service).await;
    }

    /// Select the first category, the default after load and after an order.
    pub async fn reset_selection(&mut self, service: &dyn CatalogService) -> bool {
        let first = self.categories.first().map(|category| category.id);

        self.select_category(service, first).await
    }

    /// Select `category` and fetch its products. Returns whether the response
    /// was applied.
    pub async fn select_category(
        &mut self,
        service: &dyn CatalogService,
        category: Option<CategoryId>,
    ) -> bool {
        let request = self.begin_selection(category);

        let products = service.products(category).await.unwrap_or_else(|error| {
            warn!(?category, "failed to load products: {error}");
            Vec::new()
        });

        self.complete_selection(request, products)
    }

    /// Record a new selection and hand out the ticket for its fetch.
    pub fn begin_selection(&mut self, category: Option<CategoryId>) -> ProductRequest {
        self.generation += 1;
        self.selected = category;

        ProductRequest {
            category,
            generation: self.generation,
        }
    }

    /// Apply the products fetched for `request`, unless a newer selection has
    /// been made since.
    pub fn complete_selection(&mut self, request: ProductRequest, products: Vec<Product>) -> bool {
        if request.generation != self.generation {
            debug!(
                category = ?request.category,
                stale = request.generation,
                latest = self.generation,
                "discarding stale product response"
            );

            return false;
        }

        for product in &products {
            self.known.insert(product.id, product.clone());
        }

        self.products = products;

        true
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn selected_category(&self) -> Option<CategoryId> {
        self.selected
    }

    /// Products of the current selection.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Any product seen so far, whatever category it was listed under.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.known.get(&id)
    }

    #[must_use]
    pub fn payment_methods(&self) -> &[PaymentMethod] {
        &self.payment_methods
    }

    #[must_use]
    pub fn payment_method(&self, code: &str) -> Option<&PaymentMethod> {
        self.payment_methods
            .iter()
            .find(|method| method.code.eq_ignore_ascii_case(code))
    }
}
