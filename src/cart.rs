//! Cart
//!
//! The order in progress: one [`LineItem`] per distinct product, each holding a
//! snapshot of the product name and unit price taken when it was first added.
//! Catalog changes during the session never touch lines already in the cart.

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    orders::OrderLine,
    prices::{Price, PriceError, total_money},
    products::{Product, ProductId},
};

/// Errors raised by cart edits.
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// No line exists for the product.
    #[error("product {0} is not in the cart")]
    UnknownProduct(ProductId),

    /// Quantity text could not be parsed; the previous quantity is kept.
    #[error("invalid quantity {0:?}")]
    InvalidQuantity(String),

    /// Price arithmetic failed.
    #[error(transparent)]
    Price(#[from] PriceError),
}

/// One product entry in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    /// Product this line refers to.
    pub product_id: ProductId,

    /// Product name at the time the line was created.
    pub product_name: String,

    /// Unit price at the time the line was created.
    pub unit_price: Price,

    quantity: u32,
}

impl LineItem {
    fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            product_name: product.name.clone(),
            unit_price: product.price,
            quantity: 1,
        }
    }

    /// Current quantity.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price multiplied by quantity.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Overflow`] if the multiplication overflows.
    pub fn subtotal(&self) -> Result<Price, PriceError> {
        self.unit_price.checked_mul(self.quantity)
    }
}

/// Cart
#[derive(Debug, Clone)]
pub struct Cart {
    items: Vec<LineItem>,
    currency: &'static Currency,
}

impl Cart {
    /// Create an empty cart priced in `currency`.
    pub fn new(currency: &'static Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// Add one unit of `product`, creating the line if needed. Returns the new quantity.
    pub fn add(&mut self, product: &Product) -> u32 {
        if let Some(item) = self.line_mut(product.id) {
            item.quantity = item.quantity.saturating_add(1);
            return item.quantity;
        }

        self.items.push(LineItem::from_product(product));

        1
    }

    /// Remove the line for `product`, if any.
    pub fn remove(&mut self, product: ProductId) -> Option<LineItem> {
        let position = self
            .items
            .iter()
            .position(|item| item.product_id == product)?;

        Some(self.items.remove(position))
    }

    /// Set a quantity from raw field text.
    ///
    /// Empty text means zero and leading zeros are ignored. Negative numbers clamp to zero.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::UnknownProduct`] when no line exists and
    /// [`CartError::InvalidQuantity`] when the text is not a number; in both cases
    /// the cart is left unchanged.
    pub fn set_quantity(&mut self, product: ProductId, raw: &str) -> Result<u32, CartError> {
        let quantity = parse_quantity(raw)?;
        let item = self
            .line_mut(product)
            .ok_or(CartError::UnknownProduct(product))?;

        item.quantity = quantity;

        Ok(quantity)
    }

    /// Step a quantity up or down.
    ///
    /// A step that would leave the line at zero or below is refused and the
    /// quantity stays where it was; zero is only reachable by direct edit.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::UnknownProduct`] when no line exists.
    pub fn adjust_quantity(&mut self, product: ProductId, delta: i32) -> Result<u32, CartError> {
        let item = self
            .line_mut(product)
            .ok_or(CartError::UnknownProduct(product))?;

        let next = i64::from(item.quantity) + i64::from(delta);

        if next > 0 {
            item.quantity = u32::try_from(next).unwrap_or(u32::MAX);
        }

        Ok(item.quantity)
    }

    /// Sum of all line subtotals.
    ///
    /// # Errors
    ///
    /// Returns a [`PriceError`] if any subtotal or the sum overflows.
    pub fn total(&self) -> Result<Money<'static, Currency>, PriceError> {
        total_money(self.items.iter().map(LineItem::subtotal), self.currency)
    }

    /// Sum of all quantities.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Line for `product`, if present.
    pub fn get(&self, product: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.product_id == product)
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check if at least one line would be sent with an order.
    pub fn has_purchasable_items(&self) -> bool {
        self.items.iter().any(|item| item.quantity > 0)
    }

    /// Currency used for totals.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Order lines for submission. Zero-quantity lines are left out.
    pub fn snapshot(&self) -> Vec<OrderLine> {
        self.items
            .iter()
            .filter(|item| item.quantity > 0)
            .map(|item| OrderLine {
                product_id: item.product_id,
                product_name: item.product_name.clone(),
                unit_price: item.unit_price,
                quantity: item.quantity,
            })
            .collect()
    }

    fn line_mut(&mut self, product: ProductId) -> Option<&mut LineItem> {
        self.items
            .iter_mut()
            .find(|item| item.product_id == product)
    }
}

fn parse_quantity(raw: &str) -> Result<u32, CartError> {
    let digits = raw.trim_start_matches('0');

    if digits.is_empty() {
        return Ok(0);
    }

    let value: i64 = digits
        .parse()
        .map_err(|_parse| CartError::InvalidQuantity(raw.to_string()))?;

    u32::try_from(value.max(0)).map_err(|_range| CartError::InvalidQuantity(raw.to_string()))
}
