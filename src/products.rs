//! Products
//!
//! Catalog entries as returned by the backend. They are immutable for the
//! lifetime of a fetch; the cart snapshots what it needs at add-time.

use serde::{Deserialize, Serialize};

use crate::{ids::TypedId, prices::Price};

/// Category Id
pub type CategoryId = TypedId<Category>;

/// Product Id
pub type ProductId = TypedId<Product>;

/// Product category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Category identifier
    pub id: CategoryId,

    /// Category name
    pub name: String,

    /// Optional longer description
    #[serde(default)]
    pub description: Option<String>,

    /// Image reference
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product identifier
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Optional longer description
    #[serde(default)]
    pub description: Option<String>,

    /// Product price
    pub price: Price,

    /// Owning category
    pub category_id: CategoryId,

    /// Image reference
    #[serde(default)]
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn decodes_backend_product() -> TestResult {
        let product: Product = serde_json::from_str(
            r#"{"id": 3, "name": "Latte", "price": 35000.0, "category_id": 1, "image_url": null}"#,
        )?;

        assert_eq!(product.id, ProductId::new(3));
        assert_eq!(product.price, Price::new(35_000));
        assert_eq!(product.category_id, CategoryId::new(1));
        assert!(product.description.is_none());

        Ok(())
    }

    #[test]
    fn decodes_category_without_optional_fields() -> TestResult {
        let category: Category = serde_json::from_str(r#"{"id": 1, "name": "Coffee"}"#)?;

        assert_eq!(category.name, "Coffee");
        assert!(category.image_url.is_none());

        Ok(())
    }
}
