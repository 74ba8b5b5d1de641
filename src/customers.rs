//! Customers
//!
//! Customer records plus the edit form used by the management view. The form
//! is updated through [`CustomerField`], one variant per editable field, so
//! every edit is typed.

use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ids::TypedId;

/// Customer Id
pub type CustomerId = TypedId<Customer>;

const fn active_by_default() -> bool {
    true
}

/// Customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Customer identifier
    pub id: CustomerId,

    /// Display name
    pub customer_name: String,

    /// Phone number
    #[serde(default)]
    pub phone: Option<String>,

    /// Street address
    #[serde(default)]
    pub address: Option<String>,

    /// City
    #[serde(default)]
    pub city: Option<String>,

    /// Listing position
    #[serde(default)]
    pub sort_order: i32,

    /// Whether the customer can be picked for new orders
    #[serde(default = "active_by_default")]
    pub is_active: bool,

    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime>,
}

/// Backend acknowledgement of a created customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CreatedCustomer {
    /// Server-assigned customer id
    pub id: CustomerId,
}

/// Customer edit form errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CustomerFormError {
    /// The customer name is blank.
    #[error("customer name is required")]
    MissingName,
}

/// Create/update payload for a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerForm {
    /// Display name
    pub customer_name: String,

    /// Phone number
    pub phone: Option<String>,

    /// Street address
    pub address: Option<String>,

    /// City
    pub city: Option<String>,

    /// Listing position
    pub sort_order: i32,

    /// Active flag
    pub is_active: bool,
}

impl Default for CustomerForm {
    fn default() -> Self {
        Self {
            customer_name: String::new(),
            phone: None,
            address: None,
            city: None,
            sort_order: 0,
            is_active: true,
        }
    }
}

/// A single typed edit to a [`CustomerForm`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerField {
    /// Display name
    Name(String),

    /// Phone number; blank clears it
    Phone(String),

    /// Street address; blank clears it
    Address(String),

    /// City; blank clears it
    City(String),

    /// Listing position
    SortOrder(i32),

    /// Active flag
    Active(bool),
}

impl CustomerField {
    /// Sort order from raw field text; anything unparsable counts as zero.
    pub fn sort_order_from_input(raw: &str) -> Self {
        Self::SortOrder(raw.trim().parse().unwrap_or_default())
    }
}

impl CustomerForm {
    /// Prefill the form from an existing customer.
    pub fn from_customer(customer: &Customer) -> Self {
        Self {
            customer_name: customer.customer_name.clone(),
            phone: customer.phone.clone(),
            address: customer.address.clone(),
            city: customer.city.clone(),
            sort_order: customer.sort_order,
            is_active: customer.is_active,
        }
    }

    /// Apply one edit.
    pub fn apply(&mut self, field: CustomerField) {
        match field {
            CustomerField::Name(name) => self.customer_name = name,
            CustomerField::Phone(phone) => self.phone = non_blank(phone),
            CustomerField::Address(address) => self.address = non_blank(address),
            CustomerField::City(city) => self.city = non_blank(city),
            CustomerField::SortOrder(sort_order) => self.sort_order = sort_order,
            CustomerField::Active(is_active) => self.is_active = is_active,
        }
    }

    /// Check the form can be submitted.
    ///
    /// # Errors
    ///
    /// Returns [`CustomerFormError::MissingName`] when the name is blank.
    pub fn validate(&self) -> Result<(), CustomerFormError> {
        if self.customer_name.trim().is_empty() {
            return Err(CustomerFormError::MissingName);
        }

        Ok(())
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
