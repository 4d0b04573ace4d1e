//! Field-scoped validation errors.
//!
//! Every rule failure is keyed by the field that produced it so a form can
//! render the message next to the offending input. A field carries at most one
//! error; the first rule to fail wins.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// A single rule failure. The message is what the dashboard shows inline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Product name is required")]
    NameRequired,
    #[error("Name must be at least 3 characters")]
    NameTooShort,
    #[error("SKU is required")]
    SkuRequired,
    #[error("SKU must be unique")]
    SkuTaken,
    #[error("Category is required")]
    CategoryRequired,
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Price must be positive")]
    InvalidPrice,
    #[error("Stock cannot be negative")]
    InvalidStock,
    #[error("Client name is required")]
    ClientNameRequired,
    #[error("Select at least one product")]
    NoProductsSelected,
    #[error("Product is required")]
    ProductRequired,
    #[error("Unknown product: {0}")]
    UnknownProduct(String),
    #[error("Quantity must be at least 1")]
    InvalidQuantity,
    #[error("Order total is too large")]
    TotalTooLarge,
    #[error("Address is required")]
    AddressTooShort,
    #[error("Expected delivery date is required")]
    DeliveryDateRequired,
}

/// Fields of the product form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProductField {
    Name,
    Sku,
    Category,
    Price,
    Stock,
    Description,
    Active,
}

/// Fields of the order form. Line item fields carry the row index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OrderField {
    ClientName,
    Items,
    LineProduct(usize),
    LineQuantity(usize),
    PaymentStatus,
    DeliveryStatus,
    ExpectedDeliveryDate,
    DeliveryAddress,
}

/// Errors keyed by field, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors<F: Ord> {
    errors: BTreeMap<F, ValidationError>,
}

impl<F: Ord> Default for ValidationErrors<F> {
    fn default() -> Self {
        Self { errors: BTreeMap::new() }
    }
}

impl<F: Ord + Copy> ValidationErrors<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `error` for `field` unless the field already has one.
    pub fn add(&mut self, field: F, error: ValidationError) {
        self.errors.entry(field).or_insert(error);
    }

    /// Replaces whatever error `field` had.
    pub fn set(&mut self, field: F, error: ValidationError) {
        self.errors.insert(field, error);
    }

    pub fn get(&self, field: F) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    pub fn clear_field(&mut self, field: F) -> Option<ValidationError> {
        self.errors.remove(&field)
    }

    /// Drops errors whose field no longer passes `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(F) -> bool) {
        self.errors.retain(|field, _| keep(*field));
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, &ValidationError)> {
        self.errors.iter().map(|(field, error)| (*field, error))
    }

    /// `Ok(value)` when nothing was recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl<F: Ord + fmt::Debug> fmt::Display for ValidationErrors<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, error) in &self.errors {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{:?}: {}", field, error)?;
            first = false;
        }
        Ok(())
    }
}

impl<F: Ord + fmt::Debug> std::error::Error for ValidationErrors<F> {}
