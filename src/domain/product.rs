use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::catalog::Category;
use super::validation::{ProductField, ValidationError, ValidationErrors};

const MIN_NAME_LEN: usize = 3;

/// Represents a product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub category: Category,
    pub price: Decimal,
    pub stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Validated payload for creating a new product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub name: String,
    pub sku: String,
    pub category: Category,
    pub price: Decimal,
    pub stock: u32,
    pub description: Option<String>,
    pub active: bool,
}

/// Raw product form input, as submitted.
///
/// Everything is optional or stringly typed here; [`ProductInput::validate`]
/// turns it into a [`ProductCreate`] or reports every failing field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductInput {
    pub name: String,
    pub sku: String,
    pub category: String,
    pub price: Option<Decimal>,
    pub stock: Option<i64>,
    pub description: Option<String>,
    pub active: Option<bool>,
}

impl Product {
    /// Builds a product directly, bypassing validation. Used for seed data.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        sku: impl Into<String>,
        category: Category,
        price: Decimal,
        stock: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sku: normalize_sku(&sku.into()),
            category,
            price,
            stock,
            description: None,
            active: true,
            created_at: Utc::now(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn created_on(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Compares under the same normalization the catalog uses for uniqueness.
    pub fn has_sku(&self, sku: &str) -> bool {
        self.sku == normalize_sku(sku)
    }
}

/// SKUs are stored trimmed and uppercased.
pub fn normalize_sku(sku: &str) -> String {
    sku.trim().to_uppercase()
}

impl ProductInput {
    pub fn validate(self) -> Result<ProductCreate, ValidationErrors<ProductField>> {
        let mut errors = ValidationErrors::new();

        let name = self.name.trim().to_string();
        if name.is_empty() {
            errors.add(ProductField::Name, ValidationError::NameRequired);
        } else if name.chars().count() < MIN_NAME_LEN {
            errors.add(ProductField::Name, ValidationError::NameTooShort);
        }

        let sku = normalize_sku(&self.sku);
        if sku.is_empty() {
            errors.add(ProductField::Sku, ValidationError::SkuRequired);
        }

        let category = match self.category.trim() {
            "" => {
                errors.add(ProductField::Category, ValidationError::CategoryRequired);
                None
            }
            label => match label.parse::<Category>() {
                Ok(category) => Some(category),
                Err(_) => {
                    errors.add(ProductField::Category, ValidationError::UnknownCategory(label.to_string()));
                    None
                }
            },
        };

        let price = match self.price {
            Some(price) if price > Decimal::ZERO => Some(price),
            _ => {
                errors.add(ProductField::Price, ValidationError::InvalidPrice);
                None
            }
        };

        let stock = match self.stock.map(u32::try_from) {
            Some(Ok(stock)) => Some(stock),
            _ => {
                errors.add(ProductField::Stock, ValidationError::InvalidStock);
                None
            }
        };

        let description = self
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        match (category, price, stock) {
            (Some(category), Some(price), Some(stock)) if errors.is_empty() => Ok(ProductCreate {
                name,
                sku,
                category,
                price,
                stock,
                description,
                active: self.active.unwrap_or(true),
            }),
            _ => Err(errors),
        }
    }
}
