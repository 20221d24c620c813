use core::str::FromStr;
use serde::{Deserialize, Serialize};

use artifacts_core::{DomainError, Entity};

use crate::price::Price;

/// Product identifier as issued by the product service.
///
/// Opaque and non-empty; compared by exact string value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(DomainError::invalid_id("ProductId: must not be empty"));
        }
        Ok(Self(s.to_string()))
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A selectable catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: ProductId,
    #[serde(default)]
    pub name: String,
    pub price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
}

impl Product {
    pub fn new(product_id: ProductId, name: impl Into<String>, price: Price) -> Self {
        Self {
            product_id,
            name: name.into(),
            price,
            sku: None,
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.product_id
    }
}
