//! The product catalog collaborator.

use async_trait::async_trait;
use thiserror::Error;

use crate::product::Product;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("product catalog unavailable: {0}")]
    Unavailable(String),
}

/// Source of the selectable products.
///
/// `fetch` delivers the whole catalog in catalog order; there is no
/// pagination. Callers fetch once per basket initialization.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Product>, CatalogError>;
}

/// A fixed, in-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
}

impl InMemoryCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

#[async_trait]
impl ProductCatalog for InMemoryCatalog {
    async fn fetch(&self) -> Result<Vec<Product>, CatalogError> {
        tracing::debug!(count = self.products.len(), "serving in-memory catalog");
        Ok(self.products.clone())
    }
}
