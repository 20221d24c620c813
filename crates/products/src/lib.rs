//! Products catalog module.
//!
//! Defines the selectable `Product` and the `ProductCatalog` collaborator the
//! create-artifact view loads its line items from. Pure data plus a trait seam;
//! the in-memory catalog is the only implementation shipped here.

pub mod catalog;
pub mod price;
pub mod product;

pub use catalog::{CatalogError, InMemoryCatalog, ProductCatalog};
pub use price::Price;
pub use product::{Product, ProductId};
