//! Submission payload derived from a basket.

use serde::{Deserialize, Serialize};

use artifacts_core::ValueObject;
use artifacts_products::{Price, ProductId};

/// One selected product in a submitted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: ProductId,
    /// Unit price, copied from the catalog product.
    pub price: Price,
    /// Always >= 1.
    pub quantity: u32,
}

impl ValueObject for OrderLine {}

/// Caller form fields merged with the selected line items.
///
/// `fields` is flattened on the wire, so a form with a `name` field
/// serializes as `{"name": ..., "artifactProduct": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload<F> {
    #[serde(flatten)]
    pub fields: F,
    pub artifact_product: Vec<OrderLine>,
}

impl<F> OrderPayload<F> {
    pub fn lines(&self) -> &[OrderLine] {
        &self.artifact_product
    }
}
