use std::collections::HashMap;
use std::num::NonZeroU32;
use std::sync::Arc;

use artifacts_core::{DomainError, DomainResult};
use artifacts_products::{Product, ProductId};

use crate::line_item::LineItem;
use crate::payload::{OrderLine, OrderPayload};

/// The line items of one in-progress order.
///
/// Items keep catalog order. An identity index gives O(1) lookup, so a
/// quantity change touches exactly one entry.
///
/// Invariant: exactly one `LineItem` per `ProductId`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Basket {
    items: Vec<LineItem>,
    index: HashMap<ProductId, usize>,
}

impl Basket {
    /// Build a basket from a freshly fetched catalog, every item unselected.
    ///
    /// A repeated `productId` keeps its first occurrence.
    pub fn initialize<I>(products: I) -> Self
    where
        I: IntoIterator<Item = Product>,
    {
        Self::from_shared(products.into_iter().map(Arc::new))
    }

    /// Like [`Basket::initialize`], for products already shared with a catalog cache.
    pub fn from_shared<I>(products: I) -> Self
    where
        I: IntoIterator<Item = Arc<Product>>,
    {
        let mut basket = Self::default();
        for product in products {
            let id = product.product_id.clone();
            if basket.index.contains_key(&id) {
                tracing::warn!(product_id = %id, "duplicate product in catalog; keeping first");
                continue;
            }
            basket.index.insert(id, basket.items.len());
            basket.items.push(LineItem::new(product));
        }
        basket
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, product_id: &ProductId) -> Option<&LineItem> {
        self.index.get(product_id).map(|&i| &self.items[i])
    }

    /// Requested quantity; `None` when unselected.
    ///
    /// Fails with `NotFound` for an id that is not in the basket.
    pub fn quantity_of(&self, product_id: &ProductId) -> DomainResult<Option<NonZeroU32>> {
        let i = self.position(product_id)?;
        Ok(self.items[i].quantity())
    }

    /// Number of line items with a quantity set.
    pub fn selected_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_selected()).count()
    }

    /// Add one unit of `product_id`. Returns the new quantity.
    ///
    /// On error the basket is left unchanged.
    pub fn increment(&mut self, product_id: &ProductId) -> DomainResult<NonZeroU32> {
        let i = self.position(product_id)?;
        let quantity = self.items[i].increment()?;
        tracing::debug!(product_id = %product_id, quantity = quantity.get(), "line item incremented");
        Ok(quantity)
    }

    /// Remove one unit of `product_id`. Returns the new quantity, `None` once
    /// the item is back to unselected.
    ///
    /// Decrementing an unselected item is a no-op. An unknown id fails with
    /// `NotFound`.
    pub fn decrement(&mut self, product_id: &ProductId) -> DomainResult<Option<NonZeroU32>> {
        let i = self.position(product_id)?;
        let quantity = self.items[i].decrement();
        tracing::debug!(
            product_id = %product_id,
            quantity = quantity.map_or(0, NonZeroU32::get),
            "line item decremented"
        );
        Ok(quantity)
    }

    /// Value-returning form of [`Basket::increment`]; `self` is untouched.
    pub fn incremented(&self, product_id: &ProductId) -> DomainResult<Self> {
        let mut next = self.clone();
        next.increment(product_id)?;
        Ok(next)
    }

    /// Value-returning form of [`Basket::decrement`]; `self` is untouched.
    pub fn decremented(&self, product_id: &ProductId) -> DomainResult<Self> {
        let mut next = self.clone();
        next.decrement(product_id)?;
        Ok(next)
    }

    /// Selected line items in basket order.
    pub fn order_lines(&self) -> Vec<OrderLine> {
        self.items.iter().filter_map(LineItem::to_order_line).collect()
    }

    /// Merge the selected line items into the caller's form fields.
    pub fn to_order_payload<F>(&self, fields: F) -> OrderPayload<F> {
        OrderPayload {
            fields,
            artifact_product: self.order_lines(),
        }
    }

    fn position(&self, product_id: &ProductId) -> DomainResult<usize> {
        self.index
            .get(product_id)
            .copied()
            .ok_or_else(|| DomainError::not_found(format!("product '{product_id}' in basket")))
    }
}
