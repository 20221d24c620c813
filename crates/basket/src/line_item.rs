use std::num::NonZeroU32;
use std::sync::Arc;

use artifacts_core::{DomainError, DomainResult};
use artifacts_products::{Product, ProductId};

use crate::payload::OrderLine;

/// Selection state of a single line item.
///
/// `Unselected --inc--> Selected(1) --inc--> Selected(n+1)`;
/// `Selected(1) --dec--> Unselected`; `Unselected --dec--> Unselected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineItemState {
    Unselected,
    Selected(NonZeroU32),
}

/// A catalog product paired with an optional requested quantity.
///
/// The product is shared with the catalog, not copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    product: Arc<Product>,
    quantity: Option<NonZeroU32>,
}

impl LineItem {
    /// A fresh, unselected line item.
    pub fn new(product: Arc<Product>) -> Self {
        Self {
            product,
            quantity: None,
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product.product_id
    }

    pub fn quantity(&self) -> Option<NonZeroU32> {
        self.quantity
    }

    pub fn state(&self) -> LineItemState {
        match self.quantity {
            Some(n) => LineItemState::Selected(n),
            None => LineItemState::Unselected,
        }
    }

    pub fn is_selected(&self) -> bool {
        self.quantity.is_some()
    }

    /// Payload projection; `None` for unselected items.
    pub fn to_order_line(&self) -> Option<OrderLine> {
        self.quantity.map(|quantity| OrderLine {
            product_id: self.product.product_id.clone(),
            price: self.product.price.clone(),
            quantity: quantity.get(),
        })
    }

    pub(crate) fn increment(&mut self) -> DomainResult<NonZeroU32> {
        let next = match self.quantity {
            None => NonZeroU32::MIN,
            Some(n) => n.checked_add(1).ok_or_else(|| {
                DomainError::invariant(format!(
                    "quantity for product '{}' cannot exceed {}",
                    self.product.product_id,
                    u32::MAX
                ))
            })?,
        };
        self.quantity = Some(next);
        Ok(next)
    }

    pub(crate) fn decrement(&mut self) -> Option<NonZeroU32> {
        self.quantity = self.quantity.and_then(|n| NonZeroU32::new(n.get() - 1));
        self.quantity
    }
}
