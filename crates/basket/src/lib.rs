//! Line-item basket for the create-artifact form.
//!
//! This crate tracks the requested quantity per catalog product and derives
//! the order payload submitted with the form. Deterministic domain logic only
//! (no IO, no HTTP, no storage).

pub mod basket;
pub mod line_item;
pub mod payload;

pub use basket::Basket;
pub use line_item::{LineItem, LineItemState};
pub use payload::{OrderLine, OrderPayload};
