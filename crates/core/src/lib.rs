//! `artifacts-core`: shared domain building blocks.
//!
//! Pure domain primitives only; no IO, no transport, no storage.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{ArtifactId, TenantId};
pub use value_object::ValueObject;
