//! `artifacts-client`
//!
//! **Responsibility:** the create-artifact view workflow.
//!
//! Loads the product catalog into a basket, applies add/remove clicks,
//! submits the form and navigates back to the artifacts list. Rendering,
//! routing and transport are collaborators behind traits; this crate only
//! sequences them.

pub mod config;
pub mod error;
pub mod navigation;
pub mod view;

pub use config::CreateViewConfig;
pub use error::ViewError;
pub use navigation::{Navigator, RecordingNavigator, Route};
pub use view::ArtifactsCreate;
