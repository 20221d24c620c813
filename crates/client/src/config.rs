//! View configuration (environment-driven).

use crate::navigation::Route;

pub const LIST_ROUTE_ENV: &str = "ARTIFACTS_LIST_ROUTE";
pub const DEFAULT_LIST_ROUTE: &str = "artifacts";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateViewConfig {
    /// Where the view goes after a successful submit or a cancel.
    pub list_route: Route,
}

impl Default for CreateViewConfig {
    fn default() -> Self {
        Self {
            list_route: Route::new(DEFAULT_LIST_ROUTE),
        }
    }
}

impl CreateViewConfig {
    /// Read `ARTIFACTS_LIST_ROUTE`, falling back to `artifacts`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(LIST_ROUTE_ENV) {
            Some(route) if !route.trim().is_empty() => Self {
                list_route: Route::new(route.trim()),
            },
            _ => {
                tracing::debug!("{LIST_ROUTE_ENV} not set; using '{DEFAULT_LIST_ROUTE}'");
                Self::default()
            }
        }
    }
}
