//! Navigation targets and the navigator collaborator.

use std::sync::{Mutex, PoisonError};

/// A view route, e.g. `artifacts`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route(String);

impl Route {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Route {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fire-and-forget redirect.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &Route);
}

/// Navigator that only remembers where it was sent.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<Route> {
        self.visited
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &Route) {
        self.visited
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(route.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_navigator_keeps_visit_order() {
        let nav = RecordingNavigator::new();
        nav.navigate(&Route::new("artifacts"));
        nav.navigate(&Route::new("artifacts/42"));

        assert_eq!(
            nav.visited(),
            vec![Route::new("artifacts"), Route::new("artifacts/42")]
        );
    }
}
