use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A catalog price exactly as the product service reports it.
///
/// Integer and decimal prices are both accepted and passed into the order
/// payload unchanged; the basket never does arithmetic on them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Number);

impl Price {
    pub fn new(amount: u64) -> Self {
        Self(Number::from(amount))
    }

    /// `None` for NaN or infinite values, which JSON cannot carry.
    pub fn from_f64(amount: f64) -> Option<Self> {
        Number::from_f64(amount).map(Self)
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
