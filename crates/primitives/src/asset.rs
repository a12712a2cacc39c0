//! Asset identifiers.

use std::borrow::Borrow;

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Stock ticker symbol.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Symbol(pub String);

impl Symbol {
    /// Create a new symbol.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the symbol as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn symbol_from_str() {
        let sym: Symbol = "AAPL".into();
        assert_eq!(sym.as_str(), "AAPL");
        assert_eq!(sym.to_string(), "AAPL");
    }

    #[test]
    fn symbol_lookup_by_str() {
        let mut map = BTreeMap::new();
        map.insert(Symbol::new("SPY"), 1);
        assert_eq!(map.get("SPY"), Some(&1));
        assert_eq!(map.get("QQQ"), None);
    }
}
