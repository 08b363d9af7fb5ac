//! Typed product identifier.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of a [`Product`](crate::product::Product).
///
/// The catalog owns the format (`"P-0012"`, a SKU, a sheet row key…); the
/// storefront only compares it and embeds it in paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Wrap an identifier string as-is.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier is empty or whitespace only.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_raw_identifier() {
        assert_eq!(ProductId::new("P-001").to_string(), "P-001");
    }

    #[test]
    fn should_serialize_as_plain_string() {
        let id = ProductId::new("FIL-88");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"FIL-88\"");
        let parsed: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn should_report_blank_when_only_whitespace() {
        assert!(ProductId::new("  ").is_blank());
        assert!(ProductId::default().is_blank());
        assert!(!ProductId::new("7").is_blank());
    }
}
