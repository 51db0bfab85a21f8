//! Identifier newtypes

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Product SKU
///
/// The catalog stores SKUs mostly as strings, but some items come back
/// with numeric SKUs. Both are accepted; numbers keep their JSON text.
///
/// # Examples
///
/// ```
/// use pricesync::domain::ids::Sku;
/// use std::str::FromStr;
///
/// let sku = Sku::from_str("WID-0042").unwrap();
/// assert_eq!(sku.as_str(), "WID-0042");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sku(String);

impl Sku {
    /// Creates a new Sku, rejecting empty strings
    pub fn new(sku: impl Into<String>) -> Result<Self, String> {
        let sku = sku.into();
        if sku.is_empty() {
            return Err("SKU cannot be empty".to_string());
        }
        Ok(Self(sku))
    }

    /// Builds a Sku from a raw catalog value
    ///
    /// Returns `Ok(None)` for values that count as "no SKU" (null or empty
    /// string) and `Err` for values of a type that cannot identify a product.
    pub fn from_value(value: &Value) -> Result<Option<Self>, String> {
        match value {
            Value::Null => Ok(None),
            Value::String(s) if s.is_empty() => Ok(None),
            Value::String(s) => Ok(Some(Self(s.clone()))),
            Value::Number(n) => Ok(Some(Self(n.to_string()))),
            other => Err(other.to_string()),
        }
    }

    /// Returns the SKU as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Sku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Sku {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Sku {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
