//! Amount Type Identifier
//!
//! Value object naming a concrete amount representation. The registry
//! uses it purely as a comparable, hashable key; it never interprets
//! the name.

use serde::{Deserialize, Serialize};

/// Value Object: Amount Type Identifier
///
/// Opaque identifier for a concrete amount representation, analogous to a
/// type tag. Identity is the name and nothing else: two `AmountType`
/// values with the same name refer to the same representation for the
/// process lifetime.
///
/// ## Business Rules
///
/// - Immutable once constructed
/// - Usable as a map key (`Eq + Hash + Ord`)
/// - The registry rejects empty names as invalid arguments at lookup time
///
/// ## Example
///
/// ```rust
/// use maf_domain::value_objects::AmountType;
///
/// let decimal = AmountType::new("decimal");
/// assert_eq!(decimal.name(), "decimal");
/// assert_eq!(decimal, AmountType::new("decimal"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AmountType(String);

impl AmountType {
    /// Create an amount type from its name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self(name.into())
    }

    /// The name identifying this amount type
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AmountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AmountType {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
