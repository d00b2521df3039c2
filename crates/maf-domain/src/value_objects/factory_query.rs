//! Factory Selection Query
//!
//! Caller-built descriptor of selection criteria over registered factories.
//! The registry core treats it as opaque input; matching semantics belong
//! entirely to the query provider answering it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::value_objects::AmountType;

/// Value Object: Factory Query
///
/// Immutable selection criteria for attribute-based factory lookup.
/// An unset field places no constraint; an empty query is legal and
/// matches whatever the provider decides an unconstrained query matches.
///
/// # Example
///
/// ```rust
/// use maf_domain::value_objects::FactoryQuery;
///
/// let query = FactoryQuery::new()
///     .with_precision(19)
///     .with_fixed_scale(true)
///     .with_extra("rounding", "half-even");
/// assert_eq!(query.precision, Some(19));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactoryQuery {
    /// Required total precision in digits
    pub precision: Option<u32>,
    /// Required maximum scale (fractional digits)
    pub max_scale: Option<i32>,
    /// Whether a fixed-scale representation is required
    pub fixed_scale: Option<bool>,
    /// Restrict matching to one concrete amount type
    pub target_type: Option<AmountType>,
    /// Additional provider-specific criteria
    pub extra: HashMap<String, String>,
}

impl FactoryQuery {
    /// Create an unconstrained query
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a total precision
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Require a maximum scale
    pub fn with_max_scale(mut self, max_scale: i32) -> Self {
        self.max_scale = Some(max_scale);
        self
    }

    /// Require (or forbid) a fixed-scale representation
    pub fn with_fixed_scale(mut self, fixed_scale: bool) -> Self {
        self.fixed_scale = Some(fixed_scale);
        self
    }

    /// Restrict matching to the given amount type
    pub fn with_target_type(mut self, target_type: AmountType) -> Self {
        self.target_type = Some(target_type);
        self
    }

    /// Add a provider-specific criterion
    pub fn with_extra<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Whether the query places no constraint at all
    pub fn is_unconstrained(&self) -> bool {
        self.precision.is_none()
            && self.max_scale.is_none()
            && self.fixed_scale.is_none()
            && self.target_type.is_none()
            && self.extra.is_empty()
    }
}
