//! Factory Capability Metadata
//!
//! Registration metadata a factory publishes alongside its type identity.
//! The registry core stores and returns it verbatim; only query providers
//! interpret it when matching a [`crate::value_objects::FactoryQuery`].

use serde::{Deserialize, Serialize};

/// Value Object: Factory Capabilities
///
/// Describes the numeric envelope a factory's amount representation
/// supports. `None` bounds mean unbounded.
///
/// ## Example
///
/// ```rust
/// use maf_domain::value_objects::FactoryCapabilities;
///
/// let caps = FactoryCapabilities::default()
///     .with_max_precision(19)
///     .with_max_scale(5)
///     .with_fixed_scale(true);
/// assert_eq!(caps.max_precision, Some(19));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactoryCapabilities {
    /// Maximum total precision in digits, `None` for unbounded
    pub max_precision: Option<u32>,
    /// Maximum scale (fractional digits), `None` for unbounded
    pub max_scale: Option<i32>,
    /// Whether the representation uses a fixed scale
    pub fixed_scale: bool,
}

impl FactoryCapabilities {
    /// Create capabilities with no bounds and a variable scale
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum precision
    pub fn with_max_precision(mut self, max_precision: u32) -> Self {
        self.max_precision = Some(max_precision);
        self
    }

    /// Set the maximum scale
    pub fn with_max_scale(mut self, max_scale: i32) -> Self {
        self.max_scale = Some(max_scale);
        self
    }

    /// Set whether the scale is fixed
    pub fn with_fixed_scale(mut self, fixed_scale: bool) -> Self {
        self.fixed_scale = fixed_scale;
        self
    }
}
