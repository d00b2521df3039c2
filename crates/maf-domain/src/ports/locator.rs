//! Provider Discovery Boundary
//!
//! The registry core depends on this interface only, never on a concrete
//! discovery strategy. A locator is consulted exactly once per role for
//! the process lifetime; whatever it answers (or fails with) is final.

use std::sync::Arc;

use crate::error::Result;
use crate::ports::providers::{AmountQueryProvider, AmountRegistryProvider};

/// The two provider roles a locator can be asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderRole {
    /// Direct type-keyed and default factory access
    Registry,
    /// Attribute-based factory selection
    Query,
}

impl std::fmt::Display for ProviderRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Registry => f.write_str("amount registry provider"),
            Self::Query => f.write_str("amount query provider"),
        }
    }
}

/// Locator capability resolving provider implementations per role
///
/// `Ok(None)` means the role has no implementation; `Err` means discovery
/// itself failed (zero-vs-ambiguous policy is the locator's own). The
/// facade treats both the same way, converting them into a permanently
/// absent handle, so a broken locator can degrade the system but never
/// crash initialization.
pub trait ProviderLocator: Send + Sync {
    /// Locate the registry provider implementation, if any
    fn registry_provider(&self) -> Result<Option<Arc<dyn AmountRegistryProvider>>>;

    /// Locate the query provider implementation, if any
    fn query_provider(&self) -> Result<Option<Arc<dyn AmountQueryProvider>>>;
}
