//! Provider Locators and Registration Slices
//!
//! Two locator strategies sit behind the [`ProviderLocator`] port:
//!
//! - [`StaticProviderLocator`] - explicit injection from the composition
//!   root; no discovery at all.
//! - [`DiscoveredProviderLocator`] - link-time discovery over `linkme`
//!   distributed slices. Provider crates submit an entry per role and are
//!   found without this crate knowing any concrete implementation.
//!
//! ## Registering a provider (in a provider crate)
//!
//! ```ignore
//! use maf_registry::{RegistryProviderEntry, REGISTRY_PROVIDERS};
//!
//! #[linkme::distributed_slice(REGISTRY_PROVIDERS)]
//! static IN_MEMORY: RegistryProviderEntry = RegistryProviderEntry {
//!     name: "in-memory",
//!     description: "In-memory amount factory registry",
//!     provide: || Ok(Arc::new(build_provider()?)),
//! };
//! ```
//!
//! Discovery policy is owned here, not by the core: zero entries for a
//! role means the role is absent, exactly one is instantiated, and more
//! than one is an ambiguity error. Either error outcome is absorbed by
//! the facade into a permanently absent handle.

use std::sync::Arc;

use maf_domain::error::{Error, Result};
use maf_domain::ports::{AmountQueryProvider, AmountRegistryProvider, ProviderLocator, ProviderRole};
use tracing::debug;

// ============================================================================
// Registration slices
// ============================================================================

/// Registry entry for registry provider implementations
///
/// Submitted at link time via
/// `#[linkme::distributed_slice(REGISTRY_PROVIDERS)]`.
pub struct RegistryProviderEntry {
    /// Unique provider name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function creating the provider instance
    pub provide: fn() -> std::result::Result<Arc<dyn AmountRegistryProvider>, String>,
}

/// Registry entry for query provider implementations
pub struct QueryProviderEntry {
    /// Unique provider name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function creating the provider instance
    pub provide: fn() -> std::result::Result<Arc<dyn AmountQueryProvider>, String>,
}

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static REGISTRY_PROVIDERS: [RegistryProviderEntry] = [..];

#[linkme::distributed_slice]
pub static QUERY_PROVIDERS: [QueryProviderEntry] = [..];

/// List all registered registry providers as (name, description) pairs
pub fn list_registry_providers() -> Vec<(&'static str, &'static str)> {
    REGISTRY_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}

/// List all registered query providers as (name, description) pairs
pub fn list_query_providers() -> Vec<(&'static str, &'static str)> {
    QUERY_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}

// ============================================================================
// Discovered locator
// ============================================================================

/// Locator resolving each role from the link-time registration slices
///
/// Policy per role: zero entries is "absent" (`Ok(None)`), exactly one
/// entry is instantiated, and multiple entries are ambiguous and fail
/// discovery naming the candidates.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscoveredProviderLocator;

impl DiscoveredProviderLocator {
    /// Create a locator over the registration slices
    pub fn new() -> Self {
        Self
    }
}

impl ProviderLocator for DiscoveredProviderLocator {
    fn registry_provider(&self) -> Result<Option<Arc<dyn AmountRegistryProvider>>> {
        let entries: &[RegistryProviderEntry] = &REGISTRY_PROVIDERS;
        match entries {
            [] => {
                debug!("no registry provider entries linked");
                Ok(None)
            }
            [entry] => {
                debug!(provider = entry.name, "instantiating registry provider");
                (entry.provide)()
                    .map(Some)
                    .map_err(|e| Error::discovery(ProviderRole::Registry, e))
            }
            entries => {
                let candidates: Vec<&str> = entries.iter().map(|e| e.name).collect();
                Err(Error::discovery(
                    ProviderRole::Registry,
                    format!("ambiguous implementations: {candidates:?}"),
                ))
            }
        }
    }

    fn query_provider(&self) -> Result<Option<Arc<dyn AmountQueryProvider>>> {
        let entries: &[QueryProviderEntry] = &QUERY_PROVIDERS;
        match entries {
            [] => {
                debug!("no query provider entries linked");
                Ok(None)
            }
            [entry] => {
                debug!(provider = entry.name, "instantiating query provider");
                (entry.provide)()
                    .map(Some)
                    .map_err(|e| Error::discovery(ProviderRole::Query, e))
            }
            entries => {
                let candidates: Vec<&str> = entries.iter().map(|e| e.name).collect();
                Err(Error::discovery(
                    ProviderRole::Query,
                    format!("ambiguous implementations: {candidates:?}"),
                ))
            }
        }
    }
}

// ============================================================================
// Static locator
// ============================================================================

/// Locator handing out explicitly injected providers
///
/// The dependency-injection alternative to discovery: the composition
/// root decides which implementation serves each role, and roles left
/// unset are simply absent. This is also the natural seam for tests.
#[derive(Clone, Default)]
pub struct StaticProviderLocator {
    registry: Option<Arc<dyn AmountRegistryProvider>>,
    query: Option<Arc<dyn AmountQueryProvider>>,
}

impl StaticProviderLocator {
    /// Create a locator with both roles absent
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the registry provider implementation
    pub fn with_registry(mut self, provider: Arc<dyn AmountRegistryProvider>) -> Self {
        self.registry = Some(provider);
        self
    }

    /// Set the query provider implementation
    pub fn with_query(mut self, provider: Arc<dyn AmountQueryProvider>) -> Self {
        self.query = Some(provider);
        self
    }
}

impl ProviderLocator for StaticProviderLocator {
    fn registry_provider(&self) -> Result<Option<Arc<dyn AmountRegistryProvider>>> {
        Ok(self.registry.clone())
    }

    fn query_provider(&self) -> Result<Option<Arc<dyn AmountQueryProvider>>> {
        Ok(self.query.clone())
    }
}

impl std::fmt::Debug for StaticProviderLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticProviderLocator")
            .field("registry", &self.registry.is_some())
            .field("query", &self.query.is_some())
            .finish()
    }
}
