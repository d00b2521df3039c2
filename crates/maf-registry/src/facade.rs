//! Amounts Facade - single entry point over both provider roles
//!
//! The composition root constructs one `AmountsFacade` around a
//! [`ProviderLocator`] and injects it wherever factory resolution is
//! needed; there is no global instance. Each role's handle is established
//! lazily, on first use of that path, under a `OnceLock` barrier so
//! concurrent first callers cannot race discovery or observe a
//! half-constructed handle.
//!
//! Locator failures are diagnostics, not crashes: a role whose discovery
//! errors (or finds nothing) is recorded as permanently absent, and the
//! facade keeps serving the other path in a degraded-but-usable state.

use std::sync::{Arc, OnceLock};

use maf_domain::error::Result;
use maf_domain::ports::{AmountFactory, ProviderLocator, ProviderRole};
use maf_domain::value_objects::{AmountType, FactoryQuery};
use tracing::{error, info, warn};

use crate::handle::ProviderHandle;
use crate::query::AmountQueryResolver;
use crate::registry::AmountRegistry;

/// Single entry point composing the registry and query paths
///
/// All public operations are pure pass-throughs to [`AmountRegistry`] and
/// [`AmountQueryResolver`] with identical failure contracts; the facade
/// adds no state beyond the two once-initialized handles.
pub struct AmountsFacade {
    locator: Arc<dyn ProviderLocator>,
    registry: OnceLock<AmountRegistry>,
    query: OnceLock<AmountQueryResolver>,
}

impl AmountsFacade {
    /// Create a facade over the given locator
    ///
    /// Discovery does not run here; each role is resolved on first use of
    /// its path and the outcome is frozen for the process lifetime.
    pub fn new(locator: Arc<dyn ProviderLocator>) -> Self {
        Self {
            locator,
            registry: OnceLock::new(),
            query: OnceLock::new(),
        }
    }

    fn registry(&self) -> &AmountRegistry {
        self.registry.get_or_init(|| {
            let handle = match self.locator.registry_provider() {
                Ok(Some(provider)) => {
                    info!("discovered amount registry provider");
                    ProviderHandle::present(ProviderRole::Registry, provider)
                }
                Ok(None) => {
                    warn!("no amount registry provider found, direct lookups will not be available");
                    ProviderHandle::absent(ProviderRole::Registry)
                }
                Err(e) => {
                    error!(error = %e, "failed to discover amount registry provider");
                    ProviderHandle::absent(ProviderRole::Registry)
                }
            };
            AmountRegistry::new(handle)
        })
    }

    fn query(&self) -> &AmountQueryResolver {
        self.query.get_or_init(|| {
            let handle = match self.locator.query_provider() {
                Ok(Some(provider)) => {
                    info!("discovered amount query provider");
                    ProviderHandle::present(ProviderRole::Query, provider)
                }
                Ok(None) => {
                    warn!("no amount query provider found, query functionality will not be available");
                    ProviderHandle::absent(ProviderRole::Query)
                }
                Err(e) => {
                    error!(error = %e, "failed to discover amount query provider");
                    ProviderHandle::absent(ProviderRole::Query)
                }
            };
            AmountQueryResolver::new(handle)
        })
    }

    // ========================================================================
    // Direct lookup path (registry provider)
    // ========================================================================

    /// Access the factory for the given amount type
    ///
    /// Never returns an absent result: a miss is a typed
    /// `NoFactoryForType` failure.
    pub fn factory_for(&self, amount_type: &AmountType) -> Result<Arc<dyn AmountFactory>> {
        self.registry().factory_for(amount_type)
    }

    /// Access the default factory as designated by the registry provider
    pub fn default_factory(&self) -> Result<Arc<dyn AmountFactory>> {
        self.registry().default_factory()
    }

    /// The amount type of the default factory
    pub fn default_type(&self) -> Result<AmountType> {
        self.registry().default_type()
    }

    /// Every registered factory, in provider-defined order
    pub fn all_factories(&self) -> Result<Vec<Arc<dyn AmountFactory>>> {
        self.registry().all_factories()
    }

    /// Every registered amount type, in provider-defined order
    pub fn all_types(&self) -> Result<Vec<AmountType>> {
        self.registry().all_types()
    }

    // ========================================================================
    // Query path (query provider)
    // ========================================================================

    /// One factory matching the query, or `None` when nothing matches
    pub fn find_factory(&self, query: &FactoryQuery) -> Result<Option<Arc<dyn AmountFactory>>> {
        self.query().find_factory(query)
    }

    /// Every factory matching the query, possibly empty
    pub fn find_factories(&self, query: &FactoryQuery) -> Result<Vec<Arc<dyn AmountFactory>>> {
        self.query().find_factories(query)
    }

    /// Whether at least one factory matches the query
    pub fn is_available(&self, query: &FactoryQuery) -> Result<bool> {
        self.query().is_available(query)
    }
}

impl std::fmt::Debug for AmountsFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AmountsFacade")
            .field("registry", &self.registry.get())
            .field("query", &self.query.get())
            .finish_non_exhaustive()
    }
}
