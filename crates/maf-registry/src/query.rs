//! Query Resolver - attribute-based factory selection
//!
//! Pass-through layer over the query provider. Zero matches is a
//! legitimate outcome on this path, not an error; only a missing provider
//! turns into a failure.

use std::sync::Arc;

use maf_domain::error::Result;
use maf_domain::ports::{AmountFactory, AmountQueryProvider};
use maf_domain::value_objects::FactoryQuery;
use tracing::debug;

use crate::handle::ProviderHandle;

/// Attribute-based selection path backed by the query provider
pub struct AmountQueryResolver {
    handle: ProviderHandle<dyn AmountQueryProvider>,
}

impl AmountQueryResolver {
    /// Wrap an established query provider handle
    pub fn new(handle: ProviderHandle<dyn AmountQueryProvider>) -> Self {
        Self { handle }
    }

    /// Whether the query provider was discovered
    pub fn is_provider_available(&self) -> bool {
        self.handle.is_present()
    }

    /// One factory matching the query, or `None` when nothing matches
    ///
    /// With multiple candidates the provider selects one of the matches;
    /// which one is provider-defined and not promised here.
    pub fn find_factory(&self, query: &FactoryQuery) -> Result<Option<Arc<dyn AmountFactory>>> {
        let provider = self.handle.get()?;
        let found = provider.factory_for_query(query);
        if found.is_none() {
            debug!(?query, "no factory matches query");
        }
        Ok(found)
    }

    /// Every factory matching the query, possibly empty, provider-defined order
    pub fn find_factories(&self, query: &FactoryQuery) -> Result<Vec<Arc<dyn AmountFactory>>> {
        Ok(self.handle.get()?.factories_for(query))
    }

    /// Whether at least one factory matches the query
    pub fn is_available(&self, query: &FactoryQuery) -> Result<bool> {
        Ok(self.handle.get()?.is_available(query))
    }
}

impl std::fmt::Debug for AmountQueryResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AmountQueryResolver")
            .field("handle", &self.handle)
            .finish()
    }
}
