//! Capability Registry - direct type-keyed and default factory access
//!
//! Thin normalization layer over the registry provider: every call
//! re-delegates (the provider is the single source of truth, nothing is
//! cached), and this component only converts provider-side absence into
//! typed failures.

use std::sync::Arc;

use maf_domain::error::{Error, Result};
use maf_domain::ports::{AmountFactory, AmountRegistryProvider};
use maf_domain::value_objects::AmountType;
use tracing::debug;

use crate::handle::ProviderHandle;

/// Direct lookup path backed by the registry provider
///
/// Unlike the query path, a miss here is always an error: callers asking
/// for a concrete type either get its factory or a typed
/// `NoFactoryForType` failure, never an absent success.
pub struct AmountRegistry {
    handle: ProviderHandle<dyn AmountRegistryProvider>,
}

impl AmountRegistry {
    /// Wrap an established registry provider handle
    pub fn new(handle: ProviderHandle<dyn AmountRegistryProvider>) -> Self {
        Self { handle }
    }

    /// Whether the registry provider was discovered
    pub fn is_available(&self) -> bool {
        self.handle.is_present()
    }

    /// Look up the factory registered for the given amount type
    pub fn factory_for(&self, amount_type: &AmountType) -> Result<Arc<dyn AmountFactory>> {
        if amount_type.name().is_empty() {
            return Err(Error::invalid_argument("amount type name must not be empty"));
        }
        let provider = self.handle.get()?;
        provider.factory_for(amount_type).ok_or_else(|| {
            debug!(amount_type = %amount_type, "no factory registered for amount type");
            Error::no_factory_for_type(amount_type.clone())
        })
    }

    /// The factory the provider designates as default
    pub fn default_factory(&self) -> Result<Arc<dyn AmountFactory>> {
        Ok(self.handle.get()?.default_factory())
    }

    /// The amount type of the default factory
    pub fn default_type(&self) -> Result<AmountType> {
        Ok(self.handle.get()?.default_type())
    }

    /// Every registered factory, passed through verbatim
    pub fn all_factories(&self) -> Result<Vec<Arc<dyn AmountFactory>>> {
        Ok(self.handle.get()?.all_factories())
    }

    /// Every registered amount type, passed through verbatim
    pub fn all_types(&self) -> Result<Vec<AmountType>> {
        Ok(self.handle.get()?.all_types())
    }
}

impl std::fmt::Debug for AmountRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AmountRegistry")
            .field("handle", &self.handle)
            .finish()
    }
}
