//! In-Memory Amount Provider
//!
//! The stock implementation of both provider roles: a builder-registered
//! factory set with a designated default, served entirely from memory.
//! Registered into the discovery slices as provider `in-memory` with the
//! standard `decimal` and `fast` factories.

use std::collections::HashMap;
use std::sync::Arc;

use maf_domain::error::{Error, Result};
use maf_domain::ports::{AmountFactory, AmountQueryProvider, AmountRegistryProvider};
use maf_domain::value_objects::{AmountType, FactoryQuery};
use maf_registry::{
    QUERY_PROVIDERS, QueryProviderEntry, REGISTRY_PROVIDERS, RegistryProviderEntry,
};
use tracing::debug;

use crate::factory::StaticAmountFactory;

/// In-memory registry and query provider over a fixed factory set
///
/// Immutable after construction: registrations happen on the builder,
/// and the built provider only answers lookups.
pub struct InMemoryAmountProvider {
    factories: Vec<Arc<dyn AmountFactory>>,
    by_type: HashMap<AmountType, Arc<dyn AmountFactory>>,
    default_type: AmountType,
}

impl InMemoryAmountProvider {
    /// Start building a provider
    pub fn builder() -> InMemoryAmountProviderBuilder {
        InMemoryAmountProviderBuilder::default()
    }

    /// Build the provider registered for discovery: the standard
    /// `decimal` (default) and `fast` factories
    pub fn with_standard_factories() -> Result<Self> {
        Self::builder()
            .register_default(Arc::new(StaticAmountFactory::decimal()))
            .register(Arc::new(StaticAmountFactory::fast()))
            .build()
    }

    fn matches(&self, query: &FactoryQuery, factory: &Arc<dyn AmountFactory>) -> bool {
        if let Some(target) = &query.target_type {
            if *target != factory.amount_type() {
                return false;
            }
        }
        let caps = factory.capabilities();
        if let Some(precision) = query.precision {
            // an unbounded factory satisfies any requested precision
            if caps.max_precision.is_some_and(|max| precision > max) {
                return false;
            }
        }
        if let Some(scale) = query.max_scale {
            if caps.max_scale.is_some_and(|max| scale > max) {
                return false;
            }
        }
        if let Some(fixed) = query.fixed_scale {
            if caps.fixed_scale != fixed {
                return false;
            }
        }
        // extra criteria are provider-specific; this provider defines none
        // and ignores unrecognized keys
        true
    }
}

impl AmountRegistryProvider for InMemoryAmountProvider {
    fn factory_for(&self, amount_type: &AmountType) -> Option<Arc<dyn AmountFactory>> {
        self.by_type.get(amount_type).cloned()
    }

    fn default_factory(&self) -> Arc<dyn AmountFactory> {
        // the builder guarantees the default type is registered
        self.by_type[&self.default_type].clone()
    }

    fn default_type(&self) -> AmountType {
        self.default_type.clone()
    }

    fn all_factories(&self) -> Vec<Arc<dyn AmountFactory>> {
        self.factories.clone()
    }

    fn all_types(&self) -> Vec<AmountType> {
        self.factories.iter().map(|f| f.amount_type()).collect()
    }
}

impl AmountQueryProvider for InMemoryAmountProvider {
    fn factories_for(&self, query: &FactoryQuery) -> Vec<Arc<dyn AmountFactory>> {
        self.factories
            .iter()
            .filter(|f| self.matches(query, f))
            .cloned()
            .collect()
    }

    /// Selects the first registered match; registration order is an
    /// implementation detail, not a promise
    fn factory_for_query(&self, query: &FactoryQuery) -> Option<Arc<dyn AmountFactory>> {
        self.factories
            .iter()
            .find(|f| self.matches(query, f))
            .cloned()
    }

    fn is_available(&self, query: &FactoryQuery) -> bool {
        self.factories.iter().any(|f| self.matches(query, f))
    }
}

impl std::fmt::Debug for InMemoryAmountProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryAmountProvider")
            .field("types", &self.by_type.keys().collect::<Vec<_>>())
            .field("default_type", &self.default_type)
            .finish()
    }
}

/// Builder collecting factory registrations and the default designation
///
/// Registering a second factory for the same amount type replaces the
/// first. `build` fails when no default was designated: a registry
/// provider without a default is unrepresentable.
#[derive(Default)]
pub struct InMemoryAmountProviderBuilder {
    factories: Vec<Arc<dyn AmountFactory>>,
    default_type: Option<AmountType>,
}

impl InMemoryAmountProviderBuilder {
    /// Register a factory under its amount type
    pub fn register(mut self, factory: Arc<dyn AmountFactory>) -> Self {
        let amount_type = factory.amount_type();
        self.factories.retain(|f| f.amount_type() != amount_type);
        self.factories.push(factory);
        self
    }

    /// Register a factory and designate it as the default
    pub fn register_default(mut self, factory: Arc<dyn AmountFactory>) -> Self {
        self.default_type = Some(factory.amount_type());
        self.register(factory)
    }

    /// Build the provider, validating the default designation
    pub fn build(self) -> Result<InMemoryAmountProvider> {
        let default_type = self
            .default_type
            .ok_or_else(|| Error::invalid_argument("a default amount factory must be designated"))?;

        let by_type: HashMap<AmountType, Arc<dyn AmountFactory>> = self
            .factories
            .iter()
            .map(|f| (f.amount_type(), f.clone()))
            .collect();

        debug!(
            types = ?by_type.keys().collect::<Vec<_>>(),
            default = %default_type,
            "built in-memory amount provider"
        );

        Ok(InMemoryAmountProvider {
            factories: self.factories,
            by_type,
            default_type,
        })
    }
}

// ============================================================================
// Discovery registration
// ============================================================================

#[linkme::distributed_slice(REGISTRY_PROVIDERS)]
static IN_MEMORY_REGISTRY: RegistryProviderEntry = RegistryProviderEntry {
    name: "in-memory",
    description: "In-memory amount factory registry with the standard decimal and fast factories",
    provide: provide_registry,
};

#[linkme::distributed_slice(QUERY_PROVIDERS)]
static IN_MEMORY_QUERY: QueryProviderEntry = QueryProviderEntry {
    name: "in-memory",
    description: "In-memory attribute matching over the standard decimal and fast factories",
    provide: provide_query,
};

fn provide_registry() -> std::result::Result<Arc<dyn AmountRegistryProvider>, String> {
    let provider = InMemoryAmountProvider::with_standard_factories().map_err(|e| e.to_string())?;
    Ok(Arc::new(provider))
}

fn provide_query() -> std::result::Result<Arc<dyn AmountQueryProvider>, String> {
    let provider = InMemoryAmountProvider::with_standard_factories().map_err(|e| e.to_string())?;
    Ok(Arc::new(provider))
}
