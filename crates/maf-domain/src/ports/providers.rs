//! Factory and Provider Role Ports
//!
//! The two provider roles the registry core resolves against, plus the
//! factory handle they hand out. The core never constructs or mutates a
//! factory; it stores and returns shared references and normalizes
//! absence into typed failures.

use std::sync::Arc;

use crate::value_objects::{AmountType, FactoryCapabilities, FactoryQuery};

/// Opaque capability producing amount values of one associated type
///
/// The registry core only ever reads a factory's identity and
/// registration metadata; amount construction and currency rules are the
/// factory's own business and invisible at this boundary.
pub trait AmountFactory: Send + Sync {
    /// The amount type this factory produces
    fn amount_type(&self) -> AmountType;

    /// Get factory name for diagnostics
    fn factory_name(&self) -> &str;

    /// The numeric envelope this factory's representation supports
    fn capabilities(&self) -> FactoryCapabilities;
}

/// Registry Provider port - direct type-keyed and default factory access
///
/// Implementations own the registered factories and the default
/// designation. Designating a default is a construction invariant of the
/// implementation: a registry provider without one must be impossible to
/// build, which is why [`AmountRegistryProvider::default_factory`] and
/// [`AmountRegistryProvider::default_type`] are infallible here.
pub trait AmountRegistryProvider: Send + Sync {
    /// Look up the factory registered for the given amount type
    ///
    /// Returns `None` when no factory targets the type; the registry core
    /// converts that into a typed failure before it reaches callers.
    fn factory_for(&self, amount_type: &AmountType) -> Option<Arc<dyn AmountFactory>>;

    /// The factory this provider designates as default
    fn default_factory(&self) -> Arc<dyn AmountFactory>;

    /// The amount type of the default factory
    fn default_type(&self) -> AmountType;

    /// Every registered factory, in provider-defined order
    fn all_factories(&self) -> Vec<Arc<dyn AmountFactory>>;

    /// Every registered amount type, in provider-defined order
    fn all_types(&self) -> Vec<AmountType>;
}

/// Query Provider port - attribute-based factory selection
///
/// Matching semantics over a [`FactoryQuery`] are entirely
/// provider-defined; the registry core passes queries through opaquely.
pub trait AmountQueryProvider: Send + Sync {
    /// Every factory matching the query, possibly empty, provider-defined order
    fn factories_for(&self, query: &FactoryQuery) -> Vec<Arc<dyn AmountFactory>>;

    /// One factory matching the query, or `None` when nothing matches
    ///
    /// When multiple factories match, the implementation selects one of
    /// the matches. Callers must not rely on which one unless the
    /// provider documents a tie-break of its own.
    fn factory_for_query(&self, query: &FactoryQuery) -> Option<Arc<dyn AmountFactory>> {
        self.factories_for(query).into_iter().next()
    }

    /// Whether at least one factory matches the query
    ///
    /// Must agree with `factories_for(query)` being non-empty, but may be
    /// computed more cheaply by the provider.
    fn is_available(&self, query: &FactoryQuery) -> bool {
        !self.factories_for(query).is_empty()
    }
}
