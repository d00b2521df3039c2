//! Registry core for the monetary amount factory registry
//!
//! Composes the two provider roles behind a single facade:
//!
//! ```text
//! caller ──▶ AmountsFacade ──▶ AmountRegistry ──▶ AmountRegistryProvider
//!                         └──▶ AmountQueryResolver ──▶ AmountQueryProvider
//!                 ▲
//!          ProviderLocator (consulted once per role, then frozen)
//! ```
//!
//! Each role's handle is established lazily and exactly once; a locator
//! failure leaves that role permanently absent without failing the other,
//! so direct type lookups keep working when query discovery breaks and
//! vice versa.

/// Process-wide facade over both provider roles
pub mod facade;
/// Write-once present/absent provider handles
pub mod handle;
/// Locator implementations and provider registration slices
pub mod locator;
/// Attribute-based selection path
pub mod query;
/// Direct type-keyed and default lookup path
pub mod registry;

// Re-export the public surface
pub use facade::AmountsFacade;
pub use handle::ProviderHandle;
pub use locator::{
    DiscoveredProviderLocator, QueryProviderEntry, RegistryProviderEntry, StaticProviderLocator,
    QUERY_PROVIDERS, REGISTRY_PROVIDERS, list_query_providers, list_registry_providers,
};
pub use query::AmountQueryResolver;
pub use registry::AmountRegistry;
