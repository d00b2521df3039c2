//! Provider implementations for the monetary amount factory registry
//!
//! Ships the stock [`InMemoryAmountProvider`] (both provider roles over a
//! builder-registered factory set) and the [`StaticAmountFactory`]
//! descriptors it registers. Linking this crate submits the `in-memory`
//! provider into the registration slices declared by `maf-registry`, so
//! discovery-based locators find it without any explicit wiring.

/// Factory descriptors
pub mod factory;
/// In-memory provider for both registry and query roles
pub mod in_memory;

// Re-export the public surface
pub use factory::StaticAmountFactory;
pub use in_memory::{InMemoryAmountProvider, InMemoryAmountProviderBuilder};
