//! Domain layer for the monetary amount factory registry
//!
//! Defines the contract surface shared by every layer of the workspace:
//! value objects describing amount types and factory queries, the error
//! taxonomy for registry resolution, and the port traits that provider
//! and locator implementations must satisfy.
//!
//! This crate is dependency-light on purpose: it contains no provider
//! implementations and no resolution logic, only the types both sides of
//! the registry boundary agree on.

/// Error handling types
pub mod error;
/// Domain port interfaces
pub mod ports;
/// Immutable domain value objects
pub mod value_objects;

// Re-export commonly used types
pub use error::{Error, Result};
pub use ports::{
    AmountFactory, AmountQueryProvider, AmountRegistryProvider, ProviderLocator, ProviderRole,
};
pub use value_objects::{AmountType, FactoryCapabilities, FactoryQuery};
