//! Domain Port Interfaces
//!
//! Defines the boundary contracts between the registry core and the
//! external implementations it resolves against. Ports follow the
//! Dependency Inversion Principle: the domain declares the interfaces,
//! provider and locator implementations satisfy them.
//!
//! ## Organization
//!
//! - **providers** - Factory and provider role ports answered by discovered
//!   implementations
//! - **locator** - The discovery boundary handing out provider implementations
//!   per role

/// Provider discovery boundary
pub mod locator;
/// Factory and provider role ports
pub mod providers;

// Re-export commonly used port traits for convenience
pub use locator::{ProviderLocator, ProviderRole};
pub use providers::{AmountFactory, AmountQueryProvider, AmountRegistryProvider};
