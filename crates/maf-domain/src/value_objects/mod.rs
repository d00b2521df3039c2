//! Domain Value Objects
//!
//! Immutable value objects that represent concepts in the domain
//! without identity. Value objects are defined by their attributes
//! and can be compared for equality.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`AmountType`] | Opaque identifier for a concrete amount representation |
//! | [`FactoryCapabilities`] | Registration metadata a factory publishes |
//! | [`FactoryQuery`] | Caller-built selection criteria over factories |

/// Amount type identifier value object
pub mod amount_type;
/// Factory capability metadata value object
pub mod capabilities;
/// Factory selection query value object
pub mod factory_query;

// Re-export commonly used value objects
pub use amount_type::AmountType;
pub use capabilities::FactoryCapabilities;
pub use factory_query::FactoryQuery;
