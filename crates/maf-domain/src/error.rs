//! Error handling types

use crate::ports::ProviderRole;
use crate::value_objects::AmountType;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the amount factory registry
///
/// Callers branch on the variant to distinguish "system misconfigured"
/// ([`Error::ProviderUnavailable`]) from "no such type registered"
/// ([`Error::NoFactoryForType`]). A query with zero matches is not an
/// error at all; the query path reports it as an empty result instead.
#[derive(Error, Debug)]
pub enum Error {
    /// The required provider role was not discovered at initialization time
    ///
    /// Discovery runs once per role for the process lifetime; this failure
    /// is permanent and is surfaced on every operation needing the role.
    #[error("No {role} available, {role} functionality is not available")]
    ProviderUnavailable {
        /// The provider role that could not be discovered
        role: ProviderRole,
    },

    /// A direct type-keyed lookup found no registered factory
    #[error("No amount factory available for type: {amount_type}")]
    NoFactoryForType {
        /// The amount type that had no registered factory
        amount_type: AmountType,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Provider discovery failed for a role
    ///
    /// Raised by locator implementations when discovery itself goes wrong
    /// (ambiguous candidates, failed instantiation). The facade absorbs
    /// this into an absent handle, so its callers only ever observe
    /// [`Error::ProviderUnavailable`].
    #[error("Provider discovery failed for {role}: {message}")]
    Discovery {
        /// The provider role being discovered
        role: ProviderRole,
        /// Description of the discovery failure
        message: String,
    },
}

impl Error {
    /// Create a provider unavailable error
    pub fn provider_unavailable(role: ProviderRole) -> Self {
        Self::ProviderUnavailable { role }
    }

    /// Create a no-factory-for-type error
    pub fn no_factory_for_type(amount_type: AmountType) -> Self {
        Self::NoFactoryForType { amount_type }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a discovery error
    pub fn discovery<S: Into<String>>(role: ProviderRole, message: S) -> Self {
        Self::Discovery {
            role,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_unavailable_names_the_missing_role() {
        let err = Error::provider_unavailable(ProviderRole::Query);
        assert_eq!(
            err.to_string(),
            "No amount query provider available, amount query provider functionality is not available"
        );
    }

    #[test]
    fn no_factory_for_type_names_the_requested_type() {
        let err = Error::no_factory_for_type(AmountType::new("decimal"));
        assert_eq!(
            err.to_string(),
            "No amount factory available for type: decimal"
        );
    }

    #[test]
    fn discovery_error_carries_role_and_detail() {
        let err = Error::discovery(ProviderRole::Registry, "ambiguous candidates");
        let message = err.to_string();
        assert!(message.contains("amount registry provider"));
        assert!(message.contains("ambiguous candidates"));
    }
}
