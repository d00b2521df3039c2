//! Provider Handles - write-once present/absent provider wrappers
//!
//! A handle is established once, when its role is first needed, and never
//! mutated afterward. An absent handle converts every dependent operation
//! into a typed `ProviderUnavailable` failure, so callers can always tell
//! "no provider" apart from "provider present but no match".

use std::sync::Arc;

use maf_domain::error::{Error, Result};
use maf_domain::ports::ProviderRole;

/// Write-once handle to a discovered provider
///
/// Either present (a valid implementation was discovered) or permanently
/// absent for the process lifetime. Immutable after construction, so
/// concurrent readers need no locking.
pub struct ProviderHandle<P: ?Sized> {
    role: ProviderRole,
    provider: Option<Arc<P>>,
}

impl<P: ?Sized> ProviderHandle<P> {
    /// Create a present handle wrapping a discovered provider
    pub fn present(role: ProviderRole, provider: Arc<P>) -> Self {
        Self {
            role,
            provider: Some(provider),
        }
    }

    /// Create a permanently absent handle for a role discovery gave up on
    pub fn absent(role: ProviderRole) -> Self {
        Self {
            role,
            provider: None,
        }
    }

    /// The role this handle was established for
    pub fn role(&self) -> ProviderRole {
        self.role
    }

    /// Whether discovery produced an implementation for this role
    pub fn is_present(&self) -> bool {
        self.provider.is_some()
    }

    /// Access the provider, failing with `ProviderUnavailable` when absent
    pub fn get(&self) -> Result<&Arc<P>> {
        self.provider
            .as_ref()
            .ok_or_else(|| Error::provider_unavailable(self.role))
    }
}

impl<P: ?Sized> std::fmt::Debug for ProviderHandle<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderHandle")
            .field("role", &self.role)
            .field("present", &self.is_present())
            .finish()
    }
}
