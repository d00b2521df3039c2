//! Tests for discovery-backed provider location
//!
//! Uses `extern crate maf_providers` to force linkme registration of the
//! stock in-memory provider, then verifies the discovered locator and the
//! facade built on top of it.

// Force linkme registration of the in-memory provider entries
extern crate maf_providers;

use std::sync::Arc;

use maf_domain::ports::ProviderLocator;
use maf_domain::value_objects::{AmountType, FactoryQuery};
use maf_registry::{
    AmountsFacade, DiscoveredProviderLocator, list_query_providers, list_registry_providers,
};

#[test]
fn in_memory_provider_is_listed_for_both_roles() {
    let registry = list_registry_providers();
    let query = list_query_providers();

    assert!(
        registry.iter().any(|(name, _)| *name == "in-memory"),
        "in-memory registry provider should be registered. Available: {registry:?}"
    );
    assert!(
        query.iter().any(|(name, _)| *name == "in-memory"),
        "in-memory query provider should be registered. Available: {query:?}"
    );

    for (name, description) in registry.iter().chain(query.iter()) {
        assert!(!name.is_empty());
        assert!(!description.is_empty(), "provider '{name}' should have a description");
    }
}

#[test]
fn discovered_locator_resolves_both_roles() {
    let locator = DiscoveredProviderLocator::new();

    let registry = locator
        .registry_provider()
        .expect("discovery should not fail with one entry");
    assert!(registry.is_some(), "registry role should be discovered");

    let query = locator
        .query_provider()
        .expect("discovery should not fail with one entry");
    assert!(query.is_some(), "query role should be discovered");
}

#[test]
fn facade_over_discovery_serves_the_standard_factories() {
    let facade = AmountsFacade::new(Arc::new(DiscoveredProviderLocator::new()));

    assert_eq!(
        facade.default_type().expect("default should resolve"),
        AmountType::new("decimal")
    );

    let fast = facade
        .factory_for(&AmountType::new("fast"))
        .expect("fast factory should be registered");
    assert_eq!(fast.amount_type(), AmountType::new("fast"));

    let fixed = facade
        .find_factory(&FactoryQuery::new().with_fixed_scale(true))
        .expect("query path should be available")
        .expect("a fixed-scale factory should match");
    assert_eq!(fixed.amount_type(), AmountType::new("fast"));
}
