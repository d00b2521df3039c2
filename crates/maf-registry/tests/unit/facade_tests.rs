//! Tests for the amounts facade
//!
//! Exercises the full resolution surface against real in-memory providers
//! injected through `StaticProviderLocator`: the direct-vs-query failure
//! contracts, partial degradation per role, and default selection.

use std::sync::Arc;

use maf_domain::error::{Error, Result};
use maf_domain::ports::{
    AmountQueryProvider, AmountRegistryProvider, ProviderLocator, ProviderRole,
};
use maf_domain::value_objects::{AmountType, FactoryCapabilities, FactoryQuery};
use maf_providers::{InMemoryAmountProvider, StaticAmountFactory};
use maf_registry::{AmountsFacade, StaticProviderLocator};

/// Provider with factories for types `a` (default) and `b`
fn ab_provider() -> Arc<InMemoryAmountProvider> {
    let a = StaticAmountFactory::new(
        AmountType::new("a"),
        "a",
        FactoryCapabilities::new().with_max_precision(10),
    );
    let b = StaticAmountFactory::new(
        AmountType::new("b"),
        "b",
        FactoryCapabilities::new()
            .with_max_precision(19)
            .with_fixed_scale(true),
    );
    Arc::new(
        InMemoryAmountProvider::builder()
            .register_default(Arc::new(a))
            .register(Arc::new(b))
            .build()
            .expect("builder with default should build"),
    )
}

fn full_facade() -> AmountsFacade {
    let provider = ab_provider();
    let locator = StaticProviderLocator::new()
        .with_registry(provider.clone())
        .with_query(provider);
    AmountsFacade::new(Arc::new(locator))
}

/// Locator whose discovery always blows up, for both roles
struct FailingLocator;

impl ProviderLocator for FailingLocator {
    fn registry_provider(&self) -> Result<Option<Arc<dyn AmountRegistryProvider>>> {
        Err(Error::discovery(ProviderRole::Registry, "boom"))
    }

    fn query_provider(&self) -> Result<Option<Arc<dyn AmountQueryProvider>>> {
        Err(Error::discovery(ProviderRole::Query, "boom"))
    }
}

// ============================================================================
// Direct lookup path
// ============================================================================

#[test]
fn factory_for_returns_the_registered_factory() {
    let provider = ab_provider();
    let facade = AmountsFacade::new(Arc::new(
        StaticProviderLocator::new().with_registry(provider.clone()),
    ));

    let expected = provider
        .factory_for(&AmountType::new("b"))
        .expect("provider registers type b");
    let found = facade
        .factory_for(&AmountType::new("b"))
        .expect("facade should resolve type b");
    assert!(Arc::ptr_eq(&expected, &found));
}

#[test]
fn factory_for_unregistered_type_is_a_typed_failure() {
    let facade = full_facade();

    match facade.factory_for(&AmountType::new("c")) {
        Err(Error::NoFactoryForType { amount_type }) => {
            assert_eq!(amount_type, AmountType::new("c"));
        }
        Err(other) => panic!("expected NoFactoryForType, got {other}"),
        Ok(_) => panic!("lookup of unregistered type must not succeed"),
    }
}

#[test]
fn factory_for_empty_type_name_is_invalid_argument() {
    let facade = full_facade();
    assert!(matches!(
        facade.factory_for(&AmountType::new("")),
        Err(Error::InvalidArgument { .. })
    ));
}

#[test]
fn default_selection_scenario() {
    let facade = full_facade();

    assert_eq!(
        facade.default_type().expect("default type should resolve"),
        AmountType::new("a")
    );
    assert_eq!(
        facade
            .default_factory()
            .expect("default factory should resolve")
            .amount_type(),
        AmountType::new("a")
    );

    let mut types = facade.all_types().expect("types should enumerate");
    types.sort();
    assert_eq!(types, vec![AmountType::new("a"), AmountType::new("b")]);
    assert_eq!(
        facade.all_factories().expect("factories should enumerate").len(),
        2
    );
}

#[test]
fn repeated_reads_are_idempotent() {
    let facade = full_facade();

    let first = facade.default_factory().expect("default should resolve");
    let second = facade.default_factory().expect("default should resolve");
    assert!(Arc::ptr_eq(&first, &second));

    let mut types_a = facade.all_types().expect("types should enumerate");
    let mut types_b = facade.all_types().expect("types should enumerate");
    types_a.sort();
    types_b.sort();
    assert_eq!(types_a, types_b);
}

// ============================================================================
// Query path
// ============================================================================

#[test]
fn is_available_agrees_with_find_factories() {
    let facade = full_facade();

    // zero, one, and many matches
    let queries = [
        FactoryQuery::new().with_precision(40),
        FactoryQuery::new().with_fixed_scale(true),
        FactoryQuery::new(),
    ];
    for query in &queries {
        let matches = facade.find_factories(query).expect("query should run");
        let available = facade.is_available(query).expect("query should run");
        assert_eq!(available, !matches.is_empty());
    }
}

#[test]
fn single_match_query_returns_that_match() {
    let facade = full_facade();
    let query = FactoryQuery::new().with_fixed_scale(true);

    let matches = facade.find_factories(&query).expect("query should run");
    assert_eq!(matches.len(), 1);

    let found = facade
        .find_factory(&query)
        .expect("query should run")
        .expect("exactly one factory matches");
    assert!(Arc::ptr_eq(&found, &matches[0]));
}

#[test]
fn zero_match_query_is_absent_not_an_error() {
    let facade = full_facade();
    let query = FactoryQuery::new().with_precision(40);

    let found = facade.find_factory(&query).expect("query should run");
    assert!(found.is_none());
    assert!(facade.find_factories(&query).expect("query should run").is_empty());
}

#[test]
fn multi_match_query_returns_one_of_the_matches() {
    let facade = full_facade();
    let query = FactoryQuery::new();

    let all = facade.find_factories(&query).expect("query should run");
    assert!(all.len() > 1);

    let one = facade
        .find_factory(&query)
        .expect("query should run")
        .expect("unconstrained query matches");
    assert!(all.iter().any(|f| Arc::ptr_eq(f, &one)));
}

// ============================================================================
// Partial degradation
// ============================================================================

#[test]
fn absent_registry_fails_direct_path_only() {
    let facade = AmountsFacade::new(Arc::new(
        StaticProviderLocator::new().with_query(ab_provider()),
    ));

    for result in [
        facade.factory_for(&AmountType::new("a")).map(|_| ()),
        facade.default_factory().map(|_| ()),
        facade.default_type().map(|_| ()),
        facade.all_factories().map(|_| ()),
        facade.all_types().map(|_| ()),
    ] {
        match result {
            Err(Error::ProviderUnavailable { role }) => assert_eq!(role, ProviderRole::Registry),
            Err(other) => panic!("expected ProviderUnavailable, got {other}"),
            Ok(()) => panic!("direct path must fail without a registry provider"),
        }
    }

    // the query path keeps working
    assert!(facade
        .is_available(&FactoryQuery::new())
        .expect("query path should stay usable"));
}

#[test]
fn absent_query_provider_fails_query_path_only() {
    let facade = AmountsFacade::new(Arc::new(
        StaticProviderLocator::new().with_registry(ab_provider()),
    ));

    for result in [
        facade.find_factory(&FactoryQuery::new()).map(|_| ()),
        facade.find_factories(&FactoryQuery::new()).map(|_| ()),
        facade.is_available(&FactoryQuery::new()).map(|_| ()),
    ] {
        match result {
            Err(Error::ProviderUnavailable { role }) => assert_eq!(role, ProviderRole::Query),
            Err(other) => panic!("expected ProviderUnavailable, got {other}"),
            Ok(()) => panic!("query path must fail without a query provider"),
        }
    }

    // the direct path keeps working
    assert_eq!(
        facade.default_type().expect("direct path should stay usable"),
        AmountType::new("a")
    );
}

#[test]
fn locator_failure_degrades_instead_of_crashing() {
    let facade = AmountsFacade::new(Arc::new(FailingLocator));

    // discovery errors are absorbed; callers see the missing role, not the cause
    assert!(matches!(
        facade.default_factory(),
        Err(Error::ProviderUnavailable {
            role: ProviderRole::Registry
        })
    ));
    assert!(matches!(
        facade.is_available(&FactoryQuery::new()),
        Err(Error::ProviderUnavailable {
            role: ProviderRole::Query
        })
    ));

    // and stays that way: no re-discovery on later calls
    assert!(matches!(
        facade.default_factory(),
        Err(Error::ProviderUnavailable { .. })
    ));
}
