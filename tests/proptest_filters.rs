//! Property-based tests using proptest
//!
//! These tests check the filter engine and service type derivation
//! against randomized resource lists.

use proptest::prelude::*;
use std::collections::BTreeSet;
use tdisco::resource::{
    filter_indices, filter_resources, matches_filter, unique_service_types, FilterState, Resource,
    ALL,
};

const REGIONS: &[&str] = &["us-east-1", "us-west-2", "eu-west-1", "ap-south-1"];
const SERVICES: &[&str] = &["EC2", "S3", "Lambda", "RDS", "VPC", "DynamoDB"];

/// Generate a resource with every field independently present or missing
fn arb_resource() -> impl Strategy<Value = Resource> {
    (
        proptest::option::of("[a-zA-Z][a-zA-Z0-9-]{0,20}"),
        proptest::option::of("[a-z]{1,3}-[0-9a-f]{4,8}"),
        proptest::option::of(proptest::sample::select(SERVICES)),
        proptest::option::of(proptest::sample::select(REGIONS)),
        proptest::option::of(prop_oneof!["running", "stopped", "available", "pending"]),
    )
        .prop_map(|(name, resource_id, service_type, region, state)| Resource {
            name,
            resource_id,
            service_type: service_type.map(str::to_string),
            region: region.map(str::to_string),
            state,
            ..Resource::default()
        })
}

fn arb_resource_list() -> impl Strategy<Value = Vec<Resource>> {
    prop::collection::vec(arb_resource(), 0..60)
}

fn arb_filter() -> impl Strategy<Value = FilterState> {
    (
        "[a-zA-Z0-9-]{0,4}",
        prop_oneof![Just(ALL), proptest::sample::select(REGIONS)],
        prop_oneof![Just(ALL), proptest::sample::select(SERVICES)],
    )
        .prop_map(|(search_term, region, service)| FilterState {
            search_term,
            selected_region: region.to_string(),
            selected_service: service.to_string(),
        })
}

/// Toggle the ASCII case of every character
fn swap_case(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            }
        })
        .collect()
}

proptest! {
    /// Default filter returns every resource
    #[test]
    fn default_filter_returns_all(resources in arb_resource_list()) {
        let filtered = filter_resources(&resources, &FilterState::default());
        prop_assert_eq!(filtered.len(), resources.len());
    }

    /// Search ignores case
    #[test]
    fn search_is_case_insensitive(
        resources in arb_resource_list(),
        term in "[a-zA-Z0-9]{1,4}"
    ) {
        let lower = FilterState { search_term: term.clone(), ..FilterState::default() };
        let swapped = FilterState { search_term: swap_case(&term), ..FilterState::default() };
        prop_assert_eq!(
            filter_indices(&resources, &lower),
            filter_indices(&resources, &swapped)
        );
    }

    /// Search returns exactly the resources whose name, ID or service type contain the term
    #[test]
    fn search_matches_reference_predicate(
        resources in arb_resource_list(),
        term in "[a-zA-Z0-9]{1,3}"
    ) {
        let filter = FilterState { search_term: term.clone(), ..FilterState::default() };
        let needle = term.to_lowercase();
        let expected: Vec<usize> = resources
            .iter()
            .enumerate()
            .filter(|(_, r)| {
                [&r.name, &r.resource_id, &r.service_type]
                    .into_iter()
                    .flatten()
                    .any(|f| f.to_lowercase().contains(&needle))
            })
            .map(|(idx, _)| idx)
            .collect();
        prop_assert_eq!(filter_indices(&resources, &filter), expected);
    }

    /// With a concrete region selected, every hit is in that region
    #[test]
    fn region_selection_is_exact(
        resources in arb_resource_list(),
        region in proptest::sample::select(REGIONS)
    ) {
        let filter = FilterState { selected_region: region.to_string(), ..FilterState::default() };
        let filtered = filter_resources(&resources, &filter);
        prop_assert!(filtered.iter().all(|r| r.region.as_deref() == Some(region)));

        let expected = resources.iter().filter(|r| r.region.as_deref() == Some(region)).count();
        prop_assert_eq!(filtered.len(), expected);
    }

    /// Selecting "all" for region and service adds no restriction beyond search
    #[test]
    fn all_sentinel_never_excludes(
        resources in arb_resource_list(),
        term in "[a-z0-9]{0,3}"
    ) {
        let filter = FilterState { search_term: term.clone(), ..FilterState::default() };
        for resource in &resources {
            let search_only = tdisco::resource::matches_search(resource, &term);
            prop_assert_eq!(matches_filter(resource, &filter), search_only);
        }
    }

    /// The result is an order-preserving subset of the input
    #[test]
    fn filter_preserves_order(
        resources in arb_resource_list(),
        filter in arb_filter()
    ) {
        let indices = filter_indices(&resources, &filter);
        prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(indices.iter().all(|&i| i < resources.len()));

        let by_ref = filter_resources(&resources, &filter);
        prop_assert_eq!(by_ref.len(), indices.len());
        for (resource, &idx) in by_ref.iter().zip(&indices) {
            prop_assert_eq!(*resource, &resources[idx]);
        }
    }

    /// Filtering is idempotent
    #[test]
    fn filter_is_idempotent(
        resources in arb_resource_list(),
        filter in arb_filter()
    ) {
        let once: Vec<Resource> = filter_resources(&resources, &filter).into_iter().cloned().collect();
        let twice = filter_resources(&once, &filter);
        prop_assert_eq!(once.len(), twice.len());
    }

    /// Clearing any filter state restores the full list
    #[test]
    fn clear_restores_full_list(
        resources in arb_resource_list(),
        filter in arb_filter()
    ) {
        let mut filter = filter;
        filter.clear();
        prop_assert!(filter.is_default());
        prop_assert_eq!(filter_indices(&resources, &filter).len(), resources.len());
    }

    /// Service types are exactly the sorted, duplicate-free set of present types
    #[test]
    fn service_types_sorted_and_unique(resources in arb_resource_list()) {
        let types = unique_service_types(&resources);
        prop_assert!(types.windows(2).all(|w| w[0] < w[1]));

        let expected: Vec<String> = resources
            .iter()
            .filter_map(|r| r.service_type.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        prop_assert_eq!(types, expected);
    }
}
