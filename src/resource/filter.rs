//! Filter Engine
//!
//! Derives the displayed subset of resources from the search term, the
//! selected region and the selected service type. Every function here is
//! pure; callers recompute from scratch whenever any input changes.

use super::model::Resource;

/// Sentinel filter value meaning "no restriction on this dimension"
pub const ALL: &str = "all";

/// The three independent filter fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub search_term: String,
    pub selected_region: String,
    pub selected_service: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            selected_region: ALL.to_string(),
            selected_service: ALL.to_string(),
        }
    }
}

impl FilterState {
    /// Reset all three fields to their defaults in one step
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when no field restricts the resource list
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Case-insensitive substring match against name, resource ID or service type.
/// An empty term matches everything; missing fields never match.
pub fn matches_search(resource: &Resource, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    let term = term.to_lowercase();
    [&resource.name, &resource.resource_id, &resource.service_type]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&term))
}

/// Exact, case-sensitive region match unless the selection is [`ALL`]
pub fn matches_region(resource: &Resource, selected_region: &str) -> bool {
    selected_region == ALL || resource.region.as_deref() == Some(selected_region)
}

/// Exact service type match unless the selection is [`ALL`]
pub fn matches_service(resource: &Resource, selected_service: &str) -> bool {
    selected_service == ALL || resource.service_type.as_deref() == Some(selected_service)
}

/// Logical AND of the three predicates
pub fn matches_filter(resource: &Resource, filter: &FilterState) -> bool {
    matches_search(resource, &filter.search_term)
        && matches_region(resource, &filter.selected_region)
        && matches_service(resource, &filter.selected_service)
}

/// Resources passing the filter, in input order
pub fn filter_resources<'a>(resources: &'a [Resource], filter: &FilterState) -> Vec<&'a Resource> {
    resources
        .iter()
        .filter(|resource| matches_filter(resource, filter))
        .collect()
}

/// Positions of the resources passing the filter, ascending
pub fn filter_indices(resources: &[Resource], filter: &FilterState) -> Vec<usize> {
    resources
        .iter()
        .enumerate()
        .filter(|(_, resource)| matches_filter(resource, filter))
        .map(|(idx, _)| idx)
        .collect()
}

/// Service types offered by the service selector: unique, sorted ascending.
/// Derived from the loaded resources, not from the backend summary.
pub fn unique_service_types(resources: &[Resource]) -> Vec<String> {
    let mut types: Vec<String> = resources
        .iter()
        .filter_map(|r| r.service_type.clone())
        .collect();
    types.sort();
    types.dedup();
    types
}
