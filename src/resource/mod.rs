//! Resource abstraction layer
//!
//! Everything the dashboard knows about discovered cloud resources: the
//! wire model returned by the backend, the filter engine that derives the
//! displayed subset, and the status/service colour buckets.
//!
//! # Architecture
//!
//! - [`model`] - `Resource` records and the regions/services response bodies
//! - [`filter`] - Search, region and service predicates over a resource list
//! - [`status`] - Lifecycle status buckets and service badge colours
//!
//! # Example
//!
//! ```ignore
//! use tdisco::resource::{filter_resources, FilterState};
//!
//! let mut filter = FilterState::default();
//! filter.search_term = "web".to_string();
//! let visible = filter_resources(&resources, &filter);
//! ```

pub mod filter;
pub mod model;
pub mod status;

pub use filter::{
    filter_indices, filter_resources, matches_filter, matches_region, matches_search,
    matches_service, unique_service_types, FilterState, ALL,
};
pub use model::{RegionsResponse, Resource, ServiceSummary, ServicesResponse};
pub use status::{service_color, Rgb, StatusBucket};
