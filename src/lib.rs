//! tdisco - terminal dashboard for cloud service discovery
//!
//! Fetches the resource inventory from a discovery backend and lets the
//! user search and filter it by region and service type.

pub mod api;
pub mod app;
pub mod config;
pub mod event;
pub mod resource;
pub mod ui;

/// Version injected at compile time via TDISCO_VERSION env var (set by CI/CD),
/// or "dev" for local builds.
pub const VERSION: &str = match option_env!("TDISCO_VERSION") {
    Some(v) => v,
    None => "dev",
};
