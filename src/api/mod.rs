//! Discovery API interaction module
//!
//! Talks to the service discovery backend over plain HTTP. The backend
//! exposes three read-only endpoints below a single base URL:
//!
//! - `GET {base}/health` - liveness probe, any 2xx is healthy
//! - `GET {base}/regions` - selectable region identifiers
//! - `GET {base}/services` - discovered resources plus a per-service summary
//!
//! # Module Structure
//!
//! - [`client`] - Endpoint URLs and the typed calls
//! - [`error`] - Transport error type
//! - [`http`] - HTTP wrapper with error-body extraction and log sanitising
//!
//! # Example
//!
//! ```ignore
//! use tdisco::api::client::DiscoveryClient;
//!
//! async fn example() -> anyhow::Result<()> {
//!     let client = DiscoveryClient::new("http://localhost:5000/api")?;
//!     client.check_health().await?;
//!     let services = client.list_services().await?;
//!     println!("{} resources", services.resources.unwrap_or_default().len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod http;
