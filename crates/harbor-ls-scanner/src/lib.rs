//! # harbor-ls Scanner
//!
//! Filtered, failure-tolerant traversal of a Harbor registry.
//!
//! [`ScanEngine`] walks `projects → repositories → artifacts` through any
//! [`RegistryApi`](harbor_ls_registry::RegistryApi) implementation and
//! assembles a [`ScanResult`]:
//!
//! - a [`PathFilter`] is tested before each descent, so excluded branches are
//!   never requested and never appear in the result;
//! - a branch whose listing fails is logged and recorded with an empty value,
//!   and its siblings are still scanned;
//! - a failure to list projects yields an empty result rather than an error.
//!
//! ## Example
//!
//! ```rust,no_run
//! use harbor_ls_registry::{RegistryClient, RegistryConfig};
//! use harbor_ls_scanner::{PathFilter, ScanConfig, ScanEngine};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RegistryConfig::new("harbor.example.com").with_credentials("admin", "secret");
//!     let client = RegistryClient::new(config)?;
//!
//!     let engine = ScanEngine::new(client, PathFilter::parse(["library"]), ScanConfig::default());
//!     let result = engine.scan().await;
//!
//!     for (project, repos) in result.projects() {
//!         println!("{project}: {} repositories", repos.len());
//!     }
//!     Ok(())
//! }
//! ```

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod engine;
mod filter;
mod result;

#[cfg(test)]
mod proptest_tests;

pub use engine::{ScanConfig, ScanEngine};
pub use filter::{is_prefix_of, PathFilter};
pub use result::{ProjectArtifacts, ScanResult, ScanSummary};
