//! # harbor-ls Registry
//!
//! Read-only client for the Harbor v2.0 REST API.
//!
//! The client covers exactly the three listing endpoints needed to walk a
//! registry: projects, the repositories of a project, and the artifacts of a
//! repository. It performs no filtering and no traversal; that lives in
//! `harbor-ls-scanner`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use harbor_ls_registry::{RegistryApi, RegistryClient, RegistryConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RegistryConfig::new("harbor.example.com")
//!         .with_credentials("robot$reader", "secret");
//!
//!     let client = RegistryClient::new(config)?;
//!
//!     for project in client.list_projects().await? {
//!         println!("{project}");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                RegistryApi (trait)                          │
//! │  list_projects / list_repositories / list_artifacts         │
//! └─────────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  RegistryClient (reqwest, Basic auth)                       │
//! │     GET /api/v2.0/projects/{project}/repositories/...       │
//! └─────────────────────────────────────────────────────────────┘
//! ```

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod client;
mod config;
mod error;
mod model;

pub use client::{RegistryApi, RegistryClient};
pub use config::{Credentials, RegistryConfig};
pub use error::{ErrorKind, RegistryError};
pub use model::{Artifact, ArtifactRecord, ProjectRecord, PushTime, RepositoryRecord, TagRecord};
