//! # apollo-client
//!
//! A thin Apollo.io API client for Rust.
//!
//! ## Features
//!
//! - **Thin request builders**: each method maps one-to-one to an HTTP verb,
//!   endpoint, and payload shape
//! - **Async/Await**: built on reqwest and tokio
//! - **Never panics on failure**: every operation returns an [`ApiResult`],
//!   folding transport, decode, and remote faults into a tagged failure value
//! - **Per-family transports**: the enrichment/account and search endpoint
//!   groups keep their own base URLs and authentication headers, matching the
//!   remote API
//! - **Configurable**: environment-based configuration via apollo-core
//!
//! ## Usage
//!
//! ```rust,no_run
//! use apollo_client::ApolloClient;
//! use apollo_core::Config;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = ApolloClient::new(config)?;
//!
//!     // Enrich an organization by domain
//!     let fields = json!({"domain": "apollo.io"});
//!     let org = client
//!         .enrichment()
//!         .enrich_organization(fields.as_object().cloned().unwrap())
//!         .await;
//!     println!("organization: {}", org.into_value());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Operations return [`ApiResult`] rather than `Result`: a failed call is a
//! value, not an error to propagate. The failure variant carries a
//! [`FaultKind`] tag (transport, decode, or remote) plus a human-readable
//! message, and [`ApiResult::into_value`] collapses it to the
//! `{"error": true, "message": "..."}` JSON shape.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod transport;

// Re-export the main client and common types
pub use apollo_core::{ApiFailure, ApiResult, Config, Error, FaultKind, Result};
pub use client::ApolloClient;

// Re-export the family clients for direct construction
pub use endpoints::{accounts::AccountClient, enrichment::EnrichmentClient, search::SearchClient};
