//! Person Enrichment Example
//!
//! This example demonstrates how to use apollo-client to:
//! - Load configuration from the environment
//! - Enrich a single person by name and domain
//! - Handle the success and failure branches of an API call
//!
//! Requires `APOLLO_API_KEY` in the environment (or a `.env` file).

use apollo_client::{ApiResult, ApolloClient};
use apollo_core::Config;
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  // Initialize logging
  tracing_subscriber::fmt::init();

  // Load configuration from environment
  let config = Config::from_env()?;
  let client = ApolloClient::new(config)?;

  let fields = json!({
    "first_name": "Tim",
    "domain": "apollo.io",
  });

  let result = client
    .enrichment()
    .enrich_person(fields.as_object().cloned().expect("object literal"), false, false)
    .await;

  match result {
    ApiResult::Success(person) => {
      println!("{}", serde_json::to_string_pretty(&person)?);
    }
    ApiResult::Failure(failure) => {
      eprintln!("lookup failed ({:?}): {}", failure.kind, failure.message);
    }
  }

  Ok(())
}
