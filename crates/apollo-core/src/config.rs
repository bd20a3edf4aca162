//! Configuration management for the Apollo.io client

use crate::error::{Error, Result};
use crate::ResourceFamily;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

/// Main configuration struct for the Apollo.io client
///
/// A config is supplied once at client construction and is immutable for the
/// client's lifetime. When `base_url` is `None`, each resource family falls
/// back to its own default URL.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// Apollo.io API key
  pub api_key: String,

  /// Base URL override shared by all resource families
  pub base_url: Option<String>,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let api_key =
      env::var("APOLLO_API_KEY").map_err(|_| Error::ApiKey("APOLLO_API_KEY not set".to_string()))?;

    let base_url = env::var("APOLLO_BASE_URL").ok();

    Ok(Config { api_key, base_url })
  }

  /// Create a config with family-default base URLs (for testing)
  pub fn default_with_key(api_key: impl Into<String>) -> Self {
    Config { api_key: api_key.into(), base_url: None }
  }

  /// Override the base URL for every resource family
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = Some(base_url.into());
    self
  }

  /// Resolve the base URL for a resource family, honoring any override
  pub fn base_url_for(&self, family: ResourceFamily) -> String {
    self.base_url.clone().unwrap_or_else(|| family.default_base_url().to_string())
  }
}
