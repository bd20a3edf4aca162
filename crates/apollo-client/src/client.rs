/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Kalimero MK
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! The top-level client bundling all three resource families

use crate::endpoints::{
  accounts::AccountClient, enrichment::EnrichmentClient, search::SearchClient,
};

use apollo_core::{Config, Result};

/// Main Apollo.io API client
///
/// Bundles the three resource-family clients behind one constructor. Each
/// family keeps its own transport because the remote API uses different
/// authentication headers and base URLs per endpoint group.
///
/// # Examples
///
/// ```ignore
/// use apollo_client::ApolloClient;
/// use apollo_core::Config;
/// use serde_json::json;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = Config::from_env()?;
///     let client = ApolloClient::new(config)?;
///
///     // Enrich a person
///     let fields = json!({"first_name": "Tim", "domain": "apollo.io"});
///     let person = client
///         .enrichment()
///         .enrich_person(fields.as_object().cloned().unwrap(), false, false)
///         .await;
///
///     // List account stages
///     let stages = client.accounts().list_account_stages().await;
///     println!("stages: {}", stages.into_value());
///
///     Ok(())
/// }
/// ```
pub struct ApolloClient {
  enrichment: EnrichmentClient,
  search: SearchClient,
  accounts: AccountClient,
}

impl ApolloClient {
  /// Create clients for all three resource families from one config
  ///
  /// # Arguments
  ///
  /// * `config` - Configuration containing the API key and optional base URL
  ///   override
  ///
  /// # Errors
  ///
  /// Returns an error if the configured base URL is invalid or an HTTP
  /// client cannot be created.
  pub fn new(config: Config) -> Result<Self> {
    Ok(Self {
      enrichment: EnrichmentClient::new(&config)?,
      search: SearchClient::new(&config)?,
      accounts: AccountClient::new(&config)?,
    })
  }

  /// Get access to the person and organization enrichment endpoints
  pub fn enrichment(&self) -> &EnrichmentClient {
    &self.enrichment
  }

  /// Get access to the people, organization, and job-posting search endpoints
  pub fn search(&self) -> &SearchClient {
    &self.search
  }

  /// Get access to the account endpoints
  pub fn accounts(&self) -> &AccountClient {
    &self.accounts
  }
}

impl std::fmt::Debug for ApolloClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ApolloClient")
      .field("enrichment_base_url", &self.enrichment.base_url())
      .field("search_base_url", &self.search.base_url())
      .field("accounts_base_url", &self.accounts.base_url())
      .finish()
  }
}
