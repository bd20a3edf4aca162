//! People, organization, and job-posting search endpoints

use super::with_pagination;
use crate::transport::Transport;
use apollo_core::{ApiResult, Config, ResourceFamily, Result};
use reqwest::Method;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::instrument;

/// People, organization, and job-posting search endpoints
///
/// Unlike the enrichment and account families, the search endpoints
/// authenticate with `Authorization: Bearer` and default to the `/v1`
/// base URL.
#[derive(Clone)]
pub struct SearchClient {
  transport: Arc<Transport>,
}

impl SearchClient {
  /// Create a new search client
  ///
  /// # Errors
  ///
  /// Returns an error if the configured base URL is invalid or the HTTP
  /// client cannot be created.
  pub fn new(config: &Config) -> Result<Self> {
    Ok(Self { transport: Arc::new(Transport::new(config, ResourceFamily::Search)?) })
  }

  /// Search for people in Apollo's database
  ///
  /// Merges `page`/`per_page` into `filters` and POSTs the result to
  /// `/people/search`. Explicit pagination arguments overwrite same-named
  /// keys the caller put into `filters`; `None` falls back to page 1 with
  /// 25 results per page.
  ///
  /// # Arguments
  ///
  /// * `filters` - Search filters such as `person_titles`, `person_locations`
  /// * `page` - Page number for pagination
  /// * `per_page` - Number of records per page
  ///
  /// # Examples
  ///
  /// ```ignore
  /// # use apollo_client::SearchClient;
  /// # use apollo_core::Config;
  /// # use serde_json::json;
  /// let client = SearchClient::new(&Config::from_env()?)?;
  /// let filters = json!({"person_titles": ["engineer"]});
  /// let result = client
  ///     .search_people(filters.as_object().cloned().unwrap(), Some(2), Some(10))
  ///     .await;
  /// ```
  #[instrument(skip(self, filters))]
  pub async fn search_people(
    &self,
    filters: Map<String, Value>,
    page: Option<u32>,
    per_page: Option<u32>,
  ) -> ApiResult {
    let payload = with_pagination(filters, page, per_page);
    self
      .transport
      .execute(Method::POST, "/people/search", None, Some(&Value::Object(payload)))
      .await
      .into()
  }

  /// Search for organizations
  ///
  /// POSTs `filters` verbatim to `/organizations/search`.
  #[instrument(skip(self, filters))]
  pub async fn search_organizations(&self, filters: Map<String, Value>) -> ApiResult {
    self
      .transport
      .execute(Method::POST, "/organizations/search", None, Some(&Value::Object(filters)))
      .await
      .into()
  }

  /// Search job postings for organizations
  ///
  /// POSTs `filters` (e.g. `org_ids`, `keywords`) verbatim to
  /// `/organizations/job_postings/search`.
  #[instrument(skip(self, filters))]
  pub async fn search_organization_job_postings(&self, filters: Map<String, Value>) -> ApiResult {
    self
      .transport
      .execute(Method::POST, "/organizations/job_postings/search", None, Some(&Value::Object(filters)))
      .await
      .into()
  }

  /// Get the base URL this client sends to
  pub fn base_url(&self) -> &str {
    self.transport.base_url()
  }
}
