//! Account CRUD and bulk-update endpoints

use super::with_pagination;
use crate::transport::Transport;
use apollo_core::{ApiResult, Config, ResourceFamily, Result};
use reqwest::Method;
use serde_json::{json, Map, Value};
use std::sync::Arc;
use tracing::instrument;

/// Account CRUD and bulk-update endpoints
///
/// Authenticates with the `x-api-key` header and defaults to the
/// `/api/v1` base URL.
#[derive(Clone)]
pub struct AccountClient {
  transport: Arc<Transport>,
}

impl AccountClient {
  /// Create a new account client
  ///
  /// # Errors
  ///
  /// Returns an error if the configured base URL is invalid or the HTTP
  /// client cannot be created.
  pub fn new(config: &Config) -> Result<Self> {
    Ok(Self { transport: Arc::new(Transport::new(config, ResourceFamily::Account)?) })
  }

  /// Add a new account (company) to your Apollo team
  ///
  /// POSTs `fields` (e.g. `name`, `domain`, `owner_id`, `account_stage_id`,
  /// `phone`, `raw_address`) to `/accounts`.
  #[instrument(skip(self, fields))]
  pub async fn create_account(&self, fields: Map<String, Value>) -> ApiResult {
    self
      .transport
      .execute(Method::POST, "/accounts", None, Some(&Value::Object(fields)))
      .await
      .into()
  }

  /// Update an existing account
  ///
  /// Issues a PUT to `/accounts/{account_id}` with `fields` as the JSON
  /// body. The id is concatenated into the path with no escaping, so the
  /// caller must supply a value that is safe for a URL path segment.
  #[instrument(skip(self, fields))]
  pub async fn update_account(&self, account_id: &str, fields: Map<String, Value>) -> ApiResult {
    let path = format!("/accounts/{}", account_id);
    self.transport.execute(Method::PUT, &path, None, Some(&Value::Object(fields))).await.into()
  }

  /// Search accounts added to your team
  ///
  /// Same pagination policy as [`SearchClient::search_people`]: explicit
  /// `page`/`per_page` overwrite same-named keys in `filters`, and `None`
  /// falls back to page 1 with 25 results per page. POSTs to
  /// `/accounts/search`.
  ///
  /// [`SearchClient::search_people`]: crate::endpoints::search::SearchClient::search_people
  #[instrument(skip(self, filters))]
  pub async fn search_accounts(
    &self,
    filters: Map<String, Value>,
    page: Option<u32>,
    per_page: Option<u32>,
  ) -> ApiResult {
    let payload = with_pagination(filters, page, per_page);
    self
      .transport
      .execute(Method::POST, "/accounts/search", None, Some(&Value::Object(payload)))
      .await
      .into()
  }

  /// Move multiple accounts to a new stage
  ///
  /// POSTs `{"account_ids": [...], "account_stage_id": "..."}` to
  /// `/accounts/bulk_update`.
  #[instrument(skip(self, account_ids))]
  pub async fn bulk_update_account_stage(
    &self,
    account_ids: Vec<String>,
    stage_id: &str,
  ) -> ApiResult {
    let body = json!({
      "account_ids": account_ids,
      "account_stage_id": stage_id,
    });
    self.transport.execute(Method::POST, "/accounts/bulk_update", None, Some(&body)).await.into()
  }

  /// Assign multiple accounts to a new owner
  ///
  /// POSTs `{"account_ids": [...], "owner_id": "..."}` to
  /// `/accounts/update_owners`.
  #[instrument(skip(self, account_ids))]
  pub async fn bulk_update_account_owner(
    &self,
    account_ids: Vec<String>,
    owner_id: &str,
  ) -> ApiResult {
    let body = json!({
      "account_ids": account_ids,
      "owner_id": owner_id,
    });
    self.transport.execute(Method::POST, "/accounts/update_owners", None, Some(&body)).await.into()
  }

  /// List all account stages available to your team
  ///
  /// Issues a GET to `/account_stages` with no body and returns the decoded
  /// payload verbatim.
  #[instrument(skip(self))]
  pub async fn list_account_stages(&self) -> ApiResult {
    self.transport.execute(Method::GET, "/account_stages", None, None).await.into()
  }

  /// Get the base URL this client sends to
  pub fn base_url(&self) -> &str {
    self.transport.base_url()
  }
}
