//! Person and organization enrichment endpoints

use crate::transport::Transport;
use apollo_core::{ApiResult, Config, ResourceFamily, Result};
use reqwest::Method;
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::instrument;

/// Person and organization enrichment endpoints
///
/// Authenticates with the `x-api-key` header and defaults to the
/// `/api/v1` base URL.
#[derive(Clone)]
pub struct EnrichmentClient {
  transport: Arc<Transport>,
}

impl EnrichmentClient {
  /// Create a new enrichment client
  ///
  /// # Errors
  ///
  /// Returns an error if the configured base URL is invalid or the HTTP
  /// client cannot be created.
  pub fn new(config: &Config) -> Result<Self> {
    Ok(Self { transport: Arc::new(Transport::new(config, ResourceFamily::Enrichment)?) })
  }

  /// Enrich data for one person
  ///
  /// Sends `fields` (e.g. `first_name`, `last_name`, `email`, `domain`) as
  /// the JSON body of a POST to `/people/match`. The two reveal flags control
  /// whether Apollo attempts to return personal emails and phone numbers,
  /// which increases credit costs; both travel as string-valued
  /// `"true"`/`"false"` query parameters, which is what the API expects.
  ///
  /// No input validation is performed; the remote API is the sole validator.
  ///
  /// # Examples
  ///
  /// ```ignore
  /// # use apollo_client::EnrichmentClient;
  /// # use apollo_core::Config;
  /// # use serde_json::json;
  /// let client = EnrichmentClient::new(&Config::from_env()?)?;
  /// let fields = json!({"first_name": "Tim", "domain": "apollo.io"});
  /// let result = client.enrich_person(fields.as_object().cloned().unwrap(), false, false).await;
  /// if let Some(person) = result.success() {
  ///     println!("match: {person}");
  /// }
  /// ```
  #[instrument(skip(self, fields))]
  pub async fn enrich_person(
    &self,
    fields: Map<String, Value>,
    reveal_personal_emails: bool,
    reveal_phone_number: bool,
  ) -> ApiResult {
    let mut query = HashMap::new();
    query.insert("reveal_personal_emails".to_string(), reveal_personal_emails.to_string());
    query.insert("reveal_phone_number".to_string(), reveal_phone_number.to_string());

    self
      .transport
      .execute(Method::POST, "/people/match", Some(&query), Some(&Value::Object(fields)))
      .await
      .into()
  }

  /// Enrich data for multiple people in one call
  ///
  /// Sends `{"people": [...]}` to `/people/bulk_match`. Each entry takes the
  /// same shape as the single-person `fields` argument.
  #[instrument(skip(self, people))]
  pub async fn bulk_enrich_people(&self, people: Vec<Value>) -> ApiResult {
    let body = json!({ "people": people });
    self.transport.execute(Method::POST, "/people/bulk_match", None, Some(&body)).await.into()
  }

  /// Enrich data for one organization
  ///
  /// Sends `fields` verbatim to `/organizations/enrich`; usually requires at
  /// least a `domain` key.
  #[instrument(skip(self, fields))]
  pub async fn enrich_organization(&self, fields: Map<String, Value>) -> ApiResult {
    self
      .transport
      .execute(Method::POST, "/organizations/enrich", None, Some(&Value::Object(fields)))
      .await
      .into()
  }

  /// Enrich multiple organizations by domain in one call
  ///
  /// Sends `{"domains": [...]}` to `/organizations/bulk_enrich` on the
  /// configured base URL.
  #[instrument(skip(self, domains))]
  pub async fn bulk_enrich_organizations(&self, domains: Vec<String>) -> ApiResult {
    let body = json!({ "domains": domains });
    self
      .transport
      .execute(Method::POST, "/organizations/bulk_enrich", None, Some(&body))
      .await
      .into()
  }

  /// Get the base URL this client sends to
  pub fn base_url(&self) -> &str {
    self.transport.base_url()
  }
}
