//! HTTP transport layer for Apollo.io API requests

use apollo_core::{AuthScheme, Config, Error, ResourceFamily, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CACHE_CONTROL, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, error, instrument};
use url::Url;

/// HTTP transport layer for making requests to the Apollo.io API
///
/// One transport serves one resource family: the family determines the
/// default base URL and which authentication header is installed on every
/// outgoing request.
pub struct Transport {
    client: Client,
    base_url: String,
    family: ResourceFamily,
}

impl Transport {
    /// Create a new transport for one resource family
    pub fn new(config: &Config, family: ResourceFamily) -> Result<Self> {
        let base_url = config.base_url_for(family);
        Url::parse(&base_url).map_err(|e| Error::Config(format!("Invalid base URL: {}", e)))?;

        let headers = default_headers(&config.api_key, family.auth_scheme())?;

        let client = Client::builder()
            .default_headers(headers)
            .user_agent("apollo-client/0.1.0")
            .build()
            .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, base_url, family })
    }

    /// Create a mock transport for testing
    #[cfg(test)]
    pub fn new_mock() -> Self {
        let config = Config::default_with_key("test_key").with_base_url("https://mock.apollo.io/api/v1");
        Self::new(&config, ResourceFamily::Enrichment).expect("mock transport")
    }

    /// Issue one request and decode the response body as JSON
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP verb for the endpoint
    /// * `path` - Endpoint path, appended to the configured base URL
    /// * `query` - Optional query parameters
    /// * `body` - Optional JSON body
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing the decoded response value or an error
    #[instrument(skip(self, query, body), fields(family = %self.family, path = %path))]
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        query: Option<&HashMap<String, String>>,
        body: Option<&Value>,
    ) -> Result<Value> {
        let url = self.endpoint_url(path);
        debug!("Making {} request to: {}", method, url);

        let mut request = self.client.request(method, &url);
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Http(format!("Request failed: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::Http(format!("Failed to read response body: {}", e)))?;

        debug!("Response status {} with {} byte body", status, text.len());

        if !status.is_success() {
            error!("Request failed with status: {}", status);
            return Err(Error::Api(format!(
                "HTTP {}: {}",
                status,
                &text[..std::cmp::min(200, text.len())]
            )));
        }

        serde_json::from_str(&text).map_err(|e| {
            error!("Failed to parse JSON response: {}", e);
            Error::Parse(format!(
                "Failed to parse response: {}. Response: {}",
                e,
                &text[..std::cmp::min(200, text.len())]
            ))
        })
    }

    /// Build the full URL for an endpoint path
    fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Get the base URL being used
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the resource family this transport serves
    pub fn family(&self) -> ResourceFamily {
        self.family
    }
}

fn default_headers(api_key: &str, scheme: AuthScheme) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));

    let invalid_key = || Error::ApiKey("API key contains invalid header characters".to_string());
    match scheme {
        AuthScheme::XApiKey => {
            headers.insert("x-api-key", HeaderValue::from_str(api_key).map_err(|_| invalid_key())?);
        }
        AuthScheme::Bearer => {
            let value = format!("Bearer {}", api_key);
            headers.insert(AUTHORIZATION, HeaderValue::from_str(&value).map_err(|_| invalid_key())?);
        }
    }

    Ok(headers)
}
