pub mod api_result;
pub mod config;
pub mod error;

pub use api_result::{ApiFailure, ApiResult, FaultKind};
pub use config::Config;
pub use error::{Error, Result};

/// The endpoint families exposed by the Apollo.io API.
///
/// The remote API is not uniform across its endpoint groups: each family
/// carries its own default base URL and authentication header scheme. Both
/// splits are preserved here rather than unified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceFamily {
  /// Person and organization enrichment endpoints
  Enrichment,

  /// People, organization, and job-posting search endpoints
  Search,

  /// Account CRUD and bulk-update endpoints
  Account,
}

impl ResourceFamily {
  /// Default base URL for this family.
  ///
  /// Search endpoints live under `/v1` while enrichment and account
  /// endpoints live under `/api/v1`. Either can be overridden through
  /// [`Config::base_url`].
  pub fn default_base_url(self) -> &'static str {
    match self {
      ResourceFamily::Enrichment | ResourceFamily::Account => DEFAULT_BASE_URL,
      ResourceFamily::Search => SEARCH_BASE_URL,
    }
  }

  /// Authentication header scheme used by this family
  pub fn auth_scheme(self) -> AuthScheme {
    match self {
      ResourceFamily::Enrichment | ResourceFamily::Account => AuthScheme::XApiKey,
      ResourceFamily::Search => AuthScheme::Bearer,
    }
  }
}

impl std::fmt::Display for ResourceFamily {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ResourceFamily::Enrichment => write!(f, "enrichment"),
      ResourceFamily::Search => write!(f, "search"),
      ResourceFamily::Account => write!(f, "account"),
    }
  }
}

/// How the API key is attached to outgoing requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
  /// `x-api-key: <key>`
  XApiKey,

  /// `Authorization: Bearer <key>`
  Bearer,
}

/// Default base URL for the enrichment and account families
pub const DEFAULT_BASE_URL: &str = "https://api.apollo.io/api/v1";

/// Default base URL for the search family
pub const SEARCH_BASE_URL: &str = "https://api.apollo.io/v1";

/// Pagination defaults applied when a search call omits them
pub const DEFAULT_PAGE: u32 = 1;
/// Results per page when a search call does not say otherwise
pub const DEFAULT_PER_PAGE: u32 = 25;
