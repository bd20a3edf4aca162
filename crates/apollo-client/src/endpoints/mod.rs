//! Endpoint families for the Apollo.io API
//!
//! Each module holds one resource-family client. The three families share
//! the request helper in [`crate::transport`] but differ in default base URL
//! and authentication header, so every client owns its own transport.

pub mod accounts;
pub mod enrichment;
pub mod search;

use apollo_core::{DEFAULT_PAGE, DEFAULT_PER_PAGE};
use serde_json::{json, Map, Value};

/// Merge pagination controls into a caller-supplied filter object.
///
/// Explicit `page`/`per_page` values overwrite same-named keys already
/// present in `filters` (last write wins).
pub(crate) fn with_pagination(
  mut filters: Map<String, Value>,
  page: Option<u32>,
  per_page: Option<u32>,
) -> Map<String, Value> {
  filters.insert("page".to_string(), json!(page.unwrap_or(DEFAULT_PAGE)));
  filters.insert("per_page".to_string(), json!(per_page.unwrap_or(DEFAULT_PER_PAGE)));
  filters
}
