//! Uniform outcome type returned by every client operation

use crate::error::Error;
use serde::Serialize;
use serde_json::{json, Value};

/// Outcome of a single API call.
///
/// Operations never propagate transport or decoding faults to the caller:
/// every failure is folded into the `Failure` variant, so a call always
/// yields a value.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult {
  /// Decoded JSON body returned by the remote service, unmodified
  Success(Value),

  /// Normalized failure covering transport, decode, and remote faults
  Failure(ApiFailure),
}

/// The failure half of [`ApiResult`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiFailure {
  /// Which stage of the call failed
  pub kind: FaultKind,

  /// Human-readable description of the fault
  pub message: String,
}

/// Coarse classification of call failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultKind {
  /// DNS, connect, timeout, or TLS failure before a response arrived
  Transport,

  /// Response body was not valid JSON
  Decode,

  /// The service answered with a non-success status code
  Remote,
}

impl ApiResult {
  /// Whether the call produced a decoded payload
  pub fn is_success(&self) -> bool {
    matches!(self, ApiResult::Success(_))
  }

  /// Whether the call failed
  pub fn is_failure(&self) -> bool {
    matches!(self, ApiResult::Failure(_))
  }

  /// Decoded payload, if the call succeeded
  pub fn success(&self) -> Option<&Value> {
    match self {
      ApiResult::Success(value) => Some(value),
      ApiResult::Failure(_) => None,
    }
  }

  /// Failure details, if the call failed
  pub fn failure(&self) -> Option<&ApiFailure> {
    match self {
      ApiResult::Success(_) => None,
      ApiResult::Failure(failure) => Some(failure),
    }
  }

  /// Collapse the outcome into a single JSON value.
  ///
  /// Failures take the shape `{"error": true, "message": "..."}`, so callers
  /// that only inspect JSON can treat both branches uniformly.
  pub fn into_value(self) -> Value {
    match self {
      ApiResult::Success(value) => value,
      ApiResult::Failure(failure) => json!({
        "error": true,
        "message": failure.message,
      }),
    }
  }
}

impl From<Error> for ApiFailure {
  fn from(err: Error) -> Self {
    let kind = match &err {
      Error::Parse(_) => FaultKind::Decode,
      Error::Api(_) => FaultKind::Remote,
      _ => FaultKind::Transport,
    };
    ApiFailure { kind, message: err.to_string() }
  }
}

impl From<crate::error::Result<Value>> for ApiResult {
  fn from(result: crate::error::Result<Value>) -> Self {
    match result {
      Ok(value) => ApiResult::Success(value),
      Err(err) => ApiResult::Failure(err.into()),
    }
  }
}
