use thiserror::Error;

/// The main error type for apollo-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Environment variable error
  #[error("Environment variable error: {0}")]
  EnvVar(#[from] std::env::VarError),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// API key error
  #[error("Failed to retrieve API key: {0}")]
  ApiKey(String),

  /// HTTP transport error
  #[error("HTTP error: {0}")]
  Http(String),

  /// API error from Apollo
  #[error("API error: {0}")]
  Api(String),

  /// Parse error for response bodies
  #[error("Parse error: {0}")]
  Parse(String),
}

/// Result type alias for apollo-* crates
pub type Result<T> = std::result::Result<T, Error>;
