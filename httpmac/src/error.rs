use thiserror::Error;

/// Result type for http mac authentication
pub type HttpMacResult<T> = std::result::Result<T, HttpMacError>;

/// Error type for http mac authentication
#[derive(Error, Debug)]
pub enum HttpMacError {
  /// Key identifier or key is empty
  #[error("MAC key identifier or key cannot be empty")]
  MissingCredential,

  /// MAC key is not valid base64 after the url-safe alphabet substitution
  #[error("Invalid MAC key: {0}")]
  InvalidKey(String),

  /// Secure random source failed
  #[error("Secure random source unavailable: {0}")]
  RandomSourceUnavailable(String),

  /// Request url cannot be parsed or has no host
  #[error("Invalid request url: {0}")]
  InvalidRequestUrl(String),

  /// Computed mac does not match the given one
  #[error("Invalid mac: {0}")]
  InvalidSignature(String),

  /// Unknown hash algorithm name
  #[error("Invalid hash algorithm name: {0}")]
  InvalidAlgorithmName(String),
}
