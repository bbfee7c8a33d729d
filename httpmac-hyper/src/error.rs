use httpmac::prelude::HttpMacError;
use thiserror::Error;

/// Result type for http mac authentication for hyper
pub type HyperMacResult<T> = std::result::Result<T, HyperMacError>;

/// Error type for http mac authentication for hyper
#[derive(Error, Debug)]
pub enum HyperMacError {
  /// Neither an absolute request uri nor a host header
  #[error("No authority found: {0}")]
  MissingAuthority(String),

  /// Failed to stringify header value
  #[error("Failed to stringify header value: {0}")]
  FailedToStrHeader(#[from] http::header::ToStrError),

  /// Failed to parse header value
  #[error("Failed to parse header value: {0}")]
  InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),

  /// Http body error
  #[error("Http body error: {0}")]
  HttpBodyError(String),

  /// Inherited from HttpMacError
  #[error("HttpMacError: {0}")]
  HttpMacError(#[from] HttpMacError),
}
