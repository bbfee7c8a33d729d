use crate::{mac_params::MacParams, request::RequestDescriptor};

/// Normalized request string
/// https://datatracker.ietf.org/doc/html/draft-ietf-oauth-v2-http-mac-02#section-3.2.1
///
/// Fields are joined by `\n` in the fixed order ts, nonce, method, path, host, port, ext,
/// followed by an empty field, i.e., the string always ends with a newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRequestString {
  ts: String,
  nonce: String,
  method: String,
  path: String,
  host: String,
  port: String,
  ext: String,
}

impl NormalizedRequestString {
  /// Build from individual fields
  pub fn new(ts: &str, nonce: &str, method: &str, host: &str, port: &str, path: &str, ext: &str) -> Self {
    Self {
      ts: ts.to_string(),
      nonce: nonce.to_string(),
      method: method.to_string(),
      path: path.to_string(),
      host: host.to_string(),
      port: port.to_string(),
      ext: ext.to_string(),
    }
  }

  /// Build from the freshness params, the request descriptor and its ext value
  pub fn from_request(params: &MacParams, request: &RequestDescriptor, ext: &str) -> Self {
    Self::new(
      &params.ts.to_string(),
      &params.nonce,
      &request.method,
      &request.host,
      &request.port.to_string(),
      &request.path,
      ext,
    )
  }

  /// Returns the normalized request string as bytes to be signed
  pub fn as_bytes(&self) -> Vec<u8> {
    self.to_string().into_bytes()
  }
}

impl std::fmt::Display for NormalizedRequestString {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let fields = [
      self.ts.as_str(),
      self.nonce.as_str(),
      self.method.as_str(),
      self.path.as_str(),
      self.host.as_str(),
      self.port.as_str(),
      self.ext.as_str(),
      "",
    ];
    write!(f, "{}", fields.join("\n"))
  }
}
