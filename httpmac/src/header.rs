/// Value of the http `Authorization` header carrying a mac
/// https://datatracker.ietf.org/doc/html/draft-ietf-oauth-v2-http-mac-02#section-3.1
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeaderValue {
  /// MAC key identifier
  pub id: String,
  /// timestamp
  pub ts: String,
  /// nonce
  pub nonce: String,
  /// ext value, may be empty
  pub ext: String,
  /// base64 encoded mac
  pub mac: String,
}

impl AuthHeaderValue {
  pub fn new(id: &str, ts: &str, nonce: &str, ext: &str, mac: &str) -> Self {
    Self {
      id: id.to_string(),
      ts: ts.to_string(),
      nonce: nonce.to_string(),
      ext: ext.to_string(),
      mac: mac.to_string(),
    }
  }
}

impl std::fmt::Display for AuthHeaderValue {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      r#"MAC id="{}", ts="{}", nonce="{}", ext="{}", mac="{}""#,
      self.id, self.ts, self.nonce, self.ext, self.mac
    )
  }
}
