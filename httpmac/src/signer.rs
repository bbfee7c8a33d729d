use crate::{
  crypto::{HashAlgorithm, SharedKey, SigningKey},
  error::{HttpMacError, HttpMacResult},
  ext::generate_ext,
  header::AuthHeaderValue,
  mac_params::MacParams,
  normalized_string::NormalizedRequestString,
  request::RequestDescriptor,
  trace::*,
};
use base64::{engine::general_purpose, Engine as _};

/* -------------------------------- */
/// MAC key identifier and MAC key supplied by the caller
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
  identifier: String,
  key: String,
}

impl Credential {
  pub fn new(identifier: &str, key: &str) -> Self {
    Self {
      identifier: identifier.to_string(),
      key: key.to_string(),
    }
  }

  /// MAC key identifier
  pub fn identifier(&self) -> &str {
    &self.identifier
  }

  /// Fails with `MissingCredential` if either the identifier or the key is empty
  pub fn ensure_present(&self) -> HttpMacResult<()> {
    if self.identifier.is_empty() || self.key.is_empty() {
      return Err(HttpMacError::MissingCredential);
    }
    Ok(())
  }
}

impl std::fmt::Debug for Credential {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Credential")
      .field("identifier", &self.identifier)
      .finish_non_exhaustive()
  }
}

/* -------------------------------- */
/// Returns the base64 encoded mac of the normalized request string.
/// `mac_key` is the MAC key string in the `-`/`_` variant of base64.
pub fn generate_signature(
  mac_key: &str,
  normalized: &NormalizedRequestString,
  alg: &HashAlgorithm,
) -> HttpMacResult<String> {
  let key = SharedKey::from_mac_key(alg, mac_key)?;
  sign_normalized(&key, normalized)
}

fn sign_normalized(key: &impl SigningKey, normalized: &NormalizedRequestString) -> HttpMacResult<String> {
  let mac = key.sign(&normalized.as_bytes())?;
  Ok(general_purpose::STANDARD.encode(mac))
}

/* -------------------------------- */
/// Capability to compute the `Authorization` header value of an outgoing request.
/// Http client integrations depend on this trait only.
pub trait RequestSigner {
  /// Returns the `Authorization` header value for the request, with a fresh timestamp and nonce
  fn authorization(&self, request: &RequestDescriptor) -> HttpMacResult<AuthHeaderValue>;
}

/// Signer holding a validated credential and its decoded key
#[derive(Debug, Clone)]
pub struct MacSigner {
  identifier: String,
  key: SharedKey,
}

impl MacSigner {
  /// Create a signer from the credential and hash algorithm.
  /// The credential is checked for emptiness before the key is decoded.
  pub fn try_new(credential: &Credential, alg: &HashAlgorithm) -> HttpMacResult<Self> {
    credential.ensure_present()?;
    let key = SharedKey::from_mac_key(alg, &credential.key)?;
    Ok(Self {
      identifier: credential.identifier.clone(),
      key,
    })
  }

  /// MAC key identifier emitted as `id`
  pub fn key_identifier(&self) -> &str {
    &self.identifier
  }

  /// Hash algorithm used for ext and mac
  pub fn alg(&self) -> HashAlgorithm {
    self.key.alg()
  }

  /// Sign the request with the given timestamp and nonce
  pub fn sign_with_params(&self, request: &RequestDescriptor, params: &MacParams) -> HttpMacResult<AuthHeaderValue> {
    let alg = self.alg();
    let ext = generate_ext(request.content_type.as_ref(), request.body.as_ref(), &alg);
    let normalized = NormalizedRequestString::from_request(params, request, &ext);
    debug!(
      "Signing {} {}:{}{} with {}",
      request.method, request.host, request.port, request.path, alg
    );
    let mac = sign_normalized(&self.key, &normalized)?;

    Ok(AuthHeaderValue::new(
      &self.identifier,
      &params.ts.to_string(),
      &params.nonce,
      &ext,
      &mac,
    ))
  }
}

impl RequestSigner for MacSigner {
  fn authorization(&self, request: &RequestDescriptor) -> HttpMacResult<AuthHeaderValue> {
    let params = MacParams::try_new()?;
    self.sign_with_params(request, &params)
  }
}

/* -------------------------------- */
/// Returns a value for the http `Authorization` header containing a mac of the request.
/// `alg` defaults to hmac-sha256 for both the ext digest and the mac.
/// Content type and body may be given as text or bytes.
pub fn generate_authorization_header_value<C, B>(
  http_method: &str,
  url: &str,
  mac_key_identifier: &str,
  mac_key: &str,
  content_type: Option<C>,
  body: Option<B>,
  alg: Option<HashAlgorithm>,
) -> HttpMacResult<String>
where
  C: AsRef<[u8]>,
  B: AsRef<[u8]>,
{
  let credential = Credential::new(mac_key_identifier, mac_key);
  credential.ensure_present()?;

  let mut request = RequestDescriptor::try_new(http_method, url)?;
  if let Some(content_type) = content_type {
    request.set_content_type(content_type);
  }
  if let Some(body) = body {
    request.set_body(body);
  }

  let signer = MacSigner::try_new(&credential, &alg.unwrap_or_default())?;
  signer.authorization(&request).map(|v| v.to_string())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::crypto::VerifyingKey;
  use base64::Engine as _;

  const MAC_KEY_ID: &str = "h480djs93hd8";
  const MAC_KEY: &str = "hmJ8T1_Qr-7w2mB5cK9xYg";
  const TS: u64 = 1336363200;
  const NONCE: &str = "dj83hs9s";

  const GET_MAC: &str = "Qvrjx0zaD3X+PuYr9FPQUvLqeW4NUtidzY4ID0AuSEs=";
  const POST_BODY: &str = r#"{"hello": "world"}"#;
  const POST_EXT: &str = "117a441f3ce73837151db117684fb39c6da767289ec3e16bddaebac7f5869558";
  const POST_MAC_SHA256: &str = "Rq/YqrKwK1Ao6ulEwsc2kzqEB5IYs2iQ4mRGIbEYLzw=";
  const POST_MAC_SHA1: &str = "rZp5yVxPjOYJRT9fSNff3aSOeqw=";
  const NONE: Option<&[u8]> = None;

  fn fixed_params() -> MacParams {
    MacParams {
      ts: TS,
      nonce: NONCE.to_string(),
    }
  }

  fn signer(alg: &HashAlgorithm) -> MacSigner {
    MacSigner::try_new(&Credential::new(MAC_KEY_ID, MAC_KEY), alg).unwrap()
  }

  fn post_request() -> RequestDescriptor {
    let mut request = RequestDescriptor::try_new("POST", "https://api.example.com/v1/accounts?page=1").unwrap();
    request.set_content_type("application/json").set_body(POST_BODY);
    request
  }

  #[test]
  fn test_get_without_body() {
    let request = RequestDescriptor::try_new("GET", "http://example.com/resource").unwrap();
    let header = signer(&HashAlgorithm::HmacSha256)
      .sign_with_params(&request, &fixed_params())
      .unwrap();
    assert_eq!(header.ext, "");
    assert_eq!(header.mac, GET_MAC);
    assert_eq!(
      header.to_string(),
      format!(r#"MAC id="{MAC_KEY_ID}", ts="{TS}", nonce="{NONCE}", ext="", mac="{GET_MAC}""#)
    );
  }

  #[test]
  fn test_post_with_body() {
    let header = signer(&HashAlgorithm::HmacSha256)
      .sign_with_params(&post_request(), &fixed_params())
      .unwrap();
    assert_eq!(header.ext, POST_EXT);
    assert_eq!(header.mac, POST_MAC_SHA256);

    let header = signer(&HashAlgorithm::HmacSha1)
      .sign_with_params(&post_request(), &fixed_params())
      .unwrap();
    assert_eq!(header.ext.len(), 40);
    assert_eq!(header.mac, POST_MAC_SHA1);
  }

  #[test]
  fn test_generate_signature_matches_signer() {
    let normalized = NormalizedRequestString::new(&TS.to_string(), NONCE, "GET", "example.com", "80", "/resource", "");
    let mac = generate_signature(MAC_KEY, &normalized, &HashAlgorithm::HmacSha256).unwrap();
    assert_eq!(mac, GET_MAC);
    // deterministic
    assert_eq!(mac, generate_signature(MAC_KEY, &normalized, &HashAlgorithm::HmacSha256).unwrap());
  }

  #[test]
  fn test_round_trip_and_tampering() {
    let alg = HashAlgorithm::HmacSha256;
    let header = signer(&alg).sign_with_params(&post_request(), &fixed_params()).unwrap();
    let mac = general_purpose::STANDARD.decode(&header.mac).unwrap();
    let key = SharedKey::from_mac_key(&alg, MAC_KEY).unwrap();

    let rebuild = |method: &str, url: &str, body: &str| {
      let mut request = RequestDescriptor::try_new(method, url).unwrap();
      request.set_content_type("application/json").set_body(body);
      let ext = generate_ext(request.content_type.as_ref(), request.body.as_ref(), &alg);
      NormalizedRequestString::from_request(&fixed_params(), &request, &ext).as_bytes()
    };

    let original = rebuild("POST", "https://api.example.com/v1/accounts", POST_BODY);
    assert!(key.verify(&original, &mac).is_ok());

    let tampered = [
      rebuild("PUT", "https://api.example.com/v1/accounts", POST_BODY),
      rebuild("POST", "https://api.example.com/v1/other", POST_BODY),
      rebuild("POST", "https://evil.example.com/v1/accounts", POST_BODY),
      rebuild("POST", "https://api.example.com:8443/v1/accounts", POST_BODY),
      rebuild("POST", "https://api.example.com/v1/accounts", r#"{"hello": "there"}"#),
    ];
    for data in tampered {
      assert!(matches!(key.verify(&data, &mac), Err(HttpMacError::InvalidSignature(_))));
    }
  }

  #[test]
  fn test_missing_credential() {
    let res = generate_authorization_header_value("GET", "http://example.com/", "", MAC_KEY, NONE, NONE, None);
    assert!(matches!(res, Err(HttpMacError::MissingCredential)));
    let res = generate_authorization_header_value("GET", "http://example.com/", MAC_KEY_ID, "", NONE, NONE, None);
    assert!(matches!(res, Err(HttpMacError::MissingCredential)));
    // checked before the url is looked at
    let res = generate_authorization_header_value("GET", "not a url", "", "", NONE, NONE, None);
    assert!(matches!(res, Err(HttpMacError::MissingCredential)));
    assert!(matches!(
      MacSigner::try_new(&Credential::new("", MAC_KEY), &HashAlgorithm::default()),
      Err(HttpMacError::MissingCredential)
    ));
  }

  #[test]
  fn test_invalid_inputs() {
    let res = generate_authorization_header_value("GET", "http://example.com/", MAC_KEY_ID, "a$b", NONE, NONE, None);
    assert!(matches!(res, Err(HttpMacError::InvalidKey(_))));
    let res = generate_authorization_header_value("GET", "example.com/resource", MAC_KEY_ID, MAC_KEY, NONE, NONE, None);
    assert!(matches!(res, Err(HttpMacError::InvalidRequestUrl(_))));
  }

  #[test]
  fn test_generate_authorization_header_value() {
    let value = generate_authorization_header_value(
      "POST",
      "https://api.example.com/v1/accounts",
      MAC_KEY_ID,
      MAC_KEY,
      Some("application/json"),
      Some(POST_BODY),
      None,
    )
    .unwrap();
    assert!(value.starts_with(&format!(r#"MAC id="{MAC_KEY_ID}", ts=""#)));
    assert!(value.contains(&format!(r#", ext="{POST_EXT}", mac=""#)));
    assert!(value.ends_with("=\""));

    // fresh nonce on every call, bytes accepted as well as text
    let other = generate_authorization_header_value(
      "POST",
      "https://api.example.com/v1/accounts",
      MAC_KEY_ID,
      MAC_KEY,
      Some(b"application/json".to_vec()),
      Some(POST_BODY.as_bytes()),
      None,
    )
    .unwrap();
    assert_ne!(value, other);
  }

  #[test]
  fn test_signer_keeps_identifier_and_alg() {
    let credential = Credential::new(MAC_KEY_ID, MAC_KEY);
    assert_eq!(credential.identifier(), MAC_KEY_ID);
    let signer = MacSigner::try_new(&credential, &HashAlgorithm::HmacSha384).unwrap();
    assert_eq!(signer.key_identifier(), credential.identifier());
    assert_eq!(signer.alg(), HashAlgorithm::HmacSha384);
  }

  #[test]
  fn test_debug_hides_key() {
    let credential = Credential::new(MAC_KEY_ID, MAC_KEY);
    assert!(!format!("{:?}", credential).contains(MAC_KEY));
    assert!(!format!("{:?}", signer(&HashAlgorithm::HmacSha256)).contains(MAC_KEY));
  }
}
