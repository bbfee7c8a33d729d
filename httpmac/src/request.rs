use crate::{
  error::{HttpMacError, HttpMacResult},
  trace::*,
};
use url::{Host, Url};

const HTTP_PORT: u16 = 80;
const HTTPS_PORT: u16 = 443;

/* ---------------------------------------- */
#[derive(Debug, Clone, PartialEq, Eq)]
/// Security-relevant parts of an outgoing request, derived from its method, url, content type and body
pub struct RequestDescriptor {
  /// http method, e.g., `POST`
  pub method: String,
  /// host name of the server
  pub host: String,
  /// explicit port, or the scheme default
  pub port: u16,
  /// path portion of the url without query and fragment
  pub path: String,
  /// content type as bytes
  pub content_type: Option<Vec<u8>>,
  /// body as bytes
  pub body: Option<Vec<u8>>,
}

impl RequestDescriptor {
  /// Create a new request descriptor from the http method and the full url of the request.
  /// The port falls back to 443 for `https` and to 80 for any other scheme when the url has no explicit port
  /// or an explicit port 0. IPv6 literal hosts are signed without their brackets.
  pub fn try_new(method: &str, url: &str) -> HttpMacResult<Self> {
    let parsed = Url::parse(url).map_err(|e| HttpMacError::InvalidRequestUrl(format!("{url}: {e}")))?;
    let host = match parsed.host() {
      Some(Host::Domain(domain)) if !domain.is_empty() => domain.to_string(),
      Some(Host::Ipv4(addr)) => addr.to_string(),
      Some(Host::Ipv6(addr)) => addr.to_string(),
      _ => return Err(HttpMacError::InvalidRequestUrl(format!("{url}: no host"))),
    };
    let port = parsed
      .port()
      .filter(|p| *p != 0)
      .unwrap_or(if parsed.scheme() == "https" { HTTPS_PORT } else { HTTP_PORT });
    let path = parsed.path().to_string();
    debug!("Request descriptor: {method} host={host} port={port} path={path}");

    Ok(Self {
      method: method.to_string(),
      host,
      port,
      path,
      content_type: None,
      body: None,
    })
  }

  /// Set the content type, given as text or bytes
  pub fn set_content_type(&mut self, content_type: impl AsRef<[u8]>) -> &mut Self {
    self.content_type = Some(content_type.as_ref().to_vec());
    self
  }

  /// Set the body, given as text or bytes
  pub fn set_body(&mut self, body: impl AsRef<[u8]>) -> &mut Self {
    self.body = Some(body.as_ref().to_vec());
    self
  }
}
