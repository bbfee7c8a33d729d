use crate::error::{HyperMacError, HyperMacResult};
use bytes::Bytes;
use http::{
  header::{AUTHORIZATION, CONTENT_TYPE, HOST},
  HeaderMap, HeaderValue, Method, Request,
};
use http_body::Body;
use http_body_util::{BodyExt, Full};
use httpmac::prelude::{RequestDescriptor, RequestSigner};
use std::future::Future;
use tracing::debug;

/// Content type forced on requests whose method carries a json payload
pub const JSON_CONTENT_TYPE: &str = "application/json";

/* --------------------------------------- */
/// A trait to set the MAC `Authorization` header on an outgoing request
pub trait MacAuthorizationReq {
  type Error;

  /// Collect the body, sign the request with the given signer, and set the `Content-Type` and `Authorization` headers.
  /// For POST, PUT and PATCH the content type is forced to `application/json` before signing, see [`effective_content_type`].
  fn set_mac_authorization<S>(self, signer: &S) -> impl Future<Output = Result<Request<Full<Bytes>>, Self::Error>> + Send
  where
    Self: Sized,
    S: RequestSigner + Sync;
}

#[cfg(feature = "blocking")]
/// Synchronous counterpart of [`MacAuthorizationReq`].
///
/// Delegates to the async method via `futures::executor::block_on`.
///
/// # Panics
///
/// Panics if called from within an async runtime (e.g. a `tokio` task).
/// Use the async [`MacAuthorizationReq`] method instead when you are already in an async context.
pub trait MacAuthorizationReqSync: MacAuthorizationReq {
  fn set_mac_authorization_sync<S>(self, signer: &S) -> Result<Request<Full<Bytes>>, Self::Error>
  where
    Self: Sized,
    S: RequestSigner + Sync;
}

/* --------------------------------------- */
impl<B> MacAuthorizationReq for Request<B>
where
  B: Body + Send,
  <B as Body>::Data: Send,
  <B as Body>::Error: std::fmt::Display,
{
  type Error = HyperMacError;

  async fn set_mac_authorization<S>(self, signer: &S) -> HyperMacResult<Request<Full<Bytes>>>
  where
    Self: Sized,
    S: RequestSigner + Sync,
  {
    let url = request_url(&self)?;
    let content_type = effective_content_type(self.method(), self.headers());

    let (mut parts, body) = self.into_parts();
    let body_bytes = body
      .collect()
      .await
      .map_err(|e| HyperMacError::HttpBodyError(e.to_string()))?
      .to_bytes();

    let mut descriptor = RequestDescriptor::try_new(parts.method.as_str(), &url)?;
    if let Some(content_type) = &content_type {
      descriptor.set_content_type(content_type.as_bytes());
    }
    if !body_bytes.is_empty() {
      descriptor.set_body(&body_bytes);
    }
    let authorization = signer.authorization(&descriptor)?;

    if let Some(content_type) = content_type {
      parts.headers.insert(CONTENT_TYPE, content_type);
    }
    parts
      .headers
      .insert(AUTHORIZATION, HeaderValue::from_str(&authorization.to_string())?);

    Ok(Request::from_parts(parts, Full::new(body_bytes)))
  }
}

#[cfg(feature = "blocking")]
impl<B> MacAuthorizationReqSync for Request<B>
where
  B: Body + Send,
  <B as Body>::Data: Send,
  <B as Body>::Error: std::fmt::Display,
{
  fn set_mac_authorization_sync<S>(self, signer: &S) -> HyperMacResult<Request<Full<Bytes>>>
  where
    Self: Sized,
    S: RequestSigner + Sync,
  {
    futures::executor::block_on(self.set_mac_authorization(signer))
  }
}

/* --------------------------------------- */
/// Returns the content type to be signed and sent.
/// POST, PUT and PATCH always get `application/json`, overriding whatever the caller set.
/// Any other method keeps its own `Content-Type` header, if any.
pub fn effective_content_type(method: &Method, headers: &HeaderMap) -> Option<HeaderValue> {
  if matches!(*method, Method::POST | Method::PUT | Method::PATCH) {
    if headers.get(CONTENT_TYPE).is_some_and(|v| v != JSON_CONTENT_TYPE) {
      debug!("Overriding content-type with {JSON_CONTENT_TYPE} for {method}");
    }
    return Some(HeaderValue::from_static(JSON_CONTENT_TYPE));
  }
  headers.get(CONTENT_TYPE).cloned()
}

/// Returns the full url of the request.
/// Origin-form uris are resolved against the `Host` header with the `http` scheme.
fn request_url<B>(req: &Request<B>) -> HyperMacResult<String> {
  let uri = req.uri();
  if uri.scheme().is_some() && uri.authority().is_some() {
    return Ok(uri.to_string());
  }
  let host = req
    .headers()
    .get(HOST)
    .ok_or_else(|| HyperMacError::MissingAuthority(format!("{uri} has no authority and no host header")))?
    .to_str()?;
  let path_and_query = uri.path_and_query().map(|v| v.as_str()).unwrap_or("/");
  Ok(format!("http://{host}{path_and_query}"))
}

/* --------------------------------------- */
#[cfg(test)]
#[path = "hyper_http_tests.rs"]
mod tests;
