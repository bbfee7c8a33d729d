use crate::{crypto::HashAlgorithm, trace::*};

/// Returns an `ext` value as described in
/// https://datatracker.ietf.org/doc/html/draft-ietf-oauth-v2-http-mac-02#section-3.1
///
/// The value is the lowercase hex digest of the content type bytes immediately followed by the body bytes.
/// If either of them is absent or empty, the value is the empty string.
pub fn generate_ext<C, B>(content_type: Option<C>, body: Option<B>, alg: &HashAlgorithm) -> String
where
  C: AsRef<[u8]>,
  B: AsRef<[u8]>,
{
  let (content_type, body) = match (content_type, body) {
    (Some(c), Some(b)) if !c.as_ref().is_empty() && !b.as_ref().is_empty() => (c, b),
    _ => return String::new(),
  };
  let content_type = content_type.as_ref();
  let body = body.as_ref();
  debug!(
    "Hashing content type and body ({} bytes) with {} for ext",
    body.len(),
    alg
  );

  let mut content_type_plus_body = Vec::with_capacity(content_type.len() + body.len());
  content_type_plus_body.extend_from_slice(content_type);
  content_type_plus_body.extend_from_slice(body);
  hex::encode(alg.digest(&content_type_plus_body))
}
