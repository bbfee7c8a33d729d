//! # httpmac
//!
//! Client side of the HTTP MAC access authentication scheme
//! ([draft-ietf-oauth-v2-http-mac-02](https://datatracker.ietf.org/doc/html/draft-ietf-oauth-v2-http-mac-02)).
//! A request is summarized into a normalized request string, which is signed with HMAC under a shared key,
//! and the result is emitted as an `Authorization: MAC ...` header value.

mod crypto;
mod error;
mod ext;
mod header;
mod mac_params;
mod nonce;
mod normalized_string;
mod request;
mod signer;
mod trace;

pub use signer::generate_authorization_header_value;

pub mod prelude {
  pub use crate::{
    crypto::{HashAlgorithm, SharedKey, SigningKey, VerifyingKey},
    error::{HttpMacError, HttpMacResult},
    ext::generate_ext,
    header::AuthHeaderValue,
    mac_params::MacParams,
    nonce::generate_nonce,
    normalized_string::NormalizedRequestString,
    request::RequestDescriptor,
    signer::{generate_authorization_header_value, generate_signature, Credential, MacSigner, RequestSigner},
  };
}

/* ----------------------------------------------------------------- */
