//! # httpmac-hyper
//!
//! `httpmac-hyper` is a crate that provides a convenient API for `Hyper` users to sign outgoing requests
//! with the HTTP MAC access authentication scheme.
//! This crate extends hyper's http request with the ability to set the MAC `Authorization` header,
//! using any [`RequestSigner`](httpmac::prelude::RequestSigner) from the `httpmac` crate.
//!
//! ## Content type policy
//!
//! Requests with POST, PUT or PATCH methods are always signed and sent with `Content-Type: application/json`,
//! overriding whatever content type the caller set. Other methods keep their own `Content-Type` header.
//! The policy lives here only; the `httpmac` core signs whatever content type it is given.
//!
//! ## Blocking API
//!
//! When the `blocking` feature is enabled (on by default), a synchronous wrapper is provided via
//! [`MacAuthorizationReqSync`]. It uses `futures::executor::block_on` internally and is intended
//! **exclusively for non-async contexts**.

mod error;
mod hyper_http;

pub use error::{HyperMacError, HyperMacResult};
pub use httpmac::prelude;
#[cfg(feature = "blocking")]
pub use hyper_http::MacAuthorizationReqSync;
pub use hyper_http::{effective_content_type, MacAuthorizationReq, JSON_CONTENT_TYPE};

/* ----------------------------------------------------------------- */
