use crate::error::{HttpMacError, HttpMacResult};
use base64::{engine::general_purpose, Engine as _};
use rand::{rngs::OsRng, TryRngCore};

/// Number of random bytes in a nonce
const NONCE_LEN: usize = 8;

/// Returns a random string intended for use as a nonce when computing a mac.
/// 8 bytes are drawn from the operating system's secure random source and encoded in padded standard base64.
/// There is no fallback to a non-secure generator.
pub fn generate_nonce() -> HttpMacResult<String> {
  let mut bytes = [0u8; NONCE_LEN];
  OsRng
    .try_fill_bytes(&mut bytes)
    .map_err(|e| HttpMacError::RandomSourceUnavailable(e.to_string()))?;
  Ok(general_purpose::STANDARD.encode(bytes))
}
