use super::{HashAlgorithm, SigningKey, VerifyingKey};
use crate::error::{HttpMacError, HttpMacResult};
use base64::{
  alphabet,
  engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
  Engine as _,
};
use hmac::{digest::KeyInit, Hmac, Mac};

type HmacSha1 = Hmac<sha1::Sha1>;
type HmacSha256 = Hmac<sha2::Sha256>;
type HmacSha384 = Hmac<sha2::Sha384>;
type HmacSha512 = Hmac<sha2::Sha512>;

/// Standard alphabet, canonical padding, lenient about the unused bits of the last symbol
const MAC_KEY_ENGINE: GeneralPurpose = GeneralPurpose::new(
  &alphabet::STANDARD,
  GeneralPurposeConfig::new()
    .with_decode_allow_trailing_bits(true)
    .with_decode_padding_mode(DecodePaddingMode::RequireCanonical),
);

/// Decode a MAC key given in the `-`/`_` variant of base64 into raw key bytes.
/// `-` and `_` are mapped back to `+` and `/`, and `=` padding is appended up to a multiple of 4.
pub(crate) fn decode_mac_key(mac_key: &str) -> HttpMacResult<Vec<u8>> {
  let mut substituted = mac_key.replace('-', "+").replace('_', "/");
  let padding = (4 - substituted.len() % 4) % 4;
  substituted.extend(std::iter::repeat('=').take(padding));
  MAC_KEY_ENGINE
    .decode(substituted.as_bytes())
    .map_err(|e| HttpMacError::InvalidKey(e.to_string()))
}

/* -------------------------------- */
/// Shared key for http mac authentication, tagged by the hash algorithm used for HMAC
#[derive(Clone)]
pub enum SharedKey {
  /// hmac-sha1
  HmacSha1(Vec<u8>),
  /// hmac-sha256
  HmacSha256(Vec<u8>),
  /// hmac-sha384
  HmacSha384(Vec<u8>),
  /// hmac-sha512
  HmacSha512(Vec<u8>),
}

impl SharedKey {
  /// Create a new shared key from raw key bytes
  pub fn from_bytes(alg: &HashAlgorithm, key: &[u8]) -> Self {
    let key = key.to_vec();
    match alg {
      HashAlgorithm::HmacSha1 => SharedKey::HmacSha1(key),
      HashAlgorithm::HmacSha256 => SharedKey::HmacSha256(key),
      HashAlgorithm::HmacSha384 => SharedKey::HmacSha384(key),
      HashAlgorithm::HmacSha512 => SharedKey::HmacSha512(key),
    }
  }

  /// Create a new shared key from a MAC key string, encoded in base64 with `-` and `_` as the 62nd and 63rd characters
  pub fn from_mac_key(alg: &HashAlgorithm, mac_key: &str) -> HttpMacResult<Self> {
    let key = decode_mac_key(mac_key)?;
    Ok(Self::from_bytes(alg, &key))
  }
}

impl std::fmt::Debug for SharedKey {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SharedKey")
      .field("alg", &<Self as SigningKey>::alg(self))
      .finish_non_exhaustive()
  }
}

fn mac_sign<M: Mac + KeyInit>(key: &[u8], data: &[u8]) -> HttpMacResult<Vec<u8>> {
  let mut mac = <M as KeyInit>::new_from_slice(key).map_err(|e| HttpMacError::InvalidKey(e.to_string()))?;
  mac.update(data);
  Ok(mac.finalize().into_bytes().to_vec())
}

fn mac_verify<M: Mac + KeyInit>(key: &[u8], data: &[u8], expected_mac: &[u8]) -> HttpMacResult<()> {
  let mut mac = <M as KeyInit>::new_from_slice(key).map_err(|e| HttpMacError::InvalidKey(e.to_string()))?;
  mac.update(data);
  mac
    .verify_slice(expected_mac)
    .map_err(|e| HttpMacError::InvalidSignature(e.to_string()))
}

impl SigningKey for SharedKey {
  /// Sign the data
  fn sign(&self, data: &[u8]) -> HttpMacResult<Vec<u8>> {
    match self {
      SharedKey::HmacSha1(key) => mac_sign::<HmacSha1>(key, data),
      SharedKey::HmacSha256(key) => mac_sign::<HmacSha256>(key, data),
      SharedKey::HmacSha384(key) => mac_sign::<HmacSha384>(key, data),
      SharedKey::HmacSha512(key) => mac_sign::<HmacSha512>(key, data),
    }
  }
  /// Get the algorithm name
  fn alg(&self) -> HashAlgorithm {
    match self {
      SharedKey::HmacSha1(_) => HashAlgorithm::HmacSha1,
      SharedKey::HmacSha256(_) => HashAlgorithm::HmacSha256,
      SharedKey::HmacSha384(_) => HashAlgorithm::HmacSha384,
      SharedKey::HmacSha512(_) => HashAlgorithm::HmacSha512,
    }
  }
}

impl VerifyingKey for SharedKey {
  /// Verify the mac in constant time
  fn verify(&self, data: &[u8], expected_mac: &[u8]) -> HttpMacResult<()> {
    match self {
      SharedKey::HmacSha1(key) => mac_verify::<HmacSha1>(key, data, expected_mac),
      SharedKey::HmacSha256(key) => mac_verify::<HmacSha256>(key, data, expected_mac),
      SharedKey::HmacSha384(key) => mac_verify::<HmacSha384>(key, data, expected_mac),
      SharedKey::HmacSha512(key) => mac_verify::<HmacSha512>(key, data, expected_mac),
    }
  }
  /// Get the algorithm name
  fn alg(&self) -> HashAlgorithm {
    <Self as SigningKey>::alg(self)
  }
}
