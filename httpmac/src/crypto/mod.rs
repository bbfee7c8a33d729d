mod symmetric;

use crate::error::{HttpMacError, HttpMacResult};
use sha2::Digest;

pub use symmetric::SharedKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Hash algorithms usable for both the `ext` digest and the keyed mac
pub enum HashAlgorithm {
  HmacSha1,
  #[default]
  HmacSha256,
  HmacSha384,
  HmacSha512,
}

impl HashAlgorithm {
  pub fn as_str(&self) -> &'static str {
    match self {
      HashAlgorithm::HmacSha1 => "hmac-sha1",
      HashAlgorithm::HmacSha256 => "hmac-sha256",
      HashAlgorithm::HmacSha384 => "hmac-sha384",
      HashAlgorithm::HmacSha512 => "hmac-sha512",
    }
  }

  /// Length of the raw digest in bytes
  pub fn output_len(&self) -> usize {
    match self {
      HashAlgorithm::HmacSha1 => 20,
      HashAlgorithm::HmacSha256 => 32,
      HashAlgorithm::HmacSha384 => 48,
      HashAlgorithm::HmacSha512 => 64,
    }
  }

  /// Plain (unkeyed) digest of the data
  pub fn digest(&self, data: &[u8]) -> Vec<u8> {
    match self {
      HashAlgorithm::HmacSha1 => sha1::Sha1::digest(data).to_vec(),
      HashAlgorithm::HmacSha256 => sha2::Sha256::digest(data).to_vec(),
      HashAlgorithm::HmacSha384 => sha2::Sha384::digest(data).to_vec(),
      HashAlgorithm::HmacSha512 => sha2::Sha512::digest(data).to_vec(),
    }
  }
}

impl std::fmt::Display for HashAlgorithm {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl core::str::FromStr for HashAlgorithm {
  type Err = HttpMacError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "hmac-sha1" => Ok(Self::HmacSha1),
      "hmac-sha256" => Ok(Self::HmacSha256),
      "hmac-sha384" => Ok(Self::HmacSha384),
      "hmac-sha512" => Ok(Self::HmacSha512),
      _ => Err(HttpMacError::InvalidAlgorithmName(s.to_string())),
    }
  }
}

/// SigningKey trait
pub trait SigningKey {
  fn sign(&self, data: &[u8]) -> HttpMacResult<Vec<u8>>;
  fn alg(&self) -> HashAlgorithm;
}

/// VerifyingKey trait
pub trait VerifyingKey {
  fn verify(&self, data: &[u8], expected_mac: &[u8]) -> HttpMacResult<()>;
  fn alg(&self) -> HashAlgorithm;
}
