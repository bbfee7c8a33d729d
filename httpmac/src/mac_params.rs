use crate::{error::HttpMacResult, nonce::generate_nonce};
use std::time::{SystemTime, UNIX_EPOCH};

/* ---------------------------------------- */
#[derive(Debug, Clone, PartialEq, Eq)]
/// Freshness values bound into a single mac: timestamp and nonce
pub struct MacParams {
  /// integer part of the unix timestamp in seconds
  pub ts: u64,
  /// single-use nonce
  pub nonce: String,
}

impl MacParams {
  /// Create new MacParams with the current timestamp and a fresh random nonce
  pub fn try_new() -> HttpMacResult<Self> {
    let nonce = generate_nonce()?;
    Ok(Self { ts: now_secs(), nonce })
  }

  /// Set artificial `ts` timestamp
  pub fn set_ts(&mut self, ts: u64) -> &mut Self {
    self.ts = ts;
    self
  }

  /// Set `nonce`
  pub fn set_nonce(&mut self, nonce: &str) -> &mut Self {
    self.nonce = nonce.to_string();
    self
  }
}

/// Current unix time in seconds, 0 if the clock is before the epoch
fn now_secs() -> u64 {
  SystemTime::now()
    .duration_since(UNIX_EPOCH)
    .map(|d| d.as_secs())
    .unwrap_or_default()
}
