//! API credentials, the endpoint they are sent to, and the key format check.

use core::fmt::{Debug, Formatter};

/// Base address of the DeepSeek chat-completion API.
pub const DEEPSEEK_API_BASE: &str = "https://api.deepseek.com";

/// Required prefix of a DeepSeek API key.
pub const API_KEY_PREFIX: &str = "sk-";

/// Exact length of a well-formed DeepSeek API key, prefix included.
pub const API_KEY_LEN: usize = 35;

#[derive(Clone, PartialEq)]
pub struct Keys {
  pub api_key:  String,
  pub api_base: String,
}

impl Keys {
  pub fn new(api_key: String) -> Self {
    Self {
      api_key,
      api_base: DEEPSEEK_API_BASE.to_string(),
    }
  }

  /// Points requests at a different base address, e.g. a proxy or a stub
  /// server.
  pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
    self.api_base = api_base.into();
    self
  }

  /// Reads `DEEPSEEK_API_KEY` and the optional `DEEPSEEK_API_BASE` override,
  /// loading a `.env` file first if one exists.
  pub fn from_env() -> Option<Self> {
    dotenv::dotenv().ok();
    let api_key = std::env::var("DEEPSEEK_API_KEY").ok()?;
    let keys = Self::new(api_key);
    match std::env::var("DEEPSEEK_API_BASE") {
      Ok(api_base) if !api_base.is_empty() => {
        Some(keys.with_api_base(api_base))
      }
      _ => Some(keys),
    }
  }
}

impl Debug for Keys {
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Keys")
      .field(
        "api_key",
        &format_args!("<{} chars>", self.api_key.chars().count()),
      )
      .field("api_base", &self.api_base)
      .finish()
  }
}

/// Checks the format of a DeepSeek API key: it must start with `sk-` and be
/// exactly 35 characters long. Says nothing about whether the key is accepted
/// by the server.
pub fn api_key_checker(api_key: &str) -> bool {
  api_key.starts_with(API_KEY_PREFIX) && api_key.chars().count() == API_KEY_LEN
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn accepts_well_formed_key() {
    let key = format!("sk-{}", "a".repeat(32));
    assert_eq!(key.len(), 35);
    assert!(api_key_checker(&key));
  }

  #[test]
  fn rejects_short_key() {
    assert!(!api_key_checker("sk-abc"));
    assert!(!api_key_checker(""));
  }

  #[test]
  fn rejects_wrong_prefix() {
    assert!(!api_key_checker(&format!("xx-{}", "a".repeat(32))));
  }

  #[test]
  fn rejects_long_key() {
    assert!(!api_key_checker(&format!("sk-{}", "a".repeat(33))));
  }

  #[test]
  fn counts_characters_not_bytes() {
    // 32 two-byte characters: 35 chars, 67 bytes
    assert!(api_key_checker(&format!("sk-{}", "é".repeat(32))));
  }

  #[test]
  fn new_keys_use_deepseek_base() {
    let keys = Keys::new("sk-test".to_string());
    assert_eq!(keys.api_base, DEEPSEEK_API_BASE);

    let keys = keys.with_api_base("http://127.0.0.1:1234");
    assert_eq!(keys.api_base, "http://127.0.0.1:1234");
  }

  #[test]
  fn debug_hides_key() {
    let keys = Keys::new("sk-secret".to_string());
    let rendered = format!("{:?}", keys);
    assert!(!rendered.contains("secret"));
    assert!(rendered.contains("<9 chars>"));
  }
}
