use std::time::Duration;

use async_openai::{config::OpenAIConfig, Client as OpenAIClient};
use backoff::ExponentialBackoffBuilder;

use crate::keys::Keys;

/// Builds a client for `keys`. The client's own retry on rate limits is
/// switched off, so every failure reaches the caller after one request.
pub fn get_openai_client(keys: &Keys) -> OpenAIClient<OpenAIConfig> {
  let config = OpenAIConfig::new()
    .with_api_key(&keys.api_key)
    .with_api_base(&keys.api_base);
  let no_retry = ExponentialBackoffBuilder::new()
    .with_max_elapsed_time(Some(Duration::ZERO))
    .build();
  OpenAIClient::<OpenAIConfig>::with_config(config).with_backoff(no_retry)
}
