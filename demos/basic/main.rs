//! Usage: `cargo run --example basic -- [category] [prompt]`
//!
//! Reads `DEEPSEEK_API_KEY` from the environment (or `.env`).

use anyhow::{Error, Result};
use deepseek_chat::prelude::*;
use log::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
  env_logger::init();

  let keys = Keys::from_env()
    .ok_or_else(|| Error::msg("DEEPSEEK_API_KEY is not set"))?;

  let mut args = std::env::args().skip(1);
  let category = args
    .next()
    .map(|label| label.parse::<Category>())
    .transpose()?;
  let prompt = args
    .next()
    .unwrap_or_else(|| "Say hello in one sentence.".to_string());

  let inputs = ParameterInputs::new(keys.api_key.clone(), category);
  let params = parameters(&inputs);
  info!("\n{}", params);
  if !api_key_checker(&params.api_key) {
    warn!("the API key does not look like a DeepSeek key");
  }

  let request = ChatSisoRequest::from_params(&params, prompt);
  let mut timer = Timer::new(3, Some("Calling the model"));
  let response = timer.time_async(request.send(&keys)).await?;
  info!("{}", timer);

  println!("{}", response);
  Ok(())
}
