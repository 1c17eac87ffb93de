//! Requests and responses using Chat models.

pub mod siso;

use anyhow::Result;

use crate::{
  chat::siso::ChatSisoRequest, keys::Keys, params::HyperparameterSet,
  RequestHandler,
};

/// Sampling parameters sent with every chat request.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatModelParams {
  pub model:       String,
  pub temperature: f32,
  pub top_p:       f32,
}

impl From<&HyperparameterSet> for ChatModelParams {
  fn from(params: &HyperparameterSet) -> Self {
    Self {
      model:       params.model.clone(),
      temperature: params.temperature,
      top_p:       params.top_p,
    }
  }
}

/// Sends `content` as the system instruction and `prompt` as the user message
/// to the DeepSeek API, returning the reply text.
pub async fn model_caller(
  model: &str,
  api_key: &str,
  temperature: f32,
  top_p: f32,
  content: &str,
  prompt: &str,
) -> Result<String> {
  let keys = Keys::new(api_key.to_string());
  call(&keys, model, temperature, top_p, content, prompt).await
}

/// Blocking variant of [`model_caller`].
pub fn model_caller_blocking(
  model: &str,
  api_key: &str,
  temperature: f32,
  top_p: f32,
  content: &str,
  prompt: &str,
) -> Result<String> {
  let keys = Keys::new(api_key.to_string());
  call_blocking(&keys, model, temperature, top_p, content, prompt)
}

async fn call(
  keys: &Keys,
  model: &str,
  temperature: f32,
  top_p: f32,
  content: &str,
  prompt: &str,
) -> Result<String> {
  let request = caller_request(model, temperature, top_p, content, prompt);
  Ok(request.send(keys).await?.into_inner())
}

fn call_blocking(
  keys: &Keys,
  model: &str,
  temperature: f32,
  top_p: f32,
  content: &str,
  prompt: &str,
) -> Result<String> {
  let request = caller_request(model, temperature, top_p, content, prompt);
  Ok(request.send_blocking(keys)?.into_inner())
}

fn caller_request(
  model: &str,
  temperature: f32,
  top_p: f32,
  content: &str,
  prompt: &str,
) -> ChatSisoRequest {
  ChatSisoRequest::new(
    content.to_string(),
    prompt.to_string(),
    ChatModelParams {
      model: model.to_string(),
      temperature,
      top_p,
    },
  )
}

#[cfg(test)]
mod tests {
  use mockito::{Matcher, Mock, Server, ServerGuard};
  use serde_json::json;

  use super::*;

  const KEY: &str = "sk-abcdefghijklmnopqrstuvwxyz012345";

  fn reply(content: &str) -> String {
    json!({
      "id": "chatcmpl-3",
      "object": "chat.completion",
      "created": 1_700_000_000,
      "model": "deepseek-chat",
      "choices": [{
        "index": 0,
        "message": { "role": "assistant", "content": content },
        "finish_reason": "stop"
      }]
    })
    .to_string()
  }

  fn expect_call(server: &mut ServerGuard, content: &str) -> Mock {
    server
      .mock("POST", "/chat/completions")
      .match_header("authorization", format!("Bearer {}", KEY).as_str())
      .match_body(Matcher::AllOf(vec![
        Matcher::PartialJson(json!({
          "model": "deepseek-chat",
          "stream": false,
          "temperature": 1.5,
          "top_p": 0.75,
          "messages": [
            { "role": "system", "content": "Translate to French" },
            { "role": "user", "content": "Good morning" }
          ]
        })),
        Matcher::Regex(
          concat!(
            r#""role":"system","content":"Translate to French".*"#,
            r#""role":"user","content":"Good morning""#,
          )
          .to_string(),
        ),
      ]))
      .with_status(200)
      .with_header("content-type", "application/json")
      .with_body(reply(content))
      .expect(1)
  }

  #[test]
  fn caller_request_maps_arguments() {
    let request = caller_request(
      "deepseek-chat",
      1.5,
      0.75,
      "Translate to French",
      "Good morning",
    );
    assert_eq!(request.system_prompt, "Translate to French");
    assert_eq!(request.user_prompt, "Good morning");
    assert_eq!(request.model_params.model, "deepseek-chat");
    assert_eq!(request.model_params.temperature, 1.5);
    assert_eq!(request.model_params.top_p, 0.75);
  }

  #[tokio::test]
  async fn call_sends_system_then_user() {
    let mut server = Server::new_async().await;
    let mock = expect_call(&mut server, "Bonjour").create_async().await;

    let keys = Keys::new(KEY.to_string()).with_api_base(server.url());
    let text = call(
      &keys,
      "deepseek-chat",
      1.5,
      0.75,
      "Translate to French",
      "Good morning",
    )
    .await
    .unwrap();

    assert_eq!(text, "Bonjour");
    mock.assert_async().await;
  }

  #[test]
  fn blocking_call_sends_system_then_user() {
    let mut server = Server::new();
    let mock = expect_call(&mut server, "Bonjour !").create();

    let keys = Keys::new(KEY.to_string()).with_api_base(server.url());
    let text = call_blocking(
      &keys,
      "deepseek-chat",
      1.5,
      0.75,
      "Translate to French",
      "Good morning",
    )
    .unwrap();

    assert_eq!(text, "Bonjour !");
    mock.assert();
  }
}
