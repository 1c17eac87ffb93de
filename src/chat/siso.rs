use core::fmt::{Display, Formatter};

use anyhow::{Error, Result};
use async_openai::types::{
  ChatCompletionRequestMessage, CreateChatCompletionRequest, Role,
};
use async_trait::async_trait;
use log::{debug, info};

use crate::{
  chat::ChatModelParams, keys::Keys, params::HyperparameterSet,
  utils::get_openai_client, RequestHandler, ResponseType,
};

/// One system instruction and one user prompt, answered by one reply.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatSisoRequest {
  pub system_prompt: String,
  pub user_prompt:   String,
  pub model_params:  ChatModelParams,
}

impl ChatSisoRequest {
  pub fn new(
    system_prompt: String,
    user_prompt: String,
    model_params: ChatModelParams,
  ) -> Self {
    Self {
      system_prompt,
      user_prompt,
      model_params,
    }
  }

  pub fn from_params(params: &HyperparameterSet, prompt: String) -> Self {
    Self::new(params.system_content.clone(), prompt, params.into())
  }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatSisoResponse(String);

impl ChatSisoResponse {
  pub fn text(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

impl Display for ChatSisoResponse {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl ResponseType for ChatSisoResponse {}

#[async_trait]
impl RequestHandler for ChatSisoRequest {
  type Res = ChatSisoResponse;

  async fn send(&self, keys: &Keys) -> Result<Self::Res> {
    debug!(
      "starting request to {} with model {}",
      keys.api_base, self.model_params.model
    );
    let client = get_openai_client(keys);
    let request = build_inner_request(self.clone());

    // start a timer for debugging
    let timer = timing::start();
    let response = client.chat().create(request).await.map_err(Error::new)?;
    debug!("got response in {}s", timer.elapsed().as_secs_f32());

    let completion = response
      .choices
      .into_iter()
      .next()
      .ok_or_else(|| Error::msg("response.choices is empty"))?
      .message
      .content
      .ok_or_else(|| {
        Error::msg("response.choices[0].message.content is None")
      })?;
    info!("{}", completion);
    Ok(ChatSisoResponse(completion))
  }
}

fn build_inner_request(params: ChatSisoRequest) -> CreateChatCompletionRequest {
  CreateChatCompletionRequest {
    model: params.model_params.model,
    messages: vec![
      ChatCompletionRequestMessage {
        role:          Role::System,
        content:       Some(params.system_prompt),
        name:          None,
        function_call: None,
      },
      ChatCompletionRequestMessage {
        role:          Role::User,
        content:       Some(params.user_prompt),
        name:          None,
        function_call: None,
      },
    ],
    temperature: Some(params.model_params.temperature),
    top_p: Some(params.model_params.top_p),
    stream: Some(false),
    ..Default::default()
  }
}
