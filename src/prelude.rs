//! Provides a useful collection of `deepseek-chat` types

pub use crate::{
  chat::{
    model_caller, model_caller_blocking,
    siso::{ChatSisoRequest, ChatSisoResponse},
    ChatModelParams,
  },
  keys::{api_key_checker, Keys},
  params::{parameters, Category, HyperparameterSet, ParameterInputs},
  timer::Timer,
  RequestHandler,
};
