//! Collects model hyperparameters from the values of the sidebar controls.

use core::{
  fmt::{Debug, Display, Formatter},
  str::FromStr,
};

use anyhow::{Error, Result};
use log::debug;

use crate::keys::API_KEY_LEN;

/// Models offered by the model selector. Only the first one is selectable.
pub const MODEL_OPTIONS: &[&str] = &["deepseek-chat"];

/// The key input accepts at most this many characters.
pub const API_KEY_MAX_CHARS: usize = API_KEY_LEN;

pub const TEMPERATURE_RANGE: (f32, f32) = (0.0, 2.0);
pub const TOP_P_RANGE: (f32, f32) = (0.0, 1.0);

/// Top-p slider position once a category has been chosen.
pub const DEFAULT_TOP_P: f32 = 0.9;

/// The kind of response the system-role instruction asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
  General,
  MathCode,
  Translation,
}

impl Category {
  pub const ALL: [Category; 3] =
    [Category::General, Category::MathCode, Category::Translation];

  pub fn label(&self) -> &'static str {
    match self {
      Category::General => "General",
      Category::MathCode => "Math/Code",
      Category::Translation => "Translation",
    }
  }

  /// The instruction sent as the system-role message.
  pub fn system_content(&self) -> &'static str {
    match self {
      Category::General => "The system will generate a general response.",
      Category::MathCode => {
        "The system will generate a response related to math or code."
      }
      Category::Translation => {
        "The system will generate a translation response."
      }
    }
  }

  pub fn default_temperature(&self) -> f32 {
    match self {
      Category::General => 1.3,
      Category::MathCode => 0.0,
      Category::Translation => 1.5,
    }
  }
}

impl Display for Category {
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    write!(f, "{}", self.label())
  }
}

impl FromStr for Category {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    Category::ALL
      .into_iter()
      .find(|category| category.label().eq_ignore_ascii_case(s.trim()))
      .ok_or_else(|| Error::msg(format!("unknown category: {:?}", s)))
  }
}

/// Raw values of the sidebar controls.
///
/// `None` on a slider means the user left it at its default position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParameterInputs {
  pub model:       Option<String>,
  pub api_key:     String,
  pub category:    Option<Category>,
  pub temperature: Option<f32>,
  pub top_p:       Option<f32>,
}

impl ParameterInputs {
  pub fn new(api_key: impl Into<String>, category: Option<Category>) -> Self {
    Self {
      api_key: api_key.into(),
      category,
      ..Default::default()
    }
  }

  pub fn with_temperature(mut self, temperature: f32) -> Self {
    self.temperature = Some(temperature);
    self
  }

  pub fn with_top_p(mut self, top_p: f32) -> Self {
    self.top_p = Some(top_p);
    self
  }
}

/// Everything the dispatcher needs besides the prompt.
#[derive(Clone, PartialEq)]
pub struct HyperparameterSet {
  pub model:          String,
  pub api_key:        String,
  pub system_content: String,
  pub temperature:    f32,
  pub top_p:          f32,
}

impl Debug for HyperparameterSet {
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("HyperparameterSet")
      .field("model", &self.model)
      .field(
        "api_key",
        &format_args!("<{} chars>", self.api_key.chars().count()),
      )
      .field("system_content", &self.system_content)
      .field("temperature", &self.temperature)
      .field("top_p", &self.top_p)
      .finish()
  }
}

impl Display for HyperparameterSet {
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    writeln!(f, "The model you selected is: {}", self.model)?;
    write!(
      f,
      "The length of the API key entered is: {}",
      self.api_key.chars().count()
    )?;
    if !self.api_key.is_empty() {
      write!(f, "\nThe temperature you selected is: {}", self.temperature)?;
      write!(f, "\nThe top P you selected is: {}", self.top_p)?;
    }
    Ok(())
  }
}

/// Derives the hyperparameters from the control values.
///
/// Without a key the category and slider controls are hidden, so the set comes
/// back with an empty system instruction and zeroed sliders. The key itself is
/// only truncated to the input's maximum length; checking its format is left
/// to [`crate::keys::api_key_checker`].
pub fn parameters(inputs: &ParameterInputs) -> HyperparameterSet {
  let model = match &inputs.model {
    Some(model) if MODEL_OPTIONS.contains(&model.as_str()) => model.clone(),
    _ => MODEL_OPTIONS[0].to_string(),
  };
  let api_key: String =
    inputs.api_key.chars().take(API_KEY_MAX_CHARS).collect();

  let mut system_content = String::new();
  let mut temperature = 0.0;
  let mut top_p = 0.0;

  if !api_key.is_empty() {
    let (default_temperature, default_top_p) = match inputs.category {
      Some(category) => {
        system_content = category.system_content().to_string();
        (category.default_temperature(), DEFAULT_TOP_P)
      }
      None => (0.0, 0.0),
    };
    temperature =
      slider(inputs.temperature, default_temperature, TEMPERATURE_RANGE);
    top_p = slider(inputs.top_p, default_top_p, TOP_P_RANGE);
  }

  let set = HyperparameterSet {
    model,
    api_key,
    system_content,
    temperature,
    top_p,
  };
  debug!("collected hyperparameters: {:?}", set);
  set
}

fn slider(value: Option<f32>, default: f32, (min, max): (f32, f32)) -> f32 {
  match value {
    Some(value) if !value.is_nan() => value.clamp(min, max),
    _ => default,
  }
}
