//! Collects chat hyperparameters from sidebar control values and sends a
//! single system + user exchange to the DeepSeek chat-completion API.

pub mod chat;
pub mod keys;
pub mod params;
pub mod prelude;
pub mod timer;
pub mod utils;

use anyhow::Result;
use async_trait::async_trait;

use crate::keys::Keys;

pub trait ResponseType: 'static + Send {}

#[async_trait]
pub trait RequestHandler {
  type Res: ResponseType;

  async fn send(&self, keys: &Keys) -> Result<Self::Res>;

  /// Sends the request on a fresh current-thread runtime, blocking the caller
  /// until the response arrives. Must not be called from within a tokio
  /// runtime.
  fn send_blocking(&self, keys: &Keys) -> Result<Self::Res>
  where
    Self: Sync,
  {
    let runtime = tokio::runtime::Builder::new_current_thread()
      .enable_all()
      .build()?;
    runtime.block_on(self.send(keys))
  }
}
