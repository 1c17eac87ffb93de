//! Scoped wall-clock timing.

use core::{
  fmt::{Display, Formatter},
  future::Future,
  time::Duration,
};
use std::time::Instant;

use log::debug;

/// Measures how long an enclosed operation takes.
///
/// Only the latest measurement is kept; timing a second operation with the
/// same `Timer` replaces the first.
#[derive(Clone, Debug)]
pub struct Timer {
  precision:   usize,
  description: Option<String>,
  start:       Option<Instant>,
  end:         Option<Instant>,
}

impl Timer {
  /// `precision` is the number of decimal places used when rendering the
  /// elapsed seconds.
  pub fn new(precision: usize, description: Option<&str>) -> Self {
    Self {
      precision,
      description: description.map(str::to_string),
      start: None,
      end: None,
    }
  }

  /// Starts timing. The measurement ends when the returned guard is dropped.
  pub fn start(&mut self) -> TimerGuard<'_> {
    self.start = Some(Instant::now());
    self.end = None;
    TimerGuard { timer: self }
  }

  pub fn time<T>(&mut self, f: impl FnOnce() -> T) -> T {
    let _guard = self.start();
    f()
  }

  /// Like [`Timer::time`] for a future. Dropping the returned future early
  /// still records the time spent so far.
  pub async fn time_async<F: Future>(&mut self, fut: F) -> F::Output {
    let _guard = self.start();
    fut.await
  }

  pub fn elapsed(&self) -> Option<Duration> {
    match (self.start, self.end) {
      (Some(start), Some(end)) => Some(end.duration_since(start)),
      _ => None,
    }
  }

  pub fn description(&self) -> Option<&str> {
    self.description.as_deref()
  }
}

impl Default for Timer {
  fn default() -> Self {
    Self {
      precision:   5,
      description: None,
      start:       None,
      end:         None,
    }
  }
}

impl Display for Timer {
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    if let Some(description) = &self.description {
      write!(f, "{} ", description)?;
    }
    match self.elapsed() {
      Some(elapsed) => write!(
        f,
        "took {:.*} seconds.",
        self.precision,
        elapsed.as_secs_f64()
      ),
      None => write!(f, "has not finished."),
    }
  }
}

/// Records the end of a measurement when dropped.
pub struct TimerGuard<'a> {
  timer: &'a mut Timer,
}

impl Drop for TimerGuard<'_> {
  fn drop(&mut self) {
    self.timer.end = Some(Instant::now());
    debug!("{}", self.timer);
  }
}
