/* src/server/core/src/errors.rs */

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  /// No route matched. Not a failure at the HTTP surface: the driver turns
  /// it into the literal `Not found` body.
  NotFound,
  /// A render or write failed after a route was already selected.
  Render,
  /// Everything else: resource exhaustion, adapter-level failures.
  Internal,
}

/// Core error currency. Matching and tokenizing never produce one; they
/// signal absence with `None`; only render/IO paths construct errors.
#[derive(Debug, Clone)]
pub struct TrellisError {
  kind: ErrorKind,
  message: String,
}

impl TrellisError {
  pub fn not_found(message: impl Into<String>) -> Self {
    Self { kind: ErrorKind::NotFound, message: message.into() }
  }

  pub fn render(message: impl Into<String>) -> Self {
    Self { kind: ErrorKind::Render, message: message.into() }
  }

  pub fn internal(message: impl Into<String>) -> Self {
    Self { kind: ErrorKind::Internal, message: message.into() }
  }

  pub fn kind(&self) -> ErrorKind {
    self.kind
  }

  pub fn message(&self) -> &str {
    &self.message
  }
}

impl fmt::Display for TrellisError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let prefix = match self.kind {
      ErrorKind::NotFound => "not found",
      ErrorKind::Render => "render error",
      ErrorKind::Internal => "internal error",
    };
    write!(f, "{prefix}: {}", self.message)
  }
}

impl Error for TrellisError {}
