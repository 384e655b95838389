// demos/storefront_app/src/errors.rs

use storefront::StorefrontError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Unrecognised input: {0}")]
  Parse(String),

  #[error("Storefront Error: {source}")]
  Storefront {
    #[from]
    source: StorefrontError,
  },

  #[error("Terminal I/O Error: {0}")]
  Io(#[from] std::io::Error),

  #[error("JSON Error: {0}")]
  Json(#[from] serde_json::Error),
}

impl AppError {
  /// Errors the user can fix by typing something else. The input loop reports
  /// these and keeps going.
  pub fn is_recoverable(&self) -> bool {
    matches!(self, AppError::Parse(_))
  }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
