// storefront/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

use crate::catalog::ProductId;

/// Setup-level failures of the storefront core.
///
/// Invalid cart requests (a quantity below one, an unknown product id) are not
/// errors: they surface as [`crate::CommandOutcome`] values and leave the cart
/// untouched. What remains here are wiring mistakes and failures raised inside
/// user-provided pipeline hooks.
#[derive(Debug, Error)]
pub enum StorefrontError {
  #[error("Step not found: {step_name}")]
  StepNotFound { step_name: String },

  #[error("Step already defined: {step_name}")]
  DuplicateStep { step_name: String },

  #[error("Handler missing for non-optional step: {step_name}")]
  HandlerMissing { step_name: String },

  #[error("Error in a pipeline hook. Source: {source}")]
  HandlerError {
    #[source]
    source: AnyhowError,
  },

  #[error("Catalog defines product {id} more than once")]
  DuplicateProduct { id: ProductId },

  #[error("Internal storefront error: {0}")]
  Internal(String),
}

impl From<AnyhowError> for StorefrontError {
  fn from(err: AnyhowError) -> Self {
    // Hooks that bubble a StorefrontError through anyhow keep it as the source.
    StorefrontError::HandlerError { source: err }
  }
}

pub type StorefrontResult<T, E = StorefrontError> = std::result::Result<T, E>;
