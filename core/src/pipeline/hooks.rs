// storefront/src/pipeline/hooks.rs

//! Registration of `before`, `on` and `after` hooks.

use super::control::PipelineControl;
use super::definition::{Handler, Pipeline};
use crate::error::StorefrontError;
use std::collections::HashMap;
use tracing::{event, Level};

impl<T, Err> Pipeline<T, Err>
where
  T: 'static,
  Err: std::error::Error + From<StorefrontError> + 'static,
{
  /// Registers a hook that runs before the step's `on` hooks.
  ///
  /// The hook may return its own error type as long as it converts into the
  /// pipeline's `Err`.
  pub fn before_root<UserErr>(
    &mut self,
    step_name: &str,
    handler_fn: impl Fn(&mut T) -> Result<PipelineControl, UserErr> + 'static,
  ) -> Result<(), StorefrontError>
  where
    UserErr: Into<Err> + 'static,
  {
    self.ensure_step_exists(step_name)?;
    push_handler(&mut self.before, step_name, wrap(handler_fn));
    event!(Level::TRACE, %step_name, "before hook registered.");
    Ok(())
  }

  /// Registers a main hook for the step.
  pub fn on_root<UserErr>(
    &mut self,
    step_name: &str,
    handler_fn: impl Fn(&mut T) -> Result<PipelineControl, UserErr> + 'static,
  ) -> Result<(), StorefrontError>
  where
    UserErr: Into<Err> + 'static,
  {
    self.ensure_step_exists(step_name)?;
    push_handler(&mut self.on, step_name, wrap(handler_fn));
    event!(Level::TRACE, %step_name, "on hook registered.");
    Ok(())
  }

  /// Registers a hook that runs after the step's `on` hooks.
  pub fn after_root<UserErr>(
    &mut self,
    step_name: &str,
    handler_fn: impl Fn(&mut T) -> Result<PipelineControl, UserErr> + 'static,
  ) -> Result<(), StorefrontError>
  where
    UserErr: Into<Err> + 'static,
  {
    self.ensure_step_exists(step_name)?;
    push_handler(&mut self.after, step_name, wrap(handler_fn));
    event!(Level::TRACE, %step_name, "after hook registered.");
    Ok(())
  }

  /// Number of hooks of every phase attached to `step_name`.
  pub fn handler_count(&self, step_name: &str) -> usize {
    [&self.before, &self.on, &self.after]
      .iter()
      .map(|phase| phase.get(step_name).map_or(0, Vec::len))
      .sum()
  }
}

fn wrap<T, Err, UserErr>(
  handler_fn: impl Fn(&mut T) -> Result<PipelineControl, UserErr> + 'static,
) -> Handler<T, Err>
where
  T: 'static,
  Err: 'static,
  UserErr: Into<Err> + 'static,
{
  Box::new(move |ctx: &mut T| handler_fn(ctx).map_err(Into::into))
}

fn push_handler<T, Err>(phase: &mut HashMap<String, Vec<Handler<T, Err>>>, step_name: &str, handler: Handler<T, Err>) {
  phase.entry(step_name.to_string()).or_default().push(handler);
}
