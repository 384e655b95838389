// storefront/src/pipeline/definition.rs

//! The `Pipeline<T, Err>` struct and the methods that shape its step list.

use super::control::PipelineControl;
use super::step::{SkipCondition, StepDef};
use crate::error::StorefrontError;
use std::collections::HashMap;

/// A hook attached to a step. Runs against the shared context and decides
/// whether the pipeline keeps going.
pub type Handler<T, Err> = Box<dyn Fn(&mut T) -> Result<PipelineControl, Err>>;

/// An ordered list of named steps, each with `before` / `on` / `after` hooks.
///
/// `Err` is the error type hooks return. It must absorb [`StorefrontError`] so
/// that wiring faults found during a run (a required step with no hooks) come
/// out through the same channel.
pub struct Pipeline<T, Err>
where
  T: 'static,
  Err: std::error::Error + From<StorefrontError> + 'static,
{
  pub(crate) steps: Vec<StepDef<T>>,
  pub(crate) before: HashMap<String, Vec<Handler<T, Err>>>,
  pub(crate) on: HashMap<String, Vec<Handler<T, Err>>>,
  pub(crate) after: HashMap<String, Vec<Handler<T, Err>>>,
}

impl<T, Err> Pipeline<T, Err>
where
  T: 'static,
  Err: std::error::Error + From<StorefrontError> + 'static,
{
  /// Creates a pipeline from `(name, optional, skip_if)` triples.
  pub fn new(step_defs: &[(&str, bool, Option<SkipCondition<T>>)]) -> Self {
    let steps = step_defs
      .iter()
      .map(|(name, optional, skip_if)| StepDef {
        name: (*name).to_string(),
        optional: *optional,
        skip_if: skip_if.clone(),
      })
      .collect();

    Self {
      steps,
      before: HashMap::new(),
      on: HashMap::new(),
      after: HashMap::new(),
    }
  }

  pub fn step_names(&self) -> Vec<&str> {
    self.steps.iter().map(|s| s.name.as_str()).collect()
  }

  pub fn has_step(&self, step_name: &str) -> bool {
    self.steps.iter().any(|s| s.name == step_name)
  }

  fn position(&self, step_name: &str) -> Result<usize, StorefrontError> {
    self
      .steps
      .iter()
      .position(|s| s.name == step_name)
      .ok_or_else(|| StorefrontError::StepNotFound {
        step_name: step_name.to_string(),
      })
  }

  pub(crate) fn ensure_step_exists(&self, step_name: &str) -> Result<(), StorefrontError> {
    self.position(step_name).map(|_| ())
  }

  fn ensure_step_not_exists(&self, step_name: &str) -> Result<(), StorefrontError> {
    if self.has_step(step_name) {
      return Err(StorefrontError::DuplicateStep {
        step_name: step_name.to_string(),
      });
    }
    Ok(())
  }

  pub fn insert_before_step<S: Into<String>>(
    &mut self,
    existing_step_name: &str,
    new_step_name: S,
    optional: bool,
    skip_if: Option<SkipCondition<T>>,
  ) -> Result<(), StorefrontError> {
    let idx = self.position(existing_step_name)?;
    let name: String = new_step_name.into();
    self.ensure_step_not_exists(&name)?;
    self.steps.insert(idx, StepDef { name, optional, skip_if });
    Ok(())
  }

  pub fn insert_after_step<S: Into<String>>(
    &mut self,
    existing_step_name: &str,
    new_step_name: S,
    optional: bool,
    skip_if: Option<SkipCondition<T>>,
  ) -> Result<(), StorefrontError> {
    let idx = self.position(existing_step_name)?;
    let name: String = new_step_name.into();
    self.ensure_step_not_exists(&name)?;
    self.steps.insert(idx + 1, StepDef { name, optional, skip_if });
    Ok(())
  }

  /// Removes a step and all of its hooks. Removing an unknown step is a no-op.
  pub fn remove_step(&mut self, step_name: &str) {
    if let Some(idx) = self.steps.iter().position(|s| s.name == step_name) {
      self.steps.remove(idx);
      self.before.remove(step_name);
      self.on.remove(step_name);
      self.after.remove(step_name);
    }
  }

  pub fn set_optional(&mut self, step_name: &str, optional: bool) -> Result<(), StorefrontError> {
    let idx = self.position(step_name)?;
    self.steps[idx].optional = optional;
    Ok(())
  }

  pub fn set_skip_condition(
    &mut self,
    step_name: &str,
    skip_if: Option<SkipCondition<T>>,
  ) -> Result<(), StorefrontError> {
    let idx = self.position(step_name)?;
    self.steps[idx].skip_if = skip_if;
    Ok(())
  }
}

impl<T, Err> std::fmt::Debug for Pipeline<T, Err>
where
  T: 'static,
  Err: std::error::Error + From<StorefrontError> + 'static,
{
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Pipeline").field("steps", &self.steps).finish_non_exhaustive()
  }
}
