// storefront/src/pipeline/step.rs

use std::rc::Rc;

/// Evaluated right before a step; `true` skips the step entirely.
pub type SkipCondition<T> = Rc<dyn Fn(&T) -> bool>;

/// A named stage of a pipeline.
#[derive(Clone)]
pub struct StepDef<T: 'static> {
  pub name: String,
  /// An optional step with no hooks is skipped instead of failing the run.
  pub optional: bool,
  pub skip_if: Option<SkipCondition<T>>,
}

impl<T: 'static> std::fmt::Debug for StepDef<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("StepDef")
      .field("name", &self.name)
      .field("optional", &self.optional)
      .field("skip_if_present", &self.skip_if.is_some())
      .finish()
  }
}
