// storefront/src/pipeline/execution.rs

//! `Pipeline::run()`: walks the steps in order and drives their hooks.

use super::control::{PipelineControl, PipelineResult};
use super::definition::{Handler, Pipeline};
use crate::error::StorefrontError;
use tracing::{event, instrument, span, Level};

enum PhaseOutcome {
  Continue,
  Stopped,
}

impl<T, Err> Pipeline<T, Err>
where
  T: 'static,
  Err: std::error::Error + From<StorefrontError> + 'static,
{
  /// Runs every step against `ctx`.
  ///
  /// Skipped steps (by `skip_if`) and optional steps without hooks are passed
  /// over. A required step without hooks fails with
  /// [`StorefrontError::HandlerMissing`]. The first hook error ends the run.
  #[instrument(
    name = "Pipeline::run",
    skip_all,
    fields(
      context_type = %std::any::type_name::<T>(),
      num_steps = self.steps.len(),
    ),
    err(Display)
  )]
  pub fn run(&self, ctx: &mut T) -> Result<PipelineResult, Err> {
    event!(Level::DEBUG, "Pipeline execution starting.");

    for (step_idx, step_def) in self.steps.iter().enumerate() {
      let step_name = step_def.name.as_str();
      let step_span = span!(
        Level::DEBUG,
        "pipeline_step",
        step_name = step_name,
        step_index = step_idx,
        optional = step_def.optional
      );
      let _step_guard = step_span.enter();

      if let Some(skip_if) = &step_def.skip_if {
        if skip_if(ctx) {
          event!(Level::DEBUG, "Step skipped due to 'skip_if' condition.");
          continue;
        }
      }

      if self.handler_count(step_name) == 0 {
        if step_def.optional {
          event!(Level::TRACE, "Optional step has no hooks, skipping.");
          continue;
        }
        event!(Level::ERROR, "Non-optional step has no hooks.");
        return Err(Err::from(StorefrontError::HandlerMissing {
          step_name: step_def.name.clone(),
        }));
      }

      for (phase, handlers) in [("before", &self.before), ("on", &self.on), ("after", &self.after)] {
        if let Some(handlers) = handlers.get(step_name) {
          if let PhaseOutcome::Stopped = run_phase(phase, handlers, ctx)? {
            return Ok(PipelineResult::Stopped);
          }
        }
      }
      event!(Level::TRACE, "Step finished.");
    }

    event!(Level::DEBUG, "Pipeline execution completed.");
    Ok(PipelineResult::Completed)
  }
}

fn run_phase<T, Err>(phase: &'static str, handlers: &[Handler<T, Err>], ctx: &mut T) -> Result<PhaseOutcome, Err>
where
  Err: std::error::Error,
{
  for (handler_idx, handler_fn) in handlers.iter().enumerate() {
    let handler_span = span!(Level::TRACE, "hook", phase, handler_index = handler_idx);
    let _handler_guard = handler_span.enter();
    match handler_fn(ctx) {
      Ok(PipelineControl::Continue) => {}
      Ok(PipelineControl::Stop) => {
        event!(Level::DEBUG, phase, "Pipeline stopped by a hook.");
        return Ok(PhaseOutcome::Stopped);
      }
      Err(e) => {
        event!(Level::ERROR, phase, error = %e, "Hook failed.");
        return Err(e);
      }
    }
  }
  Ok(PhaseOutcome::Continue)
}
