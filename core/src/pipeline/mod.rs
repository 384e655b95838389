// storefront/src/pipeline/mod.rs

//! A small synchronous step pipeline. Each step carries `before`, `on` and
//! `after` hooks that operate on a shared `&mut T` context and may stop the run.

pub mod control;
pub mod definition;
pub mod execution;
pub mod hooks;
pub mod step;

pub use control::{PipelineControl, PipelineResult};
pub use definition::{Handler, Pipeline};
pub use step::{SkipCondition, StepDef};
