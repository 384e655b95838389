// tests/common/mod.rs
#![allow(dead_code)] // Not every test file uses every helper

use storefront::{CartEvent, CartService, Catalog, NotificationSink, PipelineControl, Product, StorefrontError};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::Level;

// --- Catalog used by the worked scenario ---
pub const HEADPHONES: u32 = 1;
pub const WATCH: u32 = 2;
pub const LAPTOP: u32 = 3;

pub fn scenario_catalog() -> Rc<Catalog> {
  Rc::new(
    Catalog::from_products(vec![
      Product::new(HEADPHONES, "Headphones", 12_990, "headphones.jpg", "Noise cancelling"),
      Product::new(WATCH, "Watch", 24_990, "watch.jpg", "Tracks activity"),
      Product::new(LAPTOP, "Laptop", 89_990, "laptop.jpg", "Fast"),
    ])
    .expect("scenario catalog has unique ids"),
  )
}

pub fn scenario_service() -> CartService {
  CartService::new(scenario_catalog()).expect("default cart pipeline builds")
}

// --- Sink that remembers everything it was told ---
#[derive(Clone, Default)]
pub struct RecordingSink {
  events: Rc<RefCell<Vec<CartEvent>>>,
}

impl RecordingSink {
  pub fn events(&self) -> Vec<CartEvent> {
    self.events.borrow().clone()
  }

  pub fn len(&self) -> usize {
    self.events.borrow().len()
  }
}

impl NotificationSink for RecordingSink {
  fn notify(&self, event: &CartEvent) {
    self.events.borrow_mut().push(event.clone());
  }
}

pub fn recorded_service() -> (CartService, RecordingSink) {
  let sink = RecordingSink::default();
  let service = scenario_service().with_sink(sink.clone());
  (service, sink)
}

// --- Generic pipeline context and error for engine tests ---
#[derive(Clone, Debug, Default)]
pub struct TestContext {
  pub counter: i32,
  pub message: String,
  pub steps_executed: Vec<String>,
  pub should_stop_at: Option<String>,
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum TestError {
  #[error("Storefront error: {0}")]
  Storefront(String),

  #[error("Test handler failed: {0}")]
  Handler(String),
}

impl From<StorefrontError> for TestError {
  fn from(err: StorefrontError) -> Self {
    TestError::Storefront(format!("{:?}", err))
  }
}

pub fn simple_handler(
  step_name: &'static str,
  message_to_append: &'static str,
) -> impl Fn(&mut TestContext) -> Result<PipelineControl, TestError> {
  move |ctx: &mut TestContext| {
    ctx.counter += 1;
    ctx.message.push_str(message_to_append);
    ctx.steps_executed.push(step_name.to_string());
    tracing::debug!(target: "test_handlers", step = step_name, counter = ctx.counter, "executed");
    if ctx.should_stop_at.as_deref() == Some(step_name) {
      return Ok(PipelineControl::Stop);
    }
    Ok(PipelineControl::Continue)
  }
}

pub fn failing_handler(
  step_name: &'static str,
  error_message: &'static str,
) -> impl Fn(&mut TestContext) -> Result<PipelineControl, TestError> {
  move |ctx: &mut TestContext| {
    ctx.steps_executed.push(step_name.to_string());
    tracing::warn!(target: "test_handlers", step = step_name, "failing with: '{}'", error_message);
    Err(TestError::Handler(error_message.to_string()))
  }
}

// --- Tracing setup, once per test binary ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
