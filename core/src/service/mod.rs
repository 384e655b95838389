// storefront/src/service/mod.rs

//! `CartService`: the explicit owner of one session's cart.

pub mod cart_pipeline;
pub mod context;

pub use cart_pipeline::{cart_pipeline, CartPipeline, APPLY_TO_CART, COLLECT_EVENTS, RESOLVE_PRODUCT, VALIDATE_COMMAND};
pub use context::CommandCtx;

use crate::cart::{Cart, CartCommand, CommandOutcome};
use crate::catalog::{Catalog, ProductId};
use crate::error::{StorefrontError, StorefrontResult};
use crate::events::{CartEvent, NotificationSink};
use crate::pipeline::PipelineResult;
use crate::view::CartSnapshot;
use std::rc::Rc;
use tracing::{event, instrument, Level};

/// Owns a cart and applies [`CartCommand`]s to it through the cart pipeline.
///
/// Each command runs against a working copy of the cart. The copy replaces the
/// live cart only when the pipeline completes; a stopped or failed run leaves
/// the cart as it was and emits nothing. Sinks hear about a change only after
/// it is committed.
pub struct CartService {
  catalog: Rc<Catalog>,
  cart: Cart,
  pipeline: CartPipeline,
  sinks: Vec<Box<dyn NotificationSink>>,
}

impl CartService {
  pub fn new(catalog: Rc<Catalog>) -> StorefrontResult<Self> {
    Ok(Self {
      catalog,
      cart: Cart::new(),
      pipeline: cart_pipeline()?,
      sinks: Vec::new(),
    })
  }

  pub fn with_sink(mut self, sink: impl NotificationSink + 'static) -> Self {
    self.subscribe(sink);
    self
  }

  pub fn subscribe(&mut self, sink: impl NotificationSink + 'static) {
    self.sinks.push(Box::new(sink));
  }

  /// Access to the command pipeline, e.g. to attach extra hooks.
  pub fn pipeline_mut(&mut self) -> &mut CartPipeline {
    &mut self.pipeline
  }

  #[instrument(
    name = "CartService::dispatch",
    skip(self),
    fields(command_kind = command.kind(), product_id = ?command.product_id()),
    err(Display)
  )]
  pub fn dispatch(&mut self, command: CartCommand) -> StorefrontResult<CommandOutcome> {
    let mut ctx = CommandCtx::new(command, self.cart.clone(), Rc::clone(&self.catalog));

    let outcome = match self.pipeline.run(&mut ctx)? {
      PipelineResult::Completed => ctx.outcome.ok_or_else(|| {
        StorefrontError::Internal(format!("pipeline completed without recording an outcome for {}", command))
      })?,
      PipelineResult::Stopped => {
        // Nothing is committed, so a stop after the apply step reads as ignored.
        let outcome = match ctx.outcome {
          Some(rejected @ CommandOutcome::Rejected(_)) => rejected,
          _ => CommandOutcome::Ignored,
        };
        event!(Level::DEBUG, ?outcome, "Command stopped before commit.");
        return Ok(outcome);
      }
    };

    self.cart = ctx.cart;
    event!(
      Level::DEBUG,
      ?outcome,
      total = self.cart.total(),
      item_count = self.cart.item_count(),
      "Command committed."
    );
    self.publish(&ctx.events);
    Ok(outcome)
  }

  fn publish(&self, events: &[CartEvent]) {
    for cart_event in events {
      event!(Level::TRACE, ?cart_event, sinks = self.sinks.len(), "Publishing cart event.");
      for sink in &self.sinks {
        sink.notify(cart_event);
      }
    }
  }

  pub fn add_product(&mut self, product_id: ProductId) -> StorefrontResult<CommandOutcome> {
    self.dispatch(CartCommand::AddItem { product_id })
  }

  pub fn set_quantity(&mut self, product_id: ProductId, quantity: i64) -> StorefrontResult<CommandOutcome> {
    self.dispatch(CartCommand::SetQuantity { product_id, quantity })
  }

  pub fn remove(&mut self, product_id: ProductId) -> StorefrontResult<CommandOutcome> {
    self.dispatch(CartCommand::RemoveItem { product_id })
  }

  pub fn checkout(&mut self) -> StorefrontResult<CommandOutcome> {
    self.dispatch(CartCommand::Checkout)
  }

  pub fn cart(&self) -> &Cart {
    &self.cart
  }

  pub fn catalog(&self) -> &Catalog {
    &self.catalog
  }

  pub fn total(&self) -> u64 {
    self.cart.total()
  }

  pub fn item_count(&self) -> u64 {
    self.cart.item_count()
  }

  pub fn snapshot(&self) -> CartSnapshot {
    CartSnapshot::from_cart(&self.cart)
  }
}

impl std::fmt::Debug for CartService {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("CartService")
      .field("cart", &self.cart)
      .field("sinks", &self.sinks.len())
      .finish_non_exhaustive()
  }
}
