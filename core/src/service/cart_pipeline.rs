// storefront/src/service/cart_pipeline.rs

//! The step pipeline every cart command goes through:
//! `validate_command` → `resolve_product` → `apply_to_cart` → `collect_events`.

use super::context::CommandCtx;
use crate::cart::{CartCommand, CommandOutcome, RejectReason};
use crate::error::{StorefrontError, StorefrontResult};
use crate::events::CartEvent;
use crate::pipeline::{Pipeline, PipelineControl, SkipCondition};
use std::rc::Rc;
use tracing::{debug, warn};

pub const VALIDATE_COMMAND: &str = "validate_command";
pub const RESOLVE_PRODUCT: &str = "resolve_product";
pub const APPLY_TO_CART: &str = "apply_to_cart";
pub const COLLECT_EVENTS: &str = "collect_events";

pub type CartPipeline = Pipeline<CommandCtx, StorefrontError>;

fn reject(ctx: &mut CommandCtx, outcome: CommandOutcome) -> StorefrontResult<PipelineControl> {
  ctx.outcome = Some(outcome);
  Ok(PipelineControl::Stop)
}

/// Builds the default cart pipeline.
pub fn cart_pipeline() -> StorefrontResult<CartPipeline> {
  let is_checkout: SkipCondition<CommandCtx> = Rc::new(|ctx: &CommandCtx| ctx.command == CartCommand::Checkout);

  let mut p = CartPipeline::new(&[
    (VALIDATE_COMMAND, false, None),
    (RESOLVE_PRODUCT, false, Some(is_checkout)),
    (APPLY_TO_CART, false, None),
    (COLLECT_EVENTS, true, None),
  ]);

  // Step 1: reject requests the cart must never apply.
  p.on_root(VALIDATE_COMMAND, |ctx: &mut CommandCtx| {
    let command = ctx.command;
    match command {
      CartCommand::SetQuantity { product_id, quantity } if quantity < 1 => {
        debug!(%product_id, quantity, "Quantity below one rejected.");
        reject(ctx, CommandOutcome::Rejected(RejectReason::QuantityBelowOne { requested: quantity }))
      }
      CartCommand::Checkout if ctx.cart.is_empty() => {
        debug!("Checkout of an empty cart rejected.");
        reject(ctx, CommandOutcome::Rejected(RejectReason::EmptyCart))
      }
      _ => Ok(PipelineControl::Continue),
    }
  })?;

  // Step 2: make sure the command names something that exists.
  p.on_root(RESOLVE_PRODUCT, |ctx: &mut CommandCtx| {
    let command = ctx.command;
    match command {
      CartCommand::AddItem { product_id } => match ctx.catalog.get(product_id) {
        Some(product) => {
          ctx.product = Some(product.clone());
          Ok(PipelineControl::Continue)
        }
        None => {
          warn!(%product_id, "Add requested for a product the catalog never issued.");
          reject(ctx, CommandOutcome::Ignored)
        }
      },
      CartCommand::SetQuantity { product_id, .. } | CartCommand::RemoveItem { product_id } => {
        if ctx.cart.contains(product_id) {
          Ok(PipelineControl::Continue)
        } else {
          debug!(%product_id, "No cart line for product, ignoring.");
          reject(ctx, CommandOutcome::Ignored)
        }
      }
      CartCommand::Checkout => Ok(PipelineControl::Continue),
    }
  })?;

  // Step 3: the only step that touches the cart.
  p.on_root(APPLY_TO_CART, |ctx: &mut CommandCtx| {
    let outcome = match ctx.command {
      CartCommand::AddItem { product_id } => {
        let product = ctx.product.as_ref().ok_or_else(|| {
          StorefrontError::Internal(format!("product {} was not resolved before apply", product_id))
        })?;
        match ctx.cart.add(product) {
          Some(quantity) => {
            debug!(%product_id, quantity, "Line quantity after add.");
            CommandOutcome::Applied
          }
          None => {
            debug!(%product_id, "Line already at maximum quantity.");
            CommandOutcome::Rejected(RejectReason::QuantityTooLarge {
              requested: i64::from(u32::MAX) + 1,
            })
          }
        }
      }
      CartCommand::SetQuantity { product_id, quantity } => ctx.cart.set_quantity(product_id, quantity),
      CartCommand::RemoveItem { product_id } => {
        ctx.removed = ctx.cart.remove(product_id);
        if ctx.removed.is_some() {
          CommandOutcome::Applied
        } else {
          CommandOutcome::Ignored
        }
      }
      CartCommand::Checkout => CommandOutcome::Applied,
    };
    ctx.outcome = Some(outcome);
    Ok::<_, StorefrontError>(PipelineControl::Continue)
  })?;

  // Step 4: describe what happened for the notification sinks.
  p.on_root(COLLECT_EVENTS, |ctx: &mut CommandCtx| {
    if ctx.outcome != Some(CommandOutcome::Applied) {
      return Ok::<_, StorefrontError>(PipelineControl::Continue);
    }
    let event = match ctx.command {
      CartCommand::AddItem { product_id } => ctx.product.as_ref().map(|p| CartEvent::ItemAdded {
        product_id,
        name: p.name.clone(),
      }),
      CartCommand::RemoveItem { product_id } => Some(CartEvent::ItemRemoved { product_id }),
      CartCommand::Checkout => Some(CartEvent::CheckoutRequested {
        total: ctx.cart.total(),
        item_count: ctx.cart.item_count(),
      }),
      CartCommand::SetQuantity { .. } => None,
    };
    ctx.events.extend(event);
    Ok(PipelineControl::Continue)
  })?;

  Ok(p)
}
