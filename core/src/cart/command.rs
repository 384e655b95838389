// storefront/src/cart/command.rs

//! Discrete cart commands and the outcome of applying one.

use crate::catalog::ProductId;
use std::fmt;

/// One user intent against the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartCommand {
  AddItem { product_id: ProductId },
  /// `quantity` is signed so that a decrement past one arrives intact and can
  /// be rejected rather than wrapping.
  SetQuantity { product_id: ProductId, quantity: i64 },
  RemoveItem { product_id: ProductId },
  Checkout,
}

impl CartCommand {
  /// Short name used in log fields.
  pub fn kind(&self) -> &'static str {
    match self {
      CartCommand::AddItem { .. } => "add_item",
      CartCommand::SetQuantity { .. } => "set_quantity",
      CartCommand::RemoveItem { .. } => "remove_item",
      CartCommand::Checkout => "checkout",
    }
  }

  pub fn product_id(&self) -> Option<ProductId> {
    match self {
      CartCommand::AddItem { product_id }
      | CartCommand::SetQuantity { product_id, .. }
      | CartCommand::RemoveItem { product_id } => Some(*product_id),
      CartCommand::Checkout => None,
    }
  }
}

impl fmt::Display for CartCommand {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      CartCommand::AddItem { product_id } => write!(f, "add_item({})", product_id),
      CartCommand::SetQuantity { product_id, quantity } => write!(f, "set_quantity({}, {})", product_id, quantity),
      CartCommand::RemoveItem { product_id } => write!(f, "remove_item({})", product_id),
      CartCommand::Checkout => write!(f, "checkout"),
    }
  }
}

/// Why a command was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
  QuantityBelowOne { requested: i64 },
  QuantityTooLarge { requested: i64 },
  EmptyCart,
}

impl fmt::Display for RejectReason {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      RejectReason::QuantityBelowOne { requested } => write!(f, "quantity {} is below one", requested),
      RejectReason::QuantityTooLarge { requested } => write!(f, "quantity {} is too large", requested),
      RejectReason::EmptyCart => write!(f, "cart is empty"),
    }
  }
}

/// Result of applying a command. None of these are errors; a rejected or
/// ignored command leaves the cart exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
  Applied,
  Rejected(RejectReason),
  /// The command named a product that is not in the catalog or not in the cart.
  Ignored,
}

impl CommandOutcome {
  pub fn is_applied(&self) -> bool {
    matches!(self, CommandOutcome::Applied)
  }
}
