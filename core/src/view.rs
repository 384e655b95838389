// storefront/src/view.rs

//! Contracts for the presentation layer and the read-only projections it
//! renders from.
//!
//! Views never touch the cart. They receive a [`CartSnapshot`] and report user
//! intents back as [`crate::UserAction`]s.

use crate::cart::{Cart, LineItem};
use crate::catalog::{Product, ProductId};
use crate::format::format_price;
use serde::Serialize;

/// Renders a single catalog card. Its "add to cart" button is wired by the
/// host to [`crate::UserAction::AddToCart`].
pub trait ProductView {
  fn render_product(&mut self, product: &Product);
}

/// Renders the cart drawer.
pub trait CartView {
  fn render_cart(&mut self, snapshot: &CartSnapshot);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineSnapshot {
  pub id: ProductId,
  pub name: String,
  pub image: String,
  pub unit_price: u64,
  pub quantity: u32,
  pub subtotal: u64,
  /// The "-" button is disabled at quantity one.
  pub can_decrement: bool,
}

impl LineSnapshot {
  pub fn unit_price_display(&self) -> String {
    format_price(self.unit_price)
  }
}

impl From<&LineItem> for LineSnapshot {
  fn from(line: &LineItem) -> Self {
    Self {
      id: line.id(),
      name: line.product.name.clone(),
      image: line.product.image.clone(),
      unit_price: line.unit_price(),
      quantity: line.quantity,
      subtotal: line.subtotal(),
      can_decrement: line.quantity > 1,
    }
  }
}

/// Point-in-time copy of the cart for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartSnapshot {
  pub lines: Vec<LineSnapshot>,
  pub total: u64,
  pub item_count: u64,
}

impl CartSnapshot {
  pub fn from_cart(cart: &Cart) -> Self {
    Self {
      lines: cart.lines().iter().map(LineSnapshot::from).collect(),
      total: cart.total(),
      item_count: cart.item_count(),
    }
  }

  pub fn is_empty(&self) -> bool {
    self.lines.is_empty()
  }

  pub fn total_display(&self) -> String {
    format_price(self.total)
  }
}
