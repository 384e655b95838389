// storefront/src/cart/state.rs

use super::command::{CommandOutcome, RejectReason};
use super::line_item::LineItem;
use crate::catalog::{Product, ProductId};
use serde::Serialize;

/// Ordered collection of line items, one per product id, in order of first add.
///
/// Every mutation keeps `quantity >= 1` on every line. Totals are derived on
/// demand and never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cart {
  lines: Vec<LineItem>,
}

impl Cart {
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds one unit of `product`, appending a fresh line if it is not present.
  /// Returns the resulting quantity of that line, or `None` when the line is
  /// already at `u32::MAX` and nothing changed.
  pub fn add(&mut self, product: &Product) -> Option<u32> {
    if let Some(line) = self.line_mut(product.id) {
      line.quantity = line.quantity.checked_add(1)?;
      return Some(line.quantity);
    }
    self.lines.push(LineItem::new(product.clone()));
    Some(1)
  }

  /// Replaces the quantity of the line for `id`.
  ///
  /// A quantity below one is rejected and the cart is left unchanged; removal
  /// is the only way to drop a line.
  pub fn set_quantity(&mut self, id: ProductId, quantity: i64) -> CommandOutcome {
    if quantity < 1 {
      return CommandOutcome::Rejected(RejectReason::QuantityBelowOne { requested: quantity });
    }
    let Ok(quantity) = u32::try_from(quantity) else {
      return CommandOutcome::Rejected(RejectReason::QuantityTooLarge { requested: quantity });
    };
    match self.line_mut(id) {
      Some(line) => {
        line.quantity = quantity;
        CommandOutcome::Applied
      }
      None => CommandOutcome::Ignored,
    }
  }

  /// Drops the line for `id`, returning it if it was present.
  pub fn remove(&mut self, id: ProductId) -> Option<LineItem> {
    let idx = self.lines.iter().position(|l| l.id() == id)?;
    Some(self.lines.remove(idx))
  }

  /// `Σ price × quantity` over all lines.
  pub fn total(&self) -> u64 {
    self.lines.iter().fold(0u64, |sum, line| sum.saturating_add(line.subtotal()))
  }

  /// Sum of all quantities, shown on the cart badge.
  pub fn item_count(&self) -> u64 {
    self.lines.iter().map(|l| u64::from(l.quantity)).sum()
  }

  pub fn lines(&self) -> &[LineItem] {
    &self.lines
  }

  pub fn line(&self, id: ProductId) -> Option<&LineItem> {
    self.lines.iter().find(|l| l.id() == id)
  }

  fn line_mut(&mut self, id: ProductId) -> Option<&mut LineItem> {
    self.lines.iter_mut().find(|l| l.id() == id)
  }

  pub fn contains(&self, id: ProductId) -> bool {
    self.line(id).is_some()
  }

  /// Number of distinct lines.
  pub fn len(&self) -> usize {
    self.lines.len()
  }

  pub fn is_empty(&self) -> bool {
    self.lines.is_empty()
  }

  pub fn clear(&mut self) {
    self.lines.clear();
  }
}
