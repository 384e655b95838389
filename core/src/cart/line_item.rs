// storefront/src/cart/line_item.rs

use crate::catalog::{Product, ProductId};
use serde::Serialize;

/// A product together with how many of it sit in the cart.
///
/// `quantity` is never below one: a line that would drop to zero is removed
/// from the cart instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
  pub product: Product,
  pub quantity: u32,
}

impl LineItem {
  pub(crate) fn new(product: Product) -> Self {
    Self { product, quantity: 1 }
  }

  pub fn id(&self) -> ProductId {
    self.product.id
  }

  pub fn unit_price(&self) -> u64 {
    self.product.price
  }

  /// `price × quantity`.
  pub fn subtotal(&self) -> u64 {
    self.product.price.saturating_mul(u64::from(self.quantity))
  }
}
