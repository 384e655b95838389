// storefront/src/service/context.rs

use crate::cart::{Cart, CartCommand, CommandOutcome, LineItem};
use crate::catalog::{Catalog, Product};
use crate::events::CartEvent;
use std::rc::Rc;

/// Context threaded through the cart pipeline for a single command.
///
/// The pipeline works on its own copy of the cart; the service only commits
/// it back when the run completes.
pub struct CommandCtx {
  pub command: CartCommand,
  pub cart: Cart,
  pub catalog: Rc<Catalog>,
  /// Catalog entry for `AddItem`, set by `resolve_product`.
  pub product: Option<Product>,
  /// Line dropped by a `RemoveItem`.
  pub removed: Option<LineItem>,
  pub outcome: Option<CommandOutcome>,
  pub events: Vec<CartEvent>,
}

impl CommandCtx {
  pub fn new(command: CartCommand, cart: Cart, catalog: Rc<Catalog>) -> Self {
    Self {
      command,
      cart,
      catalog,
      product: None,
      removed: None,
      outcome: None,
      events: Vec::new(),
    }
  }
}
