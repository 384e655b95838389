// storefront/src/session.rs

//! One tab's worth of storefront state: the current page, the cart drawer,
//! the FAQ accordion and the cart service shared by every page.

use crate::cart::{CommandOutcome, RejectReason};
use crate::catalog::{Catalog, ProductId};
use crate::content::{Accordion, FAQ};
use crate::error::StorefrontResult;
use crate::service::CartService;
use std::fmt;
use std::rc::Rc;
use tracing::{debug, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
  #[default]
  Catalog,
  Delivery,
}

impl fmt::Display for Page {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Page::Catalog => write!(f, "catalog"),
      Page::Delivery => write!(f, "delivery"),
    }
  }
}

/// A click (or keystroke) in the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
  AddToCart(ProductId),
  /// The drawer's "+" button.
  Increment(ProductId),
  /// The drawer's "-" button.
  Decrement(ProductId),
  SetQuantity(ProductId, i64),
  Remove(ProductId),
  OpenCart,
  CloseCart,
  Navigate(Page),
  ToggleFaq(usize),
  Checkout,
}

/// What the front-end should do after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
  Cart(CommandOutcome),
  /// Navigation, drawer or accordion state changed.
  ViewChanged,
}

pub struct Session {
  cart: CartService,
  page: Page,
  cart_open: bool,
  faq: Accordion,
}

impl Session {
  pub fn new(cart: CartService) -> Self {
    Self {
      cart,
      page: Page::default(),
      cart_open: false,
      faq: Accordion::new(FAQ.len()),
    }
  }

  /// A session over the built-in catalog with no notification sinks.
  pub fn with_builtin_catalog() -> StorefrontResult<Self> {
    Ok(Self::new(CartService::new(Rc::new(Catalog::builtin()))?))
  }

  #[instrument(name = "Session::handle", skip(self), fields(page = %self.page))]
  pub fn handle(&mut self, action: UserAction) -> StorefrontResult<ActionOutcome> {
    let outcome = match action {
      UserAction::AddToCart(id) => self.cart.add_product(id)?,
      UserAction::Increment(id) => self.step_quantity(id, 1)?,
      UserAction::Decrement(id) => self.step_quantity(id, -1)?,
      UserAction::SetQuantity(id, quantity) => self.cart.set_quantity(id, quantity)?,
      UserAction::Remove(id) => self.cart.remove(id)?,
      UserAction::Checkout => self.cart.checkout()?,
      UserAction::OpenCart => {
        self.cart_open = true;
        return Ok(ActionOutcome::ViewChanged);
      }
      UserAction::CloseCart => {
        self.cart_open = false;
        return Ok(ActionOutcome::ViewChanged);
      }
      UserAction::Navigate(page) => {
        debug!(from = %self.page, to = %page, "Navigating.");
        self.page = page;
        return Ok(ActionOutcome::ViewChanged);
      }
      UserAction::ToggleFaq(index) => {
        self.faq.toggle(index);
        return Ok(ActionOutcome::ViewChanged);
      }
    };
    Ok(ActionOutcome::Cart(outcome))
  }

  // "+" and "-" send the neighbouring quantity; the cart decides whether it
  // is acceptable.
  fn step_quantity(&mut self, id: ProductId, delta: i64) -> StorefrontResult<CommandOutcome> {
    let Some(current) = self.cart.cart().line(id).map(|l| i64::from(l.quantity)) else {
      return Ok(CommandOutcome::Ignored);
    };
    let outcome = self.cart.set_quantity(id, current + delta)?;
    if let CommandOutcome::Rejected(RejectReason::QuantityBelowOne { .. }) = outcome {
      debug!(%id, "Decrement at quantity one ignored.");
    }
    Ok(outcome)
  }

  pub fn page(&self) -> Page {
    self.page
  }

  pub fn is_cart_open(&self) -> bool {
    self.cart_open
  }

  pub fn faq(&self) -> &Accordion {
    &self.faq
  }

  pub fn cart(&self) -> &CartService {
    &self.cart
  }

  pub fn cart_mut(&mut self) -> &mut CartService {
    &mut self.cart
  }

  /// The navbar badge: total number of units in the cart.
  pub fn badge_count(&self) -> u64 {
    self.cart.item_count()
  }
}
