// storefront/src/events.rs

//! Cart events and the sinks that receive them once a mutation has committed.
//!
//! Delivery is fire-and-forget: sinks return nothing and cannot veto or fail
//! a command.

use crate::catalog::ProductId;
use serde::Serialize;
use std::time::Duration;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CartEvent {
  ItemAdded { product_id: ProductId, name: String },
  ItemRemoved { product_id: ProductId },
  CheckoutRequested { total: u64, item_count: u64 },
}

/// Receives cart events after the cart state they describe is in place.
pub trait NotificationSink {
  fn notify(&self, event: &CartEvent);
}

impl<F> NotificationSink for F
where
  F: Fn(&CartEvent),
{
  fn notify(&self, event: &CartEvent) {
    self(event)
  }
}

/// Writes every event to the `storefront::events` tracing target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
  fn notify(&self, event: &CartEvent) {
    match event {
      CartEvent::ItemAdded { product_id, name } => {
        info!(target: "storefront::events", %product_id, %name, "Item added to cart.")
      }
      CartEvent::ItemRemoved { product_id } => {
        info!(target: "storefront::events", %product_id, "Item removed from cart.")
      }
      CartEvent::CheckoutRequested { total, item_count } => {
        info!(target: "storefront::events", total, item_count, "Checkout requested.")
      }
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationConfig {
  /// How long a toast stays on screen.
  pub duration: Duration,
}

impl Default for NotificationConfig {
  fn default() -> Self {
    Self {
      duration: Duration::from_millis(2000),
    }
  }
}

/// A toast shown to the user in response to a cart event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
  pub title: String,
  pub description: String,
  #[serde(rename = "duration_ms", serialize_with = "serialize_millis")]
  pub duration: Duration,
}

fn serialize_millis<S: serde::Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
  serializer.serialize_u128(duration.as_millis())
}

impl Notification {
  /// The user-facing toast for `event`, if the event warrants one.
  pub fn for_event(event: &CartEvent, config: &NotificationConfig) -> Option<Self> {
    let (title, description) = match event {
      CartEvent::ItemAdded { name, .. } => ("Добавлено в корзину", name.clone()),
      CartEvent::ItemRemoved { .. } => ("Товар удалён", "Товар успешно удалён из корзины".to_string()),
      CartEvent::CheckoutRequested { .. } => return None,
    };
    Some(Self {
      title: title.to_string(),
      description,
      duration: config.duration,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::cell::RefCell;

  #[test]
  fn added_toast_names_the_product() {
    let event = CartEvent::ItemAdded {
      product_id: ProductId(2),
      name: "Умные часы".to_string(),
    };
    let toast = Notification::for_event(&event, &NotificationConfig::default()).unwrap();
    assert_eq!(toast.title, "Добавлено в корзину");
    assert_eq!(toast.description, "Умные часы");
    assert_eq!(toast.duration, Duration::from_millis(2000));
  }

  #[test]
  fn checkout_has_no_toast() {
    let event = CartEvent::CheckoutRequested { total: 1, item_count: 1 };
    assert!(Notification::for_event(&event, &NotificationConfig::default()).is_none());
  }

  #[test]
  fn closures_are_sinks() {
    let seen = RefCell::new(Vec::new());
    let sink = |event: &CartEvent| seen.borrow_mut().push(event.clone());
    sink.notify(&CartEvent::ItemRemoved { product_id: ProductId(1) });
    assert_eq!(seen.borrow().len(), 1);
  }
}
