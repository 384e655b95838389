// demos/storefront_app/src/sinks.rs

use std::cell::RefCell;
use std::rc::Rc;
use storefront::{CartEvent, Notification, NotificationConfig, NotificationSink};

/// Turns cart events into toasts and queues them until the terminal loop
/// drains and prints them.
#[derive(Debug, Clone, Default)]
pub struct ToastSink {
  config: NotificationConfig,
  queue: Rc<RefCell<Vec<Notification>>>,
}

impl ToastSink {
  pub fn new(config: NotificationConfig) -> Self {
    Self {
      config,
      queue: Rc::default(),
    }
  }

  /// Removes and returns every toast queued since the last drain.
  pub fn drain(&self) -> Vec<Notification> {
    self.queue.borrow_mut().drain(..).collect()
  }
}

impl NotificationSink for ToastSink {
  fn notify(&self, event: &CartEvent) {
    if let Some(toast) = Notification::for_event(event, &self.config) {
      self.queue.borrow_mut().push(toast);
    }
  }
}
