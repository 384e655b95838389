// storefront/src/cart/mod.rs

//! The cart state machine: line items, the `Cart` that owns them and the
//! commands that drive it.

pub mod command;
pub mod line_item;
pub mod state;

pub use command::{CartCommand, CommandOutcome, RejectReason};
pub use line_item::LineItem;
pub use state::Cart;
