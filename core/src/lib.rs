// storefront/src/lib.rs

//! Storefront: the in-memory state behind a small shop front-end.
//!
//! - A static [`Catalog`] of products.
//! - A [`Cart`] of line items that only ever changes through [`CartCommand`]s.
//! - A [`CartService`] that owns the cart, runs each command through a
//!   synchronous step [`Pipeline`] with `before` / `on` / `after` hooks, and
//!   tells registered [`NotificationSink`]s about committed changes.
//! - A [`Session`] tying the cart service to page navigation, the cart
//!   drawer and the FAQ accordion.
//!
//! Nothing is persisted. Everything lives as long as the `Session` that owns it.

pub mod cart;
pub mod catalog;
pub mod content;
pub mod error;
pub mod events;
pub mod format;
pub mod pipeline;
pub mod service;
pub mod session;
pub mod view;

pub use crate::cart::{Cart, CartCommand, CommandOutcome, LineItem, RejectReason};
pub use crate::catalog::{Catalog, Product, ProductId};
pub use crate::error::{StorefrontError, StorefrontResult};
pub use crate::events::{CartEvent, Notification, NotificationConfig, NotificationSink, TracingSink};
pub use crate::format::format_price;
pub use crate::pipeline::{Pipeline, PipelineControl, PipelineResult};
pub use crate::service::{CartService, CommandCtx};
pub use crate::session::{ActionOutcome, Page, Session, UserAction};
pub use crate::view::{CartSnapshot, CartView, LineSnapshot, ProductView};

/*
    Core flow:
    1. Build a `Catalog` (usually `Catalog::builtin()`) and share it via `Rc`.
    2. Create a `CartService` over it and `subscribe` notification sinks.
    3. Wrap it in a `Session` and feed it `UserAction`s from the front-end.
    4. Re-render from `CartService::snapshot()` after each action.
    Extra behaviour goes in as hooks: `service.pipeline_mut().after_root(..)`.
*/
