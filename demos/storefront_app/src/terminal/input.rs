// demos/storefront_app/src/terminal/input.rs

//! Parsing of typed commands into user intents.

use crate::errors::{AppError, Result};
use storefront::{Page, ProductId, UserAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
  Action(UserAction),
  /// Dump the cart snapshot as JSON.
  Json,
  Help,
  Quit,
  /// Blank line: just re-render.
  Redraw,
}

pub const HELP: &str = "\
Commands:
  catalog            show the product catalog
  delivery           show delivery & payment information
  add <id>           add a product to the cart
  inc <id>           increase a cart line by one
  dec <id>           decrease a cart line by one
  qty <id> <n>       set a cart line's quantity
  rm <id>            remove a cart line
  cart | close       open / close the cart drawer
  faq <n>            expand or collapse FAQ question n
  checkout           place the order
  json               print the cart as JSON
  help               this text
  quit               leave";

pub fn parse_line(line: &str) -> Result<Input> {
  let mut words = line.split_whitespace();
  let Some(command) = words.next() else {
    return Ok(Input::Redraw);
  };
  let args: Vec<&str> = words.collect();

  let input = match (command.to_ascii_lowercase().as_str(), args.as_slice()) {
    ("catalog" | "home", []) => Input::Action(UserAction::Navigate(Page::Catalog)),
    ("delivery", []) => Input::Action(UserAction::Navigate(Page::Delivery)),
    ("add", [id]) => Input::Action(UserAction::AddToCart(product_id(id)?)),
    ("inc" | "+", [id]) => Input::Action(UserAction::Increment(product_id(id)?)),
    ("dec" | "-", [id]) => Input::Action(UserAction::Decrement(product_id(id)?)),
    ("qty", [id, quantity]) => Input::Action(UserAction::SetQuantity(product_id(id)?, quantity_arg(quantity)?)),
    ("rm" | "remove", [id]) => Input::Action(UserAction::Remove(product_id(id)?)),
    ("cart", []) => Input::Action(UserAction::OpenCart),
    ("close", []) => Input::Action(UserAction::CloseCart),
    ("faq", [n]) => Input::Action(UserAction::ToggleFaq(faq_index(n)?)),
    ("checkout", []) => Input::Action(UserAction::Checkout),
    ("json", []) => Input::Json,
    ("help" | "?", []) => Input::Help,
    ("quit" | "exit", []) => Input::Quit,
    _ => return Err(AppError::Parse(format!("'{}' (type 'help' for commands)", line.trim()))),
  };
  Ok(input)
}

fn product_id(raw: &str) -> Result<ProductId> {
  raw
    .parse::<u32>()
    .map(ProductId)
    .map_err(|_| AppError::Parse(format!("'{}' is not a product id", raw)))
}

fn quantity_arg(raw: &str) -> Result<i64> {
  raw
    .parse::<i64>()
    .map_err(|_| AppError::Parse(format!("'{}' is not a quantity", raw)))
}

// FAQ questions are numbered from 1 on screen.
fn faq_index(raw: &str) -> Result<usize> {
  match raw.parse::<usize>() {
    Ok(n) if n >= 1 => Ok(n - 1),
    _ => Err(AppError::Parse(format!("'{}' is not a question number", raw))),
  }
}
