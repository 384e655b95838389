// demos/storefront_app/src/terminal/mod.rs

//! Line-oriented front-end: read a command, apply it to the session, print
//! toasts and the redrawn screen.

pub mod input;
pub mod render;

use crate::errors::Result;
use crate::sinks::ToastSink;
use input::{parse_line, Input, HELP};
use std::io::{BufRead, Write};
use storefront::{ActionOutcome, CommandOutcome, RejectReason, Session};
use tracing::{debug, warn};

pub struct App {
  session: Session,
  toasts: ToastSink,
  prompt: bool,
}

impl App {
  pub fn new(session: Session, toasts: ToastSink, prompt: bool) -> Self {
    Self { session, toasts, prompt }
  }

  /// Runs until `quit` or end of input.
  pub fn run(&mut self, input: impl BufRead, mut out: impl Write) -> Result<()> {
    write!(out, "{}", render::render_session(&self.session))?;
    writeln!(out, "Type 'help' for commands.")?;

    let mut lines = input.lines();
    loop {
      if self.prompt {
        write!(out, "> ")?;
        out.flush()?;
      }
      let Some(line) = lines.next().transpose()? else {
        break;
      };

      let parsed = match parse_line(&line) {
        Ok(parsed) => parsed,
        Err(e) if e.is_recoverable() => {
          writeln!(out, "{}", e)?;
          continue;
        }
        Err(e) => return Err(e),
      };

      match parsed {
        Input::Quit => break,
        Input::Help => writeln!(out, "{}", HELP)?,
        Input::Json => writeln!(out, "{}", serde_json::to_string_pretty(&self.session.cart().snapshot())?)?,
        Input::Redraw => write!(out, "{}", render::render_session(&self.session))?,
        Input::Action(action) => {
          let outcome = self.session.handle(action)?;
          debug!(?action, ?outcome, "Action handled.");
          for toast in self.toasts.drain() {
            writeln!(out, "{}", render::render_toast(&toast))?;
          }
          if let Some(note) = outcome_note(outcome) {
            writeln!(out, "{}", note)?;
          }
          write!(out, "{}", render::render_session(&self.session))?;
        }
      }
    }
    Ok(())
  }

  pub fn session(&self) -> &Session {
    &self.session
  }
}

fn outcome_note(outcome: ActionOutcome) -> Option<String> {
  match outcome {
    ActionOutcome::Cart(CommandOutcome::Rejected(reason)) => {
      warn!(?reason, "Cart command rejected.");
      Some(match reason {
        RejectReason::QuantityBelowOne { .. } => "Количество не может быть меньше 1".to_string(),
        RejectReason::QuantityTooLarge { requested } => format!("Слишком большое количество: {}", requested),
        RejectReason::EmptyCart => "Корзина пуста".to_string(),
      })
    }
    ActionOutcome::Cart(CommandOutcome::Ignored) => Some("Ничего не изменилось".to_string()),
    _ => None,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Cursor;
  use storefront::{CartService, Catalog, NotificationConfig};
  use std::rc::Rc;

  fn app() -> App {
    let toasts = ToastSink::new(NotificationConfig::default());
    let service = CartService::new(Rc::new(Catalog::builtin()))
      .unwrap()
      .with_sink(toasts.clone());
    App::new(Session::new(service), toasts, false)
  }

  fn run_script(app: &mut App, script: &str) -> String {
    let mut out = Vec::new();
    app.run(Cursor::new(script.to_string()), &mut out).unwrap();
    String::from_utf8(out).unwrap()
  }

  #[test]
  fn scripted_session_updates_cart_and_prints_toasts() {
    let mut app = app();
    let out = run_script(&mut app, "add 1\nadd 1\ndec 1\ndec 1\nrm 1\n");
    assert_eq!(out.matches("Добавлено в корзину").count(), 2);
    assert!(out.contains("Количество не может быть меньше 1"));
    assert!(out.contains("Товар успешно удалён из корзины"));
    assert!(app.session().cart().cart().is_empty());
  }

  #[test]
  fn bad_input_is_reported_and_loop_continues() {
    let mut app = app();
    let out = run_script(&mut app, "add banana\nadd 2\nquit\nadd 3\n");
    assert!(out.contains("Unrecognised input"));
    assert_eq!(app.session().badge_count(), 1);
  }

  #[test]
  fn json_dumps_the_snapshot() {
    let mut app = app();
    let out = run_script(&mut app, "add 3\njson\n");
    assert!(out.contains("\"total\": 89990"));
  }
}
