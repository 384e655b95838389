// demos/storefront_app/src/main.rs

mod config;
mod errors;
mod sinks;
mod terminal;

use crate::config::{AppConfig, LogFormat};
use crate::errors::Result as AppResult;
use crate::sinks::ToastSink;
use crate::terminal::App;

use std::io;
use std::rc::Rc;
use storefront::{CartService, Catalog, Session, TracingSink};
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

fn init_tracing(format: LogFormat) {
  // Logs go to stderr so they never interleave with the rendered screen.
  let builder = tracing_subscriber::fmt()
    .with_max_level(Level::INFO)
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // RUST_LOG override
    .with_span_events(FmtSpan::CLOSE)
    .with_writer(io::stderr);
  match format {
    LogFormat::Text => builder.init(),
    LogFormat::Json => builder.json().init(),
  }
}

fn main() -> AppResult<()> {
  let app_config = AppConfig::from_env()?;
  init_tracing(app_config.log_format);
  tracing::info!(?app_config, "Starting storefront.");

  let catalog = Rc::new(Catalog::builtin());
  let toasts = ToastSink::new(app_config.notifications());
  let service = CartService::new(catalog)?
    .with_sink(TracingSink)
    .with_sink(toasts.clone());

  let mut app = App::new(Session::new(service), toasts, app_config.prompt);
  let stdin = io::stdin();
  if let Err(e) = app.run(stdin.lock(), io::stdout().lock()) {
    tracing::error!(error = %e, "Storefront stopped with an error.");
    return Err(e);
  }

  tracing::info!(badge = app.session().badge_count(), "Storefront closed.");
  Ok(())
}
