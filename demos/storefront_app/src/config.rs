// demos/storefront_app/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;
use storefront::NotificationConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
  Text,
  Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
  pub log_format: LogFormat,
  pub toast_duration: Duration,
  /// Print a `> ` prompt before each input line. Off for piped scripts.
  pub prompt: bool,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the config from any variable lookup, so tests need not touch the
  /// process environment.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let log_format = match lookup("STOREFRONT_LOG_FORMAT").as_deref().map(str::to_ascii_lowercase) {
      None => LogFormat::Text,
      Some(v) if v == "text" => LogFormat::Text,
      Some(v) if v == "json" => LogFormat::Json,
      Some(other) => {
        return Err(AppError::Config(format!(
          "Invalid STOREFRONT_LOG_FORMAT '{}': expected 'text' or 'json'",
          other
        )))
      }
    };

    let toast_ms = lookup("STOREFRONT_TOAST_MS")
      .unwrap_or_else(|| "2000".to_string())
      .parse::<u64>()
      .map_err(|e| AppError::Config(format!("Invalid STOREFRONT_TOAST_MS: {}", e)))?;

    let prompt = lookup("STOREFRONT_PROMPT")
      .unwrap_or_else(|| "true".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid STOREFRONT_PROMPT value: {}", e)))?;

    Ok(Self {
      log_format,
      toast_duration: Duration::from_millis(toast_ms),
      prompt,
    })
  }

  pub fn notifications(&self) -> NotificationConfig {
    NotificationConfig {
      duration: self.toast_duration,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |name| vars.get(name).cloned()
  }

  #[test]
  fn defaults_apply_when_unset() {
    let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config.log_format, LogFormat::Text);
    assert_eq!(config.toast_duration, Duration::from_millis(2000));
    assert!(config.prompt);
  }

  #[test]
  fn values_are_parsed() {
    let config = AppConfig::from_lookup(lookup_from(&[
      ("STOREFRONT_LOG_FORMAT", "JSON"),
      ("STOREFRONT_TOAST_MS", "500"),
      ("STOREFRONT_PROMPT", "false"),
    ]))
    .unwrap();
    assert_eq!(config.log_format, LogFormat::Json);
    assert_eq!(config.notifications().duration, Duration::from_millis(500));
    assert!(!config.prompt);
  }

  #[test]
  fn bad_values_are_config_errors() {
    for pairs in [
      [("STOREFRONT_LOG_FORMAT", "xml")],
      [("STOREFRONT_TOAST_MS", "soon")],
      [("STOREFRONT_PROMPT", "maybe")],
    ] {
      match AppConfig::from_lookup(lookup_from(&pairs)) {
        Err(AppError::Config(_)) => {}
        other => panic!("expected Config error, got {:?}", other),
      }
    }
  }
}
