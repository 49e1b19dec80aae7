//! Loading server configuration from TOML.
//!
//! CONFIG_PATH points at an optional TOML file:
//!
//!   port = 3000
//!   static_dir = "./static"
//!
//! Missing file or missing fields fall back to defaults. The PORT env
//! variable still wins for the port (see main).

use serde::Deserialize;
use tracing::{error, info};

#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
  #[serde(default = "default_port")]
  pub port: u16,
  #[serde(default = "default_static_dir")]
  pub static_dir: String,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      port: default_port(),
      static_dir: default_static_dir(),
    }
  }
}

fn default_port() -> u16 {
  3000
}

fn default_static_dir() -> String {
  "./static".into()
}

/// Attempt to load `ServerConfig` from CONFIG_PATH. On any parsing/IO error,
/// returns None and the caller falls back to defaults.
pub fn load_server_config_from_env() -> Option<ServerConfig> {
  let path = std::env::var("CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match toml::from_str::<ServerConfig>(&s) {
      Ok(cfg) => {
        info!(target: "tienganh_backend", %path, "Loaded server config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "tienganh_backend", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "tienganh_backend", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_fields_take_defaults() {
    let cfg: ServerConfig = toml::from_str("").expect("empty config");
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.static_dir, "./static");
  }

  #[test]
  fn explicit_fields_override_defaults() {
    let cfg: ServerConfig = toml::from_str("port = 8080\nstatic_dir = \"./web\"").expect("config");
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.static_dir, "./web");
  }
}
