//! TiengAnh · English Trainer Backend
//!
//! - Axum HTTP + WebSocket API over the built-in lesson catalog
//! - Static SPA fallback (./static/index.html)
//!
//! Important env variables:
//!   PORT        : u16 (default 3000)
//!   CONFIG_PATH : path to TOML server config (port, static dir)
//!   LOG_LEVEL   : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT  : "pretty" (default) or "json"

mod telemetry;
mod util;
mod domain;
mod config;
mod curriculum;
mod catalog;
mod state;
mod protocol;
mod routes;

use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::{info, instrument};

use crate::config::load_server_config_from_env;
use crate::routes::build_router;
use crate::state::AppState;

#[instrument(level = "info", skip_all)]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  let cfg = load_server_config_from_env().unwrap_or_default();

  // Build shared application state. A broken curriculum table fails here,
  // before the server ever accepts a request.
  let state = Arc::new(AppState::new()?);

  // Build the HTTP router with routes, CORS and tracing layers.
  let app = build_router(state.clone(), &cfg.static_dir);

  // PORT env wins over the TOML value.
  let addr: SocketAddr = std::env::var("PORT")
    .ok()
    .and_then(|p| p.parse::<u16>().ok())
    .map(|port| SocketAddr::from(([0, 0, 0, 0], port)))
    .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], cfg.port)));

  let listener = TcpListener::bind(addr).await?;
  info!(target: "tienganh_backend", %addr, "HTTP server listening");
  axum::serve(listener, app).await?;
  Ok(())
}
