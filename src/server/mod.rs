//! HTTP surface for the persona generator.
//!
//! # Endpoints
//!
//! - `GET  /`         — The single game page
//! - `GET  /health`   — Liveness probe
//! - `POST /generate` — One sample→prompt→request→render cycle
//! - `POST /reset`    — Acknowledge a client-side display reset

pub mod routes;

pub use routes::{app_router, AppState};
