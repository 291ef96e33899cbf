//! persona-cards HTTP server binary.
//!
//! Serves the classroom persona-generator page and its generation endpoint.
//!
//! # Environment Variables
//!
//! - `PORT` — HTTP port (default: 8080)
//! - `PERSONA_SECRETS` — Path to the secrets TOML file (default: "secrets.toml")
//! - `OPENAI_BASE_URL` — Override for the image service endpoint
//! - `RUST_LOG` — Tracing filter (default: "info")
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin server
//! ```

use std::sync::Arc;

use persona_cards::images::OpenAIImages;
use persona_cards::page::render_page;
use persona_cards::secrets::CredentialStore;
use persona_cards::server::{app_router, AppState};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,persona_cards=debug".into()),
        )
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let bind_addr = format!("0.0.0.0:{}", port);

    // Credentials are read once; one key is chosen for the process lifetime
    let secrets_path =
        std::env::var("PERSONA_SECRETS").unwrap_or_else(|_| "secrets.toml".to_string());
    let credentials =
        CredentialStore::load(&secrets_path).expect("Failed to load API credentials");
    tracing::info!(
        "Loaded {} API key(s) from {}",
        credentials.len(),
        secrets_path
    );

    let api_key = credentials.choose_default().to_string();
    let base_url = std::env::var("OPENAI_BASE_URL").ok();
    let images = Arc::new(OpenAIImages::new(api_key, base_url));

    let page = render_page().expect("Failed to render page template");
    let state = AppState::new(images, page);
    let app = app_router(state);

    tracing::info!("persona-cards server starting on {}", bind_addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /         — game page");
    tracing::info!("  GET  /health   — liveness probe");
    tracing::info!("  POST /generate — persona generation");
    tracing::info!("  POST /reset    — display reset");

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("Failed to bind");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
