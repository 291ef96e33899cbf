//! Axum route handlers for the persona-cards HTTP server.
//!
//! # Routes
//!
//! - `GET  /`         — Returns the pre-rendered game page
//! - `GET  /health`   — Returns `{"status": "ok", "version": ...}`
//! - `POST /generate` — Samples a persona, requests its caricature, returns a `PersonaView`
//! - `POST /reset`    — Acknowledges a reset; no server state exists to clear
//!
//! `/generate` always answers 200: a failed image request is data for the
//! page to display, not a server error. Each request is one independent
//! generation event; nothing survives between triggers, so concurrent
//! clicks need no locking.

use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::CorsLayer;

use crate::images::ImageGenerator;
use crate::persona::PersonaSample;
use crate::prompt::build_prompt;
use crate::render::{build_view, PersonaView};

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// Image client, constructed once at startup with the chosen credential.
    pub images: Arc<dyn ImageGenerator>,
    /// Page HTML, rendered once at startup.
    pub page: Arc<String>,
}

impl AppState {
    pub fn new(images: Arc<dyn ImageGenerator>, page: String) -> Self {
        Self {
            images,
            page: Arc::new(page),
        }
    }
}

/// Build the axum router with all routes.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page_handler))
        .route("/health", get(health_handler))
        .route("/generate", post(generate_handler))
        .route("/reset", post(reset_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// GET / — the game page.
async fn page_handler(State(state): State<AppState>) -> impl IntoResponse {
    Html(state.page.as_ref().clone())
}

/// GET /health — liveness probe.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION,
        "service": "persona-cards",
    }))
}

/// POST /generate — run one full generation cycle.
///
/// The handler:
/// 1. Samples a fresh persona from the fixed catalogs
/// 2. Builds the caricature prompt
/// 3. Requests one image from the configured service (no retry)
/// 4. Folds the outcome into a `PersonaView` for the page to render
async fn generate_handler(State(state): State<AppState>) -> Json<PersonaView> {
    let sample = PersonaSample::random();
    let prompt = build_prompt(&sample);
    log::debug!("generate: prompt = {}", prompt);

    let outcome = state.images.generate(&prompt).await;
    Json(build_view(sample, outcome))
}

/// POST /reset — acknowledge a display reset.
///
/// The server keeps no per-session state; the client clears its own display
/// regions on this acknowledgment.
async fn reset_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "reset" }))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::{GeneratedImage, GenerationError};
    use crate::page::render_page;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    /// Stub provider returning a fixed outcome per call.
    struct StubImages {
        outcome: fn() -> Result<GeneratedImage, GenerationError>,
    }

    #[async_trait::async_trait]
    impl ImageGenerator for StubImages {
        async fn generate(&self, _prompt: &str) -> Result<GeneratedImage, GenerationError> {
            (self.outcome)()
        }
    }

    fn app_with(outcome: fn() -> Result<GeneratedImage, GenerationError>) -> Router {
        let state = AppState::new(Arc::new(StubImages { outcome }), render_page().unwrap());
        app_router(state)
    }

    fn ok_image() -> Result<GeneratedImage, GenerationError> {
        Ok(GeneratedImage {
            url: "https://images.example/persona.png".to_string(),
            revised_prompt: None,
        })
    }

    fn rate_limited() -> Result<GeneratedImage, GenerationError> {
        Err(GenerationError::Api {
            status: reqwest::StatusCode::TOO_MANY_REQUESTS,
            message: "rate limit exceeded".to_string(),
        })
    }

    async fn post_generate(app: Router) -> Value {
        let request = Request::builder()
            .method("POST")
            .uri("/generate")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app_with(ok_image).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], crate::VERSION);
        assert_eq!(json["service"], "persona-cards");
    }

    #[tokio::test]
    async fn test_page_endpoint_serves_html() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app_with(ok_image).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("Generate persona"));
    }

    #[tokio::test]
    async fn test_generate_returns_image_and_four_chart_rows() {
        let json = post_generate(app_with(ok_image)).await;

        assert_eq!(json["image"]["url"], "https://images.example/persona.png");
        assert_eq!(json["chart"].as_array().unwrap().len(), 4);
        assert!(json.get("error").is_none());

        // 3 distinct catalog traits with in-range gauges
        let traits = json["sample"]["traits"].as_array().unwrap();
        assert_eq!(traits.len(), 3);
    }

    #[tokio::test]
    async fn test_generate_failure_reports_description_without_chart() {
        let json = post_generate(app_with(rate_limited)).await;

        assert!(json["error"].as_str().unwrap().contains("rate limit exceeded"));
        assert!(json.get("image").is_none());
        assert_eq!(json["chart"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_trigger_after_failure_proceeds_normally() {
        // A failed generation leaves no broken state behind
        let _ = post_generate(app_with(rate_limited)).await;

        let json = post_generate(app_with(ok_image)).await;
        assert!(json.get("error").is_none());
        assert_eq!(json["chart"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_consecutive_generations_are_independent() {
        let app = app_with(ok_image);
        let first = post_generate(app.clone()).await;
        let second = post_generate(app).await;
        assert_ne!(first["id"], second["id"]);
    }

    #[tokio::test]
    async fn test_reset_acknowledges_without_state() {
        let request = Request::builder()
            .method("POST")
            .uri("/reset")
            .body(Body::empty())
            .unwrap();

        let response = app_with(ok_image).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "reset");
    }
}
