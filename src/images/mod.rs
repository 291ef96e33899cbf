//! Image-generation clients.
//!
//! The [`ImageGenerator`] trait is the seam between the generation flow and
//! the external service; [`openai::OpenAIImages`] is the production
//! implementation. Every failure mode of a request — transport, auth, rate
//! limit, malformed body — collapses into one [`GenerationError`] whose
//! display text is what the user sees.

pub mod openai;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use openai::OpenAIImages;

/// One generated image handle returned by the service.
///
/// Owned transiently by the rendering step; never cached or stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedImage {
    /// URL of the generated image.
    pub url: String,
    /// Prompt as rewritten by the service, when it reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revised_prompt: Option<String>,
}

/// Unified failure for an image-generation request.
///
/// The variants exist for logging; callers report only the display text and
/// never branch on them. No retry is attempted at any layer.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// API key missing at client construction time.
    #[error("image service API key not set")]
    MissingApiKey,

    /// Transport-level failure (DNS, connect, timeout).
    #[error("image request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx status from the service, with the body excerpt it returned.
    #[error("image service error ({status}): {message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },

    /// 2xx response whose body did not carry an image URL.
    #[error("malformed image service response: {0}")]
    MalformedResponse(String),
}

/// Seam for the persona generation flow.
///
/// Implementations send one prompt and return exactly one image handle or a
/// unified failure.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage, GenerationError>;
}
