//! OpenAI Images API client (DALL-E 3).
//!
//! Sends one prompt to `POST {base}/images/generations` with fixed
//! parameters and returns the single image handle from the response. The
//! caller decides what to do with a failure; this client does not retry.

use serde_json::Value;

use super::{GeneratedImage, GenerationError, ImageGenerator};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_TIMEOUT_SECS: f64 = 120.0;

/// Image model and rendering parameters, fixed per client.
const MODEL: &str = "dall-e-3";
const SIZE: &str = "1024x1024";
const QUALITY: &str = "standard";

/// Longest body excerpt carried into an error message.
const BODY_EXCERPT_BYTES: usize = 500;

/// Truncate a response body for error reporting, never splitting a
/// multibyte character.
fn body_excerpt(text: &str) -> &str {
    if text.len() <= BODY_EXCERPT_BYTES {
        return text;
    }
    let mut end = BODY_EXCERPT_BYTES;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// OpenAI image-generation client.
///
/// Construction takes the credential explicitly — there is no fallback to
/// process environment, the credential store owns key selection.
#[derive(Debug, Clone)]
pub struct OpenAIImages {
    api_key: String,
    base_url: Option<String>,
    /// Request timeout in seconds.
    pub timeout: Option<f64>,
}

impl OpenAIImages {
    /// Create a client for the given API key.
    ///
    /// `base_url` overrides the public endpoint, for proxies and tests.
    pub fn new(api_key: impl Into<String>, base_url: Option<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url,
            timeout: None,
        }
    }

    /// Get the API base URL.
    pub fn api_base_url(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    /// Build the request body for the Images API.
    pub fn build_request_body(&self, prompt: &str) -> Value {
        serde_json::json!({
            "model": MODEL,
            "prompt": prompt,
            "n": 1,
            "size": SIZE,
            "quality": QUALITY,
        })
    }

    /// Parse an Images API response into the single returned handle.
    fn parse_response(&self, response: &Value) -> Result<GeneratedImage, GenerationError> {
        let first = response
            .get("data")
            .and_then(|d| d.get(0))
            .ok_or_else(|| {
                GenerationError::MalformedResponse("no data entries in response".to_string())
            })?;

        let url = first
            .get("url")
            .and_then(|u| u.as_str())
            .ok_or_else(|| {
                GenerationError::MalformedResponse("data entry has no url".to_string())
            })?
            .to_string();

        let revised_prompt = first
            .get("revised_prompt")
            .and_then(|p| p.as_str())
            .map(String::from);

        Ok(GeneratedImage {
            url,
            revised_prompt,
        })
    }
}

#[async_trait::async_trait]
impl ImageGenerator for OpenAIImages {
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage, GenerationError> {
        if self.api_key.is_empty() {
            return Err(GenerationError::MissingApiKey);
        }

        log::debug!(
            "OpenAIImages.generate: model={}, prompt_len={}",
            MODEL,
            prompt.len(),
        );

        let body = self.build_request_body(prompt);
        let endpoint = format!("{}/images/generations", self.api_base_url());

        let timeout_secs = self.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS);
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs_f64(timeout_secs))
            .build()?;

        let response = client
            .post(&endpoint)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            // Prefer the service's own error message when the body carries one
            let message = serde_json::from_str::<Value>(&response_text)
                .ok()
                .and_then(|v| {
                    v.get("error")
                        .and_then(|e| e.get("message"))
                        .and_then(|m| m.as_str())
                        .map(String::from)
                })
                .unwrap_or_else(|| body_excerpt(&response_text).to_string());
            return Err(GenerationError::Api { status, message });
        }

        let response_json: Value = serde_json::from_str(&response_text).map_err(|e| {
            GenerationError::MalformedResponse(format!(
                "{} - Body: {}",
                e,
                body_excerpt(&response_text)
            ))
        })?;

        self.parse_response(&response_json)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
