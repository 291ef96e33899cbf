//! Persona view construction.
//!
//! [`build_view`] folds a sample and the outcome of its image request into
//! the [`PersonaView`] the browser renders. On success the view carries the
//! image plus a 4-row chart: the 3 sampled gauges as numeric rows and the
//! learning preference appended as a labeled row. The categorical row inside
//! an otherwise numeric chart mirrors the original tool's observable
//! behavior and is kept on purpose. On failure the view carries only the
//! error message; no chart rows are produced for that invocation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::images::{GeneratedImage, GenerationError};
use crate::persona::PersonaSample;

/// Caption shown under a successfully generated image.
pub const IMAGE_CAPTION: &str = "Generated student persona";

/// Value of one chart row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ChartValue {
    /// Numeric gauge level, 1..=5.
    Level(u8),
    /// Categorical label (the learning-preference row).
    Label(String),
}

/// One row of the trait chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartEntry {
    /// Row label, a trait identifier or `learning-preference`.
    pub name: String,
    pub value: ChartValue,
}

/// Everything the client needs to render one generation event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonaView {
    /// Fresh id per generation event.
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    /// The sampled persona this view was built from.
    pub sample: PersonaSample,
    /// Present only when the image request succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<GeneratedImage>,
    /// Caption for the image; present exactly when `image` is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// User-visible failure description; present exactly when `image` isn't.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// 4 rows on success, empty on failure.
    pub chart: Vec<ChartEntry>,
}

/// Fold a sample and its image-request outcome into a renderable view.
pub fn build_view(
    sample: PersonaSample,
    outcome: Result<GeneratedImage, GenerationError>,
) -> PersonaView {
    let (image, caption, error, chart) = match outcome {
        Ok(image) => {
            let chart = chart_entries(&sample);
            (Some(image), Some(IMAGE_CAPTION.to_string()), None, chart)
        }
        Err(e) => {
            log::warn!("persona image generation failed: {}", e);
            (
                None,
                None,
                Some(format!("Image generation failed: {}", e)),
                Vec::new(),
            )
        }
    };

    PersonaView {
        id: Uuid::new_v4(),
        created_at: Utc::now(),
        sample,
        image,
        caption,
        error,
        chart,
    }
}

/// Chart rows for a sample: 3 numeric gauges then the preference label.
fn chart_entries(sample: &PersonaSample) -> Vec<ChartEntry> {
    let mut entries: Vec<ChartEntry> = sample
        .traits
        .iter()
        .map(|t| ChartEntry {
            name: t.name.clone(),
            value: ChartValue::Level(t.gauge.level()),
        })
        .collect();

    entries.push(ChartEntry {
        name: "learning-preference".to_string(),
        value: ChartValue::Label(sample.preference.label().to_string()),
    });

    entries
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
