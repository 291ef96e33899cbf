//! # persona-cards
//!
//! Random student-persona generator for an in-person classroom card game.
//!
//! On each trigger the service samples a persona from fixed trait catalogs,
//! builds a caricature prompt, requests one image from the OpenAI Images
//! API, and returns a view with the image and a chart of the sampled
//! gauges. Nothing is persisted; every generation event is independent.

pub mod catalog;
pub mod images;
pub mod page;
pub mod persona;
pub mod prompt;
pub mod render;
pub mod secrets;
pub mod server;

pub use catalog::{Gender, GaugeLevel, LearningPreference, PERSONA_TRAITS};
pub use images::{GeneratedImage, GenerationError, ImageGenerator, OpenAIImages};
pub use persona::PersonaSample;
pub use prompt::build_prompt;
pub use render::{build_view, ChartEntry, ChartValue, PersonaView};
pub use secrets::CredentialStore;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
