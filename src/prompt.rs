//! Caricature prompt construction.
//!
//! Maps a [`PersonaSample`] to the fixed natural-language template sent to
//! the image service. Pure and deterministic; the vocabularies are closed so
//! no escaping or validation is needed.

use crate::persona::PersonaSample;

/// Build the image-generation prompt for a sampled persona.
///
/// Template: `Caricature of an elementary school {gender}, cartoon style,
/// reflecting traits such as {trait} {label}, ..., learning preference:
/// {preference}.`
pub fn build_prompt(sample: &PersonaSample) -> String {
    let trait_descriptions = sample
        .traits
        .iter()
        .map(|t| format!("{} {}", t.name, t.gauge.label()))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Caricature of an elementary school {}, cartoon style, reflecting traits such as {}, learning preference: {}.",
        sample.gender.label(),
        trait_descriptions,
        sample.preference.label(),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
