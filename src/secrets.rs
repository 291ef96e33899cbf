//! API credential store.
//!
//! Several API keys are configured in a TOML file (`api_key1`, `api_key2`,
//! ...) so the image-generation quota spreads across them. The file is read
//! once at process start; one key is then chosen uniformly at random and
//! injected into the image client. Key choice uses its own RNG handle,
//! independent of persona sampling.

use std::path::Path;

use rand::Rng;
use thiserror::Error;
use toml::Value;

/// Key-name prefix recognized in the secrets file.
const KEY_PREFIX: &str = "api_key";

/// Errors loading the credential store.
#[derive(Debug, Error)]
pub enum SecretsError {
    #[error("failed to read secrets file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse secrets file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The file parsed but held no usable `api_key*` entries.
    #[error("no API keys found in secrets file")]
    NoKeys,
}

/// Immutable set of configured API keys, non-empty by construction.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    keys: Vec<String>,
}

impl CredentialStore {
    /// Load the store from a secrets TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SecretsError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse a secrets TOML document.
    ///
    /// Collects every top-level `api_key*` string entry, sorted by key name
    /// so the ordering is stable across runs. Blank values are skipped.
    pub fn from_toml_str(contents: &str) -> Result<Self, SecretsError> {
        let doc: Value = toml::from_str(contents)?;

        let mut entries: Vec<(&str, &str)> = doc
            .as_table()
            .map(|table| {
                table
                    .iter()
                    .filter(|(name, _)| name.starts_with(KEY_PREFIX))
                    .filter_map(|(name, value)| {
                        value.as_str().map(|key| (name.as_str(), key))
                    })
                    .filter(|(_, key)| !key.trim().is_empty())
                    .collect()
            })
            .unwrap_or_default();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        let keys: Vec<String> = entries
            .into_iter()
            .map(|(_, key)| key.to_string())
            .collect();

        if keys.is_empty() {
            return Err(SecretsError::NoKeys);
        }

        log::debug!("CredentialStore loaded {} API key(s)", keys.len());
        Ok(Self { keys })
    }

    /// Number of configured keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Choose one key uniformly at random.
    pub fn choose<R: Rng>(&self, rng: &mut R) -> &str {
        &self.keys[rng.gen_range(0..self.keys.len())]
    }

    /// Choose one key with the thread RNG.
    pub fn choose_default(&self) -> &str {
        self.choose(&mut rand::thread_rng())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
