//! Generation API configuration.

use serde::Serialize;

use crate::types::GenerationStatus;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-pro";
pub const DEFAULT_GEMINI_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_MAX_OUTPUT_TOKENS: usize = 2048;

/// Settings for the generation API. The key is never serialized.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationConfig {
    #[serde(skip)]
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    pub temperature: f64,
    pub max_output_tokens: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.into(),
            api_base: DEFAULT_GEMINI_BASE.into(),
            temperature: DEFAULT_TEMPERATURE,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }
}

impl GenerationConfig {
    /// Load from `GEMINI_API_KEY`, `GEMINI_MODEL` and `GEMINI_API_BASE`.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            api_key: non_blank("GEMINI_API_KEY"),
            model: non_blank("GEMINI_MODEL").unwrap_or(defaults.model),
            api_base: non_blank("GEMINI_API_BASE")
                .map(|b| b.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base),
            ..defaults
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Public status (no key exposed).
    pub fn to_status(&self) -> GenerationStatus {
        GenerationStatus {
            available: self.is_configured(),
            provider: "gemini".into(),
            model: self.model.clone(),
        }
    }
}
