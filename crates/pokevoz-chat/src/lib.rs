//! Text generation through an external LLM API.
//!
//! One blocking `generateContent` call per prompt; no streaming and no local
//! model.

pub mod config;
pub mod providers;
pub mod types;

pub use config::GenerationConfig;
pub use providers::{GeminiClient, Generator};
pub use types::*;
