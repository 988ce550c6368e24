//! Relay runtime — one request in, one normalized description out.

pub mod prompt;
pub mod relay;

pub use prompt::build_prompt;
pub use relay::{Relay, FALLBACK_NARRATIVE};
