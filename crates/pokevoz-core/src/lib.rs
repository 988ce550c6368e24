//! Pokevoz Core — configuration, error taxonomy and the relay wire types.

pub mod config;
pub mod error;
pub mod types;

pub use config::PokevozConfig;
pub use error::{Error, Result};
pub use types::*;
