//! Error types for Pokevoz.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Missing or empty input. Surfaces as 400.
    #[error("{0}")]
    Validation(String),

    /// The species-data API has no entry for the requested name. Surfaces as 404.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A remote API was unreachable or answered with a failure. Surfaces as 500.
    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// HTTP status code this error maps to on the relay surface.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Validation(_) => 400,
            Error::NotFound(_) => 404,
            _ => 500,
        }
    }

    /// Message safe to hand back to a caller. Upstream and configuration
    /// detail stays in the server log.
    pub fn public_message(&self) -> String {
        match self {
            Error::Validation(msg) => msg.clone(),
            Error::NotFound(_) => "Pokémon no encontrado".into(),
            Error::Upstream(_) => "Error procesando solicitud.".into(),
            _ => "Error en el servidor".into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
