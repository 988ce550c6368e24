//! Client-side error types.

use thiserror::Error;

/// Shown when the submitted name is blank.
pub const EMPTY_INPUT: &str = "Ingresa un nombre de Pokémon";
/// Shown when the relay cannot be reached.
pub const CONNECTION_FAILED: &str = "Error al conectar con el servidor.";
/// Shown when the relay answers without a usable description.
pub const NO_INFORMATION: &str = "No se pudo obtener información.";

#[derive(Error, Debug)]
pub enum ClientError {
    /// The relay answered with a non-success status.
    #[error("relay returned {status}: {message}")]
    Relay { status: u16, message: String },

    #[error("transport error: {0}")]
    Transport(String),

    /// The relay answered 2xx with a body we cannot render.
    #[error("malformed relay response: {0}")]
    Render(String),

    #[error("speech error: {0}")]
    Speech(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Inline message for the result area.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Relay { message, .. } if !message.is_empty() => {
                format!("{} ({})", NO_INFORMATION, message)
            }
            ClientError::Transport(_) => CONNECTION_FAILED.into(),
            _ => NO_INFORMATION.into(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ClientError::Render(e.to_string())
        } else {
            ClientError::Transport(e.to_string())
        }
    }
}
