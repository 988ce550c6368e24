//! Request-scoped records and the JSON shapes exchanged with the relay.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Message returned when a species name is missing.
pub const MISSING_NAME: &str = "Falta el nombre del Pokémon";
/// Message returned when a chat prompt is missing.
pub const MISSING_PROMPT: &str = "Falta el prompt";

/// A normalized species query: trimmed, lower-cased, never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    name: String,
}

impl Query {
    /// Normalize raw user input into a query.
    pub fn parse(raw: &str) -> Result<Self> {
        let name = raw.trim().to_lowercase();
        if name.is_empty() {
            return Err(Error::Validation(MISSING_NAME.into()));
        }
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// One base stat of a species (e.g. `hp` → 35).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStat {
    pub name: String,
    pub base: u32,
}

/// The merged result of one relay request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Description {
    /// Generated text, or the fallback text when generation failed.
    pub narrative: String,
    pub sprite_url: Option<String>,
    pub types: Option<Vec<String>>,
    pub abilities: Option<Vec<String>>,
    pub recommended_moves: Option<Vec<String>>,
    pub stats: Option<Vec<BaseStat>>,
}

/// Body of `POST /api/pokemon`.
///
/// `name` and `prompt` are accepted as deprecated aliases of `pokemon`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DescribeRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pokemon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

impl DescribeRequest {
    pub fn new(pokemon: impl Into<String>) -> Self {
        Self {
            pokemon: Some(pokemon.into()),
            ..Default::default()
        }
    }

    /// First non-blank name among the accepted keys.
    pub fn requested_name(&self) -> &str {
        [&self.pokemon, &self.name, &self.prompt]
            .into_iter()
            .flatten()
            .map(|s| s.as_str())
            .find(|s| !s.trim().is_empty())
            .unwrap_or("")
    }
}

/// Body returned by `POST /api/pokemon`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescribeResponse {
    pub respuesta: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprite: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tipos: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub habilidades: Option<String>,
    #[serde(
        default,
        rename = "ataquesRecomendados",
        skip_serializing_if = "Option::is_none"
    )]
    pub ataques_recomendados: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estadisticas: Option<String>,
}

impl From<Description> for DescribeResponse {
    fn from(d: Description) -> Self {
        Self {
            respuesta: d.narrative,
            sprite: d.sprite_url,
            tipos: d.types.as_deref().and_then(join_list),
            habilidades: d.abilities.as_deref().and_then(join_list),
            ataques_recomendados: d.recommended_moves.as_deref().and_then(join_list),
            estadisticas: d.stats.as_deref().and_then(|stats| {
                let parts: Vec<String> = stats
                    .iter()
                    .map(|s| format!("{} {}", s.name, s.base))
                    .collect();
                join_list(&parts)
            }),
        }
    }
}

fn join_list(items: &[String]) -> Option<String> {
    if items.is_empty() {
        None
    } else {
        Some(items.join(", "))
    }
}

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

/// Body returned by `POST /api/chat`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

/// Error body shared by every route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
