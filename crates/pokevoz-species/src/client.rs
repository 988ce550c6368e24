//! HTTP client for the species-data API.

use std::time::Duration;

use async_trait::async_trait;
use pokevoz_core::{Error, Result};
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use crate::types::{PokemonPayload, SpeciesProfile};

/// Anything that can answer species lookups.
#[async_trait]
pub trait SpeciesSource: Send + Sync {
    /// Raw species JSON, passed through untouched by the proxy route.
    async fn fetch_raw(&self, name: &str) -> Result<serde_json::Value>;

    /// Typed profile used for enrichment.
    async fn profile(&self, name: &str) -> Result<SpeciesProfile> {
        let raw = self.fetch_raw(name).await?;
        let payload: PokemonPayload = serde_json::from_value(raw)?;
        Ok(payload.into())
    }
}

/// PokeAPI-backed species source.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: Client,
    base: String,
}

impl PokeApiClient {
    /// `base` is the API root, e.g. `https://pokeapi.co/api/v2`.
    pub fn new(base: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;
        Ok(Self::with_client(client, base))
    }

    pub fn with_client(client: Client, base: impl Into<String>) -> Self {
        Self {
            client,
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    /// `{base}/pokemon/{name}` with the name percent-encoded as one segment.
    pub fn pokemon_url(&self, name: &str) -> Result<Url> {
        let mut url = Url::parse(&self.base)
            .map_err(|e| Error::Config(format!("invalid species API base {}: {}", self.base, e)))?;
        url.path_segments_mut()
            .map_err(|_| {
                Error::Config(format!("species API base cannot be a base: {}", self.base))
            })?
            .pop_if_empty()
            .push("pokemon")
            .push(name);
        Ok(url)
    }
}

#[async_trait]
impl SpeciesSource for PokeApiClient {
    async fn fetch_raw(&self, name: &str) -> Result<serde_json::Value> {
        let url = self.pokemon_url(name)?;
        debug!("Species lookup: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Upstream(format!("species API request failed: {}", e)))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(Error::NotFound(name.to_string()));
        }
        if !status.is_success() {
            return Err(Error::Upstream(format!("species API returned {}", status)));
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| Error::Upstream(format!("species API sent invalid JSON: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pokemon_url_encodes_name() {
        let client = PokeApiClient::with_client(Client::new(), "https://pokeapi.co/api/v2/");
        let url = client.pokemon_url("mr mime").unwrap();
        assert_eq!(url.as_str(), "https://pokeapi.co/api/v2/pokemon/mr%20mime");

        let url = client.pokemon_url("../evil").unwrap();
        assert!(url.as_str().ends_with("/pokemon/..%2Fevil"));
    }

    #[test]
    fn test_invalid_base_is_config_error() {
        let client = PokeApiClient::with_client(Client::new(), "not a url");
        assert!(matches!(client.pokemon_url("pikachu"), Err(Error::Config(_))));
    }
}
