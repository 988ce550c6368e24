//! HTTP client for the relay service.

use std::time::Duration;

use pokevoz_core::{DescribeRequest, DescribeResponse, ErrorBody, Query};
use pokevoz_species::PokemonPayload;
use reqwest::{Client, Response, Url};
use tracing::debug;

use crate::error::ClientError;

#[derive(Debug, Clone)]
pub struct RelayClient {
    client: Client,
    base: String,
}

impl RelayClient {
    pub fn new(base: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;
        Ok(Self::with_client(client, base))
    }

    pub fn with_client(client: Client, base: impl Into<String>) -> Self {
        Self {
            client,
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// `POST /api/pokemon`.
    pub async fn describe(&self, query: &Query) -> Result<DescribeResponse, ClientError> {
        let url = self.url(&["api", "pokemon"])?;
        debug!("Describe {} via {}", query, url);

        let response = self
            .client
            .post(url)
            .json(&DescribeRequest::new(query.name()))
            .send()
            .await?;
        let response = check(response).await?;

        let reply: DescribeResponse = response.json().await?;
        if reply.respuesta.trim().is_empty() {
            return Err(ClientError::Render("empty respuesta".into()));
        }
        Ok(reply)
    }

    /// Sprite URL from `GET /api/proxy-pokemon/{name}`; `None` when the
    /// species has no artwork.
    pub async fn species_sprite(&self, query: &Query) -> Result<Option<String>, ClientError> {
        let url = self.url(&["api", "proxy-pokemon", query.name()])?;
        let response = check(self.client.get(url).send().await?).await?;
        let payload: PokemonPayload = response.json().await?;
        Ok(payload.sprites.best_url())
    }

    fn url(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = Url::parse(&self.base)
            .map_err(|e| ClientError::Config(format!("invalid relay URL {}: {}", self.base, e)))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::Config(format!("relay URL cannot be a base: {}", self.base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Turn a non-success response into [`ClientError::Relay`], keeping the
/// relay's `{"error": ...}` message when there is one.
async fn check(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .json::<ErrorBody>()
        .await
        .map(|body| body.error)
        .unwrap_or_default();
    Err(ClientError::Relay {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_segments() {
        let relay = RelayClient::with_client(Client::new(), "http://localhost:3000/");
        assert_eq!(
            relay.url(&["api", "pokemon"]).unwrap().as_str(),
            "http://localhost:3000/api/pokemon"
        );
        assert_eq!(
            relay.url(&["api", "proxy-pokemon", "mr mime"]).unwrap().as_str(),
            "http://localhost:3000/api/proxy-pokemon/mr%20mime"
        );
    }

    #[test]
    fn test_url_keeps_base_path() {
        let relay = RelayClient::with_client(Client::new(), "http://host/pokevoz");
        assert_eq!(
            relay.url(&["api", "pokemon"]).unwrap().as_str(),
            "http://host/pokevoz/api/pokemon"
        );
    }

    #[test]
    fn test_invalid_base() {
        let relay = RelayClient::with_client(Client::new(), "not a url");
        assert!(matches!(relay.url(&["api"]), Err(ClientError::Config(_))));
    }
}
