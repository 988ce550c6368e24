//! Shared application state.

use std::sync::Arc;

use pokevoz_chat::{GeminiClient, GenerationConfig, Generator};
use pokevoz_core::{PokevozConfig, Result};
use pokevoz_runtime::Relay;
use pokevoz_species::{PokeApiClient, SpeciesSource};
use tracing::{info, warn};

/// Shared application state accessible from all route handlers.
///
/// Immutable after startup; requests share nothing else.
pub struct AppState {
    pub config: PokevozConfig,
    pub generation: GenerationConfig,
    pub relay: Relay,
}

impl AppState {
    /// Wire the real upstream clients from configuration.
    pub fn from_config(config: PokevozConfig, generation: GenerationConfig) -> Result<Self> {
        let species: Arc<dyn SpeciesSource> = Arc::new(PokeApiClient::new(
            config.pokeapi_base.clone(),
            config.http_timeout(),
        )?);

        let generator: Option<Arc<dyn Generator>> = if generation.is_configured() {
            let client = GeminiClient::from_config(&generation, config.http_timeout())?;
            info!("Generation API: gemini model={}", client.model());
            Some(Arc::new(client))
        } else {
            warn!("GEMINI_API_KEY not set; descriptions fall back and /api/chat will fail");
            None
        };

        info!("Species API: {}", config.pokeapi_base);

        Ok(Self::new(config, generation, Relay::new(species, generator)))
    }

    pub fn new(config: PokevozConfig, generation: GenerationConfig, relay: Relay) -> Self {
        Self {
            config,
            generation,
            relay,
        }
    }
}
