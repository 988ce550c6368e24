//! Coordinates the species lookup and the generation call.

use std::sync::Arc;

use pokevoz_chat::Generator;
use pokevoz_core::{Description, Error, Query, Result, MISSING_PROMPT};
use pokevoz_species::{SpeciesProfile, SpeciesSource};
use tracing::{error, info, warn};

use crate::prompt::build_prompt;

/// Narrative returned when the generation API cannot produce one.
pub const FALLBACK_NARRATIVE: &str =
    "No se pudo generar una descripción en este momento. Inténtalo de nuevo más tarde.";

/// Request orchestrator shared by all relay routes.
///
/// Species lookups always go first and are awaited before generation.
/// Species failures degrade to an un-enriched description; only the
/// passthrough proxy reports them.
pub struct Relay {
    species: Arc<dyn SpeciesSource>,
    generator: Option<Arc<dyn Generator>>,
}

impl Relay {
    pub fn new(species: Arc<dyn SpeciesSource>, generator: Option<Arc<dyn Generator>>) -> Self {
        Self { species, generator }
    }

    pub fn generation_available(&self) -> bool {
        self.generator.is_some()
    }

    /// Describe a species. Only input validation can fail.
    pub async fn describe(&self, raw_name: &str) -> Result<Description> {
        let query = Query::parse(raw_name)?;
        info!("Describing {}", query);

        let profile = self.enrich(&query).await;
        let prompt = build_prompt(&query, profile.as_ref());
        let narrative = match self.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                error!("Generation failed for {}: {}", query, e);
                FALLBACK_NARRATIVE.to_string()
            }
        };

        Ok(match profile {
            Some(profile) => Description {
                narrative,
                recommended_moves: Some(profile.recommended_moves()),
                sprite_url: profile.sprite_url,
                types: Some(profile.types),
                abilities: Some(profile.abilities),
                stats: Some(profile.stats),
            },
            None => Description {
                narrative,
                ..Default::default()
            },
        })
    }

    /// Forward a free-form prompt. Generation failures are returned, not
    /// logged; the HTTP layer logs every 5xx once.
    pub async fn chat(&self, prompt: &str) -> Result<String> {
        if prompt.trim().is_empty() {
            return Err(Error::Validation(MISSING_PROMPT.into()));
        }
        self.generate(prompt).await.map_err(|e| match e {
            Error::Upstream(_) => e,
            other => Error::Upstream(other.to_string()),
        })
    }

    /// Raw species JSON for the proxy route.
    pub async fn species_passthrough(&self, raw_name: &str) -> Result<serde_json::Value> {
        let query = Query::parse(raw_name)?;
        self.species.fetch_raw(query.name()).await.map_err(|e| {
            warn!("Species proxy for {} failed: {}", query, e);
            e
        })
    }

    async fn enrich(&self, query: &Query) -> Option<SpeciesProfile> {
        match self.species.profile(query.name()).await {
            Ok(profile) => Some(profile),
            Err(Error::NotFound(_)) => {
                warn!("Species {} not found, describing without enrichment", query);
                None
            }
            Err(e) => {
                warn!("Species lookup for {} failed, describing without enrichment: {}", query, e);
                None
            }
        }
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let generator = self
            .generator
            .as_ref()
            .ok_or_else(|| Error::Config("generation API key not configured".into()))?;
        generator.generate(prompt).await
    }
}
