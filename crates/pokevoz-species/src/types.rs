//! PokeAPI payload model and the profile extracted from it.

use pokevoz_core::BaseStat;
use rustemon::model::pokemon::{
    OfficialArtworkSprites, PokemonAbility, PokemonMove, PokemonStat, PokemonType,
};
use serde::{Deserialize, Serialize};

/// Number of moves offered as recommended attacks.
pub const RECOMMENDED_MOVES: usize = 4;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OtherSprites {
    #[serde(default, rename = "official-artwork")]
    pub official_artwork: Option<OfficialArtworkSprites>,
}

/// The two sprite URLs the relay can use. rustemon's `PokemonSprites`
/// requires every per-generation sprite table, so only these are read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

impl Sprites {
    /// Official artwork, else the default front sprite.
    pub fn best_url(&self) -> Option<String> {
        self.other
            .as_ref()
            .and_then(|o| o.official_artwork.as_ref())
            .and_then(|a| a.front_default.clone())
            .or_else(|| self.front_default.clone())
            .filter(|url| !url.is_empty())
    }
}

/// Subset of `GET /pokemon/{name}` that the relay reads, typed with
/// rustemon's PokeAPI model. Everything else in the payload is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PokemonPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub types: Vec<PokemonType>,
    #[serde(default)]
    pub abilities: Vec<PokemonAbility>,
    #[serde(default)]
    pub moves: Vec<PokemonMove>,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
}

/// What the relay knows about a species after a successful lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SpeciesProfile {
    pub name: String,
    #[serde(rename = "spriteUrl", skip_serializing_if = "Option::is_none")]
    pub sprite_url: Option<String>,
    pub types: Vec<String>,
    pub abilities: Vec<String>,
    pub moves: Vec<String>,
    pub stats: Vec<BaseStat>,
}

impl SpeciesProfile {
    /// Moves suggested as attacks, in species-data order.
    pub fn recommended_moves(&self) -> Vec<String> {
        self.moves.iter().take(RECOMMENDED_MOVES).cloned().collect()
    }
}

impl From<PokemonPayload> for SpeciesProfile {
    fn from(p: PokemonPayload) -> Self {
        let sprite_url = p.sprites.best_url();

        let mut types = p.types;
        types.sort_by_key(|t| t.slot);

        let mut abilities = p.abilities;
        abilities.sort_by_key(|a| (a.is_hidden, a.slot));

        Self {
            name: p.name,
            sprite_url,
            types: types.into_iter().map(|t| t.type_.name).collect(),
            abilities: abilities
                .into_iter()
                .filter_map(|a| a.ability.map(|ability| ability.name))
                .collect(),
            moves: p.moves.into_iter().map(|m| m.move_.name).collect(),
            stats: p
                .stats
                .into_iter()
                .map(|s| BaseStat {
                    name: s.stat.name,
                    base: u32::try_from(s.base_stat).unwrap_or(0),
                })
                .collect(),
        }
    }
}
