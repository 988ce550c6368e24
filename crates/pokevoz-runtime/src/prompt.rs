//! Prompt construction for species descriptions.

use pokevoz_core::Query;
use pokevoz_species::SpeciesProfile;

/// Cap on the move list embedded in a prompt.
const PROMPT_MOVES: usize = 12;

/// Section headers the model is asked to use, in order.
pub const SECTIONS: &[&str] = &[
    "Tipo",
    "Fortalezas",
    "Debilidades",
    "Ataques recomendados",
    "Estrategia",
];

/// Build the generation prompt for a species. Same inputs, same prompt.
pub fn build_prompt(query: &Query, profile: Option<&SpeciesProfile>) -> String {
    let mut prompt = format!(
        "Dame una descripción detallada de {} en Pokémon GO, incluyendo debilidades, \
         fortalezas, ataques y estrategias.",
        query.name()
    );

    if let Some(profile) = profile {
        let facts = species_facts(profile);
        if !facts.is_empty() {
            prompt.push_str("\n\nDatos confirmados de la especie:\n");
            prompt.push_str(&facts.join("\n"));
        }
    }

    let headers: Vec<String> = SECTIONS.iter().map(|s| format!("{}:", s)).collect();
    prompt.push_str(&format!(
        "\n\nOrganiza la respuesta en párrafos separados por una línea en blanco, \
         cada uno empezando con su encabezado: {}. No uses formato Markdown.",
        headers.join(", ")
    ));

    prompt
}

fn species_facts(profile: &SpeciesProfile) -> Vec<String> {
    let mut facts = Vec::new();
    if !profile.types.is_empty() {
        facts.push(format!("- Tipos: {}", profile.types.join(", ")));
    }
    if !profile.abilities.is_empty() {
        facts.push(format!("- Habilidades: {}", profile.abilities.join(", ")));
    }
    if !profile.moves.is_empty() {
        let moves: Vec<&str> = profile
            .moves
            .iter()
            .take(PROMPT_MOVES)
            .map(|m| m.as_str())
            .collect();
        facts.push(format!("- Movimientos conocidos: {}", moves.join(", ")));
    }
    if !profile.stats.is_empty() {
        let stats: Vec<String> = profile
            .stats
            .iter()
            .map(|s| format!("{} {}", s.name, s.base))
            .collect();
        facts.push(format!("- Estadísticas base: {}", stats.join(", ")));
    }
    facts
}
