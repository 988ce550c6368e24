//! Section-header tagging for description paragraphs.

use once_cell::sync::Lazy;
use regex::Regex;

/// Recognized section headers, canonical spelling.
pub const TAGS: &[&str] = &[
    "Tipo",
    "Tipos",
    "Habilidad",
    "Habilidades",
    "Debilidad",
    "Debilidades",
    "Debilidad frente a",
    "Fortaleza",
    "Fortalezas",
    "Ataque",
    "Ataques",
    "Estrategia",
    "Estrategias",
    "Consejo",
    "Consejos",
    "Evolución",
    "Evoluciones",
    "Movimiento",
    "Movimientos",
    "Resistencia",
    "Resistencias",
    "Ventaja",
    "Ventajas",
    "Recomendación",
    "Recomendaciones",
    "Nota",
    "Notas",
];

// Longest first so "Debilidad frente a" wins over "Debilidad".
static TAG_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let mut tags: Vec<&str> = TAGS.to_vec();
    tags.sort_by_key(|t| std::cmp::Reverse(t.chars().count()));
    let alternatives: Vec<String> = tags.iter().map(|t| regex::escape(t)).collect();
    Regex::new(&format!("(?i)^({}):", alternatives.join("|"))).unwrap()
});

/// A paragraph split into an optional leading tag and the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedParagraph {
    pub tag: Option<&'static str>,
    /// Everything after the tag name, starting at the colon when tagged.
    pub rest: String,
}

impl TaggedParagraph {
    /// Paragraph text with the tag in canonical spelling.
    pub fn text(&self) -> String {
        match self.tag {
            Some(tag) => format!("{}{}", tag, self.rest),
            None => self.rest.clone(),
        }
    }
}

/// Tag a paragraph when it starts with `<Tag>:`, ignoring case.
pub fn highlight(paragraph: &str) -> TaggedParagraph {
    let tagged = TAG_PATTERN.captures(paragraph).and_then(|caps| {
        let matched = caps.get(1)?;
        let canonical = canonical_tag(matched.as_str())?;
        Some(TaggedParagraph {
            tag: Some(canonical),
            rest: paragraph[matched.end()..].to_string(),
        })
    });

    tagged.unwrap_or_else(|| TaggedParagraph {
        tag: None,
        rest: paragraph.to_string(),
    })
}

fn canonical_tag(matched: &str) -> Option<&'static str> {
    let lowered = matched.to_lowercase();
    TAGS.iter().copied().find(|t| t.to_lowercase() == lowered)
}
