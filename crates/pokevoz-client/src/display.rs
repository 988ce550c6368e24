//! Display model for one description and the screen states around it.

use html_escape::{encode_single_quoted_attribute, encode_text};
use pokevoz_core::{DescribeResponse, Query};

use crate::segment::Narrative;
use crate::tags::{highlight, TaggedParagraph};

/// Placeholder paragraph when the relay sent no text.
pub const NO_TEXT: &str = "Sin respuesta del modelo.";
/// Notice added when the sprite lookup fails.
pub const SPRITE_UNAVAILABLE: &str = "No se pudo obtener sprite del Pokémon.";

/// Everything needed to render one result.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayModel {
    /// Normalized species name.
    pub name: String,
    pub sprite_url: Option<String>,
    /// Labelled species facts (types, abilities, ...), in display order.
    pub facts: Vec<(&'static str, String)>,
    pub paragraphs: Vec<TaggedParagraph>,
    pub notices: Vec<String>,
}

impl DisplayModel {
    /// Merge a relay reply and an optional separately fetched sprite.
    pub fn build(
        query: &Query,
        reply: &DescribeResponse,
        sprite_url: Option<String>,
        notices: Vec<String>,
    ) -> Self {
        let labelled = [
            ("Tipos", &reply.tipos),
            ("Habilidades", &reply.habilidades),
            ("Ataques recomendados", &reply.ataques_recomendados),
            ("Estadísticas", &reply.estadisticas),
        ];
        let facts = labelled
            .into_iter()
            .filter_map(|(label, value)| value.clone().map(|v| (label, v)))
            .collect();

        let paragraphs = Narrative::new(&reply.respuesta)
            .paragraphs()
            .map(highlight)
            .collect();

        Self {
            name: query.name().to_string(),
            sprite_url: sprite_url.or_else(|| reply.sprite.clone()),
            facts,
            paragraphs,
            notices,
        }
    }

    pub fn header(&self) -> String {
        self.name.to_uppercase()
    }

    /// Texts handed to narration, index-aligned with `paragraphs`.
    pub fn spoken_paragraphs(&self) -> Vec<String> {
        self.paragraphs.iter().map(|p| p.text()).collect()
    }

    /// HTML fragment; `highlighted` marks the paragraph being narrated.
    pub fn to_html(&self, highlighted: Option<usize>) -> String {
        let mut html = String::new();

        if let Some(sprite) = &self.sprite_url {
            html.push_str(&format!(
                "<img src='{}' alt='{}' class='pokemon-img'>",
                encode_single_quoted_attribute(sprite),
                encode_single_quoted_attribute(&self.name)
            ));
        }
        html.push_str(&format!("<h2>{}</h2>", encode_text(&self.header())));

        if !self.facts.is_empty() {
            html.push_str("<ul class='datos'>");
            for (label, value) in &self.facts {
                html.push_str(&format!(
                    "<li><strong>{}</strong>: {}</li>",
                    label,
                    encode_text(value)
                ));
            }
            html.push_str("</ul>");
        }

        html.push_str("<div id='resultado'>");
        if self.paragraphs.is_empty() {
            html.push_str(&format!("<p>{}</p>", NO_TEXT));
        }
        for (i, p) in self.paragraphs.iter().enumerate() {
            let open = if highlighted == Some(i) {
                "<p class='highlight'>"
            } else {
                "<p>"
            };
            html.push_str(open);
            if let Some(tag) = p.tag {
                html.push_str(&format!("<span class='tag'>{}</span>", tag));
            }
            html.push_str(&encode_text(&p.rest));
            html.push_str("</p>");
        }
        html.push_str("</div>");

        for notice in &self.notices {
            html.push_str(&format!("<p class='aviso'>⚠️ {}</p>", encode_text(notice)));
        }

        html
    }

    /// Plain-text rendering for terminals.
    pub fn to_text(&self) -> String {
        let mut lines = vec![self.header()];
        if let Some(sprite) = &self.sprite_url {
            lines.push(format!("Sprite: {}", sprite));
        }
        for (label, value) in &self.facts {
            lines.push(format!("{}: {}", label, value));
        }
        lines.push(String::new());
        if self.paragraphs.is_empty() {
            lines.push(NO_TEXT.to_string());
        }
        for p in &self.paragraphs {
            lines.push(p.text());
            lines.push(String::new());
        }
        for notice in &self.notices {
            lines.push(format!("! {}", notice));
        }
        lines.join("\n").trim_end().to_string()
    }
}

/// What the result area currently shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Screen {
    #[default]
    Empty,
    Loading {
        name: String,
    },
    Ready(DisplayModel),
    Error(String),
}

impl Screen {
    pub fn to_html(&self) -> String {
        match self {
            Screen::Empty => String::new(),
            Screen::Loading { name } => format!(
                "<p>🔎 Buscando información sobre <strong>{}</strong>...</p>",
                encode_text(name)
            ),
            Screen::Ready(model) => model.to_html(None),
            Screen::Error(message) => format!("<p>❌ {}</p>", encode_text(message)),
        }
    }

    pub fn to_text(&self) -> String {
        match self {
            Screen::Empty => String::new(),
            Screen::Loading { name } => format!("Buscando información sobre {}...", name),
            Screen::Ready(model) => model.to_text(),
            Screen::Error(message) => format!("Error: {}", message),
        }
    }
}
