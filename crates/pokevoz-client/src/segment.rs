//! Paragraph segmentation of generated text.

/// Characters the model uses for Markdown that should neither be shown nor
/// read aloud.
pub const MARKUP_CHARS: &[char] = &['*', '#', '`', '_', '~'];

/// Remove markup characters.
pub fn strip_markup(text: &str) -> String {
    text.chars().filter(|c| !MARKUP_CHARS.contains(c)).collect()
}

/// Cleaned narrative text. Iterate it as many times as needed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Narrative {
    text: String,
}

impl Narrative {
    pub fn new(raw: &str) -> Self {
        Self {
            text: strip_markup(raw),
        }
    }

    /// A fresh pass over the paragraphs, starting at the first one.
    pub fn paragraphs(&self) -> Paragraphs<'_> {
        Paragraphs {
            lines: self.text.lines(),
        }
    }

    pub fn len(&self) -> usize {
        self.paragraphs().count()
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs().next().is_none()
    }
}

/// Lazy iterator over trimmed, non-empty paragraphs.
///
/// Any run of line breaks is a boundary, so blank-line separated text and
/// one-paragraph-per-line text segment the same way.
#[derive(Debug, Clone)]
pub struct Paragraphs<'a> {
    lines: std::str::Lines<'a>,
}

impl<'a> Iterator for Paragraphs<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.lines.by_ref().map(str::trim).find(|l| !l.is_empty())
    }
}

impl std::iter::FusedIterator for Paragraphs<'_> {}

/// Strip markup and collect the paragraphs.
pub fn segment(text: &str) -> Vec<String> {
    Narrative::new(text)
        .paragraphs()
        .map(String::from)
        .collect()
}
