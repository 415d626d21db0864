//! Backend-agnostic prompt documents.
//!
//! A [`PromptDocument`] is the ordered list of parts sent to the generative
//! backend: inline text or inline media (a data URI). Part order is
//! significant and preserved end to end.

use crate::data_uri::DataUri;

/// One part of a prompt document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptPart {
    Text(String),
    Media(DataUri),
}

/// Ordered sequence of prompt parts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptDocument {
    parts: Vec<PromptPart>,
}

impl PromptDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a document with a single text part.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new().text(text)
    }

    /// Append a text part. Empty text is skipped.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if !text.is_empty() {
            self.parts.push(PromptPart::Text(text));
        }
        self
    }

    /// Append an inline media part.
    pub fn media(mut self, uri: DataUri) -> Self {
        self.parts.push(PromptPart::Media(uri));
        self
    }

    /// Append every media part in order.
    pub fn media_all<'a>(self, uris: impl IntoIterator<Item = &'a DataUri>) -> Self {
        uris.into_iter().fold(self, |doc, uri| doc.media(uri.clone()))
    }

    pub fn parts(&self) -> &[PromptPart] {
        &self.parts
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Media parts, in order.
    pub fn media_parts(&self) -> Vec<&DataUri> {
        self.parts
            .iter()
            .filter_map(|p| match p {
                PromptPart::Media(uri) => Some(uri),
                PromptPart::Text(_) => None,
            })
            .collect()
    }

    /// All text parts joined by newlines.
    pub fn joined_text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|p| match p {
                PromptPart::Text(t) => Some(t.as_str()),
                PromptPart::Media(_) => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
