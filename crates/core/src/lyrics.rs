//! Lyric-writing briefs.
//!
//! Lyrics are produced by the translation flow: the brief is rendered into
//! an instruction that becomes the translation source text, and the
//! requested language becomes the target language.

use serde::{Deserialize, Serialize};

use crate::error::ValidationFailure;
use crate::request::{TranslationRequest, Validate};
use crate::validation::FieldChecks;

/// Shortest accepted topic, in characters.
pub const MIN_TOPIC_CHARS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LyricsBrief {
    /// Main theme of the song.
    pub topic: String,
    /// Writing style, e.g. poetic, narrative, festive.
    pub style: String,
    pub mood: String,
    /// Words or phrases the lyrics must include.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    /// Language the lyrics are written in.
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedLyricsBrief {
    pub topic: String,
    pub style: String,
    pub mood: String,
    pub keywords: Option<String>,
    pub language: String,
}

impl Validate for LyricsBrief {
    type Validated = ValidatedLyricsBrief;

    fn validate(&self) -> Result<ValidatedLyricsBrief, ValidationFailure> {
        let mut checks = FieldChecks::new();
        let topic = checks.text_min("topic", &self.topic, MIN_TOPIC_CHARS);
        let style = checks.text("style", &self.style);
        let mood = checks.text("mood", &self.mood);
        let keywords = checks.optional_text("keywords", self.keywords.as_deref());
        let language = checks.text("language", &self.language);

        checks.finish(|| {
            Some(ValidatedLyricsBrief {
                topic: topic?.to_string(),
                style: style?.to_string(),
                mood: mood?.to_string(),
                keywords,
                language: language?.to_string(),
            })
        })
    }
}

/// Render a validated brief into the translation request that writes it.
pub fn compose_lyrics_brief(brief: &ValidatedLyricsBrief) -> TranslationRequest {
    let mut instruction = format!(
        "Write song lyrics on the theme: \"{}\". Style: {}. Mood: {}.",
        brief.topic, brief.style, brief.mood
    );
    if let Some(keywords) = &brief.keywords {
        instruction.push_str(&format!(" Keywords to include: {keywords}."));
    }

    TranslationRequest {
        source_text: instruction,
        target_language: brief.language.clone(),
    }
}
