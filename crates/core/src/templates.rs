//! Prompt templates, one renderer per capability.
//!
//! Every renderer is a pure function of its validated input: no clocks,
//! no randomness, no I/O. Optional blocks are emitted only when the
//! optional field is present.

use crate::data_uri::{DataUri, MediaKind};
use crate::prompt::PromptDocument;
use crate::request::{
    ValidatedHighlightReel, ValidatedLandingImage, ValidatedShortFormVideo, ValidatedThumbnails,
    ValidatedTranslation,
};
use crate::result::ThumbnailIdea;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Upper bound on highlight reel length requested from the model.
pub const MAX_HIGHLIGHT_REEL_SECONDS: u32 = 180;

/// Suggested tag count range for short-form videos.
pub const SHORT_FORM_TAGS_MIN: u32 = 3;
pub const SHORT_FORM_TAGS_MAX: u32 = 5;

/// JSON keys the model is asked to emit.
pub mod output_keys {
    pub const HIGHLIGHT_REEL_URI: &str = "highlightReelDataUri";
    pub const SHORT_VIDEO_URI: &str = "shortVideoDataUri";
    pub const IDEAS: &str = "ideas";
    pub const TRANSLATED_TEXT: &str = "translatedText";
}

// ---------------------------------------------------------------------------
// Output contract
// ---------------------------------------------------------------------------

/// Closing block asking for a single JSON object of the given shape.
fn json_contract(shape: &str) -> String {
    format!(
        "Respond with a single JSON object and nothing else, using exactly this shape:\n{shape}"
    )
}

// ---------------------------------------------------------------------------
// Highlight reel
// ---------------------------------------------------------------------------

/// Stream media, engagement text, then key-events text, in that order.
pub fn highlight_reel_prompt(input: &ValidatedHighlightReel) -> PromptDocument {
    let kind = input.expected_output_kind();
    PromptDocument::from_text(
        "You are an AI video editor specializing in highlight reels from live streams.\n\n\
         Given the following information about a live stream, identify the most engaging \
         moments and summarize the highlights.\n\n\
         Stream data:",
    )
    .media(input.source_media.clone())
    .text(format!("Viewer engagement data: {}", input.engagement_signal))
    .text(format!("Key events data: {}", input.key_events_signal))
    .text(format!(
        "Create a highlight reel that captures the essence of the stream and will attract \
         more viewers. The reel must be no longer than {MAX_HIGHLIGHT_REEL_SECONDS} seconds.\n\
         Return the reel as a {kind} data URI and a summary of the highlights it includes.\n\n{}",
        json_contract(&format!(
            "{{\"{}\": \"data:{kind}/<subtype>;base64,<encoded_data>\", \"summary\": \"<string>\"}}",
            output_keys::HIGHLIGHT_REEL_URI
        ))
    ))
}

// ---------------------------------------------------------------------------
// Short-form video
// ---------------------------------------------------------------------------

pub fn short_form_video_prompt(input: &ValidatedShortFormVideo) -> PromptDocument {
    let mut doc = PromptDocument::from_text(
        "You are an AI video editor who turns long live streams into short, engaging videos \
         such as YouTube Shorts, TikToks and Instagram Reels.\n\n\
         Stream data:",
    )
    .media(input.source_media.clone())
    .text(format!(
        "Desired duration: {} seconds\nAspect ratio: {}",
        input.desired_duration_seconds, input.aspect_ratio
    ));

    if let Some(context) = &input.additional_context {
        doc = doc.text(format!("Additional context: {context}"));
    }

    doc.text(format!(
        "Pick the most striking, funny, informative or visually interesting moments of the \
         stream and cut them into one short video. Respect the requested duration and aspect \
         ratio strictly. Keep the edit dynamic so it grabs attention fast and holds it.\n\n\
         Return the short video as a {video} data URI, a short catchy description or title, \
         and {SHORT_FORM_TAGS_MIN} to {SHORT_FORM_TAGS_MAX} relevant tags or hashtags.\n\n{}",
        json_contract(&format!(
            "{{\"{}\": \"data:video/<subtype>;base64,<encoded_data>\", \"description\": \"<string>\", \"tags\": [\"<string>\"]}}",
            output_keys::SHORT_VIDEO_URI
        )),
        video = MediaKind::Video,
    ))
}

// ---------------------------------------------------------------------------
// Thumbnails
// ---------------------------------------------------------------------------

/// Idea-generation prompt. Includes every reference image.
pub fn thumbnail_ideas_prompt(input: &ValidatedThumbnails) -> PromptDocument {
    let mut brief = format!(
        "You are a visual marketing expert for live streaming and music platforms.\n\
         Your task is to generate {} unique, eye-catching thumbnail concepts.\n\n\
         Description: {}",
        input.count, input.description
    );
    if let Some(style) = &input.style {
        brief.push_str(&format!("\nStyle: {style}"));
    }
    if let Some(genre) = &input.genre {
        brief.push_str(&format!("\nGenre: {genre}"));
    }
    if let Some(mood) = &input.mood {
        brief.push_str(&format!("\nMood: {mood}"));
    }

    let mut doc = PromptDocument::from_text(brief);
    if !input.reference_images.is_empty() {
        doc = doc
            .text(format!(
                "Reference images ({}):",
                input.reference_images.len()
            ))
            .media_all(&input.reference_images)
            .text(
                "Use these images as inspiration for the visual style and key elements, \
                 but propose varied ideas.",
            );
    }

    doc.text(format!(
        "For each concept provide:\n\
         1. 'visualPrompt': a detailed prompt for an image generation model describing the \
         scene, colors, mood, style and any short, punchy text to show on the thumbnail.\n\
         2. 'description': one sentence on the idea behind the thumbnail.\n\n\
         Make the visual prompts distinct enough to produce different thumbnails. Favor clear, \
         dynamic compositions that invite the click and stay true to the content.\n\
         Return exactly {} ideas.\n\n{}",
        input.count,
        json_contract(&format!(
            "{{\"{}\": [{{\"visualPrompt\": \"<string>\", \"description\": \"<string>\"}}]}}",
            output_keys::IDEAS
        ))
    ))
}

/// Per-idea image prompt, anchored on at most one reference image.
pub fn thumbnail_image_prompt(idea: &ThumbnailIdea, anchor: Option<&DataUri>) -> PromptDocument {
    let doc = PromptDocument::from_text(idea.visual_prompt.clone());
    match anchor {
        Some(uri) => doc.media(uri.clone()),
        None => doc,
    }
}

// ---------------------------------------------------------------------------
// Translation
// ---------------------------------------------------------------------------

pub fn translation_prompt(input: &ValidatedTranslation) -> PromptDocument {
    PromptDocument::from_text(format!(
        "You are a real-time translator, translating spoken text from a live stream into a \
         target language.\n\n\
         Spoken text: {}\n\
         Target language: {}\n\n\
         Translate the spoken text into the target language.\n\n{}",
        input.source_text,
        input.target_language,
        json_contract(&format!(
            "{{\"{}\": \"<string>\"}}",
            output_keys::TRANSLATED_TEXT
        ))
    ))
}

// ---------------------------------------------------------------------------
// Landing image
// ---------------------------------------------------------------------------

pub fn landing_image_prompt(input: &ValidatedLandingImage) -> PromptDocument {
    PromptDocument::from_text(input.prompt.clone())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
