//! Flow result shapes.
//!
//! Results live for a single request/response exchange. Media-bearing
//! fields always hold data URIs, except the landing-image placeholder.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightReelResult {
    pub output_media_uri: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortFormVideoResult {
    pub output_media_uri: String,
    pub description: String,
    pub tags: Vec<String>,
}

/// One generated thumbnail and the visual prompt it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedThumbnail {
    pub image_uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_used: Option<String>,
}

/// Successful thumbnail batch. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailBatchResult {
    pub thumbnails: Vec<GeneratedThumbnail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    pub translated_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingImageResult {
    /// Generated image data URI, or the placeholder URL on any failure.
    pub image_uri: String,
}

/// Intermediate batch item produced by the idea step.
///
/// Deserialized straight from the model's structured output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailIdea {
    pub visual_prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Any flow result, tagged like [`crate::request::GenerationRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "flow", content = "output", rename_all = "camelCase")]
pub enum GenerationResult {
    CreateHighlightReel(HighlightReelResult),
    CreateShortFormVideo(ShortFormVideoResult),
    GenerateThumbnails(ThumbnailBatchResult),
    TranslateText(TranslationResult),
    GenerateLandingImage(LandingImageResult),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumbnail_omits_missing_prompt() {
        let thumb = GeneratedThumbnail {
            image_uri: "data:image/png;base64,AAAA".to_string(),
            prompt_used: None,
        };
        let json = serde_json::to_value(&thumb).unwrap();
        assert_eq!(json, serde_json::json!({ "imageUri": "data:image/png;base64,AAAA" }));
    }

    #[test]
    fn idea_description_is_optional() {
        let idea: ThumbnailIdea =
            serde_json::from_str(r#"{"visualPrompt":"Neon stage, bold title"}"#).unwrap();
        assert_eq!(idea.visual_prompt, "Neon stage, bold title");
        assert_eq!(idea.description, None);
    }

    #[test]
    fn tagged_result_uses_output_key() {
        let result = GenerationResult::TranslateText(TranslationResult {
            translated_text: "Jërëjëf".to_string(),
        });
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["flow"], "translateText");
        assert_eq!(json["output"]["translatedText"], "Jërëjëf");
    }
}
