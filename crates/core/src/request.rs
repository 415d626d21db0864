//! Typed generation requests and their validators.
//!
//! Each request type is what a caller sends over the wire; its
//! [`Validate`] impl produces a `Validated*` value holding parsed data URIs
//! and trimmed text. Prompt templates only accept validated values, so a
//! malformed request can never reach the backend.

use serde::{Deserialize, Serialize};

use crate::data_uri::{DataUri, MediaKind};
use crate::error::ValidationFailure;
use crate::validation::{FieldChecks, MAX_REFERENCE_IMAGE_BYTES};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Fewest thumbnails a batch may request.
pub const MIN_THUMBNAIL_COUNT: u32 = 1;
/// Most thumbnails a batch may request.
pub const MAX_THUMBNAIL_COUNT: u32 = 4;
/// Batch size when the caller does not specify one.
pub const DEFAULT_THUMBNAIL_COUNT: u32 = 3;

/// Media accepted as highlight-reel source.
const REEL_SOURCE_KINDS: &[MediaKind] = &[MediaKind::Video, MediaKind::Audio];
/// Media accepted as short-form source.
const SHORT_SOURCE_KINDS: &[MediaKind] = &[MediaKind::Video];
/// Media accepted as thumbnail reference.
const REFERENCE_KINDS: &[MediaKind] = &[MediaKind::Image];

/// Structural validation of a raw request.
///
/// Implementations are pure: validating the same value twice yields the
/// same outcome.
pub trait Validate {
    type Validated;

    fn validate(&self) -> Result<Self::Validated, ValidationFailure>;
}

// ---------------------------------------------------------------------------
// Highlight reel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightReelRequest {
    /// Recorded stream as a video or audio data URI.
    pub source_media_uri: String,
    /// Chat activity, viewer counts and similar engagement signals.
    pub engagement_signal: String,
    /// Notable events that happened during the stream.
    pub key_events_signal: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedHighlightReel {
    pub source_media: DataUri,
    pub engagement_signal: String,
    pub key_events_signal: String,
}

impl ValidatedHighlightReel {
    /// The reel must come back as the same kind of media as its source.
    pub fn expected_output_kind(&self) -> MediaKind {
        self.source_media.kind().unwrap_or(MediaKind::Video)
    }
}

impl Validate for HighlightReelRequest {
    type Validated = ValidatedHighlightReel;

    fn validate(&self) -> Result<ValidatedHighlightReel, ValidationFailure> {
        let mut checks = FieldChecks::new();
        let source_media = checks.data_uri("sourceMediaUri", &self.source_media_uri, REEL_SOURCE_KINDS);
        let engagement = checks.text("engagementSignal", &self.engagement_signal);
        let key_events = checks.text("keyEventsSignal", &self.key_events_signal);

        checks.finish(|| {
            Some(ValidatedHighlightReel {
                source_media: source_media?,
                engagement_signal: engagement?.to_string(),
                key_events_signal: key_events?.to_string(),
            })
        })
    }
}

// ---------------------------------------------------------------------------
// Short-form video
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortFormVideoRequest {
    /// Recorded stream as a video data URI.
    pub source_media_uri: String,
    /// Target length, e.g. 15, 30 or 60 seconds.
    pub desired_duration_seconds: f64,
    /// Target frame shape, e.g. `9:16`, `1:1`, `16:9`.
    pub aspect_ratio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_context: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedShortFormVideo {
    pub source_media: DataUri,
    pub desired_duration_seconds: f64,
    pub aspect_ratio: String,
    pub additional_context: Option<String>,
}

impl Validate for ShortFormVideoRequest {
    type Validated = ValidatedShortFormVideo;

    fn validate(&self) -> Result<ValidatedShortFormVideo, ValidationFailure> {
        let mut checks = FieldChecks::new();
        let source_media = checks.data_uri("sourceMediaUri", &self.source_media_uri, SHORT_SOURCE_KINDS);
        let duration = checks.positive("desiredDurationSeconds", self.desired_duration_seconds);
        let aspect_ratio = checks.text("aspectRatio", &self.aspect_ratio);
        let additional_context =
            checks.optional_text("additionalContext", self.additional_context.as_deref());

        checks.finish(|| {
            Some(ValidatedShortFormVideo {
                source_media: source_media?,
                desired_duration_seconds: duration?,
                aspect_ratio: aspect_ratio?.to_string(),
                additional_context,
            })
        })
    }
}

// ---------------------------------------------------------------------------
// Thumbnails / album art
// ---------------------------------------------------------------------------

fn default_thumbnail_count() -> u32 {
    DEFAULT_THUMBNAIL_COUNT
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailRequest {
    /// What the stream or track is about.
    pub description: String,
    /// Optional gallery of reference images (screenshots, cover drafts).
    #[serde(default)]
    pub reference_image_uris: Vec<String>,
    /// Number of thumbnails to produce, 1 to 4.
    #[serde(default = "default_thumbnail_count")]
    pub count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedThumbnails {
    pub description: String,
    pub reference_images: Vec<DataUri>,
    pub count: u32,
    pub style: Option<String>,
    pub genre: Option<String>,
    pub mood: Option<String>,
}

impl ValidatedThumbnails {
    /// The single reference image attached to every per-idea image call.
    pub fn anchor_image(&self) -> Option<&DataUri> {
        self.reference_images.first()
    }
}

impl Validate for ThumbnailRequest {
    type Validated = ValidatedThumbnails;

    fn validate(&self) -> Result<ValidatedThumbnails, ValidationFailure> {
        let mut checks = FieldChecks::new();
        let description = checks.text("description", &self.description);
        let reference_images: Vec<Option<DataUri>> = self
            .reference_image_uris
            .iter()
            .enumerate()
            .map(|(i, uri)| {
                checks.data_uri_within(
                    &format!("referenceImageUris[{i}]"),
                    uri,
                    REFERENCE_KINDS,
                    MAX_REFERENCE_IMAGE_BYTES,
                )
            })
            .collect();
        let count = checks.range("count", self.count, MIN_THUMBNAIL_COUNT, MAX_THUMBNAIL_COUNT);
        let style = checks.optional_text("style", self.style.as_deref());
        let genre = checks.optional_text("genre", self.genre.as_deref());
        let mood = checks.optional_text("mood", self.mood.as_deref());

        checks.finish(|| {
            Some(ValidatedThumbnails {
                description: description?.to_string(),
                reference_images: reference_images.into_iter().collect::<Option<Vec<_>>>()?,
                count: count?,
                style,
                genre,
                mood,
            })
        })
    }
}

// ---------------------------------------------------------------------------
// Translation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRequest {
    pub source_text: String,
    /// Language name or code, e.g. `Wolof`, `fr`, `English`.
    pub target_language: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedTranslation {
    pub source_text: String,
    pub target_language: String,
}

impl Validate for TranslationRequest {
    type Validated = ValidatedTranslation;

    fn validate(&self) -> Result<ValidatedTranslation, ValidationFailure> {
        let mut checks = FieldChecks::new();
        let source_text = checks.text("sourceText", &self.source_text);
        let target_language = checks.text("targetLanguage", &self.target_language);

        checks.finish(|| {
            Some(ValidatedTranslation {
                source_text: source_text?.to_string(),
                target_language: target_language?.to_string(),
            })
        })
    }
}

// ---------------------------------------------------------------------------
// Landing image
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingImageRequest {
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedLandingImage {
    pub prompt: String,
}

impl Validate for LandingImageRequest {
    type Validated = ValidatedLandingImage;

    fn validate(&self) -> Result<ValidatedLandingImage, ValidationFailure> {
        let mut checks = FieldChecks::new();
        let prompt = checks.text("prompt", &self.prompt);

        checks.finish(|| {
            Some(ValidatedLandingImage {
                prompt: prompt?.to_string(),
            })
        })
    }
}

// ---------------------------------------------------------------------------
// Tagged request
// ---------------------------------------------------------------------------

/// Any flow request, tagged by flow name.
///
/// Serialized as `{ "flow": "<name>", "input": { ... } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "flow", content = "input", rename_all = "camelCase")]
pub enum GenerationRequest {
    CreateHighlightReel(HighlightReelRequest),
    CreateShortFormVideo(ShortFormVideoRequest),
    GenerateThumbnails(ThumbnailRequest),
    TranslateText(TranslationRequest),
    GenerateLandingImage(LandingImageRequest),
}

impl GenerationRequest {
    /// Flow name used as the serde tag.
    pub fn flow_name(&self) -> &'static str {
        match self {
            GenerationRequest::CreateHighlightReel(_) => "createHighlightReel",
            GenerationRequest::CreateShortFormVideo(_) => "createShortFormVideo",
            GenerationRequest::GenerateThumbnails(_) => "generateThumbnails",
            GenerationRequest::TranslateText(_) => "translateText",
            GenerationRequest::GenerateLandingImage(_) => "generateLandingImage",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
