mod common;

use assert_matches::assert_matches;
use serde_json::json;
use tokio_util::sync::CancellationToken;
use zikcut_core::lyrics::LyricsBrief;
use zikcut_core::request::{
    GenerationRequest, HighlightReelRequest, LandingImageRequest, ShortFormVideoRequest,
    TranslationRequest,
};
use zikcut_core::result::GenerationResult;
use zikcut_genai::backend::{GenerateResponse, Modality};
use zikcut_genai::invoker::JSON_MIME_TYPE;
use zikcut_genai::safety::content_safety_policy;
use zikcut_genai::testing::ScriptedBackend;
use zikcut_pipeline::error::FlowError;
use zikcut_pipeline::highlight_reel::create_highlight_reel;
use zikcut_pipeline::landing_image::{generate_landing_image, PLACEHOLDER_IMAGE_URI};
use zikcut_pipeline::runner::{run_flow, FlowContext};
use zikcut_pipeline::short_form_video::create_short_form_video;
use zikcut_pipeline::thumbnails::ThumbnailSettings;
use zikcut_pipeline::translation::{translate_text, write_lyrics};

use common::*;

fn reel(source: &str) -> HighlightReelRequest {
    HighlightReelRequest {
        source_media_uri: source.to_string(),
        engagement_signal: "Chat exploded during the finale".to_string(),
        key_events_signal: "Youssou N'Dour guest appearance".to_string(),
    }
}

fn short(duration: f64) -> ShortFormVideoRequest {
    ShortFormVideoRequest {
        source_media_uri: MP4.to_string(),
        desired_duration_seconds: duration,
        aspect_ratio: "9:16".to_string(),
        additional_context: Some("Keep the drum solo".to_string()),
    }
}

fn translation() -> TranslationRequest {
    TranslationRequest {
        source_text: "Merci à tous d'être là ce soir".to_string(),
        target_language: "Wolof".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Highlight reel
// ---------------------------------------------------------------------------

#[tokio::test]
async fn reel_returns_media_and_summary() {
    let backend = ScriptedBackend::always(json_response(json!({
        "highlightReelDataUri": MP4,
        "summary": " Finale and guest duet ",
    })));

    let result = create_highlight_reel(&invoker(&backend), &reel(MP4)).await.unwrap();
    assert_eq!(result.output_media_uri, MP4);
    assert_eq!(result.summary, "Finale and guest duet");

    let calls = backend.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].options.response_mime_type.as_deref(), Some(JSON_MIME_TYPE));
    assert_eq!(calls[0].options.response_modalities, vec![Modality::Text]);
    assert_eq!(calls[0].prompt.media_parts()[0].as_str(), MP4);
}

#[tokio::test]
async fn reel_audio_source_requires_audio_output() {
    let backend = ScriptedBackend::always(json_response(json!({
        "highlightReelDataUri": MP4,
        "summary": "Wrong kind",
    })));
    let err = create_highlight_reel(&invoker(&backend), &reel(MP3)).await.unwrap_err();
    assert_matches!(err, FlowError::EmptyGenerationResult(_));
}

#[tokio::test]
async fn reel_without_media_is_empty_result() {
    let backend = ScriptedBackend::always(json_response(json!({
        "highlightReelDataUri": "",
        "summary": "Nothing",
    })));
    let err = create_highlight_reel(&invoker(&backend), &reel(MP4)).await.unwrap_err();
    assert_matches!(err, FlowError::EmptyGenerationResult(_));
}

#[tokio::test]
async fn reel_truncated_media_uri_is_empty_result() {
    let backend = ScriptedBackend::always(json_response(json!({
        "highlightReelDataUri": "data:video",
        "summary": "Cut short",
    })));
    let err = create_highlight_reel(&invoker(&backend), &reel(MP4)).await.unwrap_err();
    assert_matches!(err, FlowError::EmptyGenerationResult(_));
}

#[tokio::test]
async fn reel_missing_summary_is_schema_mismatch() {
    let backend = ScriptedBackend::always(json_response(json!({ "highlightReelDataUri": MP4 })));
    let err = create_highlight_reel(&invoker(&backend), &reel(MP4)).await.unwrap_err();
    assert_matches!(err, FlowError::SchemaMismatch(_));
}

#[tokio::test]
async fn reel_malformed_source_never_reaches_backend() {
    let backend = ScriptedBackend::always(GenerateResponse::empty());
    let err = create_highlight_reel(&invoker(&backend), &reel("video.mp4")).await.unwrap_err();
    assert_matches!(err, FlowError::Validation(v) if v.names("sourceMediaUri"));
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn reel_backend_failure_is_unavailable() {
    let backend = ScriptedBackend::failing(502, "bad gateway");
    let err = create_highlight_reel(&invoker(&backend), &reel(MP4)).await.unwrap_err();
    assert_matches!(err, FlowError::BackendUnavailable(_));
}

// ---------------------------------------------------------------------------
// Short-form video
// ---------------------------------------------------------------------------

#[tokio::test]
async fn short_returns_video_description_and_clean_tags() {
    let backend = ScriptedBackend::always(json_response(json!({
        "shortVideoDataUri": MP4,
        "description": "The drum solo everyone missed",
        "tags": ["#sabar", " ", "#dakar "],
    })));

    let result = create_short_form_video(&invoker(&backend), &short(30.0)).await.unwrap();
    assert_eq!(result.output_media_uri, MP4);
    assert_eq!(result.description, "The drum solo everyone missed");
    assert_eq!(result.tags, vec!["#sabar", "#dakar"]);

    let text = backend.calls()[0].prompt.joined_text();
    assert!(text.contains("Additional context: Keep the drum solo"));
}

#[tokio::test]
async fn short_negative_duration_never_reaches_backend() {
    let backend = ScriptedBackend::always(GenerateResponse::empty());
    let err = create_short_form_video(&invoker(&backend), &short(-1.0)).await.unwrap_err();
    assert_matches!(err, FlowError::Validation(v) if v.names("desiredDurationSeconds"));
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn short_image_output_is_empty_result() {
    let backend = ScriptedBackend::always(json_response(json!({
        "shortVideoDataUri": PNG,
        "description": "Not a video",
        "tags": [],
    })));
    let err = create_short_form_video(&invoker(&backend), &short(15.0)).await.unwrap_err();
    assert_matches!(err, FlowError::EmptyGenerationResult(_));
}

#[tokio::test]
async fn short_missing_tags_is_schema_mismatch() {
    let backend = ScriptedBackend::always(json_response(json!({
        "shortVideoDataUri": MP4,
        "description": "No tags here",
    })));
    let err = create_short_form_video(&invoker(&backend), &short(20.0)).await.unwrap_err();
    assert_matches!(err, FlowError::SchemaMismatch(_));
}

#[tokio::test]
async fn translation_missing_text_is_schema_mismatch() {
    let backend = ScriptedBackend::always(json_response(json!({ "text": "Jërëjëf" })));
    let err = translate_text(&invoker(&backend), &translation()).await.unwrap_err();
    assert_matches!(err, FlowError::SchemaMismatch(_));
}

// ---------------------------------------------------------------------------
// Translation and lyrics
// ---------------------------------------------------------------------------

#[tokio::test]
async fn translation_parses_fenced_json() {
    let backend = ScriptedBackend::always(GenerateResponse::text(
        "```json\n{\"translatedText\": \"Jërëjëf ci yéen yépp\"}\n```",
    ));
    let result = translate_text(&invoker(&backend), &translation()).await.unwrap();
    assert_eq!(result.translated_text, "Jërëjëf ci yéen yépp");
}

#[tokio::test]
async fn translation_blank_output_is_empty_result() {
    let backend = ScriptedBackend::always(json_response(json!({ "translatedText": "  " })));
    let err = translate_text(&invoker(&backend), &translation()).await.unwrap_err();
    assert_matches!(err, FlowError::EmptyGenerationResult(_));
}

#[tokio::test]
async fn translation_wrong_shape_is_schema_mismatch() {
    let backend = ScriptedBackend::always(json_response(json!({ "translatedText": 42 })));
    let err = translate_text(&invoker(&backend), &translation()).await.unwrap_err();
    assert_matches!(err, FlowError::SchemaMismatch(_));
}

#[tokio::test]
async fn lyrics_brief_goes_through_translation() {
    let backend =
        ScriptedBackend::always(json_response(json!({ "translatedText": "Dakar sama xol" })));
    let brief = LyricsBrief {
        topic: "Love in Dakar".to_string(),
        style: "Poetic".to_string(),
        mood: "Nostalgic".to_string(),
        keywords: Some("Gorée".to_string()),
        language: "Wolof".to_string(),
    };

    let result = write_lyrics(&invoker(&backend), &brief).await.unwrap();
    assert_eq!(result.translated_text, "Dakar sama xol");

    let text = backend.calls()[0].prompt.joined_text();
    assert!(text.contains("Write song lyrics on the theme: \"Love in Dakar\""));
    assert!(text.contains("Keywords to include: Gorée."));
    assert!(text.contains("Target language: Wolof"));
}

#[tokio::test]
async fn lyrics_short_topic_never_reaches_backend() {
    let backend = ScriptedBackend::always(GenerateResponse::empty());
    let brief = LyricsBrief {
        topic: "Joy".to_string(),
        style: "Festive".to_string(),
        mood: "Happy".to_string(),
        keywords: None,
        language: "fr".to_string(),
    };
    let err = write_lyrics(&invoker(&backend), &brief).await.unwrap_err();
    assert_matches!(err, FlowError::Validation(v) if v.names("topic"));
    assert_eq!(backend.call_count(), 0);
}

// ---------------------------------------------------------------------------
// Landing image
// ---------------------------------------------------------------------------

#[tokio::test]
async fn landing_image_returns_generated_media() {
    let backend = ScriptedBackend::always(png_response());
    let result = generate_landing_image(
        &invoker(&backend),
        &LandingImageRequest {
            prompt: "Teranga festival poster".to_string(),
        },
    )
    .await;
    assert_eq!(result.image_uri, PNG);
    assert_eq!(
        backend.calls()[0].options.response_modalities,
        vec![Modality::Text, Modality::Image]
    );
}

#[tokio::test]
async fn landing_image_falls_back_on_empty_media() {
    let backend = ScriptedBackend::always(GenerateResponse::text("I could not draw that"));
    let result = generate_landing_image(
        &invoker(&backend),
        &LandingImageRequest {
            prompt: "Teranga festival poster".to_string(),
        },
    )
    .await;
    assert_eq!(result.image_uri, PLACEHOLDER_IMAGE_URI);
}

#[tokio::test]
async fn landing_image_falls_back_on_backend_error() {
    let backend = ScriptedBackend::failing(500, "boom");
    let result = generate_landing_image(
        &invoker(&backend),
        &LandingImageRequest {
            prompt: "Teranga festival poster".to_string(),
        },
    )
    .await;
    assert_eq!(result.image_uri, PLACEHOLDER_IMAGE_URI);
}

#[tokio::test]
async fn landing_image_falls_back_on_blank_prompt() {
    let backend = ScriptedBackend::always(png_response());
    let result = generate_landing_image(
        &invoker(&backend),
        &LandingImageRequest {
            prompt: "   ".to_string(),
        },
    )
    .await;
    assert_eq!(result.image_uri, PLACEHOLDER_IMAGE_URI);
    assert_eq!(backend.call_count(), 0);
}

// ---------------------------------------------------------------------------
// Safety policy and dispatch
// ---------------------------------------------------------------------------

#[tokio::test]
async fn every_flow_call_carries_safety_policy() {
    let backend = ScriptedBackend::always(json_response(json!({ "translatedText": "ok" })));
    let inv = invoker(&backend);

    let _ = translate_text(&inv, &translation()).await;
    let _ = create_highlight_reel(&inv, &reel(MP4)).await;
    let _ = create_short_form_video(&inv, &short(30.0)).await;
    let _ = generate_landing_image(
        &inv,
        &LandingImageRequest {
            prompt: "Poster".to_string(),
        },
    )
    .await;

    let calls = backend.calls();
    assert_eq!(calls.len(), 4);
    assert!(calls
        .iter()
        .all(|c| c.options.safety_settings == content_safety_policy()));
}

#[tokio::test]
async fn run_flow_dispatches_tagged_request() {
    let backend = ScriptedBackend::always(json_response(json!({ "translatedText": "Salaam" })));
    let ctx = FlowContext::new(invoker(&backend), ThumbnailSettings::default());

    let request: GenerationRequest = serde_json::from_value(json!({
        "flow": "translateText",
        "input": { "sourceText": "Bonjour", "targetLanguage": "Wolof" },
    }))
    .unwrap();

    let result = run_flow(&ctx, &request, &CancellationToken::new()).await.unwrap();
    assert_matches!(result, GenerationResult::TranslateText(t) if t.translated_text == "Salaam");
}

#[tokio::test]
async fn run_flow_landing_image_never_fails() {
    let backend = ScriptedBackend::failing(503, "down");
    let ctx = FlowContext::new(invoker(&backend), ThumbnailSettings::default());
    let request = GenerationRequest::GenerateLandingImage(LandingImageRequest {
        prompt: "Poster".to_string(),
    });

    let result = run_flow(&ctx, &request, &CancellationToken::new()).await.unwrap();
    assert_matches!(
        result,
        GenerationResult::GenerateLandingImage(r) if r.image_uri == PLACEHOLDER_IMAGE_URI
    );
}
