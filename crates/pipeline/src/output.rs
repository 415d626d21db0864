//! Checks applied to generated output before it is returned.

use zikcut_core::data_uri::{DataUri, MediaKind};

use crate::error::FlowError;

/// Accept a generated media field only if it is a complete data URI of `kind`.
///
/// Truncated or malformed URIs and URIs of another kind count as no media.
pub fn require_media_uri(uri: String, kind: MediaKind, what: &str) -> Result<String, FlowError> {
    let trimmed = uri.trim();
    match DataUri::parse(trimmed) {
        Ok(parsed) if parsed.kind() == Some(kind) => Ok(parsed.into_string()),
        Ok(parsed) => {
            tracing::warn!(expected = %kind, got = parsed.essence(), what, "Generated media has the wrong kind");
            Err(FlowError::EmptyGenerationResult(what.to_string()))
        }
        Err(e) => {
            tracing::warn!(expected = %kind, error = %e, what, "Generated media field is not a data URI");
            Err(FlowError::EmptyGenerationResult(what.to_string()))
        }
    }
}

/// Accept generated text only if it is not blank.
pub fn require_text(text: String, what: &str) -> Result<String, FlowError> {
    let text = text.trim().to_string();
    if text.is_empty() {
        tracing::warn!(what, "Generated text field was blank");
        return Err(FlowError::EmptyGenerationResult(what.to_string()));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn media_kind_must_match() {
        assert_eq!(
            require_media_uri(" data:video/mp4;base64,AAAA ".into(), MediaKind::Video, "reel").unwrap(),
            "data:video/mp4;base64,AAAA"
        );
        assert_matches!(
            require_media_uri("data:image/png;base64,AAAA".into(), MediaKind::Video, "reel"),
            Err(FlowError::EmptyGenerationResult(w)) if w == "reel"
        );
        assert_matches!(
            require_media_uri(String::new(), MediaKind::Audio, "reel"),
            Err(FlowError::EmptyGenerationResult(_))
        );
    }

    #[test]
    fn truncated_media_uri_rejected() {
        for truncated in ["data:video", "data:video/mp4", "data:video/mp4;base64,", "data:video/mp4;base64,%%%"] {
            assert_matches!(
                require_media_uri(truncated.into(), MediaKind::Video, "reel"),
                Err(FlowError::EmptyGenerationResult(_)),
                "{truncated} should be rejected"
            );
        }
    }

    #[test]
    fn blank_text_rejected() {
        assert!(require_text("  ".into(), "summary").is_err());
        assert_eq!(require_text(" ok ".into(), "summary").unwrap(), "ok");
    }
}
