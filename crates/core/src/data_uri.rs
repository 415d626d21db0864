//! `data:<mime>;base64,<payload>` parsing and media-kind classification.
//!
//! Every media input and output of the flows travels as a data URI; there
//! is no raw binary transport. [`DataUri`] keeps the original text so that
//! rendering it back is bit-exact.

use std::fmt;
use std::sync::LazyLock;

use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::{alphabet, Engine};
use regex::Regex;

use crate::error::DataUriError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Header of a base64 data URI: `data:<type>/<subtype>[;param=value]*;base64,`.
pub const DATA_URI_HEADER_PATTERN: &str = r"^data:([A-Za-z0-9][A-Za-z0-9!#$&^_.+-]*/[A-Za-z0-9][A-Za-z0-9!#$&^_.+-]*(?:;[A-Za-z0-9!#$&^_.+-]+=[A-Za-z0-9!#$&^_.+-]+)*);base64,";

static DATA_URI_HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DATA_URI_HEADER_PATTERN).expect("valid regex"));

/// Standard alphabet; both padded and unpadded payloads are accepted.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

// ---------------------------------------------------------------------------
// Media kinds
// ---------------------------------------------------------------------------

/// Top-level media type of a data URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    Audio,
}

impl MediaKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
            MediaKind::Audio => "audio",
        }
    }

    fn from_type(top_level: &str) -> Option<Self> {
        match top_level.to_ascii_lowercase().as_str() {
            "image" => Some(MediaKind::Image),
            "video" => Some(MediaKind::Video),
            "audio" => Some(MediaKind::Audio),
            _ => None,
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DataUri
// ---------------------------------------------------------------------------

/// Decoded size of a base64 payload, computed from its length alone.
fn decoded_len_of(payload: &str) -> usize {
    let bytes = payload.as_bytes();
    let padding = bytes.iter().rev().take_while(|&&b| b == b'=').count();
    (bytes.len() - padding) * 3 / 4
}

/// A parsed base64 data URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    raw: String,
    /// Byte offset of the payload within `raw`.
    payload_start: usize,
    /// Length of the MIME segment (including parameters) after `data:`.
    mime_len: usize,
}

impl DataUri {
    /// Parse and validate a data URI.
    ///
    /// The payload must be non-empty and decode as standard base64.
    pub fn parse(input: &str) -> Result<Self, DataUriError> {
        Self::parse_limited(input, None)
    }

    /// Like [`DataUri::parse`], but rejects payloads decoding to more than
    /// `max_bytes` before decoding them.
    pub fn parse_within(input: &str, max_bytes: usize) -> Result<Self, DataUriError> {
        Self::parse_limited(input, Some(max_bytes))
    }

    fn parse_limited(input: &str, max_bytes: Option<usize>) -> Result<Self, DataUriError> {
        let header = DATA_URI_HEADER_RE
            .captures(input)
            .ok_or(DataUriError::Malformed)?;
        let mime_len = header.get(1).map_or(0, |m| m.len());
        let payload_start = header.get(0).map_or(0, |m| m.end());

        let payload = &input[payload_start..];
        if payload.is_empty() {
            return Err(DataUriError::EmptyPayload);
        }
        if let Some(max_bytes) = max_bytes {
            if decoded_len_of(payload) > max_bytes {
                return Err(DataUriError::TooLarge { max_bytes });
            }
        }
        PAYLOAD_ENGINE
            .decode(payload)
            .map_err(|_| DataUriError::InvalidBase64)?;

        Ok(Self {
            raw: input.to_string(),
            payload_start,
            mime_len,
        })
    }

    /// Build a data URI from a MIME type and an already base64-encoded payload.
    pub fn from_parts(mime_type: &str, base64_payload: &str) -> Result<Self, DataUriError> {
        Self::parse(&format!("data:{mime_type};base64,{base64_payload}"))
    }

    /// Full MIME segment, including any parameters (e.g. `audio/webm;codecs=opus`).
    pub fn mime_type(&self) -> &str {
        &self.raw["data:".len().."data:".len() + self.mime_len]
    }

    /// MIME type without parameters.
    pub fn essence(&self) -> &str {
        self.mime_type().split(';').next().unwrap_or_default()
    }

    /// Media kind, when the top-level type is image, video, or audio.
    pub fn kind(&self) -> Option<MediaKind> {
        let top_level = self.essence().split('/').next().unwrap_or_default();
        MediaKind::from_type(top_level)
    }

    /// The base64 payload, exactly as sent.
    pub fn payload(&self) -> &str {
        &self.raw[self.payload_start..]
    }

    /// Size of the decoded payload in bytes.
    pub fn decoded_len(&self) -> usize {
        decoded_len_of(self.payload())
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn into_string(self) -> String {
        self.raw
    }
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl std::str::FromStr for DataUri {
    type Err = DataUriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
