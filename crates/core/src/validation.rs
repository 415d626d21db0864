//! Field-level checks shared by every request validator.
//!
//! [`FieldChecks`] accumulates violations so a single validation pass
//! reports every offending field at once, then [`FieldChecks::finish`]
//! turns them into a [`ValidationFailure`].

use crate::data_uri::{DataUri, MediaKind};
use crate::error::{FieldError, ValidationFailure};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum decoded size of a single reference image (5 MiB).
pub const MAX_REFERENCE_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Maximum length of any free-text prompt field, in characters.
pub const MAX_TEXT_FIELD_CHARS: usize = 20_000;

// ---------------------------------------------------------------------------
// Accumulator
// ---------------------------------------------------------------------------

/// Collects field errors during one validation pass.
#[derive(Debug, Default)]
pub struct FieldChecks {
    errors: Vec<FieldError>,
}

impl FieldChecks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation for `field`.
    pub fn reject(&mut self, field: impl Into<String>, reason: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            reason: reason.into(),
        });
    }

    /// Require non-blank text within the global length limit.
    ///
    /// Returns the trimmed value when it passes.
    pub fn text<'a>(&mut self, field: &str, value: &'a str) -> Option<&'a str> {
        self.text_min(field, value, 1)
    }

    /// Require trimmed text of at least `min_chars` characters.
    pub fn text_min<'a>(&mut self, field: &str, value: &'a str, min_chars: usize) -> Option<&'a str> {
        let trimmed = value.trim();
        let len = trimmed.chars().count();
        if len == 0 {
            self.reject(field, "is required");
            None
        } else if len < min_chars {
            self.reject(field, format!("must be at least {min_chars} characters"));
            None
        } else if len > MAX_TEXT_FIELD_CHARS {
            self.reject(
                field,
                format!("must be at most {MAX_TEXT_FIELD_CHARS} characters (got {len})"),
            );
            None
        } else {
            Some(trimmed)
        }
    }

    /// Optional text: blank values are treated as absent, others are checked.
    pub fn optional_text(&mut self, field: &str, value: Option<&str>) -> Option<String> {
        match value.map(str::trim) {
            None | Some("") => None,
            Some(v) => self.text(field, v).map(str::to_string),
        }
    }

    /// Require an integer within `[min, max]`.
    pub fn range(&mut self, field: &str, value: u32, min: u32, max: u32) -> Option<u32> {
        if (min..=max).contains(&value) {
            Some(value)
        } else {
            self.reject(field, format!("must be between {min} and {max} (got {value})"));
            None
        }
    }

    /// Require a finite, strictly positive number.
    pub fn positive(&mut self, field: &str, value: f64) -> Option<f64> {
        if value.is_finite() && value > 0.0 {
            Some(value)
        } else {
            self.reject(field, format!("must be a positive number (got {value})"));
            None
        }
    }

    /// Require a well-formed data URI whose media kind is one of `allowed`.
    pub fn data_uri(&mut self, field: &str, value: &str, allowed: &[MediaKind]) -> Option<DataUri> {
        self.checked_data_uri(field, value, allowed, None)
    }

    /// Require a data URI whose decoded payload is at most `max_bytes`.
    ///
    /// Oversized payloads are rejected without being decoded.
    pub fn data_uri_within(
        &mut self,
        field: &str,
        value: &str,
        allowed: &[MediaKind],
        max_bytes: usize,
    ) -> Option<DataUri> {
        self.checked_data_uri(field, value, allowed, Some(max_bytes))
    }

    fn checked_data_uri(
        &mut self,
        field: &str,
        value: &str,
        allowed: &[MediaKind],
        max_bytes: Option<usize>,
    ) -> Option<DataUri> {
        if value.trim().is_empty() {
            self.reject(field, "is required");
            return None;
        }
        let parsed = match max_bytes {
            Some(max) => DataUri::parse_within(value, max),
            None => DataUri::parse(value),
        };
        let uri = match parsed {
            Ok(uri) => uri,
            Err(e) => {
                self.reject(field, e.to_string());
                return None;
            }
        };
        match uri.kind() {
            Some(kind) if allowed.contains(&kind) => Some(uri),
            _ => {
                let expected = allowed
                    .iter()
                    .map(|k| format!("{k}/*"))
                    .collect::<Vec<_>>()
                    .join(" or ");
                self.reject(
                    field,
                    format!("must be {expected} media (got {})", uri.essence()),
                );
                None
            }
        }
    }

    /// Finish the pass. `build` runs only when no field was rejected.
    pub fn finish<T>(self, build: impl FnOnce() -> Option<T>) -> Result<T, ValidationFailure> {
        if !self.errors.is_empty() {
            return Err(ValidationFailure {
                fields: self.errors,
            });
        }
        build().ok_or_else(|| ValidationFailure::single("request", "is incomplete"))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
