use serde::Serialize;

/// A single field-level constraint violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Field name as it appears in the JSON request (camelCase), with an
    /// index suffix for sequence items, e.g. `referenceImageUris[2]`.
    pub field: String,
    /// Human-readable reason the value was rejected.
    pub reason: String,
}

/// A request failed its structural contract before any backend call.
///
/// Carries every offending field, in declaration order of the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("Validation failed: {}", summary(.fields))]
pub struct ValidationFailure {
    pub fields: Vec<FieldError>,
}

impl ValidationFailure {
    /// Build a failure naming a single field.
    pub fn single(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            fields: vec![FieldError {
                field: field.into(),
                reason: reason.into(),
            }],
        }
    }

    /// Whether `field` is among the offending fields.
    pub fn names(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f.field == field)
    }

    /// Offending field names, in order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.field.as_str()).collect()
    }
}

fn summary(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|f| format!("{}: {}", f.field, f.reason))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors from parsing a `data:<mime>;base64,<payload>` string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataUriError {
    #[error("expected format 'data:<mimetype>;base64,<encoded_data>'")]
    Malformed,

    #[error("payload is empty")]
    EmptyPayload,

    #[error("payload is not valid base64")]
    InvalidBase64,

    #[error("must be at most {} MiB", .max_bytes / (1024 * 1024))]
    TooLarge { max_bytes: usize },
}
