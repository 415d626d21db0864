/// Default Gemini REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
/// Model used for text and structured output.
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.0-flash";
/// Model used whenever image output is requested.
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.0-flash-exp";
/// Per-request HTTP timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 90;

/// Generative backend configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct GenAiConfig {
    /// API key sent in the `x-goog-api-key` header.
    pub api_key: String,
    pub base_url: String,
    pub text_model: String,
    pub image_model: String,
    pub timeout_secs: u64,
}

impl GenAiConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                       |
    /// |------------------------|-----------------------------------------------|
    /// | `GEMINI_API_KEY`       | required (falls back to `GOOGLE_API_KEY`)     |
    /// | `GENAI_BASE_URL`       | `https://generativelanguage.googleapis.com`   |
    /// | `GENAI_TEXT_MODEL`     | `gemini-2.0-flash`                            |
    /// | `GENAI_IMAGE_MODEL`    | `gemini-2.0-flash-exp`                        |
    /// | `GENAI_TIMEOUT_SECS`   | `90`                                          |
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("GOOGLE_API_KEY"))
            .expect("GEMINI_API_KEY or GOOGLE_API_KEY must be set in the environment");
        assert!(!api_key.is_empty(), "GEMINI_API_KEY must not be empty");

        let base_url = std::env::var("GENAI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.into())
            .trim_end_matches('/')
            .to_string();

        let text_model =
            std::env::var("GENAI_TEXT_MODEL").unwrap_or_else(|_| DEFAULT_TEXT_MODEL.into());
        let image_model =
            std::env::var("GENAI_IMAGE_MODEL").unwrap_or_else(|_| DEFAULT_IMAGE_MODEL.into());

        let timeout_secs: u64 = std::env::var("GENAI_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .expect("GENAI_TIMEOUT_SECS must be a valid u64");

        Self {
            api_key,
            base_url,
            text_model,
            image_model,
            timeout_secs,
        }
    }

    /// Config with default models against `base_url`.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            text_model: DEFAULT_TEXT_MODEL.into(),
            image_model: DEFAULT_IMAGE_MODEL.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
