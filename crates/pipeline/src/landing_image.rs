//! Marketing landing-page image.
//!
//! Unlike every other flow this one never fails: any error, including a
//! rejected request, is replaced by a fixed placeholder image URL.

use zikcut_core::data_uri::MediaKind;
use zikcut_core::request::{LandingImageRequest, Validate};
use zikcut_core::result::LandingImageResult;
use zikcut_core::templates::landing_image_prompt;
use zikcut_genai::invoker::Invoker;

use crate::error::FlowError;

/// Returned whenever generation does not produce an image.
pub const PLACEHOLDER_IMAGE_URI: &str =
    "https://placehold.co/600x400.png?text=Image+Generation+Error";

pub async fn generate_landing_image(
    invoker: &Invoker,
    request: &LandingImageRequest,
) -> LandingImageResult {
    match try_generate(invoker, request).await {
        Ok(image_uri) => LandingImageResult { image_uri },
        Err(e) => {
            tracing::warn!(error = %e, "Landing image generation failed, using placeholder");
            LandingImageResult {
                image_uri: PLACEHOLDER_IMAGE_URI.to_string(),
            }
        }
    }
}

async fn try_generate(invoker: &Invoker, request: &LandingImageRequest) -> Result<String, FlowError> {
    let input = request.validate()?;
    tracing::info!(flow = "generateLandingImage", "Flow started");
    let uri = invoker
        .media(&landing_image_prompt(&input), MediaKind::Image)
        .await?;
    Ok(uri.into_string())
}
