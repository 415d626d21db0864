//! Static catalog of the flows the service exposes.

use serde::Serialize;

/// One exposed flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowDescriptor {
    /// Flow name, matching the `flow` tag of a tagged request where one exists.
    pub name: &'static str,
    /// Route under the API prefix.
    pub path: &'static str,
    pub summary: &'static str,
}

pub const FLOWS: &[FlowDescriptor] = &[
    FlowDescriptor {
        name: "createHighlightReel",
        path: "/flows/highlight-reel",
        summary: "Cut a highlight reel from a recorded stream and summarize it",
    },
    FlowDescriptor {
        name: "createShortFormVideo",
        path: "/flows/short-form-video",
        summary: "Cut a short vertical video with description and tags",
    },
    FlowDescriptor {
        name: "generateThumbnails",
        path: "/flows/thumbnails",
        summary: "Generate a batch of thumbnail or album-art images",
    },
    FlowDescriptor {
        name: "translateText",
        path: "/flows/translate",
        summary: "Translate live stream speech into a target language",
    },
    FlowDescriptor {
        name: "writeLyrics",
        path: "/flows/lyrics",
        summary: "Write song lyrics from a topic, style and mood brief",
    },
    FlowDescriptor {
        name: "generateLandingImage",
        path: "/flows/landing-image",
        summary: "Generate a landing-page image, falling back to a placeholder",
    },
];
