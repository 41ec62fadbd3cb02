use serde::{Deserialize, Serialize};

/// Reference to media by URL.
///
/// `attachment://<filename>` references a file uploaded with the message.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct UnfurledMediaItem {
    pub url: String,
}

impl UnfurledMediaItem {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Grid of images and videos.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct MediaGallery {
    /// Optional identifier for the component.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub items: Vec<MediaGalleryItem>,
}

/// Entry of a [`MediaGallery`].
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct MediaGalleryItem {
    /// Alt text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub media: UnfurledMediaItem,
    #[serde(default, skip_serializing_if = "crate::types::util::is_false")]
    pub spoiler: bool,
}

/// Uploaded file shown inline.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct FileDisplay {
    /// Must be an `attachment://` reference.
    pub file: UnfurledMediaItem,
    /// Optional identifier for the component.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(default, skip_serializing_if = "crate::types::util::is_false")]
    pub spoiler: bool,
}
