use crate::types::component::{Component, UnfurledMediaItem};
use serde::{Deserialize, Serialize};

/// Up to three text displays shown next to an optional accessory.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Section {
    /// Button or thumbnail shown beside the text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessory: Option<Box<Component>>,
    /// Text displays, in order.
    pub components: Vec<Component>,
    /// Optional identifier for the component.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
}

/// Small image used as a [`Section`] accessory.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Thumbnail {
    /// Alt text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional identifier for the component.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub media: UnfurledMediaItem,
    #[serde(default, skip_serializing_if = "crate::types::util::is_false")]
    pub spoiler: bool,
}
