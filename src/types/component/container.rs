use crate::types::component::Component;
use serde::{Deserialize, Serialize};

/// Bordered group of components with an optional accent color.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Container {
    /// 24-bit RGB color of the left border.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<u32>,
    /// Children, in render order.
    pub components: Vec<Component>,
    /// Optional identifier for the component.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(default, skip_serializing_if = "crate::types::util::is_false")]
    pub spoiler: bool,
}
