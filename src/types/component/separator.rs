use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Vertical padding between components, optionally with a divider line.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Separator {
    #[serde(default = "default_divider")]
    pub divider: bool,
    /// Optional identifier for the component.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(default)]
    pub spacing: SeparatorSpacingSize,
}

fn default_divider() -> bool {
    true
}

impl Default for Separator {
    fn default() -> Self {
        Self {
            divider: true,
            id: None,
            spacing: SeparatorSpacingSize::Small,
        }
    }
}

/// Amount of padding a [`Separator`] adds.
#[derive(
    Clone, Copy, Debug, Default, Deserialize_repr, Eq, Hash, PartialEq, Serialize_repr,
)]
#[repr(u8)]
pub enum SeparatorSpacingSize {
    #[default]
    Small = 1,
    Large = 2,
}
