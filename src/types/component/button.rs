use crate::types::component::ComponentEmoji;
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::str::FromStr;

/// Clickable button.
///
/// `Link` buttons open [`url`](Self::url); every other style sends an
/// interaction carrying [`custom_id`](Self::custom_id).
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Button {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<ComponentEmoji>,
    /// Optional identifier for the component.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub style: ButtonStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Visual style of a [`Button`].
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, Hash, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum ButtonStyle {
    /// Blurple, action-triggering.
    Primary = 1,
    /// Grey, action-triggering.
    Secondary = 2,
    /// Green, action-triggering.
    Success = 3,
    /// Red, action-triggering.
    Danger = 4,
    /// Grey, navigates to a URL.
    Link = 5,
}

impl ButtonStyle {
    /// Symbolic name accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Link => "link",
        }
    }
}

impl TryFrom<u8> for ButtonStyle {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            1 => Self::Primary,
            2 => Self::Secondary,
            3 => Self::Success,
            4 => Self::Danger,
            5 => Self::Link,
            other => return Err(other),
        })
    }
}

impl FromStr for ButtonStyle {
    type Err = ();

    /// Parse a case-insensitive style name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            Self::Primary,
            Self::Secondary,
            Self::Success,
            Self::Danger,
            Self::Link,
        ]
        .into_iter()
        .find(|style| style.name().eq_ignore_ascii_case(s.trim()))
        .ok_or(())
    }
}
