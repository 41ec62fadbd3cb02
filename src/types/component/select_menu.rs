use crate::types::component::{ComponentEmoji, ComponentType};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Dropdown menu.
///
/// The wire discriminant depends on [`kind`](Self::kind), so the kind itself
/// is not a serialized field.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct SelectMenu {
    /// Channel types shown by a channel select.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_types: Option<Vec<u8>>,
    pub custom_id: String,
    #[serde(default)]
    pub disabled: bool,
    /// Optional identifier for the component.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip)]
    pub kind: SelectMenuType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_values: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_values: Option<u8>,
    /// Choices of a string select.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<SelectMenuOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

/// What a [`SelectMenu`] lets the user pick.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum SelectMenuType {
    /// Developer-supplied options.
    #[default]
    String,
    User,
    Role,
    Channel,
    /// Users and roles.
    Mentionable,
}

impl SelectMenuType {
    /// Tag accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::User => "user",
            Self::Role => "role",
            Self::Channel => "channel",
            Self::Mentionable => "mentionable",
        }
    }

    /// Placeholder used when none is supplied.
    pub const fn default_placeholder(self) -> &'static str {
        match self {
            Self::String => "Select an option...",
            Self::User => "Select users...",
            Self::Role => "Select roles...",
            Self::Channel => "Select channels...",
            Self::Mentionable => "Select mentionable...",
        }
    }

    pub const fn component_type(self) -> ComponentType {
        match self {
            Self::String => ComponentType::StringSelect,
            Self::User => ComponentType::UserSelect,
            Self::Role => ComponentType::RoleSelect,
            Self::Channel => ComponentType::ChannelSelect,
            Self::Mentionable => ComponentType::MentionableSelect,
        }
    }

    pub const fn from_component_type(kind: ComponentType) -> Option<Self> {
        Some(match kind {
            ComponentType::StringSelect => Self::String,
            ComponentType::UserSelect => Self::User,
            ComponentType::RoleSelect => Self::Role,
            ComponentType::ChannelSelect => Self::Channel,
            ComponentType::MentionableSelect => Self::Mentionable,
            _ => return None,
        })
    }
}

impl FromStr for SelectMenuType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "string" => Self::String,
            "user" => Self::User,
            "role" => Self::Role,
            "channel" => Self::Channel,
            "mentionable" => Self::Mentionable,
            _ => return Err(()),
        })
    }
}

/// Choice of a string [`SelectMenu`].
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct SelectMenuOption {
    #[serde(default, skip_serializing_if = "crate::types::util::is_false")]
    pub default: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<ComponentEmoji>,
    pub label: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::{ComponentType, SelectMenuType};

    #[test]
    fn type_round_trips_through_component_type() {
        for kind in [
            SelectMenuType::String,
            SelectMenuType::User,
            SelectMenuType::Role,
            SelectMenuType::Channel,
            SelectMenuType::Mentionable,
        ] {
            assert_eq!(
                SelectMenuType::from_component_type(kind.component_type()),
                Some(kind)
            );
            assert_eq!(kind.name().parse(), Ok(kind));
        }
        assert_eq!(SelectMenuType::from_component_type(ComponentType::Button), None);
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert_eq!("emoji".parse::<SelectMenuType>(), Err(()));
    }
}
