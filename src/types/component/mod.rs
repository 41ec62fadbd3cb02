//! Message components: the node kinds a message body is assembled from.
//!
//! [`Component`] is a closed enum over every node kind. It serializes to the
//! platform schema, where each node is a JSON object carrying an integer
//! `type` discriminant ([`ComponentType`]) alongside its own fields.

mod action_row;
mod button;
mod container;
mod emoji;
mod media;
mod section;
mod select_menu;
mod separator;
mod text_display;

pub use self::{
    action_row::ActionRow,
    button::{Button, ButtonStyle},
    container::Container,
    emoji::ComponentEmoji,
    media::{FileDisplay, MediaGallery, MediaGalleryItem, UnfurledMediaItem},
    section::{Section, Thumbnail},
    select_menu::{SelectMenu, SelectMenuOption, SelectMenuType},
    separator::{Separator, SeparatorSpacingSize},
    text_display::TextDisplay,
};

use serde::{
    de::{Deserialize, Deserializer, Error as DeError},
    ser::{Serialize, Serializer},
};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::types::util::ValueExt;

/// Wire discriminant of a [`Component`].
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, Hash, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum ComponentType {
    ActionRow = 1,
    Button = 2,
    StringSelect = 3,
    UserSelect = 5,
    RoleSelect = 6,
    MentionableSelect = 7,
    ChannelSelect = 8,
    Section = 9,
    TextDisplay = 10,
    Thumbnail = 11,
    MediaGallery = 12,
    File = 13,
    Separator = 14,
    Container = 17,
}

impl ComponentType {
    /// Lowercase name used in logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ActionRow => "action_row",
            Self::Button => "button",
            Self::StringSelect => "string_select",
            Self::UserSelect => "user_select",
            Self::RoleSelect => "role_select",
            Self::MentionableSelect => "mentionable_select",
            Self::ChannelSelect => "channel_select",
            Self::Section => "section",
            Self::TextDisplay => "text_display",
            Self::Thumbnail => "thumbnail",
            Self::MediaGallery => "media_gallery",
            Self::File => "file",
            Self::Separator => "separator",
            Self::Container => "container",
        }
    }
}

/// A single node of a message body.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Component {
    /// Wrapper around interactive elements.
    ActionRow(ActionRow),
    /// Clickable button.
    Button(Button),
    /// Dropdown of choices, users, roles, channels, or mentionables.
    SelectMenu(SelectMenu),
    /// Markdown text block.
    TextDisplay(TextDisplay),
    /// Up to three text blocks with an optional accessory.
    Section(Section),
    /// Small image, only valid as a section accessory.
    Thumbnail(Thumbnail),
    /// Bordered group of child components.
    Container(Container),
    /// Vertical spacing, optionally with a divider line.
    Separator(Separator),
    /// Grid of images and videos.
    MediaGallery(MediaGallery),
    /// Attached file.
    File(FileDisplay),
}

impl Component {
    /// Wire discriminant of this node.
    pub const fn kind(&self) -> ComponentType {
        match self {
            Self::ActionRow(_) => ComponentType::ActionRow,
            Self::Button(_) => ComponentType::Button,
            Self::SelectMenu(menu) => menu.kind.component_type(),
            Self::TextDisplay(_) => ComponentType::TextDisplay,
            Self::Section(_) => ComponentType::Section,
            Self::Thumbnail(_) => ComponentType::Thumbnail,
            Self::Container(_) => ComponentType::Container,
            Self::Separator(_) => ComponentType::Separator,
            Self::MediaGallery(_) => ComponentType::MediaGallery,
            Self::File(_) => ComponentType::File,
        }
    }

    /// Number of characters of every text display in this node, wherever
    /// nested.
    pub fn text_length(&self) -> usize {
        match self {
            Self::TextDisplay(text) => text.len(),
            Self::Section(section) => section.components.iter().map(Self::text_length).sum(),
            Self::Container(container) => {
                container.components.iter().map(Self::text_length).sum()
            }
            Self::ActionRow(_)
            | Self::Button(_)
            | Self::SelectMenu(_)
            | Self::Thumbnail(_)
            | Self::Separator(_)
            | Self::MediaGallery(_)
            | Self::File(_) => 0,
        }
    }

    /// Content of every text display in this node, in document order.
    pub fn text_contents(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::TextDisplay(text) => out.push(&text.content),
            Self::Section(section) => section
                .components
                .iter()
                .for_each(|child| child.collect_text(out)),
            Self::Container(container) => container
                .components
                .iter()
                .for_each(|child| child.collect_text(out)),
            Self::ActionRow(_)
            | Self::Button(_)
            | Self::SelectMenu(_)
            | Self::Thumbnail(_)
            | Self::Separator(_)
            | Self::MediaGallery(_)
            | Self::File(_) => {}
        }
    }
}

impl From<ActionRow> for Component {
    fn from(row: ActionRow) -> Self {
        Self::ActionRow(row)
    }
}

impl From<Button> for Component {
    fn from(button: Button) -> Self {
        Self::Button(button)
    }
}

impl From<SelectMenu> for Component {
    fn from(menu: SelectMenu) -> Self {
        Self::SelectMenu(menu)
    }
}

impl From<TextDisplay> for Component {
    fn from(text: TextDisplay) -> Self {
        Self::TextDisplay(text)
    }
}

/// Serialization helper that prepends the `type` discriminant to a node's
/// own fields.
#[derive(serde::Serialize)]
struct Tagged<'a, T> {
    #[serde(rename = "type")]
    kind: ComponentType,
    #[serde(flatten)]
    data: &'a T,
}

impl Serialize for Component {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let kind = self.kind();

        match self {
            Self::ActionRow(data) => Tagged { kind, data }.serialize(serializer),
            Self::Button(data) => Tagged { kind, data }.serialize(serializer),
            Self::SelectMenu(data) => Tagged { kind, data }.serialize(serializer),
            Self::TextDisplay(data) => Tagged { kind, data }.serialize(serializer),
            Self::Section(data) => Tagged { kind, data }.serialize(serializer),
            Self::Thumbnail(data) => Tagged { kind, data }.serialize(serializer),
            Self::Container(data) => Tagged { kind, data }.serialize(serializer),
            Self::Separator(data) => Tagged { kind, data }.serialize(serializer),
            Self::MediaGallery(data) => Tagged { kind, data }.serialize(serializer),
            Self::File(data) => Tagged { kind, data }.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Component {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let kind: ComponentType = value
            .get("type")
            .cloned()
            .ok_or_else(|| DeError::missing_field("type"))?
            .deserialize_into()
            .map_err(DeError::custom)?;

        let component = match kind {
            ComponentType::ActionRow => value.deserialize_into().map(Self::ActionRow),
            ComponentType::Button => value.deserialize_into().map(Self::Button),
            ComponentType::StringSelect
            | ComponentType::UserSelect
            | ComponentType::RoleSelect
            | ComponentType::MentionableSelect
            | ComponentType::ChannelSelect => {
                value.deserialize_into().map(|mut menu: SelectMenu| {
                    menu.kind = SelectMenuType::from_component_type(kind)
                        .unwrap_or(SelectMenuType::String);
                    Self::SelectMenu(menu)
                })
            }
            ComponentType::Section => value.deserialize_into().map(Self::Section),
            ComponentType::TextDisplay => value.deserialize_into().map(Self::TextDisplay),
            ComponentType::Thumbnail => value.deserialize_into().map(Self::Thumbnail),
            ComponentType::MediaGallery => value.deserialize_into().map(Self::MediaGallery),
            ComponentType::File => value.deserialize_into().map(Self::File),
            ComponentType::Separator => value.deserialize_into().map(Self::Separator),
            ComponentType::Container => value.deserialize_into().map(Self::Container),
        };

        component.map_err(DeError::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use serde_test::Token;
    use static_assertions::assert_impl_all;
    use std::fmt::Debug;

    assert_impl_all!(Component: Clone, Debug, Eq, PartialEq, Send, Sync);
    assert_impl_all!(ComponentType: Clone, Copy, Debug, Eq, Send, Sync);

    #[test]
    fn component_type_is_integer_on_the_wire() {
        serde_test::assert_tokens(&ComponentType::Container, &[Token::U8(17)]);
        serde_test::assert_tokens(&ComponentType::TextDisplay, &[Token::U8(10)]);
        serde_test::assert_tokens(&ComponentType::ActionRow, &[Token::U8(1)]);
    }

    fn container() -> Component {
        Component::Container(Container {
            accent_color: Some(0xFF0000),
            components: vec![
                Component::TextDisplay(TextDisplay::new("Title")),
                Component::Section(Section {
                    accessory: None,
                    components: vec![
                        Component::TextDisplay(TextDisplay::new("ab")),
                        Component::TextDisplay(TextDisplay::new("cde")),
                    ],
                    id: None,
                }),
                Component::Separator(Separator::default()),
            ],
            id: Some(4),
            spoiler: false,
        })
    }

    #[test]
    fn text_length_folds_nested_text() {
        assert_eq!(container().text_length(), 10);
        assert_eq!(
            Component::Separator(Separator::default()).text_length(),
            0
        );
    }

    #[test]
    fn text_contents_are_in_document_order() {
        assert_eq!(container().text_contents(), vec!["Title", "ab", "cde"]);
    }

    #[test]
    fn serializes_with_type_discriminant() {
        let value = serde_json::to_value(container()).unwrap();
        assert_eq!(value["type"], json!(17));
        assert_eq!(value["accent_color"], json!(0xFF0000));
        assert_eq!(value["id"], json!(4));
        assert_eq!(value["components"][0], json!({"type": 10, "content": "Title"}));
        assert_eq!(value["components"][1]["type"], json!(9));
        assert_eq!(value["components"][2]["type"], json!(14));
    }

    #[test]
    fn deserializes_what_it_serializes() {
        let original = container();
        let json = serde_json::to_string(&original).unwrap();
        let parsed: Component = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn deserializes_select_kind_from_type() {
        let parsed: Component = serde_json::from_value(json!({
            "type": 6,
            "custom_id": "roles",
            "placeholder": "Select roles..."
        }))
        .unwrap();

        match parsed {
            Component::SelectMenu(menu) => {
                assert_eq!(menu.kind, SelectMenuType::Role);
                assert_eq!(menu.custom_id, "roles");
            }
            other => panic!("expected SelectMenu, got {other:?}"),
        }
    }

    #[test]
    fn rejects_missing_and_unknown_type() {
        assert!(serde_json::from_value::<Component>(json!({"content": "x"})).is_err());
        assert!(serde_json::from_value::<Component>(json!({"type": 99})).is_err());
    }
}
