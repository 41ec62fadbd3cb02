//! Caller-supplied option records, one per node kind.
//!
//! Records deserialize from camelCase JSON (`customId`, `accentColor`, ...)
//! so a message can be described as data. Tags that select between variants
//! (button style, select menu type, descriptor `type`) are kept as raw tokens
//! here and resolved by the factories in [`crate::types::builders`], which
//! reject unknown tokens with a typed error.

use serde::{
    de::{Deserializer, Error as DeError},
    Deserialize, Serialize,
};
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::types::{
    util::{ColorInput, ValueExt},
    ButtonStyle, SelectMenuType, SeparatorSpacingSize,
};

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

/// Options for a text display.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextOptions {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
}

impl TextOptions {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            id: None,
        }
    }

    pub fn id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }
}

impl From<&str> for TextOptions {
    fn from(content: &str) -> Self {
        Self::new(content)
    }
}

impl From<String> for TextOptions {
    fn from(content: String) -> Self {
        Self::new(content)
    }
}

// ---------------------------------------------------------------------------
// Section
// ---------------------------------------------------------------------------

/// Options for a section: up to three text blocks and an optional accessory.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionOptions {
    /// Text blocks. In JSON, `text` is a single string or a list.
    #[serde(rename = "text", deserialize_with = "one_or_many")]
    pub texts: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessory: Option<AccessoryOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
}

impl SectionOptions {
    pub fn new<I>(texts: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            texts: texts.into_iter().map(Into::into).collect(),
            accessory: None,
            id: None,
        }
    }

    pub fn accessory(mut self, accessory: impl Into<AccessoryOptions>) -> Self {
        self.accessory = Some(accessory.into());
        self
    }

    pub fn id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }
}

fn one_or_many<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(text) => vec![text],
        OneOrMany::Many(texts) => texts,
    })
}

/// Element shown beside a section's text.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AccessoryOptions {
    Button(ButtonOptions),
    Thumbnail(ThumbnailOptions),
}

impl From<ButtonOptions> for AccessoryOptions {
    fn from(options: ButtonOptions) -> Self {
        Self::Button(options)
    }
}

impl From<ThumbnailOptions> for AccessoryOptions {
    fn from(options: ThumbnailOptions) -> Self {
        Self::Thumbnail(options)
    }
}

/// Options for a thumbnail accessory.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailOptions {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub spoiler: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
}

impl ThumbnailOptions {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            description: None,
            spoiler: false,
            id: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn spoiler(mut self, spoiler: bool) -> Self {
        self.spoiler = spoiler;
        self
    }
}

// ---------------------------------------------------------------------------
// Container
// ---------------------------------------------------------------------------

/// Options for a container.
///
/// Children may be text, buttons, select menus, separators, or sections.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContainerOptions {
    #[serde(default)]
    pub accent_color: Option<ColorInput>,
    #[serde(default)]
    pub spoiler: bool,
    #[serde(default)]
    pub children: Vec<ComponentDescriptor>,
    #[serde(default)]
    pub id: Option<i32>,
}

impl ContainerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accent_color(mut self, color: impl Into<ColorInput>) -> Self {
        self.accent_color = Some(color.into());
        self
    }

    pub fn spoiler(mut self, spoiler: bool) -> Self {
        self.spoiler = spoiler;
        self
    }

    /// Append a child.
    pub fn child(mut self, child: impl Into<ComponentDescriptor>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }
}

// ---------------------------------------------------------------------------
// Separator, media, file
// ---------------------------------------------------------------------------

/// Options for a separator.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeparatorOptions {
    #[serde(default = "default_divider")]
    pub divider: bool,
    #[serde(default)]
    pub spacing: SeparatorSpacingSize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
}

fn default_divider() -> bool {
    true
}

impl Default for SeparatorOptions {
    fn default() -> Self {
        Self {
            divider: true,
            spacing: SeparatorSpacingSize::Small,
            id: None,
        }
    }
}

impl SeparatorOptions {
    pub fn divider(mut self, divider: bool) -> Self {
        self.divider = divider;
        self
    }

    pub fn spacing(mut self, spacing: SeparatorSpacingSize) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }
}

/// One entry of a media gallery.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub spoiler: bool,
}

impl MediaItem {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            description: None,
            spoiler: false,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn spoiler(mut self, spoiler: bool) -> Self {
        self.spoiler = spoiler;
        self
    }
}

/// Options for a media gallery.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaGalleryOptions {
    pub items: Vec<MediaItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
}

impl From<Vec<MediaItem>> for MediaGalleryOptions {
    fn from(items: Vec<MediaItem>) -> Self {
        Self { items, id: None }
    }
}

/// Options for a file display.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileOptions {
    /// `attachment://` reference to an uploaded file.
    pub url: String,
    #[serde(default)]
    pub spoiler: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
}

impl FileOptions {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            spoiler: false,
            id: None,
        }
    }

    pub fn spoiler(mut self, spoiler: bool) -> Self {
        self.spoiler = spoiler;
        self
    }
}

// ---------------------------------------------------------------------------
// Button
// ---------------------------------------------------------------------------

/// Button style as supplied by a caller: a raw wire value or a symbolic
/// name such as `"primary"`.
///
/// Any integer is accepted here; out-of-range values are rejected when the
/// button is built.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StyleToken {
    Raw(i64),
    Name(String),
}

impl From<ButtonStyle> for StyleToken {
    fn from(style: ButtonStyle) -> Self {
        Self::Raw(i64::from(style as u8))
    }
}

impl From<u8> for StyleToken {
    fn from(raw: u8) -> Self {
        Self::Raw(i64::from(raw))
    }
}

impl From<&str> for StyleToken {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<String> for StyleToken {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl Display for StyleToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Raw(raw) => Display::fmt(raw, f),
            Self::Name(name) => f.write_str(name),
        }
    }
}

/// Options for a button.
///
/// `Link` buttons take a `url`; every other style takes a `custom_id`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonOptions {
    pub style: StyleToken,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Unicode emoji or `<:name:id>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
}

impl ButtonOptions {
    pub fn new(style: impl Into<StyleToken>, label: impl Into<String>) -> Self {
        Self {
            style: style.into(),
            label: label.into(),
            custom_id: None,
            url: None,
            emoji: None,
            disabled: false,
            id: None,
        }
    }

    /// Link button pointing at `url`.
    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(ButtonStyle::Link, label).url(url)
    }

    pub fn custom_id(mut self, custom_id: impl Into<String>) -> Self {
        self.custom_id = Some(custom_id.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = Some(emoji.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }
}

// ---------------------------------------------------------------------------
// Select menu
// ---------------------------------------------------------------------------

/// Options for a select menu.
///
/// `kind` is the select type tag (`string`, `user`, `role`, `channel`,
/// `mentionable`). In JSON it is `type`, or `selectType` inside a
/// [`ComponentDescriptor`] where `type` is already taken.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectMenuOptions {
    #[serde(rename = "type", alias = "selectType")]
    pub kind: String,
    pub custom_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_values: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_values: Option<u8>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    /// Choices; only used by string selects.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOptionSpec>,
    /// Channel type filter; only used by channel selects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_types: Option<Vec<u8>>,
}

impl SelectMenuOptions {
    pub fn new(kind: SelectMenuType, custom_id: impl Into<String>) -> Self {
        Self::from_tag(kind.name(), custom_id)
    }

    /// Select menu with an unchecked type tag.
    pub fn from_tag(kind: impl Into<String>, custom_id: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            custom_id: custom_id.into(),
            placeholder: None,
            min_values: None,
            max_values: None,
            disabled: false,
            id: None,
            options: Vec::new(),
            channel_types: None,
        }
    }

    /// String select offering `options`.
    pub fn string(custom_id: impl Into<String>, options: Vec<SelectOptionSpec>) -> Self {
        Self {
            options,
            ..Self::new(SelectMenuType::String, custom_id)
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn min_values(mut self, min_values: u8) -> Self {
        self.min_values = Some(min_values);
        self
    }

    pub fn max_values(mut self, max_values: u8) -> Self {
        self.max_values = Some(max_values);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn channel_types(mut self, channel_types: Vec<u8>) -> Self {
        self.channel_types = Some(channel_types);
        self
    }
}

/// One choice of a string select menu.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectOptionSpec {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(default)]
    pub default: bool,
}

impl SelectOptionSpec {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            description: None,
            emoji: None,
            default: false,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn default(mut self, default: bool) -> Self {
        self.default = default;
        self
    }
}

// ---------------------------------------------------------------------------
// Descriptors
// ---------------------------------------------------------------------------

/// Tagged `{type, ...fields}` record naming one node to add.
///
/// Used for container children and for whole-message documents. An
/// unrecognized `type` tag deserializes to [`Unsupported`] so that the
/// consumer can reject it with an error naming the tag.
///
/// [`Unsupported`]: Self::Unsupported
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ComponentDescriptor {
    Text(TextOptions),
    Section(SectionOptions),
    Container(ContainerOptions),
    Separator(SeparatorOptions),
    MediaGallery(MediaGalleryOptions),
    File(FileOptions),
    Button(ButtonOptions),
    Select(SelectMenuOptions),
    /// Tag that names no known node kind.
    Unsupported(String),
}

impl ComponentDescriptor {
    /// The `type` tag of this descriptor.
    pub fn tag(&self) -> &str {
        match self {
            Self::Text(_) => "text",
            Self::Section(_) => "section",
            Self::Container(_) => "container",
            Self::Separator(_) => "separator",
            Self::MediaGallery(_) => "media",
            Self::File(_) => "file",
            Self::Button(_) => "button",
            Self::Select(_) => "select",
            Self::Unsupported(tag) => tag,
        }
    }
}

impl<'de> Deserialize<'de> for ComponentDescriptor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut value = serde_json::Value::deserialize(deserializer)?;
        let tag = match value.as_object_mut().and_then(|map| map.remove("type")) {
            Some(serde_json::Value::String(tag)) => tag,
            Some(other) => {
                return Err(DeError::custom(format!(
                    "component type must be a string, got {other}"
                )))
            }
            None => return Err(DeError::missing_field("type")),
        };

        let descriptor = match tag.as_str() {
            "text" => value.deserialize_into().map(Self::Text),
            "section" => value.deserialize_into().map(Self::Section),
            "container" => value.deserialize_into().map(Self::Container),
            "separator" => value.deserialize_into().map(Self::Separator),
            "media" => value.deserialize_into().map(Self::MediaGallery),
            "file" => value.deserialize_into().map(Self::File),
            "button" => value.deserialize_into().map(Self::Button),
            "select" => value.deserialize_into().map(Self::Select),
            _ => return Ok(Self::Unsupported(tag)),
        };

        descriptor.map_err(|e| DeError::custom(format!("invalid {tag} component: {e}")))
    }
}

impl From<TextOptions> for ComponentDescriptor {
    fn from(options: TextOptions) -> Self {
        Self::Text(options)
    }
}

impl From<SectionOptions> for ComponentDescriptor {
    fn from(options: SectionOptions) -> Self {
        Self::Section(options)
    }
}

impl From<ContainerOptions> for ComponentDescriptor {
    fn from(options: ContainerOptions) -> Self {
        Self::Container(options)
    }
}

impl From<SeparatorOptions> for ComponentDescriptor {
    fn from(options: SeparatorOptions) -> Self {
        Self::Separator(options)
    }
}

impl From<MediaGalleryOptions> for ComponentDescriptor {
    fn from(options: MediaGalleryOptions) -> Self {
        Self::MediaGallery(options)
    }
}

impl From<FileOptions> for ComponentDescriptor {
    fn from(options: FileOptions) -> Self {
        Self::File(options)
    }
}

impl From<ButtonOptions> for ComponentDescriptor {
    fn from(options: ButtonOptions) -> Self {
        Self::Button(options)
    }
}

impl From<SelectMenuOptions> for ComponentDescriptor {
    fn from(options: SelectMenuOptions) -> Self {
        Self::Select(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn section_text_accepts_one_or_many() {
        let one: SectionOptions = serde_json::from_value(json!({"text": "a"})).unwrap();
        assert_eq!(one.texts, vec!["a"]);

        let many: SectionOptions =
            serde_json::from_value(json!({"text": ["a", "b", "c", "d"]})).unwrap();
        assert_eq!(many.texts.len(), 4);
    }

    #[test]
    fn section_accessory_is_tagged() {
        let section: SectionOptions = serde_json::from_value(json!({
            "text": "Profile",
            "accessory": {"type": "thumbnail", "url": "https://example.com/a.png"}
        }))
        .unwrap();
        assert_eq!(
            section.accessory,
            Some(AccessoryOptions::Thumbnail(ThumbnailOptions::new(
                "https://example.com/a.png"
            )))
        );
    }

    #[test]
    fn style_token_accepts_names_and_numbers() {
        let named: ButtonOptions = serde_json::from_value(
            json!({"style": "primary", "label": "X", "customId": "x"}),
        )
        .unwrap();
        assert_eq!(named.style, StyleToken::Name("primary".to_owned()));
        assert_eq!(named.custom_id.as_deref(), Some("x"));

        let raw: ButtonOptions =
            serde_json::from_value(json!({"style": 4, "label": "X", "customId": "x"})).unwrap();
        assert_eq!(raw.style, StyleToken::Raw(4));
        assert_eq!(StyleToken::from(ButtonStyle::Link), StyleToken::Raw(5));
    }

    #[test]
    fn descriptor_dispatches_on_type() {
        let children: Vec<ComponentDescriptor> = serde_json::from_value(json!([
            {"type": "text", "content": "Title"},
            {"type": "button", "customId": "btn", "label": "Button", "style": "primary"},
            {"type": "select", "selectType": "user", "customId": "who"},
            {"type": "separator", "divider": false, "spacing": 2},
            {"type": "section", "text": ["a", "b"]},
            {"type": "media", "items": [{"url": "https://example.com/1.png"}]},
            {"type": "file", "url": "attachment://report.pdf"}
        ]))
        .unwrap();

        let tags: Vec<&str> = children.iter().map(ComponentDescriptor::tag).collect();
        assert_eq!(
            tags,
            vec!["text", "button", "select", "separator", "section", "media", "file"]
        );

        match &children[2] {
            ComponentDescriptor::Select(select) => assert_eq!(select.kind, "user"),
            other => panic!("expected Select, got {other:?}"),
        }
        match &children[3] {
            ComponentDescriptor::Separator(separator) => {
                assert!(!separator.divider);
                assert_eq!(separator.spacing, SeparatorSpacingSize::Large);
            }
            other => panic!("expected Separator, got {other:?}"),
        }
    }

    #[test]
    fn unknown_descriptor_tag_is_kept() {
        let descriptor: ComponentDescriptor =
            serde_json::from_value(json!({"type": "poll", "question": "?"})).unwrap();
        assert_eq!(descriptor, ComponentDescriptor::Unsupported("poll".to_owned()));
        assert_eq!(descriptor.tag(), "poll");
    }

    #[test]
    fn descriptor_without_type_is_an_error() {
        assert!(serde_json::from_value::<ComponentDescriptor>(json!({"content": "x"})).is_err());
        assert!(serde_json::from_value::<ComponentDescriptor>(json!({"type": 3})).is_err());
    }

    #[test]
    fn malformed_known_descriptor_names_the_tag() {
        let err = serde_json::from_value::<ComponentDescriptor>(json!({"type": "text"}))
            .unwrap_err();
        assert!(err.to_string().contains("invalid text component"));
    }

    #[test]
    fn standalone_select_uses_type_field() {
        let select: SelectMenuOptions = serde_json::from_value(json!({
            "type": "string",
            "customId": "pick",
            "options": [{"label": "One", "value": "1"}]
        }))
        .unwrap();
        assert_eq!(select.kind, "string");
        assert_eq!(select.options, vec![SelectOptionSpec::new("One", "1")]);
    }

    #[test]
    fn separator_options_take_an_id() {
        let options = SeparatorOptions::default()
            .spacing(SeparatorSpacingSize::Large)
            .id(7);
        assert_eq!(options.id, Some(7));
        assert!(options.divider);
    }

    #[test]
    fn container_children_build_fluently() {
        let options = ContainerOptions::new()
            .accent_color("#FF0000")
            .child(TextOptions::new("Title"))
            .child(ButtonOptions::new("primary", "Go").custom_id("go"));
        assert_eq!(options.children.len(), 2);
        assert_eq!(options.accent_color, Some(ColorInput::Hex("#FF0000".to_owned())));
    }
}
