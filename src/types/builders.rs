//! Node factories: turn caller option records into validated components.
//!
//! Every factory either returns a finished node or fails before the caller
//! has touched any state, so a failed `add_*` on
//! [`MessageBuilder`](crate::MessageBuilder) leaves the builder unchanged.
//!
//! [`container`] is the container assembler: it dispatches each child
//! descriptor to the matching factory and wraps interactive children in
//! their own action row.

use crate::{
    error::{ComponentError, ComponentErrorType, Limit},
    limits::ComponentLimits,
    options::{
        AccessoryOptions, ButtonOptions, ComponentDescriptor, ContainerOptions, FileOptions,
        MediaGalleryOptions, SectionOptions, SelectMenuOptions, SelectOptionSpec,
        SeparatorOptions, StyleToken, TextOptions, ThumbnailOptions,
    },
    types::{
        component::{
            ActionRow, Button, ButtonStyle, Component, ComponentEmoji, Container, FileDisplay,
            MediaGallery, MediaGalleryItem, Section, SelectMenu, SelectMenuOption,
            SelectMenuType, Separator, TextDisplay, Thumbnail, UnfurledMediaItem,
        },
        util::resolve_color,
    },
};

/// Most text displays a section can hold.
pub const SECTION_TEXT_LIMIT: usize = 3;

// ===========================================================================
// Leaf factories
// ===========================================================================

/// Build a text display, rejecting content longer than
/// [`ComponentLimits::max_text_length`].
pub fn text_display(
    options: TextOptions,
    limits: &ComponentLimits,
) -> Result<TextDisplay, ComponentError> {
    let text = TextDisplay {
        content: options.content,
        id: options.id,
    };

    if text.len() > limits.max_text_length {
        return Err(ComponentError::limit(
            Limit::TextLength,
            text.len(),
            limits.max_text_length,
        ));
    }

    Ok(text)
}

/// Build a button.
///
/// The style token is resolved first; then the target is checked: `Link`
/// buttons need a `url` and no `custom_id`, every other style the reverse.
pub fn button(options: ButtonOptions) -> Result<Button, ComponentError> {
    let style = resolve_style(&options.style)?;

    let target_ok = match style {
        ButtonStyle::Link => options.url.is_some() && options.custom_id.is_none(),
        ButtonStyle::Primary
        | ButtonStyle::Secondary
        | ButtonStyle::Success
        | ButtonStyle::Danger => options.custom_id.is_some() && options.url.is_none(),
    };
    if !target_ok {
        return Err(ComponentErrorType::InvalidButtonTarget { style }.into());
    }

    Ok(Button {
        custom_id: options.custom_id,
        disabled: options.disabled,
        emoji: options.emoji.as_deref().map(ComponentEmoji::parse),
        id: options.id,
        label: Some(options.label),
        style,
        url: options.url,
    })
}

fn resolve_style(token: &StyleToken) -> Result<ButtonStyle, ComponentError> {
    let style = match token {
        StyleToken::Raw(raw) => u8::try_from(*raw)
            .ok()
            .and_then(|raw| ButtonStyle::try_from(raw).ok()),
        StyleToken::Name(name) => name.parse().ok(),
    };

    style.ok_or_else(|| {
        ComponentErrorType::UnsupportedStyle {
            style: token.to_string(),
        }
        .into()
    })
}

/// Build a select menu, dispatching on its type tag.
pub fn select_menu(
    options: SelectMenuOptions,
    limits: &ComponentLimits,
) -> Result<SelectMenu, ComponentError> {
    let kind: SelectMenuType = options.kind.parse().map_err(|()| {
        ComponentError::from(ComponentErrorType::UnsupportedSelectType {
            kind: options.kind.clone(),
        })
    })?;

    let choices = match kind {
        SelectMenuType::String => {
            if options.options.len() > limits.max_select_options {
                return Err(ComponentError::limit(
                    Limit::SelectOptions,
                    options.options.len(),
                    limits.max_select_options,
                ));
            }
            Some(options.options.into_iter().map(select_option).collect())
        }
        SelectMenuType::User
        | SelectMenuType::Role
        | SelectMenuType::Channel
        | SelectMenuType::Mentionable => None,
    };

    let channel_types = match kind {
        SelectMenuType::Channel => options.channel_types,
        _ => None,
    };

    Ok(SelectMenu {
        channel_types,
        custom_id: options.custom_id,
        disabled: options.disabled,
        id: options.id,
        kind,
        max_values: options.max_values,
        min_values: options.min_values,
        options: choices,
        placeholder: Some(
            options
                .placeholder
                .unwrap_or_else(|| kind.default_placeholder().to_owned()),
        ),
    })
}

fn select_option(spec: SelectOptionSpec) -> SelectMenuOption {
    SelectMenuOption {
        default: spec.default,
        description: spec.description,
        emoji: spec.emoji.as_deref().map(ComponentEmoji::parse),
        label: spec.label,
        value: spec.value,
    }
}

/// Build a separator.
pub fn separator(options: SeparatorOptions) -> Separator {
    Separator {
        divider: options.divider,
        id: options.id,
        spacing: options.spacing,
    }
}

/// Build a media gallery, rejecting more than
/// [`ComponentLimits::max_media_items`] items.
pub fn media_gallery(
    options: MediaGalleryOptions,
    limits: &ComponentLimits,
) -> Result<MediaGallery, ComponentError> {
    if options.items.len() > limits.max_media_items {
        return Err(ComponentError::limit(
            Limit::MediaItems,
            options.items.len(),
            limits.max_media_items,
        ));
    }

    let items = options
        .items
        .into_iter()
        .map(|item| MediaGalleryItem {
            description: item.description,
            media: UnfurledMediaItem::new(item.url),
            spoiler: item.spoiler,
        })
        .collect();

    Ok(MediaGallery {
        id: options.id,
        items,
    })
}

/// Build a file display.
pub fn file(options: FileOptions) -> FileDisplay {
    FileDisplay {
        file: UnfurledMediaItem::new(options.url),
        id: options.id,
        spoiler: options.spoiler,
    }
}

/// Build a thumbnail accessory.
pub fn thumbnail(options: ThumbnailOptions) -> Thumbnail {
    Thumbnail {
        description: options.description,
        id: options.id,
        media: UnfurledMediaItem::new(options.url),
        spoiler: options.spoiler,
    }
}

/// Wrap a single interactive component in its own action row.
pub fn action_row(component: impl Into<Component>) -> Component {
    Component::ActionRow(ActionRow::single(component))
}

// ===========================================================================
// Composite factories
// ===========================================================================

/// Build a section of up to [`SECTION_TEXT_LIMIT`] text displays.
pub fn section(
    options: SectionOptions,
    limits: &ComponentLimits,
) -> Result<Section, ComponentError> {
    if options.texts.len() > SECTION_TEXT_LIMIT {
        return Err(ComponentError::limit(
            Limit::SectionTexts,
            options.texts.len(),
            SECTION_TEXT_LIMIT,
        ));
    }

    let components = options
        .texts
        .into_iter()
        .map(|text| text_display(TextOptions::new(text), limits).map(Component::TextDisplay))
        .collect::<Result<Vec<_>, _>>()?;

    let accessory = match options.accessory {
        Some(AccessoryOptions::Button(button_options)) => {
            Some(Box::new(Component::Button(button(button_options)?)))
        }
        Some(AccessoryOptions::Thumbnail(thumbnail_options)) => {
            Some(Box::new(Component::Thumbnail(thumbnail(thumbnail_options))))
        }
        None => None,
    };

    Ok(Section {
        accessory,
        components,
        id: options.id,
    })
}

/// Assemble a container from its child descriptors.
///
/// Children are built in order; the first failing child aborts the whole
/// container. Buttons and select menus each get their own action row.
pub fn container(
    options: ContainerOptions,
    limits: &ComponentLimits,
) -> Result<Container, ComponentError> {
    let accent_color = options
        .accent_color
        .as_ref()
        .map(resolve_color)
        .transpose()?;

    let components = options
        .children
        .into_iter()
        .map(|child| container_child(child, limits))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Container {
        accent_color,
        components,
        id: options.id,
        spoiler: options.spoiler,
    })
}

fn container_child(
    child: ComponentDescriptor,
    limits: &ComponentLimits,
) -> Result<Component, ComponentError> {
    Ok(match child {
        ComponentDescriptor::Text(options) => Component::TextDisplay(text_display(options, limits)?),
        ComponentDescriptor::Button(options) => action_row(button(options)?),
        ComponentDescriptor::Select(options) => action_row(select_menu(options, limits)?),
        ComponentDescriptor::Separator(options) => Component::Separator(separator(options)),
        ComponentDescriptor::Section(options) => Component::Section(section(options, limits)?),
        unsupported @ (ComponentDescriptor::Container(_)
        | ComponentDescriptor::MediaGallery(_)
        | ComponentDescriptor::File(_)
        | ComponentDescriptor::Unsupported(_)) => {
            return Err(ComponentErrorType::UnsupportedChildType {
                kind: unsupported.tag().to_owned(),
            }
            .into())
        }
    })
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{options::MediaItem, types::ComponentType};

    fn limits() -> ComponentLimits {
        ComponentLimits::default()
    }

    #[test]
    fn text_display_enforces_length() {
        assert!(text_display(TextOptions::new("A".repeat(4000)), &limits()).is_ok());

        let err = text_display(TextOptions::new("A".repeat(4001)), &limits()).unwrap_err();
        assert_eq!(
            err.kind(),
            &ComponentErrorType::LimitExceeded {
                limit: Limit::TextLength,
                observed: 4001,
                allowed: 4000,
            }
        );
    }

    #[test]
    fn button_creates_correct_component() {
        let btn = button(ButtonOptions::new("success", "OK").custom_id("btn_ok")).unwrap();
        assert_eq!(btn.label.as_deref(), Some("OK"));
        assert_eq!(btn.custom_id.as_deref(), Some("btn_ok"));
        assert_eq!(btn.style, ButtonStyle::Success);
        assert!(btn.url.is_none());
    }

    #[test]
    fn link_button_has_url_and_no_custom_id() {
        let btn = button(ButtonOptions::link("Visit", "https://example.com")).unwrap();
        assert!(btn.custom_id.is_none());
        assert_eq!(btn.url.as_deref(), Some("https://example.com"));
        assert_eq!(btn.style, ButtonStyle::Link);
    }

    #[test]
    fn button_accepts_raw_style_and_emoji() {
        let btn = button(ButtonOptions::new(4u8, "Delete").custom_id("del").emoji("🗑️")).unwrap();
        assert_eq!(btn.style, ButtonStyle::Danger);
        assert_eq!(
            btn.emoji.and_then(|emoji| emoji.name).as_deref(),
            Some("🗑️")
        );
    }

    #[test]
    fn button_rejects_unknown_style() {
        let err = button(ButtonOptions::new("blurple", "X").custom_id("x")).unwrap_err();
        assert_eq!(
            err.kind(),
            &ComponentErrorType::UnsupportedStyle {
                style: "blurple".to_owned()
            }
        );

        let err = button(ButtonOptions::new(9u8, "X").custom_id("x")).unwrap_err();
        assert_eq!(
            err.kind(),
            &ComponentErrorType::UnsupportedStyle {
                style: "9".to_owned()
            }
        );
    }

    #[test]
    fn button_rejects_out_of_range_raw_style() {
        for raw in [300, -1, 0] {
            let options: ButtonOptions = serde_json::from_value(serde_json::json!({
                "style": raw,
                "label": "X",
                "customId": "x"
            }))
            .unwrap();
            let err = button(options).unwrap_err();
            assert_eq!(
                err.kind(),
                &ComponentErrorType::UnsupportedStyle {
                    style: raw.to_string()
                }
            );
        }
    }

    #[test]
    fn button_rejects_mismatched_target() {
        let cases = [
            ButtonOptions::new("primary", "X"),
            ButtonOptions::new("primary", "X").url("https://example.com"),
            ButtonOptions::new("primary", "X")
                .custom_id("x")
                .url("https://example.com"),
            ButtonOptions::new("link", "X"),
            ButtonOptions::new("link", "X").custom_id("x"),
        ];

        for options in cases {
            let err = button(options).unwrap_err();
            assert!(matches!(
                err.kind(),
                ComponentErrorType::InvalidButtonTarget { .. }
            ));
        }
    }

    #[test]
    fn string_select_carries_options_and_default_placeholder() {
        let menu = select_menu(
            SelectMenuOptions::string(
                "pick",
                vec![
                    SelectOptionSpec::new("One", "1"),
                    SelectOptionSpec::new("Two", "2").default(true),
                ],
            ),
            &limits(),
        )
        .unwrap();

        assert_eq!(menu.kind, SelectMenuType::String);
        assert_eq!(menu.placeholder.as_deref(), Some("Select an option..."));
        let options = menu.options.unwrap();
        assert_eq!(options.len(), 2);
        assert!(options[1].default);
    }

    #[test]
    fn select_dispatches_on_tag() {
        let menu = select_menu(
            SelectMenuOptions::new(SelectMenuType::Channel, "where")
                .channel_types(vec![0, 5])
                .placeholder("Pick a channel")
                .min_values(1)
                .max_values(2),
            &limits(),
        )
        .unwrap();
        assert_eq!(menu.kind, SelectMenuType::Channel);
        assert_eq!(menu.channel_types, Some(vec![0, 5]));
        assert_eq!(menu.placeholder.as_deref(), Some("Pick a channel"));
        assert!(menu.options.is_none());
        assert_eq!((menu.min_values, menu.max_values), (Some(1), Some(2)));

        let user = select_menu(SelectMenuOptions::from_tag("User", "who"), &limits()).unwrap();
        assert_eq!(user.kind, SelectMenuType::User);
        assert_eq!(user.placeholder.as_deref(), Some("Select users..."));
    }

    #[test]
    fn select_rejects_unknown_tag() {
        let err = select_menu(SelectMenuOptions::from_tag("emoji", "x"), &limits()).unwrap_err();
        assert_eq!(
            err.kind(),
            &ComponentErrorType::UnsupportedSelectType {
                kind: "emoji".to_owned()
            }
        );
    }

    #[test]
    fn select_enforces_option_limit() {
        let options = (0..26)
            .map(|i| SelectOptionSpec::new(format!("Option {i}"), i.to_string()))
            .collect();
        let err = select_menu(SelectMenuOptions::string("many", options), &limits()).unwrap_err();
        assert_eq!(
            err.kind(),
            &ComponentErrorType::LimitExceeded {
                limit: Limit::SelectOptions,
                observed: 26,
                allowed: 25,
            }
        );
    }

    #[test]
    fn media_gallery_enforces_item_limit() {
        let items: Vec<MediaItem> = (0..11)
            .map(|i| MediaItem::new(format!("https://example.com/{i}.png")))
            .collect();
        let err = media_gallery(items.into(), &limits()).unwrap_err();
        assert_eq!(
            err.kind(),
            &ComponentErrorType::LimitExceeded {
                limit: Limit::MediaItems,
                observed: 11,
                allowed: 10,
            }
        );
    }

    #[test]
    fn section_enforces_text_count() {
        let err = section(SectionOptions::new(["a", "b", "c", "d"]), &limits()).unwrap_err();
        assert_eq!(
            err.kind(),
            &ComponentErrorType::LimitExceeded {
                limit: Limit::SectionTexts,
                observed: 4,
                allowed: 3,
            }
        );
    }

    #[test]
    fn section_builds_accessories() {
        let with_button = section(
            SectionOptions::new(["Section with button"])
                .accessory(ButtonOptions::new("primary", "Test").custom_id("test-btn")),
            &limits(),
        )
        .unwrap();
        assert!(matches!(
            with_button.accessory.as_deref(),
            Some(Component::Button(_))
        ));

        let with_thumb = section(
            SectionOptions::new(["a", "b"]).accessory(ThumbnailOptions::new("https://x/y.png")),
            &limits(),
        )
        .unwrap();
        assert_eq!(with_thumb.components.len(), 2);
        assert!(matches!(
            with_thumb.accessory.as_deref(),
            Some(Component::Thumbnail(_))
        ));
    }

    #[test]
    fn container_wraps_interactive_children_individually() {
        let built = container(
            ContainerOptions::new()
                .accent_color(0x00FF00u32)
                .child(TextOptions::new("Title"))
                .child(ButtonOptions::new("primary", "A").custom_id("a"))
                .child(ButtonOptions::new("secondary", "B").custom_id("b"))
                .child(SelectMenuOptions::new(SelectMenuType::Role, "roles"))
                .child(SeparatorOptions::default())
                .child(SectionOptions::new(["nested"])),
            &limits(),
        )
        .unwrap();

        assert_eq!(built.accent_color, Some(0x00FF00));
        let kinds: Vec<_> = built.components.iter().map(Component::kind).collect();
        assert_eq!(
            kinds,
            vec![
                ComponentType::TextDisplay,
                ComponentType::ActionRow,
                ComponentType::ActionRow,
                ComponentType::ActionRow,
                ComponentType::Separator,
                ComponentType::Section,
            ]
        );
        for row in &built.components[1..4] {
            match row {
                Component::ActionRow(row) => assert_eq!(row.components.len(), 1),
                other => panic!("expected ActionRow, got {other:?}"),
            }
        }
    }

    #[test]
    fn container_rejects_unsupported_children() {
        for (child, tag) in [
            (ComponentDescriptor::File(FileOptions::new("attachment://a.txt")), "file"),
            (ComponentDescriptor::Container(ContainerOptions::new()), "container"),
            (ComponentDescriptor::Unsupported("poll".to_owned()), "poll"),
        ] {
            let err = container(ContainerOptions::new().child(child), &limits()).unwrap_err();
            assert_eq!(
                err.kind(),
                &ComponentErrorType::UnsupportedChildType {
                    kind: tag.to_owned()
                }
            );
        }
    }

    #[test]
    fn container_rejects_bad_color() {
        let err = container(ContainerOptions::new().accent_color("#nothex"), &limits()).unwrap_err();
        assert!(matches!(err.kind(), ComponentErrorType::InvalidColor { .. }));
    }
}
