//! Best-effort conversion of layout components into the legacy schema.
//!
//! The legacy schema only knows action rows of buttons and select menus, so
//! text is approximated by disabled placeholder buttons and everything
//! without a clickable analog is dropped. The conversion never fails; lost
//! content is expected.
//!
//! | Node | Legacy output |
//! |---|---|
//! | Text display | Row with one disabled button labeled with the text |
//! | Section, container | Row of one disabled button per nested text, first [`ROW_CAPACITY`] only |
//! | Action row | Unchanged |
//! | Separator, media gallery, file, thumbnail | Nothing |

use std::collections::HashSet;

use tracing::debug;

use crate::types::{
    builders::action_row,
    component::{ActionRow, Button, ButtonStyle, Component},
};

/// Characters (`char`s) of text kept in a placeholder button label.
pub const LABEL_LIMIT: usize = 80;

/// Buttons an action row can hold.
pub const ROW_CAPACITY: usize = 5;

/// Label used when the source text is empty.
const EMPTY_LABEL: &str = "Text";

/// Source of `custom_id`s for placeholder buttons.
///
/// Ids are `legacy_<kind>_<n>` with `n` counting up from zero across one
/// conversion. Ids already used by the message are skipped.
#[derive(Debug, Default)]
pub struct LegacyIds {
    next: usize,
    taken: HashSet<String>,
}

impl LegacyIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator that never hands out a `custom_id` present in `nodes`.
    pub fn reserving(nodes: &[Component]) -> Self {
        let mut ids = Self::new();
        nodes.iter().for_each(|node| ids.reserve(node));
        ids
    }

    fn reserve(&mut self, node: &Component) {
        match node {
            Component::Button(button) => {
                if let Some(custom_id) = &button.custom_id {
                    self.taken.insert(custom_id.clone());
                }
            }
            Component::SelectMenu(menu) => {
                self.taken.insert(menu.custom_id.clone());
            }
            Component::ActionRow(row) => row.components.iter().for_each(|c| self.reserve(c)),
            Component::Container(container) => {
                container.components.iter().for_each(|c| self.reserve(c))
            }
            Component::Section(section) => {
                if let Some(accessory) = &section.accessory {
                    self.reserve(accessory);
                }
            }
            Component::TextDisplay(_)
            | Component::Thumbnail(_)
            | Component::Separator(_)
            | Component::MediaGallery(_)
            | Component::File(_) => {}
        }
    }

    /// Next unused id for a placeholder derived from a `kind` node.
    pub fn next_id(&mut self, kind: &str) -> String {
        loop {
            let id = format!("legacy_{kind}_{}", self.next);
            self.next += 1;
            if self.taken.insert(id.clone()) {
                return id;
            }
        }
    }
}

/// Convert one node into at most one legacy node.
pub fn convert(node: &Component, ids: &mut LegacyIds) -> Option<Component> {
    match node {
        Component::TextDisplay(text) => {
            Some(placeholder_row(&[text.content.as_str()], "text", ids))
        }
        Component::Section(_) => text_row(node, "section", ids),
        Component::Container(_) => text_row(node, "container", ids),
        Component::ActionRow(_) => Some(node.clone()),
        Component::Button(_) | Component::SelectMenu(_) => Some(action_row(node.clone())),
        Component::Separator(_)
        | Component::MediaGallery(_)
        | Component::File(_)
        | Component::Thumbnail(_) => {
            debug!(kind = node.kind().name(), "no legacy equivalent, dropping");
            None
        }
    }
}

/// Convert a whole message, preserving order and skipping dropped nodes.
pub fn convert_all(nodes: &[Component]) -> Vec<Component> {
    let mut ids = LegacyIds::reserving(nodes);
    nodes
        .iter()
        .filter_map(|node| convert(node, &mut ids))
        .collect()
}

fn text_row(node: &Component, kind: &str, ids: &mut LegacyIds) -> Option<Component> {
    let texts = node.text_contents();
    if texts.is_empty() {
        debug!(kind, "no text to convert, dropping");
        return None;
    }

    if texts.len() > ROW_CAPACITY {
        debug!(
            kind,
            texts = texts.len(),
            kept = ROW_CAPACITY,
            "truncating legacy row"
        );
    }

    let kept = &texts[..texts.len().min(ROW_CAPACITY)];
    Some(placeholder_row(kept, kind, ids))
}

fn placeholder_row(texts: &[&str], kind: &str, ids: &mut LegacyIds) -> Component {
    let components = texts
        .iter()
        .map(|text| {
            Component::Button(Button {
                custom_id: Some(ids.next_id(kind)),
                disabled: true,
                emoji: None,
                id: None,
                label: Some(label(text)),
                style: ButtonStyle::Secondary,
                url: None,
            })
        })
        .collect();

    Component::ActionRow(ActionRow {
        components,
        id: None,
    })
}

fn label(text: &str) -> String {
    if text.is_empty() {
        return EMPTY_LABEL.to_owned();
    }

    text.chars().take(LABEL_LIMIT).collect()
}
