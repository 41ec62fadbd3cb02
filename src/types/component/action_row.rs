use crate::types::component::Component;
use serde::{Deserialize, Serialize};

/// Wrapper around interactive components.
///
/// Standalone buttons and select menus always sit in their own row.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ActionRow {
    /// Wrapped components.
    pub components: Vec<Component>,
    /// Optional identifier for the component.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
}

impl ActionRow {
    /// Wrap a single component.
    pub fn single(component: impl Into<Component>) -> Self {
        Self {
            components: vec![component.into()],
            id: None,
        }
    }
}
