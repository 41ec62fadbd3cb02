//! Structural ceilings enforced by the message builder.
//!
//! [`ComponentLimits`] carries the platform defaults. Partial overrides come
//! from Rust struct-update syntax, from [`LimitOverrides`] (JSON documents),
//! or from the environment via [`ComponentLimits::from_env`].

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Environment variable overriding [`ComponentLimits::max_components`].
pub const MAX_COMPONENTS_VAR: &str = "CV2_MAX_COMPONENTS";
/// Environment variable overriding [`ComponentLimits::max_text_length`].
pub const MAX_TEXT_LENGTH_VAR: &str = "CV2_MAX_TEXT_LENGTH";
/// Environment variable overriding [`ComponentLimits::max_select_options`].
pub const MAX_SELECT_OPTIONS_VAR: &str = "CV2_MAX_SELECT_OPTIONS";
/// Environment variable overriding [`ComponentLimits::max_media_items`].
pub const MAX_MEDIA_ITEMS_VAR: &str = "CV2_MAX_MEDIA_ITEMS";

/// Ceilings checked while composing and emitting a message.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComponentLimits {
    /// Top-level components per message.
    pub max_components: usize,
    /// Characters of text per text display, and across the whole message.
    pub max_text_length: usize,
    /// Options per string select menu.
    pub max_select_options: usize,
    /// Items per media gallery.
    pub max_media_items: usize,
}

impl ComponentLimits {
    pub const DEFAULT: Self = Self {
        max_components: 40,
        max_text_length: 4000,
        max_select_options: 25,
        max_media_items: 10,
    };

    /// Defaults overridden by the `CV2_*` environment variables.
    ///
    /// Variables that are set but not a non-negative integer are ignored
    /// with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for the `CV2_*`
    /// variable names.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| -> Option<usize> {
            let raw = lookup(key)?;
            match raw.trim().parse() {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!(var = key, value = %raw, error = %e, "ignoring malformed limit");
                    None
                }
            }
        };

        let overrides = LimitOverrides {
            max_components: read(MAX_COMPONENTS_VAR),
            max_text_length: read(MAX_TEXT_LENGTH_VAR),
            max_select_options: read(MAX_SELECT_OPTIONS_VAR),
            max_media_items: read(MAX_MEDIA_ITEMS_VAR),
        };

        overrides.apply(Self::DEFAULT)
    }
}

impl Default for ComponentLimits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Partial override of [`ComponentLimits`]; unset fields keep the base value.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LimitOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_components: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_text_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_select_options: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_media_items: Option<usize>,
}

impl LimitOverrides {
    /// Layer these overrides over `base`.
    pub fn apply(self, base: ComponentLimits) -> ComponentLimits {
        ComponentLimits {
            max_components: self.max_components.unwrap_or(base.max_components),
            max_text_length: self.max_text_length.unwrap_or(base.max_text_length),
            max_select_options: self.max_select_options.unwrap_or(base.max_select_options),
            max_media_items: self.max_media_items.unwrap_or(base.max_media_items),
        }
    }
}
