//! Error types for component construction and message emission.
//!
//! Follows the same shape as the rest of the crate's errors: an opaque error
//! struct wrapping a [`ComponentErrorType`] kind plus an optional source.

use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
};

use crate::types::ButtonStyle;

/// Reason that a component could not be built or a message could not be
/// emitted.
#[derive(Debug)]
pub struct ComponentError {
    /// Type of error that occurred.
    kind: ComponentErrorType,
    /// Source of the error, if there is any.
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl ComponentError {
    /// Immutable reference to the type of error that occurred.
    #[must_use = "retrieving the type has no effect if left unused"]
    pub const fn kind(&self) -> &ComponentErrorType {
        &self.kind
    }

    /// Consume the error, returning the source error if there is any.
    #[must_use = "consuming the error and retrieving the source has no effect if left unused"]
    pub fn into_source(self) -> Option<Box<dyn Error + Send + Sync>> {
        self.source
    }

    /// Consume the error, returning the owned error type and the source error.
    #[must_use = "consuming the error into its parts has no effect if left unused"]
    pub fn into_parts(self) -> (ComponentErrorType, Option<Box<dyn Error + Send + Sync>>) {
        (self.kind, self.source)
    }

    pub(crate) const fn limit(limit: Limit, observed: usize, allowed: usize) -> Self {
        Self {
            kind: ComponentErrorType::LimitExceeded {
                limit,
                observed,
                allowed,
            },
            source: None,
        }
    }

    pub(crate) fn invalid_color(
        input: impl Into<String>,
        source: Option<Box<dyn Error + Send + Sync>>,
    ) -> Self {
        Self {
            kind: ComponentErrorType::InvalidColor {
                input: input.into(),
            },
            source,
        }
    }
}

impl From<ComponentErrorType> for ComponentError {
    fn from(kind: ComponentErrorType) -> Self {
        Self { kind, source: None }
    }
}

impl Display for ComponentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match &self.kind {
            ComponentErrorType::LimitExceeded {
                limit,
                observed,
                allowed,
            } => match limit {
                Limit::TextLength => {
                    write!(f, "text too long: {observed}/{allowed} characters")
                }
                Limit::SectionTexts => write!(
                    f,
                    "section can have at most {allowed} text elements: {observed}/{allowed}"
                ),
                Limit::MediaItems => write!(
                    f,
                    "media gallery can have at most {allowed} items: {observed}/{allowed}"
                ),
                Limit::SelectOptions => write!(
                    f,
                    "select menu can have at most {allowed} options: {observed}/{allowed}"
                ),
            },
            ComponentErrorType::UnsupportedStyle { style } => {
                write!(f, "unsupported button style: {style}")
            }
            ComponentErrorType::UnsupportedSelectType { kind } => {
                write!(f, "unsupported select menu type: {kind}")
            }
            ComponentErrorType::UnsupportedChildType { kind } => {
                write!(f, "unsupported child component type: {kind}")
            }
            ComponentErrorType::UnsupportedComponentType { kind } => {
                write!(f, "unsupported component type: {kind}")
            }
            ComponentErrorType::InvalidColor { input } => write!(f, "invalid color: {input}"),
            ComponentErrorType::InvalidButtonTarget { style } => {
                let name = style.name();
                if *style == ButtonStyle::Link {
                    write!(f, "{name} buttons require a url and no custom id")
                } else {
                    write!(f, "{name} buttons require a custom id and no url")
                }
            }
            ComponentErrorType::ValidationFailed { errors } => {
                write!(f, "message validation failed: {}", errors.join(", "))
            }
        }
    }
}

impl Error for ComponentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|source| &**source as &(dyn Error + 'static))
    }
}

/// Type of [`ComponentError`] that occurred.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ComponentErrorType {
    /// A count or length went over its ceiling.
    LimitExceeded {
        /// Which ceiling was hit.
        limit: Limit,
        /// Value that was supplied.
        observed: usize,
        /// Largest accepted value.
        allowed: usize,
    },
    /// Button style token is not a known style.
    UnsupportedStyle {
        /// Offending token.
        style: String,
    },
    /// Select menu type tag is not a known select menu type.
    UnsupportedSelectType {
        /// Offending tag.
        kind: String,
    },
    /// Component kind cannot be placed inside a container.
    UnsupportedChildType {
        /// Offending tag.
        kind: String,
    },
    /// Top-level component descriptor has an unknown tag.
    UnsupportedComponentType {
        /// Offending tag.
        kind: String,
    },
    /// Accent color input is not a 24-bit color.
    InvalidColor {
        /// Offending input, as supplied.
        input: String,
    },
    /// Button has the wrong combination of `url` and `custom_id` for its
    /// style.
    InvalidButtonTarget {
        /// Resolved style of the button.
        style: ButtonStyle,
    },
    /// Message-level validation reported errors.
    ValidationFailed {
        /// Every individual validation error, in order.
        errors: Vec<String>,
    },
}

/// Ceiling named by [`ComponentErrorType::LimitExceeded`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Limit {
    /// Characters of a single text display.
    TextLength,
    /// Text displays inside one section.
    SectionTexts,
    /// Items inside one media gallery.
    MediaItems,
    /// Options of one string select menu.
    SelectOptions,
}

#[cfg(test)]
mod tests {
    use super::{ComponentError, ComponentErrorType, Limit};
    use crate::types::ButtonStyle;
    use static_assertions::assert_impl_all;
    use std::{error::Error, fmt::Debug};

    assert_impl_all!(ComponentError: Debug, Error, Send, Sync);
    assert_impl_all!(ComponentErrorType: Clone, Debug, Eq, PartialEq, Send, Sync);

    #[test]
    fn limit_display_cites_observed_and_allowed() {
        let err = ComponentError::limit(Limit::TextLength, 4001, 4000);
        assert_eq!(err.to_string(), "text too long: 4001/4000 characters");

        let err = ComponentError::limit(Limit::SectionTexts, 4, 3);
        assert!(err.to_string().contains("at most 3 text elements"));

        let err = ComponentError::limit(Limit::MediaItems, 11, 10);
        assert!(err.to_string().contains("11/10"));
    }

    #[test]
    fn tag_errors_name_the_tag() {
        let err = ComponentError::from(ComponentErrorType::UnsupportedChildType {
            kind: "media".to_owned(),
        });
        assert_eq!(err.to_string(), "unsupported child component type: media");

        let err = ComponentError::from(ComponentErrorType::UnsupportedStyle {
            style: "blurple".to_owned(),
        });
        assert_eq!(err.to_string(), "unsupported button style: blurple");
    }

    #[test]
    fn validation_failed_joins_errors() {
        let err = ComponentError::from(ComponentErrorType::ValidationFailed {
            errors: vec!["a".to_owned(), "b".to_owned()],
        });
        assert_eq!(err.to_string(), "message validation failed: a, b");
    }

    #[test]
    fn button_target_display_depends_on_style() {
        let link = ComponentError::from(ComponentErrorType::InvalidButtonTarget {
            style: ButtonStyle::Link,
        });
        assert_eq!(
            link.to_string(),
            "link buttons require a url and no custom id"
        );

        let primary = ComponentError::from(ComponentErrorType::InvalidButtonTarget {
            style: ButtonStyle::Primary,
        });
        assert_eq!(
            primary.to_string(),
            "primary buttons require a custom id and no url"
        );
    }

    #[test]
    fn into_parts_returns_kind_and_source() {
        let source = "zz".parse::<u32>().unwrap_err();
        let err = ComponentError::invalid_color("#zz", Some(Box::new(source)));
        assert!(err.source().is_some());
        let (kind, source) = err.into_parts();
        assert_eq!(
            kind,
            ComponentErrorType::InvalidColor {
                input: "#zz".to_owned()
            }
        );
        assert!(source.is_some());
    }
}
