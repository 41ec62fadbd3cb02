use serde::{Deserialize, Serialize};

/// Block of markdown text.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct TextDisplay {
    /// Markdown content.
    pub content: String,
    /// Optional identifier for the component.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
}

impl TextDisplay {
    /// Create a text display without an identifier.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            id: None,
        }
    }

    /// Length of the content in Unicode scalar values (`char`s), the unit
    /// every text limit is counted in.
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    /// Whether the content is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::TextDisplay;

    #[test]
    fn len_counts_characters() {
        assert_eq!(TextDisplay::new("héllo").len(), 5);
        assert!(TextDisplay::new("").is_empty());
    }

    #[test]
    fn id_is_omitted_when_unset() {
        let json = serde_json::to_string(&TextDisplay::new("hi")).unwrap();
        assert_eq!(json, r#"{"content":"hi"}"#);
    }
}
