//! Outbound message body (REST `POST /channels/{id}/messages`).
//!
//! Only the parts a component message needs: text content, the component
//! list, and message flags.

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::component::Component;

bitflags! {
    /// Flags of a message.
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    pub struct MessageFlags: u64 {
        /// Do not include embeds when serializing the message.
        const SUPPRESS_EMBEDS = 1 << 2;
        /// Only visible to the user who invoked the interaction.
        const EPHEMERAL = 1 << 6;
        /// Do not trigger push and desktop notifications.
        const SUPPRESS_NOTIFICATIONS = 1 << 12;
        /// Message is laid out with layout components instead of `content`
        /// and embeds.
        const IS_COMPONENTS_V2 = 1 << 15;
    }
}

impl Serialize for MessageFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.bits())
    }
}

impl<'de> Deserialize<'de> for MessageFlags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::from_bits_truncate(u64::deserialize(deserializer)?))
    }
}

/// Body for creating a new message via the REST API.
///
/// ```ignore
/// let msg = CreateMessage::components_v2(builder.build()?);
/// ```
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct CreateMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<Component>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<MessageFlags>,
}

impl CreateMessage {
    /// Create a new empty message body.
    pub fn new() -> Self {
        Self::default()
    }

    /// Message laid out entirely with layout components.
    ///
    /// Sets [`MessageFlags::IS_COMPONENTS_V2`]; such messages may not carry
    /// `content`.
    pub fn components_v2(components: Vec<Component>) -> Self {
        Self {
            components: Some(components),
            content: None,
            flags: Some(MessageFlags::IS_COMPONENTS_V2),
        }
    }

    /// Message whose components are all action rows.
    pub fn legacy(components: Vec<Component>) -> Self {
        Self {
            components: Some(components),
            content: None,
            flags: None,
        }
    }

    /// Set the text content of the message.
    ///
    /// Ignored by the platform when [`MessageFlags::IS_COMPONENTS_V2`] is set.
    pub fn content(mut self, text: impl Into<String>) -> Self {
        self.content = Some(text.into());
        self
    }

    /// Add flags to the message.
    pub fn flags(mut self, flags: MessageFlags) -> Self {
        self.flags = Some(self.flags.unwrap_or_else(MessageFlags::empty) | flags);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{CreateMessage, MessageFlags};
    use crate::types::component::{Component, TextDisplay};

    #[test]
    fn components_v2_sets_flag() {
        let msg = CreateMessage::components_v2(vec![Component::TextDisplay(TextDisplay::new(
            "hi",
        ))]);
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["flags"], serde_json::json!(1 << 15));
        assert_eq!(value["components"][0]["type"], serde_json::json!(10));
        assert!(value.get("content").is_none());
    }

    #[test]
    fn legacy_has_no_flags() {
        let json = serde_json::to_string(&CreateMessage::legacy(Vec::new())).unwrap();
        assert_eq!(json, r#"{"components":[]}"#);
    }

    #[test]
    fn flags_accumulate() {
        let msg = CreateMessage::components_v2(Vec::new()).flags(MessageFlags::EPHEMERAL);
        assert_eq!(
            msg.flags,
            Some(MessageFlags::IS_COMPONENTS_V2 | MessageFlags::EPHEMERAL)
        );
    }

    #[test]
    fn create_message_serializes_content_only() {
        let msg = CreateMessage::new().content("test");
        let json = serde_json::to_string(&msg).unwrap();
        assert_eq!(json, r#"{"content":"test"}"#);
    }

    #[test]
    fn flags_round_trip_as_integer() {
        let flags: MessageFlags = serde_json::from_str("32832").unwrap();
        assert_eq!(flags, MessageFlags::IS_COMPONENTS_V2 | MessageFlags::EPHEMERAL);
    }
}
