use serde::{Deserialize, Serialize};

/// Partial emoji attached to a button or select option.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ComponentEmoji {
    #[serde(default, skip_serializing_if = "crate::types::util::is_false")]
    pub animated: bool,
    /// Snowflake of a custom emoji.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Unicode emoji, or the name of a custom emoji.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ComponentEmoji {
    /// Parse an emoji as written in a message.
    ///
    /// `<:name:id>` and `<a:name:id>` are custom emoji; anything else is
    /// taken as a unicode emoji.
    pub fn parse(raw: &str) -> Self {
        let custom = raw
            .strip_prefix('<')
            .and_then(|rest| rest.strip_suffix('>'))
            .and_then(|inner| {
                let mut parts = inner.split(':');
                let animated = match parts.next()? {
                    "" => false,
                    "a" => true,
                    _ => return None,
                };
                let name = parts.next()?;
                let id = parts.next()?;
                if parts.next().is_some() || id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit())
                {
                    return None;
                }
                Some(Self {
                    animated,
                    id: Some(id.to_owned()),
                    name: Some(name.to_owned()),
                })
            });

        custom.unwrap_or_else(|| Self {
            animated: false,
            id: None,
            name: Some(raw.to_owned()),
        })
    }
}
