//! Whole messages described as JSON.
//!
//! ```json
//! {
//!   "limits": { "maxComponents": 10 },
//!   "components": [
//!     { "type": "text", "content": "# Hello" },
//!     { "type": "button", "style": "primary", "label": "Go", "customId": "go" }
//!   ]
//! }
//! ```

use serde::Deserialize;

use crate::{
    error::ComponentError,
    limits::{ComponentLimits, LimitOverrides},
    message_builder::MessageBuilder,
    options::ComponentDescriptor,
};

/// A message as a list of component descriptors plus optional limit
/// overrides.
#[derive(Clone, Debug, Deserialize)]
pub struct MessageDocument {
    #[serde(default)]
    pub limits: LimitOverrides,
    pub components: Vec<ComponentDescriptor>,
}

impl MessageDocument {
    /// Feed every descriptor, in order, into a builder whose limits are the
    /// document's overrides layered over `base`.
    ///
    /// Fails on the first descriptor that cannot be added.
    pub fn into_builder(self, base: ComponentLimits) -> Result<MessageBuilder, ComponentError> {
        let mut builder = MessageBuilder::with_limits(self.limits.apply(base));
        for descriptor in self.components {
            builder.add(descriptor)?;
        }

        Ok(builder)
    }
}
