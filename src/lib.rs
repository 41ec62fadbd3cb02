//! Compose layout-component messages and downgrade them for older clients.
//!
//! The crate is split into the wire model in [`types`], the caller-facing
//! option records in [`options`], and the [`MessageBuilder`] that ties them
//! together. [`legacy`] converts a finished message to action rows for
//! destinations that predate layout components, and [`document`] reads a
//! whole message from JSON.

pub mod document;
pub mod error;
pub mod legacy;
pub mod limits;
pub mod message_builder;
pub mod options;
pub mod types;

pub use document::MessageDocument;
pub use error::{ComponentError, ComponentErrorType, Limit};
pub use limits::{ComponentLimits, LimitOverrides};
pub use message_builder::{MessageBuilder, ValidationResult};
pub use options::ComponentDescriptor;
pub use types::{resolve_color, Component, CreateMessage, MessageFlags};
