//! Wire types for component messages.
//!
//! Everything in here is plain serde data mirroring the platform's JSON
//! schema: the [`Component`] tree, the outbound [`CreateMessage`] body, and
//! the small utilities they share. Construction rules live in [`builders`];
//! the accumulating [`MessageBuilder`](crate::MessageBuilder) sits on top.

// ===========================================================================
// Sub-modules
// ===========================================================================

/// Component node kinds and their wire representation.
pub mod component;

/// Outbound message body and message flags.
pub mod message;

/// Colors and serde helpers.
pub mod util;

/// Node factories and the container assembler.
pub mod builders;

// ===========================================================================
// Convenience re-exports
// ===========================================================================

pub use self::component::{
    ActionRow, Button, ButtonStyle, Component, ComponentEmoji, ComponentType, Container,
    FileDisplay, MediaGallery, MediaGalleryItem, Section, SelectMenu, SelectMenuOption,
    SelectMenuType, Separator, SeparatorSpacingSize, TextDisplay, Thumbnail, UnfurledMediaItem,
};
pub use self::message::{CreateMessage, MessageFlags};
pub use self::util::{resolve_color, ColorInput, HexColor};
