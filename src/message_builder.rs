//! Accumulating builder for a whole component message.
//!
//! [`MessageBuilder`] appends one top-level node per `add_*` call and keeps
//! running totals of the node count and of every character of text in the
//! message, nested or not. Limits are only checked as a whole by
//! [`validate`](MessageBuilder::validate) and the emitters, so a message may
//! overshoot while it is being composed.
//!
//! ```ignore
//! let mut builder = MessageBuilder::new();
//! builder
//!     .add_text("# Release notes")?
//!     .add_separator(SeparatorOptions::default())?
//!     .add_button(ButtonOptions::link("Changelog", "https://example.com"))?;
//!
//! let payload = builder.native_payload()?;
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    error::{ComponentError, ComponentErrorType},
    legacy,
    limits::ComponentLimits,
    options::{
        ButtonOptions, ComponentDescriptor, ContainerOptions, FileOptions, MediaGalleryOptions,
        SectionOptions, SelectMenuOptions, SeparatorOptions, TextOptions,
    },
    types::{builders, Component, CreateMessage},
};

/// Outcome of [`MessageBuilder::validate`].
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ValidationResult {
    /// Whether the message can be emitted.
    pub valid: bool,
    /// Problems that block emission, in the order they were checked.
    pub errors: Vec<String>,
    /// Problems that do not block emission.
    pub warnings: Vec<String>,
}

/// Composes a message one top-level component at a time.
#[derive(Clone, Debug, Default)]
pub struct MessageBuilder {
    components: Vec<Component>,
    component_count: usize,
    total_text_length: usize,
    limits: ComponentLimits,
}

impl MessageBuilder {
    /// Empty builder with the default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty builder with custom limits.
    pub fn with_limits(limits: ComponentLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    pub const fn limits(&self) -> &ComponentLimits {
        &self.limits
    }

    /// Top-level components added so far.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Number of top-level components added so far.
    pub const fn component_count(&self) -> usize {
        self.component_count
    }

    /// Characters of text across the whole message, wherever nested.
    pub const fn text_length(&self) -> usize {
        self.total_text_length
    }

    // =======================================================================
    // Mutators
    // =======================================================================

    /// Append a text display.
    pub fn add_text(
        &mut self,
        options: impl Into<TextOptions>,
    ) -> Result<&mut Self, ComponentError> {
        let text = builders::text_display(options.into(), &self.limits)?;
        Ok(self.push(Component::TextDisplay(text)))
    }

    /// Append a section of up to three text displays.
    pub fn add_section(&mut self, options: SectionOptions) -> Result<&mut Self, ComponentError> {
        let section = builders::section(options, &self.limits)?;
        Ok(self.push(Component::Section(section)))
    }

    /// Append a container assembled from its child descriptors.
    pub fn add_container(
        &mut self,
        options: ContainerOptions,
    ) -> Result<&mut Self, ComponentError> {
        let container = builders::container(options, &self.limits)?;
        Ok(self.push(Component::Container(container)))
    }

    /// Append a separator.
    ///
    /// Never fails; the `Result` keeps chains uniform.
    pub fn add_separator(
        &mut self,
        options: SeparatorOptions,
    ) -> Result<&mut Self, ComponentError> {
        Ok(self.push(Component::Separator(builders::separator(options))))
    }

    /// Append a media gallery.
    pub fn add_media_gallery(
        &mut self,
        options: impl Into<MediaGalleryOptions>,
    ) -> Result<&mut Self, ComponentError> {
        let gallery = builders::media_gallery(options.into(), &self.limits)?;
        Ok(self.push(Component::MediaGallery(gallery)))
    }

    /// Append a file display.
    ///
    /// Never fails; the `Result` keeps chains uniform.
    pub fn add_file(&mut self, options: FileOptions) -> Result<&mut Self, ComponentError> {
        Ok(self.push(Component::File(builders::file(options))))
    }

    /// Append a button in its own action row.
    pub fn add_button(&mut self, options: ButtonOptions) -> Result<&mut Self, ComponentError> {
        let button = builders::button(options)?;
        Ok(self.push(builders::action_row(button)))
    }

    /// Append a select menu in its own action row.
    pub fn add_select_menu(
        &mut self,
        options: SelectMenuOptions,
    ) -> Result<&mut Self, ComponentError> {
        let menu = builders::select_menu(options, &self.limits)?;
        Ok(self.push(builders::action_row(menu)))
    }

    /// Append whatever `descriptor` describes through the matching `add_*`
    /// method.
    pub fn add(&mut self, descriptor: ComponentDescriptor) -> Result<&mut Self, ComponentError> {
        match descriptor {
            ComponentDescriptor::Text(options) => self.add_text(options),
            ComponentDescriptor::Section(options) => self.add_section(options),
            ComponentDescriptor::Container(options) => self.add_container(options),
            ComponentDescriptor::Separator(options) => self.add_separator(options),
            ComponentDescriptor::MediaGallery(options) => self.add_media_gallery(options),
            ComponentDescriptor::File(options) => self.add_file(options),
            ComponentDescriptor::Button(options) => self.add_button(options),
            ComponentDescriptor::Select(options) => self.add_select_menu(options),
            ComponentDescriptor::Unsupported(kind) => {
                Err(ComponentErrorType::UnsupportedComponentType { kind }.into())
            }
        }
    }

    /// Remove every component and reset both counters.
    pub fn clear(&mut self) -> &mut Self {
        self.components.clear();
        self.component_count = 0;
        self.total_text_length = 0;
        self
    }

    fn push(&mut self, component: Component) -> &mut Self {
        let text_length = component.text_length();
        self.component_count += 1;
        self.total_text_length += text_length;

        trace!(
            kind = component.kind().name(),
            text_length,
            count = self.component_count,
            total_text_length = self.total_text_length,
            "component added"
        );

        self.components.push(component);
        self
    }

    // =======================================================================
    // Validation and emission
    // =======================================================================

    /// Check the message against its limits.
    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if self.component_count > self.limits.max_components {
            errors.push(format!(
                "too many components: {}/{}",
                self.component_count, self.limits.max_components
            ));
        }

        if self.total_text_length > self.limits.max_text_length {
            errors.push(format!(
                "text too long: {}/{} characters",
                self.total_text_length, self.limits.max_text_length
            ));
        }

        if self.component_count == 0 {
            warnings.push("message has no components".to_owned());
        }

        ValidationResult {
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    fn ensure_valid(&self) -> Result<(), ComponentError> {
        let result = self.validate();
        if result.valid {
            return Ok(());
        }

        debug!(errors = ?result.errors, "message failed validation");
        Err(ComponentErrorType::ValidationFailed {
            errors: result.errors,
        }
        .into())
    }

    /// Validate, then return the components as added.
    pub fn build(&self) -> Result<Vec<Component>, ComponentError> {
        self.emit_native()
    }

    /// Validate, then return the components as added.
    pub fn emit_native(&self) -> Result<Vec<Component>, ComponentError> {
        self.ensure_valid()?;
        Ok(self.components.clone())
    }

    /// Validate, then return the components converted to action rows.
    ///
    /// Conversion is lossy; see [`legacy`].
    pub fn emit_legacy(&self) -> Result<Vec<Component>, ComponentError> {
        self.ensure_valid()?;
        Ok(legacy::convert_all(&self.components))
    }

    /// [`emit_native`](Self::emit_native) wrapped in a message body flagged
    /// as a layout component message.
    pub fn native_payload(&self) -> Result<CreateMessage, ComponentError> {
        self.emit_native().map(CreateMessage::components_v2)
    }

    /// [`emit_legacy`](Self::emit_legacy) wrapped in a message body.
    pub fn legacy_payload(&self) -> Result<CreateMessage, ComponentError> {
        self.emit_legacy().map(CreateMessage::legacy)
    }
}
