//! 24-bit RGB colors and the accent color resolver.

use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use crate::error::ComponentError;

/// Largest value of a 24-bit color.
const MAX_COLOR: u32 = 0xFF_FF_FF;

/// RGB color parsed from `#RRGGBB` (the leading `#` is optional).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct HexColor(
    /// Red component.
    pub u8,
    /// Green component.
    pub u8,
    /// Blue component.
    pub u8,
);

impl Display for HexColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl From<HexColor> for u32 {
    fn from(color: HexColor) -> Self {
        (u32::from(color.0) << 16) | (u32::from(color.1) << 8) | u32::from(color.2)
    }
}

impl TryFrom<u32> for HexColor {
    type Error = ComponentError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value > MAX_COLOR {
            return Err(ComponentError::invalid_color(value.to_string(), None));
        }

        let [_, r, g, b] = value.to_be_bytes();
        Ok(Self(r, g, b))
    }
}

impl FromStr for HexColor {
    type Err = ComponentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ComponentError::invalid_color(s, None));
        }

        let value = u32::from_str_radix(digits, 16)
            .map_err(|source| ComponentError::invalid_color(s, Some(Box::new(source))))?;
        Self::try_from(value)
    }
}

/// Accent color as supplied by a caller: an integer or a hex string.
///
/// Integers outside `0..=0xFFFFFF` are kept and rejected by
/// [`resolve_color`].
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColorInput {
    Int(i64),
    Hex(String),
}

impl From<u32> for ColorInput {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for ColorInput {
    fn from(value: &str) -> Self {
        Self::Hex(value.to_owned())
    }
}

impl From<String> for ColorInput {
    fn from(value: String) -> Self {
        Self::Hex(value)
    }
}

impl From<HexColor> for ColorInput {
    fn from(value: HexColor) -> Self {
        Self::Int(i64::from(u32::from(value)))
    }
}

/// Resolve an accent color to its 24-bit integer form.
pub fn resolve_color(input: &ColorInput) -> Result<u32, ComponentError> {
    let color = match input {
        ColorInput::Int(value) => u32::try_from(*value)
            .map_err(|source| {
                ComponentError::invalid_color(value.to_string(), Some(Box::new(source)))
            })
            .and_then(HexColor::try_from)?,
        ColorInput::Hex(text) => text.parse::<HexColor>()?,
    };

    Ok(color.into())
}
