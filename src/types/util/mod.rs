//! Small helpers shared by the wire types.
//!
//! Custom `Deserialize` impls (components, descriptors) buffer their input
//! into a [`serde_json::Value`] and then dispatch on a tag; [`ValueExt`]
//! gives that second step a `.deserialize_into()` spelling.

pub mod hex_color;

pub use self::hex_color::{resolve_color, ColorInput, HexColor};

#[allow(clippy::trivially_copy_pass_by_ref)]
pub(crate) fn is_false(value: &bool) -> bool {
    !value
}

/// Extension trait on [`serde_json::Value`] that provides
/// `.deserialize_into::<T>()`.
///
/// # Example
///
/// ```ignore
/// use serde_json::Value;
/// use crate::types::util::ValueExt;
///
/// let v: Value = serde_json::json!(42u64);
/// let n: u64 = v.deserialize_into().unwrap();
/// assert_eq!(n, 42);
/// ```
pub(crate) trait ValueExt: Sized {
    /// Consume this value and attempt to deserialize it into `T`.
    fn deserialize_into<T: serde::de::DeserializeOwned>(self) -> Result<T, serde_json::Error>;
}

impl ValueExt for serde_json::Value {
    fn deserialize_into<T: serde::de::DeserializeOwned>(self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self)
    }
}

#[cfg(test)]
mod tests {
    use super::{is_false, ValueExt};

    #[test]
    fn deserialize_into_matches_from_value() {
        let n: u64 = serde_json::json!(42u64).deserialize_into().unwrap();
        assert_eq!(n, 42);
        assert!(serde_json::json!("x").deserialize_into::<u64>().is_err());
    }

    #[test]
    fn is_false_inverts() {
        assert!(is_false(&false));
        assert!(!is_false(&true));
    }
}
