//! Typed identifier for devices.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Serial number uniquely identifying a [`Device`](crate::device::Device).
///
/// Always non-empty. Serialized as a plain JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SerialNum(String);

impl SerialNum {
    /// Wrap a serial number string.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptySerialNum`] when `value` is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::EmptySerialNum);
        }
        Ok(Self(value))
    }

    /// Borrow the inner string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the identifier, returning the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SerialNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SerialNum {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for SerialNum {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SerialNum> for String {
    fn from(value: SerialNum) -> Self {
        value.0
    }
}

impl AsRef<str> for SerialNum {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for SerialNum {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reject_empty_serial_num() {
        assert_eq!(SerialNum::new(""), Err(ValidationError::EmptySerialNum));
        assert!(SerialNum::from_str("").is_err());
    }

    #[test]
    fn should_keep_whitespace_as_part_of_serial_num() {
        let serial = SerialNum::new("123\t").unwrap();
        assert_eq!(serial.as_str(), "123\t");
    }

    #[test]
    fn should_serialize_as_plain_string() {
        let serial = SerialNum::new("A-1").unwrap();
        let json = serde_json::to_string(&serial).unwrap();
        assert_eq!(json, r#""A-1""#);
    }

    #[test]
    fn should_reject_empty_string_when_deserializing() {
        let result: Result<SerialNum, _> = serde_json::from_str(r#""""#);
        assert!(result.is_err());
    }

    #[test]
    fn should_lookup_hash_map_by_str() {
        let mut map = std::collections::HashMap::new();
        map.insert(SerialNum::new("42").unwrap(), ());
        assert!(map.contains_key("42"));
    }
}
