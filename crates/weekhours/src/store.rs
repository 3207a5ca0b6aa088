//! Binding to key/value and SQL-style storage.
//!
//! Hours are written as their flat string and read back from whatever the
//! driver returns, as long as it is text or raw bytes.

use crate::{
    errors::{DecodeError, ScanError},
    hours::Hours,
};

/// A value handed back by a storage driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StoredValue<'a> {
    Null,
    Text(&'a str),
    Bytes(&'a [u8]),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl<'a> StoredValue<'a> {
    /// Name of the driver type, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            StoredValue::Null => "null",
            StoredValue::Text(_) => "text",
            StoredValue::Bytes(_) => "bytes",
            StoredValue::Int(_) => "int",
            StoredValue::Float(_) => "float",
            StoredValue::Bool(_) => "bool",
        }
    }

    /// Text content of a text or bytes value. `None` for `Null`.
    fn text(&self) -> Result<Option<&'a str>, ScanError> {
        match *self {
            StoredValue::Null => Ok(None),
            StoredValue::Text(s) => Ok(Some(s)),
            StoredValue::Bytes(b) => std::str::from_utf8(b)
                .map(Some)
                .map_err(|_| DecodeError::InvalidUtf8.into()),
            other => {
                log::debug!("cannot scan hours from {} value", other.kind());
                Err(ScanError::UnsupportedType(other.kind()))
            }
        }
    }
}

impl<'a> From<&'a str> for StoredValue<'a> {
    fn from(value: &'a str) -> Self {
        StoredValue::Text(value)
    }
}

impl<'a> From<&'a [u8]> for StoredValue<'a> {
    fn from(value: &'a [u8]) -> Self {
        StoredValue::Bytes(value)
    }
}

impl Hours {
    /// Value to persist: the flat string form.
    pub fn to_stored(&self) -> String {
        self.to_string()
    }

    /// Reads hours back from storage. `Null` reads as the all-active sentinel.
    pub fn scan(value: StoredValue<'_>) -> Result<Hours, ScanError> {
        match value.text()? {
            None => Ok(Hours::AllActive),
            Some(s) => Ok(Hours::parse(s)?),
        }
    }
}

#[cfg(feature = "serde")]
impl crate::schedule::HoursObject {
    /// Value to persist: the structured form as a JSON object.
    pub fn to_stored(&self) -> serde_json::Result<String> {
        self.to_json()
    }

    /// Reads a JSON object back from storage. `Null` reads as the all-active sentinel.
    pub fn scan(value: StoredValue<'_>) -> Result<Self, ScanError> {
        match value.text()? {
            None => Ok(Self(Hours::AllActive)),
            Some(s) => Ok(Self::from_json(s.as_bytes())?),
        }
    }
}
