//! Field values and record references.

use alloc::string::String;
use core::fmt;

/// A field value as exchanged with the host.
///
/// Hosts hand fields loosely typed values: form submissions arrive as text,
/// database reads may produce `NULL`, and templates can assign integers or
/// booleans. The timezone field stores whatever it is given, so all of these
/// are representable.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum FieldValue {
    #[default]
    Null,
    Boolean(bool),
    Integer(i64),
    Text(String),
}

/// The value produced by serializing a [`FieldValue`] for storage.
pub type SerializedValue = FieldValue;

impl FieldValue {
    /// Creates a text value.
    pub fn text<S: Into<String>>(value: S) -> Self {
        Self::Text(value.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the text content, if this is a text value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns whether the value is `Null` or empty text.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(s) => s.is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Boolean(b) => fmt::Display::fmt(b, f),
            Self::Integer(i) => fmt::Display::fmt(i, f),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// A reference to the content record that owns a field value.
///
/// The field never inspects the record; it is threaded through so host hooks
/// can make record-specific decisions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordRef {
    pub id: Option<u64>,
    pub site_id: Option<u64>,
}

impl RecordRef {
    /// A reference to a stored record.
    pub const fn new(id: u64) -> Self {
        Self {
            id: Some(id),
            site_id: None,
        }
    }

    /// A reference to a record that has not been saved yet.
    pub const fn unsaved() -> Self {
        Self {
            id: None,
            site_id: None,
        }
    }

    #[must_use]
    pub const fn with_site(mut self, site_id: u64) -> Self {
        self.site_id = Some(site_id);
        self
    }

    pub const fn is_new(&self) -> bool {
        self.id.is_none()
    }
}
