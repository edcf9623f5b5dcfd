//! Field configuration.
//!
//! Hosts configure each field instance with a handle and a handful of
//! settings. These are fixed once the field is constructed.

use alloc::string::String;
use core::{fmt, str::FromStr};

/// How strictly a field checks values against its options.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ValueValidation {
    /// Store whatever is submitted.
    #[default]
    Permissive,
    /// Reject non-empty text that is not one of the option values.
    Strict,
}

#[derive(Debug, Clone, Copy)]
pub struct ParseValueValidationError;

impl fmt::Display for ParseValueValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("provided string was not a valid value validation mode")
    }
}

impl FromStr for ValueValidation {
    type Err = ParseValueValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "permissive" => Ok(Self::Permissive),
            "strict" => Ok(Self::Strict),
            _ => Err(ParseValueValidationError),
        }
    }
}

impl fmt::Display for ValueValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Permissive => "permissive",
            Self::Strict => "strict",
        })
    }
}

/// Settings for one configured field instance.
#[non_exhaustive]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct FieldSettings {
    /// The machine-readable identifier the host assigned to the field.
    pub handle: String,
    /// Whether an empty value fails validation.
    pub required: bool,
    pub validation: ValueValidation,
    /// Text for a leading empty option. No empty option is rendered when unset.
    pub placeholder: Option<String>,
}

impl FieldSettings {
    pub fn new<S: Into<String>>(handle: S) -> Self {
        Self {
            handle: handle.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    #[must_use]
    pub fn with_validation(mut self, validation: ValueValidation) -> Self {
        self.validation = validation;
        self
    }

    #[must_use]
    pub fn with_placeholder<S: Into<String>>(mut self, placeholder: S) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }
}
