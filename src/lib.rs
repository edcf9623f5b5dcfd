//! The `timezone_field` crate implements a content-management field type
//! that lets editors pick a timezone abbreviation code from a dropdown.
//!
//! ```rust
//! use timezone_field::{FieldSettings, FieldType, FieldValue, TimezoneField};
//!
//! let field = TimezoneField::new(FieldSettings::new("timezone"));
//!
//! // Column the host should provision for the field.
//! assert_eq!(field.storage_column_type().sql().to_string(), "varchar(255) NOT NULL");
//!
//! // Values are stored exactly as submitted.
//! let value = field.normalize_value(FieldValue::from("CEST"), None).unwrap();
//! assert_eq!(value.as_str(), Some("CEST"));
//! ```
//!
//! The field itself holds no state beyond its [`FieldSettings`]. Everything
//! that belongs to the host framework (translations, input namespacing,
//! storage serialization) is reached through the traits in [`host`], which
//! the unit type `()` implements with pass-through behavior.
//!
//! The option list lives in the `timezone_option_provider` crate. It is a
//! fixed table of abbreviation codes, and abbreviations shared by several
//! real-world zones are listed once per zone. No timezone arithmetic is
//! performed anywhere; a code is an opaque string.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod column;
pub mod error;
pub mod host;
pub mod options;
pub mod render;

mod field;
mod namespace;
mod value;

#[doc(inline)]
pub use error::{ErrorKind, FieldError};

/// The field operation result type
pub type FieldResult<T> = Result<T, FieldError>;

pub use crate::{
    column::ColumnType,
    field::{FieldType, TimezoneField, DISPLAY_NAME, TRANSLATION_CATEGORY},
    namespace::NamespacedView,
    options::{FieldSettings, ValueValidation},
    value::{FieldValue, RecordRef, SerializedValue},
};

/// Re-export of the option data crate.
pub use timezone_option_provider as provider;
pub use timezone_option_provider::{OptionProvider, TimezoneOption, TimezoneOptionTable};
