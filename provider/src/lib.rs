//! Option data for timezone dropdown fields.
//!
//! This crate ships the static list of timezone abbreviation codes offered by
//! the `timezone_field` dropdown, along with the [`OptionProvider`] trait a
//! field type reads its options through.
//!
//! ```rust
//! use timezone_option_provider::{OptionProvider, TimezoneOptionTable};
//!
//! let table = TimezoneOptionTable;
//! assert!(table.contains("UTC"));
//! assert_eq!(table.list_options()[0].value(), "ACDT");
//! ```
//!
//! The list is fixed at build time and never mutated, so it can be shared
//! freely between threads and requests.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]

#[cfg(feature = "std")]
extern crate std;

mod data;
pub mod provider;

pub use data::TIMEZONE_OPTIONS;
pub use provider::OptionProvider;

use core::fmt;
use tinystr::TinyAsciiStr;

/// A single entry of a dropdown: the text shown to the editor and the value
/// that gets stored.
///
/// Every entry in [`TIMEZONE_OPTIONS`] uses the abbreviation code for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TimezoneOption {
    label: TinyAsciiStr<6>,
    value: TinyAsciiStr<6>,
}

impl TimezoneOption {
    /// Creates an option with a distinct label and value.
    pub const fn new(label: TinyAsciiStr<6>, value: TinyAsciiStr<6>) -> Self {
        Self { label, value }
    }

    /// Creates an option whose label and value are both `code`.
    pub const fn from_code(code: TinyAsciiStr<6>) -> Self {
        Self {
            label: code,
            value: code,
        }
    }

    /// The text displayed for this option.
    pub fn label(&self) -> &str {
        self.label.as_str()
    }

    /// The value stored when this option is chosen.
    pub fn value(&self) -> &str {
        self.value.as_str()
    }
}

impl fmt::Display for TimezoneOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The shipped timezone abbreviation table.
///
/// `TimezoneOptionTable` is a zero-sized handle onto [`TIMEZONE_OPTIONS`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TimezoneOptionTable;

impl TimezoneOptionTable {
    /// Returns the full option list in declaration order.
    ///
    /// Every call returns the same sequence; duplicates are kept.
    #[inline]
    pub fn list_options(&self) -> &'static [TimezoneOption] {
        &TIMEZONE_OPTIONS
    }

    /// The number of entries, duplicates included.
    #[inline]
    pub fn len(&self) -> usize {
        TIMEZONE_OPTIONS.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        TIMEZONE_OPTIONS.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'static, TimezoneOption> {
        self.list_options().iter()
    }

    /// Returns the first option whose value is exactly `value`.
    pub fn find(&self, value: &str) -> Option<&'static TimezoneOption> {
        self.iter().find(|option| option.value() == value)
    }
}

impl OptionProvider for TimezoneOptionTable {
    fn list_options(&self) -> &[TimezoneOption] {
        &TIMEZONE_OPTIONS
    }
}

impl IntoIterator for TimezoneOptionTable {
    type Item = &'static TimezoneOption;
    type IntoIter = core::slice::Iter<'static, TimezoneOption>;

    fn into_iter(self) -> Self::IntoIter {
        TIMEZONE_OPTIONS.iter()
    }
}
