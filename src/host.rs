//! Trait definitions for the services a host framework provides to fields.
//!
//! A field does not translate text, build input identifiers, or serialize
//! values for storage on its own; the host does. Each service is a separate
//! trait so hosts can supply only what an operation needs. The unit type
//! implements every hook with pass-through behavior.

use alloc::borrow::Cow;
use alloc::string::String;

use crate::{FieldValue, RecordRef, SerializedValue};

/// The `HostTranslator` trait translates user-facing messages.
pub trait HostTranslator {
    /// Translates `message` within `category`, falling back to `message`.
    ///
    /// The result may borrow from the host's own catalogue.
    fn translate<'a>(&'a self, category: &str, message: &'a str) -> Cow<'a, str>;
}

/// The `HostView` trait supplies input identifiers for rendered markup.
pub trait HostView {
    /// Turns an input name such as `fields[tz]` into an HTML id.
    fn format_input_id(&self, name: &str) -> String {
        format_input_id(name)
    }

    /// Prefixes an id with the active namespace.
    fn namespace_input_id(&self, id: &str) -> String;

    /// Prefixes an input name with the active namespace.
    fn namespace_input_name(&self, name: &str) -> String;
}

/// The `HostSerializer` trait prepares field values for storage.
pub trait HostSerializer {
    fn serialize_value(&self, value: &FieldValue, record: Option<&RecordRef>) -> SerializedValue;
}

/// `HostHooks` marks a type that provides every host service.
pub trait HostHooks: HostTranslator + HostView + HostSerializer {}

/// Replaces runs of `[`, `]` and `\` with `-` and trims trailing dashes.
pub fn format_input_id(name: &str) -> String {
    let mut id = String::with_capacity(name.len());
    let mut in_run = false;
    for c in name.chars() {
        if matches!(c, '[' | ']' | '\\') {
            if !in_run {
                id.push('-');
                in_run = true;
            }
        } else {
            id.push(c);
            in_run = false;
        }
    }
    let trimmed = id.trim_end_matches('-').len();
    id.truncate(trimmed);
    id
}

// Implement empty hooks

impl HostTranslator for () {
    fn translate<'a>(&'a self, _: &str, message: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(message)
    }
}

impl HostView for () {
    fn namespace_input_id(&self, id: &str) -> String {
        id.into()
    }

    fn namespace_input_name(&self, name: &str) -> String {
        name.into()
    }
}

impl HostSerializer for () {
    fn serialize_value(&self, value: &FieldValue, _: Option<&RecordRef>) -> SerializedValue {
        value.clone()
    }
}

impl HostHooks for () {}
