//! This module implements the `FieldType` trait and the timezone field.

use alloc::borrow::Cow;
use alloc::string::String;

use timezone_option_provider::{OptionProvider, TimezoneOptionTable};
use writeable::Writeable;

use crate::{
    column::ColumnType,
    host::{HostSerializer, HostTranslator, HostView},
    options::{FieldSettings, ValueValidation},
    render::{SelectInput, Selection},
    FieldError, FieldResult, FieldValue, RecordRef, SerializedValue,
};

#[cfg(test)]
mod tests;

/// Translation category for the field's user-facing messages.
pub const TRANSLATION_CATEGORY: &str = "timezone-field";

/// Untranslated display name of the timezone field type.
pub const DISPLAY_NAME: &str = "Timezone";

/// The capabilities a host content model expects from a field type.
///
/// Hosts call these when a content type adopts the field (column type),
/// when values are read or submitted (normalization), when records are saved
/// (serialization) and when edit forms are drawn (input markup).
pub trait FieldType {
    /// Human-readable name of the field type, translated by `host`.
    fn display_name<'h>(&self, host: &'h impl HostTranslator) -> Cow<'h, str>;

    /// The handle this field instance is configured with.
    fn handle(&self) -> &str;

    fn is_required(&self) -> bool {
        false
    }

    /// Whether values need a dedicated storage column.
    fn has_content_column(&self) -> bool {
        true
    }

    /// The column a dedicated storage column should be created with.
    ///
    /// Only meaningful when [`FieldType::has_content_column`] returns `true`.
    fn storage_column_type(&self) -> ColumnType;

    /// Prepares a raw value for use.
    fn normalize_value(
        &self,
        raw: FieldValue,
        record: Option<&RecordRef>,
    ) -> FieldResult<FieldValue>;

    /// Prepares a value for storage.
    fn serialize_value(
        &self,
        value: &FieldValue,
        record: Option<&RecordRef>,
        host: &impl HostSerializer,
    ) -> SerializedValue {
        host.serialize_value(value, record)
    }

    /// Renders the edit-form input for `value`.
    fn render_input_markup(
        &self,
        value: Option<&FieldValue>,
        record: Option<&RecordRef>,
        host: &impl HostView,
    ) -> FieldResult<String>;

    /// Whether `value` counts as "no value" for required-ness checks.
    fn is_value_empty(&self, value: &FieldValue) -> bool {
        value.is_empty()
    }

    /// Checks a normalized value before the owning record is saved.
    fn validate_value(&self, value: &FieldValue) -> FieldResult<()> {
        self.validate_required(value)
    }

    /// Rejects empty values for required fields.
    fn validate_required(&self, value: &FieldValue) -> FieldResult<()> {
        if self.is_required() && self.is_value_empty(value) {
            return Err(FieldError::value().with_message(alloc::format!(
                "{} cannot be blank.",
                self.handle()
            )));
        }
        Ok(())
    }
}

/// A dropdown field whose options are timezone abbreviation codes.
///
/// ```rust
/// use timezone_field::{FieldSettings, FieldType, FieldValue, NamespacedView, TimezoneField};
///
/// let field = TimezoneField::new(FieldSettings::new("timezone"));
/// let value = field.normalize_value(FieldValue::from("UTC"), None).unwrap();
/// let html = field
///     .render_input_markup(Some(&value), None, &NamespacedView::new("fields"))
///     .unwrap();
/// assert!(html.starts_with(r#"<select id="fields-timezone" name="fields[timezone]">"#));
/// assert!(html.contains(r#"<option value="UTC" selected>UTC</option>"#));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimezoneField<P: OptionProvider = TimezoneOptionTable> {
    settings: FieldSettings,
    provider: P,
}

impl TimezoneField {
    /// Creates a field backed by the shipped timezone table.
    pub fn new(settings: FieldSettings) -> Self {
        Self::with_provider(settings, TimezoneOptionTable)
    }
}

impl<P: OptionProvider> TimezoneField<P> {
    /// Creates a field that reads its options from `provider`.
    pub fn with_provider(settings: FieldSettings, provider: P) -> Self {
        Self { settings, provider }
    }

    pub fn settings(&self) -> &FieldSettings {
        &self.settings
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Works out which entry of the rendered select is pre-selected.
    ///
    /// Only the first option matching a text value is marked, so abbreviations
    /// listed more than once select a single entry.
    fn selection(&self, value: Option<&FieldValue>) -> Selection {
        let text = value.and_then(FieldValue::as_str);
        if let Some(idx) = text.and_then(|text| self.provider.position(text)) {
            return Selection::Option(idx);
        }
        if value.map_or(true, FieldValue::is_empty) {
            return match self.settings.placeholder {
                Some(_) => Selection::Placeholder,
                None => Selection::None,
            };
        }
        #[cfg(feature = "log")]
        log::debug!(
            "value {:?} of field `{}` matches no option",
            value,
            self.settings.handle
        );
        Selection::None
    }

    fn check_membership(&self, value: &FieldValue) -> FieldResult<()> {
        let Some(text) = value.as_str() else {
            return Ok(());
        };
        if text.is_empty() || self.provider.contains(text) {
            return Ok(());
        }
        #[cfg(feature = "log")]
        log::warn!(
            "rejecting unknown timezone code {text:?} for field `{}`",
            self.settings.handle
        );
        Err(FieldError::value().with_message(alloc::format!(
            "{text:?} is not a recognized timezone code."
        )))
    }
}

impl<P: OptionProvider> FieldType for TimezoneField<P> {
    fn display_name<'h>(&self, host: &'h impl HostTranslator) -> Cow<'h, str> {
        host.translate(TRANSLATION_CATEGORY, DISPLAY_NAME)
    }

    fn handle(&self) -> &str {
        &self.settings.handle
    }

    fn is_required(&self) -> bool {
        self.settings.required
    }

    fn storage_column_type(&self) -> ColumnType {
        ColumnType::string()
    }

    /// Returns `raw` unchanged.
    ///
    /// With [`ValueValidation::Strict`], non-empty text that is not an option
    /// value is rejected instead.
    fn normalize_value(
        &self,
        raw: FieldValue,
        _record: Option<&RecordRef>,
    ) -> FieldResult<FieldValue> {
        if self.settings.validation == ValueValidation::Strict {
            self.check_membership(&raw)?;
        }
        Ok(raw)
    }

    fn render_input_markup(
        &self,
        value: Option<&FieldValue>,
        _record: Option<&RecordRef>,
        host: &impl HostView,
    ) -> FieldResult<String> {
        let handle = self.handle();
        let id = host.namespace_input_id(&host.format_input_id(handle));
        let name = host.namespace_input_name(handle);

        let input = SelectInput {
            id: &id,
            name: &name,
            options: self.provider.list_options(),
            selection: self.selection(value),
            placeholder: self.settings.placeholder.as_deref(),
            required: self.settings.required,
        };

        let mut markup = String::with_capacity(input.writeable_length_hint().capacity());
        input.write_to(&mut markup)?;
        Ok(markup)
    }

    fn validate_value(&self, value: &FieldValue) -> FieldResult<()> {
        self.validate_required(value)?;
        if self.settings.validation == ValueValidation::Strict {
            self.check_membership(value)?;
        }
        Ok(())
    }
}
