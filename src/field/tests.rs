use super::{FieldType, TimezoneField, DISPLAY_NAME, TRANSLATION_CATEGORY};
use crate::{
    column::{ColumnKind, ColumnType},
    host::{HostSerializer, HostTranslator, HostView},
    ErrorKind, FieldSettings, FieldValue, NamespacedView, RecordRef, SerializedValue,
    ValueValidation,
};
use alloc::{borrow::Cow, string::String, vec::Vec};
use timezone_option_provider::{
    provider::SliceProvider, OptionProvider, TimezoneOption, TimezoneOptionTable,
};
use tinystr::tinystr;

fn field() -> TimezoneField {
    TimezoneField::new(FieldSettings::new("timezone"))
}

fn selected_values(markup: &str) -> Vec<&str> {
    markup
        .split("<option ")
        .filter(|chunk| chunk.contains("\" selected>"))
        .filter_map(|chunk| chunk.strip_prefix("value=\""))
        .filter_map(|chunk| chunk.split('"').next())
        .collect()
}

fn option_count(markup: &str) -> usize {
    markup.matches("<option ").count()
}

struct German;

impl HostTranslator for German {
    fn translate<'a>(&'a self, category: &str, message: &'a str) -> Cow<'a, str> {
        match (category, message) {
            ("timezone-field", "Timezone") => Cow::Owned("Zeitzone".into()),
            _ => Cow::Borrowed(message),
        }
    }
}

/// A catalogue of owned translations.
struct Catalogue(Vec<(String, String, String)>);

impl HostTranslator for Catalogue {
    fn translate<'a>(&'a self, category: &str, message: &'a str) -> Cow<'a, str> {
        self.0
            .iter()
            .find(|(c, m, _)| c == category && m == message)
            .map_or(Cow::Borrowed(message), |(_, _, t)| Cow::Borrowed(t.as_str()))
    }
}

/// Stores codes lowercased, standing in for a host with its own conventions.
struct Lowercasing;

impl HostSerializer for Lowercasing {
    fn serialize_value(&self, value: &FieldValue, _: Option<&RecordRef>) -> SerializedValue {
        match value {
            FieldValue::Text(s) => FieldValue::Text(s.to_lowercase()),
            other => other.clone(),
        }
    }
}

#[test]
fn display_name_is_translated() {
    assert_eq!(field().display_name(&()), "Timezone");
    assert_eq!(field().display_name(&German), "Zeitzone");
    assert_eq!(TRANSLATION_CATEGORY, "timezone-field");
    assert_eq!(DISPLAY_NAME, "Timezone");
}

#[test]
fn display_name_borrows_from_host_catalogue() {
    let host = Catalogue(alloc::vec![(
        "timezone-field".into(),
        "Timezone".into(),
        "Fuseau horaire".into(),
    )]);
    let name = field().display_name(&host);
    assert!(matches!(name, Cow::Borrowed(_)));
    assert_eq!(name, "Fuseau horaire");

    let empty = Catalogue(Vec::new());
    let name = field().display_name(&empty);
    assert!(matches!(name, Cow::Borrowed("Timezone")));
}

#[test]
fn storage_column() {
    let field = field();
    assert!(field.has_content_column());
    let column = field.storage_column_type();
    assert_eq!(column, ColumnType::string());
    assert_eq!(column.kind(), ColumnKind::String);
    assert!(!column.is_nullable());
}

#[test]
fn normalize_is_identity() {
    let field = field();
    let record = RecordRef::new(12);
    let values = [
        FieldValue::Null,
        FieldValue::text(""),
        FieldValue::text("UTC"),
        FieldValue::text("NOT_A_CODE"),
        FieldValue::text("utc"),
        FieldValue::Integer(3),
        FieldValue::Boolean(false),
    ];
    for value in values {
        assert_eq!(field.normalize_value(value.clone(), None), Ok(value.clone()));
        assert_eq!(
            field.normalize_value(value.clone(), Some(&record)),
            Ok(value)
        );
    }
}

#[test]
fn strict_normalize_rejects_unknown_codes() {
    let field = TimezoneField::new(
        FieldSettings::new("timezone").with_validation(ValueValidation::Strict),
    );
    assert_eq!(
        field.normalize_value(FieldValue::text("PST"), None),
        Ok(FieldValue::text("PST"))
    );
    assert_eq!(field.normalize_value(FieldValue::Null, None), Ok(FieldValue::Null));
    assert_eq!(
        field.normalize_value(FieldValue::text(""), None),
        Ok(FieldValue::text(""))
    );
    assert_eq!(
        field.normalize_value(FieldValue::Integer(1), None),
        Ok(FieldValue::Integer(1))
    );

    let err = field
        .normalize_value(FieldValue::text("NOT_A_CODE"), None)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Value);
    assert_eq!(err.message(), "\"NOT_A_CODE\" is not a recognized timezone code.");

    // Case matters.
    assert!(field.normalize_value(FieldValue::text("pst"), None).is_err());
}

#[test]
fn serialize_delegates_to_host() {
    let field = field();
    let value = FieldValue::text("EST");
    assert_eq!(field.serialize_value(&value, None, &()), value);
    assert_eq!(
        field.serialize_value(&value, None, &Lowercasing),
        FieldValue::text("est")
    );
}

#[test]
fn stored_values_round_trip() {
    let field = field();
    let record = RecordRef::new(1);
    for option in TimezoneOptionTable {
        let stored = field.serialize_value(&FieldValue::text(option.value()), Some(&record), &());
        let read = field.normalize_value(stored, Some(&record)).unwrap();
        assert_eq!(read.as_str(), Some(option.value()));
    }
}

#[test]
fn render_selects_matching_option() {
    let markup = field()
        .render_input_markup(Some(&FieldValue::text("UTC")), None, &())
        .unwrap();
    assert!(markup.starts_with(r#"<select id="timezone" name="timezone">"#));
    assert!(markup.ends_with("</select>"));
    assert!(markup.contains(r#"<option value="UTC" selected>UTC</option>"#));
    assert_eq!(selected_values(&markup), ["UTC"]);
    assert_eq!(option_count(&markup), TimezoneOptionTable.len());
}

#[test]
fn render_keeps_table_order() {
    let markup = field().render_input_markup(None, None, &()).unwrap();
    let rendered: Vec<&str> = markup
        .split("<option value=\"")
        .skip(1)
        .filter_map(|chunk| chunk.split('"').next())
        .collect();
    let expected: Vec<&str> = TimezoneOptionTable.iter().map(TimezoneOption::value).collect();
    assert_eq!(rendered, expected);
}

#[test]
fn render_unknown_value_selects_nothing() {
    let field = field();
    for value in [
        FieldValue::text("NOT_A_CODE"),
        FieldValue::text("utc"),
        FieldValue::Integer(0),
    ] {
        let markup = field.render_input_markup(Some(&value), None, &()).unwrap();
        assert!(selected_values(&markup).is_empty());
        assert!(!markup.contains(" selected"));
    }
    let markup = field.render_input_markup(None, None, &()).unwrap();
    assert!(!markup.contains(" selected"));
}

#[test]
fn render_duplicate_code_selects_first_entry() {
    let markup = field()
        .render_input_markup(Some(&FieldValue::text("CST")), None, &())
        .unwrap();
    assert_eq!(selected_values(&markup), ["CST"]);
    assert_eq!(markup.matches(r#"<option value="CST">CST</option>"#).count(), 2);
    let selected_at = markup.find(r#"<option value="CST" selected>"#).unwrap();
    let plain_at = markup.find(r#"<option value="CST">"#).unwrap();
    assert!(selected_at < plain_at);
}

#[test]
fn render_uses_namespaced_ids() {
    let field = TimezoneField::new(FieldSettings::new("eventTimezone"));
    let view = NamespacedView::new("fields");
    let markup = field
        .render_input_markup(Some(&FieldValue::text("GMT")), None, &view)
        .unwrap();
    assert!(markup.starts_with(r#"<select id="fields-eventTimezone" name="fields[eventTimezone]">"#));
    assert_eq!(selected_values(&markup), ["GMT"]);
}

#[test]
fn render_placeholder_and_required() {
    let field = TimezoneField::new(
        FieldSettings::new("tz")
            .with_required(true)
            .with_placeholder("Select a timezone"),
    );
    let markup = field.render_input_markup(None, None, &()).unwrap();
    assert!(markup.starts_with(concat!(
        r#"<select id="tz" name="tz" required>"#,
        r#"<option value="" selected>Select a timezone</option>"#,
        r#"<option value="ACDT">ACDT</option>"#
    )));
    assert_eq!(option_count(&markup), TimezoneOptionTable.len() + 1);

    let markup = field
        .render_input_markup(Some(&FieldValue::text("")), None, &())
        .unwrap();
    assert!(markup.contains(r#"<option value="" selected>"#));

    let markup = field
        .render_input_markup(Some(&FieldValue::text("NOT_A_CODE")), None, &())
        .unwrap();
    assert!(!markup.contains(" selected"));

    let markup = field
        .render_input_markup(Some(&FieldValue::text("WET")), None, &())
        .unwrap();
    assert_eq!(selected_values(&markup), ["WET"]);
    assert!(markup.contains(r#"<option value="">Select a timezone</option>"#));
}

#[test]
fn render_with_custom_provider() {
    const OPTIONS: [TimezoneOption; 2] = [
        TimezoneOption::new(tinystr!(6, "Zulu"), tinystr!(6, "UTC")),
        TimezoneOption::from_code(tinystr!(6, "CET")),
    ];
    let field = TimezoneField::with_provider(FieldSettings::new("tz"), SliceProvider(&OPTIONS));
    assert_eq!(field.provider().list_options().len(), 2);
    let markup = field
        .render_input_markup(Some(&FieldValue::text("UTC")), None, &())
        .unwrap();
    assert_eq!(
        markup,
        concat!(
            r#"<select id="tz" name="tz">"#,
            r#"<option value="UTC" selected>Zulu</option>"#,
            r#"<option value="CET">CET</option>"#,
            "</select>"
        )
    );
}

#[test]
fn required_validation() {
    let optional = field();
    assert!(!optional.is_required());
    assert_eq!(optional.validate_value(&FieldValue::Null), Ok(()));

    let required = TimezoneField::new(FieldSettings::new("timezone").with_required(true));
    assert!(required.is_required());
    assert!(required.is_value_empty(&FieldValue::text("")));
    let err = required.validate_value(&FieldValue::Null).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Value);
    assert_eq!(err.message(), "timezone cannot be blank.");
    assert_eq!(required.validate_value(&FieldValue::text("UTC")), Ok(()));
    // Permissive fields accept any non-empty value.
    assert_eq!(required.validate_value(&FieldValue::text("XYZ")), Ok(()));
}

#[test]
fn strict_validation() {
    let field = TimezoneField::new(
        FieldSettings::new("timezone").with_validation(ValueValidation::Strict),
    );
    assert_eq!(field.validate_value(&FieldValue::Null), Ok(()));
    assert_eq!(field.validate_value(&FieldValue::text("HKT")), Ok(()));
    assert!(field.validate_value(&FieldValue::text("XYZ")).is_err());
}

#[test]
fn settings_accessors() {
    let settings = FieldSettings::new("tz").with_placeholder("-");
    let field = TimezoneField::new(settings.clone());
    assert_eq!(field.settings(), &settings);
    assert_eq!(field.handle(), "tz");
    assert_eq!(field.provider(), &TimezoneOptionTable);
}

#[test]
fn view_hooks_are_used_for_ids() {
    struct Prefixed(String);

    impl HostView for Prefixed {
        fn namespace_input_id(&self, id: &str) -> String {
            alloc::format!("{}{id}", self.0)
        }

        fn namespace_input_name(&self, name: &str) -> String {
            alloc::format!("{}{name}", self.0)
        }
    }

    let markup = TimezoneField::new(FieldSettings::new("tz"))
        .render_input_markup(None, None, &Prefixed("x_".into()))
        .unwrap();
    assert!(markup.starts_with(r#"<select id="x_tz" name="x_tz">"#));
}
