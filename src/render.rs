//! Markup for the dropdown input.

use timezone_option_provider::TimezoneOption;
use writeable::{impl_display_with_writeable, LengthHint, Writeable};

/// Text escaped for use in HTML content and double-quoted attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Escaped<'a>(pub &'a str);

const fn escape(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

impl Writeable for Escaped<'_> {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        let mut rest = self.0;
        while let Some((idx, c)) = rest.char_indices().find(|(_, c)| escape(*c).is_some()) {
            sink.write_str(&rest[..idx])?;
            sink.write_str(escape(c).unwrap_or_default())?;
            rest = &rest[idx + c.len_utf8()..];
        }
        sink.write_str(rest)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        let len = self
            .0
            .chars()
            .map(|c| escape(c).map_or(c.len_utf8(), str::len))
            .sum();
        LengthHint::exact(len)
    }
}

/// Which entry of a [`SelectInput`] carries the `selected` attribute.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Nothing is marked; the browser shows the first entry.
    #[default]
    None,
    /// The leading empty option.
    Placeholder,
    /// The option at this index.
    Option(usize),
}

/// A `<select>` element listing a set of options.
#[derive(Debug, Clone, Copy)]
pub struct SelectInput<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub options: &'a [TimezoneOption],
    pub selection: Selection,
    pub placeholder: Option<&'a str>,
    pub required: bool,
}

const SELECTED: &str = " selected";
const OPTION_CLOSE: &str = "</option>";

impl SelectInput<'_> {
    fn write_option<W: core::fmt::Write + ?Sized>(
        sink: &mut W,
        value: &str,
        label: &str,
        selected: bool,
    ) -> core::fmt::Result {
        sink.write_str("<option value=\"")?;
        Escaped(value).write_to(sink)?;
        sink.write_char('"')?;
        if selected {
            sink.write_str(SELECTED)?;
        }
        sink.write_char('>')?;
        Escaped(label).write_to(sink)?;
        sink.write_str(OPTION_CLOSE)
    }

    fn option_length_hint(value: &str, label: &str, selected: bool) -> LengthHint {
        // `<option value="` + `">` + `</option>`
        let fixed = 15 + 2 + OPTION_CLOSE.len() + if selected { SELECTED.len() } else { 0 };
        Escaped(value).writeable_length_hint() + Escaped(label).writeable_length_hint() + fixed
    }
}

impl Writeable for SelectInput<'_> {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        sink.write_str("<select id=\"")?;
        Escaped(self.id).write_to(sink)?;
        sink.write_str("\" name=\"")?;
        Escaped(self.name).write_to(sink)?;
        sink.write_char('"')?;
        if self.required {
            sink.write_str(" required")?;
        }
        sink.write_char('>')?;

        if let Some(placeholder) = self.placeholder {
            let selected = self.selection == Selection::Placeholder;
            Self::write_option(sink, "", placeholder, selected)?;
        }
        for (idx, option) in self.options.iter().enumerate() {
            let selected = self.selection == Selection::Option(idx);
            Self::write_option(sink, option.value(), option.label(), selected)?;
        }

        sink.write_str("</select>")
    }

    fn writeable_length_hint(&self) -> LengthHint {
        // `<select id="` + `" name="` + `">` + `</select>`
        let mut hint = Escaped(self.id).writeable_length_hint()
            + Escaped(self.name).writeable_length_hint()
            + (12 + 8 + 2 + 9);
        if self.required {
            hint += 9;
        }
        if let Some(placeholder) = self.placeholder {
            let selected = self.selection == Selection::Placeholder;
            hint += Self::option_length_hint("", placeholder, selected);
        }
        for (idx, option) in self.options.iter().enumerate() {
            let selected = self.selection == Selection::Option(idx);
            hint += Self::option_length_hint(option.value(), option.label(), selected);
        }
        hint
    }
}

impl_display_with_writeable!(Escaped<'_>);
impl_display_with_writeable!(SelectInput<'_>);

#[cfg(test)]
mod tests {
    use super::{Escaped, SelectInput, Selection};
    use alloc::format;
    use timezone_option_provider::TimezoneOption;
    use tinystr::tinystr;
    use writeable::assert_writeable_eq;

    const OPTIONS: [TimezoneOption; 2] = [
        TimezoneOption::from_code(tinystr!(6, "UTC")),
        TimezoneOption::from_code(tinystr!(6, "GMT")),
    ];

    #[test]
    fn escaping() {
        assert_writeable_eq!(Escaped("UTC"), "UTC");
        assert_writeable_eq!(
            Escaped(r#"<b class="x">Tom & Jerry's</b>"#),
            "&lt;b class=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/b&gt;"
        );
        assert_writeable_eq!(Escaped("Zeitzone wählen…"), "Zeitzone wählen…");
        assert_writeable_eq!(Escaped(""), "");
    }

    #[test]
    fn select_with_selection() {
        let input = SelectInput {
            id: "fields-tz",
            name: "fields[tz]",
            options: &OPTIONS,
            selection: Selection::Option(1),
            placeholder: None,
            required: false,
        };
        assert_writeable_eq!(
            input,
            concat!(
                r#"<select id="fields-tz" name="fields[tz]">"#,
                r#"<option value="UTC">UTC</option>"#,
                r#"<option value="GMT" selected>GMT</option>"#,
                "</select>"
            )
        );
    }

    #[test]
    fn select_with_placeholder() {
        let input = SelectInput {
            id: "tz",
            name: "tz",
            options: &OPTIONS[..1],
            selection: Selection::Placeholder,
            placeholder: Some("Pick <one>"),
            required: true,
        };
        assert_writeable_eq!(
            input,
            concat!(
                r#"<select id="tz" name="tz" required>"#,
                r#"<option value="" selected>Pick &lt;one&gt;</option>"#,
                r#"<option value="UTC">UTC</option>"#,
                "</select>"
            )
        );
    }

    #[test]
    fn select_without_options() {
        let input = SelectInput {
            id: "tz",
            name: "tz",
            options: &[],
            selection: Selection::None,
            placeholder: None,
            required: false,
        };
        assert_writeable_eq!(input, r#"<select id="tz" name="tz"></select>"#);
    }
}
