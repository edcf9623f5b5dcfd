//! Storage column descriptors.
//!
//! A field tells the host's schema builder what kind of column its values
//! need. The descriptor is abstract (`string`, `text`); [`ColumnType::sql`]
//! resolves it to a physical type for hosts that want one.

use writeable::{impl_display_with_writeable, LengthHint, Writeable};

/// Length used for `string` columns without an explicit length.
pub const DEFAULT_STRING_LENGTH: u32 = 255;

/// The abstract column kinds a field can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// Short, variable-length text.
    String,
    /// Unbounded text.
    Text,
}

/// Describes the column a field's values are stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnType {
    kind: ColumnKind,
    length: Option<u32>,
    nullable: bool,
}

impl ColumnType {
    /// A variable-length string column that does not accept `NULL`.
    pub const fn string() -> Self {
        Self {
            kind: ColumnKind::String,
            length: None,
            nullable: false,
        }
    }

    /// An unbounded text column that does not accept `NULL`.
    pub const fn text() -> Self {
        Self {
            kind: ColumnKind::Text,
            length: None,
            nullable: false,
        }
    }

    /// Sets an explicit length. Ignored for [`ColumnKind::Text`].
    #[must_use]
    pub const fn with_length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    #[must_use]
    pub const fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub const fn kind(&self) -> ColumnKind {
        self.kind
    }

    /// The effective length; `None` for text columns.
    pub const fn length(&self) -> Option<u32> {
        match self.kind {
            ColumnKind::String => match self.length {
                Some(length) => Some(length),
                None => Some(DEFAULT_STRING_LENGTH),
            },
            ColumnKind::Text => None,
        }
    }

    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Returns a formatter for the physical SQL column definition.
    pub const fn sql(&self) -> SqlColumnType {
        SqlColumnType(*self)
    }
}

impl Writeable for ColumnType {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        match self.kind {
            ColumnKind::String => {
                sink.write_str("string")?;
                if let Some(length) = self.length {
                    sink.write_char('(')?;
                    length.write_to(sink)?;
                    sink.write_char(')')?;
                }
                Ok(())
            }
            ColumnKind::Text => sink.write_str("text"),
        }
    }

    fn writeable_length_hint(&self) -> LengthHint {
        match (self.kind, self.length) {
            (ColumnKind::String, Some(length)) => {
                LengthHint::exact(8) + length.writeable_length_hint()
            }
            (ColumnKind::String, None) => LengthHint::exact(6),
            (ColumnKind::Text, _) => LengthHint::exact(4),
        }
    }
}

/// The physical SQL form of a [`ColumnType`], e.g. `varchar(255) NOT NULL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SqlColumnType(ColumnType);

impl Writeable for SqlColumnType {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        match self.0.length() {
            Some(length) => {
                sink.write_str("varchar(")?;
                length.write_to(sink)?;
                sink.write_char(')')?;
            }
            None => sink.write_str("text")?,
        }
        if !self.0.nullable {
            sink.write_str(" NOT NULL")?;
        }
        Ok(())
    }

    fn writeable_length_hint(&self) -> LengthHint {
        let base = match self.0.length() {
            Some(length) => LengthHint::exact(9) + length.writeable_length_hint(),
            None => LengthHint::exact(4),
        };
        let not_null = if self.0.nullable { 0 } else { 9 };
        base + not_null
    }
}

impl_display_with_writeable!(ColumnType);
impl_display_with_writeable!(SqlColumnType);
