//! This module implements `FieldError`.

use alloc::borrow::Cow;
use core::fmt;

/// `FieldError`'s error type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Error.
    #[default]
    Generic,
    /// A value was rejected by the field.
    Value,
    /// Input markup could not be written.
    Render,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Generic => "Error",
            Self::Value => "ValueError",
            Self::Render => "RenderError",
        })
    }
}

/// The error returned by field operations.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    kind: ErrorKind,
    msg: Cow<'static, str>,
}

impl FieldError {
    #[inline]
    #[must_use]
    const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: Cow::Borrowed(""),
        }
    }

    /// Creates a generic error with the provided message.
    #[inline]
    #[must_use]
    pub fn general<S>(msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self::new(ErrorKind::Generic).with_message(msg)
    }

    /// Creates a value error.
    #[inline]
    #[must_use]
    pub const fn value() -> Self {
        Self::new(ErrorKind::Value)
    }

    /// Creates a render error.
    #[inline]
    #[must_use]
    pub const fn render() -> Self {
        Self::new(ErrorKind::Render)
    }

    /// Sets the message of the current error.
    #[must_use]
    pub fn with_message<S>(mut self, msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.msg = msg.into();
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// Extracts the error message.
    #[inline]
    #[must_use]
    pub fn into_message(self) -> Cow<'static, str> {
        self.msg
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        let msg = self.msg.trim();
        if !msg.is_empty() {
            write!(f, ": {msg}")?;
        }

        Ok(())
    }
}

impl From<fmt::Error> for FieldError {
    fn from(_: fmt::Error) -> Self {
        Self::render().with_message("failed to write input markup")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FieldError {}
