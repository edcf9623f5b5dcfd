//! The `OptionProvider` trait.

use crate::TimezoneOption;

/// The `OptionProvider` trait supplies the ordered list of options that a
/// dropdown field renders.
///
/// Implementors must return the same sequence on every call.
pub trait OptionProvider {
    fn list_options(&self) -> &[TimezoneOption];

    /// Returns the index of the first option whose value equals `value`.
    ///
    /// Comparison is exact and case-sensitive.
    fn position(&self, value: &str) -> Option<usize> {
        self.list_options()
            .iter()
            .position(|option| option.value() == value)
    }

    /// Returns whether any option stores `value`.
    fn contains(&self, value: &str) -> bool {
        self.position(value).is_some()
    }
}

impl<P: OptionProvider + ?Sized> OptionProvider for &P {
    fn list_options(&self) -> &[TimezoneOption] {
        (**self).list_options()
    }
}

/// A provider backed by a caller-owned slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceProvider<'data>(pub &'data [TimezoneOption]);

impl OptionProvider for SliceProvider<'_> {
    fn list_options(&self) -> &[TimezoneOption] {
        self.0
    }
}
