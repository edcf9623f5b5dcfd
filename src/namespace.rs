//! A `HostView` that scopes inputs under a form namespace.

use alloc::string::String;

use crate::host::HostView;

/// Namespaces input ids and names the way CMS edit forms do: with the
/// namespace `fields`, the handle `tz` becomes the name `fields[tz]` and the
/// id `fields-tz`.
///
/// Nested namespaces such as `matrix[blocks]` are supported.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NamespacedView {
    namespace: Option<String>,
}

impl NamespacedView {
    pub fn new<S: Into<String>>(namespace: S) -> Self {
        let namespace = namespace.into();
        Self {
            namespace: (!namespace.is_empty()).then_some(namespace),
        }
    }

    /// A view without a namespace; ids and names are left as-is.
    pub const fn root() -> Self {
        Self { namespace: None }
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }
}

impl HostView for NamespacedView {
    fn namespace_input_id(&self, id: &str) -> String {
        match &self.namespace {
            Some(namespace) => {
                let prefix = self.format_input_id(namespace);
                alloc::format!("{prefix}-{id}")
            }
            None => id.into(),
        }
    }

    fn namespace_input_name(&self, name: &str) -> String {
        let Some(namespace) = &self.namespace else {
            return name.into();
        };
        // `a[b]` nests as `ns[a][b]`.
        match name.split_once('[') {
            Some((head, rest)) => alloc::format!("{namespace}[{head}][{rest}"),
            None => alloc::format!("{namespace}[{name}]"),
        }
    }
}
