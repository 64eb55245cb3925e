//! Attribute declarations.
//!
//! A tag controller declares the attributes it recognizes as an ordered list of
//! [`AttributeSpec`]s. Declarations are matched against raw attribute names
//! case-insensitively.

use super::value::AttrValue;

/// Declaration of a single recognized attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeSpec {
    /// The attribute name as declared (matched case-insensitively)
    pub name: &'static str,

    /// Whether every node of the tag must carry a non-empty value
    pub required: bool,

    /// Value used for an absent attribute when defaults are applied
    ///
    /// See [`DefaultPolicy`](crate::config::DefaultPolicy): under the default
    /// policy this is stored but never exposed.
    pub default: Option<AttrValue>,
}

impl AttributeSpec {
    /// Create an optional attribute with no default.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            required: false,
            default: None,
        }
    }

    /// Set the required flag.
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_default(mut self, value: impl Into<AttrValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Whether this declaration covers the given attribute name.
    pub fn matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// Look up the declaration for an attribute name.
///
/// When a schema declares the same name more than once, the first declaration
/// in list order wins and later ones are ignored.
pub fn find_spec<'a>(specs: &'a [AttributeSpec], name: &str) -> Option<&'a AttributeSpec> {
    specs.iter().find(|spec| spec.matches(name))
}

/// Declarations that take effect, i.e. the first one for every distinct name.
pub(crate) fn effective_specs(specs: &[AttributeSpec]) -> impl Iterator<Item = &AttributeSpec> {
    specs.iter().filter(move |spec| {
        find_spec(specs, spec.name).is_some_and(|first| std::ptr::eq(first, *spec))
    })
}
