//! Attribute parsers.
//!
//! A parser turns the raw string of one attribute into an [`AttrValue`]. Parsers
//! are registered in a [`ParserTable`] under the attribute name they apply to;
//! an attribute without an entry resolves to its raw string.

use std::collections::HashMap;
use std::fmt;

use super::value::AttrValue;
use crate::error::{AttributeError, Result};
use crate::node::TreeNode;

/// What a parser sees when an attribute is read.
#[derive(Clone, Copy)]
pub struct ParserParams<'a> {
    /// Raw value captured from the node
    pub value: &'a str,
    /// Lowercased attribute name
    pub name: &'a str,
    /// The node the attribute was read from
    pub node: &'a dyn TreeNode,
}

pub type AttributeParser = Box<dyn Fn(&ParserParams<'_>) -> Result<AttrValue>>;

/// Mapping from attribute name to the parser applied on read.
///
/// Names are stored lowercased, matching how attribute names are captured.
#[derive(Default)]
pub struct ParserTable {
    parsers: HashMap<String, AttributeParser>,
}

impl ParserTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a parser (builder style).
    pub fn with<F>(mut self, name: &str, parser: F) -> Self
    where
        F: Fn(&ParserParams<'_>) -> Result<AttrValue> + 'static,
    {
        self.insert(name, parser);
        self
    }

    /// Register a parser, returning the one it replaces.
    pub fn insert<F>(&mut self, name: &str, parser: F) -> Option<AttributeParser>
    where
        F: Fn(&ParserParams<'_>) -> Result<AttrValue> + 'static,
    {
        self.parsers.insert(name.to_lowercase(), Box::new(parser))
    }

    pub fn remove(&mut self, name: &str) -> Option<AttributeParser> {
        self.parsers.remove(&name.to_lowercase())
    }

    pub fn get(&self, name: &str) -> Option<&AttributeParser> {
        self.parsers.get(&name.to_lowercase())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.parsers.contains_key(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }
}

impl fmt::Debug for ParserTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.parsers.keys().collect();
        names.sort();
        f.debug_struct("ParserTable").field("parsers", &names).finish()
    }
}

/// Parse `true/false`, `yes/no`, `on/off` or `1/0` (case-insensitive).
pub fn boolean(params: &ParserParams<'_>) -> Result<AttrValue> {
    match params.value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(AttrValue::Bool(true)),
        "false" | "no" | "off" | "0" => Ok(AttrValue::Bool(false)),
        _ => Err(AttributeError::invalid_value(
            params.name,
            params.value,
            "expected a boolean",
        )),
    }
}

pub fn integer(params: &ParserParams<'_>) -> Result<AttrValue> {
    params
        .value
        .trim()
        .parse::<i64>()
        .map(AttrValue::Int)
        .map_err(|e| AttributeError::invalid_value(params.name, params.value, e.to_string()))
}

pub fn float(params: &ParserParams<'_>) -> Result<AttrValue> {
    params
        .value
        .trim()
        .parse::<f64>()
        .map(AttrValue::Float)
        .map_err(|e| AttributeError::invalid_value(params.name, params.value, e.to_string()))
}

/// Split a comma separated value, trimming items and dropping empty ones.
pub fn list(params: &ParserParams<'_>) -> Result<AttrValue> {
    Ok(AttrValue::List(
        params
            .value
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{ConfigTreeNode, TagController};

    struct Probe;
    impl TagController for Probe {
        fn tag_type(&self) -> &'static str {
            "Probe"
        }
    }

    fn run(
        parser: fn(&ParserParams<'_>) -> Result<AttrValue>,
        value: &str,
    ) -> Result<AttrValue> {
        let node = ConfigTreeNode::new("probe", Probe);
        parser(&ParserParams {
            value,
            name: "probe",
            node: &node,
        })
    }

    #[test]
    fn boolean_accepts_common_spellings() {
        for raw in ["true", "YES", "on", "1"] {
            assert_eq!(run(boolean, raw).unwrap(), AttrValue::Bool(true));
        }
        for raw in ["false", "No", "OFF", "0"] {
            assert_eq!(run(boolean, raw).unwrap(), AttrValue::Bool(false));
        }
    }

    #[test]
    fn boolean_rejects_garbage() {
        let err = run(boolean, "maybe").unwrap_err();
        assert!(matches!(err, AttributeError::InvalidValue { ref value, .. } if value == "maybe"));
    }

    #[test]
    fn integer_parses_and_rejects() {
        assert_eq!(run(integer, " 42 ").unwrap(), AttrValue::Int(42));
        assert!(run(integer, "4.2").is_err());
    }

    #[test]
    fn float_parses() {
        assert_eq!(run(float, "0.5").unwrap(), AttrValue::Float(0.5));
        assert!(run(float, "half").is_err());
    }

    #[test]
    fn list_splits_on_commas() {
        assert_eq!(
            run(list, "a, b,,c ").unwrap(),
            AttrValue::List(vec!["a".into(), "b".into(), "c".into()])
        );
        assert_eq!(run(list, "").unwrap(), AttrValue::List(vec![]));
    }

    #[test]
    fn table_keys_are_case_insensitive() {
        let mut table = ParserTable::new().with("Width", integer);
        assert!(table.contains("width"));
        assert!(table.get("WIDTH").is_some());
        assert_eq!(table.len(), 1);

        assert!(table.insert("width", float).is_some());
        assert_eq!(table.len(), 1);

        assert!(table.remove("wIdTh").is_some());
        assert!(table.is_empty());
    }
}
