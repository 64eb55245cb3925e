//! Per-node attribute resolution.
//!
//! [`ResolvedAttributes`] is built once per node. Construction captures the
//! node's raw attributes, validates them against the controller's schema and
//! fails with [`AttributeError::MissingRequired`] if a required attribute is
//! absent or empty. After that the captured set never changes.
//!
//! Reads are lazy and uncached: every [`get`](ResolvedAttributes::get) looks the
//! parser up in the current [`ParserTable`] and runs it on the captured raw
//! string. Swapping parsers after construction therefore changes what reads
//! return, while the raw strings stay as captured.

use std::collections::BTreeMap;

use tracing::{debug, trace, warn};

use super::parser::{ParserParams, ParserTable};
use super::registry::SchemaRegistry;
use super::spec::{effective_specs, find_spec, AttributeSpec};
use super::value::AttrValue;
use crate::config::ResolverConfig;
use crate::error::{AttributeError, Result};
use crate::node::TreeNode;

/// Where a resolved attribute's value comes from.
#[derive(Debug, Clone)]
enum Source {
    /// Raw string captured from the node, parsed on read
    Captured(String),
    /// Declared default, returned as declared
    Default(AttrValue),
}

#[derive(Debug, Clone)]
struct Entry {
    name: String,
    source: Source,
}

/// The validated attributes of one node.
pub struct ResolvedAttributes<'n> {
    node: &'n dyn TreeNode,
    entries: Vec<Entry>,
    parsers: ParserTable,
}

impl<'n> ResolvedAttributes<'n> {
    /// Resolve against the global schema registry with the default config.
    pub fn resolve(node: &'n dyn TreeNode, parsers: ParserTable) -> Result<Self> {
        Self::resolve_with(
            node,
            parsers,
            SchemaRegistry::global(),
            &ResolverConfig::default(),
        )
    }

    pub fn resolve_with(
        node: &'n dyn TreeNode,
        parsers: ParserTable,
        registry: &SchemaRegistry,
        config: &ResolverConfig,
    ) -> Result<Self> {
        let controller = node.controller();
        let specs = registry.lookup_key(controller.controller_key());
        let tag_type = controller.tag_type();

        let mut entries: Vec<Entry> = Vec::with_capacity(node.raw_attributes().len());
        for raw in node.raw_attributes() {
            let name = raw.name.to_lowercase();

            validate(&specs, &name, &raw.value, tag_type)?;

            if entries.iter().any(|entry| entry.name == name) {
                warn!(
                    tag = tag_type,
                    attribute = %name,
                    "duplicate attribute on node, keeping the first value"
                );
                continue;
            }
            entries.push(Entry {
                name,
                source: Source::Captured(raw.value.clone()),
            });
        }

        for spec in effective_specs(&specs) {
            let name = spec.name.to_lowercase();
            if entries.iter().any(|entry| entry.name == name) {
                continue;
            }
            if spec.required {
                return Err(AttributeError::MissingRequired { name, tag_type });
            }
            if !config.applies_defaults() {
                continue;
            }
            if let Some(default) = &spec.default {
                entries.push(Entry {
                    name,
                    source: Source::Default(default.clone()),
                });
            }
        }

        debug!(
            tag = tag_type,
            attributes = entries.len(),
            parsers = parsers.len(),
            "resolved node attributes"
        );

        Ok(Self {
            node,
            entries,
            parsers,
        })
    }

    /// Read an attribute by name (case-insensitive).
    ///
    /// Returns `Ok(None)` when the node has no such attribute, and the parser's
    /// error when the registered parser rejects the raw value.
    pub fn get(&self, name: &str) -> Result<Option<AttrValue>> {
        let name = name.to_lowercase();
        let Some(entry) = self.entry(&name) else {
            return Ok(None);
        };

        match &entry.source {
            Source::Default(value) => Ok(Some(value.clone())),
            Source::Captured(raw) => match self.parsers.get(&entry.name) {
                Some(parser) => {
                    trace!(attribute = %entry.name, "parsing attribute");
                    parser(&ParserParams {
                        value: raw,
                        name: &entry.name,
                        node: self.node,
                    })
                    .map(Some)
                }
                None => Ok(Some(AttrValue::Text(raw.clone()))),
            },
        }
    }

    /// The raw string captured for an attribute, bypassing parsers.
    ///
    /// Defaults are not raw values, so this is `None` for a defaulted attribute.
    pub fn raw(&self, name: &str) -> Option<&str> {
        match &self.entry(&name.to_lowercase())?.source {
            Source::Captured(raw) => Some(raw),
            Source::Default(_) => None,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entry(&name.to_lowercase()).is_some()
    }

    /// Lowercased attribute names in capture order (defaults last).
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn node(&self) -> &'n dyn TreeNode {
        self.node
    }

    pub fn parsers(&self) -> &ParserTable {
        &self.parsers
    }

    pub fn parsers_mut(&mut self) -> &mut ParserTable {
        &mut self.parsers
    }

    /// Replace the parser table, returning the previous one.
    pub fn set_parsers(&mut self, parsers: ParserTable) -> ParserTable {
        std::mem::replace(&mut self.parsers, parsers)
    }

    /// Resolve every attribute at once, keyed by name.
    pub fn snapshot(&self) -> Result<BTreeMap<String, AttrValue>> {
        let mut values = BTreeMap::new();
        for name in self.names() {
            if let Some(value) = self.get(name)? {
                values.insert(name.to_string(), value);
            }
        }
        Ok(values)
    }

    fn entry(&self, name: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.name == name)
    }
}

impl std::fmt::Debug for ResolvedAttributes<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedAttributes")
            .field("tag", &self.node.controller().tag_type())
            .field("entries", &self.entries)
            .field("parsers", &self.parsers)
            .finish()
    }
}

/// A declared-required attribute must carry a non-empty value.
fn validate(
    specs: &[AttributeSpec],
    name: &str,
    value: &str,
    tag_type: &'static str,
) -> Result<()> {
    match find_spec(specs, name) {
        Some(spec) if spec.required && value.is_empty() => {
            Err(AttributeError::MissingRequired {
                name: name.to_string(),
                tag_type,
            })
        }
        _ => Ok(()),
    }
}

/// Typed attribute sets for concrete tags.
///
/// Implementors supply the parsers for their attributes and wrap the resolved
/// set in their own type; [`from_node`](TagAttributes::from_node) runs the
/// shared capture and validation.
pub trait TagAttributes<'n>: Sized {
    fn parsers() -> ParserTable;

    fn from_resolved(resolved: ResolvedAttributes<'n>) -> Self;

    /// Resolve against the global registry with the default config.
    fn from_node(node: &'n dyn TreeNode) -> Result<Self> {
        Self::from_node_with(node, SchemaRegistry::global(), &ResolverConfig::default())
    }

    fn from_node_with(
        node: &'n dyn TreeNode,
        registry: &SchemaRegistry,
        config: &ResolverConfig,
    ) -> Result<Self> {
        ResolvedAttributes::resolve_with(node, Self::parsers(), registry, config)
            .map(Self::from_resolved)
    }
}
