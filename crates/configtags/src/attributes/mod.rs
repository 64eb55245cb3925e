//! # Attribute System
//!
//! Tags of a config tree accept attributes. This module provides:
//!
//! - **Specifications**: what a tag accepts ([`AttributeSpec`]: name, required, default)
//! - **Registry**: per-controller-type schemas ([`SchemaRegistry`], [`with_attributes`])
//! - **Resolution**: validated, lazily parsed attributes of one node ([`ResolvedAttributes`])
//! - **Parsers**: per-attribute transformations of the raw string ([`ParserTable`])
//!
//! ## Resolution Rules
//!
//! | Situation | Outcome |
//! |-----------|---------|
//! | Required attribute absent or empty | [`AttributeError::MissingRequired`](crate::AttributeError::MissingRequired) |
//! | Attribute not in the schema | Accepted, resolved like any other |
//! | No parser for the attribute | Raw string, unchanged |
//! | Parser registered | Parser output, recomputed on every read |
//! | Optional attribute absent | Not present, unless defaults are applied |
//!
//! Attribute names are case-insensitive and exposed lowercased.
//!
//! ## Usage
//!
//! ```ignore
//! // Declaring a schema
//! with_attributes::<ImageTag>(vec![
//!     AttributeSpec::new("src").required(),
//!     AttributeSpec::new("width"),
//! ]);
//!
//! // Resolving a node
//! let parsers = ParserTable::new().with("width", parser::integer);
//! let attrs = ResolvedAttributes::resolve(&node, parsers)?;
//! let width = attrs.get("width")?;
//! ```

pub mod parser;
mod registry;
mod resolver;
mod spec;
mod value;

pub use parser::{AttributeParser, ParserParams, ParserTable};
pub use registry::{with_attributes, SchemaRegistry};
pub use resolver::{ResolvedAttributes, TagAttributes};
pub use spec::{find_spec, AttributeSpec};
pub use value::AttrValue;
