//! # configtags
//!
//! Attribute schemas and attribute resolution for config-tag trees.
//!
//! A config-tag tree is a markup-like configuration: every node is a tag with a
//! flat list of string attributes and a controller that governs its behavior.
//! This crate covers the attribute layer of such a tree:
//!
//! - **Schema registry**: each controller type declares the attributes it
//!   recognizes (name, required flag, optional default) in a process-wide
//!   registry keyed by the controller's type identity.
//! - **Attribute resolution**: for one node, the raw attributes are captured,
//!   validated against the controller's schema, and exposed by name. Reads are
//!   lazy: a value is run through the matching parser on every access.
//!
//! ## Usage
//!
//! ```
//! use configtags::attributes::{with_attributes, AttrValue, AttributeSpec, ParserTable, ResolvedAttributes};
//! use configtags::node::{ConfigTreeNode, TagController};
//!
//! struct BoxTag;
//!
//! impl TagController for BoxTag {
//!     fn tag_type(&self) -> &'static str {
//!         "Box"
//!     }
//! }
//!
//! with_attributes::<BoxTag>(vec![AttributeSpec::new("width").required()]);
//!
//! let node = ConfigTreeNode::new("box", BoxTag)
//!     .attr("width", "10")
//!     .attr("color", "red");
//!
//! let attrs = ResolvedAttributes::resolve(&node, ParserTable::new()).unwrap();
//! assert_eq!(attrs.get("width").unwrap(), Some(AttrValue::text("10")));
//! assert_eq!(attrs.get("color").unwrap(), Some(AttrValue::text("red")));
//! ```

pub mod attributes;
pub mod config;
pub mod error;
pub mod node;

pub use error::{AttributeError, Result};
