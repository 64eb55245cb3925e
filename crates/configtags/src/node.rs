//! Tree node and tag controller seams.
//!
//! The attribute layer only needs two things from a config-tag tree: the raw
//! attributes of a node, and the controller that owns it. Hosts plug their own
//! node model in through [`TreeNode`]; [`ConfigTreeNode`] is a minimal
//! implementation for hosts that have nothing richer.

use std::any::{type_name, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identity of a tag controller type, used as the schema registry key.
///
/// Two keys are equal when they were built from the same Rust type. The type
/// name is carried for diagnostics only.
#[derive(Clone, Copy)]
pub struct ControllerKey {
    id: TypeId,
    name: &'static str,
}

impl ControllerKey {
    pub fn of<C: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<C>(),
            name: type_name::<C>(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for ControllerKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ControllerKey {}

impl Hash for ControllerKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for ControllerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ControllerKey").field(&self.name).finish()
    }
}

/// The behavior governing one kind of config-tree node.
pub trait TagController: 'static {
    /// Declared type label of the tag (e.g. `"Box"`), used in error messages.
    fn tag_type(&self) -> &'static str;

    /// Identity under which this controller's attribute schema is registered.
    ///
    /// Defaults to the implementing type, so every controller type owns an
    /// independent schema.
    fn controller_key(&self) -> ControllerKey {
        ControllerKey::of::<Self>()
    }
}

/// A single `name="value"` pair as written on a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAttribute {
    pub name: String,
    pub value: String,
}

impl RawAttribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A node of a config-tag tree, as seen by the attribute layer.
pub trait TreeNode {
    /// Raw attributes in source order.
    fn raw_attributes(&self) -> &[RawAttribute];

    /// The controller instance owning this node.
    fn controller(&self) -> &dyn TagController;
}

/// Minimal concrete tree node: a tag name, its raw attributes and a controller.
pub struct ConfigTreeNode {
    tag_name: String,
    attributes: Vec<RawAttribute>,
    controller: Box<dyn TagController>,
}

impl ConfigTreeNode {
    pub fn new(tag_name: impl Into<String>, controller: impl TagController) -> Self {
        Self {
            tag_name: tag_name.into(),
            attributes: Vec::new(),
            controller: Box::new(controller),
        }
    }

    /// Append a raw attribute (builder style).
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(RawAttribute::new(name, value));
        self
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }
}

impl TreeNode for ConfigTreeNode {
    fn raw_attributes(&self) -> &[RawAttribute] {
        &self.attributes
    }

    fn controller(&self) -> &dyn TagController {
        self.controller.as_ref()
    }
}

impl fmt::Debug for ConfigTreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigTreeNode")
            .field("tag_name", &self.tag_name)
            .field("attributes", &self.attributes)
            .field("controller", &self.controller.tag_type())
            .finish()
    }
}
