//! Schema registry.
//!
//! Associates each tag controller type with its attribute declarations. The
//! registry lives outside the controller types so that no controller has to
//! carry schema storage, and unrelated controller hierarchies never share it.
//!
//! Schemas are not inherited: a controller type that conceptually extends
//! another must declare its full attribute list itself.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::Lazy;
use tracing::debug;

use super::spec::AttributeSpec;
use crate::node::{ControllerKey, TagController};

static GLOBAL_REGISTRY: Lazy<SchemaRegistry> = Lazy::new(SchemaRegistry::new);

/// Mapping from controller type to its ordered attribute declarations.
///
/// Registration is expected once per controller type, before any node of that
/// type is resolved. Re-registering a type replaces its schema (last write wins).
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    schemas: RwLock<HashMap<ControllerKey, Arc<[AttributeSpec]>>>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry used by [`with_attributes`] and
    /// [`ResolvedAttributes::resolve`](super::ResolvedAttributes::resolve).
    pub fn global() -> &'static SchemaRegistry {
        &GLOBAL_REGISTRY
    }

    pub fn register<C: TagController>(&self, specs: Vec<AttributeSpec>) {
        self.register_key(ControllerKey::of::<C>(), specs);
    }

    pub fn register_key(&self, key: ControllerKey, specs: Vec<AttributeSpec>) {
        debug!(
            controller = key.type_name(),
            attributes = specs.len(),
            "registering attribute schema"
        );
        // Lock poisoning cannot leave the map half-written, so recover the guard.
        let mut schemas = self.schemas.write().unwrap_or_else(PoisonError::into_inner);
        schemas.insert(key, specs.into());
    }

    /// Declarations for a controller type; empty when none were registered.
    pub fn lookup<C: TagController>(&self) -> Arc<[AttributeSpec]> {
        self.lookup_key(ControllerKey::of::<C>())
    }

    pub fn lookup_key(&self, key: ControllerKey) -> Arc<[AttributeSpec]> {
        let schemas = self.schemas.read().unwrap_or_else(PoisonError::into_inner);
        schemas
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Arc::from(Vec::new()))
    }

    pub fn is_registered(&self, key: ControllerKey) -> bool {
        let schemas = self.schemas.read().unwrap_or_else(PoisonError::into_inner);
        schemas.contains_key(&key)
    }

    /// Number of controller types with a registered schema.
    pub fn len(&self) -> usize {
        self.schemas
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Declare the attributes recognized by controller type `C`.
///
/// Registers into [`SchemaRegistry::global`]. Call it once per controller
/// type, typically right next to the type's definition or from the host's
/// initialization code.
pub fn with_attributes<C: TagController>(specs: Vec<AttributeSpec>) {
    SchemaRegistry::global().register::<C>(specs);
}
