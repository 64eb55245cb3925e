//! # Configuration
//!
//! Resolver behavior is configured through [`confique`], which layers a TOML
//! file over compiled defaults.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `default_policy` | `ignore` | Whether declared defaults fill in absent attributes |
//!
//! ## Example
//!
//! ```toml
//! default_policy = "apply"
//! ```

use std::path::Path;

use confique::Config;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// What happens to a declared default when the node lacks the attribute.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DefaultPolicy {
    /// Defaults are kept in the schema but never exposed
    #[default]
    Ignore,
    /// Absent optional attributes resolve to their declared default
    Apply,
}

/// Configuration for attribute resolution.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Handling of declared defaults. When absent, defaults to `ignore`.
    pub default_policy: Option<DefaultPolicy>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            default_policy: None,
        }
    }
}

impl ResolverConfig {
    /// Load from `path` (if it exists) over the compiled defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::builder().file(path.as_ref()).load()?)
    }

    pub fn with_policy(policy: DefaultPolicy) -> Self {
        Self {
            default_policy: Some(policy),
        }
    }

    pub fn default_policy(&self) -> DefaultPolicy {
        self.default_policy.unwrap_or_default()
    }

    pub fn applies_defaults(&self) -> bool {
        self.default_policy() == DefaultPolicy::Apply
    }
}
