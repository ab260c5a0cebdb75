//! Build-once access to a defaults registry
//!
//! A [`SharedRegistry`] is owned by whoever runs the comparison and handed
//! to consumers by reference. The registry is built on first access; callers
//! racing on that first access wait for a single build and then all observe
//! the same registry.

use std::sync::{Mutex, OnceLock};

use crate::error::Result;
use crate::registry::DefaultsRegistry;
use crate::source::{DEFINITION_ROOTS, DefinitionSource};

/// Lazily built, read-only defaults registry.
#[derive(Debug)]
pub struct SharedRegistry {
    source: DefinitionSource,
    roots: Vec<String>,
    registry: OnceLock<DefaultsRegistry>,
    build_lock: Mutex<()>,
}

impl SharedRegistry {
    /// Registry built from the standard catalogues of `source`.
    pub fn new(source: DefinitionSource) -> Self {
        Self::with_roots(source, DEFINITION_ROOTS)
    }

    pub fn with_roots<I, S>(source: DefinitionSource, roots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            source,
            roots: roots.into_iter().map(Into::into).collect(),
            registry: OnceLock::new(),
            build_lock: Mutex::new(()),
        }
    }

    /// Registry built from the bundled catalogues.
    pub fn bundled() -> Self {
        Self::new(DefinitionSource::Bundled)
    }

    /// Get the registry, building it if this is the first access.
    ///
    /// A failed build is not remembered; the next call tries again.
    pub fn get(&self) -> Result<&DefaultsRegistry> {
        if let Some(registry) = self.registry.get() {
            return Ok(registry);
        }

        let _guard = self.build_lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(registry) = self.registry.get() {
            return Ok(registry);
        }

        tracing::debug!(source = ?self.source, "Building defaults registry on first access");
        let registry = DefaultsRegistry::load_roots(&self.source, &self.roots)?;
        Ok(self.registry.get_or_init(|| registry))
    }

    /// True once a build has completed.
    pub fn is_built(&self) -> bool {
        self.registry.get().is_some()
    }

    pub fn source(&self) -> &DefinitionSource {
        &self.source
    }
}

impl Default for SharedRegistry {
    fn default() -> Self {
        Self::bundled()
    }
}
