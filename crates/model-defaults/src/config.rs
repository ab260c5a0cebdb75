//! Configuration for locating definition catalogues
//!
//! ```toml
//! [definitions]
//! dir = "/opt/model-defaults"
//! roots = ["topology", "resources"]
//! ```
//!
//! Without a `dir`, the catalogues bundled with this crate are used.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::shared::SharedRegistry;
use crate::source::{DEFINITION_ROOTS, DefinitionSource};

/// Top-level configuration file
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub definitions: DefinitionsConfig,
}

/// Where definition catalogues come from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefinitionsConfig {
    /// Directory of `<root>.properties` files; bundled catalogues when unset
    #[serde(default)]
    pub dir: Option<PathBuf>,
    /// Catalogue root names to load
    #[serde(default = "default_roots")]
    pub roots: Vec<String>,
}

fn default_roots() -> Vec<String> {
    DEFINITION_ROOTS.iter().map(|r| r.to_string()).collect()
}

impl Default for DefinitionsConfig {
    fn default() -> Self {
        Self {
            dir: None,
            roots: default_roots(),
        }
    }
}

impl DefaultsConfig {
    /// Load configuration from a TOML file.
    ///
    /// A relative `dir` is resolved against the directory holding the file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let mut config: Self = toml::from_str(&content).map_err(|e| Error::InvalidConfig {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        if let (Some(dir), Some(base)) = (config.definitions.dir.as_mut(), path.parent()) {
            if dir.is_relative() {
                *dir = base.join(&*dir);
            }
        }

        tracing::debug!(path = %path.display(), ?config, "Loaded defaults configuration");
        Ok(config)
    }

    /// Definition source described by this configuration.
    pub fn source(&self) -> DefinitionSource {
        match &self.definitions.dir {
            Some(dir) => DefinitionSource::Directory(dir.clone()),
            None => DefinitionSource::Bundled,
        }
    }

    /// Lazily built registry for this configuration.
    pub fn shared_registry(&self) -> SharedRegistry {
        SharedRegistry::with_roots(self.source(), self.definitions.roots.iter().cloned())
    }
}
