//! Where definition catalogues are read from

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Root names of the definition catalogues, in load order.
pub const DEFINITION_ROOTS: [&str; 3] = ["topology", "resources", "appDeployments"];

/// File extension of a catalogue inside a definitions directory.
pub const DEFINITION_EXTENSION: &str = "properties";

const BUNDLED_TOPOLOGY: &str = include_str!("../definitions/topology.properties");
const BUNDLED_RESOURCES: &str = include_str!("../definitions/resources.properties");
const BUNDLED_APP_DEPLOYMENTS: &str = include_str!("../definitions/appDeployments.properties");

/// Origin of the definition catalogues.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DefinitionSource {
    /// Catalogues compiled into this crate.
    #[default]
    Bundled,
    /// A directory holding `<root>.properties` files.
    Directory(PathBuf),
}

impl DefinitionSource {
    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self::Directory(path.into())
    }

    /// Read the catalogue text for `root`.
    ///
    /// # Errors
    ///
    /// [`Error::DefinitionSourceUnavailable`] when the catalogue does not
    /// exist or cannot be read.
    pub fn read(&self, root: &str) -> Result<String> {
        match self {
            DefinitionSource::Bundled => bundled(root)
                .map(str::to_string)
                .ok_or_else(|| Error::unavailable(root, "no bundled catalogue with this name")),
            DefinitionSource::Directory(dir) => read_catalogue(&Self::catalogue_path(dir, root), root),
        }
    }

    /// Path of the catalogue file for `root` inside `dir`.
    pub fn catalogue_path(dir: &Path, root: &str) -> PathBuf {
        dir.join(format!("{root}.{DEFINITION_EXTENSION}"))
    }
}

fn bundled(root: &str) -> Option<&'static str> {
    match root {
        "topology" => Some(BUNDLED_TOPOLOGY),
        "resources" => Some(BUNDLED_RESOURCES),
        "appDeployments" => Some(BUNDLED_APP_DEPLOYMENTS),
        _ => None,
    }
}

fn read_catalogue(path: &Path, root: &str) -> Result<String> {
    tracing::debug!(path = %path.display(), root, "Reading definition catalogue");
    fs::read_to_string(path)
        .map_err(|e| Error::unavailable(root, format!("failed to read {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_roots_are_present() {
        for root in DEFINITION_ROOTS {
            let text = DefinitionSource::Bundled.read(root).unwrap();
            assert!(!text.trim().is_empty(), "{root} catalogue is empty");
        }
    }

    #[test]
    fn test_unknown_bundled_root_is_unavailable() {
        let err = DefinitionSource::Bundled.read("domainInfo").unwrap_err();
        assert!(matches!(err, Error::DefinitionSourceUnavailable { ref name, .. } if name == "domainInfo"));
    }

    #[test]
    fn test_missing_directory_catalogue_is_unavailable() {
        let temp = tempfile::TempDir::new().unwrap();
        let source = DefinitionSource::directory(temp.path());
        let err = source.read("topology").unwrap_err();
        assert!(err.is_build_error());
        assert!(err.to_string().contains("topology.properties"));
    }

    #[test]
    fn test_catalogue_path() {
        let path = DefinitionSource::catalogue_path(Path::new("/defs"), "resources");
        assert_eq!(path, PathBuf::from("/defs/resources.properties"));
    }
}
