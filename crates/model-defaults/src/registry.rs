//! Defaults registry keyed by folder path
//!
//! The registry maps folder paths (such as `topology.Server.SSL`) to the
//! attribute defaults registered for that folder. It is produced once by a
//! [`RegistryBuilder`](crate::RegistryBuilder) and never mutated afterwards.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::Serialize;

use crate::error::Result;
use crate::loader::RegistryBuilder;
use crate::scalar::ScalarType;
use crate::source::{DEFINITION_ROOTS, DefinitionSource};

/// Folder name reported by the defaults returned for unknown folder paths.
pub const EMPTY_FOLDER_NAME: &str = "empty";

static EMPTY_DEFAULTS: LazyLock<FolderDefaults> =
    LazyLock::new(|| FolderDefaults::new(EMPTY_FOLDER_NAME));

/// Declared type and default literals for one attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeDefault {
    #[serde(rename = "type")]
    scalar_type: ScalarType,
    values: Vec<String>,
}

impl AttributeDefault {
    pub fn new(scalar_type: ScalarType, values: Vec<String>) -> Self {
        Self {
            scalar_type,
            values,
        }
    }

    pub fn scalar_type(&self) -> ScalarType {
        self.scalar_type
    }

    /// Literal spellings that count as the default, in definition order.
    ///
    /// May be empty: the attribute is known but has no default.
    pub fn values(&self) -> &[String] {
        &self.values
    }
}

/// Attribute defaults registered for a single folder path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderDefaults {
    folder: String,
    attributes: BTreeMap<String, AttributeDefault>,
}

impl FolderDefaults {
    pub(crate) fn new(folder: impl Into<String>) -> Self {
        Self {
            folder: folder.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// The folder path these defaults belong to.
    pub fn folder_name(&self) -> &str {
        &self.folder
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeDefault> {
        self.attributes.get(name)
    }

    /// Attributes sorted by name.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &AttributeDefault)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Register the default for an attribute, replacing any earlier one.
    pub(crate) fn set_attribute_default(&mut self, name: impl Into<String>, default: AttributeDefault) {
        self.attributes.insert(name.into(), default);
    }
}

/// Immutable mapping from folder path to [`FolderDefaults`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DefaultsRegistry {
    folders: BTreeMap<String, FolderDefaults>,
}

impl DefaultsRegistry {
    pub(crate) fn from_folders(folders: BTreeMap<String, FolderDefaults>) -> Self {
        Self { folders }
    }

    /// Build a registry from the standard catalogues of `source`.
    pub fn load(source: &DefinitionSource) -> Result<Self> {
        Self::load_roots(source, DEFINITION_ROOTS)
    }

    /// Build a registry from the named catalogues of `source`.
    ///
    /// Any unavailable catalogue or malformed key aborts the build.
    pub fn load_roots<I, S>(source: &DefinitionSource, roots: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = RegistryBuilder::new();
        for root in roots {
            builder.load_source(source, root.as_ref())?;
        }
        Ok(builder.build())
    }

    /// Build a registry from the catalogues compiled into this crate.
    pub fn bundled() -> Result<Self> {
        Self::load(&DefinitionSource::Bundled)
    }

    /// Defaults for `folder_path`.
    ///
    /// Unknown folder paths resolve to a shared empty set of defaults rather
    /// than an error.
    pub fn lookup(&self, folder_path: &str) -> &FolderDefaults {
        match self.folders.get(folder_path) {
            Some(defaults) => defaults,
            None => {
                tracing::trace!(folder = folder_path, "No defaults registered, using empty defaults");
                &*EMPTY_DEFAULTS
            }
        }
    }

    pub fn contains(&self, folder_path: &str) -> bool {
        self.folders.contains_key(folder_path)
    }

    /// Registered folder paths, sorted.
    pub fn folder_paths(&self) -> impl Iterator<Item = &str> {
        self.folders.keys().map(String::as_str)
    }

    /// Number of registered folders.
    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }
}
