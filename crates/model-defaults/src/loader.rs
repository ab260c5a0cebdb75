//! Registry construction from definition catalogues
//!
//! Each catalogue is a property file whose keys follow the grammar in
//! [`crate::key`] and whose values are comma-separated default literals.
//! Entries are applied in file order, so a later definition of the same
//! attribute replaces an earlier one.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::key::parse_key;
use crate::properties::{parse_properties, parse_value_list};
use crate::registry::{AttributeDefault, DefaultsRegistry, FolderDefaults};
use crate::source::DefinitionSource;

/// Accumulates folder defaults before freezing them into a registry.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    folders: BTreeMap<String, FolderDefaults>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the catalogue `root` from `source` and add its entries.
    pub fn load_source(&mut self, source: &DefinitionSource, root: &str) -> Result<&mut Self> {
        let text = source.read(root)?;
        self.add_definitions(root, &text)
    }

    /// Add every entry of the property text `text` under root name `root`.
    ///
    /// # Errors
    ///
    /// Fails on the first malformed key or undecodable escape; entries added
    /// before the failure remain in the builder.
    pub fn add_definitions(&mut self, root: &str, text: &str) -> Result<&mut Self> {
        let properties = parse_properties(root, text)?;
        tracing::debug!(root, entries = properties.len(), "Loading attribute defaults");

        for property in &properties {
            let key = parse_key(root, &property.key)?;
            let values = parse_value_list(&property.value);
            self.folders
                .entry(key.folder_path)
                .or_insert_with_key(|folder| FolderDefaults::new(folder.clone()))
                .set_attribute_default(key.attribute_name, AttributeDefault::new(key.scalar_type, values));
        }

        Ok(self)
    }

    /// Freeze the accumulated defaults into an immutable registry.
    pub fn build(self) -> DefaultsRegistry {
        tracing::info!(folders = self.folders.len(), "Built attribute defaults registry");
        if tracing::enabled!(tracing::Level::TRACE) {
            for (folder, defaults) in &self.folders {
                for (name, default) in defaults.attributes() {
                    tracing::trace!(
                        folder = folder.as_str(),
                        attribute = name,
                        scalar_type = %default.scalar_type(),
                        values = ?default.values(),
                        "Registered attribute default"
                    );
                }
            }
        }
        DefaultsRegistry::from_folders(self.folders)
    }
}
