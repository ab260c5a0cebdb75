//! Registry context resolution
//!
//! Decides where definition catalogues are read from, in order of
//! precedence: an explicit definitions directory, a configuration file,
//! then the catalogues bundled with the library.

use std::path::Path;

use model_defaults::{DefaultsConfig, DefinitionSource, SharedRegistry};

use crate::error::Result;

/// Build the lazily-loaded registry for this invocation.
pub fn resolve_registry(
    config: Option<&Path>,
    definitions_dir: Option<&Path>,
) -> Result<SharedRegistry> {
    let mut defaults_config = match config {
        Some(path) => DefaultsConfig::load(path)?,
        None => DefaultsConfig::default(),
    };

    if let Some(dir) = definitions_dir {
        defaults_config.definitions.dir = Some(dir.to_path_buf());
    }

    let shared = defaults_config.shared_registry();
    tracing::debug!(source = ?shared.source(), "Resolved definition source");
    Ok(shared)
}

/// Describe a definition source for display.
pub fn describe_source(source: &DefinitionSource) -> String {
    match source {
        DefinitionSource::Bundled => "bundled definitions".to_string(),
        DefinitionSource::Directory(dir) => dir.display().to_string(),
    }
}
