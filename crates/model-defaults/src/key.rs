//! Definition key parsing
//!
//! A definition key has the form:
//!
//! ```text
//! [{<type>}.][<folder>.]<attributeName>
//! ```
//!
//! The optional `{type}` prefix declares the attribute's scalar type, the
//! optional dot-separated folder suffix is appended to the root name of the
//! definition source, and the last segment names the attribute.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::scalar::ScalarType;

/// Separator between folder path segments.
pub const FOLDER_SEPARATOR: char = '.';

static TYPE_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\{([A-Za-z]+)\}\.").expect("Invalid type prefix regex"));

/// A definition key broken into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionKey {
    pub scalar_type: ScalarType,
    pub folder_path: String,
    pub attribute_name: String,
}

/// Parse a definition key read from the source named `root`.
///
/// # Errors
///
/// Returns [`Error::MalformedDefinitionKey`] when the key has no attribute
/// name (empty key or trailing dot) or an empty folder segment.
///
/// # Example
///
/// ```
/// use model_defaults::{ScalarType, parse_key};
///
/// let key = parse_key("topology", "{boolean}.Server.ListenAddress").unwrap();
/// assert_eq!(key.folder_path, "topology.Server");
/// assert_eq!(key.attribute_name, "ListenAddress");
/// assert_eq!(key.scalar_type, ScalarType::Boolean);
/// ```
pub fn parse_key(root: &str, key: &str) -> Result<DefinitionKey> {
    let malformed = || Error::MalformedDefinitionKey {
        root: root.to_string(),
        key: key.to_string(),
    };

    let (scalar_type, remaining) = match TYPE_PREFIX_REGEX.captures(key) {
        Some(caps) => {
            let token = caps.get(1).map_or("", |m| m.as_str());
            let prefix_len = caps.get(0).map_or(0, |m| m.end());
            (ScalarType::resolve(token), &key[prefix_len..])
        }
        None => (ScalarType::default(), key),
    };

    let (folder_path, attribute_name) = match remaining.rfind(FOLDER_SEPARATOR) {
        Some(index) => {
            let suffix = &remaining[..index];
            let attribute = &remaining[index + 1..];
            if attribute.is_empty() || suffix.split(FOLDER_SEPARATOR).any(str::is_empty) {
                return Err(malformed());
            }
            (format!("{root}{FOLDER_SEPARATOR}{suffix}"), attribute)
        }
        None if remaining.is_empty() => return Err(malformed()),
        None => (root.to_string(), remaining),
    };

    tracing::trace!(
        root,
        key,
        %scalar_type,
        folder = %folder_path,
        attribute = attribute_name,
        "Parsed definition key"
    );

    Ok(DefinitionKey {
        scalar_type,
        folder_path,
        attribute_name: attribute_name.to_string(),
    })
}
