//! Attribute defaults registry and value matcher for configuration models.
//!
//! This crate loads a catalogue of per-attribute default values from
//! definition sources, organizes it by folder path, and answers whether two
//! values of the same attribute should be treated as equivalent when two
//! configuration snapshots are compared.
//!
//! ```
//! use model_defaults::{DefaultsRegistry, Value};
//!
//! let registry = DefaultsRegistry::bundled().unwrap();
//! let ssl = registry.lookup("topology.Server.SSL");
//! assert!(ssl.matches("Enabled", &Value::Absent, &Value::from("false")).unwrap());
//! ```

pub mod config;
pub mod error;
pub mod key;
pub mod loader;
pub mod matcher;
pub mod properties;
pub mod registry;
pub mod scalar;
pub mod shared;
pub mod source;
pub mod value;

pub use config::DefaultsConfig;
pub use error::{Error, Result};
pub use key::{DefinitionKey, parse_key};
pub use loader::RegistryBuilder;
pub use matcher::MatchRule;
pub use registry::{AttributeDefault, DefaultsRegistry, FolderDefaults};
pub use scalar::ScalarType;
pub use shared::SharedRegistry;
pub use source::{DEFINITION_ROOTS, DefinitionSource};
pub use value::Value;
