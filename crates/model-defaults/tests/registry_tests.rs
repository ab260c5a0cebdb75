//! Integration tests for the defaults registry

use model_defaults::{DefaultsRegistry, DefinitionSource, Error, RegistryBuilder, ScalarType};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn write_catalogues(temp: &TempDir, topology: &str, resources: &str, app_deployments: &str) {
    fs::write(temp.path().join("topology.properties"), topology).unwrap();
    fs::write(temp.path().join("resources.properties"), resources).unwrap();
    fs::write(temp.path().join("appDeployments.properties"), app_deployments).unwrap();
}

#[test]
fn test_bundled_registry_covers_all_roots() {
    let registry = DefaultsRegistry::bundled().unwrap();

    assert!(!registry.is_empty());
    assert!(registry.contains("topology"));
    assert!(registry.contains("topology.Server.SSL"));
    assert!(registry.contains("resources.JMSServer"));
    assert!(registry.contains("appDeployments.Application"));
}

#[test]
fn test_bundled_ssl_enabled_is_boolean_false() {
    let registry = DefaultsRegistry::bundled().unwrap();
    let enabled = registry.lookup("topology.Server.SSL").attribute("Enabled").unwrap();

    assert_eq!(enabled.scalar_type(), ScalarType::Boolean);
    assert_eq!(enabled.values(), ["false"]);
}

#[test]
fn test_folder_paths_are_sorted() {
    let registry = DefaultsRegistry::bundled().unwrap();
    let paths: Vec<&str> = registry.folder_paths().collect();

    let mut sorted = paths.clone();
    sorted.sort();
    assert_eq!(paths, sorted);
    assert_eq!(paths.len(), registry.len());
}

#[test]
fn test_load_from_directory() {
    let temp = TempDir::new().unwrap();
    write_catalogues(
        &temp,
        "{int}.Server.ListenPort = 8001\n",
        "JMSServer.BlockingSendPolicy = FIFO, PreemptiveSend\n",
        "",
    );

    let registry = DefaultsRegistry::load(&DefinitionSource::directory(temp.path())).unwrap();

    assert_eq!(
        registry.folder_paths().collect::<Vec<_>>(),
        vec!["resources.JMSServer", "topology.Server"]
    );
    let policy = registry.lookup("resources.JMSServer").attribute("BlockingSendPolicy").unwrap();
    assert_eq!(policy.values(), ["FIFO", "PreemptiveSend"]);
}

#[test]
fn test_missing_catalogue_aborts_build() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("topology.properties"), "a = 1\n").unwrap();

    let err = DefaultsRegistry::load(&DefinitionSource::directory(temp.path())).unwrap_err();
    assert!(matches!(err, Error::DefinitionSourceUnavailable { ref name, .. } if name == "resources"));
}

#[test]
fn test_malformed_key_aborts_build() {
    let temp = TempDir::new().unwrap();
    write_catalogues(&temp, "Server.SSL. = 1\n", "", "");

    let err = DefaultsRegistry::load(&DefinitionSource::directory(temp.path())).unwrap_err();
    assert!(err.is_build_error());
    assert!(matches!(err, Error::MalformedDefinitionKey { ref root, .. } if root == "topology"));
}

#[test]
fn test_load_selected_roots() {
    let registry = DefaultsRegistry::load_roots(&DefinitionSource::Bundled, ["appDeployments"]).unwrap();

    assert!(registry.contains("appDeployments.Library"));
    assert!(!registry.contains("topology"));
}

#[test]
fn test_unknown_folder_resolves_to_empty_defaults() {
    let registry = DefaultsRegistry::bundled().unwrap();
    let defaults = registry.lookup("nonexistent.path");

    assert!(defaults.is_empty());
    assert_eq!(defaults.folder_name(), "empty");
}

#[test]
fn test_builder_accepts_inline_definitions() {
    let mut builder = RegistryBuilder::new();
    builder
        .add_definitions("topology", "{boolean}.Server.ListenAddress = false\n")
        .unwrap()
        .add_definitions("resources", "SSL.Enabled = no\n")
        .unwrap();
    let registry = builder.build();

    let listen = registry.lookup("topology.Server").attribute("ListenAddress").unwrap();
    assert_eq!(listen.scalar_type(), ScalarType::Boolean);

    let enabled = registry.lookup("resources.SSL").attribute("Enabled").unwrap();
    assert_eq!(enabled.scalar_type(), ScalarType::String);
}

#[test]
fn test_registry_serializes_to_json() {
    let mut builder = RegistryBuilder::new();
    builder.add_definitions("topology", "{int}.Server.ListenPort = 7001\n").unwrap();
    let registry = builder.build();

    let json = serde_json::to_value(&registry).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "topology.Server": {
                "folder": "topology.Server",
                "attributes": {
                    "ListenPort": { "type": "integer", "values": ["7001"] }
                }
            }
        })
    );
}
