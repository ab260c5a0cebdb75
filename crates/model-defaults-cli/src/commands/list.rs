//! Folder listing and lookup commands

use std::collections::BTreeMap;

use colored::Colorize;
use model_defaults::{AttributeDefault, DefaultsRegistry, FolderDefaults};
use serde::Serialize;

use super::Outcome;
use crate::error::Result;

/// Run the folders command
pub fn run_folders(registry: &DefaultsRegistry, json: bool) -> Result<Outcome> {
    if json {
        let folders: Vec<&str> = registry.folder_paths().collect();
        println!("{}", serde_json::to_string_pretty(&folders)?);
        return Ok(Outcome::Success);
    }

    println!("{}", "Registered Folders".bold());
    println!();
    for folder in registry.folder_paths() {
        let count = registry.lookup(folder).len();
        println!("  {:<64} {}", folder.green(), format!("({count})").dimmed());
    }
    println!();
    println!("{} {} folders", "Total:".dimmed(), registry.len());

    Ok(Outcome::Success)
}

/// Run the lookup command
pub fn run_lookup(registry: &DefaultsRegistry, folder: &str, json: bool) -> Result<Outcome> {
    let defaults = registry.lookup(folder);

    if json {
        println!("{}", render_json(folder, defaults, registry.contains(folder))?);
        return Ok(Outcome::Success);
    }

    if !registry.contains(folder) {
        println!(
            "{} No defaults registered for {}",
            "note:".yellow().bold(),
            folder.cyan()
        );
        return Ok(Outcome::Success);
    }

    println!("{} {}", "Defaults for".bold(), folder.cyan().bold());
    println!();
    for (name, default) in defaults.attributes() {
        let values = if default.values().is_empty() {
            "(none)".dimmed().to_string()
        } else {
            default.values().join(", ")
        };
        println!(
            "  {:<40} {:<8} {}",
            name.green(),
            default.scalar_type().to_string().dimmed(),
            values
        );
    }

    Ok(Outcome::Success)
}

/// JSON shape of the lookup command
#[derive(Serialize)]
struct LookupOutput<'a> {
    folder: &'a str,
    registered: bool,
    attributes: BTreeMap<&'a str, &'a AttributeDefault>,
}

fn render_json(folder: &str, defaults: &FolderDefaults, registered: bool) -> Result<String> {
    let output = LookupOutput {
        folder,
        registered,
        attributes: defaults.attributes().collect(),
    };
    Ok(serde_json::to_string_pretty(&output)?)
}
