//! Value matching commands

use colored::Colorize;
use model_defaults::{DefaultsRegistry, Value};

use super::Outcome;
use crate::error::{CliError, Result};

/// Run the match command
pub fn run_match(
    registry: &DefaultsRegistry,
    folder: &str,
    attribute: &str,
    expected: Option<&str>,
    actual: Option<&str>,
    json_values: bool,
) -> Result<Outcome> {
    let expected = parse_value(expected, json_values)?;
    let actual = parse_value(actual, json_values)?;

    let rule = registry.lookup(folder).match_rule(attribute, &expected, &actual)?;
    tracing::debug!(folder, attribute, ?rule, "Match decided");

    if rule.is_match() {
        println!("{} {}.{}", "match".green().bold(), folder, attribute);
    } else {
        println!(
            "{} {}.{}: expected {}, actual {}",
            "mismatch".red().bold(),
            folder,
            attribute,
            expected.to_string().cyan(),
            actual.to_string().cyan()
        );
    }

    Ok(rule.is_match().into())
}

/// Run the is-default command
pub fn run_is_default(
    registry: &DefaultsRegistry,
    folder: &str,
    attribute: &str,
    value: Option<&str>,
    json_values: bool,
) -> Result<Outcome> {
    let value = parse_value(value, json_values)?;
    let is_default = registry.lookup(folder).is_default_value(attribute, &value)?;

    if is_default {
        println!("{} {} is the default for {}.{}", "default".green().bold(), value, folder, attribute);
    } else {
        println!(
            "{} {} is not the default for {}.{}",
            "non-default".yellow().bold(),
            value,
            folder,
            attribute
        );
    }

    Ok(is_default.into())
}

/// Convert a command-line argument into a value.
///
/// Without `json`, a present argument is always a string.
fn parse_value(input: Option<&str>, json: bool) -> Result<Value> {
    match input {
        None => Ok(Value::Absent),
        Some(text) if json => serde_json::from_str::<serde_json::Value>(text)
            .map(|parsed| Value::from_json(&parsed))
            .map_err(|source| CliError::Json {
                input: text.to_string(),
                source,
            }),
        Some(text) => Ok(Value::from(text)),
    }
}
