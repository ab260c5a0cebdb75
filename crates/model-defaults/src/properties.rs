//! Property-file text parsing for definition sources.
//!
//! Supports the usual property-file conventions:
//!
//! ```text
//! # comment
//! ! also a comment
//! {boolean}.Server.SSL.Enabled = false
//! Server.Log.RotationType: bySize, BYSIZE
//! Server.Notes  first part, \
//!               second part
//! ```
//!
//! Keys end at the first unescaped `=`, `:` or whitespace. A line ending in
//! an odd number of backslashes continues on the next line. Escapes `\t`,
//! `\n`, `\r`, `\f` and `\uXXXX` are decoded in both keys and values.

use crate::error::{Error, Result};

const WHITESPACE: [char; 3] = [' ', '\t', '\x0c'];

/// One `key = value` entry, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub key: String,
    pub value: String,
    /// 1-based line on which the entry starts.
    pub line: usize,
}

/// Parse property text read from the source called `name`.
///
/// Entries are returned in the order they appear; a key that occurs more
/// than once appears more than once.
pub fn parse_properties(name: &str, text: &str) -> Result<Vec<Property>> {
    let mut properties = Vec::new();
    let mut logical = String::new();
    let mut start_line = 0;
    let mut continuing = false;

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim_start_matches(WHITESPACE);

        if !continuing {
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }
            start_line = index + 1;
        }

        let trailing = line.chars().rev().take_while(|c| *c == '\\').count();
        if trailing % 2 == 1 {
            logical.push_str(&line[..line.len() - 1]);
            continuing = true;
            continue;
        }

        logical.push_str(line);
        continuing = false;
        properties.push(parse_entry(name, &logical, start_line)?);
        logical.clear();
    }

    // A continuation on the final line still yields its entry.
    if continuing {
        properties.push(parse_entry(name, &logical, start_line)?);
    }

    Ok(properties)
}

/// Split a comma-separated default list into trimmed, non-empty literals.
pub fn parse_value_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_entry(name: &str, logical: &str, line: usize) -> Result<Property> {
    let (raw_key, raw_value) = split_key_value(logical);
    Ok(Property {
        key: unescape(name, raw_key, line)?,
        value: unescape(name, raw_value, line)?,
        line,
    })
}

fn split_key_value(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();
    let mut explicit_separator = false;

    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                key_end = i;
                explicit_separator = true;
                break;
            }
            ' ' | '\t' | '\x0c' => {
                key_end = i;
                break;
            }
            _ => {}
        }
    }

    let key = &line[..key_end];
    let mut rest = &line[key_end..];
    if explicit_separator {
        rest = &rest[1..];
    }
    rest = rest.trim_start_matches(WHITESPACE);
    if !explicit_separator {
        if let Some(stripped) = rest.strip_prefix(['=', ':']) {
            rest = stripped.trim_start_matches(WHITESPACE);
        }
    }
    (key, rest)
}

fn unescape(name: &str, raw: &str, line: usize) -> Result<String> {
    let invalid = || Error::InvalidPropertyEscape {
        name: name.to_string(),
        line,
    };

    let mut out = String::with_capacity(raw.len());
    let mut units: Vec<u16> = Vec::new();
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        let decoded = if c == '\\' {
            match chars.next() {
                Some('u') => {
                    let hex: String = chars.by_ref().take(4).collect();
                    if hex.len() != 4 {
                        return Err(invalid());
                    }
                    let unit = u16::from_str_radix(&hex, 16).map_err(|_| invalid())?;
                    units.push(unit);
                    continue;
                }
                Some('t') => '\t',
                Some('n') => '\n',
                Some('r') => '\r',
                Some('f') => '\x0c',
                Some(other) => other,
                None => break,
            }
        } else {
            c
        };

        flush_units(&mut units, &mut out).map_err(|_| invalid())?;
        out.push(decoded);
    }

    flush_units(&mut units, &mut out).map_err(|_| invalid())?;
    Ok(out)
}

fn flush_units(
    units: &mut Vec<u16>,
    out: &mut String,
) -> std::result::Result<(), std::char::DecodeUtf16Error> {
    for decoded in char::decode_utf16(units.drain(..)) {
        out.push(decoded?);
    }
    Ok(())
}
