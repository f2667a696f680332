//! Side-car descriptor editing
//!
//! Descriptors are small line-oriented `key: value` files next to an asset.
//! Edits here touch exactly one line and leave every other byte alone,
//! including line endings.

use crate::domain::value_objects::AssetIdentifier;

/// Key of the line holding the asset identifier
pub const IDENTIFIER_KEY: &str = "guid";

/// Format version written into freshly created descriptors
pub const DESCRIPTOR_FORMAT_VERSION: u32 = 2;

/// Minimal descriptor for an asset that had none
pub fn default_descriptor(identifier: &AssetIdentifier) -> String {
    format!(
        "fileFormatVersion: {}\n{}: {}\n",
        DESCRIPTOR_FORMAT_VERSION, IDENTIFIER_KEY, identifier
    )
}

/// Overwrite the identifier line.
///
/// If no identifier line exists one is inserted after the first line.
pub fn rewrite_identifier(content: &str, identifier: &AssetIdentifier) -> String {
    let value = identifier.to_string();
    if let Some(updated) = replace_value(content, IDENTIFIER_KEY, &value) {
        return updated;
    }

    let ending = detect_line_ending(content);
    let new_line = format!("{}: {}{}", IDENTIFIER_KEY, value, ending);
    let mut lines: Vec<&str> = content.split_inclusive('\n').collect();
    match lines.first() {
        None => new_line,
        Some(first) if !first.ends_with('\n') => format!("{}{}{}", first, ending, new_line),
        Some(_) => {
            lines.insert(1, &new_line);
            lines.concat()
        }
    }
}

/// Read the identifier from a descriptor, if present and well-formed
pub fn read_identifier(content: &str) -> Option<AssetIdentifier> {
    find_value(content, IDENTIFIER_KEY).and_then(AssetIdentifier::parse)
}

/// Read a boolean flag (`key: 0|1`). A missing line reads as `None`.
pub fn read_flag(content: &str, key: &str) -> Option<bool> {
    find_value(content, key).map(|v| matches!(v, "1" | "true" | "True"))
}

/// Set a boolean flag, appending the line when it does not exist yet
pub fn write_flag(content: &str, key: &str, enabled: bool) -> String {
    let value = if enabled { "1" } else { "0" };
    if let Some(updated) = replace_value(content, key, value) {
        return updated;
    }

    let ending = detect_line_ending(content);
    let mut out = content.to_string();
    if !out.is_empty() && !out.ends_with('\n') {
        out.push_str(ending);
    }
    out.push_str(&format!("{}: {}{}", key, value, ending));
    out
}

fn find_value<'a>(content: &'a str, key: &str) -> Option<&'a str> {
    content
        .lines()
        .find_map(|line| strip_key(line.trim_start(), key))
        .map(str::trim)
}

fn strip_key<'a>(trimmed: &'a str, key: &str) -> Option<&'a str> {
    trimmed.strip_prefix(key)?.strip_prefix(':')
}

fn replace_value(content: &str, key: &str, value: &str) -> Option<String> {
    let mut replaced = false;
    let mut out = String::with_capacity(content.len() + value.len());

    for line in content.split_inclusive('\n') {
        let (body, ending) = split_ending(line);
        let trimmed = body.trim_start();
        if !replaced && strip_key(trimmed, key).is_some() {
            let indent = &body[..body.len() - trimmed.len()];
            out.push_str(&format!("{}{}: {}{}", indent, key, value, ending));
            replaced = true;
        } else {
            out.push_str(line);
        }
    }

    replaced.then_some(out)
}

fn split_ending(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}

fn detect_line_ending(content: &str) -> &'static str {
    if content.contains("\r\n") {
        "\r\n"
    } else {
        "\n"
    }
}
