//! Version definition.
//!
//! This module contains the reader for the java properties file that pins the runtime version.

use std::fs;
use std::path::Path;
use tracing::instrument;

/// The properties key under which the runtime version is pinned.
pub(crate) const RUNTIME_VERSION_KEY: &str = "java.runtime.version";

/// The error type for reading the version definition.
#[derive(Debug, thiserror::Error)]
pub(crate) enum DefinitionError {
    /// The properties file does not contain the key.
    #[error("key '{0}' not found")]
    KeyNotFound(String),
    /// The properties file could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Reads the pinned runtime version from the given properties file.
#[instrument(err(level = "trace"), level = "trace")]
pub(crate) fn read_version<P>(filename: P) -> Result<String, DefinitionError>
where
    P: AsRef<Path> + std::fmt::Debug,
{
    let contents = fs::read_to_string(filename)?;

    lookup(&contents, RUNTIME_VERSION_KEY).ok_or_else(|| DefinitionError::KeyNotFound(RUNTIME_VERSION_KEY.to_string()))
}

// Looks up the value for the given key in java properties format.
// Supports '=' and ':' separators, '#' and '!' comments and backslash line continuations.
#[doc(hidden)]
fn lookup(contents: &str, key: &str) -> Option<String> {
    let mut lines = contents.lines();
    while let Some(line) = lines.next() {
        let mut line = line.trim_start().to_string();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }

        // an odd number of trailing backslashes continues the entry on the next line
        while ends_with_odd_backslashes(&line) {
            line.pop();
            let Some(next) = lines.next() else {
                break;
            };
            line.push_str(next.trim_start());
        }

        let Some((entry_key, entry_value)) = split_entry(&line) else {
            continue;
        };
        if entry_key == key {
            return Some(entry_value.to_string());
        }
    }

    None
}

// Splits an entry at the first '=' or ':' into key and value.
#[doc(hidden)]
fn split_entry(line: &str) -> Option<(&str, &str)> {
    let sep = line.find(['=', ':'])?;
    let key = line[..sep].trim();
    let value = line[sep + 1..].trim();

    Some((key, value))
}

// Whether the given line ends with an odd number of backslashes.
#[doc(hidden)]
fn ends_with_odd_backslashes(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}
