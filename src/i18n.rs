//! Translation lookup.
//!
//! Consumption side only: a [`Translator`] holds a nested JSON bundle
//! and resolves dotted keys, substituting `{{ name }}` placeholders.
//! Every screen passes an inline English fallback along with its key,
//! so an empty bundle still renders readable text.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

/// Errors from loading a translation bundle.
#[derive(Debug, Error)]
pub enum I18nError {
    #[error("failed to read translation bundle '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse translation bundle: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },
}

/// A loaded translation bundle.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    bundle: Value,
}

impl Translator {
    /// A translator with no bundle; every lookup falls back.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(bundle: Value) -> Self {
        Self { bundle }
    }

    /// Parse a bundle from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, I18nError> {
        let bundle = serde_json::from_str(json).map_err(|source| I18nError::Parse { source })?;
        Ok(Self { bundle })
    }

    /// Load a bundle from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, I18nError> {
        let content = fs::read_to_string(path).map_err(|source| I18nError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Walk the nested bundle by dotted key.
    pub fn get(&self, key: &str) -> Option<&str> {
        let mut node = &self.bundle;
        for segment in key.split('.') {
            node = node.get(segment)?;
        }
        node.as_str()
    }

    /// Resolve a key, using `fallback` when the key is missing.
    pub fn translate(&self, key: &str, fallback: &str) -> String {
        self.get(key).unwrap_or(fallback).to_string()
    }

    /// Resolve a key and substitute `{{ name }}` placeholders.
    ///
    /// Placeholders are interpolated into the fallback too, matching
    /// how the components use an inline default alongside each key.
    pub fn translate_with(&self, key: &str, args: &[(&str, String)], fallback: &str) -> String {
        interpolate(self.get(key).unwrap_or(fallback), args)
    }
}

/// Replace each `{{ name }}` (whitespace-tolerant) with its argument.
/// Unknown placeholders are left as-is.
fn interpolate(template: &str, args: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let name = after[..end].trim();
                match args.iter().find(|(key, _)| *key == name) {
                    Some((_, value)) => out.push_str(value),
                    None => out.push_str(&rest[start..start + 2 + end + 2]),
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
