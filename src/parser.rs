//! Loading .spm sheets from disk
//!
//! A .spm document is plain JSON with a top-level `sprites` array. The
//! sheet takes its name from the input file stem unless the caller
//! overrides it; either way the name is reduced to a C identifier, since
//! every generated symbol is prefixed with it.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::models::{SheetFile, SpriteSheet};

/// Error type for sheet loading failures.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("'{path}' is not a valid sprite sheet: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}

/// Parse a .spm document from a string, naming the sheet `name`.
///
/// The name is sanitized with [`identifier`] before use.
pub fn parse_sheet(json: &str, name: &str) -> Result<SpriteSheet, serde_json::Error> {
    let file: SheetFile = serde_json::from_str(json)?;
    Ok(SpriteSheet {
        name: identifier(name),
        frames: file.sprites,
    })
}

/// Load a .spm sheet from `path`.
///
/// The sheet is named after the file stem, or after `name_override` when
/// one is given.
pub fn load_sheet(path: &Path, name_override: Option<&str>) -> Result<SpriteSheet, ParseError> {
    let json = fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let name = match name_override {
        Some(name) => name.to_string(),
        None => path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("sprite")
            .to_string(),
    };
    parse_sheet(&json, &name).map_err(|source| ParseError::Json {
        path: path.display().to_string(),
        source,
    })
}

/// Reduce a raw name to a C identifier.
///
/// Every character outside `[A-Za-z0-9_]` becomes `_`, a leading digit is
/// prefixed with `_`, and an empty name becomes `_`.
pub fn identifier(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        out.push(if c.is_ascii_alphanumeric() || c == '_' {
            c
        } else {
            '_'
        });
    }
    if out.is_empty() {
        out.push('_');
    } else if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}
