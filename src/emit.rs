//! Output-format selection and the shared emitter error surface
//!
//! Emitters are pure: they take a [`CompiledSheet`](crate::compile::CompiledSheet)
//! and return strings. Nothing here touches the filesystem; writing is the
//! CLI's job, after every artifact has rendered successfully.

pub mod asm;
pub mod c;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::bounds::BoundingBox;
use crate::compile::CompiledSheet;

/// The linkable encodings a compiled sheet can be rendered to.
///
/// `C` is the aggregated form: one frame table plus a companion header.
/// `Gas` and `Ca65` are the segmented form, one relocatable section per
/// frame, in the two assembler dialects. The choice affects rendering
/// only, never the packed bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    C,
    Gas,
    Ca65,
}

/// Error type for emission failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmitError {
    /// A format name that is not `c`, `gas` or `ca65`.
    #[error("unsupported output format '{requested}' (expected c, gas or ca65)")]
    UnsupportedFormat { requested: String },
    /// No frame in the sheet has a visible pixel, so there is no bounding
    /// box to emit and the output contract cannot be met.
    #[error("sheet '{name}' has no visible pixels, so it has no bounding box")]
    EmptySheet { name: String },
}

impl FromStr for OutputFormat {
    type Err = EmitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "c" => Ok(OutputFormat::C),
            "gas" => Ok(OutputFormat::Gas),
            "ca65" => Ok(OutputFormat::Ca65),
            other => Err(EmitError::UnsupportedFormat {
                requested: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::C => "c",
            OutputFormat::Gas => "gas",
            OutputFormat::Ca65 => "ca65",
        };
        write!(f, "{}", name)
    }
}

/// Every output form carries the bounding box, so a boxless sheet cannot
/// be emitted at all.
pub(crate) fn require_bounds(sheet: &CompiledSheet) -> Result<BoundingBox, EmitError> {
    sheet.bounds.ok_or_else(|| EmitError::EmptySheet {
        name: sheet.name.clone(),
    })
}

/// Render bytes as `", "`-joined hex literals, e.g. `0x00, 0x3C` with the
/// `0x` prefix or `$00, $3C` with `$`.
pub(crate) fn hex_bytes(bytes: &[u8], prefix: &str) -> String {
    bytes
        .iter()
        .map(|b| format!("{}{:02X}", prefix, b))
        .collect::<Vec<_>>()
        .join(", ")
}
