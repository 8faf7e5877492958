//! Segmented assembly emission
//!
//! Renders each frame as its own relocatable unit: a `video_{name}_{i}`
//! section aligned to the VIC-II's 64-byte block size, holding the packed
//! data bytes with the flag byte appended inline as the 64th byte. The
//! linker script decides where in the video bank each frame lands, which
//! lets frames from many sheets interleave freely. The bounding box is
//! emitted once into read-only data; it is looked up by symbol, not by
//! block index, so it stays out of the video bank.

use crate::compile::CompiledSheet;

use super::{hex_bytes, require_bounds, EmitError};

/// Assembler dialect. Both spellings must assemble to identical bytes;
/// only directive syntax differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// GNU as: `.section`/`.global`, `1<<6` alignment, `0x` hex.
    Gas,
    /// ca65: `.segment`/`.export`, plain alignment, `$` hex.
    Ca65,
}

impl Dialect {
    fn section(self, name: &str) -> String {
        match self {
            Dialect::Gas => format!("    .section {}, \"a\"\n", name),
            Dialect::Ca65 => format!("    .segment \"{}\"\n", name.to_uppercase()),
        }
    }

    fn rodata(self) -> &'static str {
        match self {
            Dialect::Gas => "    .section .rodata, \"a\"\n",
            Dialect::Ca65 => "    .segment \"RODATA\"\n",
        }
    }

    fn align_block(self) -> &'static str {
        match self {
            Dialect::Gas => "    .align 1<<6\n",
            Dialect::Ca65 => "    .align 64\n",
        }
    }

    fn export(self, symbol: &str) -> String {
        match self {
            Dialect::Gas => format!("    .global {}\n", symbol),
            Dialect::Ca65 => format!("    .export {}\n", symbol),
        }
    }

    fn hex_prefix(self) -> &'static str {
        match self {
            Dialect::Gas => "0x",
            Dialect::Ca65 => "$",
        }
    }
}

/// Render `sheet` as one assembly file in the given dialect.
pub fn emit(sheet: &CompiledSheet, dialect: Dialect) -> Result<String, EmitError> {
    let bounds = require_bounds(sheet)?;
    let name = &sheet.name;
    let mut out = String::new();

    for (index, frame) in sheet.frames.iter().enumerate() {
        let symbol = format!("{}_{}", name, index);
        out.push_str(&dialect.section(&format!("video_{}", symbol)));
        out.push_str(dialect.align_block());
        out.push_str(&dialect.export(&symbol));
        out.push_str(&format!("{}:\n", symbol));
        for line in frame.data.chunks(8) {
            out.push_str(&format!(
                "    .byte {}\n",
                hex_bytes(line, dialect.hex_prefix())
            ));
        }
        // Flag byte rides along as the block's final byte.
        out.push_str(&format!(
            "    .byte {}{:02X}\n",
            dialect.hex_prefix(),
            frame.flags.bits()
        ));
        out.push('\n');
    }

    out.push_str(dialect.rodata());
    out.push_str(&dialect.export(&format!("{}_bb", name)));
    out.push_str(&format!("{}_bb:\n", name));
    out.push_str(&format!(
        "    .byte {}, {}, {}, {}\n",
        bounds.north, bounds.south, bounds.east, bounds.west
    ));

    Ok(out)
}
