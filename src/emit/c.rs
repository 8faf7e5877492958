//! Aggregated C emission
//!
//! Renders a compiled sheet as one translation unit plus a companion
//! header. All frames live in a single `sprite_frame` table placed in the
//! sheet's own `video_{name}` section and aligned to the VIC-II's 64-byte
//! block size; the header re-exports everything under `{name}_` /
//! `{NAME}_` prefixes so several sheets can link into one program.
//!
//! Hardware sprite pointers are block indices relative to the video bank,
//! and the table's address is only known at link time, so the pointer
//! table is filled at runtime by a generated `{name}_init_pointers`
//! function the host program calls during startup.

use crate::bounds::BoundingBox;
use crate::compile::CompiledSheet;

use super::{hex_bytes, require_bounds, EmitError};

/// The two rendered artifacts of the aggregated form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CSource {
    pub code: String,
    pub header: String,
}

/// Render `sheet` as C code and header.
///
/// `header_name` is the file name the code artifact will `#include`, so
/// it must match where the caller writes the header.
pub fn emit(sheet: &CompiledSheet, header_name: &str) -> Result<CSource, EmitError> {
    let bounds = require_bounds(sheet)?;
    Ok(CSource {
        code: render_code(sheet, &bounds, header_name),
        header: render_header(sheet, &bounds),
    })
}

fn render_code(sheet: &CompiledSheet, bounds: &BoundingBox, header_name: &str) -> String {
    let name = &sheet.name;
    let upper = name.to_uppercase();
    let frames = sheet.frames.len();
    let mut out = String::new();

    out.push_str(&format!("#include \"{}\"\n", header_name));
    out.push_str("#include \"sprite.h\"\n\n");

    out.push_str("extern uint8_t video_base;\n");
    out.push_str(&format!("__attribute__((section(\"video_{}\")))\n", name));
    out.push_str("__attribute__((aligned(64)))\n");
    out.push_str(&format!(
        "const struct sprite_frame {}_frames[{}] = {{\n",
        name, frames
    ));
    for frame in &sheet.frames {
        if frame.data.is_empty() {
            out.push_str("    {{0}},\n");
        } else {
            out.push_str(&format!("    {{{{{}}}}},\n", hex_bytes(&frame.data, "0x")));
        }
    }
    out.push_str("};\n\n");

    out.push_str(&format!(
        "const struct bb {}_bb = {{{}, {}, {}, {}}};\n\n",
        name, bounds.north, bounds.south, bounds.east, bounds.west
    ));

    out.push_str(&format!("const uint8_t {}_width = {}_WIDTH;\n", name, upper));
    out.push_str(&format!(
        "const uint8_t {}_height = {}_HEIGHT;\n",
        name, upper
    ));

    let flag_bytes: Vec<u8> = sheet.frames.iter().map(|f| f.flags.bits()).collect();
    out.push_str(&format!(
        "const uint8_t {}_flags[{}] = {{{}}};\n",
        name,
        frames,
        hex_bytes(&flag_bytes, "0x")
    ));
    out.push_str(&format!("uint8_t {}_pointers[{}];\n\n", name, frames));

    out.push_str(&format!("void {}_init_pointers(void) {{\n", name));
    out.push_str(&format!(
        "    for (uint8_t i = 0; i < {}_NUM_FRAMES; i++) {{\n",
        upper
    ));
    out.push_str(&format!(
        "        {}_pointers[i] = ((uint16_t)&{}_frames[i] - (uint16_t)&video_base) / 64;\n",
        name, name
    ));
    out.push_str("    }\n");
    out.push_str("}\n");

    out
}

fn render_header(sheet: &CompiledSheet, bounds: &BoundingBox) -> String {
    let name = &sheet.name;
    let upper = name.to_uppercase();
    let frames = sheet.frames.len();
    let mut out = String::new();

    out.push_str(&format!("#ifndef _{}\n", upper));
    out.push_str(&format!("#define _{}\n\n", upper));
    out.push_str("#include \"sprite.h\"\n");
    out.push_str("#include <stdint.h>\n\n");

    out.push_str(&format!("#define {}_NUM_FRAMES ({})\n\n", upper, frames));

    out.push_str(&format!(
        "extern const struct sprite_frame {}_frames[{}];\n",
        name, frames
    ));
    out.push_str(&format!("extern const struct bb {}_bb;\n\n", name));

    out.push_str(&format!("#define {}_WIDTH ({})\n", upper, bounds.width()));
    out.push_str(&format!("extern const uint8_t {}_width;\n\n", name));

    out.push_str(&format!("#define {}_HEIGHT ({})\n", upper, bounds.height()));
    out.push_str(&format!("extern const uint8_t {}_height;\n\n", name));

    out.push_str(&format!("extern const uint8_t {}_flags[{}];\n\n", name, frames));

    out.push_str(&format!("extern uint8_t {}_pointers[{}];\n\n", name, frames));

    out.push_str(&format!(
        "/* Fills {}_pointers with frame block indices relative to video_base.\n",
        name
    ));
    out.push_str(&format!(
        " * Call once at startup, before anything reads {}_pointers. */\n",
        name
    ));
    out.push_str(&format!("void {}_init_pointers(void);\n\n", name));

    out.push_str(&format!("#define {}_SPRITE {{\\\n", upper));
    out.push_str(&format!("    {}_NUM_FRAMES, \\\n", upper));
    out.push_str(&format!("    {}_pointers, \\\n", name));
    out.push_str(&format!("    {}_flags, \\\n", name));
    out.push_str("    }\n\n");

    out.push_str("#endif\n");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::CompiledFrame;
    use crate::flags::FrameFlags;

    fn rider() -> CompiledSheet {
        CompiledSheet {
            name: "rider".to_string(),
            frames: vec![CompiledFrame {
                data: vec![0x80, 0x01],
                flags: FrameFlags::empty(),
            }],
            bounds: Some(BoundingBox {
                north: 2,
                south: 18,
                east: 20,
                west: 3,
            }),
        }
    }

    #[test]
    fn test_header_layout() {
        let source = emit(&rider(), "rider.h").unwrap();
        let expected = "\
#ifndef _RIDER
#define _RIDER

#include \"sprite.h\"
#include <stdint.h>

#define RIDER_NUM_FRAMES (1)

extern const struct sprite_frame rider_frames[1];
extern const struct bb rider_bb;

#define RIDER_WIDTH (17)
extern const uint8_t rider_width;

#define RIDER_HEIGHT (16)
extern const uint8_t rider_height;

extern const uint8_t rider_flags[1];

extern uint8_t rider_pointers[1];

/* Fills rider_pointers with frame block indices relative to video_base.
 * Call once at startup, before anything reads rider_pointers. */
void rider_init_pointers(void);

#define RIDER_SPRITE {\\
    RIDER_NUM_FRAMES, \\
    rider_pointers, \\
    rider_flags, \\
    }

#endif
";
        assert_eq!(source.header, expected);
    }

    #[test]
    fn test_code_layout() {
        let source = emit(&rider(), "rider.h").unwrap();
        let expected = "\
#include \"rider.h\"
#include \"sprite.h\"

extern uint8_t video_base;
__attribute__((section(\"video_rider\")))
__attribute__((aligned(64)))
const struct sprite_frame rider_frames[1] = {
    {{0x80, 0x01}},
};

const struct bb rider_bb = {2, 18, 20, 3};

const uint8_t rider_width = RIDER_WIDTH;
const uint8_t rider_height = RIDER_HEIGHT;
const uint8_t rider_flags[1] = {0x00};
uint8_t rider_pointers[1];

void rider_init_pointers(void) {
    for (uint8_t i = 0; i < RIDER_NUM_FRAMES; i++) {
        rider_pointers[i] = ((uint16_t)&rider_frames[i] - (uint16_t)&video_base) / 64;
    }
}
";
        assert_eq!(source.code, expected);
    }

    #[test]
    fn test_one_table_entry_per_frame() {
        let mut sheet = rider();
        sheet.frames.push(CompiledFrame {
            data: vec![0xFF; 3],
            flags: FrameFlags::MULTICOLOR | FrameFlags::EXPAND_X,
        });
        let source = emit(&sheet, "rider.h").unwrap();

        assert!(source.code.contains("const struct sprite_frame rider_frames[2] = {"));
        assert!(source.code.contains("    {{0x80, 0x01}},\n    {{0xFF, 0xFF, 0xFF}},\n"));
        assert!(source.code.contains("const uint8_t rider_flags[2] = {0x00, 0x05};"));
        assert!(source.header.contains("#define RIDER_NUM_FRAMES (2)"));
    }

    #[test]
    fn test_header_name_is_embedded_in_include() {
        let source = emit(&rider(), "gfx_rider.h").unwrap();
        assert!(source.code.starts_with("#include \"gfx_rider.h\"\n"));
    }

    #[test]
    fn test_boxless_sheet_is_rejected() {
        let mut sheet = rider();
        sheet.bounds = None;
        assert_eq!(
            emit(&sheet, "rider.h"),
            Err(EmitError::EmptySheet {
                name: "rider".to_string(),
            })
        );
    }
}
