//! VIC-II pixel packing
//!
//! Two encodings, both consuming pixel rows in groups of 8 raw cells and
//! producing one byte per group. Hires packs 8 one-bit pixels MSB-first,
//! so the leftmost pixel of a group lands in bit 7. Multicolor packs 4
//! two-bit color codes, read from the even cell of each pair, with the
//! leftmost pair in the top two bits.

use crate::models::SpriteFrame;

/// Swap color codes 1 and 2, preserving 0 and 3.
///
/// Sheet files number the two shared multicolor registers in the opposite
/// order from the bit patterns the VIC-II decodes, so codes 1 and 2 trade
/// places on the way into a byte. The swap is an involution:
/// `remap(remap(c)) == c`.
pub fn remap(code: u8) -> u8 {
    match code {
        1 => 2,
        2 => 1,
        other => other,
    }
}

/// Pack one frame into its native byte layout.
///
/// The output holds `rows * columns / 8` bytes in row-major group order
/// for both encodings. The frame must already be shape-validated; packing
/// itself cannot fail.
pub fn pack(frame: &SpriteFrame) -> Vec<u8> {
    if frame.multicolor {
        pack_multicolor(frame)
    } else {
        pack_hires(frame)
    }
}

fn pack_hires(frame: &SpriteFrame) -> Vec<u8> {
    let mut data = Vec::with_capacity(frame.rows() * frame.columns() / 8);
    for row in &frame.pixels {
        for group in row.chunks_exact(8) {
            let mut byte = 0u8;
            for (i, &cell) in group.iter().enumerate() {
                if cell != 0 {
                    byte |= 1 << (7 - i);
                }
            }
            data.push(byte);
        }
    }
    data
}

fn pack_multicolor(frame: &SpriteFrame) -> Vec<u8> {
    let mut data = Vec::with_capacity(frame.rows() * frame.columns() / 8);
    for row in &frame.pixels {
        for group in row.chunks_exact(8) {
            let byte = remap(group[0]) << 6
                | remap(group[2]) << 4
                | remap(group[4]) << 2
                | remap(group[6]);
            data.push(byte);
        }
    }
    data
}
