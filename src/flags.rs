//! Per-frame hardware flag byte

use bitflags::bitflags;

use crate::models::SpriteFrame;

bitflags! {
    /// Render attributes the runtime applies when a frame is shown.
    ///
    /// Bit positions are part of the generated-code contract with the
    /// runtime's sprite header and must not change.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FrameFlags: u8 {
        const EXPAND_X = 1 << 0;
        const EXPAND_Y = 1 << 1;
        const MULTICOLOR = 1 << 2;
    }
}

impl FrameFlags {
    /// Derive the flag byte for one frame.
    pub fn for_frame(frame: &SpriteFrame) -> Self {
        let mut flags = FrameFlags::empty();
        if frame.double_x {
            flags |= FrameFlags::EXPAND_X;
        }
        if frame.double_y {
            flags |= FrameFlags::EXPAND_Y;
        }
        if frame.multicolor {
            flags |= FrameFlags::MULTICOLOR;
        }
        flags
    }
}
