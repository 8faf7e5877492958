//! The compilation engine
//!
//! One pass over a validated sheet producing everything an emitter needs:
//! packed frame data, per-frame flag bytes, and the sheet's aggregate
//! bounding box. Both output forms render from the same [`CompiledSheet`],
//! so their payloads cannot diverge.

use thiserror::Error;

use crate::bounds::{BoundingBox, BoundingBoxAccumulator};
use crate::flags::FrameFlags;
use crate::models::SpriteSheet;
use crate::packer;
use crate::validate::{self, ValidateError};

/// One packed frame and its flag byte, index-aligned with the sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledFrame {
    pub data: Vec<u8>,
    pub flags: FrameFlags,
}

/// A sheet reduced to emitter input. `bounds` is `None` when no frame has
/// a single visible pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledSheet {
    pub name: String,
    pub frames: Vec<CompiledFrame>,
    pub bounds: Option<BoundingBox>,
}

#[derive(Debug, Error)]
pub enum CompileError {
    #[error(transparent)]
    Validate(#[from] ValidateError),
}

/// Validate and compile a whole sheet.
///
/// Validation runs first over every frame; after it passes, the packing,
/// flag, and bounding-box passes cannot fail. Expand doubling of the box
/// is decided at sheet level: one frame asking for `double_x` (or
/// `double_y`) doubles that axis for the sheet, no matter where in the
/// frame list it sits.
pub fn compile_sheet(sheet: &SpriteSheet) -> Result<CompiledSheet, CompileError> {
    validate::validate_sheet(sheet)?;

    let mut bounds = BoundingBoxAccumulator::new();
    let mut frames = Vec::with_capacity(sheet.frames.len());
    for frame in &sheet.frames {
        bounds.observe_frame(frame);
        frames.push(CompiledFrame {
            data: packer::pack(frame),
            flags: FrameFlags::for_frame(frame),
        });
    }

    let double_x = sheet.frames.iter().any(|f| f.double_x);
    let double_y = sheet.frames.iter().any(|f| f.double_y);

    Ok(CompiledSheet {
        name: sheet.name.clone(),
        frames,
        bounds: bounds.finish(double_x, double_y),
    })
}
