//! Frame validation
//!
//! Checks every frame of a sheet before any packing work happens: row
//! widths must agree and be a multiple of the 8-column packing group, and
//! multicolor cells must stay inside the 2-bit code range. Validation is
//! fail-fast; the first problem found aborts the run.

use thiserror::Error;

use crate::models::{SpriteFrame, SpriteSheet};

/// A defect in a sheet's pixel data. Positions are zero-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidateError {
    /// A row's width disagrees with the frame's first row, or the frame
    /// width is not a multiple of 8.
    #[error("frame {frame}: row of {actual} columns where {expected} were expected")]
    ShapeMismatch {
        frame: usize,
        expected: usize,
        actual: usize,
    },
    /// A multicolor cell holds a value outside 0-3.
    #[error("frame {frame}: color code {value} at row {row}, column {col} is not in 0-3")]
    InvalidColorCode {
        frame: usize,
        row: usize,
        col: usize,
        value: u8,
    },
}

/// Validate every frame of `sheet`, in order.
pub fn validate_sheet(sheet: &SpriteSheet) -> Result<(), ValidateError> {
    for (index, frame) in sheet.frames.iter().enumerate() {
        validate_frame(index, frame)?;
    }
    Ok(())
}

fn validate_frame(index: usize, frame: &SpriteFrame) -> Result<(), ValidateError> {
    let columns = frame.columns();
    if columns % 8 != 0 {
        return Err(ValidateError::ShapeMismatch {
            frame: index,
            expected: columns.next_multiple_of(8),
            actual: columns,
        });
    }
    for row in &frame.pixels {
        if row.len() != columns {
            return Err(ValidateError::ShapeMismatch {
                frame: index,
                expected: columns,
                actual: row.len(),
            });
        }
    }
    if frame.multicolor {
        for (row, cells) in frame.pixels.iter().enumerate() {
            for (col, &value) in cells.iter().enumerate() {
                if value > 3 {
                    return Err(ValidateError::InvalidColorCode {
                        frame: index,
                        row,
                        col,
                        value,
                    });
                }
            }
        }
    }
    Ok(())
}
