//! Sheet-level bounding box accumulation
//!
//! Collision boxes cover the whole sheet, not individual frames: the
//! runtime swaps frame pointers under a single sprite, so the box has to
//! hold every frame's visible pixels at once. The fold here is
//! commutative and associative, which keeps the result independent of
//! frame order and lets partial accumulators be merged.

use crate::models::SpriteFrame;

/// The visible extent of a sheet, in pixel-matrix coordinates.
///
/// `north`/`west` are the smallest row/column holding a visible pixel,
/// `south`/`east` the largest. A sheet with no visible pixels has no
/// bounding box at all; that case is represented by absence
/// (`Option<BoundingBox>`), never by a zeroed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub north: u32,
    pub south: u32,
    pub east: u32,
    pub west: u32,
}

impl BoundingBox {
    /// Horizontal extent, `east - west`.
    pub fn width(&self) -> u32 {
        self.east - self.west
    }

    /// Vertical extent, `south - north`.
    pub fn height(&self) -> u32 {
        self.south - self.north
    }
}

/// Folds pixel visibility samples into min/max extrema.
///
/// Feed it frames (or raw samples) in any order, then [`finish`] the fold
/// to get the sheet's box. Two partial folds combine with [`merge`].
///
/// [`finish`]: BoundingBoxAccumulator::finish
/// [`merge`]: BoundingBoxAccumulator::merge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundingBoxAccumulator {
    extent: Option<BoundingBox>,
}

impl BoundingBoxAccumulator {
    pub const fn new() -> Self {
        Self { extent: None }
    }

    /// Record one visibility sample. Not-visible samples are no-ops.
    pub fn observe(&mut self, visible: bool, row: u32, col: u32) {
        if !visible {
            return;
        }
        self.extent = Some(match self.extent {
            None => BoundingBox {
                north: row,
                south: row,
                east: col,
                west: col,
            },
            Some(e) => BoundingBox {
                north: e.north.min(row),
                south: e.south.max(row),
                east: e.east.max(col),
                west: e.west.min(col),
            },
        });
    }

    /// Observe every visible pixel of a frame.
    ///
    /// Multicolor frames read visibility from the even cell of each pair
    /// but claim both columns: the visual pixel is double-wide, and its
    /// right half must count toward the eastern extent.
    pub fn observe_frame(&mut self, frame: &SpriteFrame) {
        for (row, cells) in frame.pixels.iter().enumerate() {
            if frame.multicolor {
                for (pair, chunk) in cells.chunks_exact(2).enumerate() {
                    let visible = chunk[0] != 0;
                    self.observe(visible, row as u32, (pair * 2) as u32);
                    self.observe(visible, row as u32, (pair * 2 + 1) as u32);
                }
            } else {
                for (col, &cell) in cells.iter().enumerate() {
                    self.observe(cell != 0, row as u32, col as u32);
                }
            }
        }
    }

    /// Combine two partial folds. `a.merge(b) == b.merge(a)`.
    pub fn merge(self, other: Self) -> Self {
        let extent = match (self.extent, other.extent) {
            (None, e) | (e, None) => e,
            (Some(a), Some(b)) => Some(BoundingBox {
                north: a.north.min(b.north),
                south: a.south.max(b.south),
                east: a.east.max(b.east),
                west: a.west.min(b.west),
            }),
        };
        Self { extent }
    }

    /// Close the fold. `None` when no visible pixel was ever observed.
    ///
    /// Expand doubling is a property of the sheet as a whole and is
    /// applied here exactly once, after every frame has been folded in:
    /// `double_x` doubles the horizontal coordinates, `double_y` the
    /// vertical ones.
    pub fn finish(self, double_x: bool, double_y: bool) -> Option<BoundingBox> {
        self.extent.map(|mut bounds| {
            if double_x {
                bounds.east *= 2;
                bounds.west *= 2;
            }
            if double_y {
                bounds.north *= 2;
                bounds.south *= 2;
            }
            bounds
        })
    }
}
