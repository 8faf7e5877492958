//! Data models for .spm sprite sheets.

use serde::Deserialize;

/// One frame of a sprite sheet: a pixel matrix plus its render attributes.
///
/// `pixels` is row-major. A hires (non-multicolor) frame treats any nonzero
/// cell as a set pixel; a multicolor frame holds 2-bit color codes 0-3 where
/// each pair of raw cells, starting at an even column, backs one double-wide
/// visual pixel.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SpriteFrame {
    pub pixels: Vec<Vec<u8>>,
    pub multicolor: bool,
    pub double_x: bool,
    pub double_y: bool,
}

impl SpriteFrame {
    /// Number of pixel rows in the frame.
    pub fn rows(&self) -> usize {
        self.pixels.len()
    }

    /// Number of pixel columns, taken from the first row (0 for an empty
    /// frame). Validation guarantees every other row agrees.
    pub fn columns(&self) -> usize {
        self.pixels.first().map_or(0, Vec::len)
    }
}

/// A named, ordered sequence of frames.
///
/// Frame order is significant: a frame's position in `frames` is the index
/// the generated pointer and flag tables are addressed by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteSheet {
    pub name: String,
    pub frames: Vec<SpriteFrame>,
}

/// Top-level layout of a .spm document.
///
/// Editor metadata (format version, color registers, per-frame labels) is
/// carried by additional keys and ignored here.
#[derive(Debug, Clone, Deserialize)]
pub struct SheetFile {
    pub sprites: Vec<SpriteFrame>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_deserializes_with_editor_metadata() {
        let json = r#"{
            "name": "walker 1",
            "color": 5,
            "pixels": [[0, 1], [1, 0]],
            "multicolor": false,
            "double_x": true,
            "double_y": false
        }"#;
        let frame: SpriteFrame = serde_json::from_str(json).unwrap();
        assert_eq!(frame.pixels, vec![vec![0, 1], vec![1, 0]]);
        assert!(!frame.multicolor);
        assert!(frame.double_x);
        assert!(!frame.double_y);
    }

    #[test]
    fn test_frame_requires_render_attributes() {
        let json = r#"{"pixels": [[0]]}"#;
        let result: Result<SpriteFrame, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_sheet_file_collects_sprites_in_order() {
        let json = r##"{
            "version": "0.8.4",
            "colors": {"0": "#000000", "1": "#ffffff"},
            "sprites": [
                {"pixels": [[1]], "multicolor": false, "double_x": false, "double_y": false},
                {"pixels": [[2]], "multicolor": true, "double_x": false, "double_y": false}
            ]
        }"##;
        let file: SheetFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.sprites.len(), 2);
        assert_eq!(file.sprites[0].pixels, vec![vec![1]]);
        assert!(file.sprites[1].multicolor);
    }

    #[test]
    fn test_frame_dimensions() {
        let frame = SpriteFrame {
            pixels: vec![vec![0; 24]; 21],
            multicolor: false,
            double_x: false,
            double_y: false,
        };
        assert_eq!(frame.rows(), 21);
        assert_eq!(frame.columns(), 24);
    }

    #[test]
    fn test_empty_frame_dimensions() {
        let frame = SpriteFrame {
            pixels: vec![],
            multicolor: false,
            double_x: false,
            double_y: false,
        };
        assert_eq!(frame.rows(), 0);
        assert_eq!(frame.columns(), 0);
    }
}
