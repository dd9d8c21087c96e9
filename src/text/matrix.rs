use heapless::Vec;

use super::{BLANK_GLYPH, GLYPH_WIDTH, MAX_TEXT_LEN, MissingGlyph, glyph, glyph_columns};
use crate::diag;

/// Maximum width of a scroll matrix in columns
pub const MAX_COLUMNS: usize = MAX_TEXT_LEN * GLYPH_WIDTH;

/// Column-major bitmap of a whole string
///
/// Every character contributes [`GLYPH_WIDTH`] columns, left to right. Bit
/// `y` of a column is the pixel in row `y`. Built per render call and
/// dropped afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollMatrix {
    columns: Vec<u8, MAX_COLUMNS>,
}

impl ScrollMatrix {
    /// Lay out a string with the built-in font
    ///
    /// Characters beyond [`MAX_TEXT_LEN`] are ignored.
    pub fn from_text(text: &str, missing: MissingGlyph) -> Self {
        let mut columns = Vec::new();
        for c in text.chars().take(MAX_TEXT_LEN) {
            let glyph = match (glyph(c), missing) {
                (Some(glyph), _) => glyph,
                (None, MissingGlyph::Blank) => {
                    diag!("getTextArray: no glyph for {:?}, using blank", c);
                    &BLANK_GLYPH
                }
                (None, MissingGlyph::Collapse) => {
                    diag!("getTextArray: no glyph for {:?}, dropping text", c);
                    return Self::collapsed();
                }
            };
            // Capacity covers MAX_TEXT_LEN glyphs
            let _ = columns.extend_from_slice(&glyph_columns(glyph));
        }
        Self { columns }
    }

    /// Degenerate matrix of one blank column
    fn collapsed() -> Self {
        let mut columns = Vec::new();
        let _ = columns.push(0);
        Self { columns }
    }

    /// Width in columns
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Column bits at `x`, blank outside the matrix
    pub fn column(&self, x: usize) -> u8 {
        self.columns.get(x).copied().unwrap_or(0)
    }

    /// Check if the pixel at (x, y) is lit
    #[allow(clippy::cast_sign_loss)]
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        if x < 0 || !(0..8).contains(&y) {
            return false;
        }
        self.column(x as usize) & (1 << y) != 0
    }
}
