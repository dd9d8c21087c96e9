use crate::{Error, HEIGHT, WIDTH, diag};

/// Monochrome 8x8 image
///
/// Stored as eight rows, top to bottom; bit 7 of a row is column 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Image {
    rows: [u8; HEIGHT],
}

impl Image {
    /// Create an image from row bitmaps
    pub const fn from_rows(rows: [u8; HEIGHT]) -> Self {
        Self { rows }
    }

    /// Parse an image literal
    ///
    /// The literal lists 64 cells row by row, `#` for lit and `.` for dark.
    /// Whitespace between cells is ignored:
    ///
    /// ```
    /// let arrow = lumatrix::Image::parse(
    ///     ". . . # # . . .
    ///      . . # # # # . .
    ///      . # # # # # # .
    ///      ## # # # # # # #
    ///      . . . # # . . .
    ///      . . . # # . . .
    ///      . . . # # . . .
    ///      . . . # # . . .",
    /// )
    /// .unwrap();
    /// assert!(arrow.pixel(3, 0));
    /// ```
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn parse(literal: &str) -> Result<Self, Error> {
        let mut image = Self::default();
        let mut cells = 0usize;
        for c in literal.chars().filter(|c| !c.is_whitespace()) {
            let lit = match c {
                '#' => true,
                '.' => false,
                _ => {
                    diag!("matrix8x8: unexpected character {:?} in image", c);
                    return Err(Error::InvalidImage);
                }
            };
            if cells >= WIDTH * HEIGHT {
                diag!("matrix8x8: image has more than {} cells", WIDTH * HEIGHT);
                return Err(Error::InvalidImage);
            }
            image.set((cells % WIDTH) as i32, (cells / WIDTH) as i32, lit);
            cells += 1;
        }
        if cells != WIDTH * HEIGHT {
            diag!("matrix8x8: image has {} cells instead of {}", cells, WIDTH * HEIGHT);
            return Err(Error::InvalidImage);
        }
        Ok(image)
    }

    /// Check if the pixel at (x, y) is lit
    ///
    /// Coordinates outside the image are dark, which lets callers sample
    /// shifted positions freely.
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_wrap)]
    pub const fn pixel(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
            return false;
        }
        self.rows[y as usize] & (0x80 >> x) != 0
    }

    /// Light or darken a pixel; out of range coordinates are ignored
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_wrap)]
    pub fn set(&mut self, x: i32, y: i32, lit: bool) {
        if x < 0 || y < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
            return;
        }
        let mask = 0x80 >> x;
        if lit {
            self.rows[y as usize] |= mask;
        } else {
            self.rows[y as usize] &= !mask;
        }
    }

    /// Row bitmaps, top to bottom
    pub const fn rows(&self) -> [u8; HEIGHT] {
        self.rows
    }
}
