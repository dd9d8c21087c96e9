use embassy_time::Duration;

use super::{Animation, speed_to_delay};
use crate::color::{BLACK, Rgb};
use crate::surface::PixelSurface;
use crate::text::{MissingGlyph, ScrollMatrix, sanitize};
use crate::{HEIGHT, StripDriver, WIDTH, diag};

/// Text scrolling from right to left
///
/// An 8 column window slides over the text bitmap one column per frame
/// until it has passed every column. Columns past the end of the text are
/// drawn dark.
#[derive(Debug, Clone)]
pub struct ScrollText {
    matrix: ScrollMatrix,
    color: Rgb,
    delay: Duration,
}

impl ScrollText {
    /// Validate and lay out `text` with a user speed (1 = slowest, 100 = fastest)
    pub fn new(text: &str, color: Rgb, speed: i32) -> Self {
        Self::with_fallback(text, color, speed, MissingGlyph::default())
    }

    /// Like [`ScrollText::new`] with an explicit policy for missing glyphs
    pub fn with_fallback(text: &str, color: Rgb, speed: i32, missing: MissingGlyph) -> Self {
        let text = sanitize(text);
        diag!("scrollText: scrolling text {}", text.as_str());
        Self {
            matrix: ScrollMatrix::from_text(&text, missing),
            color,
            delay: speed_to_delay(speed),
        }
    }

    /// Bitmap being scrolled
    pub const fn matrix(&self) -> &ScrollMatrix {
        &self.matrix
    }
}

impl Animation for ScrollText {
    fn frame_count(&self) -> usize {
        self.matrix.width()
    }

    fn frame_delay(&self) -> Duration {
        self.delay
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn render_frame<D: StripDriver>(&self, index: usize, surface: &mut PixelSurface<D>) {
        let offset = index as i32;
        for x in 0..WIDTH as i32 {
            for y in 0..HEIGHT as i32 {
                let lit = self.matrix.pixel(x + offset, y);
                let _ = surface.set_pixel(x, y, if lit { self.color } else { BLACK });
            }
        }
    }
}
