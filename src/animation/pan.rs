use embassy_time::Duration;

use super::{Animation, speed_to_delay};
use crate::color::{BLACK, Rgb};
use crate::image::Image;
use crate::surface::PixelSurface;
use crate::{HEIGHT, StripDriver, WIDTH};

/// Direction an image travels across the matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    Left,
    Right,
}

/// Image moving across the matrix, entering on one side and leaving on the other
///
/// The image is offset from `-WIDTH` to `+WIDTH` inclusive, one column per
/// frame, so the first and last frames are blank.
#[derive(Debug, Clone)]
pub struct MovingImage {
    image: Image,
    color: Rgb,
    direction: PanDirection,
    delay: Duration,
}

impl MovingImage {
    /// Create a moving image with a user speed (1 = slowest, 100 = fastest)
    pub fn new(image: Image, color: Rgb, speed: i32, direction: PanDirection) -> Self {
        Self {
            image,
            color,
            direction,
            delay: speed_to_delay(speed),
        }
    }

    /// Horizontal offset of the image in frame `index`
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn offset(&self, index: usize) -> i32 {
        let width = WIDTH as i32;
        let step = index as i32;
        match self.direction {
            PanDirection::Left => -width + step,
            PanDirection::Right => width - step,
        }
    }
}

impl Animation for MovingImage {
    fn frame_count(&self) -> usize {
        2 * WIDTH + 1
    }

    fn frame_delay(&self) -> Duration {
        self.delay
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn render_frame<D: StripDriver>(&self, index: usize, surface: &mut PixelSurface<D>) {
        let offset = self.offset(index);
        for x in 0..WIDTH as i32 {
            for y in 0..HEIGHT as i32 {
                let lit = self.image.pixel(x + offset, y);
                let _ = surface.set_pixel(x, y, if lit { self.color } else { BLACK });
            }
        }
    }
}
