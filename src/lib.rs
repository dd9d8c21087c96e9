#![no_std]

pub mod animation;
pub mod clock;
pub mod color;
pub mod config;
pub mod diag;
pub mod error;
pub mod image;
pub mod input;
pub mod math8;
pub mod matrix;
pub mod scheduler;
pub mod surface;
pub mod text;
pub mod word_clock;

pub use animation::{Animation, MovingImage, PanDirection, ScrollText, speed_to_delay};
pub use clock::{ClockEngine, ClockGuard, ClockTicker, TickOutcome};
pub use config::MatrixConfig;
pub use error::Error;
pub use image::Image;
pub use input::{InputLine, InputPoller, InputSource, JoystickDirection, RandomSource, XorShiftRng};
pub use matrix::LedMatrix;
pub use scheduler::{FramePlayer, TickSchedule};
pub use surface::{PixelSurface, SharedSurface};
pub use word_clock::{WordClock, WordClockColors, WordClockConfig, WordTime};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

use smart_leds::SmartLedsWrite;

/// Matrix width in pixels
pub const WIDTH: usize = 8;
/// Matrix height in pixels
pub const HEIGHT: usize = 8;
/// Number of LEDs on the strip
pub const PIXEL_COUNT: usize = WIDTH * HEIGHT;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// Colors arrive in strip order, already scaled by the brightness.
pub trait StripDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}

/// [`StripDriver`] for any `smart-leds` writer
pub struct SmartLedsStrip<W> {
    writer: W,
}

impl<W> SmartLedsStrip<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> StripDriver for SmartLedsStrip<W>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
    W::Error: core::fmt::Debug,
{
    fn write(&mut self, colors: &[Rgb]) {
        if let Err(err) = self.writer.write(colors.iter().copied()) {
            diag!("show: strip write failed: {:?}", err);
        }
    }
}
