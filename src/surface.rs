//! Pixel surface
//!
//! In-memory shadow of the 8x8 matrix. All drawing happens here; the
//! hardware only sees the buffer when it is committed.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;

use crate::color::{BLACK, Rgb, add_colors, rgb_clamped, rgb_from_u32, rgb_to_u32, subtract_colors};
use crate::math8::scale8;
use crate::{Error, HEIGHT, PIXEL_COUNT, StripDriver, WIDTH, diag};

/// Pixel surface shared between tasks
///
/// Drawing requires holding the lock, so a frame is never interleaved with
/// another task's partial frame. Do not await anything else while holding it
/// longer than one frame.
pub type SharedSurface<D> = Mutex<CriticalSectionRawMutex, PixelSurface<D>>;

/// 8x8 shadow buffer with brightness, flushed through a [`StripDriver`]
pub struct PixelSurface<D: StripDriver> {
    driver: D,
    buffer: [Rgb; PIXEL_COUNT],
    brightness: u8,
}

/// Map logical coordinates to the physical index on the strip
///
/// The vertical axis is flipped relative to the wiring order. Returns `None`
/// for coordinates outside the grid.
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub const fn physical_index(x: i32, y: i32) -> Option<usize> {
    if x < 0 || y < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
        return None;
    }
    Some((HEIGHT - 1 - y as usize) * WIDTH + x as usize)
}

impl<D: StripDriver> PixelSurface<D> {
    /// Create a surface with an all-black buffer
    ///
    /// Nothing is written to the driver until the first commit.
    pub const fn new(driver: D, brightness: u8) -> Self {
        Self {
            driver,
            buffer: [BLACK; PIXEL_COUNT],
            brightness,
        }
    }

    /// Write a pixel into the shadow buffer without committing
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgb) -> Result<(), Error> {
        let Some(index) = physical_index(x, y) else {
            diag!("setPixel: pixel ({},{}) out of range", x, y);
            return Err(Error::PixelOutOfRange { x, y });
        };
        self.buffer[index] = color;
        Ok(())
    }

    /// Write a packed 0xRRGGBB pixel into the shadow buffer without committing
    ///
    /// Values above 0xFFFFFF are out of the color range and become white.
    pub fn set_pixel_packed(&mut self, x: i32, y: i32, color: u32) -> Result<(), Error> {
        if color > crate::color::MAX_PACKED {
            diag!("setPixel: color value {} out of range", color);
        }
        self.set_pixel(x, y, rgb_from_u32(color))
    }

    /// Read a pixel from the shadow buffer
    ///
    /// There is no hardware readback; out of range coordinates read as black.
    pub fn pixel(&self, x: i32, y: i32) -> Rgb {
        physical_index(x, y).map_or(BLACK, |index| self.buffer[index])
    }

    /// Read a pixel from the shadow buffer as packed 0xRRGGBB
    pub fn pixel_packed(&self, x: i32, y: i32) -> u32 {
        rgb_to_u32(self.pixel(x, y))
    }

    /// Set a single pixel and show it immediately
    pub fn set_one_pixel(&mut self, x: i32, y: i32, color: Rgb) -> Result<(), Error> {
        let result = self.set_pixel(x, y, color);
        self.commit();
        result
    }

    /// Set a single pixel from unbounded channel values and show it
    ///
    /// Each channel is clamped into 0..=255 first.
    pub fn set_one_pixel_rgb(&mut self, x: i32, y: i32, r: i32, g: i32, b: i32) -> Result<(), Error> {
        self.set_one_pixel(x, y, rgb_clamped(r, g, b))
    }

    /// Add a color to a pixel, saturating each channel at 255, and show it
    pub fn add_color_to_pixel(&mut self, x: i32, y: i32, color: Rgb) -> Result<(), Error> {
        let current = self.pixel(x, y);
        self.set_one_pixel(x, y, add_colors(current, color))
    }

    /// Subtract a color from a pixel, saturating each channel at 0, and show it
    pub fn subtract_color_from_pixel(&mut self, x: i32, y: i32, color: Rgb) -> Result<(), Error> {
        let current = self.pixel(x, y);
        self.set_one_pixel(x, y, subtract_colors(current, color))
    }

    /// Scale the buffer by the brightness and flush it to the driver
    pub fn commit(&mut self) {
        let brightness = self.brightness;
        let frame = self.buffer.map(|color| Rgb {
            r: scale8(color.r, brightness),
            g: scale8(color.g, brightness),
            b: scale8(color.b, brightness),
        });
        self.driver.write(&frame);
    }

    /// Set the brightness and show the buffer with it
    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
        self.commit();
        diag!("setBrightness: brightness is set to {}", brightness);
    }

    /// Current brightness
    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Zero the buffer and show it
    pub fn clear(&mut self) {
        self.clear_buffer();
        self.commit();
    }

    /// Zero the buffer without committing
    pub fn clear_buffer(&mut self) {
        self.buffer = [BLACK; PIXEL_COUNT];
    }

    /// Shadow buffer in physical (wiring) order
    pub const fn buffer(&self) -> &[Rgb; PIXEL_COUNT] {
        &self.buffer
    }

    /// Get a reference to the driver
    pub const fn driver(&self) -> &D {
        &self.driver
    }

    /// Get a mutable reference to the driver
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }
}
