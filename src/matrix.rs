//! LED matrix front end
//!
//! [`LedMatrix`] owns the shared state of one board: the pixel surface, the
//! wall clock and the input lines. Background loops borrow it, so it is
//! usually placed in a `static`.

use core::cell::RefCell;

use embassy_sync::blocking_mutex;
use embassy_sync::mutex::Mutex;
use embassy_time::Instant;

use crate::animation::{self, MovingImage, PanDirection, ScrollText};
use crate::clock::{ClockEngine, ClockTicker, TimeText};
use crate::color::Rgb;
use crate::config::MatrixConfig;
use crate::image::Image;
use crate::input::{
    InputPoller, InputSource, JoystickDirection, SharedInput, configure_inputs, read_joystick,
    read_switch, with_input,
};
use crate::scheduler::FramePlayer;
use crate::surface::{PixelSurface, SharedSurface};
use crate::word_clock::{WordClock, WordClockConfig};
use crate::{Error, StripDriver, diag};

/// 8x8 LED matrix with a slide switch and a joystick
pub struct LedMatrix<D: StripDriver, S: InputSource> {
    surface: SharedSurface<D>,
    clock: ClockEngine,
    input: SharedInput<S>,
    config: MatrixConfig,
}

impl<D: StripDriver, S: InputSource> LedMatrix<D, S> {
    /// Set up the matrix
    ///
    /// The strip is cleared and every input line gets its pull-up before
    /// this returns.
    pub fn new(driver: D, mut input: S, config: MatrixConfig) -> Self {
        let mut surface = PixelSurface::new(driver, config.brightness);
        surface.clear();
        configure_inputs(&mut input);
        diag!("initializeMatrix: matrix initialized, brightness {}", config.brightness);
        Self {
            surface: Mutex::new(surface),
            clock: ClockEngine::new(),
            input: blocking_mutex::Mutex::new(RefCell::new(input)),
            config,
        }
    }

    pub const fn surface(&self) -> &SharedSurface<D> {
        &self.surface
    }

    pub const fn clock(&self) -> &ClockEngine {
        &self.clock
    }

    pub const fn input(&self) -> &SharedInput<S> {
        &self.input
    }

    pub const fn config(&self) -> &MatrixConfig {
        &self.config
    }

    /// Clock updater whose first tick is due at `start`
    pub fn ticker(&self, start: Instant) -> ClockTicker<'_> {
        ClockTicker::new(&self.clock, start, self.config.clock_tick_secs)
    }

    /// Input poller at the configured polling interval
    pub const fn poller(&self) -> InputPoller<'_, S> {
        InputPoller::new(&self.input, self.config.polling_interval)
    }

    /// Word clock drawing on this matrix
    pub const fn word_clock(&self, config: WordClockConfig) -> WordClock<'_, D, S> {
        WordClock::new(&self.surface, &self.clock, &self.input, config)
    }

    /// Scroll text across the matrix and return when it has passed
    pub async fn scroll_text(&self, text: &str, color: Rgb, speed: i32) {
        let animation = ScrollText::with_fallback(text, color, speed, self.config.missing_glyph);
        FramePlayer::new(animation).play(&self.surface).await;
    }

    /// Move an image across the matrix and return when it has left
    pub async fn moving_image(&self, image: Image, color: Rgb, speed: i32, direction: PanDirection) {
        let animation = MovingImage::new(image, color, speed, direction);
        FramePlayer::new(animation).play(&self.surface).await;
    }

    /// Draw the lit pixels of an image and show it
    pub async fn show_image(&self, image: &Image, color: Rgb) {
        let mut surface = self.surface.lock().await;
        animation::show_image(&mut *surface, image, color);
    }

    /// Set one pixel and show it
    pub async fn set_one_pixel(&self, x: i32, y: i32, color: Rgb) -> Result<(), Error> {
        self.surface.lock().await.set_one_pixel(x, y, color)
    }

    /// Set one pixel from unbounded channel values and show it
    pub async fn set_one_pixel_rgb(&self, x: i32, y: i32, r: i32, g: i32, b: i32) -> Result<(), Error> {
        self.surface.lock().await.set_one_pixel_rgb(x, y, r, g, b)
    }

    /// Add a color to a pixel and show it
    pub async fn add_color_to_pixel(&self, x: i32, y: i32, color: Rgb) -> Result<(), Error> {
        self.surface.lock().await.add_color_to_pixel(x, y, color)
    }

    /// Subtract a color from a pixel and show it
    pub async fn subtract_color_from_pixel(&self, x: i32, y: i32, color: Rgb) -> Result<(), Error> {
        self.surface.lock().await.subtract_color_from_pixel(x, y, color)
    }

    /// Packed 0xRRGGBB color of a pixel, black when out of range
    pub async fn pixel_packed(&self, x: i32, y: i32) -> u32 {
        self.surface.lock().await.pixel_packed(x, y)
    }

    /// Set the brightness and show the buffer with it
    pub async fn set_brightness(&self, brightness: u8) {
        self.surface.lock().await.set_brightness(brightness);
    }

    /// Turn every pixel off
    pub async fn clear(&self) {
        self.surface.lock().await.clear();
    }

    /// Set the wall clock
    pub fn set_current_time(&self, hours: u8, minutes: u8, seconds: u8) -> Result<(), Error> {
        self.clock.set_current_time(hours, minutes, seconds)
    }

    /// Seconds since midnight
    pub fn current_time(&self) -> u32 {
        self.clock.current_time()
    }

    /// Wall clock time as `h:m:s`
    pub fn current_time_text(&self) -> TimeText {
        self.clock.current_time_text()
    }

    /// Read the slide switch, `true` when set
    pub fn read_switch(&self) -> bool {
        with_input(&self.input, read_switch)
    }

    /// Same as [`LedMatrix::read_switch`]
    pub fn is_switch_set(&self) -> bool {
        self.read_switch()
    }

    pub fn read_joystick(&self) -> JoystickDirection {
        with_input(&self.input, read_joystick)
    }

    /// Name of the current joystick direction
    pub fn read_joystick_text(&self) -> &'static str {
        self.read_joystick().as_str()
    }

    /// Check if the joystick currently points in `direction`
    pub fn compare_joystick(&self, direction: JoystickDirection) -> bool {
        self.read_joystick() == direction
    }
}
