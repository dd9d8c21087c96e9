use embassy_time::Duration;

use crate::text::MissingGlyph;

/// Default brightness applied at initialization
pub const DEFAULT_BRIGHTNESS: u8 = 127;

/// Default interval between two input polls
pub const DEFAULT_POLLING_INTERVAL: Duration = Duration::from_millis(10);

/// Default interval between two wall clock updates, in seconds
pub const DEFAULT_CLOCK_TICK_SECS: u32 = 1;

/// Configuration for the LED matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixConfig {
    /// Initial brightness (0-255)
    pub brightness: u8,
    /// Interval between two input polls
    pub polling_interval: Duration,
    /// Seconds added to the wall clock per tick, also the tick period
    pub clock_tick_secs: u32,
    /// What scrolling text draws for characters without a glyph
    pub missing_glyph: MissingGlyph,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            brightness: DEFAULT_BRIGHTNESS,
            polling_interval: DEFAULT_POLLING_INTERVAL,
            clock_tick_secs: DEFAULT_CLOCK_TICK_SECS,
            missing_glyph: MissingGlyph::Blank,
        }
    }
}
