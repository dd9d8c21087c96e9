use core::fmt;

/// Reasons an operation was rejected
///
/// Every rejection leaves the affected state untouched, so ignoring the
/// error is always safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Pixel coordinates outside the 8x8 grid
    PixelOutOfRange { x: i32, y: i32 },
    /// Hours outside 0..=23
    InvalidHours(u8),
    /// Minutes outside 0..=59
    InvalidMinutes(u8),
    /// Seconds outside 0..=59
    InvalidSeconds(u8),
    /// The clock is held by another updater or reader
    ClockBusy,
    /// Image literal is not an 8x8 grid of `#` and `.`
    InvalidImage,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutOfRange { x, y } => write!(f, "pixel ({x},{y}) out of range"),
            Self::InvalidHours(h) => write!(f, "invalid hours {h}, must be between 0 and 23"),
            Self::InvalidMinutes(m) => write!(f, "invalid minutes {m}, must be between 0 and 59"),
            Self::InvalidSeconds(s) => write!(f, "invalid seconds {s}, must be between 0 and 59"),
            Self::ClockBusy => f.write_str("time is being updated, try again later"),
            Self::InvalidImage => f.write_str("image literal is not an 8x8 grid"),
        }
    }
}

impl core::error::Error for Error {}
