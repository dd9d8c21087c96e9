//! Frame-based animations on the pixel surface
//!
//! Animations are plain descriptions of their frames. A
//! [`FramePlayer`](crate::scheduler::FramePlayer) renders them one frame at
//! a time and paces the frames.

mod pan;
mod scroll;
mod still;

use embassy_time::Duration;
pub use pan::{MovingImage, PanDirection};
pub use scroll::ScrollText;
pub use still::show_image;

use crate::StripDriver;
use crate::math8::linearize;
use crate::surface::PixelSurface;

/// Slowest user-facing speed
pub const MIN_SPEED: i32 = 1;
/// Fastest user-facing speed
pub const MAX_SPEED: i32 = 100;
/// Frame delay at the fastest speed, in milliseconds
pub const MIN_FRAME_DELAY_MS: f32 = 1.0;
/// Frame delay at the slowest speed, in milliseconds
pub const MAX_FRAME_DELAY_MS: f32 = 1000.0;

pub trait Animation {
    /// Number of frames in the animation
    fn frame_count(&self) -> usize;

    /// Time each frame stays on the matrix
    fn frame_delay(&self) -> Duration;

    /// Draw frame `index` into the surface without committing
    fn render_frame<D: StripDriver>(&self, index: usize, surface: &mut PixelSurface<D>);
}

/// Convert a user speed (1 = slowest, 100 = fastest) into a frame delay
///
/// Speeds outside 1..=100 are clamped. The speed is inverted and mapped
/// linearly onto 1..=1000 ms.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn speed_to_delay(speed: i32) -> Duration {
    let speed = speed.clamp(MIN_SPEED, MAX_SPEED);
    let effective = MAX_SPEED + 1 - speed;
    let delay_ms = linearize(
        effective,
        MIN_SPEED,
        MAX_SPEED,
        MIN_FRAME_DELAY_MS,
        MAX_FRAME_DELAY_MS,
    );
    Duration::from_millis(libm::roundf(delay_ms) as u64)
}
