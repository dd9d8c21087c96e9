mod utils;

use smart_leds::RGB8;

pub use utils::{add_colors, rgb_clamped, rgb_from_u32, rgb_to_u32, subtract_colors};

pub type Rgb = RGB8;

/// Largest value representable as a packed 24-bit color
pub const MAX_PACKED: u32 = 0x00FF_FFFF;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};
pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
pub const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
pub const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
