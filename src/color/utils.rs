use crate::{
    color::{MAX_PACKED, Rgb, WHITE},
    math8::{clamp8, qadd8, qsub8},
};

/// Create an RGB color from a u32 value (0xRRGGBB format)
///
/// Values above `0xFFFFFF` do not fit the 24-bit range and clamp to white.
pub const fn rgb_from_u32(color: u32) -> Rgb {
    if color > MAX_PACKED {
        return WHITE;
    }
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Pack an RGB color into a u32 value (0xRRGGBB format)
pub const fn rgb_to_u32(color: Rgb) -> u32 {
    ((color.r as u32) << 16) | ((color.g as u32) << 8) | color.b as u32
}

/// Build a color from unbounded channel values, clamping each into 0..=255
pub const fn rgb_clamped(r: i32, g: i32, b: i32) -> Rgb {
    Rgb {
        r: clamp8(r),
        g: clamp8(g),
        b: clamp8(b),
    }
}

/// Add two colors channel by channel, saturating at 255
#[inline]
pub fn add_colors(a: Rgb, b: Rgb) -> Rgb {
    Rgb {
        r: qadd8(a.r, b.r),
        g: qadd8(a.g, b.g),
        b: qadd8(a.b, b.b),
    }
}

/// Subtract `b` from `a` channel by channel, saturating at 0
#[inline]
pub fn subtract_colors(a: Rgb, b: Rgb) -> Rgb {
    Rgb {
        r: qsub8(a.r, b.r),
        g: qsub8(a.g, b.g),
        b: qsub8(a.b, b.b),
    }
}
