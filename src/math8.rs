/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Add two 8-bit values, saturating at 255
#[inline]
pub const fn qadd8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

/// Subtract two 8-bit values, saturating at 0
#[inline]
pub const fn qsub8(a: u8, b: u8) -> u8 {
    a.saturating_sub(b)
}

/// Clamp a signed value into the 0-255 channel range
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn clamp8(value: i32) -> u8 {
    if value < 0 {
        0
    } else if value > 255 {
        255
    } else {
        value as u8
    }
}

/// Map `input` linearly from `[min_input, max_input]` onto `[min_output, max_output]`
///
/// The input is not clamped; values outside the input range extrapolate.
#[allow(clippy::cast_precision_loss)]
pub fn linearize(input: i32, min_input: i32, max_input: i32, min_output: f32, max_output: f32) -> f32 {
    if max_input == min_input {
        return min_output;
    }
    let factor = (input - min_input) as f32 / (max_input - min_input) as f32;
    min_output + factor * (max_output - min_output)
}
