use crate::color::Rgb;
use crate::image::Image;
use crate::surface::PixelSurface;
use crate::{HEIGHT, StripDriver, WIDTH};

/// Draw the lit pixels of an image and show it
///
/// Dark pixels of the image leave the surface untouched.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn show_image<D: StripDriver>(surface: &mut PixelSurface<D>, image: &Image, color: Rgb) {
    for x in 0..WIDTH as i32 {
        for y in 0..HEIGHT as i32 {
            if image.pixel(x, y) {
                let _ = surface.set_pixel(x, y, color);
            }
        }
    }
    surface.commit();
}
