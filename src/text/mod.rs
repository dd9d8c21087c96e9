//! Text validation and bitmap layout for scrolling text

mod font;
mod matrix;

use heapless::String;

pub use font::{BLANK_GLYPH, GLYPH_WIDTH, Glyph, glyph, glyph_columns};
pub use matrix::{MAX_COLUMNS, ScrollMatrix};

use crate::diag;

/// Maximum number of characters rendered from one string
pub const MAX_TEXT_LEN: usize = 255;

/// Punctuation the font can render, besides letters and digits
pub const ALLOWED_PUNCTUATION: &str = ".,!?():;";

/// Validated text, at most [`MAX_TEXT_LEN`] ASCII characters
pub type Text = String<MAX_TEXT_LEN>;

/// What to draw for a character without a glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingGlyph {
    /// Substitute a blank glyph for that character only
    #[default]
    Blank,
    /// Discard the whole string and render a single blank column
    Collapse,
}

/// Check if a character is in the renderable set
pub fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || ALLOWED_PUNCTUATION.contains(c)
}

/// Validate a string for rendering
///
/// Strings longer than [`MAX_TEXT_LEN`] characters are cut off, then every
/// character outside the renderable set is replaced with a space.
pub fn sanitize(input: &str) -> Text {
    let mut text = Text::new();
    let mut chars = input.chars();
    for c in chars.by_ref().take(MAX_TEXT_LEN) {
        // Only ASCII is pushed and the length is bounded by `take`
        let _ = text.push(if is_allowed(c) { c } else { ' ' });
    }
    if chars.next().is_some() {
        diag!("scrollText: text is longer than {} characters and was cut off", MAX_TEXT_LEN);
    }
    text
}
