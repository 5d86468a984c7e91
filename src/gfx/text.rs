//! Bitmap Text Rendering
//!
//! Stack counts are drawn with a 5x7 bitmap font, one filled rectangle per
//! lit pixel, so labels work on any [`Graphics`] backend without a font
//! texture.

use super::{Color, Graphics};

/// Horizontal advance of one glyph in font pixels (5 wide + 1 spacing).
pub const GLYPH_ADVANCE: f32 = 6.0;

fn glyph(c: char) -> &'static [u8; 7] {
    match c {
        '0' => &[0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => &[0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => &[0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
        '3' => &[0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => &[0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => &[0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => &[0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => &[0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => &[0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => &[0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        '?' => &[0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00100],
        ' ' => &[0; 7],
        _ => &[0b11111; 7],
    }
}

/// Draws `text` with its top-left corner at `(x, y)` in the current transform.
///
/// Digits, `?` and space have glyphs; anything else renders as a full block.
pub fn draw_text(gfx: &mut dyn Graphics, text: &str, x: f32, y: f32, color: Color, scale: f32) {
    for (i, c) in text.chars().enumerate() {
        let char_x = x + i as f32 * GLYPH_ADVANCE * scale;

        for (row, &pattern_row) in glyph(c).iter().enumerate() {
            for col in 0..5 {
                if (pattern_row >> (4 - col)) & 1 == 1 {
                    gfx.fill_rect(
                        char_x + col as f32 * scale,
                        y + row as f32 * scale,
                        scale,
                        scale,
                        color,
                    );
                }
            }
        }
    }
}
