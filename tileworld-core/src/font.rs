//! Built-in 3x5 pixel font.
//!
//! Each glyph is five rows of four bits; bit `0x08 >> col` set means the
//! pixel in column `col` is drawn. Glyphs occupy a `CHAR_W` x `CHAR_H` cell
//! so adjacent characters keep one pixel of spacing.

/// Horizontal advance per character, in pixels.
pub const CHAR_W: i32 = 4;
/// Line height, in pixels.
pub const CHAR_H: i32 = 6;
/// Number of glyph rows actually drawn.
pub const GLYPH_ROWS: usize = 5;

/// Look up the glyph rows for `ch`. Lower case letters share the upper case
/// shapes; characters without a glyph come back blank.
pub fn glyph(ch: char) -> [u8; GLYPH_ROWS] {
    match ch.to_ascii_uppercase() {
        'A' => [0x4, 0xA, 0xE, 0xA, 0xA],
        'B' => [0xC, 0xA, 0xC, 0xA, 0xC],
        'C' => [0x6, 0x8, 0x8, 0x8, 0x6],
        'D' => [0xC, 0xA, 0xA, 0xA, 0xC],
        'E' => [0xE, 0x8, 0xC, 0x8, 0xE],
        'F' => [0xE, 0x8, 0xC, 0x8, 0x8],
        'G' => [0x6, 0x8, 0xA, 0xA, 0x6],
        'H' => [0xA, 0xA, 0xE, 0xA, 0xA],
        'I' => [0xE, 0x4, 0x4, 0x4, 0xE],
        'J' => [0x2, 0x2, 0x2, 0xA, 0x4],
        'K' => [0xA, 0xA, 0xC, 0xA, 0xA],
        'L' => [0x8, 0x8, 0x8, 0x8, 0xE],
        'M' => [0xA, 0xE, 0xE, 0xA, 0xA],
        'N' => [0xC, 0xA, 0xA, 0xA, 0xA],
        'O' => [0x4, 0xA, 0xA, 0xA, 0x4],
        'P' => [0xC, 0xA, 0xC, 0x8, 0x8],
        'Q' => [0x4, 0xA, 0xA, 0xC, 0x6],
        'R' => [0xC, 0xA, 0xC, 0xA, 0xA],
        'S' => [0x6, 0x8, 0x4, 0x2, 0xC],
        'T' => [0xE, 0x4, 0x4, 0x4, 0x4],
        'U' => [0xA, 0xA, 0xA, 0xA, 0x6],
        'V' => [0xA, 0xA, 0xA, 0xA, 0x4],
        'W' => [0xA, 0xA, 0xE, 0xE, 0xA],
        'X' => [0xA, 0xA, 0x4, 0xA, 0xA],
        'Y' => [0xA, 0xA, 0x4, 0x4, 0x4],
        'Z' => [0xE, 0x2, 0x4, 0x8, 0xE],
        '0' => [0xE, 0xA, 0xA, 0xA, 0xE],
        '1' => [0xC, 0x4, 0x4, 0x4, 0xE],
        '2' => [0xC, 0x2, 0x4, 0x8, 0xE],
        '3' => [0xC, 0x2, 0x4, 0x2, 0xC],
        '4' => [0xA, 0xA, 0xE, 0x2, 0x2],
        '5' => [0xE, 0x8, 0xC, 0x2, 0xC],
        '6' => [0x6, 0x8, 0xE, 0xA, 0xE],
        '7' => [0xE, 0x2, 0x4, 0x8, 0x8],
        '8' => [0xE, 0xA, 0xE, 0xA, 0xE],
        '9' => [0xE, 0xA, 0xE, 0x2, 0xC],
        '.' => [0x0, 0x0, 0x0, 0x0, 0x4],
        ',' => [0x0, 0x0, 0x0, 0x4, 0x8],
        ':' => [0x0, 0x4, 0x0, 0x4, 0x0],
        '-' => [0x0, 0x0, 0xE, 0x0, 0x0],
        '_' => [0x0, 0x0, 0x0, 0x0, 0xE],
        '!' => [0x4, 0x4, 0x4, 0x0, 0x4],
        '?' => [0xE, 0x2, 0x4, 0x0, 0x4],
        '/' => [0x2, 0x2, 0x4, 0x8, 0x8],
        '(' => [0x4, 0x8, 0x8, 0x8, 0x4],
        ')' => [0x4, 0x2, 0x2, 0x2, 0x4],
        _ => [0x0; GLYPH_ROWS],
    }
}
