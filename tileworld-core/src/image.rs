use alloc::vec;
use alloc::vec::Vec;

use crate::font;

/// Width and height of a tile-kind image, in pixels.
pub const TILE_SIZE: usize = 16;

/// A palette-indexed raster. Each byte is a colour index 0-15; index 0 is
/// transparent when the image is drawn over something else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

impl Image {
    /// Create a `width` x `height` image with every pixel transparent.
    pub fn new(width: usize, height: usize) -> Self {
        Image {
            width,
            height,
            pixels: vec![0u8; width * height],
        }
    }

    /// Create a blank 16x16 tile image.
    pub fn tile() -> Self {
        Self::new(TILE_SIZE, TILE_SIZE)
    }

    /// Parse glyph art: one text row per pixel row, `.` or `0` for
    /// transparent, `1`-`9` / `a`-`f` for colours. Whitespace is ignored, so
    /// rows may be indented or space separated. The widest row sets the
    /// width; short rows are padded with transparency.
    pub fn from_art(art: &str) -> Self {
        let rows: Vec<Vec<u8>> = art
            .lines()
            .map(|line| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(art_char_to_color)
                    .collect::<Vec<u8>>()
            })
            .filter(|row| !row.is_empty())
            .collect();

        let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        let mut img = Image::new(width, rows.len());
        for (y, row) in rows.iter().enumerate() {
            for (x, &c) in row.iter().enumerate() {
                img.pixels[y * width + x] = c;
            }
        }
        img
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw row-major pixel indices.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

/// Map one glyph-art character to a colour index. Anything unrecognised is
/// treated as transparent.
fn art_char_to_color(c: char) -> u8 {
    match c {
        '.' => 0,
        _ => c.to_digit(16).map_or(0, |d| d as u8),
    }
}

// ---------------------------------------------------------------------------
// Pixel access
// ---------------------------------------------------------------------------

impl Image {
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    /// Read the colour at `(x, y)`. Out-of-range reads return 0.
    pub fn get_pixel(&self, x: i32, y: i32) -> u8 {
        self.index(x, y).map_or(0, |i| self.pixels[i])
    }

    /// Write the colour at `(x, y)`. Out-of-range writes are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, col: u8) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = col & 0x0F;
        }
    }

    /// Fill the whole image with `col`.
    pub fn fill(&mut self, col: u8) {
        self.pixels.fill(col & 0x0F);
    }
}

// ---------------------------------------------------------------------------
// Drawing primitives
// ---------------------------------------------------------------------------

impl Image {
    /// Fill the `w` x `h` rectangle whose top-left corner is `(x, y)`,
    /// clipped to the image.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, col: u8) {
        if w <= 0 || h <= 0 {
            return;
        }
        let x_min = x.max(0);
        let y_min = y.max(0);
        let x_max = (x + w).min(self.width as i32);
        let y_max = (y + h).min(self.height as i32);
        if x_min >= x_max || y_min >= y_max {
            return;
        }

        let col = col & 0x0F;
        for row in y_min..y_max {
            let start = row as usize * self.width + x_min as usize;
            let end = row as usize * self.width + x_max as usize;
            self.pixels[start..end].fill(col);
        }
    }

    /// Draw a one-pixel outline of the `w` x `h` rectangle at `(x, y)`.
    pub fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, col: u8) {
        if w <= 0 || h <= 0 {
            return;
        }
        let right = x + w - 1;
        let bottom = y + h - 1;
        for px in x..=right {
            self.set_pixel(px, y, col);
            self.set_pixel(px, bottom, col);
        }
        for py in (y + 1)..bottom {
            self.set_pixel(x, py, col);
            self.set_pixel(right, py, col);
        }
    }

    /// Copy `src` with its top-left corner at `(x, y)`, including
    /// transparent pixels.
    pub fn draw_image(&mut self, src: &Image, x: i32, y: i32) {
        self.blit(src, x, y, false);
    }

    /// Copy `src` with its top-left corner at `(x, y)`, skipping colour 0.
    pub fn draw_transparent_image(&mut self, src: &Image, x: i32, y: i32) {
        self.blit(src, x, y, true);
    }

    fn blit(&mut self, src: &Image, x: i32, y: i32, transparent: bool) {
        for sy in 0..src.height {
            for sx in 0..src.width {
                let c = src.pixels[sy * src.width + sx];
                if transparent && c == 0 {
                    continue;
                }
                self.set_pixel(x + sx as i32, y + sy as i32, c);
            }
        }
    }

    /// Print `text` with the built-in font, top-left of the first glyph at
    /// `(x, y)`. `\n` starts a new line at the original `x`. Returns the x
    /// position directly after the last character drawn.
    pub fn print(&mut self, text: &str, x: i32, y: i32, col: u8) -> i32 {
        let mut cur_x = x;
        let mut cur_y = y;
        for ch in text.chars() {
            if ch == '\n' {
                cur_x = x;
                cur_y += font::CHAR_H;
                continue;
            }
            for (row, bits) in font::glyph(ch).iter().enumerate() {
                for col_bit in 0..4i32 {
                    if bits & (0x08 >> col_bit) != 0 {
                        self.set_pixel(cur_x + col_bit, cur_y + row as i32, col);
                    }
                }
            }
            cur_x += font::CHAR_W;
        }
        cur_x
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
