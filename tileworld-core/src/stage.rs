use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::image::Image;
use crate::surface::{SpriteId, Surface};

pub const SCREEN_W: usize = 160;
pub const SCREEN_H: usize = 120;
pub const SCREEN_SIZE: usize = SCREEN_W * SCREEN_H;

/// The handheld 16-colour arcade palette as RGBA bytes. Index 0 is the
/// transparent colour; on a composed screen it shows as black.
pub const ARCADE_PALETTE: [[u8; 4]; 16] = [
    [0, 0, 0, 255],       // 0 transparent
    [255, 255, 255, 255], // 1 white
    [255, 33, 33, 255],   // 2 red
    [255, 147, 196, 255], // 3 pink
    [255, 129, 53, 255],  // 4 orange
    [255, 246, 9, 255],   // 5 yellow
    [36, 156, 163, 255],  // 6 teal
    [120, 220, 82, 255],  // 7 green
    [0, 63, 173, 255],    // 8 blue
    [135, 242, 255, 255], // 9 light blue
    [142, 46, 196, 255],  // 10 purple
    [164, 131, 159, 255], // 11 light purple
    [92, 64, 108, 255],   // 12 dark purple
    [229, 205, 196, 255], // 13 tan
    [145, 70, 61, 255],   // 14 brown
    [0, 0, 0, 255],       // 15 black
];

#[derive(Debug, Clone)]
struct Token {
    image: Image,
    x: i32,
    y: i32,
    z: i32,
    visible: bool,
}

impl Token {
    /// Top-left corner and size of the token's image rectangle.
    fn rect(&self) -> (i32, i32, i32, i32) {
        let w = self.image.width() as i32;
        let h = self.image.height() as i32;
        (self.x - w / 2, self.y - h / 2, w, h)
    }
}

/// A read-only view of one live token, in draw order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenView {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub visible: bool,
    pub image: Image,
}

/// Software presentation surface: a background raster plus a sprite
/// table, composed into a 160x120 screen.
pub struct Stage {
    background: Image,
    tokens: BTreeMap<SpriteId, Token>,
    next_id: u32,
}

impl Stage {
    pub fn new() -> Self {
        Stage {
            background: Image::new(SCREEN_W, SCREEN_H),
            tokens: BTreeMap::new(),
            next_id: 0,
        }
    }

    /// Number of live tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, id: SpriteId) -> bool {
        self.tokens.contains_key(&id)
    }

    pub fn is_visible(&self, id: SpriteId) -> bool {
        self.tokens.get(&id).is_some_and(|t| t.visible)
    }

    pub fn z(&self, id: SpriteId) -> Option<i32> {
        self.tokens.get(&id).map(|t| t.z)
    }

    pub fn image(&self, id: SpriteId) -> Option<&Image> {
        self.tokens.get(&id).map(|t| &t.image)
    }

    pub fn background_image(&self) -> &Image {
        &self.background
    }

    /// Live tokens in draw order: ascending z, then creation order.
    pub fn tokens(&self) -> Vec<TokenView> {
        self.draw_order()
            .into_iter()
            .map(|t| TokenView {
                x: t.x,
                y: t.y,
                z: t.z,
                visible: t.visible,
                image: t.image.clone(),
            })
            .collect()
    }

    fn draw_order(&self) -> Vec<&Token> {
        // BTreeMap iteration is creation order; the sort is stable.
        let mut order: Vec<&Token> = self.tokens.values().collect();
        order.sort_by_key(|t| t.z);
        order
    }

    /// Draw the background and then every visible token into `screen`.
    pub fn compose(&self, screen: &mut Image) {
        screen.draw_image(&self.background, 0, 0);
        for t in self.draw_order() {
            if !t.visible {
                continue;
            }
            let (left, top, _, _) = t.rect();
            screen.draw_transparent_image(&t.image, left, top);
        }
    }

    /// Convert a composed screen to RGBA into a caller-provided buffer.
    /// `out` must be at least `width * height * 4` bytes long.
    pub fn screen_to_rgba_buf(screen: &Image, out: &mut [u8]) {
        for (&idx, rgba) in screen.pixels().iter().zip(out.chunks_exact_mut(4)) {
            rgba.copy_from_slice(&ARCADE_PALETTE[(idx & 0x0F) as usize]);
        }
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Vec-returning methods (gated behind `std` feature)
// ---------------------------------------------------------------------------

#[cfg(feature = "std")]
impl Stage {
    /// Compose the stage and return the screen as RGBA bytes.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut screen = Image::new(SCREEN_W, SCREEN_H);
        self.compose(&mut screen);
        let mut rgba = alloc::vec![0u8; SCREEN_SIZE * 4];
        Self::screen_to_rgba_buf(&screen, &mut rgba);
        rgba
    }
}

// ---------------------------------------------------------------------------
// Surface
// ---------------------------------------------------------------------------

impl Surface for Stage {
    fn create(&mut self, image: &Image) -> SpriteId {
        let id = SpriteId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.tokens.insert(
            id,
            Token {
                image: image.clone(),
                x: 0,
                y: 0,
                z: 0,
                visible: true,
            },
        );
        id
    }

    fn set_image(&mut self, id: SpriteId, image: &Image) {
        if let Some(t) = self.tokens.get_mut(&id) {
            t.image = image.clone();
        }
    }

    fn set_position(&mut self, id: SpriteId, x: i32, y: i32) {
        if let Some(t) = self.tokens.get_mut(&id) {
            t.x = x;
            t.y = y;
        }
    }

    fn position(&self, id: SpriteId) -> Option<(i32, i32)> {
        self.tokens.get(&id).map(|t| (t.x, t.y))
    }

    fn set_z(&mut self, id: SpriteId, z: i32) {
        if let Some(t) = self.tokens.get_mut(&id) {
            t.z = z;
        }
    }

    fn set_visible(&mut self, id: SpriteId, visible: bool) {
        if let Some(t) = self.tokens.get_mut(&id) {
            t.visible = visible;
        }
    }

    fn destroy(&mut self, id: SpriteId) {
        self.tokens.remove(&id);
    }

    fn overlaps(&self, a: SpriteId, b: SpriteId) -> bool {
        let (Some(ta), Some(tb)) = (self.tokens.get(&a), self.tokens.get(&b)) else {
            return false;
        };
        let (ax, ay, aw, ah) = ta.rect();
        let (bx, by, bw, bh) = tb.rect();
        ax < bx + bw && bx < ax + aw && ay < by + bh && by < ay + ah
    }

    fn background(&mut self) -> &mut Image {
        &mut self.background
    }
}
