//! Placement of tokens on the diamond neighbourhood.
//!
//! Offsets `(col, row)` are in cells from the diamond centre; a token at an
//! offset is centred on that cell's screen position.

use alloc::vec::Vec;

use crate::image::{Image, TILE_SIZE};
use crate::surface::{SpriteId, Surface};

const CELL: i32 = TILE_SIZE as i32;

/// Grid cell of the diamond centre.
pub const CENTER_COL: i32 = 2;
pub const CENTER_ROW: i32 = 2;

/// Screen-grid cell of the token at offset `(col, row)`.
pub fn grid_cell(col: i32, row: i32) -> (i32, i32) {
    (CENTER_COL + col, CENTER_ROW + row)
}

/// Centre pixel of a screen-grid cell.
pub fn cell_center(col: i32, row: i32) -> (i32, i32) {
    (col * CELL + CELL / 2, row * CELL + CELL / 2)
}

/// The offsets `makeContext` covers around `(col, row)`: the cross out to
/// two cells plus the inner diagonals. Duplicates are kept, matching how
/// the cells are drawn.
pub fn context_offsets(col: i32, row: i32) -> Vec<(i32, i32)> {
    let mut out = Vec::with_capacity(18);
    for i in -2..=2 {
        out.push((col + i, row));
        out.push((col, row + i));
        if i > -2 && i < 2 {
            out.push((col + i, row + i));
            out.push((col + i, row - i));
        }
    }
    out
}

/// Tokens shown on the diamond since the last [`Diamond::clear`].
#[derive(Debug, Default)]
pub struct Diamond {
    reclaim: Vec<SpriteId>,
}

impl Diamond {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `image` at offset `(col, row)` until the next clear.
    pub fn show(
        &mut self,
        surface: &mut dyn Surface,
        col: i32,
        row: i32,
        image: &Image,
        z: i32,
    ) -> SpriteId {
        let id = place(surface, col, row, image, z);
        self.reclaim.push(id);
        id
    }

    /// Show `image` at offset `(col, row)` for the editor's lifetime.
    pub fn show_persistent(
        &self,
        surface: &mut dyn Surface,
        col: i32,
        row: i32,
        image: &Image,
        z: i32,
    ) -> SpriteId {
        place(surface, col, row, image, z)
    }

    /// Lay placeholder imagery on every diamond cell around `(col, row)`.
    pub fn make_context(
        &self,
        surface: &mut dyn Surface,
        col: i32,
        row: i32,
        empty: &Image,
    ) -> Vec<SpriteId> {
        context_offsets(col, row)
            .into_iter()
            .map(|(c, r)| self.show_persistent(surface, c, r, empty, 0))
            .collect()
    }

    /// Destroy every token shown since the last clear.
    pub fn clear(&mut self, surface: &mut dyn Surface) {
        for id in self.reclaim.drain(..) {
            surface.destroy(id);
        }
    }

    /// Number of tokens awaiting the next clear.
    pub fn pending(&self) -> usize {
        self.reclaim.len()
    }
}

fn place(surface: &mut dyn Surface, col: i32, row: i32, image: &Image, z: i32) -> SpriteId {
    let (gc, gr) = grid_cell(col, row);
    let (x, y) = cell_center(gc, gr);
    let id = surface.create(image);
    surface.set_z(id, z);
    surface.set_position(id, x, y);
    id
}
