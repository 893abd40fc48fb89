//! The presentation surface the editors draw through.
//!
//! A surface owns a background raster and a set of visual tokens (sprites).
//! Token positions are the pixel coordinates of the token's centre, the way
//! the handheld engine places sprites.

use crate::image::Image;

/// Opaque handle to a token created on a [`Surface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpriteId(pub u32);

pub trait Surface {
    /// Create a visible token showing `image`, centred at the origin, z 0.
    fn create(&mut self, image: &Image) -> SpriteId;

    /// Replace the image shown by `id`.
    fn set_image(&mut self, id: SpriteId, image: &Image);

    /// Move the centre of `id` to `(x, y)`.
    fn set_position(&mut self, id: SpriteId, x: i32, y: i32);

    /// Centre of `id`, or `None` once it has been destroyed.
    fn position(&self, id: SpriteId) -> Option<(i32, i32)>;

    fn set_z(&mut self, id: SpriteId, z: i32);

    fn set_visible(&mut self, id: SpriteId, visible: bool);

    /// Remove `id`. Destroying an unknown token is a no-op.
    fn destroy(&mut self, id: SpriteId);

    /// Geometric overlap test between two live tokens. A destroyed token
    /// overlaps nothing.
    fn overlaps(&self, a: SpriteId, b: SpriteId) -> bool;

    /// The background raster drawn beneath every token.
    fn background(&mut self) -> &mut Image;
}
