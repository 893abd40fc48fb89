use alloc::string::String;

use crate::image::Image;
use crate::surface::Surface;

/// One tile kind the game world is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileKind {
    pub name: String,
    pub image: Image,
}

impl TileKind {
    pub fn new(name: &str, image: Image) -> Self {
        TileKind {
            name: String::from(name),
            image,
        }
    }
}

/// The roster of known tile kinds. Kind indices are positions in `all()`.
pub trait TileKinds {
    /// Every known kind with its representative image, in index order.
    fn all(&self) -> &[TileKind];

    /// Index of the kind called `name`.
    fn find_name(&self, name: &str) -> Option<usize> {
        self.all().iter().position(|k| k.name == name)
    }

    /// Placeholder imagery for an empty cell.
    fn empty(&self) -> &Image;

    /// Prepare the surface for an editor scene.
    fn set_scene(&self, surface: &mut dyn Surface);
}
