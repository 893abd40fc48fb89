use alloc::string::String;
use alloc::vec::Vec;

use crate::assets;
use crate::error::ProjectError;
use crate::image::{Image, TILE_SIZE};
use crate::surface::Surface;
use crate::tiles::{TileKind, TileKinds};

/// Where the editors read and persist tile-kind images.
pub trait Project {
    /// A copy of the image for `kind`. Unknown kinds read as a blank tile.
    fn image(&self, kind: usize) -> Image;

    /// Persist `image` as the image for `kind`.
    fn save_image(&mut self, kind: usize, image: &Image);
}

const HEADER: &str = "tileworld sheet";

/// An ordered roster of named 16x16 tile kinds, stored as a text sheet.
///
/// ```text
/// tileworld sheet
/// __kinds__
/// empty
/// player
/// __gfx__
/// 0000000000000000    (16 rows per kind, roster order)
/// ```
///
/// Kind 0 doubles as the placeholder imagery for empty cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetProject {
    kinds: Vec<TileKind>,
    dirty: bool,
}

impl SheetProject {
    /// Build a sheet from `kinds`. Fails if the roster is empty.
    pub fn new(kinds: Vec<TileKind>) -> Result<Self, ProjectError> {
        if kinds.is_empty() {
            return Err(ProjectError::EmptyRoster);
        }
        Ok(SheetProject { kinds, dirty: false })
    }

    /// The starter roster: empty, player, wall, box.
    pub fn default_sheet() -> Self {
        SheetProject {
            kinds: alloc::vec![
                TileKind::new("empty", Image::from_art(assets::EMPTY)),
                TileKind::new("player", Image::from_art(assets::PLAYER)),
                TileKind::new("wall", Image::from_art(assets::WALL)),
                TileKind::new("box", Image::from_art(assets::BOX)),
            ],
            dirty: false,
        }
    }

    /// Register a new kind at the end of the roster, returning its index.
    pub fn add_kind(&mut self, name: &str, image: Image) -> usize {
        self.kinds.push(TileKind::new(name, image));
        self.dirty = true;
        self.kinds.len() - 1
    }

    /// `true` once an image or kind changed since the last `mark_clean`.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

impl SheetProject {
    /// Parse a sheet from its text form (no file I/O).
    pub fn parse(source: &str) -> Result<Self, ProjectError> {
        let mut lines = source.lines().map(str::trim).filter(|l| !l.is_empty());
        if lines.next() != Some(HEADER) {
            return Err(ProjectError::MissingHeader);
        }

        let mut section = "";
        let mut names: Vec<&str> = Vec::new();
        let mut rows: Vec<&str> = Vec::new();
        for line in lines {
            if line.starts_with("__") && line.ends_with("__") {
                section = line;
                continue;
            }
            match section {
                "__kinds__" => names.push(line),
                "__gfx__" => rows.push(line),
                _ => {}
            }
        }

        if names.is_empty() {
            return Err(ProjectError::EmptyRoster);
        }
        if rows.len() != names.len() * TILE_SIZE {
            return Err(ProjectError::ImageCountMismatch {
                kinds: names.len(),
                images: rows.len() / TILE_SIZE,
            });
        }

        let mut kinds = Vec::with_capacity(names.len());
        for (k, name) in names.iter().enumerate() {
            let mut img = Image::tile();
            for y in 0..TILE_SIZE {
                let row_idx = k * TILE_SIZE + y;
                let row = rows[row_idx];
                if row.len() != TILE_SIZE || !row.chars().all(|c| c.is_ascii_hexdigit()) {
                    return Err(ProjectError::BadGfxRow { row: row_idx });
                }
                for (x, ch) in row.chars().enumerate() {
                    img.set_pixel(x as i32, y as i32, hex_char_to_u8(ch));
                }
            }
            kinds.push(TileKind::new(name, img));
        }

        Ok(SheetProject { kinds, dirty: false })
    }

    /// Serialize to the text form accepted by [`SheetProject::parse`].
    pub fn serialize(&self) -> String {
        let mut out = String::with_capacity(64 + self.kinds.len() * (TILE_SIZE + 1) * TILE_SIZE);
        out.push_str(HEADER);
        out.push('\n');

        out.push_str("__kinds__\n");
        for kind in &self.kinds {
            out.push_str(&kind.name);
            out.push('\n');
        }

        out.push_str("__gfx__\n");
        for kind in &self.kinds {
            for y in 0..TILE_SIZE as i32 {
                for x in 0..TILE_SIZE as i32 {
                    out.push(u8_to_hex_char(kind.image.get_pixel(x, y)));
                }
                out.push('\n');
            }
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Hex utilities
// ---------------------------------------------------------------------------

pub fn hex_char_to_u8(c: char) -> u8 {
    match c {
        '0'..='9' => c as u8 - b'0',
        'a'..='f' => c as u8 - b'a' + 10,
        'A'..='F' => c as u8 - b'A' + 10,
        _ => 0,
    }
}

pub fn u8_to_hex_char(v: u8) -> char {
    let v = v & 0x0f;
    if v <= 9 {
        (b'0' + v) as char
    } else {
        (b'a' + v - 10) as char
    }
}

// ---------------------------------------------------------------------------
// Collaborator impls
// ---------------------------------------------------------------------------

impl Project for SheetProject {
    fn image(&self, kind: usize) -> Image {
        self.kinds
            .get(kind)
            .map_or_else(Image::tile, |k| k.image.clone())
    }

    fn save_image(&mut self, kind: usize, image: &Image) {
        if let Some(k) = self.kinds.get_mut(kind) {
            k.image = image.clone();
            self.dirty = true;
            log::info!("PROJECT: saved image for kind {} ({})", kind, k.name);
        }
    }
}

impl TileKinds for SheetProject {
    fn all(&self) -> &[TileKind] {
        &self.kinds
    }

    fn empty(&self) -> &Image {
        &self.kinds[0].image
    }

    fn set_scene(&self, surface: &mut dyn Surface) {
        surface.background().fill(0);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    fn sheet_text(names: &[&str], rows_per_kind: usize) -> String {
        let mut s = String::from("tileworld sheet\n__kinds__\n");
        for n in names {
            s.push_str(n);
            s.push('\n');
        }
        s.push_str("__gfx__\n");
        for _ in 0..names.len() * rows_per_kind {
            s.push_str("0123456789abcdef\n");
        }
        s
    }

    #[test]
    fn test_parse_minimal_sheet() {
        let sheet = SheetProject::parse(&sheet_text(&["space", "hero"], 16)).unwrap();
        assert_eq!(sheet.all().len(), 2);
        assert_eq!(sheet.find_name("hero"), Some(1));
        assert_eq!(sheet.image(1).get_pixel(15, 3), 15);
        assert_eq!(sheet.image(0).get_pixel(10, 0), 10);
        assert!(!sheet.is_dirty());
    }

    #[test]
    fn test_parse_requires_header() {
        let text = sheet_text(&["space"], 16).replace("tileworld sheet\n", "");
        assert_eq!(SheetProject::parse(&text), Err(ProjectError::MissingHeader));
    }

    #[test]
    fn test_parse_rejects_short_gfx_row() {
        let mut text = sheet_text(&["space"], 15);
        text.push_str("0123\n");
        assert_eq!(SheetProject::parse(&text), Err(ProjectError::BadGfxRow { row: 15 }));
    }

    #[test]
    fn test_parse_rejects_non_hex_row() {
        let text = sheet_text(&["space"], 16).replacen("0123456789abcdef", "0123456789abcdeg", 1);
        assert_eq!(SheetProject::parse(&text), Err(ProjectError::BadGfxRow { row: 0 }));
    }

    #[test]
    fn test_parse_rejects_image_count_mismatch() {
        let text = sheet_text(&["a", "b"], 8);
        assert_eq!(
            SheetProject::parse(&text),
            Err(ProjectError::ImageCountMismatch { kinds: 2, images: 1 })
        );
    }

    #[test]
    fn test_parse_rejects_empty_roster() {
        assert_eq!(
            SheetProject::parse("tileworld sheet\n__kinds__\n__gfx__\n"),
            Err(ProjectError::EmptyRoster)
        );
        assert_eq!(SheetProject::new(Vec::new()), Err(ProjectError::EmptyRoster));
    }

    #[test]
    fn test_serialize_then_parse_preserves_default_sheet() {
        let sheet = SheetProject::default_sheet();
        let back = SheetProject::parse(&sheet.serialize()).unwrap();
        assert_eq!(back, sheet);
    }

    #[test]
    fn test_save_image_marks_dirty_and_ignores_unknown_kind() {
        let mut sheet = SheetProject::default_sheet();
        let mut img = Image::tile();
        img.set_pixel(0, 0, 9);
        sheet.save_image(99, &img);
        assert!(!sheet.is_dirty());
        sheet.save_image(2, &img);
        assert!(sheet.is_dirty());
        assert_eq!(sheet.image(2), img);
        sheet.mark_clean();
        assert!(!sheet.is_dirty());
    }

    #[test]
    fn test_unknown_kind_reads_blank_tile() {
        let sheet = SheetProject::default_sheet();
        assert_eq!(sheet.image(42), Image::tile());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            format!("{}", ProjectError::BadGfxRow { row: 3 }),
            "gfx row 3 is not 16 hex digits"
        );
    }
}
