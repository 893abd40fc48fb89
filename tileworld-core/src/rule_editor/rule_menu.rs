use crate::image::TILE_SIZE;
use crate::rule::{Rule, RuleKind, RuleType, TileDir};

use super::diamond::grid_cell;
use super::{Scene, OVERLAY_Z};

/// Screen grid the cursor moves on.
pub const GRID_COLS: usize = 10;
pub const GRID_ROWS: usize = 7;

/// Background colour behind a selected rule-menu cell.
pub const HIGHLIGHT_COLOR: u8 = 13;

/// Where each rule kind sits in the menu, relative to the menu origin.
pub const MENU_LAYOUT: [(RuleKind, i32, i32); 13] = [
    (RuleKind::new(RuleType::Resting, TileDir::None), 0, -1),
    (RuleKind::new(RuleType::Moving, TileDir::Left), 0, 0),
    (RuleKind::new(RuleType::Moving, TileDir::Right), 1, 0),
    (RuleKind::new(RuleType::Moving, TileDir::Up), 0, 1),
    (RuleKind::new(RuleType::Moving, TileDir::Down), 1, 1),
    (RuleKind::new(RuleType::Pushing, TileDir::Right), 3, 0),
    (RuleKind::new(RuleType::Pushing, TileDir::Left), 2, 1),
    (RuleKind::new(RuleType::Pushing, TileDir::Down), 4, 1),
    (RuleKind::new(RuleType::Pushing, TileDir::Up), 5, 0),
    (RuleKind::new(RuleType::Colliding, TileDir::Right), 6, 0),
    (RuleKind::new(RuleType::Colliding, TileDir::Left), 7, 1),
    (RuleKind::new(RuleType::Colliding, TileDir::Down), 9, 0),
    (RuleKind::new(RuleType::Colliding, TileDir::Up), 8, 1),
];

/// Which rule kind, if any, was drawn at each screen-grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleLookup {
    cells: [[Option<RuleKind>; GRID_COLS]; GRID_ROWS],
}

impl RuleLookup {
    pub fn new() -> Self {
        RuleLookup {
            cells: [[None; GRID_COLS]; GRID_ROWS],
        }
    }

    pub fn clear(&mut self) {
        self.cells = [[None; GRID_COLS]; GRID_ROWS];
    }

    /// Record `kind` at grid cell `(col, row)`. Cells off the grid are
    /// dropped.
    pub fn stamp(&mut self, col: i32, row: i32, kind: RuleKind) {
        if let Some(cell) = self.cell_mut(col, row) {
            *cell = Some(kind);
        }
    }

    pub fn get(&self, col: i32, row: i32) -> Option<RuleKind> {
        if !in_grid(col, row) {
            return None;
        }
        self.cells[row as usize][col as usize]
    }

    /// Every stamped cell as `(col, row, kind)`.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, RuleKind)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(c, k)| k.map(|k| (c as i32, r as i32, k)))
        })
    }

    fn cell_mut(&mut self, col: i32, row: i32) -> Option<&mut Option<RuleKind>> {
        if !in_grid(col, row) {
            return None;
        }
        Some(&mut self.cells[row as usize][col as usize])
    }
}

impl Default for RuleLookup {
    fn default() -> Self {
        Self::new()
    }
}

fn in_grid(col: i32, row: i32) -> bool {
    (0..GRID_COLS as i32).contains(&col) && (0..GRID_ROWS as i32).contains(&row)
}

fn highlight(scene: &mut Scene, col: i32, row: i32) {
    let (gc, gr) = grid_cell(col, row);
    let size = TILE_SIZE as i32;
    scene
        .surface
        .background()
        .fill_rect(gc * size, gr * size, size, size, HIGHLIGHT_COLOR);
}

/// The rule-type menu and its hit-test table.
#[derive(Debug, Default)]
pub struct RuleMenu {
    lookup: RuleLookup,
}

impl RuleMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self) -> &RuleLookup {
        &self.lookup
    }

    pub fn clear(&mut self) {
        self.lookup.clear();
    }

    /// The rule kind drawn at grid cell `(col, row)`.
    pub fn hit(&self, col: i32, row: i32) -> Option<RuleKind> {
        self.lookup.get(col, row)
    }

    /// Draw `kind` with its trigger cell at offset `(x, y)`.
    pub fn show_rule_type(
        &mut self,
        scene: &mut Scene,
        rule: &Rule,
        kind: RuleKind,
        x: i32,
        y: i32,
    ) {
        let selected = rule.matches(kind);
        if selected {
            highlight(scene, x, y);
        }
        let (glyphs, center) = (scene.glyphs, scene.center);
        scene.diamond.show(scene.surface, x, y, center, 0);
        self.stamp(x, y, kind);

        let arrow = glyphs.arrow(kind.dir);
        if matches!(kind.rule_type, RuleType::Moving | RuleType::Colliding) {
            if let Some(arrow) = arrow {
                scene.diamond.show(scene.surface, x, y, arrow, OVERLAY_Z);
            }
        }

        let (ax, ay) = kind.dir.menu_offset();
        let (px, py, glyph) = match kind.rule_type {
            RuleType::Pushing => match arrow {
                Some(arrow) => (x + ax, y + ay, arrow),
                None => return,
            },
            RuleType::Colliding => (x - ax, y - ay, &glyphs.explode),
            _ => return,
        };
        scene.diamond.show(scene.surface, px, py, glyph, OVERLAY_Z);
        self.stamp(px, py, kind);
        if selected {
            highlight(scene, px, py);
        }
    }

    /// Draw every rule kind around the menu origin `(x, y)`.
    pub fn show_rule_menu(&mut self, scene: &mut Scene, rule: &Rule, x: i32, y: i32) {
        for (kind, dx, dy) in MENU_LAYOUT {
            self.show_rule_type(scene, rule, kind, x + dx, y + dy);
        }
    }

    fn stamp(&mut self, x: i32, y: i32, kind: RuleKind) {
        let (col, row) = grid_cell(x, y);
        self.lookup.stamp(col, row, kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::Glyphs;
    use crate::image::Image;
    use crate::rule_editor::diamond::{cell_center, Diamond};
    use crate::stage::Stage;
    use alloc::vec::Vec;

    fn draw_menu(rule: &Rule) -> (Stage, RuleMenu) {
        let mut stage = Stage::new();
        let mut diamond = Diamond::new();
        let glyphs = Glyphs::load();
        let center = Image::tile();
        let mut menu = RuleMenu::new();
        let mut scene = Scene {
            surface: &mut stage,
            diamond: &mut diamond,
            glyphs: &glyphs,
            center: &center,
        };
        menu.show_rule_menu(&mut scene, rule, -2, 3);
        (stage, menu)
    }

    /// Image and z of every token centred on grid cell `(col, row)`.
    fn drawn_at(stage: &Stage, (col, row): (i32, i32)) -> Vec<(Image, i32)> {
        let (x, y) = cell_center(col, row);
        stage
            .tokens()
            .into_iter()
            .filter(|t| (t.x, t.y) == (x, y))
            .map(|t| (t.image, t.z))
            .collect()
    }

    #[test]
    fn test_lookup_rejects_off_grid_cells() {
        let mut lookup = RuleLookup::new();
        let kind = RuleKind::new(RuleType::Moving, TileDir::Up);
        lookup.stamp(-1, 0, kind);
        lookup.stamp(10, 0, kind);
        lookup.stamp(0, 7, kind);
        assert_eq!(lookup.iter().count(), 0);
        lookup.stamp(9, 6, kind);
        assert_eq!(lookup.get(9, 6), Some(kind));
        assert_eq!(lookup.get(42, 6), None);
    }

    #[test]
    fn test_menu_stamps_trigger_cells() {
        let (_, menu) = draw_menu(&Rule::default());
        assert_eq!(menu.hit(0, 4), Some(RuleKind::new(RuleType::Resting, TileDir::None)));
        assert_eq!(menu.hit(0, 5), Some(RuleKind::new(RuleType::Moving, TileDir::Left)));
        assert_eq!(menu.hit(1, 6), Some(RuleKind::new(RuleType::Moving, TileDir::Down)));
        assert_eq!(menu.hit(9, 5), Some(RuleKind::new(RuleType::Colliding, TileDir::Down)));
        assert_eq!(menu.hit(5, 4), None);
    }

    #[test]
    fn test_pushing_stamps_against_travel() {
        let (_, menu) = draw_menu(&Rule::default());
        // Pushing Right at (3,5) also stamps (2,5), Pushing Up at (5,5)
        // also stamps (5,6).
        let right = RuleKind::new(RuleType::Pushing, TileDir::Right);
        assert_eq!(menu.hit(3, 5), Some(right));
        assert_eq!(menu.hit(2, 5), Some(right));
        let up = RuleKind::new(RuleType::Pushing, TileDir::Up);
        assert_eq!(menu.hit(5, 5), Some(up));
        assert_eq!(menu.hit(5, 6), Some(up));
    }

    #[test]
    fn test_colliding_stamps_with_travel() {
        let (_, menu) = draw_menu(&Rule::default());
        // Colliding Right at (6,5) explodes on (7,5); Colliding Left at
        // (7,6) explodes on (6,6).
        assert_eq!(menu.hit(7, 5), Some(RuleKind::new(RuleType::Colliding, TileDir::Right)));
        assert_eq!(menu.hit(6, 6), Some(RuleKind::new(RuleType::Colliding, TileDir::Left)));
    }

    #[test]
    fn test_selected_kind_is_highlighted() {
        let mut rule = Rule::default();
        rule.set_kind(RuleKind::new(RuleType::Pushing, TileDir::Right));
        let (stage, _) = draw_menu(&rule);
        let bg = stage.background_image();
        assert_eq!(bg.get_pixel(3 * 16 + 1, 5 * 16 + 1), HIGHLIGHT_COLOR);
        assert_eq!(bg.get_pixel(2 * 16 + 1, 5 * 16 + 1), HIGHLIGHT_COLOR);
        assert_eq!(bg.get_pixel(16 + 1, 5 * 16 + 1), 0);
    }

    #[test]
    fn test_glyphs_land_on_their_cells() {
        let (stage, _) = draw_menu(&Rule::default());
        let glyphs = Glyphs::load();
        let tile = Image::tile();
        let arrow = |dir: TileDir| glyphs.arrow(dir).cloned().unwrap();

        // Moving Left: arrow over the trigger tile.
        assert_eq!(
            drawn_at(&stage, (0, 5)),
            alloc::vec![(tile.clone(), 0), (arrow(TileDir::Left), OVERLAY_Z)]
        );
        // Pushing Up: bare trigger tile, arrow on the pushed cell.
        assert_eq!(drawn_at(&stage, (5, 5)), alloc::vec![(tile.clone(), 0)]);
        assert_eq!(drawn_at(&stage, (5, 6)), alloc::vec![(arrow(TileDir::Up), OVERLAY_Z)]);
        // Colliding Right: arrow on the trigger, explosion ahead of it.
        assert_eq!(
            drawn_at(&stage, (6, 5)),
            alloc::vec![(tile, 0), (arrow(TileDir::Right), OVERLAY_Z)]
        );
        assert_eq!(drawn_at(&stage, (7, 5)), alloc::vec![(glyphs.explode.clone(), OVERLAY_Z)]);
    }
}
