use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::assets::Glyphs;
use crate::rule::{AttrType, Rule};
use crate::surface::{SpriteId, Surface};
use crate::tiles::TileKind;

use super::diamond::{cell_center, grid_cell, CENTER_COL, CENTER_ROW};
use super::{Scene, OVERLAY_Z};

/// Row offsets of the two strips, and the column offset they start from.
const KINDS_ROW: i32 = 4;
const SELECTOR_ROW: i32 = 3;
const STRIP_COL: i32 = -2;

/// Markers float above everything the menu draws, below the cursor.
const MARKER_Z: i32 = 20;

/// Per-cell proposition editing: one glyph per tile kind with its current
/// attribute marker, and the four-item attribute selector.
#[derive(Debug)]
pub struct PropositionMenu {
    /// Shows which neighbour cell is being edited.
    target_marker: SpriteId,
    /// Shows which selector item is active.
    selected_marker: SpriteId,
    /// Offset of the neighbour cell being edited.
    target: Option<(i32, i32)>,
    /// Tile-kind glyphs, indexed by kind.
    items: Vec<SpriteId>,
    /// Tile-kind index to the marker showing its attribute.
    markers: BTreeMap<usize, SpriteId>,
    selector: Vec<(SpriteId, AttrType)>,
    selected: AttrType,
}

impl PropositionMenu {
    pub fn new(surface: &mut dyn Surface, glyphs: &Glyphs) -> Self {
        let target_marker = hidden_marker(surface, glyphs);
        let selected_marker = hidden_marker(surface, glyphs);
        PropositionMenu {
            target_marker,
            selected_marker,
            target: None,
            items: Vec::new(),
            markers: BTreeMap::new(),
            selector: Vec::new(),
            selected: AttrType::Only,
        }
    }

    pub fn target(&self) -> Option<(i32, i32)> {
        self.target
    }

    pub fn selected(&self) -> AttrType {
        self.selected
    }

    /// Marker token for tile kind `kind`, while the menu is drawn.
    pub fn marker(&self, kind: usize) -> Option<SpriteId> {
        self.markers.get(&kind).copied()
    }

    /// Edit the neighbour at screen-grid cell `(col, row)`.
    pub fn open(&mut self, surface: &mut dyn Surface, col: i32, row: i32) {
        self.target = Some((col - CENTER_COL, row - CENTER_ROW));
        let (x, y) = cell_center(col, row);
        surface.set_position(self.target_marker, x, y);
        surface.set_visible(self.target_marker, true);
    }

    pub fn close(&mut self, surface: &mut dyn Surface) {
        self.target = None;
        surface.set_visible(self.target_marker, false);
        surface.set_visible(self.selected_marker, false);
    }

    /// Forget the tokens of the previous pass. The diamond owns them.
    pub fn reset(&mut self) {
        self.items.clear();
        self.markers.clear();
        self.selector.clear();
    }

    /// Draw the menu for the target cell, creating its propositions with
    /// defaults on first visit. Selection restarts at the first item.
    pub fn show(&mut self, scene: &mut Scene, rule: &mut Rule, kinds: &[TileKind]) {
        let Some((col, row)) = self.target else {
            return;
        };
        let glyphs = scene.glyphs;
        let entry = rule.attr_map.entry(col, row, kinds.len());

        for (i, kind) in kinds.iter().enumerate() {
            let x = STRIP_COL + i as i32;
            let item = scene.diamond.show(scene.surface, x, KINDS_ROW, &kind.image, 0);
            let attr = entry.attrs.get(i).copied().unwrap_or(AttrType::Exclude);
            let marker = scene
                .diamond
                .show(scene.surface, x, KINDS_ROW, glyphs.attr(attr), OVERLAY_Z);
            self.items.push(item);
            self.markers.insert(i, marker);
        }

        for (i, attr) in AttrType::ALL.into_iter().enumerate() {
            let x = STRIP_COL + i as i32;
            let id = scene
                .diamond
                .show(scene.surface, x, SELECTOR_ROW, glyphs.attr_centered(attr), 0);
            self.selector.push((id, attr));
        }
        self.select(scene.surface, 0);
    }

    /// Apply a confirm press with `cursor` over the menu: pick the selector
    /// item under it, then assign the selected attribute to the tile kind
    /// under it. Either, both or neither may apply.
    pub fn update(
        &mut self,
        surface: &mut dyn Surface,
        cursor: SpriteId,
        rule: &mut Rule,
        glyphs: &Glyphs,
    ) {
        if let Some(idx) = self
            .selector
            .iter()
            .position(|&(id, _)| surface.overlaps(cursor, id))
        {
            self.select(surface, idx);
        }

        let Some(kind) = self.items.iter().position(|&id| surface.overlaps(cursor, id)) else {
            return;
        };
        if let Some(&marker) = self.markers.get(&kind) {
            surface.set_image(marker, glyphs.attr(self.selected));
        }
        if let Some((col, row)) = self.target {
            rule.attr_map.set(col, row, kind, self.selected);
            log::debug!(
                "RULES: kind {} at ({}, {}) is now {:?}",
                kind,
                col,
                row,
                self.selected
            );
        }
    }

    fn select(&mut self, surface: &mut dyn Surface, idx: usize) {
        let Some(&(id, attr)) = self.selector.get(idx) else {
            return;
        };
        self.selected = attr;
        if let Some((x, y)) = surface.position(id) {
            surface.set_position(self.selected_marker, x, y);
            surface.set_visible(self.selected_marker, true);
        }
    }
}

fn hidden_marker(surface: &mut dyn Surface, glyphs: &Glyphs) -> SpriteId {
    let id = surface.create(&glyphs.cursor_out);
    surface.set_z(id, MARKER_Z);
    surface.set_visible(id, false);
    id
}

/// Screen-grid cell of tile kind `kind`'s glyph in the menu.
pub fn kind_cell(kind: usize) -> (i32, i32) {
    grid_cell(STRIP_COL + kind as i32, KINDS_ROW)
}

/// Screen-grid cell of `attr`'s selector item.
pub fn selector_cell(attr: AttrType) -> (i32, i32) {
    grid_cell(STRIP_COL + attr.index() as i32, SELECTOR_ROW)
}
