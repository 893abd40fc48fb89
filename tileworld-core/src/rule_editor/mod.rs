//! Visual editor for a single tile rule.
//!
//! The screen is a 10x7 grid of 16px cells. The rule is drawn on a diamond
//! centred on cell (2,2): the tile kind the rule is about sits in the
//! middle, its neighbours around it. Moving the cursor onto the centre and
//! pressing A opens the rule-type menu; pressing A on a neighbour opens the
//! proposition menu for that cell.
//!
//! Every state change is followed by a full redraw. Tokens drawn by a
//! redraw live until the next one; the diamond placeholders, the centre
//! glyph, the cursor and the two proposition markers live as long as the
//! editor.

pub mod diamond;
pub mod proposition_menu;
pub mod rule_menu;

use crate::action::EditorAction;
use crate::assets::Glyphs;
use crate::image::Image;
use crate::input::{Button, ButtonEvent, Press};
use crate::rule::Rule;
use crate::surface::{SpriteId, Surface};
use crate::tiles::TileKinds;

use diamond::{cell_center, Diamond, CENTER_COL, CENTER_ROW};
use proposition_menu::PropositionMenu;
use rule_menu::{RuleMenu, GRID_COLS, GRID_ROWS};

/// Glyphs stacked on a tile glyph sit above it.
pub(crate) const OVERLAY_Z: i32 = 10;

const CURSOR_Z: i32 = 50;
const CURSOR_START: (i32, i32) = (2, 3);

/// Rule-type menu origin, as an offset from the diamond centre.
const MENU_ORIGIN: (i32, i32) = (-2, 3);

/// Farthest Manhattan distance from the centre that is still a neighbour.
const NEIGHBOUR_REACH: i32 = 2;

const PANEL_COLOR: u8 = 11;
const WHEN_COLOR: u8 = 12;
const TEXT_COLOR: u8 = 1;
const WHEN_WIDTH: i32 = 80;

/// Everything a menu pass draws with.
pub struct Scene<'a> {
    pub surface: &'a mut dyn Surface,
    pub diamond: &'a mut Diamond,
    pub glyphs: &'a Glyphs,
    /// Image of the tile kind the rule is about.
    pub center: &'a Image,
}

/// The overlay currently open, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    None,
    RuleType,
    Proposition,
}

pub struct RuleEditor {
    rule: Rule,
    menu: Menu,
    center_kind: usize,
    center_image: Image,
    glyphs: Glyphs,
    diamond: Diamond,
    cursor: SpriteId,
    cursor_col: i32,
    cursor_row: i32,
    rule_menu: RuleMenu,
    propositions: PropositionMenu,
}

impl RuleEditor {
    /// Open the editor on a fresh rule for tile kind `center_kind`.
    pub fn new(surface: &mut dyn Surface, kinds: &dyn TileKinds, center_kind: usize) -> Self {
        Self::with_rule(surface, kinds, center_kind, Rule::default())
    }

    /// Open the editor on an existing rule.
    pub fn with_rule(
        surface: &mut dyn Surface,
        kinds: &dyn TileKinds,
        center_kind: usize,
        rule: Rule,
    ) -> Self {
        let glyphs = Glyphs::load();
        let center_image = kinds
            .all()
            .get(center_kind)
            .map_or_else(|| kinds.empty().clone(), |k| k.image.clone());

        kinds.set_scene(surface);
        let propositions = PropositionMenu::new(surface, &glyphs);
        let diamond = Diamond::new();
        diamond.make_context(surface, 0, 0, kinds.empty());
        diamond.show_persistent(surface, 0, 0, &center_image, OVERLAY_Z);

        let cursor = surface.create(&glyphs.cursor_in);
        surface.set_z(cursor, CURSOR_Z);
        let (x, y) = cell_center(CURSOR_START.0, CURSOR_START.1);
        surface.set_position(cursor, x, y);

        let mut editor = RuleEditor {
            rule,
            menu: Menu::None,
            center_kind,
            center_image,
            glyphs,
            diamond,
            cursor,
            cursor_col: CURSOR_START.0,
            cursor_row: CURSOR_START.1,
            rule_menu: RuleMenu::new(),
            propositions,
        };
        editor.redraw(surface, kinds);
        editor
    }

    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    pub fn menu(&self) -> Menu {
        self.menu
    }

    pub fn center_kind(&self) -> usize {
        self.center_kind
    }

    /// Screen-grid cell under the cursor.
    pub fn cursor_cell(&self) -> (i32, i32) {
        (self.cursor_col, self.cursor_row)
    }

    pub fn cursor(&self) -> SpriteId {
        self.cursor
    }

    pub fn rule_menu(&self) -> &RuleMenu {
        &self.rule_menu
    }

    pub fn propositions(&self) -> &PropositionMenu {
        &self.propositions
    }

    // -----------------------------------------------------------------------
    // Input
    // -----------------------------------------------------------------------

    /// Apply one button event. Directions act on press and repeat, A and B
    /// on press only.
    pub fn handle(
        &mut self,
        event: ButtonEvent,
        surface: &mut dyn Surface,
        kinds: &dyn TileKinds,
    ) -> EditorAction {
        match event.button {
            Button::Left => self.move_cursor(surface, -1, 0),
            Button::Right => self.move_cursor(surface, 1, 0),
            Button::Up => self.move_cursor(surface, 0, -1),
            Button::Down => self.move_cursor(surface, 0, 1),
            Button::A if event.press == Press::Pressed => self.confirm(surface, kinds),
            Button::B if event.press == Press::Pressed => return self.cancel(surface, kinds),
            Button::A | Button::B => {}
        }
        EditorAction::None
    }

    fn move_cursor(&mut self, surface: &mut dyn Surface, dc: i32, dr: i32) {
        self.cursor_col = (self.cursor_col + dc).clamp(0, GRID_COLS as i32 - 1);
        self.cursor_row = (self.cursor_row + dr).clamp(0, GRID_ROWS as i32 - 1);
        let (x, y) = cell_center(self.cursor_col, self.cursor_row);
        surface.set_position(self.cursor, x, y);
    }

    fn distance_from_center(&self) -> i32 {
        (self.cursor_col - CENTER_COL).abs() + (self.cursor_row - CENTER_ROW).abs()
    }

    fn confirm(&mut self, surface: &mut dyn Surface, kinds: &dyn TileKinds) {
        let distance = self.distance_from_center();
        if distance == 0 {
            self.menu = if self.menu == Menu::RuleType {
                Menu::None
            } else {
                Menu::RuleType
            };
            log::debug!("RULES: menu {:?}", self.menu);
            self.redraw(surface, kinds);
        } else if distance <= NEIGHBOUR_REACH {
            self.menu = Menu::Proposition;
            self.propositions
                .open(surface, self.cursor_col, self.cursor_row);
            log::debug!(
                "RULES: editing propositions at {:?}",
                self.propositions.target()
            );
            self.redraw(surface, kinds);
        } else if self.menu == Menu::RuleType {
            if let Some(kind) = self.rule_menu.hit(self.cursor_col, self.cursor_row) {
                self.rule.set_kind(kind);
                log::debug!("RULES: rule is now {:?} {:?}", kind.rule_type, kind.dir);
                self.redraw(surface, kinds);
            }
        } else if self.menu == Menu::Proposition {
            self.propositions
                .update(surface, self.cursor, &mut self.rule, &self.glyphs);
        }
    }

    fn cancel(&mut self, surface: &mut dyn Surface, kinds: &dyn TileKinds) -> EditorAction {
        if self.menu == Menu::Proposition {
            self.menu = Menu::None;
            log::debug!("RULES: menu {:?}", self.menu);
            self.redraw(surface, kinds);
            return EditorAction::None;
        }
        EditorAction::OpenToolbox
    }

    // -----------------------------------------------------------------------
    // Drawing
    // -----------------------------------------------------------------------

    /// Rebuild everything derived from the editor state. Calling it twice
    /// in a row leaves the surface as the first call left it.
    pub fn redraw(&mut self, surface: &mut dyn Surface, kinds: &dyn TileKinds) {
        log::trace!("RULES: redraw ({:?})", self.menu);
        self.diamond.clear(surface);
        self.propositions.reset();
        if self.menu != Menu::Proposition {
            self.propositions.close(surface);
        }

        let bg = surface.background();
        bg.fill(PANEL_COLOR);
        bg.fill_rect(0, 0, WHEN_WIDTH, bg.height() as i32, WHEN_COLOR);
        bg.print("When", 0, 0, TEXT_COLOR);
        bg.print("Do", WHEN_WIDTH, 0, TEXT_COLOR);

        let mut scene = Scene {
            surface,
            diamond: &mut self.diamond,
            glyphs: &self.glyphs,
            center: &self.center_image,
        };
        let current = self.rule.kind();
        self.rule_menu
            .show_rule_type(&mut scene, &self.rule, current, 0, 0);
        // The rule drawn on the diamond is not a menu choice.
        self.rule_menu.clear();

        match self.menu {
            Menu::RuleType => {
                self.rule_menu
                    .show_rule_menu(&mut scene, &self.rule, MENU_ORIGIN.0, MENU_ORIGIN.1);
            }
            Menu::Proposition => {
                self.propositions
                    .show(&mut scene, &mut self.rule, kinds.all());
            }
            Menu::None => {}
        }
    }
}
