use crate::action::EditorAction;
use crate::assets::Glyphs;
use crate::image::{Image, TILE_SIZE};
use crate::input::{Button, ButtonEvent, Press};
use crate::project::Project;
use crate::surface::{SpriteId, Surface};

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Palette swatch pitch.
const COLOR_SIZE: i32 = 8;
const PALETTE_X: i32 = 5;
const PALETTE_Y: i32 = 42;
const PALETTE_ROWS: i32 = 8;
const PALETTE_COLS: i32 = 2;

/// Paint grid pitch; each pixel is drawn one smaller to leave a gap.
const PAINT_SIZE: i32 = 6;
const PAINT_X: i32 = 30;
const PAINT_Y: i32 = 12;
const PAINT_CELLS: i32 = TILE_SIZE as i32;

const ICON_X: i32 = 5;
const ICON_Y: i32 = 4;
const ICON_BACK: u8 = 11;

const PREVIEW_X: i32 = 134;
const PREVIEW_Y: i32 = 12;

const FRAME_COLOR: u8 = 1;
/// Checker colour marking transparent pixels.
const CHECKER_COLOR: u8 = 13;

/// The palette cursor starts on this row, first column.
const PALETTE_START_ROW: i32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorType {
    /// Picking a palette colour.
    Color,
    /// Painting pixels of the image.
    Paint,
}

/// Pixel editor for one tile kind's 16x16 image.
pub struct ImageEditor {
    kind: usize,
    image: Image,
    cursor_type: CursorType,
    color_cursor: SpriteId,
    paint_cursor: SpriteId,
    color_cell: (i32, i32),
    paint_cell: (i32, i32),
    selected_color: u8,
    paint_icon: Image,
    closed: bool,
}

impl ImageEditor {
    pub fn new(surface: &mut dyn Surface, project: &dyn Project, kind: usize) -> Self {
        let glyphs = Glyphs::load();
        let color_cursor = surface.create(&glyphs.color_cursor);
        let paint_cursor = surface.create(&glyphs.paint_cursor);
        surface.set_visible(paint_cursor, false);

        let mut editor = ImageEditor {
            kind,
            image: project.image(kind),
            cursor_type: CursorType::Color,
            color_cursor,
            paint_cursor,
            color_cell: (0, PALETTE_START_ROW),
            paint_cell: (0, 0),
            selected_color: 0,
            paint_icon: glyphs.paint_icon,
            closed: false,
        };
        editor.place_cursors(surface);
        editor.update(surface);
        editor
    }

    pub fn kind(&self) -> usize {
        self.kind
    }

    pub fn image(&self) -> &Image {
        &self.image
    }

    pub fn cursor_type(&self) -> CursorType {
        self.cursor_type
    }

    pub fn selected_color(&self) -> u8 {
        self.selected_color
    }

    /// Palette cursor as `(col, row)`.
    pub fn color_cell(&self) -> (i32, i32) {
        self.color_cell
    }

    /// Paint cursor as `(col, row)`, i.e. the pixel it paints.
    pub fn paint_cell(&self) -> (i32, i32) {
        self.paint_cell
    }

    /// `true` once the image was saved and the editor asked to close.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    // -----------------------------------------------------------------------
    // Input
    // -----------------------------------------------------------------------

    pub fn handle(
        &mut self,
        event: ButtonEvent,
        surface: &mut dyn Surface,
        project: &mut dyn Project,
    ) -> EditorAction {
        if self.closed {
            return EditorAction::None;
        }
        let pressed = event.press == Press::Pressed;
        match event.button {
            Button::Left => self.move_left(surface),
            Button::Right => self.move_right(surface),
            Button::Up => self.move_vertical(surface, -1),
            Button::Down => self.move_vertical(surface, 1),
            Button::A if pressed => self.confirm(surface),
            Button::B if pressed => return self.cancel(surface, project),
            Button::A | Button::B => {}
        }
        EditorAction::None
    }

    fn move_left(&mut self, surface: &mut dyn Surface) {
        match self.cursor_type {
            CursorType::Color => {
                self.color_cell.0 = (self.color_cell.0 - 1).max(0);
            }
            CursorType::Paint if self.paint_cell.0 > 0 => self.paint_cell.0 -= 1,
            CursorType::Paint => self.set_cursor(surface, CursorType::Color),
        }
        self.place_cursors(surface);
    }

    fn move_right(&mut self, surface: &mut dyn Surface) {
        match self.cursor_type {
            CursorType::Color if self.color_cell.0 < PALETTE_COLS - 1 => self.color_cell.0 += 1,
            CursorType::Color => self.set_cursor(surface, CursorType::Paint),
            CursorType::Paint => {
                self.paint_cell.0 = (self.paint_cell.0 + 1).min(PAINT_CELLS - 1);
            }
        }
        self.place_cursors(surface);
    }

    fn move_vertical(&mut self, surface: &mut dyn Surface, dr: i32) {
        match self.cursor_type {
            CursorType::Color => {
                self.color_cell.1 = (self.color_cell.1 + dr).clamp(0, PALETTE_ROWS - 1);
            }
            CursorType::Paint => {
                self.paint_cell.1 = (self.paint_cell.1 + dr).clamp(0, PAINT_CELLS - 1);
            }
        }
        self.place_cursors(surface);
    }

    fn confirm(&mut self, surface: &mut dyn Surface) {
        match self.cursor_type {
            CursorType::Color => {
                let (col, row) = self.color_cell;
                self.selected_color = (row * PALETTE_COLS + col) as u8;
                log::debug!("PAINT: colour {}", self.selected_color);
            }
            CursorType::Paint => {
                let (col, row) = self.paint_cell;
                self.image.set_pixel(col, row, self.selected_color);
            }
        }
        self.update(surface);
    }

    fn cancel(&mut self, surface: &mut dyn Surface, project: &mut dyn Project) -> EditorAction {
        match self.cursor_type {
            CursorType::Paint => {
                self.set_cursor(surface, CursorType::Color);
                EditorAction::None
            }
            CursorType::Color => {
                project.save_image(self.kind, &self.image);
                self.closed = true;
                log::debug!("PAINT: saved kind {} and closed", self.kind);
                EditorAction::Close
            }
        }
    }

    fn set_cursor(&mut self, surface: &mut dyn Surface, cursor_type: CursorType) {
        surface.set_visible(self.color_cursor, cursor_type == CursorType::Color);
        surface.set_visible(self.paint_cursor, cursor_type == CursorType::Paint);
        self.cursor_type = cursor_type;
    }

    fn place_cursors(&self, surface: &mut dyn Surface) {
        let (col, row) = self.color_cell;
        surface.set_position(
            self.color_cursor,
            PALETTE_X + COLOR_SIZE / 2 + col * COLOR_SIZE,
            PALETTE_Y + COLOR_SIZE / 2 + row * COLOR_SIZE,
        );
        let (col, row) = self.paint_cell;
        surface.set_position(
            self.paint_cursor,
            PAINT_X + PAINT_SIZE / 2 - 1 + col * PAINT_SIZE,
            PAINT_Y + PAINT_SIZE / 2 - 1 + row * PAINT_SIZE,
        );
    }

    // -----------------------------------------------------------------------
    // Drawing
    // -----------------------------------------------------------------------

    /// Repaint the whole editor onto the background.
    pub fn update(&self, surface: &mut dyn Surface) {
        let screen = surface.background();
        screen.fill(0);
        screen.fill_rect(ICON_X, ICON_Y, 16, 16, ICON_BACK);
        screen.draw_transparent_image(&self.paint_icon, ICON_X, ICON_Y);

        for row in 0..PALETTE_ROWS {
            for col in 0..PALETTE_COLS {
                let color = (row * PALETTE_COLS + col) as u8;
                let x = PALETTE_X + col * COLOR_SIZE;
                let y = PALETTE_Y + row * COLOR_SIZE;
                screen.fill_rect(x + 1, y + 1, COLOR_SIZE - 2, COLOR_SIZE - 2, color);
                if color == self.selected_color {
                    screen.draw_rect(x, y, COLOR_SIZE, COLOR_SIZE, FRAME_COLOR);
                }
            }
        }
        // Transparent swatch.
        screen.fill_rect(PALETTE_X + 1, PALETTE_Y + 1, 3, 3, CHECKER_COLOR);
        screen.fill_rect(PALETTE_X + 4, PALETTE_Y + 4, 3, 3, CHECKER_COLOR);

        let frame = PAINT_SIZE * PAINT_CELLS + PAINT_SIZE - 2;
        screen.draw_rect(PAINT_X - 2, PAINT_Y - 2, frame, frame, FRAME_COLOR);
        let half = PAINT_SIZE / 2;
        for row in 0..self.image.height() as i32 {
            let y = PAINT_Y + row * PAINT_SIZE;
            for col in 0..self.image.width() as i32 {
                let x = PAINT_X + col * PAINT_SIZE;
                let color = self.image.get_pixel(col, row);
                screen.fill_rect(x, y, PAINT_SIZE - 1, PAINT_SIZE - 1, color);
                if color == 0 {
                    screen.fill_rect(x, y, half - 1, half - 1, CHECKER_COLOR);
                    screen.fill_rect(x + half, y + half, half - 1, half - 1, CHECKER_COLOR);
                }
            }
        }

        screen.draw_image(&self.image, PREVIEW_X, PREVIEW_Y);
        screen.draw_rect(PREVIEW_X - 1, PREVIEW_Y - 1, 18, 18, FRAME_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::SheetProject;
    use crate::stage::Stage;

    /// Counts saves so tests can check save-and-close happens once.
    struct CountingProject {
        sheet: SheetProject,
        saves: usize,
    }

    impl Project for CountingProject {
        fn image(&self, kind: usize) -> Image {
            self.sheet.image(kind)
        }

        fn save_image(&mut self, kind: usize, image: &Image) {
            self.saves += 1;
            self.sheet.save_image(kind, image);
        }
    }

    struct Harness {
        stage: Stage,
        project: CountingProject,
        editor: ImageEditor,
    }

    impl Harness {
        fn new(kind: usize) -> Self {
            let mut stage = Stage::new();
            let project = CountingProject {
                sheet: SheetProject::default_sheet(),
                saves: 0,
            };
            let editor = ImageEditor::new(&mut stage, &project, kind);
            Harness { stage, project, editor }
        }

        fn press(&mut self, button: Button) -> EditorAction {
            self.editor
                .handle(ButtonEvent::pressed(button), &mut self.stage, &mut self.project)
        }
    }

    #[test]
    fn test_opens_in_color_state() {
        let h = Harness::new(1);
        assert_eq!(h.editor.cursor_type(), CursorType::Color);
        assert_eq!(h.editor.color_cell(), (0, 6));
        assert_eq!(h.editor.selected_color(), 0);
        assert_eq!(h.stage.position(h.editor.color_cursor), Some((9, 94)));
        assert_eq!(h.stage.position(h.editor.paint_cursor), Some((32, 14)));
        assert!(h.stage.is_visible(h.editor.color_cursor));
        assert!(!h.stage.is_visible(h.editor.paint_cursor));
        assert_eq!(h.editor.image(), &h.project.sheet.image(1));
    }

    #[test]
    fn test_confirm_picks_palette_colour() {
        let mut h = Harness::new(1);
        h.press(Button::Right);
        h.press(Button::Up);
        h.press(Button::Up);
        h.press(Button::Up);
        assert_eq!(h.editor.color_cell(), (1, 3));
        h.press(Button::A);
        assert_eq!(h.editor.selected_color(), 7);
        // Selection outline around swatch (row 3, col 1).
        assert_eq!(h.stage.background_image().get_pixel(13, 66), FRAME_COLOR);
    }

    #[test]
    fn test_palette_edges() {
        let mut h = Harness::new(1);
        h.press(Button::Left);
        assert_eq!(h.editor.color_cell(), (0, 6));
        for _ in 0..4 {
            h.editor
                .handle(ButtonEvent::repeated(Button::Down), &mut h.stage, &mut h.project);
        }
        assert_eq!(h.editor.color_cell(), (0, 7));
        h.press(Button::Right);
        h.press(Button::Right);
        assert_eq!(h.editor.cursor_type(), CursorType::Paint);
        assert!(h.stage.is_visible(h.editor.paint_cursor));
        assert!(!h.stage.is_visible(h.editor.color_cursor));
    }

    #[test]
    fn test_paint_writes_selected_colour() {
        let mut h = Harness::new(0);
        // Pick colour 5 (row 2, col 1).
        h.press(Button::Right);
        for _ in 0..4 {
            h.press(Button::Up);
        }
        h.press(Button::A);
        assert_eq!(h.editor.selected_color(), 5);

        h.press(Button::Right);
        h.press(Button::Right);
        h.press(Button::Right);
        h.press(Button::Down);
        assert_eq!(h.editor.paint_cell(), (2, 1));
        h.press(Button::A);
        assert_eq!(h.editor.image().get_pixel(2, 1), 5);
        assert_eq!(h.project.saves, 0);
        // The grid cell and the preview show it.
        let bg = h.stage.background_image();
        assert_eq!(bg.get_pixel(PAINT_X + 2 * 6, PAINT_Y + 6), 5);
        assert_eq!(bg.get_pixel(PREVIEW_X + 2, PREVIEW_Y + 1), 5);
    }

    #[test]
    fn test_paint_cursor_clamps_and_returns_left() {
        let mut h = Harness::new(1);
        h.press(Button::Right);
        h.press(Button::Right);
        for _ in 0..20 {
            h.press(Button::Right);
            h.press(Button::Down);
        }
        assert_eq!(h.editor.paint_cell(), (15, 15));
        assert_eq!(h.stage.position(h.editor.paint_cursor), Some((122, 104)));
        for _ in 0..15 {
            h.press(Button::Left);
        }
        assert_eq!(h.editor.cursor_type(), CursorType::Paint);
        h.press(Button::Left);
        assert_eq!(h.editor.cursor_type(), CursorType::Color);
    }

    #[test]
    fn test_b_leaves_paint_then_saves_once() {
        let mut h = Harness::new(2);
        h.press(Button::Right);
        h.press(Button::Right);
        h.press(Button::A);
        assert_eq!(h.press(Button::B), EditorAction::None);
        assert_eq!(h.editor.cursor_type(), CursorType::Color);

        assert_eq!(h.press(Button::B), EditorAction::Close);
        assert!(h.editor.is_closed());
        assert_eq!(h.project.saves, 1);
        assert_eq!(h.project.sheet.image(2).get_pixel(0, 0), 0);

        assert_eq!(h.press(Button::B), EditorAction::None);
        assert_eq!(h.press(Button::A), EditorAction::None);
        h.press(Button::Up);
        assert_eq!(h.project.saves, 1);
        assert_eq!(h.editor.color_cell(), (1, 6));
    }

    #[test]
    fn test_transparent_pixels_get_checker() {
        let h = Harness::new(0);
        let bg = h.stage.background_image();
        // Pixel (1,0) of the empty kind is transparent.
        assert_eq!(bg.get_pixel(PAINT_X + 6, PAINT_Y), CHECKER_COLOR);
        assert_eq!(bg.get_pixel(PAINT_X + 6 + 3, PAINT_Y + 3), CHECKER_COLOR);
        assert_eq!(bg.get_pixel(PAINT_X + 6 + 2, PAINT_Y), 0);
    }
}
