use tileworld_core::action::EditorAction;
use tileworld_core::image_editor::ImageEditor;
use tileworld_core::input::{ButtonEvent, ButtonRepeater, NUM_BUTTONS};
use tileworld_core::rule::Rule;
use tileworld_core::rule_editor::RuleEditor;
use tileworld_core::stage::Stage;

use crate::file_project::FileProject;

pub enum Mode {
    Rules(RuleEditor),
    Paint(ImageEditor),
}

/// The editors, their stage and the project they edit.
pub struct App {
    stage: Stage,
    project: FileProject,
    mode: Mode,
    repeater: ButtonRepeater,
    center_kind: usize,
    /// The rule, kept while the pixel editor is open.
    rule: Rule,
}

impl App {
    /// Start in the rule editor on `center_kind`, or in the pixel editor on
    /// `paint` when given.
    pub fn new(
        project: FileProject,
        center_kind: usize,
        paint: Option<usize>,
        repeater: ButtonRepeater,
    ) -> Self {
        let mut stage = Stage::new();
        let mode = match paint {
            Some(kind) => Mode::Paint(ImageEditor::new(&mut stage, &project, kind)),
            None => Mode::Rules(RuleEditor::new(&mut stage, &project, center_kind)),
        };
        App {
            stage,
            project,
            mode,
            repeater,
            center_kind,
            rule: Rule::default(),
        }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn project_mut(&mut self) -> &mut FileProject {
        &mut self.project
    }

    /// Advance one frame with the given held buttons.
    pub fn step(&mut self, held: [bool; NUM_BUTTONS]) {
        for event in self.repeater.update(held) {
            self.dispatch(event);
        }
    }

    pub fn dispatch(&mut self, event: ButtonEvent) {
        let action = match &mut self.mode {
            Mode::Rules(editor) => editor.handle(event, &mut self.stage, &self.project),
            Mode::Paint(editor) => editor.handle(event, &mut self.stage, &mut self.project),
        };
        match action {
            EditorAction::None => {}
            EditorAction::OpenToolbox => self.open_paint(),
            EditorAction::Close => self.open_rules(),
        }
    }

    fn open_paint(&mut self) {
        let kind = match &self.mode {
            Mode::Rules(editor) => {
                self.rule = editor.rule().clone();
                editor.center_kind()
            }
            Mode::Paint(_) => return,
        };
        log::info!("APP: painting kind {}", kind);
        self.stage = Stage::new();
        self.mode = Mode::Paint(ImageEditor::new(&mut self.stage, &self.project, kind));
    }

    fn open_rules(&mut self) {
        log::info!("APP: back to rules");
        self.stage = Stage::new();
        let rule = std::mem::take(&mut self.rule);
        self.mode = Mode::Rules(RuleEditor::with_rule(
            &mut self.stage,
            &self.project,
            self.center_kind,
            rule,
        ));
    }

    /// The composed screen as RGBA bytes.
    pub fn rgba(&self) -> Vec<u8> {
        self.stage.to_rgba()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tileworld_core::input::Button;
    use tileworld_core::project::Project;
    use tileworld_core::rule::{RuleKind, RuleType, TileDir};
    use tileworld_core::stage::{SCREEN_H, SCREEN_W};

    fn scratch(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("tileworld-app-{}-{}", std::process::id(), name));
        let _ = std::fs::remove_file(&path);
        path
    }

    fn app(name: &str, paint: Option<usize>) -> App {
        let project = FileProject::open(&scratch(name)).unwrap();
        App::new(project, 1, paint, ButtonRepeater::default())
    }

    fn press(app: &mut App, button: Button) {
        app.dispatch(ButtonEvent::pressed(button));
    }

    #[test]
    fn test_starts_in_rules() {
        let app = app("start.tws", None);
        assert!(matches!(app.mode(), Mode::Rules(_)));
        assert_eq!(app.rgba().len(), SCREEN_W * SCREEN_H * 4);
    }

    #[test]
    fn test_paint_flag_opens_pixel_editor() {
        let app = app("paint.tws", Some(2));
        match app.mode() {
            Mode::Paint(editor) => assert_eq!(editor.kind(), 2),
            Mode::Rules(_) => panic!("expected the pixel editor"),
        }
    }

    #[test]
    fn test_toolbox_paints_centre_kind_and_close_returns_with_rule() {
        let mut app = app("roundtrip.tws", None);
        // Rule-type menu, then Moving Left.
        press(&mut app, Button::Up);
        press(&mut app, Button::A);
        for b in [Button::Left, Button::Left, Button::Down, Button::Down, Button::Down] {
            press(&mut app, b);
        }
        press(&mut app, Button::A);

        press(&mut app, Button::B);
        assert!(matches!(app.mode(), Mode::Paint(_)));

        // Pick colour 12, paint pixel (0,0), then save and close.
        for b in [Button::A, Button::Right, Button::Right, Button::A, Button::B, Button::B] {
            press(&mut app, b);
        }

        match app.mode() {
            Mode::Rules(editor) => assert_eq!(
                editor.rule().kind(),
                RuleKind::new(RuleType::Moving, TileDir::Left)
            ),
            Mode::Paint(_) => panic!("expected the rule editor"),
        }
        let path = app.project_mut().path().to_path_buf();
        assert!(app.project_mut().take_status().is_some());
        let reopened = FileProject::open(&path).unwrap();
        assert_eq!(reopened.image(1).get_pixel(0, 0), 12);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_step_fires_press_once_while_held() {
        let mut app = app("step.tws", None);
        let mut held = [false; NUM_BUTTONS];
        held[1] = true;
        app.step(held);
        app.step(held);
        match app.mode() {
            Mode::Rules(editor) => assert_eq!(editor.cursor_cell(), (3, 3)),
            Mode::Paint(_) => panic!("expected the rule editor"),
        }
    }
}
