mod app;
mod config;
mod file_project;
mod keys;

use macroquad::prelude::*;
use tileworld_core::input::ButtonRepeater;
use tileworld_core::stage::{SCREEN_H, SCREEN_W};
use tileworld_core::tiles::TileKinds;

use app::App;
use config::{CliArgs, DesktopConfig};
use file_project::FileProject;

const SW: f32 = SCREEN_W as f32;
const SH: f32 = SCREEN_H as f32;

/// Frames the status line stays up after a save.
const STATUS_FRAMES: u32 = 120;

fn window_conf() -> Conf {
    Conf {
        window_title: "Tileworld - Rule Editor".to_owned(),
        window_width: 640,
        window_height: 480,
        window_resizable: true,
        ..Default::default()
    }
}

/// Resolve a kind given by name or by index.
fn resolve_kind(kinds: &dyn TileKinds, name: &str) -> Option<usize> {
    kinds
        .find_name(name)
        .or_else(|| name.parse().ok().filter(|&i: &usize| i < kinds.all().len()))
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let cli = CliArgs::parse(std::env::args().skip(1));
    let config = DesktopConfig::load_or_default(&cli.config_path());
    let project_path = cli.project.clone().unwrap_or_else(|| config.project.clone());

    let project = match FileProject::open(&project_path) {
        Ok(p) => p,
        Err(e) => {
            log::error!("MAIN: {}", e);
            return;
        }
    };
    log::info!(
        "MAIN: editing {} ({} kinds)",
        project_path.display(),
        project.all().len()
    );

    let center_kind = resolve_kind(&project, &config.center_kind).unwrap_or_else(|| {
        log::warn!("MAIN: no tile kind {:?}, using kind 0", config.center_kind);
        0
    });
    let paint = cli.paint.as_deref().and_then(|name| {
        let kind = resolve_kind(&project, name);
        if kind.is_none() {
            log::warn!("MAIN: no tile kind {:?} to paint", name);
        }
        kind
    });

    let repeater = ButtonRepeater::new(config.repeat_delay, config.repeat_interval);
    let mut app = App::new(project, center_kind, paint, repeater);

    let image = Image::gen_image_color(SCREEN_W as u16, SCREEN_H as u16, BLACK);
    let texture = Texture2D::from_image(&image);
    texture.set_filter(FilterMode::Nearest);

    let mut status: Option<(String, u32)> = None;

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        app.step(keys::held_buttons());
        if let Some(msg) = app.project_mut().take_status() {
            status = Some((msg, STATUS_FRAMES));
        }

        let sw = screen_width();
        let sh = screen_height();
        let scale = config.window_scale(SW, SH, sw, sh);
        let offset_x = (sw - SW * scale) / 2.0;
        let offset_y = (sh - SH * scale) / 2.0;

        let img = Image {
            bytes: app.rgba(),
            width: SCREEN_W as u16,
            height: SCREEN_H as u16,
        };
        texture.update(&img);

        clear_background(Color::new(0.1, 0.1, 0.1, 1.0));
        draw_texture_ex(
            &texture,
            offset_x,
            offset_y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(SW * scale, SH * scale)),
                ..Default::default()
            },
        );

        if let Some((msg, frames)) = status.take() {
            draw_text(&msg, 4.0, sh - 8.0, 16.0, YELLOW);
            if frames > 1 {
                status = Some((msg, frames - 1));
            }
        }

        next_frame().await;
    }

    if let Err(e) = app.project_mut().write() {
        log::error!("MAIN: {}", e);
    }
}
