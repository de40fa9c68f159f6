#![windows_subsystem = "windows"]

use anyhow::Result;
use druid::{AppLauncher, Color, WindowDesc, theme};
use log::info;

mod clipboard;
mod config;
mod error;
mod geometry;
mod host;
mod overlay;
mod render;
mod resize;
mod widget;

use config::{INITIAL_GEOMETRY, WINDOW_TITLE};
use widget::{AppState, OverlayWidget};

fn main() -> Result<()> {
    env_logger::init();

    let g = INITIAL_GEOMETRY;
    let window = WindowDesc::new(OverlayWidget::new())
        .title(WINDOW_TITLE)
        .window_size((g.width as f64, g.height as f64))
        .set_position((g.x as f64, g.y as f64))
        .show_titlebar(false)
        .transparent(true)
        .set_always_on_top(true);

    info!("overlay at {:?}", g);
    AppLauncher::with_window(window)
        .configure_env(|env, _| env.set(theme::WINDOW_BACKGROUND_COLOR, Color::TRANSPARENT))
        .launch(AppState::new(g))?;
    Ok(())
}
