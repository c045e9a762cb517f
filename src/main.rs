mod colors;
mod config;
mod engine;
mod error;
mod types;
mod ui;

use std::process::ExitCode;

use crate::config::Settings;
use crate::ui::app::App;
use eframe::egui;
use log::{error, info};

const TITLE: &str = "World Clock";

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;

    let window = &settings.window;
    let mut viewport = egui::ViewportBuilder::default()
        .with_title(TITLE)
        .with_inner_size([window.width, window.height])
        .with_fullscreen(window.fullscreen);
    if let Some((x, y)) = window.position {
        viewport = viewport.with_position([x, y]);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    info!(
        "Opening {}x{} window{}",
        window.width,
        window.height,
        if window.fullscreen { " (fullscreen)" } else { "" }
    );
    eframe::run_native(
        TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, settings)?))),
    )?;
    Ok(())
}
