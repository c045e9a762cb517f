//! Application orchestrator: owns the clock board and paints it every frame.

use crate::config::Settings;
use crate::engine::board::ClockBoard;
use crate::engine::clock::{Moment, REFRESH_PERIOD, format_now};
use crate::error::Result;
use crate::ui::clock_view::paint_unit;
use crate::ui::fonts::FontBook;
use crate::ui::layout;
use eframe::egui::{self, Color32, FontDefinitions};
use log::{error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

// ── App struct ─────────────────────────────────────────────────────────────────

/// The top-level application, implementing [`eframe::App`].
///
/// All clock state lives in [`ClockBoard`]; `App` only:
/// 1. Advances the board's timers once per frame.
/// 2. Schedules the next repaint for the earliest pending deadline.
/// 3. Paints the main clock and the lower row into the grid.
pub struct App {
    board: ClockBoard,
    fonts: FontBook,
    background: Color32,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Result<Self> {
        let mut defs = FontDefinitions::default();
        let families = [&settings.main_style, &settings.lower_style]
            .into_iter()
            .flat_map(|style| {
                [&style.city, &style.time]
                    .into_iter()
                    .chain(style.date.as_ref().map(|d| &d.style))
            })
            .map(|text| text.family.as_str());
        let fonts = FontBook::build(&mut defs, families)?;
        cc.egui_ctx.set_fonts(defs);

        let board = ClockBoard::new(&settings, StdRng::from_os_rng(), Moment::now())?;
        info!(
            "Main clock {} reads {}",
            board.main().label(),
            format_now(&settings.main.tz, &settings.main_style.time_format)?
        );
        info!(
            "Lower clocks rotate through {} cities, starting with {}",
            board.rotation_pool().len(),
            board
                .lower()
                .iter()
                .map(|unit| unit.label())
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(Self {
            board,
            fonts,
            background: settings.window.background,
        })
    }
}

/// Ask the root viewport to close when Escape was pressed this frame.
fn close_on_escape(ctx: &egui::Context) -> bool {
    if !ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        return false;
    }
    info!("Escape pressed, closing");
    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    true
}

// ── eframe::App ────────────────────────────────────────────────────────────────

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ── 1. Escape closes the window ───────────────────────────────────────
        if close_on_escape(ctx) {
            return;
        }

        // ── 2. Timers ─────────────────────────────────────────────────────────
        let now = Moment::now();
        match self.board.tick(now) {
            Ok(deadline) => {
                ctx.request_repaint_after(deadline.saturating_duration_since(now.instant));
            }
            Err(e) => {
                error!("Clock refresh failed: {e}");
                ctx.request_repaint_after(REFRESH_PERIOD);
            }
        }

        // ── 3. Grid ───────────────────────────────────────────────────────────
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(self.background))
            .show(ctx, |ui| {
                let cells = layout::grid(ui.max_rect());
                paint_unit(
                    &ui.painter_at(cells.main),
                    cells.main,
                    self.board.main(),
                    &self.fonts,
                );
                for (cell, unit) in cells.lower.into_iter().zip(self.board.lower()) {
                    paint_unit(&ui.painter_at(cell), cell, unit, &self.fonts);
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{Event, FullOutput, Key, Modifiers, RawInput, ViewportCommand, ViewportId};

    fn key(key: Key) -> Event {
        Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: Modifiers::NONE,
        }
    }

    fn frame(events: Vec<Event>) -> (bool, FullOutput) {
        let ctx = egui::Context::default();
        let mut closed = false;
        let output = ctx.run(
            RawInput {
                events,
                ..Default::default()
            },
            |ctx| closed = close_on_escape(ctx),
        );
        (closed, output)
    }

    fn sent_close(output: &FullOutput) -> bool {
        output
            .viewport_output
            .get(&ViewportId::ROOT)
            .is_some_and(|vp| vp.commands.iter().any(|c| matches!(c, ViewportCommand::Close)))
    }

    #[test]
    fn escape_closes_the_window() {
        let (closed, output) = frame(vec![key(Key::Escape)]);
        assert!(closed);
        assert!(sent_close(&output));
    }

    #[test]
    fn other_input_keeps_the_window_open() {
        for events in [vec![], vec![key(Key::Enter)], vec![key(Key::Q)]] {
            let (closed, output) = frame(events);
            assert!(!closed);
            assert!(!sent_close(&output));
        }
    }
}
