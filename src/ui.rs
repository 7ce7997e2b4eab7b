// ui.rs - Window, per-frame rendering and key handling

use eframe::egui;
use egui::{Color32, Rect, Vec2};
use life_engine::{Generations, Origin, Pattern};
use log::{info, warn};
use std::time::{Duration, Instant};

use crate::config::Settings;

pub struct LifeApp {
    life: Generations,
    pattern: Pattern,
    origin: Origin,
    cell_size: f32,
    live_color: Color32,
    is_running: bool,
    last_update: Instant,
    update_interval: Duration,
    shown_generation: Option<u64>,
}

impl LifeApp {
    pub fn new(life: Generations, pattern: Pattern, origin: Origin, settings: &Settings) -> Self {
        Self {
            life,
            pattern,
            origin,
            cell_size: settings.cell_size as f32,
            live_color: settings.color,
            is_running: true,
            last_update: Instant::now(),
            update_interval: settings.delay,
            shown_generation: None,
        }
    }

    /// Steps the simulation if it is running and the interval has passed.
    /// Returns the time left until the next step is due.
    fn tick(&mut self) -> Duration {
        if !self.is_running {
            return self.update_interval;
        }
        let elapsed = self.last_update.elapsed();
        if elapsed >= self.update_interval {
            self.life.step();
            self.last_update = Instant::now();
            return self.update_interval;
        }
        self.update_interval - elapsed
    }

    /// Back to generation 0 with the starting pattern.
    fn restart(&mut self) {
        self.life.reset();
        if let Err(e) = self.life.seed(&self.pattern, self.origin) {
            warn!("unable to reseed `{}`: {e}", self.pattern.name);
        }
        self.last_update = Instant::now();
        info!("restarted `{}`", self.pattern.name);
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        let (escape, space, restart) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Escape),
                i.key_pressed(egui::Key::Space),
                i.key_pressed(egui::Key::R),
            )
        });
        if escape {
            info!("escape pressed at generation {}", self.life.generation());
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
        if space {
            self.is_running = !self.is_running;
            if self.is_running {
                self.last_update = Instant::now();
            }
            info!("{}", if self.is_running { "resumed" } else { "paused" });
        }
        if restart {
            self.restart();
        }
    }

    fn update_title(&mut self, ctx: &egui::Context) {
        let generation = self.life.generation();
        if self.shown_generation == Some(generation) {
            return;
        }
        self.shown_generation = Some(generation);
        let title = format!(
            "Game of Life [{}] - generation {} - {} alive",
            self.life.topology(),
            generation,
            self.life.current().population()
        );
        ctx.send_viewport_cmd(egui::ViewportCommand::Title(title));
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);
        let wait = self.tick();
        self.update_title(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::BLACK))
            .show(ctx, |ui| {
                let start_pos = ui.max_rect().min;
                let painter = ui.painter();
                let cell = Vec2::splat(self.cell_size);

                // Only live cells are drawn; the background is already black
                for (row, col) in self.life.current().alive_cells() {
                    let min = start_pos + Vec2::new(col as f32 * self.cell_size, row as f32 * self.cell_size);
                    painter.rect_filled(Rect::from_min_size(min, cell), 0.0, self.live_color);
                }
            });

        if self.is_running {
            ctx.request_repaint_after(wait);
        }
    }
}
