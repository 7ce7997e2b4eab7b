// main.rs - Conway's Game of Life with hedge, torus or Klein-bottle edges

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use eframe::egui;
use life_engine::{Generations, patterns};
use log::info;

mod config; // Command-line options
mod ui; // Window and rendering

use config::{Args, Settings};
use ui::LifeApp;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::try_from(Args::parse()).context("invalid configuration")?;
    let (rows, cols) = (settings.rows(), settings.cols());

    let pattern = settings
        .load_pattern()
        .with_context(|| {
            let names: Vec<_> = patterns::names().collect();
            format!("unable to load the initial pattern (built-ins: {})", names.join(", "))
        })?;

    let mut life = Generations::new(rows, cols, settings.topology)
        .with_context(|| format!("unable to allocate a {rows}x{cols} board"))?;

    let origin = settings.origin_for(&pattern);
    let placed = life
        .seed(&pattern, origin)
        .with_context(|| format!("pattern `{}` does not fit at {origin}", pattern.name))?;

    info!(
        "{rows}x{cols} board, {} edges, `{}` ({placed} cells) at {origin}",
        settings.topology, pattern.name
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.width as f32, settings.height as f32])
            .with_resizable(false),
        ..Default::default()
    };

    let app = LifeApp::new(life, pattern, origin, &settings);
    eframe::run_native("Game of Life", options, Box::new(move |_cc| Box::new(app)))
        .map_err(|e| anyhow!("window closed with an error: {e}"))
}
