mod analysis;
mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::RiverStatApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    // Optional dataset path as the first argument; everything else goes
    // through File → Open.
    let initial_dataset: Option<PathBuf> = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Riverstat – Pollutant Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(RiverStatApp::new(initial_dataset)))),
    )
}
