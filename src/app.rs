use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context as _;
use eframe::egui;

use crate::data::loader;
use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct RiverStatApp {
    pub state: AppState,
    /// Where the central panel landed last frame, for cropping chart exports.
    charts_rect: Option<egui::Rect>,
}

impl RiverStatApp {
    /// Fresh app; a dataset path given on the command line is loaded before
    /// the first frame.
    pub fn new(initial_dataset: Option<PathBuf>) -> Self {
        let mut state = AppState::default();
        if let Some(path) = initial_dataset {
            match loader::load_file(&path) {
                Ok(dataset) => {
                    log::info!(
                        "Loaded {} samples from {}",
                        dataset.len(),
                        dataset.source_name
                    );
                    state.set_dataset(dataset);
                }
                Err(e) => {
                    log::error!("Failed to load {}: {e:#}", path.display());
                    state.status_message = Some(format!("Error: {e:#}"));
                }
            }
        }
        Self {
            state,
            charts_rect: None,
        }
    }

    /// Pick up the screenshot a chart export requested on an earlier frame
    /// and write it out as a PNG.
    fn handle_screenshot_events(&mut self, ctx: &egui::Context) {
        if self.state.pending_chart_export.is_none() {
            return;
        }

        let mut screenshot: Option<Arc<egui::ColorImage>> = None;
        ctx.input(|i| {
            for event in &i.raw.events {
                if let egui::Event::Screenshot { image, .. } = event {
                    screenshot = Some(image.clone());
                }
            }
        });

        // The screenshot arrives a frame after the viewport command; keep
        // waiting until it does.
        let Some(shot) = screenshot else {
            return;
        };
        let Some(path) = self.state.pending_chart_export.take() else {
            return;
        };

        match save_cropped_png(&shot, self.charts_rect, ctx.pixels_per_point(), &path) {
            Ok(()) => log::info!("Exported charts to {}", path.display()),
            Err(e) => {
                log::error!("Failed to export charts: {e:#}");
                self.state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

impl eframe::App for RiverStatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_screenshot_events(ctx);

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: statistics ----
        egui::SidePanel::left("stats_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: charts or table ----
        let central = egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.show_table {
                table::data_table(ui, &self.state);
            } else {
                plot::charts_grid(ui, &self.state);
            }
        });
        self.charts_rect = Some(central.response.rect);
    }
}

// ---------------------------------------------------------------------------
// Chart export
// ---------------------------------------------------------------------------

/// Cut the charts-panel rectangle out of a full-window screenshot and save
/// it. Falls back to the whole window when no panel rect was recorded.
fn save_cropped_png(
    shot: &egui::ColorImage,
    rect: Option<egui::Rect>,
    pixels_per_point: f32,
    path: &Path,
) -> anyhow::Result<()> {
    let full_w = shot.width();
    let full_h = shot.height();

    let (rgba, width, height) = if let Some(rect) = rect {
        let x0 = ((rect.left() * pixels_per_point) as usize).min(full_w);
        let y0 = ((rect.top() * pixels_per_point) as usize).min(full_h);
        let x1 = ((rect.right() * pixels_per_point).ceil() as usize).min(full_w);
        let y1 = ((rect.bottom() * pixels_per_point).ceil() as usize).min(full_h);
        let w = x1.saturating_sub(x0);
        let h = y1.saturating_sub(y0);

        let mut cropped = Vec::with_capacity(w * h * 4);
        for row in y0..y1 {
            for col in x0..x1 {
                let c = shot.pixels[row * full_w + col];
                cropped.extend_from_slice(&[c.r(), c.g(), c.b(), c.a()]);
            }
        }
        (cropped, w, h)
    } else {
        let rgba = shot
            .pixels
            .iter()
            .flat_map(|c| [c.r(), c.g(), c.b(), c.a()])
            .collect();
        (rgba, full_w, full_h)
    };

    let png = image::RgbaImage::from_raw(width as u32, height as u32, rgba)
        .context("screenshot buffer did not match its dimensions")?;
    png.save(path)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
