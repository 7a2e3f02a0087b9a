use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use serde_json::json;

use crate::data::model::RiverDataset;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }

            ui.separator();

            let loaded = state.loaded().is_some();
            if ui
                .add_enabled(loaded, egui::Button::new("Export charts as PNG…"))
                .clicked()
            {
                request_chart_export(ui, state);
                ui.close_menu();
            }
            if ui
                .add_enabled(loaded, egui::Button::new("Export results as JSON…"))
                .clicked()
            {
                export_results(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!("{} samples from {}", ds.len(), ds.source_name));
        }

        ui.separator();

        if ui.selectable_label(state.show_table, "Table").clicked() {
            state.show_table = !state.show_table;
        }
        if ui
            .selectable_label(state.show_formulas, "Formulas")
            .clicked()
        {
            state.show_formulas = !state.show_formulas;
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – statistics
// ---------------------------------------------------------------------------

/// Render the left statistics panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(4.0);
    ui.heading("Statistics");
    ui.separator();

    // Copy what the cards need so the bins slider can borrow state mutably.
    let (summary, fit) = match state.loaded() {
        Some((_, report)) => {
            let fit = &report.regression;
            (
                report.summary.clone(),
                (fit.slope, fit.intercept, fit.r_squared, fit.mse),
            )
        }
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };
    let (slope, intercept, r_squared, mse) = fit;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Summary cards ----
            ui.strong("Concentration (mg/L)");
            ui.add_space(4.0);

            let modes_label = if summary.modes.is_empty() {
                "none".to_string()
            } else {
                summary
                    .modes
                    .iter()
                    .map(|m| format!("{m:.2}"))
                    .collect::<Vec<_>>()
                    .join(", ")
            };

            egui::Grid::new("summary_cards")
                .num_columns(2)
                .spacing([6.0, 6.0])
                .show(ui, |ui: &mut Ui| {
                    stat_card(ui, "Mean", format!("{:.2}", summary.mean));
                    stat_card(ui, "Median", format!("{:.2}", summary.median));
                    ui.end_row();
                    stat_card(ui, "Std dev", format!("{:.2}", summary.std_dev));
                    stat_card(ui, "Variance", format!("{:.2}", summary.variance));
                    ui.end_row();
                    stat_card(ui, "Q1", format!("{:.2}", summary.q1));
                    stat_card(ui, "Q3", format!("{:.2}", summary.q3));
                    ui.end_row();
                    stat_card(ui, "Min", format!("{:.2}", summary.min));
                    stat_card(ui, "Max", format!("{:.2}", summary.max));
                    ui.end_row();
                    stat_card(ui, "Samples", summary.count.to_string());
                    stat_card(ui, "Mode", modes_label);
                    ui.end_row();
                });

            ui.separator();

            // ---- Fitted line ----
            ui.strong("Linear fit");
            ui.add_space(4.0);

            egui::Grid::new("fit_values")
                .num_columns(2)
                .striped(true)
                .show(ui, |ui: &mut Ui| {
                    ui.label("Slope (β1)");
                    ui.label(format!("{slope:.4} mg/L per km"));
                    ui.end_row();
                    ui.label("Intercept (β0)");
                    ui.label(format!("{intercept:.4} mg/L"));
                    ui.end_row();
                    ui.label("R²");
                    ui.label(fmt_r_squared(r_squared, 4));
                    ui.end_row();
                    ui.label("MSE");
                    ui.label(format!("{mse:.4}"));
                    ui.end_row();
                });

            // ---- Formulas ----
            if state.show_formulas {
                ui.separator();
                ui.strong("Formulas");
                ui.add_space(4.0);

                egui::Grid::new("formulas")
                    .num_columns(2)
                    .spacing([10.0, 4.0])
                    .show(ui, |ui: &mut Ui| {
                        formula_row(
                            ui,
                            "β1 = Σ(xi - μx)(yi - μy) / Σ(xi - μx)²",
                            Some(format!("{slope:.4}")),
                        );
                        formula_row(ui, "β0 = μy - β1·μx", Some(format!("{intercept:.4}")));
                        formula_row(
                            ui,
                            "R² = 1 - SSres / SStot",
                            Some(fmt_r_squared(r_squared, 4)),
                        );
                        formula_row(ui, "MSE = SSres / n", Some(format!("{mse:.4}")));
                        formula_row(ui, "ŷ = β0 + β1·x", None);
                    });
            }

            ui.separator();

            // ---- Display options ----
            ui.strong("Display");
            ui.add_space(4.0);
            ui.add(egui::Slider::new(&mut state.bin_count, 3..=30).text("Histogram bins"));
        });
}

/// A small framed card with a bold value above its label.
fn stat_card(ui: &mut Ui, label: &str, value: String) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(8))
        .show(ui, |ui: &mut Ui| {
            ui.set_min_width(90.0);
            ui.vertical_centered(|ui: &mut Ui| {
                ui.label(RichText::new(value).strong().size(15.0));
                ui.small(label);
            });
        });
}

fn formula_row(ui: &mut Ui, formula: &str, value: Option<String>) {
    ui.monospace(formula);
    if let Some(v) = value {
        ui.monospace(format!("= {v}"));
    } else {
        ui.label("");
    }
    ui.end_row();
}

/// R² has no defined value when the observed concentrations never vary.
pub(crate) fn fmt_r_squared(r_squared: f64, decimals: usize) -> String {
    if r_squared.is_nan() {
        "undefined".to_string()
    } else {
        format!("{r_squared:.decimals$}")
    }
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open river samples")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} samples from {}",
                    dataset.len(),
                    dataset.source_name
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

/// Ask for a destination, then let the app capture the next frame.
fn request_chart_export(ui: &Ui, state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export charts as PNG")
        .add_filter("PNG image", &["png"])
        .set_file_name("river_charts.png")
        .save_file();

    if let Some(path) = file {
        state.pending_chart_export = Some(path);
        ui.ctx()
            .send_viewport_cmd(egui::ViewportCommand::Screenshot(egui::UserData::default()));
    }
}

fn export_results(state: &mut AppState) {
    let Some((dataset, report)) = state.loaded() else {
        return;
    };

    let file = rfd::FileDialog::new()
        .set_title("Export analysis results")
        .add_filter("JSON", &["json"])
        .set_file_name("river_analysis.json")
        .save_file();

    let Some(path) = file else {
        return;
    };

    let outcome = write_results(&path, dataset, report);
    match outcome {
        Ok(()) => log::info!("Wrote analysis results to {}", path.display()),
        Err(e) => {
            log::error!("Failed to export results: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}

fn write_results(
    path: &std::path::Path,
    dataset: &RiverDataset,
    report: &crate::analysis::AnalysisReport,
) -> anyhow::Result<()> {
    let doc = json!({
        "source": dataset.source_name,
        "samples": dataset.len(),
        "analysis": report,
    });
    let text = serde_json::to_string_pretty(&doc)?;
    std::fs::write(path, text)?;
    Ok(())
}
