use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Data table (central panel, replaces the charts when toggled)
// ---------------------------------------------------------------------------

/// Per-record table: the two observed columns plus the fitted value and
/// residual for each sample.
pub fn data_table(ui: &mut Ui, state: &AppState) {
    let Some((dataset, report)) = state.loaded() else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a file to view the records  (File → Open…)");
        });
        return;
    };

    let predicted = &report.regression.predicted;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(40.0))
        .columns(Column::remainder().at_least(110.0), 4)
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("#");
            });
            header.col(|ui| {
                ui.strong("Distance (km)");
            });
            header.col(|ui| {
                ui.strong("Concentration (mg/L)");
            });
            header.col(|ui| {
                ui.strong("Predicted (mg/L)");
            });
            header.col(|ui| {
                ui.strong("Residual (mg/L)");
            });
        })
        .body(|body| {
            body.rows(18.0, dataset.len(), |mut row| {
                let i = row.index();
                let sample = &dataset.samples[i];
                let fitted = predicted[i];

                row.col(|ui| {
                    ui.label(i.to_string());
                });
                row.col(|ui| {
                    ui.label(format!("{:.3}", sample.distance_km));
                });
                row.col(|ui| {
                    ui.label(format!("{:.3}", sample.concentration_mg_l));
                });
                row.col(|ui| {
                    ui.label(format!("{fitted:.3}"));
                });
                row.col(|ui| {
                    ui.label(format!("{:.3}", sample.concentration_mg_l - fitted));
                });
            });
        });
}
