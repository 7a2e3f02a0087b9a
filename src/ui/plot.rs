use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{
    Bar, BarChart, BoxElem, BoxPlot, BoxSpread, HLine, Legend, Line, Plot, PlotPoints, Points,
};

use crate::analysis::{AnalysisReport, Histogram};
use crate::data::model::RiverDataset;
use crate::state::AppState;

use super::panels::fmt_r_squared;

// ---------------------------------------------------------------------------
// Chart grid (central panel)
// ---------------------------------------------------------------------------

/// Render the 2×2 chart grid: scatter with the fitted line, residuals,
/// box plot and histogram of the concentration column.
pub fn charts_grid(ui: &mut Ui, state: &AppState) {
    let Some((dataset, report)) = state.loaded() else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a file to explore the data  (File → Open…)");
        });
        return;
    };

    // Two rows of charts share the panel, minus room for the titles.
    let chart_height = (ui.available_height() / 2.0 - 30.0).max(160.0);

    ui.columns(2, |columns: &mut [Ui]| {
        scatter_with_fit(&mut columns[0], state, dataset, report, chart_height);
        residual_chart(&mut columns[1], state, dataset, report, chart_height);
    });
    ui.columns(2, |columns: &mut [Ui]| {
        concentration_box_plot(&mut columns[0], state, report, chart_height);
        concentration_histogram(&mut columns[1], state, dataset, chart_height);
    });
}

// ---------------------------------------------------------------------------
// Individual charts
// ---------------------------------------------------------------------------

/// Observed points with the regression line drawn through the x-range
/// endpoints, so an unsorted dataset cannot zigzag the line.
fn scatter_with_fit(
    ui: &mut Ui,
    state: &AppState,
    dataset: &RiverDataset,
    report: &AnalysisReport,
    height: f32,
) {
    let fit = &report.regression;
    ui.strong(format!(
        "Concentration vs distance  (R² = {}, MSE = {:.2})",
        fmt_r_squared(fit.r_squared, 2),
        fit.mse
    ));

    let observed: PlotPoints = dataset
        .samples
        .iter()
        .map(|s| [s.distance_km, s.concentration_mg_l])
        .collect();

    let Some((x_min, x_max)) = dataset.distance_range() else {
        return;
    };
    let fit_line = Line::new(PlotPoints::from(vec![
        [x_min, fit.predict(x_min)],
        [x_max, fit.predict(x_max)],
    ]))
    .name("Regression line")
    .color(state.palette.fit_line)
    .width(2.0);

    Plot::new("scatter_fit")
        .legend(Legend::default())
        .x_axis_label("Distance downstream (km)")
        .y_axis_label("Concentration (mg/L)")
        .height(height)
        .show(ui, |plot_ui| {
            plot_ui.points(
                Points::new(observed)
                    .name("Observed")
                    .color(state.palette.observed)
                    .radius(3.0),
            );
            plot_ui.line(fit_line);
        });
}

/// Observed minus predicted per sample; a good fit scatters evenly
/// around the zero line.
fn residual_chart(
    ui: &mut Ui,
    state: &AppState,
    dataset: &RiverDataset,
    report: &AnalysisReport,
    height: f32,
) {
    ui.strong("Residuals");

    let residuals: PlotPoints = dataset
        .samples
        .iter()
        .zip(report.regression.predicted.iter())
        .map(|(s, &p)| [s.distance_km, s.concentration_mg_l - p])
        .collect();

    Plot::new("residuals")
        .x_axis_label("Distance downstream (km)")
        .y_axis_label("Residual (mg/L)")
        .height(height)
        .show(ui, |plot_ui| {
            plot_ui.hline(HLine::new(0.0).color(Color32::GRAY).width(1.0));
            plot_ui.points(
                Points::new(residuals)
                    .name("Residual")
                    .color(state.palette.residuals)
                    .radius(3.0),
            );
        });
}

/// Five-number summary of the concentration column: whiskers at min/max,
/// box at q1/median/q3.
fn concentration_box_plot(ui: &mut Ui, state: &AppState, report: &AnalysisReport, height: f32) {
    ui.strong("Concentration spread");

    let s = &report.summary;
    let spread = BoxSpread::new(s.min, s.q1, s.median, s.q3, s.max);
    let body = BoxElem::new(0.0, spread)
        .box_width(0.5)
        .whisker_width(0.25)
        .fill(state.palette.box_plot.gamma_multiply(0.3))
        .stroke(Stroke::new(1.5, state.palette.box_plot));

    Plot::new("box_plot")
        .y_axis_label("Concentration (mg/L)")
        .show_axes([false, true])
        .height(height)
        .show(ui, |plot_ui| {
            plot_ui.box_plot(BoxPlot::new(vec![body]).name("Concentration"));
        });
}

/// Frequency of concentration values in equal-width bins; the bin count
/// comes from the side-panel slider.
fn concentration_histogram(ui: &mut Ui, state: &AppState, dataset: &RiverDataset, height: f32) {
    ui.strong(format!("Histogram  ({} bins)", state.bin_count));

    let Some(hist) = Histogram::new(&dataset.concentrations(), state.bin_count) else {
        return;
    };

    let bars: Vec<Bar> = hist
        .bars()
        .map(|(center, count)| Bar::new(center, count as f64).width(hist.bin_width * 0.95))
        .collect();
    let chart = BarChart::new(bars)
        .name("Samples per bin")
        .color(state.palette.histogram);

    Plot::new("histogram")
        .x_axis_label("Concentration (mg/L)")
        .y_axis_label("Samples")
        .height(height)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}
