use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Series colours
// ---------------------------------------------------------------------------

/// Fixed colour per chart series, shared across all four charts so the same
/// series reads the same everywhere.
#[derive(Debug, Clone, Copy)]
pub struct ChartPalette {
    pub fit_line: Color32,
    pub histogram: Color32,
    pub box_plot: Color32,
    pub observed: Color32,
    pub residuals: Color32,
}

impl ChartPalette {
    /// Five series share one evenly spaced hue wheel. Index 0 is the red end
    /// of the wheel, which stays with the fitted line.
    pub fn new() -> Self {
        let wheel = generate_palette(5);
        ChartPalette {
            fit_line: wheel[0],
            histogram: wheel[1],
            box_plot: wheel[2],
            observed: wheel[3],
            residuals: wheel[4],
        }
    }
}

impl Default for ChartPalette {
    fn default() -> Self {
        ChartPalette::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_hues_are_distinct() {
        let colors = generate_palette(5);
        assert_eq!(colors.len(), 5);
        for (i, a) in colors.iter().enumerate() {
            for b in colors.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn empty_palette_for_zero_series() {
        assert!(generate_palette(0).is_empty());
    }
}
