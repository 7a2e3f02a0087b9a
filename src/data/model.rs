use std::fmt;

// ---------------------------------------------------------------------------
// Sample – one measurement row
// ---------------------------------------------------------------------------

/// A single measurement: pollutant concentration taken at a point downstream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Distance downstream from the discharge point (km).
    pub distance_km: f64,
    /// Pollutant concentration at that point (mg/L).
    pub concentration_mg_l: f64,
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2} km → {:.2} mg/L",
            self.distance_km, self.concentration_mg_l
        )
    }
}

// ---------------------------------------------------------------------------
// RiverDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset, in file order. Loaded once, read-only afterwards.
#[derive(Debug, Clone)]
pub struct RiverDataset {
    /// All measurements (rows).
    pub samples: Vec<Sample>,
    /// File name the data came from, for display in the UI.
    pub source_name: String,
}

impl RiverDataset {
    pub fn new(samples: Vec<Sample>, source_name: impl Into<String>) -> Self {
        RiverDataset {
            samples,
            source_name: source_name.into(),
        }
    }

    /// Number of measurements.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The independent column (distance, km) in row order.
    pub fn distances(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.distance_km).collect()
    }

    /// The dependent column (concentration, mg/L) in row order.
    pub fn concentrations(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.concentration_mg_l).collect()
    }

    /// Range of the distance column, `None` for an empty dataset.
    pub fn distance_range(&self) -> Option<(f64, f64)> {
        let mut it = self.samples.iter().map(|s| s.distance_km);
        let first = it.next()?;
        let (min, max) = it.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(rows: &[(f64, f64)]) -> RiverDataset {
        let samples = rows
            .iter()
            .map(|&(d, c)| Sample {
                distance_km: d,
                concentration_mg_l: c,
            })
            .collect();
        RiverDataset::new(samples, "test.csv")
    }

    #[test]
    fn column_extraction_preserves_row_order() {
        let ds = dataset(&[(0.0, 12.0), (2.5, 9.0), (1.0, 10.5)]);
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.distances(), vec![0.0, 2.5, 1.0]);
        assert_eq!(ds.concentrations(), vec![12.0, 9.0, 10.5]);
    }

    #[test]
    fn distance_range_spans_unsorted_input() {
        let ds = dataset(&[(4.0, 1.0), (0.5, 2.0), (9.0, 3.0)]);
        assert_eq!(ds.distance_range(), Some((0.5, 9.0)));
        assert_eq!(dataset(&[]).distance_range(), None);
    }
}
