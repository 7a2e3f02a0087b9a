/// Equal-width frequency bins backing the distribution chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Left edge of the first bin.
    pub start: f64,
    /// Width shared by every bin, always positive.
    pub bin_width: f64,
    /// Occurrences per bin.
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bin `values` into `bin_count` equal-width bins spanning `[min, max]`.
    ///
    /// The maximum value counts into the last bin rather than opening a new
    /// one. When all values are equal a single bin of nominal width 1 holds
    /// everything. Returns `None` for empty input or a zero bin count.
    pub fn new(values: &[f64], bin_count: usize) -> Option<Self> {
        if values.is_empty() || bin_count == 0 {
            return None;
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let span = max - min;
        let (bin_count, bin_width) = if span == 0.0 {
            (1, 1.0)
        } else {
            (bin_count, span / bin_count as f64)
        };

        let mut counts = vec![0usize; bin_count];
        for &v in values {
            let idx = (((v - min) / bin_width) as usize).min(bin_count - 1);
            counts[idx] += 1;
        }

        Some(Histogram {
            start: min,
            bin_width,
            counts,
        })
    }

    /// `(center, count)` per bin, ready for bar rendering.
    pub fn bars(&self) -> impl Iterator<Item = (f64, usize)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(move |(i, &c)| (self.start + (i as f64 + 0.5) * self.bin_width, c))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
