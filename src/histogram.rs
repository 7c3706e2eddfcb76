//! Elapsed-time distribution
//!
//! A fixed-bucket histogram over elapsed seconds. The report only relies on
//! [`Histogram::record`] and [`Histogram::render`].

use std::fmt;

/// Upper bounds (exclusive, in seconds) of every bucket but the last, which
/// is unbounded.
const BUCKET_BOUNDS: [f64; 13] = [
    0.001, 0.005, 0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0,
];

const BAR_WIDTH: u64 = 40;

/// Histogram of elapsed samples in seconds
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    counts: [u64; BUCKET_BOUNDS.len() + 1],
    total: u64,
    sum: f64,
    min: f64,
    max: f64,
}

impl Default for Histogram {
    fn default() -> Self {
        Self::new()
    }
}

impl Histogram {
    /// Creates an empty histogram.
    pub fn new() -> Self {
        Histogram {
            counts: [0; BUCKET_BOUNDS.len() + 1],
            total: 0,
            sum: 0.0,
            min: f64::INFINITY,
            max: 0.0,
        }
    }

    /// Records one sample. Negative samples count as zero; NaN is ignored.
    pub fn record(&mut self, value: f64) {
        if value.is_nan() {
            return;
        }
        let value = value.max(0.0);

        let bucket = BUCKET_BOUNDS
            .iter()
            .position(|&upper| value < upper)
            .unwrap_or(BUCKET_BOUNDS.len());

        self.counts[bucket] += 1;
        self.total += 1;
        self.sum += value;
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// Number of recorded samples.
    pub fn count(&self) -> u64 {
        self.total
    }

    /// Renders the distribution as text, one line per bucket between the
    /// first and last non-empty buckets.
    pub fn render(&self) -> String {
        if self.total == 0 {
            return "no samples".to_string();
        }

        let first = self.counts.iter().position(|&c| c > 0).unwrap_or(0);
        let last = self.counts.iter().rposition(|&c| c > 0).unwrap_or(first);
        let peak = self.counts.iter().copied().max().unwrap_or(1).max(1);

        let mut lines = vec![format!(
            "count: {}, min: {:.3}, max: {:.3}, mean: {:.3}",
            self.total,
            self.min,
            self.max,
            self.sum / self.total as f64
        )];

        for bucket in first..=last {
            let lower = if bucket == 0 {
                0.0
            } else {
                BUCKET_BOUNDS[bucket - 1]
            };
            let upper = match BUCKET_BOUNDS.get(bucket) {
                Some(upper) => format!("{:>7.3}", upper),
                None => format!("{:>7}", "+inf"),
            };
            let count = self.counts[bucket];
            let percent = count as f64 * 100.0 / self.total as f64;
            let bar = ".".repeat((count * BAR_WIDTH / peak) as usize);

            let line = format!(
                "[{:>7.3} {}] {:>5} {:>6.2}% {}",
                lower, upper, count, percent, bar
            );
            lines.push(line.trim_end().to_string());
        }

        lines.join("\n")
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_histogram() {
        let hist = Histogram::new();
        assert_eq!(hist.count(), 0);
        assert_eq!(hist.render(), "no samples");
    }

    #[test]
    fn test_record_buckets() {
        let mut hist = Histogram::new();
        hist.record(0.02);
        hist.record(0.03);
        hist.record(3.0);

        assert_eq!(hist.count(), 3);

        let rendered = hist.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "count: 3, min: 0.020, max: 3.000, mean: 1.017");
        // From the [0.01, 0.05) bucket through the [2.5, 5) bucket
        assert_eq!(lines.len(), 1 + 7);
        assert!(lines[1].starts_with("[  0.010   0.050]     2  66.67% "));
        assert!(lines[1].ends_with(&".".repeat(40)));
        assert!(lines[7].starts_with("[  2.500   5.000]     1  33.33% "));
        assert!(lines[7].ends_with(&".".repeat(20)));
    }

    #[test]
    fn test_overflow_bucket() {
        let mut hist = Histogram::new();
        hist.record(120.0);

        let rendered = hist.render();
        assert!(rendered.contains("[ 60.000    +inf]     1 100.00% "));
    }

    #[test]
    fn test_negative_and_nan_samples() {
        let mut hist = Histogram::new();
        hist.record(-1.0);
        hist.record(f64::NAN);

        assert_eq!(hist.count(), 1);
        assert!(hist.render().contains("[  0.000   0.001]     1 100.00% "));
    }

    #[test]
    fn test_display_matches_render() {
        let mut hist = Histogram::new();
        hist.record(0.5);
        assert_eq!(hist.to_string(), hist.render());
    }
}
