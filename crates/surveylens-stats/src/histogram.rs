use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Widest value span, in unit bins, an integer histogram covers.
pub const MAX_UNIT_BINS: usize = 1000;

/// A histogram of a rating distribution with one bin per integer value.
///
/// Bins are contiguous and cover every integer from the floor of the
/// smallest value to the floor of the largest, so empty ratings between the
/// observed extremes still show up as zero-count bins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
}

/// A single bin in a histogram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    /// The range of values covered by this bin (inclusive start, exclusive end).
    pub range: Range<f64>,
    /// The number of values that fall within this bin's range.
    pub count: u64,
}

impl Histogram {
    /// Creates a unit-width histogram from unsorted values.
    ///
    /// Non-finite values are ignored. The histogram is empty when no finite
    /// value remains or when the values span more than [`MAX_UNIT_BINS`] bins.
    ///
    /// # Examples
    ///
    /// ```
    /// # use surveylens_stats::histogram::Histogram;
    /// let histogram = Histogram::unit_bins([7.0, 9.0, 7.5, 9.0]);
    /// let counts = histogram.bins.iter().map(|b| b.count).collect::<Vec<_>>();
    /// assert_eq!(counts, [2, 0, 2]);
    /// assert_eq!(histogram.bins[0].range, 7.0..8.0);
    /// ```
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    #[must_use]
    pub fn unit_bins<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let values = values
            .into_iter()
            .filter(|v| v.is_finite())
            .collect::<Vec<_>>();
        let Some(min) = values.iter().copied().reduce(f64::min) else {
            return Self { bins: vec![] };
        };
        let max = values.iter().copied().fold(min, f64::max);

        let first = min.floor();
        let span = max.floor() - first;
        if span >= MAX_UNIT_BINS as f64 {
            return Self { bins: vec![] };
        }
        let num_bins = span as usize + 1;

        let mut bins = (0..num_bins)
            .map(|idx| {
                let start = first + idx as f64;
                HistogramBin {
                    range: start..start + 1.0,
                    count: 0,
                }
            })
            .collect::<Vec<_>>();
        for val in values {
            let idx = (val.floor() - first) as usize;
            bins[idx].count += 1;
        }

        Self { bins }
    }

    /// Total number of values counted.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.bins.iter().map(|b| b.count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(Histogram::unit_bins([]).bins.is_empty());
        assert!(Histogram::unit_bins([f64::NAN]).bins.is_empty());
    }

    #[test]
    fn test_single_value() {
        let histogram = Histogram::unit_bins([5.0]);
        assert_eq!(histogram.bins.len(), 1);
        assert_eq!(histogram.bins[0].range, 5.0..6.0);
        assert_eq!(histogram.total(), 1);
    }

    #[test]
    fn test_every_value_is_in_its_bin() {
        let values = [1.0, 10.0, 4.5, 4.0, 3.9, 10.0];
        let histogram = Histogram::unit_bins(values);
        assert_eq!(histogram.bins.len(), 10);
        assert_eq!(histogram.total(), values.len() as u64);
        for val in values {
            assert!(histogram.bins.iter().any(|b| b.range.contains(&val) && b.count > 0));
        }
        assert_eq!(histogram.bins[3].count, 2);
        assert_eq!(histogram.bins[9].count, 2);
    }

    #[test]
    fn test_span_limit() {
        assert!(Histogram::unit_bins([0.0, 1e9]).bins.is_empty());
    }
}
