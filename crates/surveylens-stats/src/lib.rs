//! Rating statistics for survey reports.
//!
//! - [`descriptive`]: count, mean, median, spread of a rating set
//! - [`histogram`]: unit-width rating histograms used as chart data
//!
//! # Examples
//!
//! ```
//! use surveylens_stats::{descriptive::DescriptiveStats, histogram::Histogram};
//!
//! let ratings = [8.0, 6.0, 7.0];
//! let stats = DescriptiveStats::new(ratings).unwrap();
//! assert_eq!(stats.mean, 7.0);
//!
//! let histogram = Histogram::unit_bins(ratings);
//! assert_eq!(histogram.bins.len(), 3);
//! ```

pub mod descriptive;
pub mod histogram;
