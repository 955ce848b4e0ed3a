//! Histogram binning — equal-width buckets over the chart domain.

use serde::{Deserialize, Serialize};

/// One bucket: half-open interval `[lower, upper)` plus its occupancy.
///
/// The last bucket of a histogram is closed on both ends so `max` itself
/// is counted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

impl Bucket {
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Ordered buckets partitioning `[min, max]` contiguously, ascending by
/// lower bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub buckets: Vec<Bucket>,
}

impl Histogram {
    /// Bin `samples` into `bucket_count` equal-width buckets over
    /// `[min, max]`.
    ///
    /// Samples outside the range are silently dropped — not counted and
    /// not an error — so `total_count() <= samples.len()` always holds.
    /// An unusable range or a zero bucket count yields an empty histogram.
    pub fn bin(samples: &[f64], min: f64, max: f64, bucket_count: usize) -> Self {
        if bucket_count == 0 || !min.is_finite() || !max.is_finite() || min >= max {
            return Self { buckets: Vec::new() };
        }

        let width = (max - min) / bucket_count as f64;
        let mut buckets: Vec<Bucket> = (0..bucket_count)
            .map(|i| Bucket {
                lower: min + i as f64 * width,
                upper: min + (i + 1) as f64 * width,
                count: 0,
            })
            .collect();

        for &s in samples {
            if !s.is_finite() || s < min || s > max {
                continue;
            }
            // max itself lands in the last (doubly closed) bucket.
            let idx = (((s - min) / width) as usize).min(bucket_count - 1);
            buckets[idx].count += 1;
        }

        Self { buckets }
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total samples counted across all buckets.
    pub fn total_count(&self) -> usize {
        self.buckets.iter().map(|b| b.count).sum()
    }

    /// Largest single-bucket occupancy (0 for an empty histogram).
    pub fn max_count(&self) -> usize {
        self.buckets.iter().map(|b| b.count).max().unwrap_or(0)
    }
}
