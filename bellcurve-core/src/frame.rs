//! Chart frame — the per-redraw snapshot of the whole pipeline.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::density::{density_curve, DensityPoint};
use crate::histogram::Histogram;
use crate::params::{ChartConfig, DistributionParams};
use crate::sampler::generate_samples;
use crate::scale::LinearScale;

/// Summary statistics of the realized sample set, shown alongside the
/// theoretical parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleSummary {
    pub observed_mean: f64,
    pub observed_std: f64,
    /// Samples outside `[min, max]` that the histogram dropped.
    pub dropped: usize,
}

/// One consistent snapshot: the params it was computed from, the samples,
/// and everything derived from them.
///
/// Computed synchronously on every parameter change or drag tick; samples
/// are regenerated in full, never cached across redraws.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartFrame {
    pub params: DistributionParams,
    pub samples: Vec<f64>,
    pub histogram: Histogram,
    pub curve: Vec<DensityPoint>,
    pub summary: SampleSummary,
    /// The variance proxy came out non-positive or non-finite; the curve
    /// carries non-finite densities and renders as an empty path.
    pub degenerate_variance: bool,
}

impl ChartFrame {
    /// Run the full pipeline: generate → bin + estimate.
    ///
    /// Always returns a renderable frame. Invalid inputs degrade (empty
    /// histogram, flat samples, non-finite curve) rather than fail.
    pub fn compute<R: Rng>(
        params: DistributionParams,
        config: &ChartConfig,
        rng: &mut R,
    ) -> Self {
        let samples = generate_samples(&params, config.data_points, rng);
        let histogram = Histogram::bin(&samples, params.min, params.max, config.buckets);
        let curve = density_curve(&samples, params.mean);

        let variance = crate::density::variance_proxy(&samples);
        let degenerate_variance = !(variance > 0.0) || !variance.is_finite();

        let summary = summarize(&samples, histogram.total_count());

        Self {
            params,
            samples,
            histogram,
            curve,
            summary,
            degenerate_variance,
        }
    }

    /// Extent of the curve's values, finite points only.
    pub fn curve_value_extent(&self) -> Option<(f64, f64)> {
        extent(self.curve.iter().map(|p| p.value))
    }

    /// Extent of the curve's densities, finite points only.
    pub fn curve_density_extent(&self) -> Option<(f64, f64)> {
        extent(self.curve.iter().map(|p| p.density))
    }
}

fn summarize(samples: &[f64], counted: usize) -> SampleSummary {
    if samples.is_empty() {
        return SampleSummary {
            observed_mean: f64::NAN,
            observed_std: f64::NAN,
            dropped: 0,
        };
    }
    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    let var = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
    SampleSummary {
        observed_mean: mean,
        observed_std: var.sqrt(),
        dropped: samples.len() - counted,
    }
}

fn extent(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let mut bounds: Option<(f64, f64)> = None;
    for v in values.filter(|v| v.is_finite()) {
        bounds = Some(match bounds {
            None => (v, v),
            Some((lo, hi)) => (lo.min(v), hi.max(v)),
        });
    }
    bounds
}

/// The four linear scales of one redraw, built from the frame's extents and
/// the chart's pixel dimensions.
///
/// y ranges are inverted (`height → 0`) so larger values draw higher.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scales {
    pub x_histogram: LinearScale,
    pub y_histogram: LinearScale,
    pub x_density: LinearScale,
    pub y_density: LinearScale,
}

impl Scales {
    pub fn layout(frame: &ChartFrame, width: f64, height: f64) -> Self {
        let (min, max) = (frame.params.min, frame.params.max);
        let (vx0, vx1) = frame.curve_value_extent().unwrap_or((min, min));
        let (dy0, dy1) = frame.curve_density_extent().unwrap_or((0.0, 0.0));

        Self {
            x_histogram: LinearScale::new((min, max), (0.0, width)),
            y_histogram: LinearScale::new(
                (0.0, frame.histogram.max_count() as f64),
                (height, 0.0),
            ),
            x_density: LinearScale::new((vx0, vx1), (0.0, width)),
            y_density: LinearScale::new((dy0, dy1), (height, 0.0)),
        }
    }
}
