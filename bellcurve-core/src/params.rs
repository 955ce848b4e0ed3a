//! Distribution parameters — the single source of truth for a redraw.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from parameter validation.
///
/// Both variants are recoverable: the controls layer reports them and keeps
/// the previous value. The engine itself never fails on them — a degenerate
/// standard deviation degrades to a flat sample set instead (see
/// [`crate::sampler::generate_samples`]).
#[derive(Debug, Error, PartialEq)]
pub enum ParamError {
    #[error("invalid domain range: min {min} must be below max {max}")]
    InvalidDomainRange { min: f64, max: f64 },

    #[error("standard deviation {0} must be > 0 for a well-defined density")]
    DegenerateStdDev(f64),
}

/// Parameters of the normal distribution being explored, plus the domain
/// range the chart covers.
///
/// Owned by the UI layer and passed by value into the engine on every
/// redraw. Only the controls layer and the drag handlers update it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributionParams {
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl Default for DistributionParams {
    fn default() -> Self {
        Self {
            mean: 20.0,
            std_dev: 5.0,
            min: 0.0,
            max: 100.0,
        }
    }
}

impl DistributionParams {
    /// Check the invariants: `min < max` and `std_dev > 0`.
    ///
    /// Range violations are hard errors (the chart cannot lay out buckets);
    /// a non-positive std deviation is reported but the engine can still
    /// render a degenerate chart from it.
    pub fn validate(&self) -> Result<(), ParamError> {
        if !(self.min < self.max) {
            return Err(ParamError::InvalidDomainRange {
                min: self.min,
                max: self.max,
            });
        }
        if !(self.std_dev > 0.0) {
            return Err(ParamError::DegenerateStdDev(self.std_dev));
        }
        Ok(())
    }

    /// True when every field is finite and the domain range is usable.
    pub fn has_valid_range(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min < self.max
    }
}

/// Fixed engine tunables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Samples drawn per generation.
    pub data_points: usize,
    /// Equal-width buckets across `[min, max]`.
    pub buckets: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            data_points: 1000,
            buckets: 25,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(DistributionParams::default().validate().is_ok());
    }

    #[test]
    fn inverted_range_rejected() {
        let params = DistributionParams {
            min: 50.0,
            max: 10.0,
            ..Default::default()
        };
        assert_eq!(
            params.validate(),
            Err(ParamError::InvalidDomainRange {
                min: 50.0,
                max: 10.0
            })
        );
    }

    #[test]
    fn equal_bounds_rejected() {
        let params = DistributionParams {
            min: 5.0,
            max: 5.0,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ParamError::InvalidDomainRange { .. })
        ));
    }

    #[test]
    fn zero_std_flagged_but_range_still_valid() {
        let params = DistributionParams {
            std_dev: 0.0,
            ..Default::default()
        };
        assert_eq!(params.validate(), Err(ParamError::DegenerateStdDev(0.0)));
        assert!(params.has_valid_range());
    }

    #[test]
    fn params_roundtrip_json() {
        let params = DistributionParams::default();
        let json = serde_json::to_string(&params).unwrap();
        let back: DistributionParams = serde_json::from_str(&json).unwrap();
        assert_eq!(params, back);
    }
}
