//! Linear scale mapping — bidirectional domain ↔ pixel conversion.

use serde::{Deserialize, Serialize};

/// Linear interpolation from a data domain onto a pixel range, with the
/// inverse mapping used by drag handling.
///
/// Rebuilt from the live extents on every redraw; never persisted. A
/// degenerate domain (zero span, or non-finite endpoints) collapses to a
/// constant mapping onto the range start instead of dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    fn degenerate(&self) -> bool {
        let span = self.domain.1 - self.domain.0;
        !(span != 0.0 && span.is_finite() && self.domain.0.is_finite())
    }

    /// Map a domain value to a pixel coordinate.
    pub fn map(&self, x: f64) -> f64 {
        if self.degenerate() {
            return self.range.0;
        }
        let t = (x - self.domain.0) / (self.domain.1 - self.domain.0);
        self.range.0 + t * (self.range.1 - self.range.0)
    }

    /// Map a pixel coordinate back to a domain value.
    pub fn invert(&self, px: f64) -> f64 {
        if self.degenerate() {
            return self.domain.0;
        }
        let span = self.range.1 - self.range.0;
        if span == 0.0 {
            return self.domain.0;
        }
        let t = (px - self.range.0) / span;
        self.domain.0 + t * (self.domain.1 - self.domain.0)
    }
}
