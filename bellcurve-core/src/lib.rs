//! BellCurve Core — the statistical visualization engine.
//!
//! Everything here is pure computation, driven one direction per redraw:
//! params → sample generation → histogram binning + density estimation →
//! scale mapping. The UI layer owns the parameters and passes a value
//! snapshot into every call; the engine never mutates them.
//!
//! - Domain types (distribution parameters, buckets, density points)
//! - Deterministic seeded sampling (Box-Muller)
//! - Equal-width histogram binning with silent out-of-range drop
//! - Analytic normal density over the realized sample set
//! - Bidirectional linear scales (the drag path runs through `invert`)
//! - Per-redraw frame snapshot tying it all together

pub mod density;
pub mod frame;
pub mod histogram;
pub mod params;
pub mod rng;
pub mod sampler;
pub mod scale;

pub use density::{density_curve, normal_pdf, variance_proxy, DensityPoint};
pub use frame::{ChartFrame, SampleSummary, Scales};
pub use histogram::{Bucket, Histogram};
pub use params::{ChartConfig, DistributionParams, ParamError};
pub use rng::SeedPlan;
pub use sampler::generate_samples;
pub use scale::LinearScale;
