//! BellCurve CLI — render one chart frame as text.
//!
//! Commands:
//! - `render` — draw samples with the given parameters and print the
//!   histogram as a table with bars, plus a sample summary

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use bellcurve_core::{ChartConfig, ChartFrame, DistributionParams, ParamError, SeedPlan};

#[derive(Parser)]
#[command(
    name = "bellcurve",
    about = "BellCurve CLI — normal-distribution histogram renderer"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate samples and print the binned histogram.
    Render {
        /// Distribution mean.
        #[arg(long, default_value_t = 20.0)]
        mean: f64,

        /// Distribution standard deviation.
        #[arg(long, default_value_t = 5.0)]
        std: f64,

        /// Lower bound of the chart domain.
        #[arg(long, default_value_t = 0.0)]
        min: f64,

        /// Upper bound of the chart domain.
        #[arg(long, default_value_t = 100.0)]
        max: f64,

        /// Samples to draw.
        #[arg(long, default_value_t = 1000)]
        samples: usize,

        /// Equal-width buckets across [min, max].
        #[arg(long, default_value_t = 25)]
        buckets: usize,

        /// Master seed (same seed reproduces the same chart).
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            mean,
            std,
            min,
            max,
            samples,
            buckets,
            seed,
        } => render(
            DistributionParams {
                mean,
                std_dev: std,
                min,
                max,
            },
            ChartConfig {
                data_points: samples,
                buckets,
            },
            seed,
        ),
    }
}

fn render(params: DistributionParams, config: ChartConfig, seed: Option<u64>) -> Result<()> {
    match params.validate() {
        Err(err @ ParamError::InvalidDomainRange { .. }) => bail!(err),
        // Recoverable: the engine degrades to a flat sample set.
        Err(err @ ParamError::DegenerateStdDev(_)) => eprintln!("warning: {err}"),
        Ok(()) => {}
    }

    let plan = seed.map(SeedPlan::new).unwrap_or_default();
    let frame = ChartFrame::compute(params, &config, &mut plan.rng_for(0));

    if frame.degenerate_variance {
        eprintln!("warning: degenerate variance, density curve is not finite");
    }

    let width = bar_width(&frame);
    println!("{:>10}  {:>10}  {:>6}  bar", "lower", "upper", "count");
    for bucket in &frame.histogram.buckets {
        let bar = "#".repeat(scaled(bucket.count, frame.histogram.max_count(), width));
        println!(
            "{:>10.2}  {:>10.2}  {:>6}  {bar}",
            bucket.lower, bucket.upper, bucket.count
        );
    }

    println!();
    println!(
        "samples {} | counted {} | dropped {}",
        frame.samples.len(),
        frame.histogram.total_count(),
        frame.summary.dropped
    );
    println!(
        "observed mean {:.3} | observed std {:.3}",
        frame.summary.observed_mean, frame.summary.observed_std
    );

    Ok(())
}

const MAX_BAR: usize = 50;

fn bar_width(frame: &ChartFrame) -> usize {
    if frame.histogram.max_count() == 0 {
        0
    } else {
        MAX_BAR
    }
}

fn scaled(count: usize, max_count: usize, width: usize) -> usize {
    if max_count == 0 {
        return 0;
    }
    (count * width + max_count - 1) / max_count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_bar_monotone_and_bounded() {
        assert_eq!(scaled(0, 100, 50), 0);
        assert_eq!(scaled(100, 100, 50), 50);
        assert!(scaled(1, 100, 50) >= 1);
        assert!(scaled(50, 100, 50) <= scaled(100, 100, 50));
    }

    #[test]
    fn scaled_handles_empty_histogram() {
        assert_eq!(scaled(0, 0, 50), 0);
    }
}
