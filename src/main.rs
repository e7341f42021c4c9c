//! Cy Young Charts - season pitching stats vs award votes
//!
//! Reads one season CSV, fits an OLS line between voting points and each
//! tracked pitching metric, renders a scatter chart per metric, and prints a
//! one-row R² summary CSV to stdout.

mod charts;
mod data;
mod metrics;
mod report;
mod stats;

use anyhow::{Context, Result};
use clap::Parser;
use metrics::{Metric, METRICS, VOTES_COLUMN};
use polars::prelude::DataFrame;
use rayon::prelude::*;
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "cy-young-charts", about = "Correlate pitching stats with Cy Young votes")]
struct Cli {
    /// Path to the season stats CSV (named <name>-<name>-<year>.csv)
    csv_path: PathBuf,

    /// Directory the chart images are written to; must already exist
    #[arg(long, default_value = "./graphs/cy-young")]
    out_dir: PathBuf,

    /// Year shown in chart titles; defaults to the year in the file name
    #[arg(long)]
    title_year: Option<String>,
}

/// Samples and fit for one metric, kept together so the renderer and the
/// reporter work from the same numbers.
struct MetricAnalysis {
    metric: &'static Metric,
    samples: data::MetricSamples,
    fit: stats::LinearFit,
}

/// Extract and fit every tracked metric. The metrics are independent, so
/// they run in parallel; output order follows the metric table.
fn analyze_metrics(df: &DataFrame) -> Result<Vec<MetricAnalysis>> {
    METRICS
        .par_iter()
        .map(|metric| {
            let samples = data::extract_samples(df, VOTES_COLUMN, metric.column)
                .with_context(|| format!("extracting {}", metric.name))?;
            let fit = stats::fit_line(&samples.votes, &samples.values)
                .with_context(|| format!("fitting {}", metric.name))?;
            Ok(MetricAnalysis {
                metric,
                samples,
                fit,
            })
        })
        .collect()
}

fn run(cli: &Cli) -> Result<()> {
    let year = report::year_from_path(&cli.csv_path)?;
    let title_year = cli.title_year.clone().unwrap_or_else(|| year.clone());

    let df = data::load_stats_csv(&cli.csv_path)?;
    info!(rows = df.height(), path = %cli.csv_path.display(), "loaded season CSV");

    let analyses = analyze_metrics(&df)?;

    analyses.par_iter().try_for_each(|analysis| {
        let path = charts::render_scatter(
            &analysis.samples,
            &analysis.fit,
            analysis.metric,
            &title_year,
            &cli.out_dir,
            &cli.csv_path,
        )?;
        info!(metric = analysis.metric.name, path = %path.display(), "chart written");
        Ok::<(), charts::ChartError>(())
    })?;

    let r_squared_by_key: HashMap<&'static str, f64> = analyses
        .iter()
        .map(|a| (a.metric.summary_key, a.fit.r_squared))
        .collect();

    report::write_summary(io::stdout().lock(), &year, &r_squared_by_key)?;
    Ok(())
}

fn main() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        error!("{err:#}");
        std::process::exit(1);
    }
}
