//! Static Chart Renderer
//! Draws one scatter chart per metric with the fitted regression line
//! overlaid, and saves it as a square PNG using plotters.

use crate::data::MetricSamples;
use crate::metrics::Metric;
use crate::stats::LinearFit;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::path::{Path, PathBuf};
use thiserror::Error;

// 10x10 inch canvas at 100 DPI.
const CANVAS_SIZE: (u32, u32) = (1000, 1000);
const BACKGROUND: RGBColor = RGBColor(230, 230, 230);
const LINE_COLOR: RGBColor = RED;
const POINT_COLOR: RGBColor = RGBColor(20, 60, 150);

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("output directory {0} does not exist")]
    MissingOutputDir(PathBuf),
    #[error("failed to draw chart {path}: {message}")]
    Draw { path: PathBuf, message: String },
}

/// Path of the chart image for one metric:
/// `<out_dir>/<input file name including extension>-<metric>.png`.
pub fn chart_path(out_dir: &Path, csv_path: &Path, metric: &Metric) -> PathBuf {
    let file_name = csv_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    out_dir.join(format!("{}-{}.png", file_name, metric.name))
}

/// Render the scatter chart for one metric and save it as a PNG.
///
/// The output directory must already exist; this function never creates it.
pub fn render_scatter(
    samples: &MetricSamples,
    fit: &LinearFit,
    metric: &Metric,
    title_year: &str,
    out_dir: &Path,
    csv_path: &Path,
) -> Result<PathBuf, ChartError> {
    if !out_dir.is_dir() {
        return Err(ChartError::MissingOutputDir(out_dir.to_path_buf()));
    }

    let path = chart_path(out_dir, csv_path, metric);
    let title = format!(
        "Correlation Between {} and Cy Young Votes - {}",
        metric.name, title_year
    );

    let (x_min, x_max) = padded_range(&samples.votes);
    let (y_min, y_max) = padded_range(&samples.values);

    let draw = |path: &Path| -> Result<(), Box<dyn std::error::Error>> {
        let root = BitMapBackend::new(path, CANVAS_SIZE).into_drawing_area();
        root.fill(&BACKGROUND)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&title, ("sans-serif", 36))
            .margin(20)
            .x_label_area_size(70)
            .y_label_area_size(80)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

        chart
            .configure_mesh()
            .x_desc("Voting Points")
            .y_desc(metric.name)
            .axis_desc_style(("sans-serif", 28))
            .label_style(("sans-serif", 18))
            .draw()?;

        chart.draw_series(
            samples
                .votes
                .iter()
                .zip(&samples.values)
                .map(|(&x, &y)| Circle::new((x, y), 4, POINT_COLOR.filled())),
        )?;

        chart.draw_series(DashedLineSeries::new(
            [(x_min, fit.predict(x_min)), (x_max, fit.predict(x_max))],
            20,
            10,
            LINE_COLOR.stroke_width(2),
        ))?;

        root.present()?;
        Ok(())
    };

    draw(&path).map_err(|e| ChartError::Draw {
        path: path.clone(),
        message: e.to_string(),
    })?;

    Ok(path)
}

/// Pad each bound outward by 10% of its magnitude, widening a degenerate
/// zero-width range so the axis stays drawable.
fn padded_range(values: &[f64]) -> (f64, f64) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let mut lo = min - 0.1 * min.abs();
    let mut hi = max + 0.1 * max.abs();
    if lo == hi {
        lo -= 1.0;
        hi += 1.0;
    }
    (lo, hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::METRICS;

    fn metric() -> Metric {
        Metric {
            column: 6,
            name: "WAR",
            summary_key: "WAR",
        }
    }

    #[test]
    fn chart_path_keeps_csv_extension() {
        let path = chart_path(
            Path::new("graphs/cy-young"),
            Path::new("data/cy-young-stats-2018.csv"),
            &metric(),
        );
        assert_eq!(
            path,
            Path::new("graphs/cy-young/cy-young-stats-2018.csv-WAR.png")
        );
    }

    #[test]
    fn padded_range_expands_both_bounds() {
        let (lo, hi) = padded_range(&[10.0, 100.0]);
        assert!((lo - 9.0).abs() < 1e-12);
        assert!((hi - 110.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_range_is_widened() {
        let (lo, hi) = padded_range(&[0.0, 0.0]);
        assert!(lo < hi);
    }

    #[test]
    fn renders_one_chart_per_metric() {
        let dir = tempfile::tempdir().unwrap();
        let csv_path = Path::new("cy-young-stats-2018.csv");
        let samples = MetricSamples {
            votes: vec![1.0, 5.0, 9.0],
            values: vec![2.0, 3.5, 7.0],
        };
        let fit = crate::stats::fit_line(&samples.votes, &samples.values).unwrap();

        for metric in &METRICS {
            let path =
                render_scatter(&samples, &fit, metric, "2018", dir.path(), csv_path).unwrap();
            assert!(path.is_file(), "chart not written: {}", path.display());
        }

        let written = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(written, METRICS.len());
    }

    #[test]
    fn missing_output_dir_is_rejected() {
        let samples = MetricSamples {
            votes: vec![1.0, 2.0],
            values: vec![3.0, 4.0],
        };
        let fit = crate::stats::fit_line(&samples.votes, &samples.values).unwrap();
        let err = render_scatter(
            &samples,
            &fit,
            &metric(),
            "2018",
            Path::new("/nonexistent/graphs"),
            Path::new("cy-young-stats-2018.csv"),
        )
        .unwrap_err();
        assert!(matches!(err, ChartError::MissingOutputDir(_)));
    }
}
