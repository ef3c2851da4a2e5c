//! PNG rendering of sampled trajectories.

use std::fmt::Display;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use plotters::prelude::*;
use thiserror::Error;

use crate::core::window::trajectory_window;
use crate::report::Run;

pub const PLOT_TITLE: &str = "Projectile Motion";
pub const X_AXIS_LABEL: &str = "Horizontal Distance (m)";
pub const Y_AXIS_LABEL: &str = "Vertical Distance (m)";

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("failed to create plot directory: {0}")]
    Io(#[from] std::io::Error),
    #[error("nothing to plot")]
    Empty,
    #[error("cannot plot non-finite values (axis window {x_max} x {y_max})")]
    NonFinite { x_max: f64, y_max: f64 },
    #[error("failed to render plot: {0}")]
    Render(String),
}

fn render_error<E: Display>(err: E) -> PlotError {
    PlotError::Render(err.to_string())
}

/// `<dir>/trajectory_<YYYYmmdd_HHMMSS>.png`
pub fn timestamped_path<Tz>(dir: &Path, at: &DateTime<Tz>) -> PathBuf
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    dir.join(format!("trajectory_{}.png", at.format("%Y%m%d_%H%M%S")))
}

fn series_color(idx: usize, total: usize) -> RGBColor {
    if total <= 1 {
        return RGBColor(31, 119, 180);
    }
    let (r, g, b) = Palette99::pick(idx).rgb();
    RGBColor(r, g, b)
}

/// Draws one line per run on a gridded chart and writes it to `path` as PNG.
/// Runs are labelled by body in a legend when there is more than one.
pub fn render_png(path: &Path, runs: &[Run], size: (u32, u32)) -> Result<(), PlotError> {
    if runs.is_empty() {
        return Err(PlotError::Empty);
    }
    let window = trajectory_window(runs.iter().map(|run| &run.result), None);
    let samples_finite = runs
        .iter()
        .flat_map(|run| &run.result.samples)
        .all(|s| s.x.is_finite() && s.y.is_finite());
    if !(samples_finite && window.x_max.is_finite() && window.y_max.is_finite()) {
        return Err(PlotError::NonFinite {
            x_max: window.x_max,
            y_max: window.y_max,
        });
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(PLOT_TITLE, ("sans-serif", 26).into_font())
        .x_label_area_size(50)
        .y_label_area_size(64)
        .build_cartesian_2d(0.0..window.x_max, 0.0..window.y_max)
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .x_desc(X_AXIS_LABEL)
        .y_desc(Y_AXIS_LABEL)
        .x_labels(10)
        .y_labels(8)
        .draw()
        .map_err(render_error)?;

    for (idx, run) in runs.iter().enumerate() {
        let color = series_color(idx, runs.len());
        let series = chart
            .draw_series(LineSeries::new(
                run.result.samples.iter().map(|s| (s.x, s.y)),
                ShapeStyle::from(&color).stroke_width(2),
            ))
            .map_err(render_error)?;
        if runs.len() > 1 {
            series
                .label(run.body.name())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
        }
    }

    if runs.len() > 1 {
        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.85))
            .border_style(&BLACK)
            .draw()
            .map_err(render_error)?;
    }

    root.present().map_err(render_error)?;
    tracing::info!(path = %path.display(), series = runs.len(), "wrote trajectory plot");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroUsize;

    use chrono::NaiveDate;

    use crate::core::ballistics::{
        LaunchParameters, TrajectoryResult, TrajectorySample, compute_with_intervals,
    };
    use crate::core::gravity::{Body, GravityTable};

    fn run_on(body: Body, table: &GravityTable) -> Run {
        let params = LaunchParameters::new(2.0, 20.0, 45.0, table.gravity(body)).unwrap();
        Run {
            body,
            params,
            result: compute_with_intervals(&params, NonZeroUsize::new(50).unwrap()),
        }
    }

    fn assert_png_written(path: &Path) {
        let bytes = std::fs::read(path).expect("plot file");
        assert!(bytes.len() > 8);
        assert_eq!(&bytes[..4], b"\x89PNG");
    }

    #[test]
    fn timestamped_path_uses_second_resolution() {
        let at = NaiveDate::from_ymd_opt(2026, 10, 14)
            .unwrap()
            .and_hms_opt(9, 5, 7)
            .unwrap()
            .and_utc();
        let path = timestamped_path(Path::new("artifacts"), &at);
        assert_eq!(path, PathBuf::from("artifacts/trajectory_20261014_090507.png"));
    }

    #[test]
    fn single_series_uses_fixed_color() {
        let color = series_color(0, 1);
        assert_eq!((color.0, color.1, color.2), (31, 119, 180));
    }

    #[test]
    fn multiple_series_get_distinct_colors() {
        let first = series_color(0, 8);
        let second = series_color(1, 8);
        assert_ne!((first.0, first.1, first.2), (second.0, second.1, second.2));
    }

    #[test]
    fn empty_input_is_rejected_before_drawing() {
        let dir = std::env::temp_dir();
        let err = render_png(&dir.join("never_written.png"), &[], (100, 100)).unwrap_err();
        assert!(matches!(err, PlotError::Empty));
    }

    #[test]
    fn renders_a_single_run() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("earth.png");
        let run = run_on(Body::Earth, &GravityTable::default());

        render_png(&path, &[run], (640, 480)).unwrap();
        assert_png_written(&path);
    }

    #[test]
    fn renders_every_body_with_a_legend() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("all.png");
        let table = GravityTable::default();
        let runs: Vec<Run> = Body::ALL.iter().map(|&body| run_on(body, &table)).collect();

        render_png(&path, &runs, (800, 600)).unwrap();
        assert_png_written(&path);
    }

    #[test]
    fn non_finite_samples_are_rejected_before_drawing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("overflow.png");
        let mut run = run_on(Body::Earth, &GravityTable::default());
        run.result = TrajectoryResult {
            time_of_flight: 1.0,
            max_height: f64::INFINITY,
            horizontal_reach: f64::INFINITY,
            samples: vec![
                TrajectorySample { x: 0.0, y: 0.0 },
                TrajectorySample { x: 1.0, y: f64::NAN },
            ],
        };

        let err = render_png(&path, &[run], (100, 100)).unwrap_err();
        assert!(matches!(err, PlotError::NonFinite { .. }));
        assert!(!path.exists());
    }
}
