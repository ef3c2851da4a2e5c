//! Text summaries and sample export for computed trajectories.

use std::io::Write;

use serde::Serialize;

use crate::core::ballistics::{LaunchParameters, TrajectoryResult};
use crate::core::gravity::Body;

/// One launch computed on one body.
#[derive(Clone, Debug, PartialEq)]
pub struct Run {
    pub body: Body,
    pub params: LaunchParameters,
    pub result: TrajectoryResult,
}

pub fn format_summary(run: &Run) -> String {
    let params = &run.params;
    let result = &run.result;
    format!(
        "Body: {} (g = {:.2} m/s^2)\n\
         Launch: height {:.2} m, velocity {:.2} m/s, angle {:.2} deg\n\
         \n\
         Time of flight: {:.4} seconds\n\
         Maximum height: {:.4} meters\n\
         Horizontal reach: {:.4} meters\n",
        run.body,
        params.gravity,
        params.initial_height,
        params.initial_velocity,
        params.launch_angle_degrees,
        result.time_of_flight,
        result.max_height,
        result.horizontal_reach,
    )
}

pub fn format_comparison(runs: &[Run]) -> String {
    let mut table = format!(
        "{:<8} {:>10} {:>12} {:>14} {:>16}\n",
        "Body", "g (m/s^2)", "Flight (s)", "Max height (m)", "Reach (m)"
    );
    for run in runs {
        table.push_str(&format!(
            "{:<8} {:>10.2} {:>12.4} {:>14.4} {:>16.4}\n",
            run.body.name(),
            run.params.gravity,
            run.result.time_of_flight,
            run.result.max_height,
            run.result.horizontal_reach,
        ));
    }
    table
}

#[derive(Serialize)]
struct SampleRecord {
    body: &'static str,
    index: usize,
    time_s: f64,
    x_m: f64,
    y_m: f64,
}

/// Writes every sample of every run as CSV with a header row.
pub fn write_samples_csv<W: Write>(writer: W, runs: &[Run]) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for run in runs {
        let delta_t = run.result.delta_t();
        for (index, sample) in run.result.samples.iter().enumerate() {
            csv_writer.serialize(SampleRecord {
                body: run.body.name(),
                index,
                time_s: index as f64 * delta_t,
                x_m: sample.x,
                y_m: sample.y,
            })?;
        }
    }
    csv_writer.flush()?;
    Ok(())
}
