use std::num::NonZeroUsize;

use crate::core::validate::validate;
use crate::error::TrajectoryError;

pub const DEFAULT_TIME_INTERVALS: NonZeroUsize = NonZeroUsize::new(100).unwrap();

/// Launch conditions for a single shot. Construct through [`LaunchParameters::new`]
/// so the values are validated once up front.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaunchParameters {
    pub initial_height: f64,
    pub initial_velocity: f64,
    pub launch_angle_degrees: f64,
    pub gravity: f64,
}

impl LaunchParameters {
    pub fn new(
        initial_height: f64,
        initial_velocity: f64,
        launch_angle_degrees: f64,
        gravity: f64,
    ) -> Result<Self, TrajectoryError> {
        let params = Self {
            initial_height,
            initial_velocity,
            launch_angle_degrees,
            gravity,
        };
        validate(&params)?;
        Ok(params)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrajectorySample {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrajectoryResult {
    pub time_of_flight: f64,
    pub max_height: f64,
    pub horizontal_reach: f64,
    pub samples: Vec<TrajectorySample>,
}

impl TrajectoryResult {
    /// Number of equal time intervals the samples were taken over.
    pub fn intervals(&self) -> usize {
        self.samples.len().saturating_sub(1)
    }

    /// Time step between consecutive samples.
    pub fn delta_t(&self) -> f64 {
        match self.intervals() {
            0 => 0.0,
            n => self.time_of_flight / n as f64,
        }
    }
}

pub fn velocity_components(params: &LaunchParameters) -> (f64, f64) {
    let theta = params.launch_angle_degrees.to_radians();
    let vx = params.initial_velocity * theta.cos();
    let vy = params.initial_velocity * theta.sin();
    (vx, vy)
}

pub fn trajectory_at_time(params: &LaunchParameters, time_s: f64) -> TrajectorySample {
    let (vx, vy) = velocity_components(params);
    TrajectorySample {
        x: vx * time_s,
        y: params.initial_height + (vy * time_s) - (0.5 * params.gravity * time_s * time_s),
    }
}

pub fn compute(params: &LaunchParameters) -> TrajectoryResult {
    compute_with_intervals(params, DEFAULT_TIME_INTERVALS)
}

/// Evaluates the analytic trajectory at `intervals + 1` evenly spaced times
/// covering `[0, time_of_flight]`.
///
/// A launch with no vertical velocity component has a zero time of flight, so
/// every sample sits at the launch point even when it starts above the ground.
pub fn compute_with_intervals(
    params: &LaunchParameters,
    intervals: NonZeroUsize,
) -> TrajectoryResult {
    let (vx, vy) = velocity_components(params);
    let g = params.gravity;

    let time_of_flight = (2.0 * vy) / g;
    let max_height = (vy * vy) / (2.0 * g) + params.initial_height;
    let horizontal_reach = vx * time_of_flight;

    if time_of_flight == 0.0 && params.initial_height > 0.0 {
        tracing::warn!(
            height_m = params.initial_height,
            angle_deg = params.launch_angle_degrees,
            "no vertical launch velocity: trajectory collapses to the launch point"
        );
    }

    let n = intervals.get();
    let delta_t = time_of_flight / n as f64;
    let samples = (0..=n)
        .map(|i| trajectory_at_time(params, i as f64 * delta_t))
        .collect();

    tracing::debug!(
        time_of_flight,
        max_height,
        horizontal_reach,
        intervals = n,
        "computed trajectory"
    );

    TrajectoryResult {
        time_of_flight,
        max_height,
        horizontal_reach,
        samples,
    }
}
