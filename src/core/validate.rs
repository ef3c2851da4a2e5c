use std::num::NonZeroUsize;

use crate::core::ballistics::LaunchParameters;
use crate::error::{InputField, TrajectoryError};

pub const MIN_LAUNCH_ANGLE_DEG: f64 = 0.0;
pub const MAX_LAUNCH_ANGLE_DEG: f64 = 90.0;

/// Checks launch parameters before any computation. Both angle bounds are
/// inclusive.
pub fn validate(params: &LaunchParameters) -> Result<(), TrajectoryError> {
    let fields = [
        (InputField::InitialHeight, params.initial_height),
        (InputField::InitialVelocity, params.initial_velocity),
        (InputField::LaunchAngle, params.launch_angle_degrees),
        (InputField::Gravity, params.gravity),
    ];
    for (field, value) in fields {
        if !value.is_finite() {
            return Err(TrajectoryError::invalid(
                field,
                format!("must be a finite number (got {value})"),
            ));
        }
    }

    if params.initial_velocity < 0.0 {
        return Err(TrajectoryError::invalid(
            InputField::InitialVelocity,
            format!("cannot be negative (got {})", params.initial_velocity),
        ));
    }
    if params.initial_height < 0.0 {
        return Err(TrajectoryError::invalid(
            InputField::InitialHeight,
            format!("cannot be negative (got {})", params.initial_height),
        ));
    }
    if !(MIN_LAUNCH_ANGLE_DEG..=MAX_LAUNCH_ANGLE_DEG).contains(&params.launch_angle_degrees) {
        return Err(TrajectoryError::invalid(
            InputField::LaunchAngle,
            format!(
                "must be between {MIN_LAUNCH_ANGLE_DEG} and {MAX_LAUNCH_ANGLE_DEG} degrees (got {})",
                params.launch_angle_degrees
            ),
        ));
    }
    if params.gravity <= 0.0 {
        return Err(TrajectoryError::invalid(
            InputField::Gravity,
            format!("must be positive (got {})", params.gravity),
        ));
    }

    // Bounds on the flight time and on every intermediate of the sampled curve.
    let v = params.initial_velocity;
    let flight_bound = 2.0 * v / params.gravity;
    let height_bound = params.initial_height + 2.0 * v * v / params.gravity;
    if !(flight_bound.is_finite() && height_bound.is_finite()) {
        return Err(TrajectoryError::invalid(
            InputField::InitialVelocity,
            format!(
                "is too large for a finite trajectory at g = {} (got {v})",
                params.gravity
            ),
        ));
    }

    Ok(())
}

pub fn validate_intervals(intervals: usize) -> Result<NonZeroUsize, TrajectoryError> {
    NonZeroUsize::new(intervals).ok_or_else(|| {
        TrajectoryError::invalid(InputField::TimeIntervals, "must be at least 1")
    })
}
