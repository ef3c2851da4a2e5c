//! Closed-form projectile trajectories under constant gravity, with the
//! collaborators needed to drive them from a terminal or a window.

pub mod core {
    pub mod ballistics;
    pub mod gravity;
    pub mod validate;
    pub mod window;
}

pub mod config;
pub mod error;
pub mod input;
pub mod plot;
pub mod report;

pub use crate::core::ballistics::{
    DEFAULT_TIME_INTERVALS, LaunchParameters, TrajectoryResult, TrajectorySample, compute,
    compute_with_intervals,
};
pub use crate::core::gravity::{Body, GravityTable, lookup_gravity};
pub use crate::core::validate::validate;
pub use crate::error::{InputField, TrajectoryError};
