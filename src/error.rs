use std::fmt;

use thiserror::Error;

/// Names the caller-supplied value an [`TrajectoryError::InvalidInput`] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputField {
    Body,
    InitialHeight,
    InitialVelocity,
    LaunchAngle,
    Gravity,
    GravityTable,
    TimeIntervals,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InputField::Body => "body",
            InputField::InitialHeight => "initial height",
            InputField::InitialVelocity => "initial velocity",
            InputField::LaunchAngle => "launch angle",
            InputField::Gravity => "gravity",
            InputField::GravityTable => "gravity table",
            InputField::TimeIntervals => "time intervals",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TrajectoryError {
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: InputField, reason: String },
    #[error("body ordinal {ordinal} is out of range (expected 1..={max})")]
    OutOfRange { ordinal: i64, max: usize },
}

impl TrajectoryError {
    pub(crate) fn invalid(field: InputField, reason: impl Into<String>) -> Self {
        TrajectoryError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// The field that failed, if this is an input error.
    pub fn field(&self) -> Option<InputField> {
        match self {
            TrajectoryError::InvalidInput { field, .. } => Some(*field),
            TrajectoryError::OutOfRange { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_message_names_the_field() {
        let err = TrajectoryError::invalid(InputField::LaunchAngle, "must be at most 90 degrees");
        assert_eq!(
            err.to_string(),
            "invalid launch angle: must be at most 90 degrees"
        );
        assert_eq!(err.field(), Some(InputField::LaunchAngle));
    }

    #[test]
    fn out_of_range_message_includes_bounds() {
        let err = TrajectoryError::OutOfRange { ordinal: 9, max: 8 };
        assert_eq!(
            err.to_string(),
            "body ordinal 9 is out of range (expected 1..=8)"
        );
        assert_eq!(err.field(), None);
    }
}
