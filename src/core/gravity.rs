use std::fmt;

use crate::error::{InputField, TrajectoryError};

pub const BODY_COUNT: usize = 8;

/// Surface gravity in m/s^2, indexed by `ordinal - 1`.
pub const DEFAULT_GRAVITIES_MPS2: [f64; BODY_COUNT] =
    [3.7, 8.87, 9.8, 3.71, 24.79, 10.44, 8.87, 11.15];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Body {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Body {
    pub const ALL: [Body; BODY_COUNT] = [
        Body::Mercury,
        Body::Venus,
        Body::Earth,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
    ];

    /// 1-based position in the selection menu.
    pub fn ordinal(self) -> usize {
        self.index() + 1
    }

    pub fn from_ordinal(ordinal: i64) -> Result<Self, TrajectoryError> {
        usize::try_from(ordinal)
            .ok()
            .and_then(|o| o.checked_sub(1))
            .and_then(|idx| Self::ALL.get(idx).copied())
            .ok_or(TrajectoryError::OutOfRange {
                ordinal,
                max: BODY_COUNT,
            })
    }

    pub fn name(self) -> &'static str {
        match self {
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Earth => "Earth",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Read-only gravity constant per body. Passed explicitly to
/// [`lookup_gravity`]; there is no process-wide table to mutate.
#[derive(Clone, Debug, PartialEq)]
pub struct GravityTable {
    gravities: [f64; BODY_COUNT],
}

impl Default for GravityTable {
    fn default() -> Self {
        Self {
            gravities: DEFAULT_GRAVITIES_MPS2,
        }
    }
}

impl GravityTable {
    /// Builds a table from an override list with one entry per body, in
    /// ordinal order.
    pub fn new(overrides: &[f64]) -> Result<Self, TrajectoryError> {
        let gravities: [f64; BODY_COUNT] = overrides.try_into().map_err(|_| {
            TrajectoryError::invalid(
                InputField::GravityTable,
                format!(
                    "expected {BODY_COUNT} entries, one per body (got {})",
                    overrides.len()
                ),
            )
        })?;

        if let Some((idx, g)) = gravities
            .iter()
            .enumerate()
            .find(|(_, g)| !g.is_finite() || **g <= 0.0)
        {
            return Err(TrajectoryError::invalid(
                InputField::GravityTable,
                format!(
                    "gravity for {} must be a positive number (got {g})",
                    Body::ALL[idx]
                ),
            ));
        }

        Ok(Self { gravities })
    }

    pub fn gravity(&self, body: Body) -> f64 {
        self.gravities[body.index()]
    }

    pub fn entries(&self) -> impl Iterator<Item = (Body, f64)> + '_ {
        Body::ALL.into_iter().map(|body| (body, self.gravity(body)))
    }
}

pub fn lookup_gravity(ordinal: i64, table: &GravityTable) -> Result<f64, TrajectoryError> {
    Body::from_ordinal(ordinal).map(|body| table.gravity(body))
}
