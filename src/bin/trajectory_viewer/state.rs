use projectile_motion::{
    Body, GravityTable, LaunchParameters, TrajectoryError, TrajectoryResult, compute,
};

type Inputs = (Body, f32, f32, f32);

pub(crate) struct ViewerState {
    pub(crate) table: GravityTable,
    pub(crate) body: Body,
    pub(crate) height_m: f32,
    pub(crate) speed_mps: f32,
    pub(crate) angle_deg: f32,
    cached: Option<(Inputs, Result<TrajectoryResult, TrajectoryError>)>,
}

impl ViewerState {
    pub(crate) fn new() -> Self {
        Self {
            table: GravityTable::default(),
            body: Body::Earth,
            height_m: 0.0,
            speed_mps: 20.0,
            angle_deg: 45.0,
            cached: None,
        }
    }

    pub(crate) fn gravity(&self) -> f64 {
        self.table.gravity(self.body)
    }

    pub(crate) fn params(&self) -> Result<LaunchParameters, TrajectoryError> {
        LaunchParameters::new(
            f64::from(self.height_m),
            f64::from(self.speed_mps),
            f64::from(self.angle_deg),
            self.gravity(),
        )
    }

    fn inputs(&self) -> Inputs {
        (self.body, self.height_m, self.speed_mps, self.angle_deg)
    }

    /// Trajectory for the current inputs, recomputed only after they change.
    pub(crate) fn trajectory(&mut self) -> &Result<TrajectoryResult, TrajectoryError> {
        let inputs = self.inputs();
        if self.cached.as_ref().is_some_and(|(key, _)| *key != inputs) {
            self.cached = None;
        }
        let params = self.params();
        &self
            .cached
            .get_or_insert_with(|| (inputs, params.map(|params| compute(&params))))
            .1
    }

    pub(crate) fn select_ordinal(&mut self, ordinal: i64) {
        match Body::from_ordinal(ordinal) {
            Ok(body) => self.body = body,
            Err(err) => tracing::debug!(%err, "ignored body selection"),
        }
    }

    pub(crate) fn step_body(&mut self, forward: bool) {
        let ordinal = self.body.ordinal() as i64;
        let count = Body::ALL.len() as i64;
        let next = if forward {
            ordinal % count + 1
        } else {
            (ordinal + count - 2) % count + 1
        };
        self.select_ordinal(next);
    }
}
