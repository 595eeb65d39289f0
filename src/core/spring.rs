use super::constants::{
    MAX_FRAME_DT_SEC, SPRING_DAMPING, SPRING_REST_DELTA, SPRING_REST_SPEED, SPRING_STIFFNESS,
};

/// Damped spring that chases a moving target one frame at a time.
///
/// Integration is semi-implicit Euler on the real frame `dt`. Steps longer
/// than `max_dt` are clamped so a resumed tab does not blow the state up.
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    position: f32,
    velocity: f32,
    target: f32,
    stiffness: f32,
    damping: f32,
    max_dt: f32,
}

impl Default for Spring {
    fn default() -> Self {
        Self::new(SPRING_STIFFNESS, SPRING_DAMPING, MAX_FRAME_DT_SEC)
    }
}

impl Spring {
    pub fn new(stiffness: f32, damping: f32, max_dt: f32) -> Self {
        Self {
            position: 0.0,
            velocity: 0.0,
            target: 0.0,
            stiffness,
            damping,
            max_dt,
        }
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn set_target(&mut self, target: f32) {
        if target.is_finite() {
            self.target = target;
        }
    }

    pub fn is_settled(&self) -> bool {
        self.position == self.target && self.velocity == 0.0
    }

    /// Advance by `dt_sec` seconds and return the new position.
    pub fn step(&mut self, dt_sec: f32) -> f32 {
        let dt = if dt_sec.is_finite() {
            dt_sec.clamp(0.0, self.max_dt)
        } else {
            0.0
        };
        if dt == 0.0 || self.is_settled() {
            return self.position;
        }
        let accel = self.stiffness * (self.target - self.position) - self.damping * self.velocity;
        self.velocity += accel * dt;
        self.position += self.velocity * dt;

        if (self.target - self.position).abs() < SPRING_REST_DELTA
            && self.velocity.abs() < SPRING_REST_SPEED
        {
            self.position = self.target;
            self.velocity = 0.0;
        }
        self.position
    }
}
