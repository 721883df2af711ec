use nalgebra::Vector3;

use super::gravity::{GravityField, PointMass};

/// Position and velocity of a body that moves under gravity rather than on a
/// prescribed orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreeState {
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
}

impl FreeState {
    pub fn new(position: Vector3<f64>, velocity: Vector3<f64>) -> Self {
        FreeState { position, velocity }
    }
}

/// Explicit variable-step integrator for free bodies.
///
/// The step size is whatever the clock hands over; there is no sub-stepping,
/// so a long frame means a long (and less accurate) step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreeBodyIntegrator {
    field: GravityField,
}

impl FreeBodyIntegrator {
    pub fn new(field: GravityField) -> Self {
        FreeBodyIntegrator { field }
    }

    pub fn field(&self) -> &GravityField {
        &self.field
    }

    /// Advances `state` by `dt` under the pull of `sources`, evaluated at the
    /// pre-step position. Returns the force that was applied.
    pub fn step(
        &self,
        state: &mut FreeState,
        mass: f64,
        sources: &[PointMass],
        dt: f64,
    ) -> Vector3<f64> {
        let force = self.field.force_on(mass, &state.position, sources);
        Self::apply_force(state, mass, &force, dt);
        force
    }

    /// Applies a constant `force` for `dt` seconds.
    ///
    /// Displacement is `((v0 + v1) / 2 + a dt / 2) dt`. The average velocity
    /// already carries the `a dt / 2` contribution, so acceleration counts
    /// twice compared to a trapezoidal update: a body starting at rest moves
    /// `a dt^2` rather than `a dt^2 / 2`. Trajectories depend on this, so it
    /// stays as is.
    pub fn apply_force(state: &mut FreeState, mass: f64, force: &Vector3<f64>, dt: f64) {
        let accel = force / mass;
        let new_velocity = state.velocity + accel * dt;
        let displacement = ((state.velocity + new_velocity) / 2.0 + 0.5 * accel * dt) * dt;

        state.position += displacement;
        state.velocity = new_velocity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn integrator() -> FreeBodyIntegrator {
        FreeBodyIntegrator::new(GravityField::new(1.0, 1.0e9))
    }

    #[test]
    fn test_deterministic() {
        let start = FreeState::new(Vector3::new(1.0, 2.0, 3.0), Vector3::new(-0.5, 0.25, 4.0));
        let force = Vector3::new(0.3, -7.0, 1.5);

        let mut a = start;
        let mut b = start;
        FreeBodyIntegrator::apply_force(&mut a, 2.0, &force, 0.016);
        FreeBodyIntegrator::apply_force(&mut b, 2.0, &force, 0.016);
        assert_eq!(a, b);

        let sources = [PointMass::new(Vector3::new(10.0, 0.0, 0.0), 100.0)];
        let mut a = start;
        let mut b = start;
        integrator().step(&mut a, 2.0, &sources, 0.02);
        integrator().step(&mut b, 2.0, &sources, 0.02);
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_step_from_rest() {
        let mut state = FreeState::new(Vector3::zeros(), Vector3::zeros());
        let force = Vector3::new(0.0, 0.0, 6.0);
        let mass = 3.0;
        let dt = 0.5;
        FreeBodyIntegrator::apply_force(&mut state, mass, &force, dt);

        // a = 2, v1 = a dt = 1, x1 = (v1 / 2 + a dt / 2) dt = a dt^2 = 0.5
        approx::assert_relative_eq!(state.velocity, Vector3::new(0.0, 0.0, 1.0));
        approx::assert_relative_eq!(state.position, Vector3::new(0.0, 0.0, 0.5));
    }

    #[test]
    fn test_zero_gravity_moves_linearly() {
        let velocity = Vector3::new(3.0, -1.0, 0.5);
        let start = Vector3::new(10.0, 20.0, 30.0);
        let mut state = FreeState::new(start, velocity);

        let sources = [
            PointMass::new(Vector3::new(1.0, 0.0, 0.0), 0.0),
            PointMass::new(Vector3::new(0.0, -5.0, 2.0), 0.0),
        ];
        let integrator = integrator();
        let dt = 0.1;
        let steps = 250;
        for _ in 0..steps {
            let force = integrator.step(&mut state, 1.0, &sources, dt);
            assert_eq!(force, Vector3::zeros());
        }

        assert_eq!(state.velocity, velocity);
        approx::assert_relative_eq!(
            state.position,
            start + velocity * (dt * steps as f64),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_zero_dt_is_a_no_op() {
        let start = FreeState::new(Vector3::new(1.0, 1.0, 1.0), Vector3::new(2.0, 0.0, 0.0));
        let mut state = start;
        let sources = [PointMass::new(Vector3::zeros(), 1.0)];
        integrator().step(&mut state, 1.0, &sources, 0.0);
        assert_eq!(state, start);
    }

    #[test]
    fn test_falls_toward_source() {
        let mut state = FreeState::new(Vector3::new(5.0, 0.0, 0.0), Vector3::zeros());
        let sources = [PointMass::new(Vector3::zeros(), 50.0)];
        for _ in 0..10 {
            integrator().step(&mut state, 1.0, &sources, 0.01);
        }
        assert!(state.position.x < 5.0);
        assert!(state.velocity.x < 0.0);
        approx::assert_abs_diff_eq!(state.position.y, 0.0);
        approx::assert_abs_diff_eq!(state.position.z, 0.0);
    }
}
