use nalgebra::{Point3, Vector3};
use tracing::{debug, trace};

use super::clock::{SimulationClock, Tick};
use super::registry::{Body, BodyID, BodyInfo, Motion, Registry};
use crate::astro::{
    FreeBodyIntegrator, GravityField, KeplerianEvaluator, OrbitalElements, PointMass,
};
use crate::config::EngineConfig;
use crate::error::{Error, Result};
use crate::telemetry::Telemetry;

/// Owns every body and moves them forward one tick at a time.
///
/// The engine holds no clock of its own. Callers own a [SimulationClock] and
/// hand it to [Engine::advance], which turns wall time into a [Tick].
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    registry: Registry,
    evaluator: KeplerianEvaluator,
    integrator: FreeBodyIntegrator,
    // Simulated time the bodies are currently positioned at
    time: f64,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Result<Self> {
        Self::with_registry(config, Registry::new())
    }

    pub fn with_registry(config: EngineConfig, registry: Registry) -> Result<Self> {
        config.validate()?;

        let evaluator = KeplerianEvaluator::new(config.period_unit);
        let field = GravityField::new(config.gravitational_constant, config.force_limit);
        let mut engine = Engine {
            config,
            registry,
            evaluator,
            integrator: FreeBodyIntegrator::new(field),
            time: 0.0,
        };
        engine.reposition_orbit_bodies(0.0, 0.0);
        Ok(engine)
    }

    /// A clock configured from this engine's settings.
    pub fn clock(&self, epoch_start: f64) -> Result<SimulationClock> {
        SimulationClock::from_config(&self.config, epoch_start)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn evaluator(&self) -> &KeplerianEvaluator {
        &self.evaluator
    }

    pub fn integrator(&self) -> &FreeBodyIntegrator {
        &self.integrator
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    // ---- Registration ----

    pub fn register_orbit_body(
        &mut self,
        info: BodyInfo,
        elements: OrbitalElements,
        offset: Vector3<f64>,
    ) -> Result<BodyID> {
        let id = self.registry.add_orbit_body(info, elements, offset)?;
        let position = offset + self.evaluator.position_at(&elements, self.time);
        if let Motion::OrbitBound(orbit) = &mut self.registry.get_mut(id)?.motion {
            orbit.position = position;
        }
        Ok(id)
    }

    pub fn register_fixed_body(
        &mut self,
        info: BodyInfo,
        position: Vector3<f64>,
    ) -> Result<BodyID> {
        self.registry.add_fixed_body(info, position)
    }

    pub fn register_free_body(
        &mut self,
        info: BodyInfo,
        position: Vector3<f64>,
        velocity: Vector3<f64>,
    ) -> Result<BodyID> {
        self.registry.add_free_body(info, position, velocity)
    }

    pub fn spawn_probe(
        &mut self,
        name: impl Into<String>,
        position: Vector3<f64>,
        velocity: Vector3<f64>,
        color: Point3<f32>,
    ) -> Result<BodyID> {
        self.registry.add_probe(name, position, velocity, color)
    }

    pub fn remove_free_body(&mut self, id: BodyID) -> Result<Body> {
        self.registry.remove_free_body(id)
    }

    // ---- Ticking ----

    /// Runs one tick covering `dt_wall` wall-clock seconds.
    pub fn advance(&mut self, clock: &mut SimulationClock, dt_wall: f64) -> Result<Tick> {
        let tick = clock.advance_by(dt_wall)?;
        self.apply_tick(tick);
        Ok(tick)
    }

    /// Runs one tick ending at wall time `now`.
    pub fn advance_to(&mut self, clock: &mut SimulationClock, now: f64) -> Result<Tick> {
        let tick = clock.advance(now)?;
        self.apply_tick(tick);
        Ok(tick)
    }

    fn apply_tick(&mut self, tick: Tick) {
        debug!(t_sim = tick.t_sim, dt_sim = tick.dt_sim, "tick");

        // Orbit-bound bodies must all be in place before any force is computed
        self.reposition_orbit_bodies(tick.t_sim, tick.dt_sim);
        self.time = tick.t_sim;

        if tick.dt_sim > 0.0 {
            let sources = self.registry.gravity_sources();
            self.integrate_free_bodies(&sources, tick.dt_sim);
        }
    }

    fn reposition_orbit_bodies(&mut self, time: f64, dt: f64) {
        let evaluator = self.evaluator;
        for body in self.registry.bodies_mut() {
            let orbit = match &mut body.motion {
                Motion::OrbitBound(orbit) => orbit,
                Motion::Integrated(_) => continue,
            };
            match &orbit.elements {
                None => {
                    orbit.position = orbit.offset;
                    orbit.velocity = Vector3::zeros();
                }
                Some(elements) => {
                    orbit.position = orbit.offset + evaluator.position_at(elements, time);
                    // A paused tick keeps the last known velocity
                    if dt > 0.0 {
                        orbit.velocity = evaluator.velocity_at(elements, time, dt);
                    }
                }
            }
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn integrate_free_bodies(&mut self, sources: &[PointMass], dt: f64) {
        let integrator = &self.integrator;
        for body in self.registry.bodies_mut() {
            step_body(integrator, body, sources, dt);
        }
    }

    #[cfg(feature = "parallel")]
    fn integrate_free_bodies(&mut self, sources: &[PointMass], dt: f64) {
        use rayon::prelude::*;

        // Each free body only reads the shared snapshot, so they can all step at once
        let integrator = &self.integrator;
        self.registry
            .bodies_map_mut()
            .par_iter_mut()
            .for_each(|(_, body)| step_body(integrator, body, sources, dt));
    }

    // ---- Accessors for consumers ----

    pub fn lookup(&self, name: &str) -> Option<BodyID> {
        self.registry.lookup(name)
    }

    pub fn body(&self, id: BodyID) -> Result<&Body> {
        self.registry.get(id)
    }

    pub fn position_of(&self, id: BodyID) -> Result<Vector3<f64>> {
        Ok(self.registry.get(id)?.position())
    }

    pub fn velocity_of(&self, id: BodyID) -> Result<Vector3<f64>> {
        Ok(self.registry.get(id)?.velocity())
    }

    /// The radius to frame or draw the body at.
    pub fn radius_of(&self, id: BodyID) -> Result<f64> {
        Ok(self.registry.get(id)?.info.render_radius)
    }

    pub fn physical_radius_of(&self, id: BodyID) -> Result<f64> {
        Ok(self.registry.get(id)?.info.radius)
    }

    /// Net gravitational force on a body from the current positions of all
    /// orbit-bound bodies.
    pub fn force_on(&self, id: BodyID) -> Result<Vector3<f64>> {
        let body = self.registry.get(id)?;
        let sources = self.registry.gravity_sources();
        Ok(self
            .integrator
            .field()
            .force_on(body.info.mass, &body.position(), &sources))
    }

    pub fn telemetry(&self, id: BodyID) -> Result<Telemetry> {
        self.registry.get(id).map(Telemetry::of)
    }

    /// Like [Engine::telemetry], but resolving the body by name.
    pub fn telemetry_by_name(&self, name: &str) -> Result<Telemetry> {
        let id = self
            .lookup(name)
            .ok_or_else(|| Error::UnknownName(name.to_owned()))?;
        self.telemetry(id)
    }
}

fn step_body(integrator: &FreeBodyIntegrator, body: &mut Body, sources: &[PointMass], dt: f64) {
    let mass = body.info.mass;
    if let Motion::Integrated(state) = &mut body.motion {
        let force = integrator.step(state, mass, sources, dt);
        trace!(id = body.id.0, ?force, "stepped free body");
    }
}
