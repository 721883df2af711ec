use std::collections::{BTreeMap, HashMap};

use nalgebra::{Point3, Vector3};
use tracing::info;

use crate::astro::{FreeState, OrbitalElements, PointMass};
use crate::consts::{PROBE_MASS, PROBE_RADIUS};
use crate::error::{Error, Result};

mod body;

pub use body::{Body, BodyID, BodyInfo, Motion, OrbitMotion};

/// Every body in the simulation, keyed by id.
///
/// Ids come from one counter shared by both kinds of body and are never
/// reused, so an id always means the same body. Names are unique too.
/// Iteration runs in id order, so repeated runs sum forces identically.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    bodies: BTreeMap<BodyID, Body>,
    names: HashMap<String, BodyID>,
    next_body_id: usize,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a body that follows `elements` around a focus at `offset`.
    ///
    /// Its position stays at `offset` until the engine first evaluates it.
    pub fn add_orbit_body(
        &mut self,
        info: BodyInfo,
        elements: OrbitalElements,
        offset: Vector3<f64>,
    ) -> Result<BodyID> {
        self.insert_new_body(info, Self::orbit_motion(Some(elements), offset))
    }

    /// Registers a massive body that never moves, like a central star.
    pub fn add_fixed_body(&mut self, info: BodyInfo, position: Vector3<f64>) -> Result<BodyID> {
        self.insert_new_body(info, Self::orbit_motion(None, position))
    }

    pub fn add_free_body(
        &mut self,
        info: BodyInfo,
        position: Vector3<f64>,
        velocity: Vector3<f64>,
    ) -> Result<BodyID> {
        self.insert_new_body(info, Motion::Integrated(FreeState::new(position, velocity)))
    }

    /// Registers a free body with the standard probe mass and size.
    pub fn add_probe(
        &mut self,
        name: impl Into<String>,
        position: Vector3<f64>,
        velocity: Vector3<f64>,
        color: Point3<f32>,
    ) -> Result<BodyID> {
        let info = BodyInfo::new(name, PROBE_MASS, PROBE_RADIUS, color);
        self.add_free_body(info, position, velocity)
    }

    fn orbit_motion(elements: Option<OrbitalElements>, offset: Vector3<f64>) -> Motion {
        Motion::OrbitBound(OrbitMotion {
            elements,
            offset,
            position: offset,
            velocity: Vector3::zeros(),
        })
    }

    fn insert_new_body(&mut self, info: BodyInfo, motion: Motion) -> Result<BodyID> {
        info.validate()?;
        if self.names.contains_key(&info.name) {
            return Err(Error::DuplicateName(info.name));
        }

        let id = BodyID(self.next_body_id);
        self.next_body_id += 1;

        info!(
            id = id.0,
            name = %info.name,
            mass = info.mass,
            free = matches!(motion, Motion::Integrated(_)),
            "registered body"
        );
        self.names.insert(info.name.clone(), id);
        self.bodies.insert(id, Body { id, info, motion });
        Ok(id)
    }

    /// Removes a free body. Orbit-bound bodies are permanent.
    pub fn remove_free_body(&mut self, id: BodyID) -> Result<Body> {
        match self.bodies.get(&id) {
            None => return Err(Error::UnknownBody(id)),
            Some(body) if !body.is_free() => return Err(Error::NotAFreeBody(id)),
            Some(_) => {}
        }

        let body = self.bodies.remove(&id).ok_or(Error::UnknownBody(id))?;
        self.names.remove(&body.info.name);
        info!(id = id.0, name = %body.info.name, "removed body");
        Ok(body)
    }

    pub fn get(&self, id: BodyID) -> Result<&Body> {
        self.bodies.get(&id).ok_or(Error::UnknownBody(id))
    }

    pub(crate) fn get_mut(&mut self, id: BodyID) -> Result<&mut Body> {
        self.bodies.get_mut(&id).ok_or(Error::UnknownBody(id))
    }

    pub fn lookup(&self, name: &str) -> Option<BodyID> {
        self.names.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn bodies(&self) -> impl Iterator<Item = &Body> + '_ {
        self.bodies.values()
    }

    pub fn orbit_bodies(&self) -> impl Iterator<Item = &Body> + '_ {
        self.bodies.values().filter(|b| !b.is_free())
    }

    pub fn free_bodies(&self) -> impl Iterator<Item = &Body> + '_ {
        self.bodies.values().filter(|b| b.is_free())
    }

    pub(crate) fn bodies_mut(&mut self) -> impl Iterator<Item = &mut Body> + '_ {
        self.bodies.values_mut()
    }

    #[cfg(feature = "parallel")]
    pub(crate) fn bodies_map_mut(&mut self) -> &mut BTreeMap<BodyID, Body> {
        &mut self.bodies
    }

    /// Snapshot of every gravity source. Only orbit-bound bodies attract.
    pub fn gravity_sources(&self) -> Vec<PointMass> {
        self.orbit_bodies().map(Body::to_point_mass).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grey() -> Point3<f32> {
        Point3::new(0.5, 0.5, 0.5)
    }

    fn populated() -> (Registry, BodyID, BodyID, BodyID) {
        let mut registry = Registry::new();
        let sun = registry
            .add_fixed_body(BodyInfo::new("Sun", 1.0e30, 7.0e8, grey()), Vector3::zeros())
            .unwrap();
        let planet = registry
            .add_orbit_body(
                BodyInfo::new("Planet", 6.0e24, 6.4e6, grey()),
                OrbitalElements::circular(1.5e11, 1.0).unwrap(),
                Vector3::zeros(),
            )
            .unwrap();
        let probe = registry
            .add_probe("Probe", Vector3::x() * 1.0e11, Vector3::y() * 3.0e4, grey())
            .unwrap();
        (registry, sun, planet, probe)
    }

    #[test]
    fn test_ids_are_distinct_across_kinds() {
        let (registry, sun, planet, probe) = populated();
        assert_eq!(registry.len(), 3);
        assert_ne!(sun, planet);
        assert_ne!(planet, probe);
        assert_ne!(sun, probe);

        assert_eq!(registry.lookup("Sun"), Some(sun));
        assert_eq!(registry.lookup("Probe"), Some(probe));
        assert_eq!(registry.lookup("Pluto"), None);

        assert_eq!(registry.orbit_bodies().count(), 2);
        assert_eq!(registry.free_bodies().count(), 1);
    }

    #[test]
    fn test_iteration_follows_id_order() {
        let mut registry = Registry::new();
        for i in 0..32 {
            let info = BodyInfo::new(format!("Body{}", i), (i + 1) as f64, 1.0, grey());
            registry.add_fixed_body(info, Vector3::x() * i as f64).unwrap();
        }

        let ids: Vec<BodyID> = registry.bodies().map(|b| b.id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);

        let masses: Vec<f64> = registry.gravity_sources().iter().map(|s| s.mass).collect();
        let expected: Vec<f64> = (1..=32).map(|m| m as f64).collect();
        assert_eq!(masses, expected);
    }

    #[test]
    fn test_probe_defaults() {
        let (registry, _, _, probe) = populated();
        let probe = registry.get(probe).unwrap();
        assert!(probe.is_free());
        assert_eq!(probe.info.mass, PROBE_MASS);
        assert_eq!(probe.info.radius, PROBE_RADIUS);
        assert_eq!(probe.position(), Vector3::x() * 1.0e11);
        assert_eq!(probe.velocity(), Vector3::y() * 3.0e4);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let (mut registry, _, _, _) = populated();
        let result = registry.add_probe("Sun", Vector3::zeros(), Vector3::zeros(), grey());
        assert!(matches!(result, Err(Error::DuplicateName(name)) if name == "Sun"));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_invalid_info_rejected() {
        let mut registry = Registry::new();
        let result = registry.add_free_body(
            BodyInfo::new("Dust", 0.0, 1.0, grey()),
            Vector3::zeros(),
            Vector3::zeros(),
        );
        assert!(matches!(result, Err(Error::NonPositiveMass { .. })));
        assert!(registry.is_empty());
        assert_eq!(registry.lookup("Dust"), None);
    }

    #[test]
    fn test_remove_free_body() {
        let (mut registry, sun, _, probe) = populated();

        assert!(matches!(registry.remove_free_body(sun), Err(Error::NotAFreeBody(_))));

        let removed = registry.remove_free_body(probe).unwrap();
        assert_eq!(removed.info.name, "Probe");
        assert!(matches!(registry.get(probe), Err(Error::UnknownBody(_))));
        assert!(matches!(registry.remove_free_body(probe), Err(Error::UnknownBody(_))));

        // The name is free again, but the id is not reused
        let again = registry
            .add_probe("Probe", Vector3::zeros(), Vector3::zeros(), grey())
            .unwrap();
        assert_ne!(again, probe);
    }

    #[test]
    fn test_only_orbit_bodies_attract() {
        let (registry, _, _, _) = populated();
        let sources = registry.gravity_sources();
        assert_eq!(sources.len(), 2);
        assert!(sources.iter().all(|s| s.mass != PROBE_MASS));
    }
}
