use std::fmt;

use nalgebra::{Point3, Vector3};

use crate::astro::{FreeState, OrbitalElements, PointMass};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct BodyID(pub usize);

impl fmt::Display for BodyID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// All the immutable info about a body
#[derive(Debug, Clone, PartialEq)]
pub struct BodyInfo {
    pub name: String,
    pub mass: f64,
    /// Physical radius, in meters
    pub radius: f64,
    /// Size to draw the body at; usually much larger than `radius`
    pub render_radius: f64,
    pub color: Point3<f32>,
}

impl BodyInfo {
    pub fn new(name: impl Into<String>, mass: f64, radius: f64, color: Point3<f32>) -> Self {
        BodyInfo {
            name: name.into(),
            mass,
            radius,
            render_radius: radius,
            color,
        }
    }

    pub fn with_render_radius(mut self, render_radius: f64) -> Self {
        self.render_radius = render_radius;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.mass > 0.0 && self.mass.is_finite()) {
            return Err(Error::NonPositiveMass {
                name: self.name.clone(),
                mass: self.mass,
            });
        }
        for &radius in &[self.radius, self.render_radius] {
            if !(radius >= 0.0 && radius.is_finite()) {
                return Err(Error::InvalidRadius {
                    name: self.name.clone(),
                    radius,
                });
            }
        }
        Ok(())
    }
}

/// Motion of a body whose position is a function of time.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitMotion {
    /// `None` pins the body at `offset` forever
    pub elements: Option<OrbitalElements>,
    /// Where the orbit's focus sits
    pub offset: Vector3<f64>,
    // Cached from the last tick; recomputed, never integrated
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Motion {
    OrbitBound(OrbitMotion),
    Integrated(FreeState),
}

#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyID,
    pub info: BodyInfo,
    pub motion: Motion,
}

impl Body {
    pub fn position(&self) -> Vector3<f64> {
        match &self.motion {
            Motion::OrbitBound(orbit) => orbit.position,
            Motion::Integrated(state) => state.position,
        }
    }

    /// For orbit-bound bodies this is a finite difference over the last tick.
    pub fn velocity(&self) -> Vector3<f64> {
        match &self.motion {
            Motion::OrbitBound(orbit) => orbit.velocity,
            Motion::Integrated(state) => state.velocity,
        }
    }

    pub fn is_free(&self) -> bool {
        matches!(self.motion, Motion::Integrated(_))
    }

    pub fn elements(&self) -> Option<&OrbitalElements> {
        match &self.motion {
            Motion::OrbitBound(orbit) => orbit.elements.as_ref(),
            Motion::Integrated(_) => None,
        }
    }

    pub fn to_point_mass(&self) -> PointMass {
        PointMass::new(self.position(), self.info.mass)
    }
}
