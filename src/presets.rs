//! Built-in body tables.
//!
//! Distances are stored in AU and periods in years, so an engine running these
//! bodies should use [EngineConfig::solar](crate::config::EngineConfig::solar).

use nalgebra::{Point3, Vector3};

use crate::astro::OrbitalElements;
use crate::consts::AU;
use crate::error::Result;
use crate::model::{BodyInfo, Registry};

struct PlanetRow {
    name: &'static str,
    mass: f64,
    // Physical radius in thousands of km
    radius: f64,
    render_radius: f64,
    color: u32,
    aphelion: f64,
    perihelion: f64,
    inclination: f64,
    period: f64,
    eccentricity: f64,
}

/// Most bodies are drawn at this size; true scale would be invisible.
pub const PLANET_RENDER_RADIUS: f64 = 6000.0;
const EARTH_RENDER_RADIUS: f64 = 6371.0;

const SUN_MASS: f64 = 1.989e30;
const SUN_RADIUS: f64 = 695.51;
const SUN_COLOR: u32 = 0xffff00;

#[rustfmt::skip]
const PLANETS: &[PlanetRow] = &[
    PlanetRow { name: "Mercury", mass: 3.30e23,   radius: 2.4397, render_radius: PLANET_RENDER_RADIUS, color: 0xff0000, aphelion: 0.47,   perihelion: 0.31,    inclination: 7.01,  period: 0.241, eccentricity: 0.205 },
    PlanetRow { name: "Venus",   mass: 4.87e24,   radius: 6.0518, render_radius: PLANET_RENDER_RADIUS, color: 0xff0000, aphelion: 0.728,  perihelion: 0.718,   inclination: 3.39,  period: 0.615, eccentricity: 0.007 },
    PlanetRow { name: "Earth",   mass: 5.97e24,   radius: 6.371,  render_radius: EARTH_RENDER_RADIUS,  color: 0x0000ff, aphelion: 1.0,    perihelion: 1.0,     inclination: 0.0,   period: 1.0,   eccentricity: 0.017 },
    PlanetRow { name: "Mars",    mass: 6.42e23,   radius: 3.3895, render_radius: PLANET_RENDER_RADIUS, color: 0xff0000, aphelion: 1.666,  perihelion: 1.38,    inclination: 1.85,  period: 1.88,  eccentricity: 0.094 },
    PlanetRow { name: "Vesta",   mass: 2.589e20,  radius: 0.2627, render_radius: PLANET_RENDER_RADIUS, color: 0xf0f000, aphelion: 2.57,   perihelion: 2.15,    inclination: 5.58,  period: 3.6,   eccentricity: 0.09 },
    PlanetRow { name: "Pallas",  mass: 2.108e20,  radius: 0.2725, render_radius: PLANET_RENDER_RADIUS, color: 0xff00f0, aphelion: 3.41261, perihelion: 2.13061, inclination: 35.06, period: 4.6,   eccentricity: 0.2305 },
    PlanetRow { name: "Ceres",   mass: 8.958e20,  radius: 0.473,  render_radius: PLANET_RENDER_RADIUS, color: 0x00ff00, aphelion: 2.9773, perihelion: 2.5577,  inclination: 10.62, period: 4.6,   eccentricity: 0.08 },
    PlanetRow { name: "Jupiter", mass: 1.898e27,  radius: 69.911, render_radius: PLANET_RENDER_RADIUS, color: 0xff0000, aphelion: 5.46,   perihelion: 5.0,     inclination: 1.31,  period: 11.86, eccentricity: 0.049 },
    // Sidereal period; older tables list 457 years
    PlanetRow { name: "Saturn",  mass: 5.68e26,   radius: 58.232, render_radius: PLANET_RENDER_RADIUS, color: 0xff0000, aphelion: 9.01,   perihelion: 9.01,    inclination: 2.49,  period: 29.46, eccentricity: 0.057 },
    PlanetRow { name: "Uranus",  mass: 8.68e25,   radius: 25.362, render_radius: PLANET_RENDER_RADIUS, color: 0xff0000, aphelion: 20.1,   perihelion: 18.4,    inclination: 0.77,  period: 84.0,  eccentricity: 0.046 },
    PlanetRow { name: "Neptune", mass: 1.02e26,   radius: 24.622, render_radius: PLANET_RENDER_RADIUS, color: 0xf00f0f, aphelion: 30.33,  perihelion: 29.81,   inclination: 1.77,  period: 164.8, eccentricity: 0.011 },
    PlanetRow { name: "Pluto",   mass: 1.46e22,   radius: 1.188,  render_radius: PLANET_RENDER_RADIUS, color: 0x0000ff, aphelion: 49.3,   perihelion: 29.7,    inclination: 17.0,  period: 248.0, eccentricity: 0.244 },
];

/// The Sun, fixed at the origin, and every planet on its orbit.
pub fn solar_system() -> Result<Registry> {
    let mut registry = Registry::new();

    let sun = BodyInfo::new("Sun", SUN_MASS, SUN_RADIUS * 1.0e6, color_from_hex(SUN_COLOR))
        .with_render_radius(PLANET_RENDER_RADIUS);
    registry.add_fixed_body(sun, Vector3::zeros())?;

    for row in PLANETS {
        let color = color_from_hex(row.color);
        let info = BodyInfo::new(row.name, row.mass, row.radius * 1.0e6, color)
            .with_render_radius(row.render_radius);
        let elements = OrbitalElements::new(
            row.aphelion * AU,
            row.perihelion * AU,
            row.inclination,
            row.eccentricity,
            row.period,
        )?;
        registry.add_orbit_body(info, elements, Vector3::zeros())?;
    }

    Ok(registry)
}

/// The two probes launched at startup: one fast, one slow.
pub fn add_default_probes(registry: &mut Registry) -> Result<()> {
    registry.add_probe(
        "Probe1",
        Vector3::new(AU, 0.0, 0.0),
        Vector3::new(0.0, 0.0, 500_000.0),
        color_from_hex(0x00ff00),
    )?;
    registry.add_probe(
        "Probe2",
        Vector3::new(AU, AU, 0.0),
        Vector3::new(0.0, 0.0, 50_000.0),
        color_from_hex(0x0000ff),
    )?;
    Ok(())
}

/// Converts a 0xRRGGBB color into RGB components in [0, 1].
pub fn color_from_hex(rgb: u32) -> Point3<f32> {
    let r = (rgb >> 16) & 0xff;
    let g = (rgb >> 8) & 0xff;
    let b = rgb & 0xff;

    Point3::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
}
