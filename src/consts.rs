use std::f64::consts::PI;

/// One astronomical unit, in meters
pub const AU: f64 = 149_597_870_700.0;

/// One Julian year, in seconds. Orbital periods in the solar preset are in years.
pub const YEAR: f64 = 365.25 * 86400.0;

// Newton's gravitational constant, in N m^2 / kg^2
pub const NEWTON_G: f64 = 6.6743015e-11;

/// Ceiling on the magnitude of any single pairwise gravitational force, in N
pub const DEFAULT_FORCE_LIMIT: f64 = 1.0e6;

// Defaults for probes spawned at runtime
pub const PROBE_MASS: f64 = 500.0;
pub const PROBE_RADIUS: f64 = 30.0;

pub const TWO_PI: f64 = 2.0 * PI;
