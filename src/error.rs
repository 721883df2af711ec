//! Error types for the simulation engine

use thiserror::Error;

use crate::model::registry::BodyID;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by registration, configuration, and tick input.
///
/// Degenerate geometry during a tick (two bodies at the same point) is not an
/// error; the gravity field skips that pair.
#[derive(Error, Debug)]
pub enum Error {
    #[error("body {name:?} has non-positive mass {mass}")]
    NonPositiveMass { name: String, mass: f64 },

    #[error("body {name:?} has invalid radius {radius}")]
    InvalidRadius { name: String, radius: f64 },

    #[error("eccentricity {0} is outside [0, 1)")]
    InvalidEccentricity(f64),

    #[error("invalid apsides: aphelion {aphelion} and perihelion {perihelion}")]
    InvalidApsides { aphelion: f64, perihelion: f64 },

    #[error("orbital period must be positive, got {0}")]
    NonPositivePeriod(f64),

    #[error("inclination must be finite, got {0}")]
    InvalidInclination(f64),

    #[error("time scale must be positive, got {0}")]
    InvalidTimeScale(f64),

    #[error("force limit must be positive, got {0}")]
    InvalidForceLimit(f64),

    #[error("period unit must be positive, got {0}")]
    InvalidPeriodUnit(f64),

    #[error("gravitational constant must be finite and non-negative, got {0}")]
    InvalidGravitationalConstant(f64),

    #[error("a body named {0:?} is already registered")]
    DuplicateName(String),

    #[error("no body with id {0}")]
    UnknownBody(BodyID),

    #[error("no body named {0:?}")]
    UnknownName(String),

    #[error("body {0} is not a free body")]
    NotAFreeBody(BodyID),

    #[error("tick would move time backwards by {0}")]
    NegativeTick(f64),

    #[error("malformed configuration: {0}")]
    Config(#[from] toml::de::Error),
}
