//! Engine configuration.
//!
//! Every field has a default, so a config file only needs the values it wants
//! to change:
//!
//! ```toml
//! gravitational_constant = 6.6743015e-11
//! force_limit = 1.0e6
//! period_unit = 31557600.0   # periods given in years
//! time_scale = 1000.0
//! paused = false
//! ```

use serde::Deserialize;

use crate::consts::{DEFAULT_FORCE_LIMIT, NEWTON_G, YEAR};
use crate::error::{Error, Result};

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// G in F = G m1 m2 / r^2. Zero turns gravity off entirely.
    pub gravitational_constant: f64,
    /// Upper bound on the magnitude of each pairwise force
    pub force_limit: f64,
    /// Simulated seconds in one unit of `OrbitalElements::period`
    pub period_unit: f64,
    /// Initial simulated seconds per wall-clock second
    pub time_scale: f64,
    /// Whether the clock starts out paused
    pub paused: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            gravitational_constant: NEWTON_G,
            force_limit: DEFAULT_FORCE_LIMIT,
            period_unit: 1.0,
            time_scale: 1.0,
            paused: false,
        }
    }
}

impl EngineConfig {
    /// Defaults for the solar system preset, whose periods are in years.
    pub fn solar() -> Self {
        EngineConfig {
            period_unit: YEAR,
            ..Self::default()
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let g = self.gravitational_constant;
        if !g.is_finite() || g < 0.0 {
            return Err(Error::InvalidGravitationalConstant(g));
        }
        if !(self.force_limit > 0.0 && self.force_limit.is_finite()) {
            return Err(Error::InvalidForceLimit(self.force_limit));
        }
        if !(self.period_unit > 0.0 && self.period_unit.is_finite()) {
            return Err(Error::InvalidPeriodUnit(self.period_unit));
        }
        validate_time_scale(self.time_scale)
    }
}

pub(crate) fn validate_time_scale(scale: f64) -> Result<()> {
    if scale > 0.0 && scale.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidTimeScale(scale))
    }
}
