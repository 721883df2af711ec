use crate::error::{Error, Result};

/// The shape of a prescribed orbit around the origin.
///
/// Distances are in meters, inclination in degrees, and the period in whatever
/// unit the engine's `period_unit` says.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    aphelion: f64,
    perihelion: f64,
    inclination: f64,
    eccentricity: f64,
    period: f64,
}

impl OrbitalElements {
    pub fn new(
        aphelion: f64,
        perihelion: f64,
        inclination: f64,
        eccentricity: f64,
        period: f64,
    ) -> Result<Self> {
        // Written so that NaNs fall into the error branches
        if !(perihelion >= 0.0 && aphelion >= perihelion && aphelion.is_finite()) {
            return Err(Error::InvalidApsides {
                aphelion,
                perihelion,
            });
        }
        if !(0.0..1.0).contains(&eccentricity) {
            return Err(Error::InvalidEccentricity(eccentricity));
        }
        if !(period > 0.0 && period.is_finite()) {
            return Err(Error::NonPositivePeriod(period));
        }
        if !inclination.is_finite() {
            return Err(Error::InvalidInclination(inclination));
        }

        Ok(OrbitalElements {
            aphelion,
            perihelion,
            inclination,
            eccentricity,
            period,
        })
    }

    /// A circle of the given radius in the reference plane.
    pub fn circular(radius: f64, period: f64) -> Result<Self> {
        Self::new(radius, radius, 0.0, 0.0, period)
    }

    pub fn aphelion(&self) -> f64 {
        self.aphelion
    }

    pub fn perihelion(&self) -> f64 {
        self.perihelion
    }

    /// Inclination in degrees
    pub fn inclination(&self) -> f64 {
        self.inclination
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    pub fn semimajor_axis(&self) -> f64 {
        (self.aphelion + self.perihelion) / 2.0
    }

    pub fn semiminor_axis(&self) -> f64 {
        let e = self.eccentricity;
        self.semimajor_axis() * (1.0 - e * e).sqrt()
    }

    /// Shift along z that moves the ellipse so its focus, rather than its
    /// center, sits at the origin.
    pub fn focus_offset(&self) -> f64 {
        self.aphelion - self.perihelion
    }
}
