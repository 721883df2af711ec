use nalgebra::Vector3;

use super::elements::OrbitalElements;
use crate::consts::TWO_PI;

/// Places bodies on their prescribed ellipses as a function of simulated time.
///
/// The evaluator holds a single constant: how many radians the orbital phase
/// advances per simulated second for an orbit of period one. Every angle it
/// computes goes through that constant, so phase and period always agree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerianEvaluator {
    radians_per_time: f64,
}

impl KeplerianEvaluator {
    /// `period_unit` is the number of simulated seconds in one unit of
    /// `OrbitalElements::period`. Must be positive.
    pub fn new(period_unit: f64) -> Self {
        KeplerianEvaluator {
            radians_per_time: TWO_PI / period_unit,
        }
    }

    pub fn radians_per_time(&self) -> f64 {
        self.radians_per_time
    }

    /// Phase angle (radians) of the orbit at simulated time `time`.
    pub fn angle_at(&self, elements: &OrbitalElements, time: f64) -> f64 {
        self.radians_per_time * time / elements.period()
    }

    /// Position of a body on this orbit, relative to the attracting focus.
    pub fn position_at(&self, elements: &OrbitalElements, time: f64) -> Vector3<f64> {
        let angle = self.angle_at(elements, time);

        // In-plane ellipse, centered
        let x = elements.semimajor_axis() * angle.cos();
        let y = elements.semiminor_axis() * angle.sin();

        // Tilt the plane about the line of nodes, then shift the focus to the origin
        let (sin_i, cos_i) = elements.inclination().to_radians().sin_cos();
        Vector3::new(x * cos_i, x * sin_i, y + elements.focus_offset())
    }

    /// Backward finite-difference velocity over the last `delta` seconds.
    ///
    /// This is a display quantity only; nothing dynamical should consume it.
    /// Returns zero when `delta` is not positive.
    pub fn velocity_at(&self, elements: &OrbitalElements, time: f64, delta: f64) -> Vector3<f64> {
        if delta <= 0.0 {
            return Vector3::zeros();
        }
        (self.position_at(elements, time) - self.position_at(elements, time - delta)) / delta
    }
}
