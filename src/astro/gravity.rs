use nalgebra::Vector3;
use tracing::trace;

/// A gravity source as seen during one tick: where it is, and how heavy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMass {
    pub position: Vector3<f64>,
    pub mass: f64,
}

impl PointMass {
    pub fn new(position: Vector3<f64>, mass: f64) -> Self {
        PointMass { position, mass }
    }
}

/// Newtonian gravity from a snapshot of point masses, with each pairwise
/// magnitude capped at `force_limit`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityField {
    gravitational_constant: f64,
    force_limit: f64,
}

impl GravityField {
    pub fn new(gravitational_constant: f64, force_limit: f64) -> Self {
        GravityField {
            gravitational_constant,
            force_limit,
        }
    }

    pub fn gravitational_constant(&self) -> f64 {
        self.gravitational_constant
    }

    pub fn force_limit(&self) -> f64 {
        self.force_limit
    }

    /// Magnitude of the attraction between two masses `distance` apart,
    /// after clamping. `distance` must be positive.
    pub fn magnitude(&self, source_mass: f64, target_mass: f64, distance: f64) -> f64 {
        // Dividing twice keeps a zero numerator at zero when distance^2 underflows
        let magnitude =
            self.gravitational_constant * source_mass * target_mass / distance / distance;
        // Small separations can overflow to infinity; min() clamps that too.
        magnitude.min(self.force_limit)
    }

    /// Net force on a mass at `target_position`.
    ///
    /// Sources sitting exactly on the target are skipped, which also covers a
    /// body appearing in its own source list.
    pub fn force_on(
        &self,
        target_mass: f64,
        target_position: &Vector3<f64>,
        sources: &[PointMass],
    ) -> Vector3<f64> {
        let mut force = Vector3::zeros();
        for source in sources {
            let separation = source.position - target_position;
            // Rescale before taking the norm so tiny separations don't underflow
            let scale = separation.amax();
            if scale == 0.0 {
                continue;
            }
            let scaled = separation / scale;
            let distance = scale * scaled.norm();
            let direction = scaled.normalize();

            let magnitude = self.magnitude(source.mass, target_mass, distance);
            if magnitude == self.force_limit {
                trace!(distance, magnitude, "gravity clamped to force limit");
            }
            force += direction * magnitude;
        }
        force
    }
}
