use std::fmt;

use nalgebra::Vector3;

use crate::consts::AU;
use crate::model::registry::Body;

/// Human-scale readout of where a body is and how fast it is going.
#[derive(Debug, Clone, PartialEq)]
pub struct Telemetry {
    pub name: String,
    pub position_au: Vector3<f64>,
    pub distance_au: f64,
    pub velocity_km_s: Vector3<f64>,
    pub speed_km_s: f64,
}

impl Telemetry {
    pub fn of(body: &Body) -> Self {
        let position_au = body.position() / AU;
        let velocity_km_s = body.velocity() / 1000.0;
        Telemetry {
            name: body.info.name.clone(),
            distance_au: position_au.norm(),
            position_au,
            speed_km_s: velocity_km_s.norm(),
            velocity_km_s,
        }
    }
}

impl fmt::Display for Telemetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.position_au;
        let v = &self.velocity_km_s;
        writeln!(f, "{}", self.name)?;
        writeln!(
            f,
            "  position: ({:.2}, {:.2}, {:.2}) AU, |r| = {:.2} AU",
            p.x, p.y, p.z, self.distance_au
        )?;
        write!(
            f,
            "  velocity: ({:.5}, {:.5}, {:.5}) km/s, |v| = {:.5} km/s",
            v.x, v.y, v.z, self.speed_km_s
        )
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::Point3;

    use super::*;
    use crate::astro::FreeState;
    use crate::model::registry::{BodyID, BodyInfo, Motion};

    #[test]
    fn test_units() {
        let body = Body {
            id: BodyID(0),
            info: BodyInfo::new("Probe", 500.0, 30.0, Point3::new(0.0, 1.0, 0.0)),
            motion: Motion::Integrated(FreeState::new(
                Vector3::new(3.0 * AU, 4.0 * AU, 0.0),
                Vector3::new(0.0, 0.0, 50_000.0),
            )),
        };
        let telemetry = Telemetry::of(&body);
        approx::assert_relative_eq!(telemetry.position_au, Vector3::new(3.0, 4.0, 0.0));
        approx::assert_relative_eq!(telemetry.distance_au, 5.0);
        approx::assert_relative_eq!(telemetry.velocity_km_s, Vector3::new(0.0, 0.0, 50.0));
        approx::assert_relative_eq!(telemetry.speed_km_s, 50.0);

        let text = telemetry.to_string();
        assert!(text.starts_with("Probe\n"));
        assert!(text.contains("|r| = 5.00 AU"));
        assert!(text.contains("|v| = 50.00000 km/s"));
    }
}
