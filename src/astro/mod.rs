//! The physics of the simulation, free of any bookkeeping.
//!
//! - [OrbitalElements] and [KeplerianEvaluator] place orbit-bound bodies as a
//!   pure function of simulated time.
//! - [GravityField] sums the (clamped) Newtonian pull of a snapshot of
//!   [PointMass]es.
//! - [FreeBodyIntegrator] moves a [FreeState] forward under that pull.

mod elements;
mod gravity;
mod integrator;
mod kepler;

pub use elements::OrbitalElements;
pub use gravity::{GravityField, PointMass};
pub use integrator::{FreeBodyIntegrator, FreeState};
pub use kepler::KeplerianEvaluator;
