pub mod clock;
pub mod engine;
pub mod registry;

pub use clock::{SimulationClock, Tick};
pub use engine::Engine;
pub use registry::{Body, BodyID, BodyInfo, Motion, OrbitMotion, Registry};
