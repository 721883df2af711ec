pub mod astro;
pub mod config;
pub mod consts;
pub mod error;
pub mod model;
pub mod presets;
pub mod telemetry;

pub use config::EngineConfig;
pub use error::{Error, Result};
pub use model::{BodyID, BodyInfo, Engine, SimulationClock, Tick};
