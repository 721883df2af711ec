use tracing::{debug, info};

use crate::config::{validate_time_scale, EngineConfig};
use crate::error::{Error, Result};

/// How far one call to the clock moved simulated time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Simulated seconds elapsed during this tick
    pub dt_sim: f64,
    /// Simulated seconds since the epoch, after this tick
    pub t_sim: f64,
}

/// Converts wall-clock time into simulated time.
///
/// Simulated time is the integral of `time_scale` over unpaused wall time, so
/// a new time scale only changes how fast time runs from then on.
#[derive(Debug, Clone)]
pub struct SimulationClock {
    epoch_start: f64,
    last_tick: f64,
    sim_time: f64,
    time_scale: f64,
    paused: bool,
}

impl SimulationClock {
    /// A running clock at real-time speed, with `t_sim = 0` at wall time
    /// `epoch_start`.
    pub fn new(epoch_start: f64) -> Self {
        SimulationClock {
            epoch_start,
            last_tick: epoch_start,
            sim_time: 0.0,
            time_scale: 1.0,
            paused: false,
        }
    }

    pub fn from_config(config: &EngineConfig, epoch_start: f64) -> Result<Self> {
        let mut clock = Self::new(epoch_start);
        clock.set_time_scale(config.time_scale)?;
        clock.paused = config.paused;
        Ok(clock)
    }

    /// Moves the clock to wall time `now`.
    pub fn advance(&mut self, now: f64) -> Result<Tick> {
        let dt_wall = now - self.last_tick;
        // Also catches a NaN `now`
        if !(dt_wall >= 0.0) {
            return Err(Error::NegativeTick(dt_wall));
        }
        self.last_tick = now;

        let dt_sim = if self.paused {
            0.0
        } else {
            self.time_scale * dt_wall
        };
        self.sim_time += dt_sim;

        Ok(Tick {
            dt_sim,
            t_sim: self.sim_time,
        })
    }

    /// Moves the clock forward by `dt_wall` wall-clock seconds.
    pub fn advance_by(&mut self, dt_wall: f64) -> Result<Tick> {
        if !(dt_wall >= 0.0) {
            return Err(Error::NegativeTick(dt_wall));
        }
        self.advance(self.last_tick + dt_wall)
    }

    pub fn set_time_scale(&mut self, scale: f64) -> Result<()> {
        validate_time_scale(scale)?;
        if scale != self.time_scale {
            info!(from = self.time_scale, to = scale, "time scale changed");
        }
        self.time_scale = scale;
        Ok(())
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn pause(&mut self) {
        if !self.paused {
            debug!(t_sim = self.sim_time, "clock paused");
        }
        self.paused = true;
    }

    pub fn resume(&mut self) {
        if self.paused {
            debug!(t_sim = self.sim_time, "clock resumed");
        }
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume()
        } else {
            self.pause()
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    pub fn epoch_start(&self) -> f64 {
        self.epoch_start
    }

    pub fn last_tick(&self) -> f64 {
        self.last_tick
    }
}
