use std::fs;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{self, eyre, WrapErr};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use orrery_sim::presets::{add_default_probes, solar_system};
use orrery_sim::{Engine, EngineConfig};

/// Runs the solar system headless and prints telemetry at the end.
#[derive(Debug, Parser)]
struct Args {
    /// TOML file overriding the engine settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of ticks to run
    #[arg(short, long, default_value_t = 600)]
    ticks: usize,

    /// Wall-clock seconds per tick
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f64,

    /// Simulated seconds per wall-clock second
    #[arg(short = 's', long)]
    time_scale: Option<f64>,

    /// Don't launch the default probes
    #[arg(long)]
    no_probes: bool,

    /// Bodies to report on; defaults to every free body
    #[arg(short, long = "body")]
    bodies: Vec<String>,
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .wrap_err_with(|| format!("reading {}", path.display()))?;
            EngineConfig::from_toml_str(&text)?
        }
        None => EngineConfig::solar(),
    };

    let mut registry = solar_system()?;
    if !args.no_probes {
        add_default_probes(&mut registry)?;
    }

    let mut engine = Engine::with_registry(config, registry)?;
    let mut clock = engine.clock(0.0)?;
    if let Some(scale) = args.time_scale {
        clock.set_time_scale(scale)?;
    }

    for _ in 0..args.ticks {
        engine.advance(&mut clock, args.dt)?;
    }
    println!(
        "Simulated {:.1} days over {} ticks",
        clock.sim_time() / 86400.0,
        args.ticks
    );

    let names: Vec<String> = if args.bodies.is_empty() {
        let mut free: Vec<_> = engine.registry().free_bodies().collect();
        free.sort_by_key(|b| b.id);
        free.into_iter().map(|b| b.info.name.clone()).collect()
    } else {
        args.bodies.clone()
    };
    if names.is_empty() {
        return Err(eyre!("nothing to report; pass --body NAME"));
    }

    for name in &names {
        println!("{}", engine.telemetry_by_name(name)?);
    }

    Ok(())
}
