//! Louron sandbox: a scripted schedule of headless demo scenes driven by the
//! engine's frame clock.
//!
//! Usage: `louron-sandbox [scene] [duration-seconds]` where `scene` is one of
//! `cube-wave`, `orbit`, `ballistics` or `all` (default), and the duration is
//! unscaled seconds per scene (default 4).

use anyhow::{Context, Result, bail, ensure};
use louron_core::logging::{LoggingConfig, init_logging};
use louron_core::runtime::{Runtime, RuntimeConfig};

mod scenes;

use scenes::{Ballistics, CubeWave, OrbitCamera, SandboxApp, Scene};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut args = std::env::args().skip(1);
    let selection = args.next().unwrap_or_else(|| "all".to_string());
    let duration: f32 = match args.next() {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("duration must be a number of seconds, got '{raw}'"))?,
        None => 4.0,
    };
    ensure!(
        duration.is_finite() && duration > 0.0,
        "duration must be positive, got {duration}"
    );

    let schedule = build_schedule(&selection, duration)?;
    log::info!(
        "sandbox: {} scene(s), {duration:.1}s each",
        schedule.len()
    );

    let config = RuntimeConfig {
        target_hz: Some(120.0),
        ..RuntimeConfig::default()
    };
    Runtime::run(config, SandboxApp::new(schedule))
}

fn build_schedule(selection: &str, duration: f32) -> Result<Vec<Box<dyn Scene>>> {
    let schedule: Vec<Box<dyn Scene>> = match selection {
        "all" => vec![
            Box::new(CubeWave::new(duration)),
            Box::new(OrbitCamera::new(duration)),
            Box::new(Ballistics::new(duration)),
        ],
        "cube-wave" => vec![Box::new(CubeWave::new(duration))],
        "orbit" => vec![Box::new(OrbitCamera::new(duration))],
        "ballistics" => vec![Box::new(Ballistics::new(duration))],
        other => bail!("unknown scene '{other}' (expected cube-wave, orbit, ballistics or all)"),
    };
    Ok(schedule)
}
