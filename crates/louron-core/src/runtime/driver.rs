use std::time::Duration;

use anyhow::{Result, ensure};

use crate::core::{App, AppControl, FrameCtx, TickCtx};
use crate::time::{FixedStep, FrameClock};

/// Runtime loop configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Target frame rate. The loop sleeps away the unused remainder of each
    /// frame budget; `None` runs uncapped.
    pub target_hz: Option<f32>,

    /// Upper bound on fixed ticks run in a single frame before the backlog
    /// is shed.
    pub max_catch_up_steps: u32,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            target_hz: None,
            max_catch_up_steps: 8,
        }
    }
}

/// Runtime context passed to the application.
///
/// Commands are buffered and applied after the current callback returns, so
/// apps can request clock changes while the runtime still holds the clock.
#[derive(Default)]
pub struct RuntimeCtx {
    commands: Vec<Command>,
}

impl RuntimeCtx {
    /// Requests a new time scale, applied before the next frame.
    pub fn set_time_scale(&mut self, scale: f32) {
        self.commands.push(Command::SetTimeScale(scale));
    }

    /// Requests a new fixed-tick interval, applied before the next frame.
    /// Subject to the clock's validation of the interval.
    pub fn set_fixed_delta_time(&mut self, interval: f32) {
        self.commands.push(Command::SetFixedDeltaTime(interval));
    }

    /// Requests loop exit at the end of the current frame.
    pub fn exit(&mut self) {
        self.commands.push(Command::Exit);
    }
}

enum Command {
    SetTimeScale(f32),
    SetFixedDeltaTime(f32),
    Exit,
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Drives `app` until it returns [`AppControl::Exit`] or requests exit
    /// through [`RuntimeCtx`].
    ///
    /// Per iteration: tick the clock, run the fixed ticks now due, call
    /// `on_frame`, apply buffered commands, then pace to the target rate.
    pub fn run<A>(config: RuntimeConfig, mut app: A) -> Result<()>
    where
        A: App,
    {
        if let Some(hz) = config.target_hz {
            ensure!(
                hz.is_finite() && hz > 0.0,
                "target_hz must be positive and finite, got {hz}"
            );
        }
        ensure!(
            config.max_catch_up_steps > 0,
            "max_catch_up_steps must be at least 1"
        );

        let frame_budget = config
            .target_hz
            .map(|hz| Duration::from_secs_f64(1.0 / f64::from(hz)));

        let mut clock = FrameClock::new();
        let mut stepper = FixedStep::new(config.max_catch_up_steps);

        log::debug!(
            "runtime started: target {:?} Hz, fixed {} Hz",
            config.target_hz,
            clock.unscaled_fixed_updates_hz()
        );

        loop {
            let time = clock.tick();

            // Scaled delta against the unscaled interval: every tick advances
            // the simulation by exactly one fixed interval of game time, and
            // a zero time scale produces no ticks at all.
            let interval = clock.unscaled_fixed_delta_time();
            let steps = stepper.advance(time.dt, interval);
            let first_tick = stepper.total_steps() - u64::from(steps);

            for i in 0..steps {
                let mut ctx = TickCtx {
                    clock: &clock,
                    dt: interval,
                    tick_index: first_tick + u64::from(i),
                };
                app.on_fixed_update(&mut ctx);
            }

            let mut runtime_ctx = RuntimeCtx::default();
            let control = {
                let mut ctx = FrameCtx {
                    clock: &clock,
                    time,
                    fixed_steps: steps,
                    alpha: stepper.alpha(interval),
                    runtime: &mut runtime_ctx,
                };
                app.on_frame(&mut ctx)
            };

            if control == AppControl::Exit {
                runtime_ctx.exit();
            }
            if apply_commands(runtime_ctx, &mut clock) {
                log::debug!(
                    "runtime stopped after {} frames, {} fixed ticks",
                    clock.frame_index(),
                    stepper.total_steps()
                );
                return Ok(());
            }

            if let Some(budget) = frame_budget {
                let spent = time.now.elapsed();
                if spent < budget {
                    std::thread::sleep(budget - spent);
                }
            }
        }
    }
}

/// Applies buffered commands to the clock; returns whether exit was requested.
fn apply_commands(mut ctx: RuntimeCtx, clock: &mut FrameClock) -> bool {
    let mut exit = false;
    for cmd in ctx.commands.drain(..) {
        match cmd {
            Command::SetTimeScale(scale) => clock.set_time_scale(scale),
            Command::SetFixedDeltaTime(interval) => clock.set_fixed_delta_time(interval),
            Command::Exit => exit = true,
        }
    }
    exit
}
