//! Integration tests for the runtime loop contract: frame and fixed-tick
//! delivery, buffered commands, and config validation.

use louron_core::core::{App, AppControl, FrameCtx, TickCtx};
use louron_core::runtime::{Runtime, RuntimeConfig};

#[derive(Default)]
struct CountingApp {
    max_frames: u32,
    frames: u32,
    ticks: u32,
    tick_dts: Vec<f32>,
    tick_indices: Vec<u64>,
    frame_indices_match: bool,
}

impl CountingApp {
    fn until(max_frames: u32) -> Self {
        Self {
            max_frames,
            frame_indices_match: true,
            ..Self::default()
        }
    }
}

impl App for CountingApp {
    fn on_fixed_update(&mut self, ctx: &mut TickCtx<'_>) {
        self.ticks += 1;
        self.tick_dts.push(ctx.dt);
        self.tick_indices.push(ctx.tick_index);
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        if ctx.time.frame_index != u64::from(self.frames) {
            self.frame_indices_match = false;
        }
        self.frames += 1;
        if self.frames >= self.max_frames {
            AppControl::Exit
        } else {
            AppControl::Continue
        }
    }
}

#[test]
fn runs_until_exit_and_counts_frames() {
    let mut app = CountingApp::until(50);
    Runtime::run(RuntimeConfig::default(), &mut app).unwrap();
    assert_eq!(app.frames, 50);
    assert!(app.frame_indices_match);
}

#[test]
fn fixed_ticks_run_at_the_configured_interval() {
    let mut app = CountingApp::until(30);
    let config = RuntimeConfig {
        target_hz: Some(120.0),
        ..RuntimeConfig::default()
    };
    // ~0.25s of wall time at 60 Hz fixed: at least a handful of ticks.
    Runtime::run(config, &mut app).unwrap();
    assert!(app.ticks >= 1, "expected fixed ticks, got none");
    assert!(app.tick_dts.iter().all(|&dt| dt == 1.0 / 60.0));
    let sequential = app
        .tick_indices
        .iter()
        .enumerate()
        .all(|(i, &idx)| idx == i as u64);
    assert!(sequential, "tick indices not sequential: {:?}", app.tick_indices);
}

struct PausingApp {
    frames: u32,
    pause_seen: bool,
    scaled_dt_nonzero_while_paused: bool,
    ticks_while_paused: u32,
}

impl App for PausingApp {
    fn on_fixed_update(&mut self, ctx: &mut TickCtx<'_>) {
        if self.pause_seen && ctx.clock.time_scale() == 0.0 {
            self.ticks_while_paused += 1;
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        self.frames += 1;

        if self.frames == 1 {
            // Applied after this frame returns.
            ctx.runtime.set_time_scale(0.0);
            assert_eq!(ctx.clock.time_scale(), 1.0);
        } else {
            self.pause_seen = ctx.clock.time_scale() == 0.0;
            assert!(self.pause_seen, "buffered time scale was not applied");
            if ctx.time.dt != 0.0 {
                self.scaled_dt_nonzero_while_paused = true;
            }
        }

        if self.frames >= 20 {
            AppControl::Exit
        } else {
            AppControl::Continue
        }
    }
}

#[test]
fn buffered_time_scale_pauses_scaled_time_and_fixed_ticks() {
    let mut app = PausingApp {
        frames: 0,
        pause_seen: false,
        scaled_dt_nonzero_while_paused: false,
        ticks_while_paused: 0,
    };
    let config = RuntimeConfig {
        target_hz: Some(240.0),
        ..RuntimeConfig::default()
    };
    Runtime::run(config, &mut app).unwrap();
    assert!(app.pause_seen);
    assert!(!app.scaled_dt_nonzero_while_paused);
    assert_eq!(app.ticks_while_paused, 0);
}

struct ExitingApp {
    frames: u32,
}

impl App for ExitingApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        self.frames += 1;
        if self.frames == 3 {
            ctx.runtime.exit();
        }
        AppControl::Continue
    }
}

#[test]
fn exit_command_stops_the_loop() {
    let mut app = ExitingApp { frames: 0 };
    Runtime::run(RuntimeConfig::default(), &mut app).unwrap();
    assert_eq!(app.frames, 3);
}

#[test]
fn invalid_config_is_rejected_before_the_first_frame() {
    for config in [
        RuntimeConfig {
            target_hz: Some(0.0),
            ..RuntimeConfig::default()
        },
        RuntimeConfig {
            target_hz: Some(-30.0),
            ..RuntimeConfig::default()
        },
        RuntimeConfig {
            target_hz: Some(f32::NAN),
            ..RuntimeConfig::default()
        },
        RuntimeConfig {
            target_hz: None,
            max_catch_up_steps: 0,
        },
    ] {
        let mut app = CountingApp::until(1);
        let result = Runtime::run(config, &mut app);
        assert!(result.is_err());
        assert_eq!(app.frames, 0);
    }
}
