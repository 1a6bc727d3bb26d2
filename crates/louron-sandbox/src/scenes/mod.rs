//! Headless demo scenes.
//!
//! Each scene is pure math driven by the engine clock: per-frame motion
//! scaled by delta time, deterministic simulation in fixed updates, and
//! scripted time-scale changes. `SandboxApp` runs them back to back.

mod ballistics;
mod cube_wave;
mod orbit_camera;

pub use ballistics::Ballistics;
pub use cube_wave::CubeWave;
pub use orbit_camera::OrbitCamera;

use louron_core::core::{App, AppControl, FrameCtx, TickCtx};

/// A demo scene in the sandbox schedule.
pub trait Scene {
    fn name(&self) -> &'static str;

    /// Unscaled seconds the scene runs before the schedule advances.
    fn duration(&self) -> f32;

    fn on_fixed_update(&mut self, ctx: &mut TickCtx<'_>) {
        let _ = ctx;
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>);

    /// One-line result logged when the scene ends.
    fn summary(&self) -> String;
}

/// Runs a schedule of scenes, then exits.
pub struct SandboxApp {
    schedule: Vec<Box<dyn Scene>>,
    current: usize,
    elapsed: f32,
    announced: bool,
}

impl SandboxApp {
    pub fn new(schedule: Vec<Box<dyn Scene>>) -> Self {
        Self {
            schedule,
            current: 0,
            elapsed: 0.0,
            announced: false,
        }
    }
}

impl App for SandboxApp {
    fn on_fixed_update(&mut self, ctx: &mut TickCtx<'_>) {
        if let Some(scene) = self.schedule.get_mut(self.current) {
            scene.on_fixed_update(ctx);
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        let Some(scene) = self.schedule.get_mut(self.current) else {
            return AppControl::Exit;
        };

        if !self.announced {
            log::info!("scene start: {}", scene.name());
            self.announced = true;
        }

        // Scenes end on unscaled time so a scripted pause cannot stall the
        // schedule.
        self.elapsed += ctx.time.unscaled_dt;
        scene.on_frame(ctx);

        if self.elapsed >= scene.duration() {
            log::info!("scene end: {}: {}", scene.name(), scene.summary());
            // A scene may leave a scripted time scale behind.
            ctx.runtime.set_time_scale(1.0);
            self.current += 1;
            self.elapsed = 0.0;
            self.announced = false;
            if self.current == self.schedule.len() {
                return AppControl::Exit;
            }
        }

        AppControl::Continue
    }
}
